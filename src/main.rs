//! # perovskite-bands - 钙钛矿 B–O 网络能带工具
//!
//! 以键长与 B–O–B 键角为参数的两轨道（d, p）紧束缚模型。
//!
//! ## 子命令
//! - `bands`   - 场景能带结构计算与导出
//! - `hopping` - 单个键几何的跃迁积分
//! - `sweep`   - 键角扫描
//! - `kpath`   - 高对称 k 路径
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── tb/        (紧束缚计算引擎)
//!   │     └── models/    (数据模型与配置)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod tb;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
