//! # kpath 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/kpath.rs`

use clap::Args;
use std::path::PathBuf;

/// kpath 子命令参数
#[derive(Args, Debug)]
pub struct KpathArgs {
    /// k-points per path segment
    #[arg(short, long, default_value_t = 50)]
    pub points: usize,

    /// Write the path to this CSV file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
