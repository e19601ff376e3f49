//! # hopping 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/hopping.rs`

use clap::Args;
use std::path::PathBuf;

/// hopping 子命令参数
#[derive(Args, Debug)]
pub struct HoppingArgs {
    /// B-O bond length in Å
    #[arg(short = 'd', long, default_value_t = 1.96)]
    pub bond_length: f64,

    /// B-O-B bond angle in degrees
    #[arg(short, long, default_value_t = 180.0, allow_negative_numbers = true)]
    pub angle: f64,

    /// TOML run file providing [model] parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
