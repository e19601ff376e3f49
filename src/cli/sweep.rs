//! # sweep 子命令 CLI 定义
//!
//! 在固定键长下扫描 B–O–B 键角。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use super::bands::SolverKind;

use clap::Args;
use std::path::PathBuf;

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// First angle in degrees
    #[arg(long, default_value_t = 180.0, allow_negative_numbers = true)]
    pub from: f64,

    /// Last angle in degrees (inclusive)
    #[arg(long, default_value_t = 140.0, allow_negative_numbers = true)]
    pub to: f64,

    /// Angle step in degrees (positive; direction follows --from/--to)
    #[arg(long, default_value_t = 5.0)]
    pub step: f64,

    /// B-O bond length in Å
    #[arg(short = 'd', long, default_value_t = 1.96)]
    pub bond_length: f64,

    /// B-site metal
    #[arg(short, long, default_value = "Ti")]
    pub metal: String,

    /// k-points per path segment (overrides config; default 50)
    #[arg(short, long)]
    pub points: Option<usize>,

    /// TOML run file providing [model] parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the sweep table to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Eigenvalue solver
    #[arg(long, value_enum, default_value_t = SolverKind::ClosedForm)]
    pub solver: SolverKind,

    /// Number of parallel jobs for k-point evaluation (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
