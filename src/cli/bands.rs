//! # bands 子命令 CLI 定义
//!
//! 场景来源（按优先级）：
//! 1. `--scenario LABEL:ANGLE:BOND`（可重复）
//! 2. `--config` 文件中的 `[[scenarios]]`
//! 3. 内置参考场景（180° 立方与 150° 倾斜）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/bands.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 本征值求解器
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum SolverKind {
    /// Closed-form 2x2 solution
    #[default]
    ClosedForm,
    /// Cyclic Jacobi rotations (any matrix size)
    Jacobi,
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverKind::ClosedForm => write!(f, "closed-form"),
            SolverKind::Jacobi => write!(f, "jacobi"),
        }
    }
}

/// 能带输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum BandOutputFormat {
    /// JSON records keyed by scenario label
    Json,
    /// CSV table, one row per k-point
    Csv,
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// TOML run file with [model] parameters and [[scenarios]]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scenario as LABEL:ANGLE:BOND (degrees, Å); repeatable, overrides config scenarios
    #[arg(short, long = "scenario", value_name = "LABEL:ANGLE:BOND")]
    pub scenarios: Vec<String>,

    /// B-site metal for command-line and built-in scenarios
    #[arg(short, long, default_value = "Ti")]
    pub metal: String,

    /// k-points per path segment (overrides config; default 50)
    #[arg(short, long)]
    pub points: Option<usize>,

    /// Output file
    #[arg(short, long, default_value = "band_structure.json")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<BandOutputFormat>,

    /// Skip writing the output file
    #[arg(long, default_value_t = false)]
    pub no_output: bool,

    /// Eigenvalue solver
    #[arg(long, value_enum, default_value_t = SolverKind::ClosedForm)]
    pub solver: SolverKind,

    /// Number of parallel jobs for k-point evaluation (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,
}
