//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `bands`: 计算场景能带结构并导出
//! - `hopping`: 计算单个键几何的跃迁积分
//! - `sweep`: 键角扫描，统计带宽与带隙
//! - `kpath`: 查看或导出高对称 k 路径
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: bands, hopping, sweep, kpath

pub mod bands;
pub mod hopping;
pub mod kpath;
pub mod sweep;

use clap::{Parser, Subcommand};

/// perovskite-bands - 钙钛矿两轨道紧束缚能带工具
#[derive(Parser)]
#[command(name = "perovskite-bands")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Two-orbital tight-binding band structure of perovskite B-O networks",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute band structures for geometry scenarios along Γ-X-M-Γ
    Bands(bands::BandsArgs),

    /// Evaluate the hopping integral for one bond geometry
    Hopping(hopping::HoppingArgs),

    /// Sweep the B-O-B angle and tabulate band width and band gap
    Sweep(sweep::SweepArgs),

    /// Print or export the high-symmetry k-path
    Kpath(kpath::KpathArgs),
}
