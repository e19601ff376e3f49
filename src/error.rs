//! # 统一错误处理模块
//!
//! 定义 perovskite-bands 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum BandError {
    // ─────────────────────────────────────────────────────────────
    // 物理模型错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid geometry: bond length {bond_length} Å, angle {angle_deg}° (bond length must be finite and > 0)")]
    InvalidGeometry { bond_length: f64, angle_deg: f64 },

    #[error("Invalid k-point #{index}: ({}, {}, {}) has a non-finite component", .components[0], .components[1], .components[2])]
    InvalidKPoint { index: usize, components: [f64; 3] },

    #[error("Solver '{solver}' cannot diagonalize a {dim}x{dim} matrix")]
    UnsupportedDimension { solver: &'static str, dim: usize },

    #[error("Matrix is not symmetric: {0}")]
    NonSymmetricMatrix(String),

    #[error("Eigensolver did not converge after {sweeps} sweeps")]
    NotConverged { sweeps: usize },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 配置与参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse config file: {path}\nReason: {reason}")]
    ConfigParseError { path: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate scenario label: '{0}'")]
    DuplicateScenario(String),

    // ─────────────────────────────────────────────────────────────
    // 导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Plot error: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BandError>;
