//! # 数据模型模块
//!
//! 定义键几何、轨道参数、能带与场景结果等数据模型。
//!
//! ## 依赖关系
//! - 被 `tb/` 和 `commands/` 使用
//! - 子模块: geometry, parameters, band, config

pub mod band;
pub mod config;
pub mod geometry;
pub mod parameters;

pub use band::{BandSample, BandStructure, HoppingResult, KPoint, ScenarioResult};
pub use config::RunConfig;
pub use geometry::{Geometry, Scenario};
pub use parameters::OrbitalParameters;
