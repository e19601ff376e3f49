//! # 运行配置文件
//!
//! 从 TOML 文件读取轨道参数、k 路径分辨率与场景列表。
//!
//! ## 文件格式
//! ```toml
//! points_per_segment = 50
//!
//! [model]
//! e_p = -6.0
//! v_pd_sigma_0 = 2.2
//! d0 = 1.96
//! default_e_d = -2.0
//!
//! [model.metals]
//! Ti = -2.0
//! Mn = -4.0
//!
//! [[scenarios]]
//! label = "Cubic (Ideal)"
//! angle_deg = 180.0
//! bond_length_angstrom = 1.96
//! metal = "Ti"
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs` 使用
//! - 使用 `serde` + `toml` 反序列化

use crate::error::{BandError, Result};
use crate::models::{OrbitalParameters, Scenario};

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// 参考实现使用的每段 k 点数
pub const DEFAULT_POINTS_PER_SEGMENT: usize = 50;

/// 运行配置
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default = "default_points_per_segment")]
    pub points_per_segment: usize,

    #[serde(default)]
    pub model: OrbitalParameters,

    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

fn default_points_per_segment() -> usize {
    DEFAULT_POINTS_PER_SEGMENT
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            points_per_segment: DEFAULT_POINTS_PER_SEGMENT,
            model: OrbitalParameters::default(),
            scenarios: Vec::new(),
        }
    }
}

impl RunConfig {
    /// 从文件读取配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BandError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            BandError::ConfigParseError { reason, .. } => BandError::ConfigParseError {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;

        Ok(config)
    }

    /// 从 TOML 字符串解析并校验配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RunConfig =
            toml::from_str(content).map_err(|e| BandError::ConfigParseError {
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        validate_points_per_segment(self.points_per_segment)?;
        check_unique_labels(&self.scenarios)
    }
}

/// k 路径每段至少一个点
pub fn validate_points_per_segment(points: usize) -> Result<()> {
    if points == 0 {
        return Err(BandError::InvalidArgument(
            "points_per_segment must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// 结果以标签为键，标签必须唯一
pub fn check_unique_labels(scenarios: &[Scenario]) -> Result<()> {
    let mut seen = HashSet::new();
    for scenario in scenarios {
        if !seen.insert(scenario.label.as_str()) {
            return Err(BandError::DuplicateScenario(scenario.label.clone()));
        }
    }
    Ok(())
}
