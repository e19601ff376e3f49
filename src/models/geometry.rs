//! # 键几何与计算场景
//!
//! B–O 键的几何描述（键长、B–O–B 键角）以及一次能带计算所需的场景定义。
//!
//! ## 依赖关系
//! - 被 `tb/hopping.rs`, `tb/runner.rs` 使用
//! - 被 `models/config.rs` 用于反序列化 `[[scenarios]]`

use crate::error::{BandError, Result};

use serde::{Deserialize, Serialize};

/// 参考金属（未指定时使用）
pub const DEFAULT_METAL: &str = "Ti";

/// B–O 键几何
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    /// 键长 d（Å）
    pub bond_length: f64,
    /// B–O–B 键角 θ（度）
    pub angle_deg: f64,
}

impl Geometry {
    pub fn new(bond_length: f64, angle_deg: f64) -> Self {
        Geometry {
            bond_length,
            angle_deg,
        }
    }

    /// 键角是否位于 [0, 180] 内
    ///
    /// 超出范围的键角不会被拒绝，余弦公式照常适用。
    pub fn angle_in_range(&self) -> bool {
        (0.0..=180.0).contains(&self.angle_deg)
    }
}

/// 单个计算场景
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// 场景标签（结果以此为键）
    pub label: String,
    /// B–O–B 键角（度）
    pub angle_deg: f64,
    /// B–O 键长（Å）
    pub bond_length_angstrom: f64,
    /// B 位金属元素符号
    #[serde(default = "default_metal")]
    pub metal: String,
}

fn default_metal() -> String {
    DEFAULT_METAL.to_string()
}

impl Scenario {
    pub fn new(
        label: impl Into<String>,
        angle_deg: f64,
        bond_length_angstrom: f64,
        metal: impl Into<String>,
    ) -> Self {
        Scenario {
            label: label.into(),
            angle_deg,
            bond_length_angstrom,
            metal: metal.into(),
        }
    }

    /// 参考场景对：理想立方 (180°) 与倾斜畸变 (150°)
    pub fn reference_pair(metal: &str) -> Vec<Scenario> {
        vec![
            Scenario::new("Cubic (Ideal)", 180.0, 1.96, metal),
            Scenario::new("Distorted (Tilted)", 150.0, 1.96, metal),
        ]
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.bond_length_angstrom, self.angle_deg)
    }

    /// 解析命令行场景描述 `LABEL:ANGLE:BOND`
    ///
    /// 标签本身可以包含冒号，角度与键长取最后两段。
    pub fn parse_arg(arg: &str, metal: &str) -> Result<Scenario> {
        let mut parts = arg.rsplitn(3, ':');
        let bond = parts.next();
        let angle = parts.next();
        let label = parts.next();

        let (label, angle, bond) = match (label, angle, bond) {
            (Some(l), Some(a), Some(b)) if !l.trim().is_empty() => (l.trim(), a.trim(), b.trim()),
            _ => {
                return Err(BandError::InvalidArgument(format!(
                    "Invalid scenario '{}' (expected LABEL:ANGLE:BOND, e.g. 'Tilted:150:1.96')",
                    arg
                )))
            }
        };

        let angle: f64 = angle.parse().map_err(|_| {
            BandError::InvalidArgument(format!("Invalid angle '{}' in scenario '{}'", angle, arg))
        })?;
        let bond: f64 = bond.parse().map_err(|_| {
            BandError::InvalidArgument(format!(
                "Invalid bond length '{}' in scenario '{}'",
                bond, arg
            ))
        })?;

        Ok(Scenario::new(label, angle, bond, metal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg() {
        let s = Scenario::parse_arg("Tilted:150:1.96", "Mn").unwrap();
        assert_eq!(s.label, "Tilted");
        assert!((s.angle_deg - 150.0).abs() < 1e-12);
        assert!((s.bond_length_angstrom - 1.96).abs() < 1e-12);
        assert_eq!(s.metal, "Mn");
    }

    #[test]
    fn test_parse_arg_label_with_colon() {
        let s = Scenario::parse_arg("a:b:165:2.0", "Ti").unwrap();
        assert_eq!(s.label, "a:b");
        assert!((s.angle_deg - 165.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_arg_rejects_garbage() {
        assert!(Scenario::parse_arg("150:1.96", "Ti").is_err());
        assert!(Scenario::parse_arg("x:abc:1.96", "Ti").is_err());
        assert!(Scenario::parse_arg("x:150:", "Ti").is_err());
    }

    #[test]
    fn test_angle_in_range() {
        assert!(Geometry::new(1.96, 180.0).angle_in_range());
        assert!(Geometry::new(1.96, 0.0).angle_in_range());
        assert!(!Geometry::new(1.96, 200.0).angle_in_range());
        assert!(!Geometry::new(1.96, -5.0).angle_in_range());
    }

    #[test]
    fn test_reference_pair() {
        let pair = Scenario::reference_pair("Ti");
        assert_eq!(pair.len(), 2);
        assert_eq!(pair[0].label, "Cubic (Ideal)");
        assert_eq!(pair[1].geometry(), Geometry::new(1.96, 150.0));
    }
}
