//! # 轨道参数
//!
//! 两轨道紧束缚模型的物理常数：氧 p 轨道能级、参考跃迁积分、参考键长，
//! 以及按金属元素查表的 d 轨道能级。
//!
//! ## 数据来源
//! Harrison, Electronic Structure and the Properties of Solids (Solid State Table)
//!
//! ## 依赖关系
//! - 被 `tb/hopping.rs`, `tb/hamiltonian.rs`, `tb/runner.rs` 使用
//! - 被 `models/config.rs` 从 TOML 中读取

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 氧 2p 轨道能级（eV）
pub const E_P: f64 = -6.0;
/// 参考键长处的 pdσ 跃迁积分（eV）
pub const V_PD_SIGMA_0: f64 = 2.2;
/// 参考 Ti–O 键长（Å）
pub const D0: f64 = 1.96;
/// 未知金属的 d 轨道能级（eV）
pub const DEFAULT_E_D: f64 = -2.0;

/// 轨道参数集
///
/// 显式构造后传入各计算组件，运行期间不可变。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbitalParameters {
    /// 氧 p 轨道能级 E_p（eV）
    pub e_p: f64,
    /// 参考 pdσ 跃迁积分 V0（eV）
    pub v_pd_sigma_0: f64,
    /// 参考键长 d0（Å）
    pub d0: f64,
    /// 未知金属的 E_d（eV）
    pub default_e_d: f64,
    /// 金属元素符号 → E_d（eV）
    pub metals: BTreeMap<String, f64>,
}

impl Default for OrbitalParameters {
    fn default() -> Self {
        let mut metals = BTreeMap::new();
        metals.insert("Ti".to_string(), -2.0);
        // Mn 的 d 能级更低
        metals.insert("Mn".to_string(), -4.0);

        OrbitalParameters {
            e_p: E_P,
            v_pd_sigma_0: V_PD_SIGMA_0,
            d0: D0,
            default_e_d: DEFAULT_E_D,
            metals,
        }
    }
}

impl OrbitalParameters {
    /// 查询金属的 d 轨道能级，未知元素回退到 `default_e_d`
    pub fn e_d(&self, metal: &str) -> f64 {
        self.metals
            .get(metal)
            .copied()
            .unwrap_or(self.default_e_d)
    }

    /// 元素是否在查找表中
    pub fn is_known_metal(&self, metal: &str) -> bool {
        self.metals.contains_key(metal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let params = OrbitalParameters::default();
        assert_eq!(params.e_d("Ti"), -2.0);
        assert_eq!(params.e_d("Mn"), -4.0);
        assert_eq!(params.e_p, -6.0);
        assert_eq!(params.v_pd_sigma_0, 2.2);
        assert_eq!(params.d0, 1.96);
    }

    #[test]
    fn test_unknown_metal_falls_back() {
        let params = OrbitalParameters::default();
        assert!(!params.is_known_metal("Zr"));
        assert_eq!(params.e_d("Zr"), DEFAULT_E_D);
    }

    #[test]
    fn test_custom_default_e_d() {
        let params = OrbitalParameters {
            default_e_d: -3.5,
            ..Default::default()
        };
        assert_eq!(params.e_d("Nb"), -3.5);
        assert_eq!(params.e_d("Ti"), -2.0);
    }
}
