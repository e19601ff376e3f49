//! # 跃迁积分模型
//!
//! 将 B–O 键几何转换为有效跃迁积分。
//!
//! ## 公式
//! - Harrison 键长标度: V(d) = V0 · (d0/d)^3.5
//! - 倾斜角: tilt = 180° - θ，角向因子 = |cos(tilt)|
//! - t = V(d) · 角向因子
//!
//! ## 依赖关系
//! - 被 `tb/runner.rs` 和 `commands/hopping.rs` 调用
//! - 使用 `models/parameters.rs` 的 V0, d0

use crate::error::{BandError, Result};
use crate::models::{Geometry, HoppingResult, OrbitalParameters};

/// Harrison 标度指数
pub const HARRISON_EXPONENT: f64 = 3.5;

/// 跃迁积分模型
#[derive(Debug, Clone, Copy)]
pub struct HoppingModel {
    /// 参考跃迁积分 V0（eV）
    v0: f64,
    /// 参考键长 d0（Å）
    d0: f64,
}

impl HoppingModel {
    pub fn new(params: &OrbitalParameters) -> Self {
        Self {
            v0: params.v_pd_sigma_0,
            d0: params.d0,
        }
    }

    /// 计算给定几何下的跃迁积分与角向重叠因子
    pub fn compute(&self, geometry: &Geometry) -> Result<HoppingResult> {
        let d = geometry.bond_length;
        // 非有限角度会让 t 变成 NaN，一并拒绝
        if !d.is_finite() || d <= 0.0 || !geometry.angle_deg.is_finite() {
            return Err(BandError::InvalidGeometry {
                bond_length: d,
                angle_deg: geometry.angle_deg,
            });
        }

        let scaled_amplitude = self.v0 * (self.d0 / d).powf(HARRISON_EXPONENT);

        let tilt = (180.0 - geometry.angle_deg).to_radians();
        let overlap_factor = tilt.cos().abs();

        Ok(HoppingResult {
            hopping_integral: scaled_amplitude * overlap_factor,
            overlap_factor,
            scaled_amplitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> HoppingModel {
        HoppingModel::new(&OrbitalParameters::default())
    }

    #[test]
    fn test_reference_geometry_is_unscaled() {
        let h = model().compute(&Geometry::new(1.96, 180.0)).unwrap();
        assert_eq!(h.overlap_factor, 1.0);
        assert_eq!(h.hopping_integral, 2.2);
    }

    #[test]
    fn test_linear_bond_full_overlap() {
        for d in [1.5, 1.96, 2.1, 3.0] {
            let h = model().compute(&Geometry::new(d, 180.0)).unwrap();
            assert_eq!(h.overlap_factor, 1.0);
        }
    }

    #[test]
    fn test_right_angle_no_overlap() {
        for d in [1.5, 1.96, 2.1] {
            let h = model().compute(&Geometry::new(d, 90.0)).unwrap();
            assert!(h.overlap_factor.abs() < 1e-12);
            assert!(h.hopping_integral.abs() < 1e-12);
        }
    }

    #[test]
    fn test_tilted_150() {
        let h = model().compute(&Geometry::new(1.96, 150.0)).unwrap();
        assert!((h.overlap_factor - 0.8660254).abs() < 1e-6);
        assert!((h.hopping_integral - 1.9053).abs() < 1e-4);
    }

    #[test]
    fn test_harrison_scaling() {
        // 键长拉长 → 跃迁减弱
        let short = model().compute(&Geometry::new(1.90, 180.0)).unwrap();
        let long = model().compute(&Geometry::new(2.05, 180.0)).unwrap();
        assert!(short.hopping_integral > 2.2);
        assert!(long.hopping_integral < 2.2);

        let expected = 2.2 * (1.96_f64 / 2.05).powf(3.5);
        assert!((long.scaled_amplitude - expected).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_angle_passes_through() {
        // 200° 与 160° 的倾斜角互为相反数，余弦相同
        let over = model().compute(&Geometry::new(1.96, 200.0)).unwrap();
        let under = model().compute(&Geometry::new(1.96, 160.0)).unwrap();
        assert!((over.overlap_factor - under.overlap_factor).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_bond_length() {
        for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = model().compute(&Geometry::new(d, 180.0));
            assert!(matches!(result, Err(BandError::InvalidGeometry { .. })));
        }
    }

    #[test]
    fn test_non_finite_angle() {
        let result = model().compute(&Geometry::new(1.96, f64::NAN));
        assert!(matches!(result, Err(BandError::InvalidGeometry { .. })));
    }
}
