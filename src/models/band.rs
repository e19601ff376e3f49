//! # 能带数据模型
//!
//! k 点、跃迁积分结果、能带采样与单个场景的完整结果。
//!
//! ## 依赖关系
//! - 被 `tb/` 所有子模块使用
//! - 被 `commands/` 用于打印汇总表

use crate::models::Geometry;

use serde::Serialize;

/// 倒空间中的 k 点（晶格单位，弧度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KPoint {
    pub kx: f64,
    pub ky: f64,
    pub kz: f64,
}

impl KPoint {
    pub fn new(kx: f64, ky: f64, kz: f64) -> Self {
        KPoint { kx, ky, kz }
    }

    pub fn components(&self) -> [f64; 3] {
        [self.kx, self.ky, self.kz]
    }

    pub fn is_finite(&self) -> bool {
        self.kx.is_finite() && self.ky.is_finite() && self.kz.is_finite()
    }
}

/// 跃迁积分计算结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoppingResult {
    /// 有效跃迁积分 t（eV）
    pub hopping_integral: f64,
    /// 角向重叠因子，位于 [0, 1]
    pub overlap_factor: f64,
    /// 仅经 Harrison 键长标度的跃迁幅度（eV）
    pub scaled_amplitude: f64,
}

/// 单个 k 点上的两条能带
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandSample {
    /// 价带（成键，p 型）
    pub valence: f64,
    /// 导带（反键，d 型）
    pub conduction: f64,
}

/// 沿 k 路径的能带结构，顺序与 k 路径一致
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BandStructure {
    pub samples: Vec<BandSample>,
}

impl BandStructure {
    pub fn new(samples: Vec<BandSample>) -> Self {
        BandStructure { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn valence(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.valence).collect()
    }

    pub fn conduction(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.conduction).collect()
    }

    /// 导带宽度 max(CB) - min(CB)
    pub fn band_width(&self) -> f64 {
        let (min, max) = self.samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), s| (lo.min(s.conduction), hi.max(s.conduction)),
        );
        if self.is_empty() {
            0.0
        } else {
            max - min
        }
    }

    /// 带隙 min(CB) - max(VB)，负值表示能带交叠，不截断
    pub fn band_gap(&self) -> f64 {
        let cb_min = self
            .samples
            .iter()
            .map(|s| s.conduction)
            .fold(f64::INFINITY, f64::min);
        let vb_max = self
            .samples
            .iter()
            .map(|s| s.valence)
            .fold(f64::NEG_INFINITY, f64::max);
        if self.is_empty() {
            0.0
        } else {
            cb_min - vb_max
        }
    }
}

/// 单个场景的完整计算结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub label: String,
    pub metal: String,
    pub geometry: Geometry,
    pub hopping: HoppingResult,
    pub bands: BandStructure,
    /// 导带宽度（eV，≥ 0）
    pub band_width: f64,
    /// 带隙（eV，可为负）
    pub band_gap: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(valence: f64, conduction: f64) -> BandSample {
        BandSample {
            valence,
            conduction,
        }
    }

    #[test]
    fn test_band_width_and_gap() {
        let bands = BandStructure::new(vec![sample(-5.0, 1.0), sample(-4.0, 3.0), sample(-6.0, 2.0)]);
        assert!((bands.band_width() - 2.0).abs() < 1e-12);
        assert!((bands.band_gap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_gap_is_kept() {
        // 价带顶高于导带底：交叠，带隙为负
        let bands = BandStructure::new(vec![sample(-1.0, 0.5), sample(1.0, 4.0)]);
        assert!((bands.band_gap() - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_split_bands_keep_order() {
        let bands = BandStructure::new(vec![sample(-3.0, 1.0), sample(-2.0, 2.0)]);
        assert_eq!(bands.valence(), vec![-3.0, -2.0]);
        assert_eq!(bands.conduction(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_kpoint_finite() {
        assert!(KPoint::new(0.0, 1.0, 2.0).is_finite());
        assert!(!KPoint::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!KPoint::new(0.0, 0.0, f64::INFINITY).is_finite());
    }
}
