//! # 两轨道紧束缚哈密顿量
//!
//! 在给定 k 点构造 d–p 两能级模型的 2x2 实对称哈密顿量：
//!
//! ```text
//! | E_d          2t·f(k) |
//! | 2t·f(k)      E_p     |
//! ```
//! 其中 f(k) = cos(kx) + cos(ky) + cos(kz) 为简立方色散因子。
//!
//! ## 依赖关系
//! - 被 `tb/runner.rs` 调用
//! - 产出 `tb/eigen.rs` 的 SymmetricMatrix

use crate::error::{BandError, Result};
use crate::models::KPoint;
use crate::tb::eigen::SymmetricMatrix;

/// 简立方色散因子 f(k)
pub fn dispersion(k: &KPoint) -> f64 {
    k.kx.cos() + k.ky.cos() + k.kz.cos()
}

/// 哈密顿量构造器（在位能在构造时固定）
#[derive(Debug, Clone, Copy)]
pub struct HamiltonianBuilder {
    e_d: f64,
    e_p: f64,
}

impl HamiltonianBuilder {
    pub fn new(e_d: f64, e_p: f64) -> Self {
        Self { e_d, e_p }
    }

    /// 构造 k 点的哈密顿量
    ///
    /// `index` 仅用于错误报告（k 点在路径中的位置）。
    pub fn build(&self, index: usize, k: &KPoint, t: f64) -> Result<SymmetricMatrix> {
        if !k.is_finite() {
            return Err(BandError::InvalidKPoint {
                index,
                components: k.components(),
            });
        }

        let interaction = 2.0 * t * dispersion(k);
        SymmetricMatrix::new(2, vec![self.e_d, interaction, interaction, self.e_p])
    }
}
