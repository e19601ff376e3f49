//! # 高对称 k 路径
//!
//! 生成简立方倒格子中 Γ → X → M → Γ 的分段线性路径。
//!
//! 每段取 i/N (i = 0..N-1) 处的点，段端点只在段首出现一次；
//! 路径不闭合，最后一个点为 (π/N, π/N, 0)，不重复 Γ。
//!
//! ## 依赖关系
//! - 被 `tb/runner.rs`, `commands/` 使用
//! - 使用 `models/band.rs` 的 KPoint

use crate::models::KPoint;

use std::f64::consts::PI;

/// 路径上的高对称点标签
pub const HIGH_SYMMETRY_LABELS: [&str; 4] = ["Γ", "X", "M", "Γ"];

/// k 路径生成器
#[derive(Debug, Clone, Copy)]
pub struct KPathGenerator {
    points_per_segment: usize,
}

impl KPathGenerator {
    pub fn new(points_per_segment: usize) -> Self {
        Self { points_per_segment }
    }

    /// 路径总点数 3N
    pub fn len(&self) -> usize {
        3 * self.points_per_segment
    }

    /// 生成有序 k 点序列
    pub fn generate(&self) -> Vec<KPoint> {
        let n = self.points_per_segment;
        let mut path = Vec::with_capacity(self.len());

        // Γ (0,0,0) → X (π,0,0)
        for i in 0..n {
            let val = PI * (i as f64 / n as f64);
            path.push(KPoint::new(val, 0.0, 0.0));
        }

        // X (π,0,0) → M (π,π,0)
        for i in 0..n {
            let val = PI * (i as f64 / n as f64);
            path.push(KPoint::new(PI, val, 0.0));
        }

        // M (π,π,0) → Γ (0,0,0)
        for i in 0..n {
            let val = PI * (1.0 - i as f64 / n as f64);
            path.push(KPoint::new(val, val, 0.0));
        }

        path
    }

    /// 高对称点在路径中的索引及标签
    ///
    /// 末尾的 Γ 不在采样中，其位置为路径长度（开区间端点）。
    pub fn tick_positions(&self) -> Vec<(usize, &'static str)> {
        let n = self.points_per_segment;
        HIGH_SYMMETRY_LABELS
            .iter()
            .enumerate()
            .map(|(seg, label)| (seg * n, *label))
            .collect()
    }
}
