//! # 实对称矩阵本征值求解
//!
//! 定义通用的对称本征值求解接口，以及两种实现：
//! - `ClosedForm2x2`: 两能级模型的解析解
//! - `JacobiSolver`: 循环 Jacobi 旋转，适用于任意维度
//!
//! ## 2x2 解析解
//! 对 [[a, b], [b, c]]:
//! mean = (a+c)/2, half_gap = sqrt(((a-c)/2)² + b²)
//! λ1 = mean - half_gap, λ2 = mean + half_gap
//!
//! ## 依赖关系
//! - 被 `tb/hamiltonian.rs` 产出的矩阵使用
//! - 被 `tb/runner.rs` 通过 trait object 调用

use crate::error::{BandError, Result};

/// 稠密实对称矩阵（行优先存储）
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl SymmetricMatrix {
    /// 从行优先数据创建，校验形状与对称性
    pub fn new(dim: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != dim * dim {
            return Err(BandError::InvalidArgument(format!(
                "Matrix data has {} entries, expected {} for a {}x{} matrix",
                data.len(),
                dim * dim,
                dim,
                dim
            )));
        }

        let scale = data.iter().fold(1.0_f64, |acc, x| acc.max(x.abs()));
        for i in 0..dim {
            for j in (i + 1)..dim {
                let (upper, lower) = (data[i * dim + j], data[j * dim + i]);
                if (upper - lower).abs() > 1e-12 * scale {
                    return Err(BandError::NonSymmetricMatrix(format!(
                        "element ({}, {}) = {} but ({}, {}) = {}",
                        i, j, upper, j, i, lower
                    )));
                }
            }
        }

        Ok(Self { dim, data })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.dim + col]
    }

    pub fn trace(&self) -> f64 {
        (0..self.dim).map(|i| self.get(i, i)).sum()
    }
}

/// 实对称矩阵本征值求解器
///
/// 返回的本征值按升序排列。
pub trait SymmetricEigensolver: Send + Sync {
    /// 求解器名称（用于日志与错误信息）
    fn name(&self) -> &'static str;

    fn eigenvalues(&self, matrix: &SymmetricMatrix) -> Result<Vec<f64>>;
}

/// 2x2 解析求解器
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedForm2x2;

impl SymmetricEigensolver for ClosedForm2x2 {
    fn name(&self) -> &'static str {
        "closed-form-2x2"
    }

    fn eigenvalues(&self, matrix: &SymmetricMatrix) -> Result<Vec<f64>> {
        if matrix.dim() != 2 {
            return Err(BandError::UnsupportedDimension {
                solver: self.name(),
                dim: matrix.dim(),
            });
        }

        let (a, b, c) = (matrix.get(0, 0), matrix.get(0, 1), matrix.get(1, 1));
        let mean = matrix.trace() / 2.0;
        let half_diff = (a - c) / 2.0;
        let half_gap = (half_diff * half_diff + b * b).sqrt();

        Ok(vec![mean - half_gap, mean + half_gap])
    }
}

/// 循环 Jacobi 求解器
#[derive(Debug, Clone, Copy)]
pub struct JacobiSolver {
    /// 相对非对角范数收敛阈值
    pub tolerance: f64,
    /// 最大扫描次数
    pub max_sweeps: usize,
}

impl Default for JacobiSolver {
    fn default() -> Self {
        Self {
            tolerance: 1e-14,
            max_sweeps: 64,
        }
    }
}

impl JacobiSolver {
    fn converged(&self, a: &[f64], n: usize) -> bool {
        let mut off = 0.0;
        let mut total = 0.0;
        for i in 0..n {
            for j in 0..n {
                let v = a[i * n + j] * a[i * n + j];
                total += v;
                if i != j {
                    off += v;
                }
            }
        }
        off <= self.tolerance * self.tolerance * total
    }
}

impl SymmetricEigensolver for JacobiSolver {
    fn name(&self) -> &'static str {
        "jacobi"
    }

    fn eigenvalues(&self, matrix: &SymmetricMatrix) -> Result<Vec<f64>> {
        let n = matrix.dim();
        let mut a = matrix.data.clone();

        for _ in 0..self.max_sweeps {
            if self.converged(&a, n) {
                return Ok(sorted_diagonal(&a, n));
            }

            for p in 0..n {
                for q in (p + 1)..n {
                    let apq = a[p * n + q];
                    if apq == 0.0 {
                        continue;
                    }

                    // 选取使 a'[p][q] = 0 的较小旋转角
                    let theta = (a[q * n + q] - a[p * n + p]) / (2.0 * apq);
                    let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                    let c = 1.0 / (t * t + 1.0).sqrt();
                    let s = t * c;

                    for k in 0..n {
                        let akp = a[k * n + p];
                        let akq = a[k * n + q];
                        a[k * n + p] = c * akp - s * akq;
                        a[k * n + q] = s * akp + c * akq;
                    }
                    for k in 0..n {
                        let apk = a[p * n + k];
                        let aqk = a[q * n + k];
                        a[p * n + k] = c * apk - s * aqk;
                        a[q * n + k] = s * apk + c * aqk;
                    }
                }
            }
        }

        if self.converged(&a, n) {
            Ok(sorted_diagonal(&a, n))
        } else {
            Err(BandError::NotConverged {
                sweeps: self.max_sweeps,
            })
        }
    }
}

fn sorted_diagonal(a: &[f64], n: usize) -> Vec<f64> {
    let mut values: Vec<f64> = (0..n).map(|i| a[i * n + i]).collect();
    values.sort_by(|x, y| x.total_cmp(y));
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [f64; 7] = [-13.2, -6.0, -2.0, 0.0, 0.5, 3.7, 11.0];

    fn sym2(a: f64, b: f64, c: f64) -> SymmetricMatrix {
        SymmetricMatrix::new(2, vec![a, b, b, c]).unwrap()
    }

    #[test]
    fn test_closed_form_trace_and_determinant() {
        let solver = ClosedForm2x2;
        for &a in &GRID {
            for &b in &GRID {
                for &c in &GRID {
                    let m = sym2(a, b, c);
                    let ev = solver.eigenvalues(&m).unwrap();
                    let det = a * c - b * b;

                    assert!(ev[0] <= ev[1], "not ascending: {:?}", ev);
                    assert!((ev[0] + ev[1] - (a + c)).abs() < 1e-9);
                    assert!(
                        (ev[0] * ev[1] - det).abs() < 1e-9 * (1.0 + det.abs()),
                        "product {} vs det {}",
                        ev[0] * ev[1],
                        det
                    );
                }
            }
        }
    }

    #[test]
    fn test_closed_form_reference_gamma() {
        // Ti 立方参考几何在 Γ 点: E_d = -2, E_p = -6, 相互作用 = 6t = 13.2
        let m = sym2(-2.0, 13.2, -6.0);
        let ev = ClosedForm2x2.eigenvalues(&m).unwrap();
        let half_gap = (4.0_f64 + 174.24).sqrt();
        assert!((ev[0] - (-4.0 - half_gap)).abs() < 1e-12);
        assert!((ev[1] - (-4.0 + half_gap)).abs() < 1e-12);
        assert!((ev[0] - (-17.3507)).abs() < 1e-4);
        assert!((ev[1] - 9.3507).abs() < 1e-4);
    }

    #[test]
    fn test_closed_form_rejects_3x3() {
        let m = SymmetricMatrix::new(3, vec![1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0]).unwrap();
        let result = ClosedForm2x2.eigenvalues(&m);
        assert!(matches!(
            result,
            Err(BandError::UnsupportedDimension { dim: 3, .. })
        ));
    }

    #[test]
    fn test_jacobi_matches_closed_form() {
        let jacobi = JacobiSolver::default();
        for &a in &GRID {
            for &b in &GRID {
                let c = -6.0;
                let m = sym2(a, b, c);
                let exact = ClosedForm2x2.eigenvalues(&m).unwrap();
                let iter = jacobi.eigenvalues(&m).unwrap();
                assert!((exact[0] - iter[0]).abs() < 1e-9);
                assert!((exact[1] - iter[1]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_jacobi_tridiagonal_3x3() {
        let m = SymmetricMatrix::new(3, vec![2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0]).unwrap();
        let ev = JacobiSolver::default().eigenvalues(&m).unwrap();
        let r2 = 2.0_f64.sqrt();
        assert!((ev[0] - (2.0 - r2)).abs() < 1e-10);
        assert!((ev[1] - 2.0).abs() < 1e-10);
        assert!((ev[2] - (2.0 + r2)).abs() < 1e-10);
        assert!((ev.iter().sum::<f64>() - m.trace()).abs() < 1e-10);
    }

    #[test]
    fn test_jacobi_zero_matrix() {
        let m = sym2(0.0, 0.0, 0.0);
        assert_eq!(JacobiSolver::default().eigenvalues(&m).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_non_symmetric_rejected() {
        let result = SymmetricMatrix::new(2, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(result, Err(BandError::NonSymmetricMatrix(_))));
    }

    #[test]
    fn test_bad_shape_rejected() {
        let result = SymmetricMatrix::new(2, vec![1.0, 2.0, 2.0]);
        assert!(matches!(result, Err(BandError::InvalidArgument(_))));
    }
}
