//! # 场景执行器
//!
//! 对每个场景依次执行 跃迁积分 → 哈密顿量 → 对角化，并计算带宽与带隙。
//!
//! ## 功能
//! - k 点在 rayon 线程池上并行求解，结果按 k 路径索引收集，顺序与确定性不变
//! - 场景按输入顺序串行执行，第一个失败的场景终止整个批次，不保留部分结果
//! - 场景内多个 k 点失败时报告索引最小者
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs`, `commands/sweep.rs` 调用
//! - 使用 `tb/hopping.rs`, `tb/hamiltonian.rs`, `tb/eigen.rs`
//! - 使用 `rayon` 进行并行计算

use crate::error::{BandError, Result};
use crate::models::config::check_unique_labels;
use crate::models::{BandSample, BandStructure, KPoint, OrbitalParameters, Scenario, ScenarioResult};
use crate::tb::eigen::SymmetricEigensolver;
use crate::tb::hamiltonian::HamiltonianBuilder;
use crate::tb::hopping::HoppingModel;

use rayon::prelude::*;

/// 一次批量运行的结果，保持场景输入顺序
#[derive(Debug, Clone, PartialEq)]
pub struct BandResults {
    results: Vec<ScenarioResult>,
}

impl BandResults {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn as_slice(&self) -> &[ScenarioResult] {
        &self.results
    }
}

/// 场景执行器
pub struct ScenarioRunner {
    solver: Box<dyn SymmetricEigensolver>,
    pool: rayon::ThreadPool,
}

impl ScenarioRunner {
    /// 创建执行器，`jobs = 0` 时使用全部 CPU 核心
    pub fn new(solver: Box<dyn SymmetricEigensolver>, jobs: usize) -> Result<Self> {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| BandError::Other(format!("Failed to build thread pool: {}", e)))?;

        Ok(Self { solver, pool })
    }

    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    /// 运行全部场景
    pub fn run(
        &self,
        scenarios: &[Scenario],
        k_path: &[KPoint],
        params: &OrbitalParameters,
    ) -> Result<BandResults> {
        check_unique_labels(scenarios)?;

        let results = scenarios
            .iter()
            .map(|scenario| self.run_scenario(scenario, k_path, params))
            .collect::<Result<Vec<_>>>()?;

        Ok(BandResults { results })
    }

    /// 运行单个场景
    pub fn run_scenario(
        &self,
        scenario: &Scenario,
        k_path: &[KPoint],
        params: &OrbitalParameters,
    ) -> Result<ScenarioResult> {
        if k_path.is_empty() {
            return Err(BandError::InvalidArgument("k-path is empty".to_string()));
        }

        let geometry = scenario.geometry();
        let hopping = HoppingModel::new(params).compute(&geometry)?;
        let builder = HamiltonianBuilder::new(params.e_d(&scenario.metal), params.e_p);
        let t = hopping.hopping_integral;

        let samples: Vec<Result<BandSample>> = self.pool.install(|| {
            k_path
                .par_iter()
                .enumerate()
                .map(|(index, k)| self.solve_k_point(&builder, index, k, t))
                .collect()
        });
        let samples = samples.into_iter().collect::<Result<Vec<_>>>()?;

        let bands = BandStructure::new(samples);
        let band_width = bands.band_width();
        let band_gap = bands.band_gap();

        Ok(ScenarioResult {
            label: scenario.label.clone(),
            metal: scenario.metal.clone(),
            geometry,
            hopping,
            bands,
            band_width,
            band_gap,
        })
    }

    fn solve_k_point(
        &self,
        builder: &HamiltonianBuilder,
        index: usize,
        k: &KPoint,
        t: f64,
    ) -> Result<BandSample> {
        let matrix = builder.build(index, k, t)?;
        match self.solver.eigenvalues(&matrix)?.as_slice() {
            [valence, conduction] => Ok(BandSample {
                valence: *valence,
                conduction: *conduction,
            }),
            other => Err(BandError::Other(format!(
                "Solver '{}' returned {} eigenvalues for a two-orbital Hamiltonian",
                self.solver.name(),
                other.len()
            ))),
        }
    }
}
