//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `tb/`, `utils/`
//! - 子模块: bands, hopping, sweep, kpath

pub mod bands;
pub mod hopping;
pub mod kpath;
pub mod sweep;

use crate::cli::bands::SolverKind;
use crate::cli::Commands;
use crate::error::Result;
use crate::models::{OrbitalParameters, RunConfig, Scenario};
use crate::tb::{ClosedForm2x2, JacobiSolver, ScenarioRunner, SymmetricEigensolver};
use crate::utils::output;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Bands(args) => bands::execute(args),
        Commands::Hopping(args) => hopping::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
        Commands::Kpath(args) => kpath::execute(args),
    }
}

/// 读取配置文件，未指定时使用默认配置
fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(p) => {
            let config = RunConfig::from_file(p)?;
            output::print_success(&format!("Loaded config: '{}'", p.display()));
            Ok(config)
        }
        None => Ok(RunConfig::default()),
    }
}

/// 按求解器类型创建执行器
fn build_runner(solver: SolverKind, jobs: usize) -> Result<ScenarioRunner> {
    let solver: Box<dyn SymmetricEigensolver> = match solver {
        SolverKind::ClosedForm => Box::new(ClosedForm2x2),
        SolverKind::Jacobi => Box::new(JacobiSolver::default()),
    };
    ScenarioRunner::new(solver, jobs)
}

/// 对可计算但值得提醒的输入给出警告
fn warn_scenario(scenario: &Scenario, params: &OrbitalParameters) {
    for warning in scenario_warnings(scenario, params) {
        output::print_warning(&warning);
    }
}

fn scenario_warnings(scenario: &Scenario, params: &OrbitalParameters) -> Vec<String> {
    let mut warnings = Vec::new();
    if !scenario.geometry().angle_in_range() {
        warnings.push(format!(
            "Scenario '{}': angle {}° is outside [0, 180], using the cosine formula unchanged",
            scenario.label, scenario.angle_deg
        ));
    }
    if let Some(warning) = metal_warning(&scenario.metal, params) {
        warnings.push(format!("Scenario '{}': {}", scenario.label, warning));
    }
    warnings
}

fn metal_warning(metal: &str, params: &OrbitalParameters) -> Option<String> {
    if params.is_known_metal(metal) {
        return None;
    }
    Some(format!(
        "unknown metal '{}', using default E_d = {:.2} eV",
        metal, params.default_e_d
    ))
}
