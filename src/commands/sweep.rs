//! # sweep 子命令实现
//!
//! 在固定键长下逐个键角计算能带，统计带宽与带隙随八面体倾斜的变化。
//!
//! ## 功能
//! - 角度序列包含终点，方向由 `--from`/`--to` 决定
//! - 进度条显示（indicatif）
//! - 第一个失败的角度终止扫描
//! - 可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `tb/runner.rs`, `tb/export.rs`
//! - 使用 `utils/progress.rs` 创建进度条

use crate::cli::sweep::SweepArgs;
use crate::error::{BandError, Result};
use crate::models::config::validate_points_per_segment;
use crate::models::{Geometry, OrbitalParameters, Scenario, ScenarioResult};
use crate::tb::{self, KPathGenerator};
use crate::utils::{output, progress};

/// 扫描角度数上限
const MAX_SWEEP_POINTS: usize = 100_000;

/// 执行 sweep 命令
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Bond-Angle Sweep");

    let config = super::load_config(args.config.as_deref())?;
    let points = args.points.unwrap_or(config.points_per_segment);
    validate_points_per_segment(points)?;

    let angles = sweep_angles(args.from, args.to, args.step)?;
    output::print_info(&format!(
        "{} angles from {}° to {}° at d = {:.4} Å ({})",
        angles.len(),
        args.from,
        args.to,
        args.bond_length,
        args.metal
    ));

    let scenarios: Vec<Scenario> = angles
        .iter()
        .map(|&angle| {
            Scenario::new(
                format!("θ={:.2}", angle),
                angle,
                args.bond_length,
                args.metal.clone(),
            )
        })
        .collect();
    for warning in sweep_warnings(&angles, &args.metal, &config.model) {
        output::print_warning(&warning);
    }

    let k_path = KPathGenerator::new(points).generate();
    let runner = super::build_runner(args.solver, args.jobs)?;

    let pb = progress::create_progress_bar(scenarios.len() as u64, "Sweeping");
    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in &scenarios {
        match runner.run_scenario(scenario, &k_path, &config.model) {
            Ok(result) => results.push(result),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_sweep_table(&results);

    if let Some(path) = &args.output {
        tb::export::sweep_to_csv(&results, path)?;
        output::print_done(&format!("Sweep saved to '{}'", path.display()));
    } else {
        output::print_done("Sweep complete");
    }

    Ok(())
}

/// 生成包含终点的角度序列
fn sweep_angles(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !from.is_finite() || !to.is_finite() {
        return Err(BandError::InvalidArgument(format!(
            "Sweep bounds must be finite (got {} to {})",
            from, to
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(BandError::InvalidArgument(format!(
            "Sweep step must be positive (got {})",
            step
        )));
    }

    let span = (to - from).abs();
    // 容差避免 (180-140)/5 因舍入少算终点；极小步长下 intervals 可为 inf
    let intervals = (span / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
        return Err(BandError::InvalidArgument(format!(
            "Sweep from {}° to {}° in steps of {}° exceeds {} angles",
            from, to, step, MAX_SWEEP_POINTS
        )));
    }
    let count = intervals as usize + 1;

    let direction = if to >= from { 1.0 } else { -1.0 };
    Ok((0..count)
        .map(|i| from + direction * step * i as f64)
        .collect())
}

/// 扫描警告：超出 [0, 180] 的角度合并为一条，未知金属只提示一次
fn sweep_warnings(angles: &[f64], metal: &str, params: &OrbitalParameters) -> Vec<String> {
    let mut warnings = Vec::new();

    let outside: Vec<f64> = angles
        .iter()
        .copied()
        .filter(|&angle| !Geometry::new(1.0, angle).angle_in_range())
        .collect();
    if !outside.is_empty() {
        let lo = outside.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = outside.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        warnings.push(format!(
            "{} angle(s) between {}° and {}° are outside [0, 180], using the cosine formula unchanged",
            outside.len(),
            lo,
            hi
        ));
    }

    if let Some(warning) = super::metal_warning(metal, params) {
        warnings.push(warning);
    }
    warnings
}

fn print_sweep_table(results: &[ScenarioResult]) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct SweepRow {
        #[tabled(rename = "θ (°)")]
        angle: String,
        #[tabled(rename = "Overlap")]
        overlap: String,
        #[tabled(rename = "t (eV)")]
        hopping: String,
        #[tabled(rename = "Width (eV)")]
        band_width: String,
        #[tabled(rename = "Gap (eV)")]
        band_gap: String,
    }

    let rows: Vec<SweepRow> = results
        .iter()
        .map(|r| SweepRow {
            angle: format!("{:.2}", r.geometry.angle_deg),
            overlap: format!("{:.4}", r.hopping.overlap_factor),
            hopping: format!("{:.4}", r.hopping.hopping_integral),
            band_width: format!("{:.4}", r.band_width),
            band_gap: format!("{:.4}", r.band_gap),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header("Sweep Results");
        println!("{}", Table::new(&rows));
    }
}
