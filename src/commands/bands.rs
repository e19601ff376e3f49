//! # bands 子命令实现
//!
//! 计算一组几何场景沿 Γ → X → M → Γ 的能带结构。
//!
//! ## 功能
//! - 场景来自命令行、配置文件或内置参考场景
//! - k 点并行求解（rayon）
//! - 打印带宽/带隙汇总表
//! - 导出 JSON/CSV 数据或 PNG/SVG 图像
//!
//! ## 依赖关系
//! - 使用 `cli/bands.rs` 定义的 BandsArgs
//! - 使用 `tb/` 模块进行计算与导出

use crate::cli::bands::{BandOutputFormat, BandsArgs};
use crate::error::Result;
use crate::models::config::{check_unique_labels, validate_points_per_segment};
use crate::models::{RunConfig, Scenario};
use crate::tb::runner::BandResults;
use crate::tb::{self, KPathGenerator};
use crate::utils::output;

use std::path::Path;

/// 执行 bands 命令
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("Perovskite Two-Orbital Band Structure");

    let config = super::load_config(args.config.as_deref())?;
    let points = args.points.unwrap_or(config.points_per_segment);
    validate_points_per_segment(points)?;

    let scenarios = resolve_scenarios(&args, &config)?;
    for scenario in &scenarios {
        super::warn_scenario(scenario, &config.model);
    }
    output::print_info(&format!("Running {} scenario(s)", scenarios.len()));

    let generator = KPathGenerator::new(points);
    let k_path = generator.generate();
    output::print_info(&format!(
        "k-path Γ → X → M → Γ: {} points ({} per segment)",
        k_path.len(),
        points
    ));

    let runner = super::build_runner(args.solver, args.jobs)?;
    output::print_info(&format!("Eigensolver: {}", runner.solver_name()));

    let results = runner.run(&scenarios, &k_path, &config.model)?;
    output::print_success(&format!("Solved {} scenario(s)", results.len()));

    print_summary_table(&results);

    if args.no_output {
        output::print_done("Band structure calculation complete");
        return Ok(());
    }

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        BandOutputFormat::Json => tb::export::to_json(results.as_slice(), &args.output)?,
        BandOutputFormat::Csv => {
            tb::export::bands_to_csv(results.as_slice(), &k_path, &args.output)?
        }
        BandOutputFormat::Png | BandOutputFormat::Svg => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| "Band Structure (Γ-X-M-Γ)".to_string());
            tb::plot::generate_band_plot(
                results.as_slice(),
                &generator.tick_positions(),
                &args.output,
                &title,
                (args.width, args.height),
                format == BandOutputFormat::Svg,
            )?
        }
    }

    output::print_done(&format!("Results saved to '{}'", args.output.display()));
    Ok(())
}

/// 确定场景列表：命令行 > 配置文件 > 内置参考场景
fn resolve_scenarios(args: &BandsArgs, config: &RunConfig) -> Result<Vec<Scenario>> {
    let scenarios = if !args.scenarios.is_empty() {
        args.scenarios
            .iter()
            .map(|arg| Scenario::parse_arg(arg, &args.metal))
            .collect::<Result<Vec<_>>>()?
    } else if !config.scenarios.is_empty() {
        config.scenarios.clone()
    } else {
        Scenario::reference_pair(&args.metal)
    };

    check_unique_labels(&scenarios)?;
    Ok(scenarios)
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> BandOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("csv") => BandOutputFormat::Csv,
        Some("png") => BandOutputFormat::Png,
        Some("svg") => BandOutputFormat::Svg,
        _ => BandOutputFormat::Json,
    }
}

/// 打印场景汇总表
fn print_summary_table(results: &BandResults) {
    use tabled::{Table, Tabled};

    if results.is_empty() {
        return;
    }

    #[derive(Tabled)]
    struct SummaryRow {
        #[tabled(rename = "Scenario")]
        label: String,
        #[tabled(rename = "Metal")]
        metal: String,
        #[tabled(rename = "θ (°)")]
        angle: String,
        #[tabled(rename = "d (Å)")]
        bond_length: String,
        #[tabled(rename = "Overlap")]
        overlap: String,
        #[tabled(rename = "t (eV)")]
        hopping: String,
        #[tabled(rename = "Width (eV)")]
        band_width: String,
        #[tabled(rename = "Gap (eV)")]
        band_gap: String,
    }

    let rows: Vec<SummaryRow> = results
        .as_slice()
        .iter()
        .map(|r| SummaryRow {
            label: r.label.clone(),
            metal: r.metal.clone(),
            angle: format!("{:.1}", r.geometry.angle_deg),
            bond_length: format!("{:.3}", r.geometry.bond_length),
            overlap: format!("{:.4}", r.hopping.overlap_factor),
            hopping: format!("{:.4}", r.hopping.hopping_integral),
            band_width: format!("{:.4}", r.band_width),
            band_gap: format!("{:.4}", r.band_gap),
        })
        .collect();

    output::print_header("Scenario Summary");
    println!("{}", Table::new(&rows));

    for r in results.as_slice().iter().filter(|r| r.band_gap < 0.0) {
        output::print_warning(&format!(
            "'{}': bands overlap by {:.4} eV (metallic)",
            r.label, -r.band_gap
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::bands::SolverKind;
    use std::path::PathBuf;

    fn args_with(scenarios: Vec<String>) -> BandsArgs {
        BandsArgs {
            config: None,
            scenarios,
            metal: "Mn".to_string(),
            points: None,
            output: PathBuf::from("band_structure.json"),
            format: None,
            no_output: true,
            solver: SolverKind::ClosedForm,
            jobs: 1,
            width: 1200,
            height: 800,
            title: None,
        }
    }

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("a.csv")), BandOutputFormat::Csv);
        assert_eq!(guess_format_from_extension(Path::new("a.PNG")), BandOutputFormat::Png);
        assert_eq!(guess_format_from_extension(Path::new("a.svg")), BandOutputFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("a.json")), BandOutputFormat::Json);
        assert_eq!(guess_format_from_extension(Path::new("out")), BandOutputFormat::Json);
    }

    #[test]
    fn test_builtin_scenarios_use_metal() {
        let scenarios = resolve_scenarios(&args_with(vec![]), &RunConfig::default()).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert!(scenarios.iter().all(|s| s.metal == "Mn"));
    }

    #[test]
    fn test_cli_scenarios_override_config() {
        let config = RunConfig::from_toml_str(
            r#"
[[scenarios]]
label = "From file"
angle_deg = 170.0
bond_length_angstrom = 1.96
"#,
        )
        .unwrap();

        let from_file = resolve_scenarios(&args_with(vec![]), &config).unwrap();
        assert_eq!(from_file[0].label, "From file");

        let from_cli = resolve_scenarios(&args_with(vec!["A:160:2.0".to_string()]), &config).unwrap();
        assert_eq!(from_cli.len(), 1);
        assert_eq!(from_cli[0].label, "A");
    }

    #[test]
    fn test_cli_duplicate_labels() {
        let args = args_with(vec!["A:160:2.0".to_string(), "A:150:2.0".to_string()]);
        assert!(resolve_scenarios(&args, &RunConfig::default()).is_err());
    }

    #[test]
    fn test_execute_without_output() {
        assert!(execute(args_with(vec!["Tilted:155:1.98".to_string()])).is_ok());
    }
}
