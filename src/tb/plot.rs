//! # 能带结构图
//!
//! 使用 `plotters` 库绘制沿 Γ → X → M → Γ 的能带结构。
//!
//! ## 功能
//! - 每个场景绘制价带与导带（同色）
//! - 高对称点竖线与标签
//! - 零能量参考线
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs` 调用
//! - 使用 `models/band.rs` 的 ScenarioResult

use crate::error::{BandError, Result};
use crate::models::ScenarioResult;

use plotters::prelude::*;
use std::path::Path;

const PALETTE: [RGBColor; 5] = [
    RGBColor(0, 102, 204),
    RGBColor(204, 51, 0),
    RGBColor(0, 153, 76),
    RGBColor(153, 0, 153),
    RGBColor(230, 159, 0),
];

/// 生成能带结构图
///
/// `ticks` 为高对称点在路径中的索引与标签。
pub fn generate_band_plot(
    results: &[ScenarioResult],
    ticks: &[(usize, &str)],
    output_path: &Path,
    title: &str,
    size: (u32, u32),
    use_svg: bool,
) -> Result<()> {
    if results.is_empty() {
        return Err(BandError::InvalidArgument(
            "No scenario results to plot".to_string(),
        ));
    }

    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_band_chart(&root, results, ticks, title)?;
        root.present()
            .map_err(|e| BandError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_band_chart(&root, results, ticks, title)?;
        root.present()
            .map_err(|e| BandError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 能量轴范围，上下各留 1 eV
fn energy_range(results: &[ScenarioResult]) -> (f64, f64) {
    let (lo, hi) = results
        .iter()
        .flat_map(|r| r.bands.samples.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.valence), hi.max(s.conduction))
        });
    (lo.floor() - 1.0, hi.ceil() + 1.0)
}

fn draw_band_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    results: &[ScenarioResult],
    ticks: &[(usize, &str)],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| BandError::PlotError(format!("{:?}", e)))?;

    let n_points = results.iter().map(|r| r.bands.len()).max().unwrap_or(1);
    let x_max = ticks
        .last()
        .map(|(pos, _)| *pos as f64)
        .unwrap_or(n_points as f64);
    let (y_min, y_max) = energy_range(results);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(|e| BandError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_x_axis()
        .y_desc("Energy (eV)")
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| BandError::PlotError(format!("{:?}", e)))?;

    // 高对称点
    let grey = RGBColor(150, 150, 150);
    for (pos, label) in ticks {
        let x = *pos as f64;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, y_min), (x, y_max)],
                grey.stroke_width(1),
            )))
            .map_err(|e| BandError::PlotError(format!("{:?}", e)))?;
        chart
            .draw_series(std::iter::once(Text::new(
                label.to_string(),
                (x, y_min + 0.03 * (y_max - y_min)),
                ("sans-serif", 18).into_font().color(&BLACK),
            )))
            .map_err(|e| BandError::PlotError(format!("{:?}", e)))?;
    }

    // 零能量参考线
    if y_min < 0.0 && y_max > 0.0 {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, 0.0), (x_max, 0.0)],
                RGBColor(251, 191, 36).stroke_width(2),
            )))
            .map_err(|e| BandError::PlotError(format!("{:?}", e)))?;
    }

    for (i, result) in results.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];

        chart
            .draw_series(LineSeries::new(
                result
                    .bands
                    .samples
                    .iter()
                    .enumerate()
                    .map(|(k, s)| (k as f64, s.valence)),
                color.stroke_width(2),
            ))
            .map_err(|e| BandError::PlotError(format!("{:?}", e)))?
            .label(format!(
                "{} ({:.0}°, Eg = {:.2} eV)",
                result.label, result.geometry.angle_deg, result.band_gap
            ))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(LineSeries::new(
                result
                    .bands
                    .samples
                    .iter()
                    .enumerate()
                    .map(|(k, s)| (k as f64, s.conduction)),
                color.stroke_width(2),
            ))
            .map_err(|e| BandError::PlotError(format!("{:?}", e)))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| BandError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrbitalParameters, Scenario};
    use crate::tb::eigen::ClosedForm2x2;
    use crate::tb::kpath::KPathGenerator;
    use crate::tb::runner::ScenarioRunner;

    #[test]
    fn test_energy_range_brackets_bands() {
        let generator = KPathGenerator::new(10);
        let runner = ScenarioRunner::new(Box::new(ClosedForm2x2), 1).unwrap();
        let results = runner
            .run(
                &Scenario::reference_pair("Ti"),
                &generator.generate(),
                &OrbitalParameters::default(),
            )
            .unwrap();

        let (lo, hi) = energy_range(results.as_slice());
        assert!(lo < -17.35 - 0.5);
        assert!(hi > 9.35 + 0.5);
    }

    #[test]
    fn test_empty_results_rejected() {
        let path = std::env::temp_dir().join("perovskite_bands_empty.svg");
        let result = generate_band_plot(&[], &[], &path, "empty", (400, 300), true);
        assert!(matches!(result, Err(BandError::InvalidArgument(_))));
    }
}
