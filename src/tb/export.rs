//! # 能带数据导出
//!
//! 导出场景结果到 JSON 和 CSV 格式。
//!
//! ## 支持格式
//! - JSON: 以场景标签为键，记录包含角度、重叠因子、带宽、带隙与两条能带
//! - CSV: 每个 k 点一行，每个场景两列（价带、导带）
//! - 扫描 CSV: 每个角度一行的带宽/带隙统计
//! - k 路径 CSV: 每个 k 点一行，标注高对称点
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `serde_json` 与 `csv` 写文件

use crate::error::{BandError, Result};
use crate::models::{KPoint, ScenarioResult};
use crate::tb::kpath::KPathGenerator;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 单个场景的导出记录
#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    angle: f64,
    bond_length: f64,
    metal: &'a str,
    hopping_integral: f64,
    overlap_factor: f64,
    band_width: f64,
    band_gap: f64,
    /// [价带, 导带]
    bands: [Vec<f64>; 2],
}

impl<'a> From<&'a ScenarioResult> for ExportRecord<'a> {
    fn from(r: &'a ScenarioResult) -> Self {
        ExportRecord {
            angle: r.geometry.angle_deg,
            bond_length: r.geometry.bond_length,
            metal: &r.metal,
            hopping_integral: r.hopping.hopping_integral,
            overlap_factor: r.hopping.overlap_factor,
            band_width: r.band_width,
            band_gap: r.band_gap,
            bands: [r.bands.valence(), r.bands.conduction()],
        }
    }
}

/// 以标签为键、保持输入顺序的记录表
struct LabeledRecords<'a>(&'a [ScenarioResult]);

impl Serialize for LabeledRecords<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for result in self.0 {
            map.serialize_entry(&result.label, &ExportRecord::from(result))?;
        }
        map.end()
    }
}

fn create_file(output_path: &Path) -> Result<File> {
    File::create(output_path).map_err(|e| BandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

fn flush_error(output_path: &Path, e: std::io::Error) -> BandError {
    BandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    }
}

/// 导出为 JSON
pub fn to_json(results: &[ScenarioResult], output_path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(create_file(output_path)?);
    serde_json::to_writer_pretty(&mut writer, &LabeledRecords(results))?;
    writer.flush().map_err(|e| flush_error(output_path, e))?;
    Ok(())
}

/// 导出能带为 CSV（每个 k 点一行）
pub fn bands_to_csv(results: &[ScenarioResult], k_path: &[KPoint], output_path: &Path) -> Result<()> {
    if let Some(r) = results.iter().find(|r| r.bands.len() != k_path.len()) {
        return Err(BandError::InvalidArgument(format!(
            "Scenario '{}' has {} band samples but the k-path has {} points",
            r.label,
            r.bands.len(),
            k_path.len()
        )));
    }

    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec![
        "index".to_string(),
        "kx".to_string(),
        "ky".to_string(),
        "kz".to_string(),
    ];
    for r in results {
        header.push(format!("{} valence", r.label));
        header.push(format!("{} conduction", r.label));
    }
    wtr.write_record(&header)?;

    for (i, k) in k_path.iter().enumerate() {
        let mut row = vec![
            i.to_string(),
            format!("{:.6}", k.kx),
            format!("{:.6}", k.ky),
            format!("{:.6}", k.kz),
        ];
        for r in results {
            let sample = r.bands.samples[i];
            row.push(format!("{:.6}", sample.valence));
            row.push(format!("{:.6}", sample.conduction));
        }
        wtr.write_record(&row)?;
    }

    wtr.flush().map_err(|e| flush_error(output_path, e))?;
    Ok(())
}

/// 导出角度扫描统计为 CSV
pub fn sweep_to_csv(results: &[ScenarioResult], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "angle",
        "bond_length",
        "metal",
        "overlap_factor",
        "hopping_integral",
        "band_width",
        "band_gap",
    ])?;

    for r in results {
        wtr.write_record(&[
            format!("{:.4}", r.geometry.angle_deg),
            format!("{:.4}", r.geometry.bond_length),
            r.metal.clone(),
            format!("{:.6}", r.hopping.overlap_factor),
            format!("{:.6}", r.hopping.hopping_integral),
            format!("{:.6}", r.band_width),
            format!("{:.6}", r.band_gap),
        ])?;
    }

    wtr.flush().map_err(|e| flush_error(output_path, e))?;
    Ok(())
}

/// 导出 k 路径为 CSV
pub fn kpath_to_csv(generator: &KPathGenerator, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(["index", "kx", "ky", "kz", "label"])?;

    let ticks = generator.tick_positions();
    for (i, k) in generator.generate().iter().enumerate() {
        let label = ticks
            .iter()
            .find(|(pos, _)| *pos == i)
            .map(|(_, l)| *l)
            .unwrap_or("");
        wtr.write_record(&[
            i.to_string(),
            format!("{:.8}", k.kx),
            format!("{:.8}", k.ky),
            format!("{:.8}", k.kz),
            label.to_string(),
        ])?;
    }

    wtr.flush().map_err(|e| flush_error(output_path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrbitalParameters, Scenario};
    use crate::tb::eigen::ClosedForm2x2;
    use crate::tb::runner::ScenarioRunner;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("perovskite_bands_{}_{}", std::process::id(), name))
    }

    fn reference_results(points: usize) -> (Vec<ScenarioResult>, Vec<KPoint>) {
        let k_path = KPathGenerator::new(points).generate();
        let runner = ScenarioRunner::new(Box::new(ClosedForm2x2), 1).unwrap();
        let results = runner
            .run(&Scenario::reference_pair("Ti"), &k_path, &OrbitalParameters::default())
            .unwrap();
        (results.as_slice().to_vec(), k_path)
    }

    #[test]
    fn test_json_layout() {
        let (results, _) = reference_results(10);
        let path = temp_path("bands.json");
        to_json(&results, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let cubic = &value["Cubic (Ideal)"];
        assert_eq!(cubic["angle"], 180.0);
        assert_eq!(cubic["overlap_factor"], 1.0);
        assert_eq!(cubic["bands"].as_array().unwrap().len(), 2);
        assert_eq!(cubic["bands"][0].as_array().unwrap().len(), 30);
        assert!(value["Distorted (Tilted)"]["band_gap"].is_number());

        // 标签按输入顺序输出
        let cubic_pos = content.find("Cubic (Ideal)").unwrap();
        let tilted_pos = content.find("Distorted (Tilted)").unwrap();
        assert!(cubic_pos < tilted_pos);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bands_csv() {
        let (results, k_path) = reference_results(4);
        let path = temp_path("bands.csv");
        bands_to_csv(&results, &k_path, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.len(), 8);
        assert_eq!(&headers[4], "Cubic (Ideal) valence");
        assert_eq!(rdr.records().count(), 12);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bands_csv_length_mismatch() {
        let (results, k_path) = reference_results(4);
        let path = temp_path("mismatch.csv");
        let result = bands_to_csv(&results, &k_path[..5], &path);
        assert!(matches!(result, Err(BandError::InvalidArgument(_))));
    }

    #[test]
    fn test_sweep_csv() {
        let (results, _) = reference_results(4);
        let path = temp_path("sweep.csv");
        sweep_to_csv(&results, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "angle,bond_length,metal,overlap_factor,hopping_integral,band_width,band_gap"
        );
        assert!(lines[1].starts_with("180.0000,1.9600,Ti,1.000000,2.200000"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_kpath_csv_labels() {
        let generator = KPathGenerator::new(3);
        let path = temp_path("kpath.csv");
        kpath_to_csv(&generator, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let labels: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap()[4].to_string())
            .collect();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0], "Γ");
        assert_eq!(labels[3], "X");
        assert_eq!(labels[6], "M");
        assert_eq!(labels[8], "");

        fs::remove_file(&path).ok();
    }
}
