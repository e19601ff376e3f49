//! # kpath 子命令实现
//!
//! 打印或导出 Γ → X → M → Γ 路径上的 k 点。
//!
//! ## 依赖关系
//! - 使用 `cli/kpath.rs` 定义的 KpathArgs
//! - 使用 `tb/kpath.rs`, `tb/export.rs`

use crate::cli::kpath::KpathArgs;
use crate::error::Result;
use crate::models::config::validate_points_per_segment;
use crate::tb::{self, KPathGenerator};
use crate::utils::output;

/// 执行 kpath 命令
pub fn execute(args: KpathArgs) -> Result<()> {
    validate_points_per_segment(args.points)?;
    let generator = KPathGenerator::new(args.points);

    if let Some(path) = &args.output {
        tb::export::kpath_to_csv(&generator, path)?;
        output::print_success(&format!(
            "{} k-points written to '{}'",
            generator.len(),
            path.display()
        ));
        return Ok(());
    }

    print_kpath_table(&generator);
    Ok(())
}

fn print_kpath_table(generator: &KPathGenerator) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct KRow {
        #[tabled(rename = "#")]
        index: usize,
        kx: String,
        ky: String,
        kz: String,
        #[tabled(rename = "Point")]
        label: String,
    }

    let ticks = generator.tick_positions();
    let rows: Vec<KRow> = generator
        .generate()
        .iter()
        .enumerate()
        .map(|(i, k)| KRow {
            index: i,
            kx: format!("{:.6}", k.kx),
            ky: format!("{:.6}", k.ky),
            kz: format!("{:.6}", k.kz),
            label: ticks
                .iter()
                .find(|(pos, _)| *pos == i)
                .map(|(_, l)| l.to_string())
                .unwrap_or_default(),
        })
        .collect();

    output::print_header(&format!("k-path Γ → X → M → Γ ({} points)", rows.len()));
    println!("{}", Table::new(&rows));
}
