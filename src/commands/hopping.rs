//! # hopping 子命令实现
//!
//! 计算单个 B–O 键几何的跃迁积分与角向重叠因子。
//!
//! ## 依赖关系
//! - 使用 `cli/hopping.rs` 定义的 HoppingArgs
//! - 使用 `tb/hopping.rs` 的 HoppingModel

use crate::cli::hopping::HoppingArgs;
use crate::error::Result;
use crate::models::Geometry;
use crate::tb::HoppingModel;
use crate::utils::output;

/// 执行 hopping 命令
pub fn execute(args: HoppingArgs) -> Result<()> {
    output::print_header("Hopping Integral (Harrison Scaling)");

    let config = super::load_config(args.config.as_deref())?;
    let geometry = Geometry::new(args.bond_length, args.angle);

    if !geometry.angle_in_range() {
        output::print_warning(&format!(
            "Angle {}° is outside [0, 180], using the cosine formula unchanged",
            args.angle
        ));
    }

    let model = HoppingModel::new(&config.model);
    let hopping = model.compute(&geometry)?;

    output::print_info(&format!(
        "Reference: V0 = {:.4} eV at d0 = {:.4} Å",
        config.model.v_pd_sigma_0, config.model.d0
    ));
    output::print_info(&format!(
        "Geometry:  d = {:.4} Å, θ = {:.2}° (tilt {:.2}°)",
        geometry.bond_length,
        geometry.angle_deg,
        180.0 - geometry.angle_deg
    ));
    output::print_separator();
    output::print_quantity("Scaled amplitude V(d)", hopping.scaled_amplitude, "eV");
    output::print_quantity("Angular overlap factor", hopping.overlap_factor, "");
    output::print_quantity("Hopping integral t", hopping.hopping_integral, "eV");
    output::print_quantity("Γ-point coupling 6t", 6.0 * hopping.hopping_integral, "eV");
    output::print_separator();
    output::print_done("Hopping integral evaluated");

    Ok(())
}
