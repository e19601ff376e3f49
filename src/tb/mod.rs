//! # 紧束缚能带计算模块
//!
//! 钙钛矿 B–O 网络的两轨道紧束缚能带计算。
//!
//! ## 子模块
//! - `hopping`: Harrison 标度与角向重叠的跃迁积分
//! - `kpath`: Γ → X → M → Γ 高对称路径
//! - `hamiltonian`: 2x2 哈密顿量构造
//! - `eigen`: 对称本征值求解接口与实现
//! - `runner`: 场景批量执行
//! - `export`: 数据导出
//! - `plot`: 图表生成
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 的数据结构

pub mod eigen;
pub mod export;
pub mod hamiltonian;
pub mod hopping;
pub mod kpath;
pub mod plot;
pub mod runner;

pub use eigen::{ClosedForm2x2, JacobiSolver, SymmetricEigensolver};
pub use hopping::HoppingModel;
pub use kpath::KPathGenerator;
pub use runner::ScenarioRunner;
