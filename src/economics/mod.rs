//! 에너지 비용, 회수기간, 누적 비용 추이 계산 모듈 모음.

pub mod energy_cost;
pub mod payback;
pub mod projection;

pub use energy_cost::{annual_energy_cost, annual_heat_loss_kwh_per_m2, EvaluationContext};
pub use payback::{compare, simple_payback, Comparison, Payback};
pub use projection::{cost_breakdown, project, CostBreakdown, CostStructure, ProjectionPoint};
