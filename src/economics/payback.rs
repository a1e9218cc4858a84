use serde::Serialize;
use tracing::debug;

use super::energy_cost::{annual_energy_cost, EvaluationContext};
use crate::envelope::Assembly;

/// 단순 회수기간 판정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "years", rename_all = "kebab-case")]
pub enum Payback {
    /// 연간 절감이 없어 회수되지 않는다.
    Never,
    /// 추가 투자가 없거나 오히려 싸다. 첫 해부터 이득.
    Immediate,
    /// 회수까지 걸리는 햇수 (할인/물가상승 미반영)
    Years(f64),
}

impl Payback {
    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Years(y) => Some(*y),
            Payback::Never | Payback::Immediate => None,
        }
    }
}

/// 추가 투자비와 연간 절감액으로 단순 회수기간을 판정한다.
pub fn simple_payback(extra_investment: f64, annual_savings: f64) -> Payback {
    if annual_savings <= 0.0 {
        Payback::Never
    } else if extra_investment <= 0.0 {
        Payback::Immediate
    } else {
        Payback::Years(extra_investment / annual_savings)
    }
}

/// 기준안 대비 제안안의 경제성 비교 결과. 금액은 벽체 1 m² 기준.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub reference_annual_cost: f64,
    pub proposed_annual_cost: f64,
    /// 기준안 − 제안안 연간 비용
    pub annual_savings: f64,
    /// 제안안 − 기준안 시공비 (음수 가능)
    pub extra_investment: f64,
    pub payback: Payback,
    /// 제안안 − 기준안 U값 [W/m²K]
    pub u_value_delta: f64,
    /// 제안안 − 기준안 두께 [mm]
    pub thickness_delta_mm: f64,
    /// 제안안 − 기준안 내재탄소 [kg CO2-eq/m²]
    pub gwp_delta: f64,
}

pub fn compare(reference: &Assembly, proposed: &Assembly, ctx: &EvaluationContext) -> Comparison {
    let reference_annual_cost = annual_energy_cost(reference.u_value, ctx);
    let proposed_annual_cost = annual_energy_cost(proposed.u_value, ctx);
    let annual_savings = reference_annual_cost - proposed_annual_cost;
    let extra_investment = proposed.cost_per_m2 - reference.cost_per_m2;
    let payback = simple_payback(extra_investment, annual_savings);
    debug!(
        reference_annual_cost,
        proposed_annual_cost, annual_savings, extra_investment, ?payback, "economic comparison"
    );
    Comparison {
        reference_annual_cost,
        proposed_annual_cost,
        annual_savings,
        extra_investment,
        payback,
        u_value_delta: proposed.u_value - reference.u_value,
        thickness_delta_mm: proposed.thickness_mm - reference.thickness_mm,
        gwp_delta: proposed.gwp_per_m2 - reference.gwp_per_m2,
    }
}
