use serde::Serialize;

use super::energy_cost::{annual_energy_cost, EvaluationContext};
use crate::envelope::Assembly;

/// 비용 구조 비교에 쓰는 고정 운영 기간 [년].
pub const BREAKDOWN_YEARS: u32 = 30;

/// 특정 연도의 누적 비용(시공비 + 누적 에너지 비용) [통화/m²].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub reference_cost: f64,
    pub proposed_cost: f64,
}

/// 0년부터 평가 기간까지(양 끝 포함) 누적 비용 추이를 만든다. 길이는 horizon + 1.
pub fn project(
    reference: &Assembly,
    proposed: &Assembly,
    ctx: &EvaluationContext,
) -> Vec<ProjectionPoint> {
    let reference_annual = annual_energy_cost(reference.u_value, ctx);
    let proposed_annual = annual_energy_cost(proposed.u_value, ctx);

    let mut reference_cost = reference.cost_per_m2;
    let mut proposed_cost = proposed.cost_per_m2;
    let mut points = Vec::with_capacity(ctx.horizon_years as usize + 1);
    for year in 0..=ctx.horizon_years {
        points.push(ProjectionPoint {
            year,
            reference_cost,
            proposed_cost,
        });
        reference_cost += reference_annual;
        proposed_cost += proposed_annual;
    }
    points
}

/// 한 안의 시공비와 운영비 구성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub investment: f64,
    /// `years`년 동안의 에너지 비용 합계
    pub operation: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.investment + self.operation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostStructure {
    pub years: u32,
    pub reference: CostBreakdown,
    pub proposed: CostBreakdown,
}

/// 두 안의 시공비 대비 `years`년 운영비를 비교한다.
pub fn cost_breakdown(
    reference: &Assembly,
    proposed: &Assembly,
    ctx: &EvaluationContext,
    years: u32,
) -> CostStructure {
    let split = |assembly: &Assembly| CostBreakdown {
        investment: assembly.cost_per_m2,
        operation: annual_energy_cost(assembly.u_value, ctx) * f64::from(years),
    };
    CostStructure {
        years,
        reference: split(reference),
        proposed: split(proposed),
    }
}
