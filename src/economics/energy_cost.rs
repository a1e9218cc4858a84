use serde::{Deserialize, Serialize};

const HOURS_PER_DAY: f64 = 24.0;
const WH_PER_KWH: f64 = 1000.0;

/// 한 번의 평가에 공통으로 쓰이는 기후/가격 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// 에너지 단가 [통화/kWh]
    pub energy_price_per_kwh: f64,
    /// 난방 도일(HDD) [K·day/년]
    pub heating_degree_days: f64,
    /// 평가 기간 [년]
    pub horizon_years: u32,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self {
            energy_price_per_kwh: 5.0,
            heating_degree_days: 3800.0,
            horizon_years: 30,
        }
    }
}

/// 도일법으로 벽체 1 m²의 연간 열손실량을 추정한다 [kWh/m²·년].
///
/// Q = U · 24 · HDD / 1000 (정상상태 근사, 동적 해석 아님)
pub fn annual_heat_loss_kwh_per_m2(u_value: f64, heating_degree_days: f64) -> f64 {
    u_value * HOURS_PER_DAY * heating_degree_days / WH_PER_KWH
}

/// 연간 난방 에너지 비용 [통화/m²·년].
pub fn annual_energy_cost(u_value: f64, ctx: &EvaluationContext) -> f64 {
    annual_heat_loss_kwh_per_m2(u_value, ctx.heating_degree_days) * ctx.energy_price_per_kwh
}
