use serde::Serialize;

use super::thermal::{combined_u, ThermalError};
use crate::materials::{InsulationSpec, WallMaterial};

/// 기재 벽체 + (선택) 단열층으로 이루어진 외벽 구성. 평가마다 새로 만들고 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assembly {
    pub substrate: WallMaterial,
    pub insulation: Option<InsulationSpec>,
    /// 합성 열관류율 [W/m²K]
    pub u_value: f64,
    /// 총 시공 단가 [통화/m²]
    pub cost_per_m2: f64,
    /// 총 내재탄소 [kg CO2-eq/m²]
    pub gwp_per_m2: f64,
    /// 총 두께 [mm]
    pub thickness_mm: f64,
}

impl Assembly {
    /// 단열 없이 기재만으로 구성한다. 카탈로그 U값은 표면 열저항을 이미 포함하므로 그대로 쓴다.
    pub fn bare(substrate: WallMaterial) -> Result<Self, ThermalError> {
        let u_value = substrate.u_value;
        if !u_value.is_finite() || u_value <= 0.0 {
            return Err(ThermalError::NonPositiveSubstrateU(u_value));
        }
        Ok(Self {
            substrate,
            insulation: None,
            u_value,
            cost_per_m2: substrate.cost_per_m2,
            gwp_per_m2: substrate.gwp_per_m2,
            thickness_mm: substrate.thickness_mm,
        })
    }

    /// 기재 위에 단열층을 붙인 ETICS 구성. 두께 0이어도 표면 열저항을 더해 합성한다.

    pub fn compose(
        substrate: WallMaterial,
        insulation: Option<InsulationSpec>,
    ) -> Result<Self, ThermalError> {
        let u_value = combined_u(&substrate, insulation.as_ref())?;
        let (cost, gwp, thickness) = insulation
            .as_ref()
            .map(|layer| (layer.cost_per_m2, layer.gwp_per_m2, layer.thickness_mm.max(0.0)))
            .unwrap_or((0.0, 0.0, 0.0));
        Ok(Self {
            substrate,
            insulation,
            u_value,
            cost_per_m2: substrate.cost_per_m2 + cost,
            gwp_per_m2: substrate.gwp_per_m2 + gwp,
            thickness_mm: substrate.thickness_mm + thickness,
        })
    }

    pub fn is_insulated(&self) -> bool {
        self.insulation
            .as_ref()
            .is_some_and(|layer| layer.thickness_mm > 0.0)
    }
}
