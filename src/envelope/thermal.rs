use tracing::debug;

use crate::materials::{InsulationSpec, WallMaterial};

/// 실내외 표면 열저항 합계 (Rsi + Rse) [m²K/W]
pub const SURFACE_RESISTANCE_M2K_PER_W: f64 = 0.17;

/// 열관류율 계산 오류. 0으로 나누게 되는 잘못된 구성을 표현한다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThermalError {
    /// 기재 U값이 0 이하이거나 유한하지 않음
    #[error("기재 벽체의 U값은 0보다 커야 합니다: {0}")]
    NonPositiveSubstrateU(f64),
    /// 두께가 있는 단열층의 λ가 0 이하이거나 유한하지 않음
    #[error("단열재 열전도율은 0보다 커야 합니다 (λ={conductivity}, 두께 {thickness_mm} mm)")]
    NonPositiveConductivity { conductivity: f64, thickness_mm: f64 },
}

/// 단일 층의 열저항 R = d / λ [m²K/W]. 두께가 0 이하이면 층이 없는 것으로 본다.
pub fn layer_resistance(thickness_mm: f64, conductivity: f64) -> Result<f64, ThermalError> {
    if thickness_mm <= 0.0 {
        return Ok(0.0);
    }
    if !conductivity.is_finite() || conductivity <= 0.0 {
        return Err(ThermalError::NonPositiveConductivity {
            conductivity,
            thickness_mm,
        });
    }
    Ok((thickness_mm / 1000.0) / conductivity)
}

/// 기재와 단열층을 직렬 열저항으로 합성해 열관류율을 계산한다.
///
/// R = 1/U_기재 + d/λ + Rsi+Rse, U = 1/R
pub fn combined_u(
    substrate: &WallMaterial,
    insulation: Option<&InsulationSpec>,
) -> Result<f64, ThermalError> {
    let u_substrate = substrate.u_value;
    if !u_substrate.is_finite() || u_substrate <= 0.0 {
        return Err(ThermalError::NonPositiveSubstrateU(u_substrate));
    }
    let r_substrate = 1.0 / u_substrate;
    let r_insulation = match insulation {
        Some(layer) => layer_resistance(layer.thickness_mm, layer.conductivity)?,
        None => 0.0,
    };
    let r_total = r_substrate + r_insulation + SURFACE_RESISTANCE_M2K_PER_W;
    debug!(
        substrate = substrate.id,
        r_substrate, r_insulation, r_total, "combined thermal resistance"
    );
    Ok(1.0 / r_total)
}
