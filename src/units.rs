//! 보고서 표시용 단위 변환. 계산은 항상 SI(W/m²K, W/m·K, mm)로 수행하고 출력할 때만 변환한다.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 1 Btu/(h·ft²·°F) = 5.678263 W/(m²·K)
const W_PER_M2K_PER_BTU_H_FT2_F: f64 = 5.678263;
/// 1 Btu/(h·ft·°F) = 1.730735 W/(m·K)
const W_PER_MK_PER_BTU_H_FT_F: f64 = 1.730735;
const MM_PER_INCH: f64 = 25.4;

/// 출력 단위 체계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    #[default]
    Si,
    Imperial,
}

impl UnitSystem {
    pub fn u_value(self, w_per_m2k: f64) -> f64 {
        match self {
            UnitSystem::Si => w_per_m2k,
            UnitSystem::Imperial => w_per_m2k / W_PER_M2K_PER_BTU_H_FT2_F,
        }
    }

    pub fn u_value_unit(self) -> &'static str {
        match self {
            UnitSystem::Si => "W/m²K",
            UnitSystem::Imperial => "Btu/h·ft²·°F",
        }
    }

    pub fn conductivity(self, w_per_mk: f64) -> f64 {
        match self {
            UnitSystem::Si => w_per_mk,
            UnitSystem::Imperial => w_per_mk / W_PER_MK_PER_BTU_H_FT_F,
        }
    }

    pub fn conductivity_unit(self) -> &'static str {
        match self {
            UnitSystem::Si => "W/m·K",
            UnitSystem::Imperial => "Btu/h·ft·°F",
        }
    }

    pub fn thickness(self, mm: f64) -> f64 {
        match self {
            UnitSystem::Si => mm,
            UnitSystem::Imperial => mm / MM_PER_INCH,
        }
    }

    pub fn thickness_unit(self) -> &'static str {
        match self {
            UnitSystem::Si => "mm",
            UnitSystem::Imperial => "in",
        }
    }

    /// 두께 표시 소수 자릿수 (mm는 정수, inch는 한 자리).
    pub fn thickness_decimals(self) -> usize {
        match self {
            UnitSystem::Si => 0,
            UnitSystem::Imperial => 1,
        }
    }

    /// 두께를 단위 기호와 함께 문자열로 만든다.
    pub fn format_thickness(self, mm: f64) -> String {
        format!(
            "{:.*} {}",
            self.thickness_decimals(),
            self.thickness(mm),
            self.thickness_unit()
        )
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Si => f.write_str("si"),
            UnitSystem::Imperial => f.write_str("imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "si" | "metric" => Ok(UnitSystem::Si),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            other => Err(format!("알 수 없는 단위 체계: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_is_identity() {
        assert_eq!(UnitSystem::Si.u_value(0.159), 0.159);
        assert_eq!(UnitSystem::Si.format_thickness(460.0), "460 mm");
    }

    #[test]
    fn imperial_u_value_and_thickness() {
        let u = UnitSystem::Imperial.u_value(W_PER_M2K_PER_BTU_H_FT2_F);
        assert!((u - 1.0).abs() < 1e-12);
        assert_eq!(UnitSystem::Imperial.format_thickness(254.0), "10.0 in");
    }

    #[test]
    fn parse_unit_system() {
        assert_eq!("Imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }
}
