//! ETICS 단열재 카탈로그. 단가는 단열재 + 접착제 + 앵커 + 마감 미장을 합한 참고치이다.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::CatalogError;

/// 단열재 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsulationType {
    /// EPS 70F (발포 폴리스티렌)
    Eps,
    /// MWF (미네랄울)
    MineralWool,
    /// 페놀폼
    PhenolicFoam,
}

impl InsulationType {
    pub const ALL: [InsulationType; 3] = [
        InsulationType::Eps,
        InsulationType::MineralWool,
        InsulationType::PhenolicFoam,
    ];

    pub fn id(self) -> &'static str {
        match self {
            InsulationType::Eps => "eps",
            InsulationType::MineralWool => "mineral-wool",
            InsulationType::PhenolicFoam => "phenolic-foam",
        }
    }

    /// 제품 표기명.
    pub fn product_name(self) -> &'static str {
        match self {
            InsulationType::Eps => "EPS 70F",
            InsulationType::MineralWool => "MWF",
            InsulationType::PhenolicFoam => "PF",
        }
    }

    /// 두께와 무관한 가격/물성 계수.
    pub fn pricing(self) -> &'static InsulationPricing {
        match self {
            InsulationType::Eps => &EPS,
            InsulationType::MineralWool => &MINERAL_WOOL,
            InsulationType::PhenolicFoam => &PHENOLIC_FOAM,
        }
    }
}

impl fmt::Display for InsulationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InsulationType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "eps" | "eps 70f" | "eps-70f" | "polystyrene" => Ok(InsulationType::Eps),
            "mineral-wool" | "mineral_wool" | "mwf" | "mineral wool" => {
                Ok(InsulationType::MineralWool)
            }
            "phenolic-foam" | "phenolic_foam" | "pf" | "phenolic foam" => {
                Ok(InsulationType::PhenolicFoam)
            }
            _ => Err(CatalogError::UnknownInsulation(s.trim().to_string())),
        }
    }
}

/// 단열재별 가격/물성 계수. 가격과 내재탄소는 두께에 대해 1차식이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsulationPricing {
    /// 두께 0 외삽 기본가 [통화/m²]
    pub base_price: f64,
    /// 두께당 추가 단가 [통화/m²·mm]
    pub price_per_mm: f64,
    /// 열전도율 λ [W/m·K]
    pub conductivity: f64,
    pub gwp_base: f64,
    /// [kg CO2-eq/m²·mm]
    pub gwp_per_mm: f64,
}

const EPS: InsulationPricing = InsulationPricing {
    base_price: 1100.0,
    price_per_mm: 2.5,
    conductivity: 0.039,
    gwp_base: 10.0,
    gwp_per_mm: 0.1,
};

const MINERAL_WOOL: InsulationPricing = InsulationPricing {
    base_price: 1400.0,
    price_per_mm: 4.0,
    conductivity: 0.036,
    gwp_base: 12.0,
    gwp_per_mm: 0.15,
};

const PHENOLIC_FOAM: InsulationPricing = InsulationPricing {
    base_price: 2100.0,
    price_per_mm: 5.0,
    conductivity: 0.022,
    gwp_base: 20.0,
    gwp_per_mm: 0.2,
};

/// 특정 두께로 산정된 단열층.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsulationSpec {
    /// 알 수 없는 종류로 조회했으면 None (모든 값이 0인 사양).
    pub kind: Option<InsulationType>,
    pub thickness_mm: f64,
    /// [통화/m²]
    pub cost_per_m2: f64,
    /// λ [W/m·K]
    pub conductivity: f64,
    /// [kg CO2-eq/m²]
    pub gwp_per_m2: f64,
}

impl InsulationSpec {
    /// 가격/λ/탄소가 모두 0인 사양. 두께는 그대로 유지한다.
    pub fn zeroed(thickness_mm: f64) -> Self {
        Self {
            kind: None,
            thickness_mm,
            cost_per_m2: 0.0,
            conductivity: 0.0,
            gwp_per_m2: 0.0,
        }
    }
}

/// 단열재 종류와 두께로 사양을 산정한다.
///
/// 두께 0은 "ETICS 미시공"으로 보고 가격/탄소를 더하지 않는다. λ는 그대로 둔다.
pub fn lookup(kind: InsulationType, thickness_mm: f64) -> InsulationSpec {
    let p = kind.pricing();
    let (cost_per_m2, gwp_per_m2) = if thickness_mm > 0.0 {
        (
            p.base_price + thickness_mm * p.price_per_mm,
            p.gwp_base + thickness_mm * p.gwp_per_mm,
        )
    } else {
        (0.0, 0.0)
    };
    InsulationSpec {
        kind: Some(kind),
        thickness_mm,
        cost_per_m2,
        conductivity: p.conductivity,
        gwp_per_m2,
    }
}

/// 이름으로 조회한다. 모르는 이름은 오류 대신 0값 사양을 돌려준다.
///
/// 0값 사양은 λ=0이므로 두께가 있으면 열관류율 계산 단계에서 구성 오류가 된다.
pub fn lookup_by_name(name: &str, thickness_mm: f64) -> InsulationSpec {
    match name.parse::<InsulationType>() {
        Ok(kind) => lookup(kind, thickness_mm),
        Err(_) => {
            warn!(requested = name, "unknown insulation type, using zero-valued spec");
            InsulationSpec::zeroed(thickness_mm)
        }
    }
}
