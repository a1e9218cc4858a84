//! 벽체(조적) 카탈로그. U값/단가/내재탄소/두께를 고정 테이블로 제공한다.
//! 값은 참고용 시장 평균치이며 실제 설계 시 제조사 자료로 검증해야 한다.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::CatalogError;

/// 카탈로그에 등록된 벽체 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallType {
    #[serde(rename = "porotherm-44-profi")]
    Porotherm44Profi,
    #[serde(rename = "heluz-family-50")]
    HeluzFamily50,
    #[serde(rename = "ytong-lambda-yq-450")]
    YtongLambdaYq450,
    #[serde(rename = "legacy-solid-brick-450")]
    LegacySolidBrick450,
    #[serde(rename = "porotherm-30-profi")]
    Porotherm30Profi,
}

/// 식별자 조회 실패 시 대신 사용하는 기재(ETICS용 내력벽).
pub const DEFAULT_SUBSTRATE: WallType = WallType::Porotherm30Profi;

impl WallType {
    pub const ALL: [WallType; 5] = [
        WallType::Porotherm44Profi,
        WallType::HeluzFamily50,
        WallType::YtongLambdaYq450,
        WallType::LegacySolidBrick450,
        WallType::Porotherm30Profi,
    ];

    /// 카탈로그 항목을 반환한다.
    pub fn material(self) -> &'static WallMaterial {
        // WALLS는 열거형 선언 순서와 같은 순서로 정렬되어 있다.
        &WALLS[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.material().id
    }
}

impl fmt::Display for WallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WallType {
    type Err = CatalogError;

    /// 엄격 조회. 모르는 식별자는 폴백하지 않고 오류로 돌려준다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_material(s)
            .map(|m| m.wall)
            .ok_or_else(|| CatalogError::UnknownWall(s.trim().to_string()))
    }
}

/// 벽체 한 종류의 물성/경제성 데이터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallMaterial {
    pub wall: WallType,
    pub id: &'static str,
    pub name: &'static str,
    /// 열관류율 [W/m²K]
    pub u_value: f64,
    /// 시공 단가 [통화/m²]. 이미 서 있는 기존 벽체는 0.
    pub cost_per_m2: f64,
    /// 내재탄소(GWP) [kg CO2-eq/m²]
    pub gwp_per_m2: f64,
    /// 벽 두께 [mm]
    pub thickness_mm: f64,
}

pub fn walls() -> &'static [WallMaterial] {
    WALLS
}

/// 식별자 또는 표시 이름(대소문자 무시)으로 벽체를 찾는다.
pub fn find_material(key: &str) -> Option<&'static WallMaterial> {
    let key = key.trim();
    WALLS
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(key) || m.name.eq_ignore_ascii_case(key))
}

/// 벽체를 조회한다. 모르는 식별자는 오류 대신 기본 기재(`DEFAULT_SUBSTRATE`)로 폴백한다.
///
/// 화면 쪽에서 시나리오와 맞지 않는 조합을 넘겨도 계산이 멈추지 않도록 하는 정책이며,
/// 폴백이 일어나면 경고 로그를 남긴다. 오류가 필요하면 `WallType::from_str`을 쓴다.
pub fn lookup(key: &str) -> WallMaterial {
    match find_material(key) {
        Some(material) => *material,
        None => {
            warn!(
                requested = key,
                fallback = DEFAULT_SUBSTRATE.id(),
                "unknown wall id, falling back to default substrate"
            );
            *DEFAULT_SUBSTRATE.material()
        }
    }
}

const WALLS: &[WallMaterial] = &[
    WallMaterial {
        wall: WallType::Porotherm44Profi,
        id: "porotherm-44-profi",
        name: "Porotherm 44 Profi (single-layer)",
        u_value: 0.19,
        cost_per_m2: 2850.0,
        gwp_per_m2: 42.0,
        thickness_mm: 440.0,
    },
    WallMaterial {
        wall: WallType::HeluzFamily50,
        id: "heluz-family-50",
        name: "Heluz Family 50 2in1 (single-layer)",
        u_value: 0.11,
        cost_per_m2: 3400.0,
        gwp_per_m2: 38.5,
        thickness_mm: 500.0,
    },
    WallMaterial {
        wall: WallType::YtongLambdaYq450,
        id: "ytong-lambda-yq-450",
        name: "Ytong Lambda YQ 450 (single-layer)",
        u_value: 0.18,
        cost_per_m2: 2600.0,
        gwp_per_m2: 28.0,
        thickness_mm: 450.0,
    },
    WallMaterial {
        wall: WallType::LegacySolidBrick450,
        id: "legacy-solid-brick-450",
        name: "Old solid brick 450 mm (renovation)",
        u_value: 1.45,
        cost_per_m2: 0.0,
        gwp_per_m2: 0.0,
        thickness_mm: 450.0,
    },
    WallMaterial {
        wall: WallType::Porotherm30Profi,
        id: "porotherm-30-profi",
        name: "Porotherm 30 Profi (load-bearing for ETICS)",
        u_value: 0.50,
        cost_per_m2: 1600.0,
        gwp_per_m2: 25.0,
        thickness_mm: 300.0,
    },
];
