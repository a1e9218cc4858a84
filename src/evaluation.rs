//! 입력 검증 → 벽체 구성 → 경제성 비교 → 누적 비용 추이까지 한 번에 수행하는 평가 파이프라인.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::economics::projection::BREAKDOWN_YEARS;
use crate::economics::{
    compare, cost_breakdown, project, Comparison, CostStructure, EvaluationContext,
    ProjectionPoint,
};
use crate::envelope::{Assembly, ThermalError};
use crate::materials::{insulation_catalog, wall_catalog, WallType};

pub const MAX_INSULATION_THICKNESS_MM: f64 = 300.0;
/// 화면 슬라이더의 두께 간격. 계산 자체는 임의 두께를 허용한다.
pub const INSULATION_THICKNESS_STEP_MM: f64 = 20.0;
pub const DEFAULT_INSULATION_THICKNESS_MM: f64 = 160.0;
pub const MIN_HORIZON_YEARS: u32 = 10;
pub const MAX_HORIZON_YEARS: u32 = 50;

/// 비교 시나리오.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// 신축: 단일벽(조적) 대비 내력벽 + ETICS
    #[default]
    NewBuild,
    /// 리모델링: 기존 벽체(시공비 0) 대비 내력벽 + ETICS
    Renovation,
}

const NEW_BUILD_REFERENCES: &[WallType] = &[
    WallType::Porotherm44Profi,
    WallType::HeluzFamily50,
    WallType::YtongLambdaYq450,
    WallType::Porotherm30Profi,
];

const RENOVATION_REFERENCES: &[WallType] = &[WallType::LegacySolidBrick450];

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::NewBuild, Scenario::Renovation];

    pub fn id(self) -> &'static str {
        match self {
            Scenario::NewBuild => "new-build",
            Scenario::Renovation => "renovation",
        }
    }

    /// 기준안으로 선택 가능한 벽체 목록.
    pub fn reference_options(self) -> &'static [WallType] {
        match self {
            Scenario::NewBuild => NEW_BUILD_REFERENCES,
            Scenario::Renovation => RENOVATION_REFERENCES,
        }
    }

    pub fn default_reference(self) -> WallType {
        self.reference_options()[0]
    }

    pub fn offers(self, wall: WallType) -> bool {
        self.reference_options().contains(&wall)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Scenario {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new-build" | "new_build" | "newbuild" | "new" => Ok(Scenario::NewBuild),
            "renovation" | "reno" => Ok(Scenario::Renovation),
            other => Err(InputError::UnknownScenario(other.to_string())),
        }
    }
}

/// 경계 계층에서 거부되는 잘못된 입력.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("단열 두께는 0~{max} mm 범위여야 합니다: {value}")]
    ThicknessOutOfRange { value: f64, max: f64 },
    #[error("에너지 단가는 0 이상의 유한한 값이어야 합니다: {0}")]
    InvalidEnergyPrice(f64),
    #[error("난방 도일은 0 이상의 유한한 값이어야 합니다: {0}")]
    InvalidDegreeDays(f64),
    #[error("평가 기간은 {min}~{max}년 범위여야 합니다: {value}")]
    HorizonOutOfRange { value: u32, min: u32, max: u32 },
    #[error("알 수 없는 시나리오: {0}")]
    UnknownScenario(String),
}

/// 평가 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    /// 범위를 벗어나거나 음수인 입력
    #[error("입력 오류: {0}")]
    InvalidInput(#[from] InputError),
    /// 0으로 나누게 되는 카탈로그/구성 조합
    #[error("구성 오류: {0}")]
    Configuration(#[from] ThermalError),
}

/// 사용자 입력 한 벌. 벽체/단열재는 화면에서 넘어온 식별자 그대로 받는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub scenario: Scenario,
    pub reference_wall: String,
    pub insulation: String,
    pub thickness_mm: f64,
    pub context: EvaluationContext,
}

impl Default for EvaluationRequest {
    fn default() -> Self {
        let scenario = Scenario::default();
        Self {
            scenario,
            reference_wall: scenario.default_reference().id().to_string(),
            insulation: crate::materials::InsulationType::Eps.id().to_string(),
            thickness_mm: DEFAULT_INSULATION_THICKNESS_MM,
            context: EvaluationContext::default(),
        }
    }
}

/// 평가 결과 묶음. 화면/내보내기 계층이 그대로 사용한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub scenario: Scenario,
    pub context: EvaluationContext,
    pub reference: Assembly,
    pub proposed: Assembly,
    pub comparison: Comparison,
    pub projection: Vec<ProjectionPoint>,
    pub cost_structure: CostStructure,
}

pub fn validate_thickness(thickness_mm: f64) -> Result<(), InputError> {
    if !thickness_mm.is_finite() || !(0.0..=MAX_INSULATION_THICKNESS_MM).contains(&thickness_mm) {
        return Err(InputError::ThicknessOutOfRange {
            value: thickness_mm,
            max: MAX_INSULATION_THICKNESS_MM,
        });
    }
    Ok(())
}

pub fn validate_context(ctx: &EvaluationContext) -> Result<(), InputError> {
    if !ctx.energy_price_per_kwh.is_finite() || ctx.energy_price_per_kwh < 0.0 {
        return Err(InputError::InvalidEnergyPrice(ctx.energy_price_per_kwh));
    }
    if !ctx.heating_degree_days.is_finite() || ctx.heating_degree_days < 0.0 {
        return Err(InputError::InvalidDegreeDays(ctx.heating_degree_days));
    }
    if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&ctx.horizon_years) {
        return Err(InputError::HorizonOutOfRange {
            value: ctx.horizon_years,
            min: MIN_HORIZON_YEARS,
            max: MAX_HORIZON_YEARS,
        });
    }
    Ok(())
}

/// 요청 하나를 처음부터 끝까지 다시 계산한다. 캐시나 이전 상태는 없다.
pub fn evaluate(request: &EvaluationRequest) -> Result<Evaluation, EvaluationError> {
    validate_thickness(request.thickness_mm)?;
    validate_context(&request.context)?;

    let reference_wall = wall_catalog::lookup(&request.reference_wall);
    if !request.scenario.offers(reference_wall.wall) {
        warn!(
            scenario = request.scenario.id(),
            wall = reference_wall.id,
            "reference wall is not offered by scenario"
        );
    }
    let reference = Assembly::bare(reference_wall)?;

    // 제안안은 시나리오와 관계없이 항상 ETICS용 내력벽 위에 단열재를 붙인다.
    let substrate = *wall_catalog::DEFAULT_SUBSTRATE.material();
    let insulation = insulation_catalog::lookup_by_name(&request.insulation, request.thickness_mm);
    let proposed = Assembly::compose(substrate, Some(insulation))?;

    let ctx = request.context;
    let comparison = compare(&reference, &proposed, &ctx);
    let projection = project(&reference, &proposed, &ctx);
    let cost_structure = cost_breakdown(&reference, &proposed, &ctx, BREAKDOWN_YEARS);

    info!(
        scenario = request.scenario.id(),
        reference = reference.substrate.id,
        insulation = %request.insulation,
        thickness_mm = request.thickness_mm,
        reference_u = reference.u_value,
        proposed_u = proposed.u_value,
        annual_savings = comparison.annual_savings,
        "evaluation complete"
    );

    Ok(Evaluation {
        scenario: request.scenario,
        context: ctx,
        reference,
        proposed,
        comparison,
        projection,
        cost_structure,
    })
}
