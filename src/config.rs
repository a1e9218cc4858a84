use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::economics::EvaluationContext;
use crate::evaluation::{EvaluationRequest, Scenario, DEFAULT_INSULATION_THICKNESS_MM};
use crate::materials::InsulationType;
use crate::units::UnitSystem;

/// 비교 화면을 열었을 때 채워지는 기본 입력값.
///
/// 벽체/단열재는 사람이 편집하는 파일이므로 문자열로 두고, 모르는 값은 평가 단계의
/// 카탈로그 폴백 규칙을 따른다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationDefaults {
    pub scenario: Scenario,
    pub reference_wall: String,
    pub insulation: String,
    pub thickness_mm: f64,
    /// [통화/kWh]
    pub energy_price_per_kwh: f64,
    pub heating_degree_days: f64,
    pub horizon_years: u32,
}

impl Default for EvaluationDefaults {
    fn default() -> Self {
        let ctx = EvaluationContext::default();
        Self {
            scenario: Scenario::NewBuild,
            reference_wall: Scenario::NewBuild.default_reference().id().to_string(),
            insulation: InsulationType::Eps.id().to_string(),
            thickness_mm: DEFAULT_INSULATION_THICKNESS_MM,
            energy_price_per_kwh: ctx.energy_price_per_kwh,
            heating_degree_days: ctx.heating_degree_days,
            horizon_years: ctx.horizon_years,
        }
    }
}

impl EvaluationDefaults {
    pub fn to_request(&self) -> EvaluationRequest {
        EvaluationRequest {
            scenario: self.scenario,
            reference_wall: self.reference_wall.clone(),
            insulation: self.insulation.clone(),
            thickness_mm: self.thickness_mm,
            context: EvaluationContext {
                energy_price_per_kwh: self.energy_price_per_kwh,
                heating_degree_days: self.heating_degree_days,
                horizon_years: self.horizon_years,
            },
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / cs / en / ko
    pub language: String,
    /// TOML 언어팩 디렉터리 (없으면 locales/ 후 내장 문자열)
    pub language_pack_dir: Option<String>,
    pub unit_system: UnitSystem,
    /// RUST_LOG가 없을 때 쓰는 로그 필터
    pub log_level: String,
    pub defaults: EvaluationDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            unit_system: UnitSystem::Si,
            log_level: "warn".to_string(),
            defaults: EvaluationDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 읽기만 한다. 파일이 없으면 기본 설정을 돌려주고 파일은 만들지 않는다.
pub fn read(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        read(path)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
