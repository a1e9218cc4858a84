//! 명령행 인자 정의. 값이 주어진 항목만 설정 파일의 기본값을 덮어쓴다.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::evaluation::{EvaluationRequest, Scenario, DEFAULT_INSULATION_THICKNESS_MM};
use crate::materials::{InsulationType, WallType};
use crate::units::UnitSystem;

#[derive(Parser, Debug)]
#[command(
    name = "etics",
    about = "Compare a reference wall with an ETICS-insulated wall: U-value, cost, embodied carbon and payback",
    version
)]
pub struct Cli {
    /// Path of the TOML configuration file (created with defaults when missing)
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,
    /// UI language: auto, cs, en or ko
    #[arg(long, global = true, default_value = "auto")]
    pub lang: String,
    /// Log filter used when RUST_LOG is not set (e.g. warn, info, debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate one reference/proposal pair and print or export the result
    Compare(CompareArgs),
    /// List the wall and insulation catalogs
    Catalog(CatalogArgs),
    /// Menu-driven session (default command)
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Cumulative cost series in long format (year, variant, cumulative_cost)
    Csv,
    /// Full evaluation as JSON
    Json,
}

#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// new-build or renovation
    #[arg(long)]
    pub scenario: Option<Scenario>,
    /// Reference wall id (see `etics catalog`)
    #[arg(long)]
    pub wall: Option<WallType>,
    /// eps, mineral-wool or phenolic-foam
    #[arg(long)]
    pub insulation: Option<InsulationType>,
    /// Insulation thickness [mm], 0-300
    #[arg(long)]
    pub thickness: Option<f64>,
    /// Energy price [currency/kWh]
    #[arg(long)]
    pub price: Option<f64>,
    /// Heating degree-days [K·day/year]
    #[arg(long)]
    pub hdd: Option<f64>,
    /// Evaluation period [years], 10-50
    #[arg(long)]
    pub years: Option<u32>,
    /// Display units: si or imperial
    #[arg(long)]
    pub units: Option<UnitSystem>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl CompareArgs {
    /// 주어진 인자만 요청에 반영한다. 시나리오만 바꾸면 기준 벽체도 그 시나리오의 기본값으로 바꾼다.
    pub fn apply(&self, request: &mut EvaluationRequest) {
        if let Some(scenario) = self.scenario {
            if scenario != request.scenario && self.wall.is_none() {
                request.reference_wall = scenario.default_reference().id().to_string();
            }
            request.scenario = scenario;
        }
        if let Some(wall) = self.wall {
            request.reference_wall = wall.id().to_string();
        }
        if let Some(kind) = self.insulation {
            request.insulation = kind.id().to_string();
        }
        if let Some(thickness) = self.thickness {
            request.thickness_mm = thickness;
        }
        if let Some(price) = self.price {
            request.context.energy_price_per_kwh = price;
        }
        if let Some(hdd) = self.hdd {
            request.context.heating_degree_days = hdd;
        }
        if let Some(years) = self.years {
            request.context.horizon_years = years;
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Thickness used to price the insulation materials [mm]
    #[arg(long, default_value_t = DEFAULT_INSULATION_THICKNESS_MM)]
    pub thickness: f64,
    /// Display units: si or imperial
    #[arg(long)]
    pub units: Option<UnitSystem>,
}
