//! 벽체 비교 계산 로직을 라이브러리로 분리하여 CLI 외의 화면(대시보드 등)에서도 재사용한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod economics;
pub mod envelope;
pub mod evaluation;
pub mod i18n;
pub mod materials;
pub mod report;
pub mod telemetry;
pub mod ui_cli;
pub mod units;
