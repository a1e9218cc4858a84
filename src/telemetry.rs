//! 로그 구독자 초기화. RUST_LOG가 있으면 우선하고, 없으면 설정의 log_level을 쓴다.
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("잘못된 로그 필터 '{value}': {source}")]
    EnvFilter { value: String, source: ParseError },
    #[error("로그 초기화 오류: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// 표준 오류로 간결한 로그를 출력하도록 구독자를 설치한다. 표준 출력은 보고서/내보내기 전용이다.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
