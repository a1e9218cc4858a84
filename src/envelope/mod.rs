//! 외벽 구성(기재 + 단열층)의 열적 성능 계산 모듈 모음.

pub mod assembly;
pub mod thermal;

pub use assembly::Assembly;
pub use thermal::{combined_u, ThermalError, SURFACE_RESISTANCE_M2K_PER_W};
