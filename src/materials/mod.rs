//! 벽체/단열재 카탈로그 모듈 모음.

pub mod insulation_catalog;
pub mod wall_catalog;

pub use insulation_catalog::{InsulationSpec, InsulationType};
pub use wall_catalog::{WallMaterial, WallType};

/// 카탈로그 조회(엄격 모드) 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// 등록되지 않은 벽체 식별자
    #[error("알 수 없는 벽체: {0}")]
    UnknownWall(String),
    /// 등록되지 않은 단열재 종류
    #[error("알 수 없는 단열재: {0}")]
    UnknownInsulation(String),
}
