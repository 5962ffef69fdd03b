//! 냉각 스트레스 모델 관련 계산 모듈을 모아둔다.
//! 냉각 방식 프로파일 표, 스트레스 평가, 위험 등급, 조언 문구, 랙 히트맵으로 구성한다.

pub mod advisor;
pub mod profile;
pub mod rack_heat;
pub mod risk;
pub mod stress;

pub use profile::{resolve_cooling_profile, CoolingProfile, CoolingTech};
pub use risk::{classify_risk, thermal_status, RiskLevel, ThermalStatus};
pub use stress::{clamp, evaluate, RackConfig, StressResult};
