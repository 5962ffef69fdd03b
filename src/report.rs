//! 평가 결과를 화면/터미널 표시용 문자열과 막대 비율로 정리한다.

use crate::cooling::advisor;
use crate::cooling::rack_heat;
use crate::cooling::{
    clamp, classify_risk, evaluate, thermal_status, RackConfig, StressResult, ThermalStatus,
};

/// 0~100 값을 정수 퍼센트 문자열로 만든다. 반올림은 0.5에서 올린다.
pub fn pct(n: f64) -> String {
    format!("{:.0}%", clamp(n, 0.0, 100.0).round())
}

/// 랙 전력 표시 문자열(소수 첫째 자리).
pub fn format_kw(kw: f64) -> String {
    format!("{:.1} kW", (kw * 10.0).round() / 10.0)
}

/// "HIGH (63)" 형식의 점수 표시 문자열.
pub fn format_score(score: f64) -> String {
    format!("{} ({:.0})", classify_risk(score), score.round())
}

/// 막대 그래프 채움 비율(0~1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFills {
    pub rack: f64,
    pub flux: f64,
    pub hotspot: f64,
    pub difficulty: f64,
}

/// 한 번의 평가를 표시용으로 묶은 결과.
#[derive(Debug, Clone)]
pub struct StressReport {
    pub result: StressResult,
    pub rack_power: String,
    pub flux: String,
    pub hotspot: String,
    pub difficulty: String,
    pub water: String,
    pub fills: BarFills,
    pub status: ThermalStatus,
    pub callout: String,
    /// 랙 히트맵 강도(0~1)
    pub rack_heat: f64,
}

impl StressReport {
    /// 구성을 평가하고 표시용 필드를 채운다.
    pub fn build(config: &RackConfig) -> Self {
        let result = evaluate(config);
        let fills = BarFills {
            rack: clamp(result.rack_power_kw / 200.0, 0.0, 1.0),
            flux: result.flux_stress / 100.0,
            hotspot: result.hotspot_risk / 100.0,
            difficulty: result.infra_difficulty / 100.0,
        };
        Self {
            rack_power: format_kw(result.rack_power_kw),
            flux: format_score(result.flux_stress),
            hotspot: format_score(result.hotspot_risk),
            difficulty: format_score(result.infra_difficulty),
            water: format_score(result.complexity_score),
            fills,
            status: thermal_status(result.hotspot_risk, result.infra_difficulty),
            callout: advisor::callout(config, &result),
            rack_heat: rack_heat::rack_heat(&result),
            result,
        }
    }
}
