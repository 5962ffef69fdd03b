use super::stress::{clamp, StressResult};

/// 랙 히트맵 셀 개수.
pub const RACK_CELLS: usize = 60;

/// 첫 평가 전 랙에 표시하는 기본 열 강도.
pub const IDLE_HEAT: f64 = 0.2;

/// 평가 결과를 0~1 범위의 랙 열 강도로 환산한다.
pub fn rack_heat(result: &StressResult) -> f64 {
    clamp(
        (result.hotspot_risk * 0.65 + result.infra_difficulty * 0.35) / 100.0,
        0.0,
        1.0,
    )
}

/// 셀마다 약간씩 흔들린 열 강도(0~1)를 계산한다.
pub fn rack_cells(heat: f64) -> Vec<f64> {
    (0..RACK_CELLS)
        .map(|i| {
            let jitter = ((i as f64 * 1.7 + heat * 10.0).sin() + 1.0) * 0.5;
            clamp(heat * 0.85 + jitter * 0.25, 0.0, 1.0)
        })
        .collect()
}
