use serde::{Deserialize, Serialize};

use super::profile::{CoolingProfile, CoolingTech};

/// 랙 구성 입력값. 평가할 때마다 현재 입력으로 새로 만든다.
///
/// 0이나 음수도 거부하지 않는다. 결과 점수는 모두 클램프되므로
/// 퇴화된 값(예: GPU 0개 → 0 kW)이 나올 뿐 실패하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackConfig {
    /// GPU 1개당 전력(W)
    pub gpu_power_watts: f64,
    /// 서버당 GPU 수
    pub gpus_per_server: u32,
    /// 랙당 서버 수
    pub servers_per_rack: u32,
    /// 전원/네트워크 등 부가 전력(GPU 전력 대비 %)
    pub overhead_percent: f64,
    pub cooling: CoolingTech,
}

impl Default for RackConfig {
    fn default() -> Self {
        Self {
            gpu_power_watts: 700.0,
            gpus_per_server: 8,
            servers_per_rack: 4,
            overhead_percent: 20.0,
            cooling: CoolingTech::Air,
        }
    }
}

impl RackConfig {
    /// 냉각 방식을 식별자 문자열로 지정한다. 모르는 식별자는 공랭이 된다.
    pub fn with_cooling_id(mut self, tech_id: &str) -> Self {
        self.cooling = CoolingTech::from_id(tech_id);
        self
    }
}

/// 스트레스 평가 결과 스냅샷.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressResult {
    /// 랙 전체 전력(kW)
    pub rack_power_kw: f64,
    /// 칩 단위 열밀도 스트레스(0~100)
    pub flux_stress: f64,
    /// 국부 과열 위험(20~100)
    pub hotspot_risk: f64,
    /// 인프라 난이도(0~100)
    pub infra_difficulty: f64,
    /// 용수/운영 복잡도(0~100)
    pub complexity_score: f64,
    /// 평가에 사용한 프로파일
    pub profile: CoolingProfile,
}

/// `n`을 `[lo, hi]` 범위로 제한한다. NaN은 그대로 통과한다.
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    if n > hi {
        hi
    } else if n < lo {
        lo
    } else {
        n
    }
}

/// 랙 구성과 냉각 방식으로 스트레스 지표를 계산한다.
///
/// 가중치(1.4, 120, 0.75/0.55, 0.9/0.55/0.35, 30 상한)는 보정 상수로
/// 고정되어 있다. 같은 입력에는 항상 비트 단위로 같은 결과를 낸다.
pub fn evaluate(config: &RackConfig) -> StressResult {
    let gpus_per_server = f64::from(config.gpus_per_server);
    let servers_per_rack = f64::from(config.servers_per_rack);

    let total_gpu_w = config.gpu_power_watts * gpus_per_server * servers_per_rack;
    let overhead_w = total_gpu_w * (config.overhead_percent / 100.0);
    let rack_power_kw = (total_gpu_w + overhead_w) / 1000.0;

    // 칩당 전력 밀도 + 서버당 칩 개수 밀도
    let flux_stress = clamp(
        (config.gpu_power_watts / 1500.0) * 60.0 + (gpus_per_server / 16.0) * 40.0,
        0.0,
        100.0,
    );

    let profile = config.cooling.profile();

    // 허용치 이하의 여유분은 점수에 반영하지 않는다
    let flux_overage = clamp((flux_stress - profile.flux_capacity) * 1.4, 0.0, 100.0);
    let density_overage = clamp(
        ((rack_power_kw - profile.infra_capacity) / profile.infra_capacity.max(1.0)) * 120.0,
        0.0,
        100.0,
    );

    let hotspot_risk = clamp(
        20.0 + flux_overage * 0.75 + density_overage * 0.55,
        0.0,
        100.0,
    );
    let infra_difficulty = clamp(
        density_overage * 0.9 + profile.complexity_cost * 0.55 + flux_overage * 0.35,
        0.0,
        100.0,
    );
    let complexity_score = clamp(
        profile.complexity_cost + clamp((rack_power_kw / 200.0) * 30.0, 0.0, 30.0),
        0.0,
        100.0,
    );

    StressResult {
        rack_power_kw,
        flux_stress,
        hotspot_risk,
        infra_difficulty,
        complexity_score,
        profile,
    }
}
