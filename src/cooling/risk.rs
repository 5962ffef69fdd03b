/// 점수 구간별 위험 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Med,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Med => "MED",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 0~100 점수를 위험 등급으로 분류한다.
/// 경계값은 위 등급에 속한다(30=MED, 55=HIGH, 80=CRITICAL).
pub fn classify_risk(score: f64) -> RiskLevel {
    if score < 30.0 {
        RiskLevel::Low
    } else if score < 55.0 {
        RiskLevel::Med
    } else if score < 80.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// 상단 상태 표시등 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThermalStatus {
    Nominal,
    Watch,
    Hot,
    Limit,
}

impl ThermalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ThermalStatus::Nominal => "THERMAL: NOMINAL",
            ThermalStatus::Watch => "THERMAL: WATCH",
            ThermalStatus::Hot => "THERMAL: HOT",
            ThermalStatus::Limit => "THERMAL: LIMIT",
        }
    }
}

/// 과열 위험과 인프라 난이도 중 큰 값으로 전체 상태를 정한다.
pub fn thermal_status(hotspot_risk: f64, infra_difficulty: f64) -> ThermalStatus {
    let s = hotspot_risk.max(infra_difficulty);
    if s < 35.0 {
        ThermalStatus::Nominal
    } else if s < 60.0 {
        ThermalStatus::Watch
    } else if s < 80.0 {
        ThermalStatus::Hot
    } else {
        ThermalStatus::Limit
    }
}
