use serde::{Deserialize, Serialize};

/// 시뮬레이터가 다루는 냉각 방식.
///
/// 식별자 문자열(`air`, `dtc` 등)과 1:1로 대응하며, 모르는 식별자는
/// [`CoolingTech::from_id`]에서 공랭(`Air`)으로 폴백한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoolingTech {
    /// 팬 + 냉/온 복도 구성의 공랭
    #[default]
    Air,
    /// 칩 직접 수랭(cold plate)
    Dtc,
    /// 유전체 액침 냉각
    Imm,
    /// 상변화물질(PCM) 열 버퍼
    Pcm,
    /// 자기열량(magnetocaloric) 냉각
    Mag,
}

/// 냉각 방식별 대략적인 "능력치".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingProfile {
    /// 전력 밀도 스트레스 허용치(0~100)
    pub flux_capacity: f64,
    /// 무리 없이 감당하는 랙 전력(kW)
    pub infra_capacity: f64,
    /// 운영/용수 복잡도(0~100)
    pub complexity_cost: f64,
    pub display_name: &'static str,
}

const AIR: CoolingProfile = CoolingProfile {
    flux_capacity: 35.0,
    infra_capacity: 35.0,
    complexity_cost: 15.0,
    display_name: "Air",
};
const DTC: CoolingProfile = CoolingProfile {
    flux_capacity: 70.0,
    infra_capacity: 120.0,
    complexity_cost: 55.0,
    display_name: "Direct-to-chip",
};
const IMM: CoolingProfile = CoolingProfile {
    flux_capacity: 85.0,
    infra_capacity: 180.0,
    complexity_cost: 75.0,
    display_name: "Immersion",
};
const PCM: CoolingProfile = CoolingProfile {
    flux_capacity: 60.0,
    infra_capacity: 90.0,
    complexity_cost: 40.0,
    display_name: "PCM Buffer",
};
const MAG: CoolingProfile = CoolingProfile {
    flux_capacity: 65.0,
    infra_capacity: 100.0,
    complexity_cost: 35.0,
    display_name: "Magnetocaloric",
};

impl CoolingTech {
    /// 표에 등록된 모든 냉각 방식.
    pub const ALL: [CoolingTech; 5] = [
        CoolingTech::Air,
        CoolingTech::Dtc,
        CoolingTech::Imm,
        CoolingTech::Pcm,
        CoolingTech::Mag,
    ];

    /// 식별자를 정확히 일치하는 경우에만 해석한다.
    pub fn try_from_id(id: &str) -> Option<Self> {
        match id {
            "air" => Some(CoolingTech::Air),
            "dtc" => Some(CoolingTech::Dtc),
            "imm" => Some(CoolingTech::Imm),
            "pcm" => Some(CoolingTech::Pcm),
            "mag" => Some(CoolingTech::Mag),
            _ => None,
        }
    }

    /// 식별자를 해석한다. 알 수 없는 값은 공랭으로 폴백한다.
    pub fn from_id(id: &str) -> Self {
        Self::try_from_id(id).unwrap_or(CoolingTech::Air)
    }

    pub fn id(&self) -> &'static str {
        match self {
            CoolingTech::Air => "air",
            CoolingTech::Dtc => "dtc",
            CoolingTech::Imm => "imm",
            CoolingTech::Pcm => "pcm",
            CoolingTech::Mag => "mag",
        }
    }

    pub fn profile(&self) -> CoolingProfile {
        match self {
            CoolingTech::Air => AIR,
            CoolingTech::Dtc => DTC,
            CoolingTech::Imm => IMM,
            CoolingTech::Pcm => PCM,
            CoolingTech::Mag => MAG,
        }
    }
}

/// 식별자에 해당하는 냉각 프로파일을 돌려준다. 실패하지 않는다.
pub fn resolve_cooling_profile(tech_id: &str) -> CoolingProfile {
    CoolingTech::from_id(tech_id).profile()
}
