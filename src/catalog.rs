//! 현재 데이터센터에서 쓰이는 냉각 방식 카드 목록.

/// 카드 한 장의 내용.
#[derive(Debug, Clone, Copy)]
pub struct TechCard {
    pub id: &'static str,
    pub title: &'static str,
    pub sub: &'static str,
    pub tags: &'static [&'static str],
    /// 동작 원리 한 줄 설명
    pub how: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

pub const CARDS: &[TechCard] = &[
    TechCard {
        id: "air",
        title: "Air Cooling",
        sub: "Fans + cold aisle / hot aisle. Legacy baseline.",
        tags: &["cheap", "simple", "fails at high density"],
        how: "Move cool air through racks; exhaust hot air out. Room-level CRAC/CRAH units do the heavy lifting.",
        pros: &["Lowest complexity"],
        cons: &["Poor for >30-50kW racks", "Hotspots become brutal"],
    },
    TechCard {
        id: "dtc",
        title: "Direct-to-Chip Liquid",
        sub: "Cold plates on GPUs/CPUs + facility water loop.",
        tags: &["mainstream for AI", "efficient", "serviceable"],
        how: "Liquid cold plates pull heat from GPU/CPU; coolant loops carry heat to heat exchangers.",
        pros: &["Most common modern approach for AI clusters", "Scales to high kW/rack"],
        cons: &["Still limited by hotspots + interface resistance"],
    },
    TechCard {
        id: "imm",
        title: "Immersion Cooling",
        sub: "Servers submerged in dielectric fluid (single/two-phase).",
        tags: &["high density", "hard ops", "very effective"],
        how: "Entire boards sit in non-conductive fluid; heat transfers directly into the fluid.",
        pros: &["Excellent heat transfer", "Can unlock very high rack densities"],
        cons: &["Maintenance + fluids + ecosystem friction"],
    },
    TechCard {
        id: "rear",
        title: "Rear-Door Heat Exchanger",
        sub: "Cooling at the rack door to catch hot exhaust air.",
        tags: &["transitional", "rack-level", "hybrid"],
        how: "Hot exhaust air passes through a liquid-cooled rear door coil before it re-enters the room.",
        pros: &["Less invasive upgrade"],
        cons: &["Not as good as direct-to-chip for extreme AI"],
    },
    TechCard {
        id: "free",
        title: "Free Cooling",
        sub: "Use outside air/conditions in cold climates.",
        tags: &["climate dependent", "efficient", "location matters"],
        how: "When ambient is cold enough, you can reject heat without heavy mechanical chilling.",
        pros: &["Very efficient in cold climates"],
        cons: &["Geography-limited"],
    },
    TechCard {
        id: "seawater",
        title: "Seawater Heat Rejection",
        sub: "Use nearby seawater as a heat sink via exchangers.",
        tags: &["site-specific", "efficient", "needs coast"],
        how: "Reject heat to seawater via heat exchangers (not immersion).",
        pros: &[],
        cons: &["Coastal access + environmental/permits"],
    },
];

/// id로 카드를 찾는다.
pub fn find(id: &str) -> Option<&'static TechCard> {
    CARDS.iter().find(|c| c.id == id)
}
