/// Future Lab에서 시연하는 미래 냉각 아이디어.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FutureIdea {
    /// PCM 열 배터리(피크 쉐이빙)
    #[default]
    Pcm,
    /// 열 인지 스케줄링
    Sched,
    /// 다이 근처 마이크로유체 채널
    Micro,
    /// 자기열량 냉각
    Mag,
    /// 열전 소자 폐열 회수
    Teg,
}

impl FutureIdea {
    pub const ALL: [FutureIdea; 5] = [
        FutureIdea::Pcm,
        FutureIdea::Sched,
        FutureIdea::Micro,
        FutureIdea::Mag,
        FutureIdea::Teg,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "pcm" => Some(FutureIdea::Pcm),
            "sched" => Some(FutureIdea::Sched),
            "micro" => Some(FutureIdea::Micro),
            "mag" => Some(FutureIdea::Mag),
            "teg" => Some(FutureIdea::Teg),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            FutureIdea::Pcm => "pcm",
            FutureIdea::Sched => "sched",
            FutureIdea::Micro => "micro",
            FutureIdea::Mag => "mag",
            FutureIdea::Teg => "teg",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FutureIdea::Pcm => "PCM Thermal Battery",
            FutureIdea::Sched => "Thermal-Aware Scheduling",
            FutureIdea::Micro => "Microfluidic 'Veins'",
            FutureIdea::Mag => "Magnetocaloric Cooling",
            FutureIdea::Teg => "Thermoelectric Recovery",
        }
    }

    pub fn sub(&self) -> &'static str {
        match self {
            FutureIdea::Pcm => "Store heat during spikes; dump it later. Peak-shaving.",
            FutureIdea::Sched => "Move workloads across racks to avoid hotspots.",
            FutureIdea::Micro => "Cooling channels inside/near the die for hotspots.",
            FutureIdea::Mag => "Solid-state cooling without compressors.",
            FutureIdea::Teg => "Convert some waste heat into small power for sensors/fans.",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            FutureIdea::Pcm => "Watch heat spikes get absorbed, then released slowly.",
            FutureIdea::Sched => {
                "Jobs migrate toward \"cool\" regions like a load balancer for heat."
            }
            FutureIdea::Micro => "Hotspot dots shrink as micro-channels kick in.",
            FutureIdea::Mag => "Magnetic cycles pump heat out with a rhythmic pulse.",
            FutureIdea::Teg => "Heat becomes a tiny \"recovered power\" bar.",
        }
    }
}
