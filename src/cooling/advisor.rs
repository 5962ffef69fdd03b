use super::profile::CoolingTech;
use super::stress::{RackConfig, StressResult};

/// 현재 구성에 맞는 한 줄 조언을 만든다. 위에서부터 처음 맞는 조건을 쓴다.
pub fn callout(config: &RackConfig, result: &StressResult) -> String {
    match config.cooling {
        CoolingTech::Air if result.rack_power_kw > 120.0 => {
            "Air cooling is collapsing here. Try Direct-to-chip or Immersion.".into()
        }
        CoolingTech::Dtc if result.flux_stress > 70.0 => {
            "Even liquid hits hotspots. Microfluidics or better TIM becomes the game.".into()
        }
        CoolingTech::Pcm => {
            "PCM buffers spikes, but you still must dump heat later (thermal battery).".into()
        }
        CoolingTech::Mag => {
            "Magnetocaloric is promising, but still rare in real deployments.".into()
        }
        _ => format!(
            "{}: watch hotspot + infra pressure as you push density.",
            result.profile.display_name
        ),
    }
}
