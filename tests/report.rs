//! 상태 표시, 조언 문구, 랙 히트맵, 표시 문자열 테스트.
use heatstack::cooling::advisor::callout;
use heatstack::cooling::rack_heat::{rack_cells, rack_heat, IDLE_HEAT, RACK_CELLS};
use heatstack::cooling::{evaluate, thermal_status, CoolingTech, RackConfig, ThermalStatus};
use heatstack::report::{format_kw, format_score, pct, StressReport};

fn rack(gpu_w: f64, gpus: u32, servers: u32, cooling: CoolingTech) -> RackConfig {
    RackConfig {
        gpu_power_watts: gpu_w,
        gpus_per_server: gpus,
        servers_per_rack: servers,
        overhead_percent: 20.0,
        cooling,
    }
}

fn callout_for(cfg: &RackConfig) -> String {
    callout(cfg, &evaluate(cfg))
}

#[test]
fn thermal_status_thresholds_use_worst_score() {
    assert_eq!(thermal_status(34.9, 0.0), ThermalStatus::Nominal);
    assert_eq!(thermal_status(35.0, 0.0), ThermalStatus::Watch);
    assert_eq!(thermal_status(20.0, 59.9), ThermalStatus::Watch);
    assert_eq!(thermal_status(0.0, 60.0), ThermalStatus::Hot);
    assert_eq!(thermal_status(80.0, 10.0), ThermalStatus::Limit);
    assert_eq!(ThermalStatus::Limit.label(), "THERMAL: LIMIT");
}

#[test]
fn air_collapse_message_above_120_kw() {
    let cfg = rack(1000.0, 8, 16, CoolingTech::Air);
    assert!(evaluate(&cfg).rack_power_kw > 120.0);
    assert_eq!(
        callout_for(&cfg),
        "Air cooling is collapsing here. Try Direct-to-chip or Immersion."
    );
}

#[test]
fn liquid_hotspot_message_for_high_flux() {
    let cfg = rack(1500.0, 8, 1, CoolingTech::Dtc);
    assert!(evaluate(&cfg).flux_stress > 70.0);
    assert!(callout_for(&cfg).starts_with("Even liquid hits hotspots."));
}

#[test]
fn technology_specific_messages() {
    let pcm = rack(1000.0, 8, 16, CoolingTech::Pcm);
    assert!(callout_for(&pcm).starts_with("PCM buffers spikes"));
    let mag = rack(700.0, 8, 1, CoolingTech::Mag);
    assert!(callout_for(&mag).starts_with("Magnetocaloric is promising"));
}

#[test]
fn default_message_names_the_profile() {
    let imm = rack(700.0, 8, 4, CoolingTech::Imm);
    assert_eq!(
        callout_for(&imm),
        "Immersion: watch hotspot + infra pressure as you push density."
    );
    let air = rack(700.0, 8, 1, CoolingTech::Air);
    assert!(callout_for(&air).starts_with("Air: watch"));
}

#[test]
fn rack_heat_mixes_hotspot_and_infra() {
    let res = evaluate(&rack(700.0, 8, 1, CoolingTech::Dtc));
    let expected = (res.hotspot_risk * 0.65 + res.infra_difficulty * 0.35) / 100.0;
    assert!((rack_heat(&res) - expected).abs() < 1e-12);
    assert!(IDLE_HEAT > 0.0 && IDLE_HEAT < 1.0);
}

#[test]
fn rack_cells_are_bounded() {
    for heat in [0.0, IDLE_HEAT, 0.5, 1.0] {
        let cells = rack_cells(heat);
        assert_eq!(cells.len(), RACK_CELLS);
        assert!(cells.iter().all(|h| (0.0..=1.0).contains(h)));
    }
    // sin(0) = 0 -> 0.5 * 0.25
    assert!((rack_cells(0.0)[0] - 0.125).abs() < 1e-12);
}

#[test]
fn formatting_helpers() {
    assert_eq!(pct(150.0), "100%");
    assert_eq!(pct(-5.0), "0%");
    assert_eq!(pct(42.4), "42%");
    assert_eq!(format_kw(6.72), "6.7 kW");
    assert_eq!(format_score(62.4), "HIGH (62)");
    assert_eq!(format_score(12.0), "LOW (12)");
    // 0.5는 짝수 쪽이 아니라 위로 반올림한다
    assert_eq!(format_score(62.5), "HIGH (63)");
    assert_eq!(pct(12.5), "13%");
    assert_eq!(format_kw(6.75), "6.8 kW");
}

#[test]
fn report_for_reference_scenario() {
    let cfg = rack(700.0, 8, 1, CoolingTech::Air);
    let report = StressReport::build(&cfg);
    assert_eq!(report.rack_power, "6.7 kW");
    assert_eq!(report.flux, "MED (48)");
    assert_eq!(report.hotspot, "MED (34)");
    assert_eq!(report.difficulty, "LOW (15)");
    assert_eq!(report.water, "LOW (16)");
    assert_eq!(report.status, ThermalStatus::Nominal);
    assert!((report.fills.rack - 6.72 / 200.0).abs() < 1e-12);
    assert!((report.fills.hotspot - report.result.hotspot_risk / 100.0).abs() < 1e-12);
    assert!(report.rack_heat > 0.0 && report.rack_heat < 1.0);
}

#[test]
fn half_point_scores_round_up_in_report() {
    let cfg = RackConfig {
        overhead_percent: 0.0,
        ..rack(1000.0, 9, 1, CoolingTech::Dtc)
    };
    let report = StressReport::build(&cfg);
    assert_eq!(report.result.flux_stress, 62.5);
    assert_eq!(report.flux, "HIGH (63)");
}
