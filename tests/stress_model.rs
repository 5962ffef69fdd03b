//! 스트레스 모델 회귀 테스트. 결정성, 단조성, 클램프, 폴백, 기준 시나리오를 확인한다.
use heatstack::cooling::{
    classify_risk, evaluate, resolve_cooling_profile, CoolingTech, RackConfig, RiskLevel,
};

fn assert_close(label: &str, actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1e-9,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:e})"
    );
}

fn rack(gpu_w: f64, gpus: u32, servers: u32, overhead: f64, cooling: &str) -> RackConfig {
    RackConfig {
        gpu_power_watts: gpu_w,
        gpus_per_server: gpus,
        servers_per_rack: servers,
        overhead_percent: overhead,
        cooling: CoolingTech::from_id(cooling),
    }
}

/// 테스트용 입력 격자. 0, 작은 값, 큰 값, 음수 부가전력을 섞는다.
fn sample_grid() -> Vec<RackConfig> {
    let mut out = Vec::new();
    for gpu_w in [0.0, 150.0, 700.0, 1200.0, 3000.0] {
        for gpus in [0, 1, 8, 16, 64] {
            for servers in [0, 1, 4, 20] {
                for overhead in [-50.0, 0.0, 20.0, 300.0] {
                    for tech in CoolingTech::ALL {
                        out.push(RackConfig {
                            gpu_power_watts: gpu_w,
                            gpus_per_server: gpus,
                            servers_per_rack: servers,
                            overhead_percent: overhead,
                            cooling: tech,
                        });
                    }
                }
            }
        }
    }
    out
}

#[test]
fn scenario_air_eight_gpus_one_server() {
    let res = evaluate(&rack(700.0, 8, 1, 20.0, "air"));
    assert_close("rack_kw", res.rack_power_kw, 6.72);
    assert_close("flux", res.flux_stress, 48.0);
    assert_close("hotspot", res.hotspot_risk, 20.0 + 18.2 * 0.75);
    assert_close("infra", res.infra_difficulty, 15.0 * 0.55 + 18.2 * 0.35);
    assert_close("complexity", res.complexity_score, 15.0 + 6.72 / 200.0 * 30.0);
    assert_eq!(res.profile.display_name, "Air");
}

#[test]
fn direct_to_chip_lowers_hotspot_against_air() {
    let air = evaluate(&rack(700.0, 8, 1, 20.0, "air"));
    let dtc = evaluate(&rack(700.0, 8, 1, 20.0, "dtc"));
    assert!(dtc.hotspot_risk <= air.hotspot_risk);
    // 48 < 70 이므로 초과분이 없다
    assert_close("dtc hotspot", dtc.hotspot_risk, 20.0);
    assert_close("rack_kw unchanged", dtc.rack_power_kw, air.rack_power_kw);
}

#[test]
fn zero_gpus_drop_density_term() {
    let res = evaluate(&rack(900.0, 0, 4, 20.0, "air"));
    assert_eq!(res.rack_power_kw, 0.0);
    assert_close("flux", res.flux_stress, (900.0 / 1500.0) * 60.0);
}

#[test]
fn flux_stress_saturates_at_hundred() {
    let res = evaluate(&rack(5000.0, 32, 1, 0.0, "imm"));
    assert_eq!(res.flux_stress, 100.0);
}

#[test]
fn density_overage_scales_with_infra_capacity() {
    // air: 35 kW 기준 -> 52.5 kW는 50% 초과 -> 60점 초과분
    let res = evaluate(&rack(1000.0, 7, 5, 50.0, "air"));
    assert_close("rack_kw", res.rack_power_kw, 52.5);
    let flux = (1000.0 / 1500.0) * 60.0 + (7.0 / 16.0) * 40.0;
    let flux_over = (flux - 35.0) * 1.4;
    let density_over = (52.5 - 35.0) / 35.0 * 120.0;
    assert_close(
        "hotspot",
        res.hotspot_risk,
        20.0 + flux_over * 0.75 + density_over * 0.55,
    );
}

#[test]
fn complexity_surcharge_is_capped_at_thirty() {
    let res = evaluate(&rack(1500.0, 16, 40, 50.0, "pcm"));
    assert!(res.rack_power_kw > 200.0);
    assert_close("complexity", res.complexity_score, 40.0 + 30.0);

    // 75 + 30 = 105 -> 100으로 클램프
    let res = evaluate(&rack(1500.0, 16, 40, 50.0, "imm"));
    assert_eq!(res.complexity_score, 100.0);
}

#[test]
fn evaluate_is_deterministic() {
    for cfg in sample_grid() {
        let a = evaluate(&cfg);
        let b = evaluate(&cfg);
        assert_eq!(a.rack_power_kw.to_bits(), b.rack_power_kw.to_bits());
        assert_eq!(a.flux_stress.to_bits(), b.flux_stress.to_bits());
        assert_eq!(a.hotspot_risk.to_bits(), b.hotspot_risk.to_bits());
        assert_eq!(a.infra_difficulty.to_bits(), b.infra_difficulty.to_bits());
        assert_eq!(a.complexity_score.to_bits(), b.complexity_score.to_bits());
        assert_eq!(a.profile, b.profile);
    }
}

#[test]
fn scores_stay_clamped_and_hotspot_has_floor() {
    for cfg in sample_grid() {
        let r = evaluate(&cfg);
        for (label, v) in [
            ("flux", r.flux_stress),
            ("hotspot", r.hotspot_risk),
            ("infra", r.infra_difficulty),
            ("complexity", r.complexity_score),
        ] {
            assert!((0.0..=100.0).contains(&v), "{label}={v} for {cfg:?}");
        }
        assert!(r.hotspot_risk >= 20.0, "hotspot below floor for {cfg:?}");
    }
}

#[test]
fn rack_power_is_monotonic_in_counts_and_power() {
    let base = rack(700.0, 8, 4, 20.0, "dtc");
    let kw = |c: &RackConfig| evaluate(c).rack_power_kw;

    let mut prev = f64::NEG_INFINITY;
    for w in [0.0, 100.0, 400.0, 700.0, 1000.0, 2000.0] {
        let v = kw(&RackConfig {
            gpu_power_watts: w,
            ..base.clone()
        });
        assert!(v >= prev);
        prev = v;
    }

    let mut prev = f64::NEG_INFINITY;
    for n in 0..=32 {
        let v = kw(&RackConfig {
            gpus_per_server: n,
            ..base.clone()
        });
        assert!(v >= prev);
        prev = v;
    }

    let mut prev = f64::NEG_INFINITY;
    for n in 0..=48 {
        let v = kw(&RackConfig {
            servers_per_rack: n,
            ..base.clone()
        });
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn unknown_cooling_id_falls_back_to_air() {
    assert_eq!(
        resolve_cooling_profile("nonexistent-id"),
        resolve_cooling_profile("air")
    );
    assert_eq!(resolve_cooling_profile(""), resolve_cooling_profile("air"));
    // 대소문자는 구분한다
    assert_eq!(resolve_cooling_profile("DTC").display_name, "Air");
    assert_eq!(CoolingTech::try_from_id("rear"), None);
}

#[test]
fn profile_table_matches_published_values() {
    let expect = [
        ("air", 35.0, 35.0, 15.0, "Air"),
        ("dtc", 70.0, 120.0, 55.0, "Direct-to-chip"),
        ("imm", 85.0, 180.0, 75.0, "Immersion"),
        ("pcm", 60.0, 90.0, 40.0, "PCM Buffer"),
        ("mag", 65.0, 100.0, 35.0, "Magnetocaloric"),
    ];
    for (id, flux, infra, cost, name) in expect {
        let p = resolve_cooling_profile(id);
        assert_eq!(p.flux_capacity, flux, "{id}");
        assert_eq!(p.infra_capacity, infra, "{id}");
        assert_eq!(p.complexity_cost, cost, "{id}");
        assert_eq!(p.display_name, name);
        assert_eq!(CoolingTech::from_id(id).id(), id);
    }
}

#[test]
fn with_cooling_id_uses_total_lookup() {
    let cfg = RackConfig::default().with_cooling_id("imm");
    assert_eq!(cfg.cooling, CoolingTech::Imm);
    let cfg = cfg.with_cooling_id("liquid-nitrogen");
    assert_eq!(cfg.cooling, CoolingTech::Air);
}

#[test]
fn risk_classification_boundaries() {
    assert_eq!(classify_risk(0.0), RiskLevel::Low);
    assert_eq!(classify_risk(29.9), RiskLevel::Low);
    assert_eq!(classify_risk(30.0), RiskLevel::Med);
    assert_eq!(classify_risk(54.9), RiskLevel::Med);
    assert_eq!(classify_risk(55.0), RiskLevel::High);
    assert_eq!(classify_risk(79.9), RiskLevel::High);
    assert_eq!(classify_risk(80.0), RiskLevel::Critical);
    assert_eq!(classify_risk(100.0), RiskLevel::Critical);
    assert_eq!(RiskLevel::Med.to_string(), "MED");
}
