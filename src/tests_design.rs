// SPDX-License-Identifier: MIT
// Copyright (c) 2026 MixForge Contributors

//! Design kernel tests
//!
//! Drives the JSON boundary end to end, the way the host UI does.

use serde_json::json;

use crate::design_kernel::DesignKernel;
use crate::mix::MaterialConstants;
use crate::science::volumetric::VolumetricEngine;

const SEED: u64 = 42;

#[test]
fn test_volumetric_reference_design() {
    let inputs = json!({
        "strengthMpa": 30.0,
        "waterCementRatio": 0.5,
        "fineAggregateFraction": 0.4
    });

    let response: serde_json::Value =
        serde_json::from_str(&DesignKernel::compute_volumetric(&inputs.to_string())).unwrap();
    let result = &response["result"];

    // 400 kg cement at w/c 0.5 gives exactly 200 kg water.
    assert_eq!(result["cement"].as_f64().unwrap(), 400.0);
    assert_eq!(result["water"].as_f64().unwrap(), 200.0);

    let fine = result["fineAggregate"].as_f64().unwrap();
    let coarse = result["coarseAggregate"].as_f64().unwrap();
    assert!((fine - 713.4).abs() < 0.1, "fine = {}", fine);
    assert!((coarse - 1090.3).abs() < 0.1, "coarse = {}", coarse);

    // In-range inputs raise no events.
    assert!(response["events"].as_array().unwrap().is_empty());
}

#[test]
fn test_volumetric_closure_over_selectable_ranges() {
    // Sweep the whole selectable grid: masses stay non-negative and the
    // four component volumes rebuild the unit cube.
    let constants = MaterialConstants::default();
    for wc_step in 0..=8 {
        for fine_step in 0..=6 {
            let wc = 0.3 + 0.05 * wc_step as f32;
            let fine = 0.3 + 0.05 * fine_step as f32;
            let result = VolumetricEngine::compute(wc, fine, &constants);

            assert!(result.cement >= 0.0 && result.water >= 0.0);
            assert!(
                result.fine_aggregate >= 0.0 && result.coarse_aggregate >= 0.0,
                "negative aggregate at wc={}, fine={}",
                wc,
                fine
            );

            let total = result.cement_volume
                + result.water_volume
                + result.fine_volume
                + result.coarse_volume;
            assert!(
                (total - 1.0).abs() < 1e-4,
                "volume closure broken at wc={}, fine={}: {}",
                wc,
                fine,
                total
            );
        }
    }
}

#[test]
fn test_volumetric_is_deterministic() {
    let inputs = json!({
        "strengthMpa": 35.0,
        "waterCementRatio": 0.45,
        "fineAggregateFraction": 0.55
    })
    .to_string();

    let first: serde_json::Value =
        serde_json::from_str(&DesignKernel::compute_volumetric(&inputs)).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(&DesignKernel::compute_volumetric(&inputs)).unwrap();

    // Bit-identical results; only the timing field may differ.
    assert_eq!(first["result"], second["result"]);
}

#[test]
fn test_empirical_reference_design() {
    let inputs = json!({ "strengthMpa": 30.0, "slumpMm": 75.0 });

    let response: serde_json::Value =
        serde_json::from_str(&DesignKernel::compute_empirical(&inputs.to_string())).unwrap();
    let result = &response["result"];

    assert_eq!(result["cement"].as_f64().unwrap(), 400.0);
    assert_eq!(result["water"].as_f64().unwrap(), 190.0);
    assert_eq!(result["fineAggregate"].as_f64().unwrap(), 675.0);
    assert_eq!(result["coarseAggregate"].as_f64().unwrap(), 1000.0);

    let wc = result["waterCementRatio"].as_f64().unwrap();
    assert!((wc - 0.475).abs() < 1e-6, "w/c = {}", wc);
}

#[test]
fn test_empirical_selectable_corners_stay_positive() {
    for (fc, slump) in [(20.0, 25.0), (60.0, 150.0)] {
        let inputs = json!({ "strengthMpa": fc, "slumpMm": slump });
        let response: serde_json::Value =
            serde_json::from_str(&DesignKernel::compute_empirical(&inputs.to_string())).unwrap();
        let result = &response["result"];
        for field in ["cement", "water", "fineAggregate", "coarseAggregate"] {
            let mass = result[field].as_f64().unwrap();
            assert!(mass >= 0.0, "{} = {} at ({}, {})", field, mass, fc, slump);
        }
    }
}

#[test]
fn test_sustainable_reference_reallocation() {
    let inputs = json!({ "strengthMpa": 30.0, "slumpMm": 75.0, "seed": SEED });

    let response: serde_json::Value =
        serde_json::from_str(&DesignKernel::optimize_sustainable(&inputs.to_string())).unwrap();

    // The base mix rides along unchanged.
    assert_eq!(response["base"]["cement"].as_f64().unwrap(), 400.0);

    let opt = &response["optimized"];
    assert!((opt["cement"].as_f64().unwrap() - 280.0).abs() < 1e-3);
    assert!((opt["scm"].as_f64().unwrap() - 120.0).abs() < 1e-3);
    assert!((opt["coarseAggregate"].as_f64().unwrap() - 800.0).abs() < 1e-3);
    assert!((opt["coarseRecycledAggregate"].as_f64().unwrap() - 200.0).abs() < 1e-3);
    assert!((opt["fineAggregate"].as_f64().unwrap() - 573.75).abs() < 1e-3);
    assert!((opt["fineRecycledAggregate"].as_f64().unwrap() - 101.25).abs() < 1e-3);
    assert!((opt["water"].as_f64().unwrap() - 193.8).abs() < 1e-3);

    assert_eq!(opt["co2ReductionPct"].as_f64().unwrap(), 25.0);
    assert_eq!(opt["costReductionPct"].as_f64().unwrap(), 15.0);

    let strength = opt["estimatedStrengthMpa"].as_f64().unwrap();
    let slump = opt["estimatedSlumpMm"].as_f64().unwrap();
    assert!((28.0..=30.0).contains(&strength), "strength estimate {}", strength);
    assert!((65.0..=85.0).contains(&slump), "slump estimate {}", slump);
}

#[test]
fn test_sustainable_seed_replays_exactly() {
    let inputs = json!({ "strengthMpa": 40.0, "slumpMm": 100.0, "seed": SEED }).to_string();

    let first: serde_json::Value =
        serde_json::from_str(&DesignKernel::optimize_sustainable(&inputs)).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(&DesignKernel::optimize_sustainable(&inputs)).unwrap();

    assert_eq!(first["base"], second["base"]);
    assert_eq!(first["optimized"], second["optimized"]);
}

#[test]
fn test_sustainable_estimates_bounded_for_any_draw() {
    for seed in 0..100u64 {
        let inputs = json!({ "strengthMpa": 30.0, "slumpMm": 75.0, "seed": seed });
        let response: serde_json::Value =
            serde_json::from_str(&DesignKernel::optimize_sustainable(&inputs.to_string()))
                .unwrap();
        let opt = &response["optimized"];

        let strength = opt["estimatedStrengthMpa"].as_f64().unwrap();
        let slump = opt["estimatedSlumpMm"].as_f64().unwrap();
        assert!(
            (28.0..=30.0).contains(&strength),
            "strength estimate {} escaped bounds for seed {}",
            strength,
            seed
        );
        assert!(
            (65.0..=85.0).contains(&slump),
            "slump estimate {} escaped bounds for seed {}",
            slump,
            seed
        );

        // The deterministic fields never move with the seed.
        assert!((opt["cement"].as_f64().unwrap() - 280.0).abs() < 1e-3);
        assert!((opt["scm"].as_f64().unwrap() - 120.0).abs() < 1e-3);
    }
}

#[test]
fn test_out_of_range_inputs_are_clamped_with_events() {
    let inputs = json!({
        "strengthMpa": 30.0,
        "waterCementRatio": 0.9,
        "fineAggregateFraction": 0.1
    });

    let response: serde_json::Value =
        serde_json::from_str(&DesignKernel::compute_volumetric(&inputs.to_string())).unwrap();

    let events = response["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    for event in events {
        assert_eq!(event["topic"], "DESIGN.RANGE");
        assert_eq!(event["severity"], "WARNING");
    }

    // Clamped to w/c 0.7 → 280 kg water on 400 kg cement.
    let water = response["result"]["water"].as_f64().unwrap();
    assert!((water - 280.0).abs() < 1e-3, "water = {}", water);
}

#[test]
fn test_malformed_inputs_return_error_object() {
    for bad in [
        "not json at all",
        r#"{"strengthMpa": "thirty", "slumpMm": 75}"#,
        r#"{"strengthMpa": 30, "slumpMm": 1e999}"#,
    ] {
        let response: serde_json::Value =
            serde_json::from_str(&DesignKernel::compute_empirical(bad)).unwrap();
        assert!(
            response.get("error").is_some(),
            "expected error object for {:?}, got {}",
            bad,
            response
        );
    }
}
