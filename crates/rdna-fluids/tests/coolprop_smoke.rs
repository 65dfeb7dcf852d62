//! CoolProp integration tests.
//!
//! These tests verify the CoolProp backend on the dew line for the standard
//! refrigerants. We use broad tolerances to avoid backend version issues, but
//! enforce physical plausibility.

use rdna_core::units::{bar, bar_of, degc, degc_of, k};
use rdna_fluids::{CoolPropSource, FluidError, PropertySource, TemperatureSweep, saturation_curve};

#[test]
fn r134a_dew_pressure_at_20c() {
    let source = CoolPropSource::new();
    let p = source.saturation_pressure("R134a", degc(20.0)).unwrap();

    // ~5.72 bar(a)
    let p_bar = bar_of(p);
    assert!(p_bar > 5.4 && p_bar < 6.0, "p = {} bar", p_bar);
}

#[test]
fn r744_dew_pressure_far_above_5_bar() {
    let source = CoolPropSource::new();
    let p = source.saturation_pressure("R744", degc(20.0)).unwrap();

    // ~57 bar(a)
    let p_bar = bar_of(p);
    assert!(p_bar > 50.0 && p_bar < 65.0, "p = {} bar", p_bar);
}

#[test]
fn ammonia_alias_resolves() {
    let source = CoolPropSource::new();
    let p = source.saturation_pressure("R717", degc(0.0)).unwrap();

    // ~4.3 bar(a)
    let p_bar = bar_of(p);
    assert!(p_bar > 3.8 && p_bar < 4.8, "p = {} bar", p_bar);
}

#[test]
fn dew_temperature_inverts_dew_pressure() {
    let source = CoolPropSource::new();
    let p = source.saturation_pressure("R32", degc(10.0)).unwrap();
    let t = source.saturation_temperature("R32", p).unwrap();
    assert!((degc_of(t) - 10.0).abs() < 0.01, "t = {} °C", degc_of(t));
}

#[test]
fn dew_temperature_of_r134a_at_5_bar() {
    let source = CoolPropSource::new();
    let t = source.saturation_temperature("R134a", bar(5.0)).unwrap();

    // ~15.7 °C
    let t_c = degc_of(t);
    assert!(t_c > 14.0 && t_c < 17.5, "t = {} °C", t_c);
}

#[test]
fn above_critical_temperature_fails() {
    let source = CoolPropSource::new();
    // CO2 critical point is ~31 °C
    assert!(source.saturation_pressure("R744", degc(40.0)).is_err());
}

#[test]
fn unknown_refrigerant_fails() {
    let source = CoolPropSource::new();
    let result = source.saturation_pressure("R9999x", degc(20.0));
    assert!(matches!(
        result,
        Err(FluidError::UnknownRefrigerant { .. }) | Err(FluidError::Backend { .. })
    ));
}

#[test]
fn pt_chart_rises_monotonically() {
    let source = CoolPropSource::new();
    let sweep = TemperatureSweep::new(k(253.15), k(313.15), 7).unwrap();
    let curve = saturation_curve(&source, "R290", &sweep);

    assert_eq!(curve.num_failed, 0);
    assert!(
        curve
            .points
            .windows(2)
            .all(|w| bar_of(w[1].pressure) > bar_of(w[0].pressure))
    );
}
