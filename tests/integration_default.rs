//! Integration tests for the default installation scenario.

mod common;

use oa_sim::project::{Amortization, CashFlowProjection, revenue_curve};
use oa_sim::tariff::{TariffSchedule, buyback_revenue};

#[test]
fn default_scenario_metrics() {
    let m = common::evaluate(&common::default_inputs());
    common::assert_close(m.surface_m2, 500.0);
    common::assert_close(m.installation_cost, 90_000.0);
    common::assert_close(m.annual_maintenance_cost, 2_000.0);
    common::assert_close(m.annual_revenue, 152_900.0 * 0.1070);
    assert!(m.amortization.is_amortizable());
    assert!(m.amortization.years() < 7.0);
}

#[test]
fn annual_revenue_is_tariff_of_production() {
    for kwc in [1.0, 3.0, 9.0, 36.0, 100.0, 101.0, 250.0, 500.0] {
        let inputs = common::inputs_at(kwc);
        let m = common::evaluate(&inputs);
        let expected = buyback_revenue(kwc * inputs.yield_kwh_per_kwc, kwc)
            .expect("capacity within range");
        common::assert_close(m.annual_revenue, expected);
    }
}

#[test]
fn large_installation_hits_degressive_rate() {
    // 1529 kWh/kWc exceeds the 1100 kWh/kWc cap
    let m = common::evaluate(&common::inputs_at(200.0));
    let capped = 1_100.0 * 200.0;
    let expected = capped * 0.1107 + (200.0 * 1_529.0 - capped) * 0.04;
    common::assert_close(m.annual_revenue, expected);
    assert!(!m.needs_extra_permits);

    let m = common::evaluate(&common::inputs_at(300.0));
    assert!(m.needs_extra_permits);
}

#[test]
fn amortization_matches_formula() {
    let a = Amortization::from_costs(820_000.0, 107_000.0 - 2_000.0);
    assert!((a.years() - 7.81).abs() < 0.01);
}

#[test]
fn cash_flow_breaks_even_after_amortization_period() {
    let m = common::evaluate(&common::default_inputs());
    let cf = CashFlowProjection::from_metrics(&m, 20);
    let years = m.amortization.years();
    let break_even = cf.break_even_year().expect("default project pays back");
    assert_eq!(f64::from(break_even), years.ceil());
    assert!(cf.final_balance() > 0.0);
}

#[test]
fn curve_point_at_current_capacity_matches_metrics() {
    let inputs = common::default_inputs();
    let m = common::evaluate(&inputs);
    let curve = revenue_curve(
        &TariffSchedule::default(),
        inputs.yield_kwh_per_kwc,
        &Default::default(),
    )
    .expect("default sweep within range");
    let point = curve
        .iter()
        .find(|p| p.capacity_kwc == inputs.capacity_kwc)
        .expect("default capacity is on the curve");
    common::assert_close(point.annual_revenue, m.annual_revenue);
}

#[test]
fn capacity_beyond_ceiling_is_rejected() {
    let err = buyback_revenue(700_000.0, 501.0).expect_err("501 kWc is beyond the ceiling");
    assert!(err.to_string().contains("500 kWc"));
}
