//! 연간 에너지 비용, 단순 회수기간, 누적 비용 추이 회귀 테스트.
use etics_calculator::economics::{
    annual_energy_cost, compare, cost_breakdown, project, simple_payback, EvaluationContext,
    Payback,
};
use etics_calculator::envelope::Assembly;
use etics_calculator::materials::{insulation_catalog, InsulationType, WallType};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn ctx(price: f64, hdd: f64, years: u32) -> EvaluationContext {
    EvaluationContext {
        energy_price_per_kwh: price,
        heating_degree_days: hdd,
        horizon_years: years,
    }
}

fn reference_and_etics() -> (Assembly, Assembly) {
    let reference = Assembly::bare(*WallType::Porotherm44Profi.material()).expect("reference");
    let eps = insulation_catalog::lookup(InsulationType::Eps, 160.0);
    let proposed =
        Assembly::compose(*WallType::Porotherm30Profi.material(), Some(eps)).expect("proposed");
    (reference, proposed)
}

#[test]
fn annual_cost_of_reference_wall() {
    // 0.19 · 24 · 3800 / 1000 · 5 = 86.64
    let cost = annual_energy_cost(0.19, &EvaluationContext::default());
    assert_close("cost", cost, 86.64, 1e-12);
}

#[test]
fn annual_cost_is_linear_in_each_input() {
    let base = ctx(5.0, 3800.0, 30);
    let c = annual_energy_cost(0.3, &base);
    assert_close("2U", annual_energy_cost(0.6, &base), 2.0 * c, 1e-12);
    assert_close("2HDD", annual_energy_cost(0.3, &ctx(5.0, 7600.0, 30)), 2.0 * c, 1e-12);
    assert_close("3price", annual_energy_cost(0.3, &ctx(15.0, 3800.0, 30)), 3.0 * c, 1e-12);
    assert_eq!(annual_energy_cost(0.0, &base), 0.0);
    assert_eq!(annual_energy_cost(0.3, &ctx(0.0, 3800.0, 30)), 0.0);
}

#[test]
fn payback_policy() {
    assert_eq!(simple_payback(2000.0, 100.0), Payback::Years(20.0));
    assert_eq!(simple_payback(2000.0, -5.0), Payback::Never);
    assert_eq!(simple_payback(-500.0, -5.0), Payback::Never);
    assert_eq!(simple_payback(2000.0, 0.0), Payback::Never);
    assert_eq!(simple_payback(0.0, 10.0), Payback::Immediate);
    assert_eq!(simple_payback(-300.0, 10.0), Payback::Immediate);
    assert_eq!(Payback::Years(20.0).years(), Some(20.0));
    assert_eq!(Payback::Never.years(), None);
}

#[test]
fn etics_against_single_layer_wall() {
    let (reference, proposed) = reference_and_etics();
    let cmp = compare(&reference, &proposed, &EvaluationContext::default());
    assert_close("ref annual", cmp.reference_annual_cost, 86.64, 1e-9);
    assert!((cmp.proposed_annual_cost - 72.69).abs() < 0.01);
    assert!((cmp.annual_savings - 13.95).abs() < 0.01);
    assert_eq!(cmp.extra_investment, 3100.0 - 2850.0);
    let years = cmp.payback.years().expect("finite payback");
    assert_close("payback", years, cmp.extra_investment / cmp.annual_savings, 1e-12);
    assert_eq!(cmp.thickness_delta_mm, 460.0 - 440.0);
    assert!(cmp.u_value_delta < 0.0);
}

#[test]
fn payback_outcomes_across_catalog_pairs() {
    let c = EvaluationContext::default();
    let legacy = *WallType::LegacySolidBrick450.material();

    let old = Assembly::bare(legacy).expect("legacy");
    assert_eq!(compare(&old, &old, &c).payback, Payback::Never);

    // 리모델링: 시공비 0인 기존 벽체 대비 내력벽 + EPS 160 mm
    let eps = insulation_catalog::lookup(InsulationType::Eps, 160.0);
    let renovated =
        Assembly::compose(*WallType::Porotherm30Profi.material(), Some(eps)).expect("renovated");
    let cmp = compare(&old, &renovated, &c);
    assert_eq!(cmp.extra_investment, 3100.0);
    assert_close("renovation savings", cmp.annual_savings, 588.5, 1e-4);
    assert_close(
        "renovation payback",
        cmp.payback.years().expect("finite"),
        3100.0 / cmp.annual_savings,
        1e-12,
    );

    // 단열 없는 얇은 벽체는 단일벽보다 싸지만 손실이 커서 회수 불가
    let p30 = Assembly::bare(*WallType::Porotherm30Profi.material()).expect("p30");
    let p44 = Assembly::bare(*WallType::Porotherm44Profi.material()).expect("p44");
    let cmp = compare(&p44, &p30, &c);
    assert!(cmp.extra_investment < 0.0);
    assert_eq!(cmp.payback, Payback::Never);
}

#[test]
fn cheaper_and_better_pays_back_immediately() {
    let c = EvaluationContext::default();
    let eps = insulation_catalog::lookup(InsulationType::Eps, 300.0);
    let etics =
        Assembly::compose(*WallType::Porotherm30Profi.material(), Some(eps)).expect("etics");
    let mut reference = Assembly::bare(*WallType::HeluzFamily50.material()).expect("heluz");
    assert!(etics.u_value < reference.u_value);

    // 3450 vs 3400: 조금 비싸고 조금 낫다
    let cmp = compare(&reference, &etics, &c);
    assert!(matches!(cmp.payback, Payback::Years(y) if y > 0.0));

    reference.cost_per_m2 = 5000.0;
    let cmp = compare(&reference, &etics, &c);
    assert!(cmp.extra_investment < 0.0);
    assert_eq!(cmp.payback, Payback::Immediate);
}

#[test]
fn projection_has_horizon_plus_one_points() {
    let (reference, proposed) = reference_and_etics();
    for years in [10, 30, 50] {
        let c = ctx(5.0, 3800.0, years);
        let points = project(&reference, &proposed, &c);
        assert_eq!(points.len(), years as usize + 1);
        assert_eq!(points.first().map(|p| p.year), Some(0));
        assert_eq!(points.last().map(|p| p.year), Some(years));
    }
}

#[test]
fn projection_starts_at_investment_and_grows_by_annual_cost() {
    let (reference, proposed) = reference_and_etics();
    let c = EvaluationContext::default();
    let points = project(&reference, &proposed, &c);
    assert_eq!(points[0].reference_cost, reference.cost_per_m2);
    assert_eq!(points[0].proposed_cost, proposed.cost_per_m2);

    let ref_annual = annual_energy_cost(reference.u_value, &c);
    let prop_annual = annual_energy_cost(proposed.u_value, &c);
    for pair in points.windows(2) {
        assert_eq!(pair[1].year, pair[0].year + 1);
        assert_close("ref step", pair[1].reference_cost - pair[0].reference_cost, ref_annual, 1e-9);
        assert_close("prop step", pair[1].proposed_cost - pair[0].proposed_cost, prop_annual, 1e-9);
    }
}

#[test]
fn projection_is_deterministic() {
    let (reference, proposed) = reference_and_etics();
    let c = EvaluationContext::default();
    assert_eq!(project(&reference, &proposed, &c), project(&reference, &proposed, &c));
}

#[test]
fn cost_breakdown_uses_given_window() {
    let (reference, proposed) = reference_and_etics();
    let c = ctx(5.0, 3800.0, 10);
    let structure = cost_breakdown(&reference, &proposed, &c, 30);
    assert_eq!(structure.years, 30);
    assert_eq!(structure.reference.investment, 2850.0);
    assert_close("ref op", structure.reference.operation, 86.64 * 30.0, 1e-9);
    assert_close(
        "total",
        structure.proposed.total(),
        proposed.cost_per_m2 + annual_energy_cost(proposed.u_value, &c) * 30.0,
        1e-12,
    );
}
