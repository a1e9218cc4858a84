//! 직렬 열저항 합성(U값) 회귀 테스트.
use etics_calculator::envelope::{
    combined_u, Assembly, ThermalError, SURFACE_RESISTANCE_M2K_PER_W,
};
use etics_calculator::materials::{insulation_catalog, InsulationSpec, InsulationType, WallType};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn no_insulation_adds_only_surface_resistance() {
    for wall in WallType::ALL {
        let m = wall.material();
        let expected = 1.0 / (1.0 / m.u_value + SURFACE_RESISTANCE_M2K_PER_W);
        let u = combined_u(m, None).expect("bare wall");
        assert_close(m.id, u, expected, 1e-12);

        let zero = insulation_catalog::lookup(InsulationType::Eps, 0.0);
        let u_zero = combined_u(m, Some(&zero)).expect("zero thickness");
        assert_close(m.id, u_zero, expected, 1e-12);
    }
}

#[test]
fn eps_160_on_porotherm_30() {
    // R = 1/0.50 + 0.160/0.039 + 0.17 = 6.2726, U ≈ 0.1594
    let substrate = WallType::Porotherm30Profi.material();
    let eps = insulation_catalog::lookup(InsulationType::Eps, 160.0);
    let u = combined_u(substrate, Some(&eps)).expect("u");
    assert_close("r_total", 1.0 / u, 2.0 + 0.160 / 0.039 + 0.17, 1e-12);
    assert!((u - 0.1594).abs() < 5e-5, "u={u}");
}

#[test]
fn more_insulation_never_raises_u() {
    let substrate = WallType::Porotherm30Profi.material();
    for kind in InsulationType::ALL {
        let mut previous = f64::INFINITY;
        for step in 0..=15 {
            let spec = insulation_catalog::lookup(kind, f64::from(step) * 20.0);
            let u = combined_u(substrate, Some(&spec)).expect("u");
            assert!(u <= previous, "{kind} at {} mm: {u} > {previous}", step * 20);
            previous = u;
        }
    }
}

#[test]
fn zero_conductivity_with_thickness_is_configuration_error() {
    let substrate = WallType::Porotherm30Profi.material();
    let spec = InsulationSpec::zeroed(100.0);
    let err = combined_u(substrate, Some(&spec)).expect_err("must fail");
    assert_eq!(
        err,
        ThermalError::NonPositiveConductivity {
            conductivity: 0.0,
            thickness_mm: 100.0
        }
    );
    // 두께가 없으면 λ는 쓰이지 않는다.
    assert!(combined_u(substrate, Some(&InsulationSpec::zeroed(0.0))).is_ok());
}

#[test]
fn zero_substrate_u_is_configuration_error() {
    let mut substrate = *WallType::Porotherm30Profi.material();
    substrate.u_value = 0.0;
    assert_eq!(
        combined_u(&substrate, None),
        Err(ThermalError::NonPositiveSubstrateU(0.0))
    );
}

#[test]
fn assembly_sums_cost_carbon_and_thickness() {
    let substrate = *WallType::Porotherm30Profi.material();
    let mwf = insulation_catalog::lookup(InsulationType::MineralWool, 200.0);
    let assembly = Assembly::compose(substrate, Some(mwf)).expect("assembly");
    assert_eq!(assembly.cost_per_m2, 1600.0 + 2200.0);
    assert_close("gwp", assembly.gwp_per_m2, 25.0 + 42.0, 1e-12);
    assert_eq!(assembly.thickness_mm, 500.0);
    assert!(assembly.is_insulated());

    let bare = Assembly::bare(substrate).expect("bare");
    assert_eq!(bare.cost_per_m2, 1600.0);
    assert_eq!(bare.thickness_mm, 300.0);
    assert_eq!(bare.u_value, 0.50);
    assert_eq!(
        Assembly::bare(*WallType::Porotherm44Profi.material()).map(|a| a.u_value),
        Ok(0.19)
    );
    assert!(!bare.is_insulated());
}
