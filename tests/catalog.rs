//! 벽체/단열재 카탈로그 조회 규칙 회귀 테스트.
use etics_calculator::materials::{
    insulation_catalog, wall_catalog, CatalogError, InsulationType, WallType,
};

#[test]
fn every_wall_type_maps_to_its_own_entry() {
    for wall in WallType::ALL {
        assert_eq!(wall.material().wall, wall, "table order mismatch for {wall}");
    }
    assert_eq!(wall_catalog::walls().len(), WallType::ALL.len());
}

#[test]
fn walls_have_positive_u_and_non_negative_cost() {
    for wall in wall_catalog::walls() {
        assert!(wall.u_value > 0.0, "{}", wall.id);
        assert!(wall.cost_per_m2 >= 0.0, "{}", wall.id);
        assert!(wall.thickness_mm >= 0.0, "{}", wall.id);
    }
}

#[test]
fn lookup_matches_id_and_name_case_insensitively() {
    let by_id = wall_catalog::lookup("HELUZ-FAMILY-50");
    assert_eq!(by_id.wall, WallType::HeluzFamily50);
    assert_eq!(by_id.u_value, 0.11);
    let by_name = wall_catalog::lookup("porotherm 44 profi (single-layer)");
    assert_eq!(by_name.wall, WallType::Porotherm44Profi);
}

#[test]
fn unknown_wall_falls_back_to_etics_substrate() {
    let wall = wall_catalog::lookup("Straw bale 500");
    assert_eq!(wall.wall, wall_catalog::DEFAULT_SUBSTRATE);
    assert_eq!(wall.id, "porotherm-30-profi");
    assert_eq!(wall.u_value, 0.50);
    assert_eq!(wall.cost_per_m2, 1600.0);
}

#[test]
fn strict_parse_reports_unknown_wall() {
    assert_eq!(
        "straw-bale".parse::<WallType>(),
        Err(CatalogError::UnknownWall("straw-bale".to_string()))
    );
    assert_eq!(
        "legacy-solid-brick-450".parse::<WallType>(),
        Ok(WallType::LegacySolidBrick450)
    );
}

#[test]
fn legacy_wall_is_free_and_carbon_neutral() {
    let wall = WallType::LegacySolidBrick450.material();
    assert_eq!(wall.cost_per_m2, 0.0);
    assert_eq!(wall.gwp_per_m2, 0.0);
    assert_eq!(wall.u_value, 1.45);
}

#[test]
fn insulation_price_and_carbon_are_affine_in_thickness() {
    let eps = insulation_catalog::lookup(InsulationType::Eps, 160.0);
    assert_eq!(eps.cost_per_m2, 1100.0 + 160.0 * 2.5);
    assert_eq!(eps.conductivity, 0.039);
    assert!((eps.gwp_per_m2 - 26.0).abs() < 1e-9);

    let mwf = insulation_catalog::lookup(InsulationType::MineralWool, 200.0);
    assert_eq!(mwf.cost_per_m2, 2200.0);
    assert_eq!(mwf.conductivity, 0.036);
    assert!((mwf.gwp_per_m2 - 42.0).abs() < 1e-9);

    let pf = insulation_catalog::lookup(InsulationType::PhenolicFoam, 100.0);
    assert_eq!(pf.cost_per_m2, 2600.0);
    assert_eq!(pf.conductivity, 0.022);
    assert!((pf.gwp_per_m2 - 40.0).abs() < 1e-9);
}

#[test]
fn zero_thickness_adds_no_cost_or_carbon() {
    for kind in InsulationType::ALL {
        let spec = insulation_catalog::lookup(kind, 0.0);
        assert_eq!(spec.cost_per_m2, 0.0);
        assert_eq!(spec.gwp_per_m2, 0.0);
        assert!(spec.conductivity > 0.0);
    }
}

#[test]
fn unknown_insulation_name_yields_zero_spec() {
    let spec = insulation_catalog::lookup_by_name("aerogel", 120.0);
    assert_eq!(spec.kind, None);
    assert_eq!(spec.cost_per_m2, 0.0);
    assert_eq!(spec.conductivity, 0.0);
    assert_eq!(spec.gwp_per_m2, 0.0);
    assert_eq!(spec.thickness_mm, 120.0);
}

#[test]
fn insulation_aliases_parse() {
    assert_eq!("MWF".parse::<InsulationType>(), Ok(InsulationType::MineralWool));
    assert_eq!(" eps ".parse::<InsulationType>(), Ok(InsulationType::Eps));
    assert_eq!(
        "phenolic-foam".parse::<InsulationType>(),
        Ok(InsulationType::PhenolicFoam)
    );
}
