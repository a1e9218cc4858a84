//! 평가 결과를 사람이 읽는 보고서와 차트용 CSV/JSON으로 바꾼다.
use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::economics::{Payback, ProjectionPoint};
use crate::envelope::Assembly;
use crate::evaluation::{Evaluation, Scenario};
use crate::i18n::{keys, Translator};
use crate::materials::{insulation_catalog, wall_catalog, InsulationType};
use crate::units::UnitSystem;

/// 내보내기 오류.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV 쓰기 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON 쓰기 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
}

/// 차트 데이터의 계열 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Reference,
    Etics,
}

/// 차트 입력용 long 형식 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartRow {
    pub year: u32,
    pub variant: Variant,
    pub cumulative_cost: f64,
}

/// 연도별 두 계열을 (연도, 계열, 누적비용) 행으로 편다. 연도마다 기준안, 제안안 순서.
pub fn chart_rows(points: &[ProjectionPoint]) -> Vec<ChartRow> {
    points
        .iter()
        .flat_map(|p| {
            [
                ChartRow {
                    year: p.year,
                    variant: Variant::Reference,
                    cumulative_cost: p.reference_cost,
                },
                ChartRow {
                    year: p.year,
                    variant: Variant::Etics,
                    cumulative_cost: p.proposed_cost,
                },
            ]
        })
        .collect()
}

pub fn write_csv<W: io::Write>(points: &[ProjectionPoint], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in chart_rows(points) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: io::Write>(evaluation: &Evaluation, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, evaluation)?;
    Ok(())
}

pub fn scenario_label(tr: &Translator, scenario: Scenario) -> &str {
    match scenario {
        Scenario::NewBuild => tr.t(keys::SCENARIO_NEW_BUILD),
        Scenario::Renovation => tr.t(keys::SCENARIO_RENOVATION),
    }
}

pub fn insulation_label(tr: &Translator, kind: Option<InsulationType>) -> &str {
    match kind {
        Some(InsulationType::Eps) => tr.t(keys::INSULATION_EPS),
        Some(InsulationType::MineralWool) => tr.t(keys::INSULATION_MINERAL_WOOL),
        Some(InsulationType::PhenolicFoam) => tr.t(keys::INSULATION_PHENOLIC_FOAM),
        None => tr.t(keys::INSULATION_UNKNOWN),
    }
}

pub fn payback_text(tr: &Translator, payback: Payback) -> String {
    match payback {
        Payback::Never => tr.t(keys::PAYBACK_NEVER).to_string(),
        Payback::Immediate => tr.t(keys::PAYBACK_IMMEDIATE).to_string(),
        Payback::Years(years) => tr.tf(keys::PAYBACK_YEARS, &[("years", format!("{years:.1}"))]),
    }
}

/// 제안안 카드 제목: "<단열재> <두께> + 내력벽".
pub fn proposed_label(tr: &Translator, units: UnitSystem, proposed: &Assembly) -> String {
    let (kind, thickness) = proposed
        .insulation
        .as_ref()
        .map(|layer| (layer.kind, layer.thickness_mm))
        .unwrap_or((None, 0.0));
    tr.tf(
        keys::REPORT_PROPOSED_LABEL,
        &[
            ("insulation", insulation_label(tr, kind).to_string()),
            ("thickness", units.format_thickness(thickness)),
        ],
    )
}

fn money(value: f64, currency: &str) -> String {
    format!("{value:.0} {currency}/m²")
}

/// 부호를 붙인 변화량 표기.
fn signed(value: f64, decimals: usize) -> String {
    format!("{value:+.decimals$}")
}

/// 텍스트 보고서를 만든다. 금액은 정수, 기준안 U는 소수 둘째, 제안안 U는 셋째 자리까지.
pub fn render_text(evaluation: &Evaluation, tr: &Translator, units: UnitSystem) -> String {
    let currency = tr.t(keys::CURRENCY);
    let u_unit = units.u_value_unit();
    let reference = &evaluation.reference;
    let proposed = &evaluation.proposed;
    let cmp = &evaluation.comparison;
    let ctx = &evaluation.context;
    let mut out = String::new();

    let _ = writeln!(out, "[{}]", scenario_label(tr, evaluation.scenario));
    let _ = writeln!(
        out,
        "{}",
        tr.tf(
            keys::REPORT_CONTEXT,
            &[
                ("price", format!("{:.2}", ctx.energy_price_per_kwh)),
                ("currency", currency.to_string()),
                ("hdd", format!("{:.0}", ctx.heating_degree_days)),
                ("years", ctx.horizon_years.to_string()),
            ],
        )
    );

    let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_REFERENCE_HEADING));
    let _ = writeln!(out, "  {}", reference.substrate.name);
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::REPORT_INVESTMENT),
        money(reference.cost_per_m2, currency)
    );
    let _ = writeln!(
        out,
        "  {}: {:.2} {u_unit}",
        tr.t(keys::REPORT_U_VALUE),
        units.u_value(reference.u_value)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::REPORT_WALL_THICKNESS),
        units.format_thickness(reference.thickness_mm)
    );
    let _ = writeln!(
        out,
        "  {}: {:.1} kg CO2-eq/m²",
        tr.t(keys::REPORT_EMBODIED_CARBON),
        reference.gwp_per_m2
    );

    let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_PROPOSED_HEADING));
    let _ = writeln!(out, "  {}", proposed_label(tr, units, proposed));
    let _ = writeln!(
        out,
        "  {}: {} ({} {currency})",
        tr.t(keys::REPORT_INVESTMENT),
        money(proposed.cost_per_m2, currency),
        signed(-cmp.extra_investment, 0)
    );
    let _ = writeln!(
        out,
        "  {}: {:.3} {u_unit} ({} {u_unit})",
        tr.t(keys::REPORT_U_VALUE),
        units.u_value(proposed.u_value),
        signed(units.u_value(cmp.u_value_delta), 3)
    );
    let _ = writeln!(
        out,
        "  {}: {} ({} {})",
        tr.t(keys::REPORT_WALL_THICKNESS),
        units.format_thickness(proposed.thickness_mm),
        signed(
            units.thickness(cmp.thickness_delta_mm),
            units.thickness_decimals()
        ),
        units.thickness_unit()
    );
    let _ = writeln!(
        out,
        "  {}: {:.1} kg CO2-eq/m² ({})",
        tr.t(keys::REPORT_EMBODIED_CARBON),
        proposed.gwp_per_m2,
        signed(cmp.gwp_delta, 1)
    );

    let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_ECONOMICS_HEADING));
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::REPORT_ANNUAL_COST_REFERENCE),
        money(cmp.reference_annual_cost, currency)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::REPORT_ANNUAL_COST_PROPOSED),
        money(cmp.proposed_annual_cost, currency)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::REPORT_ANNUAL_SAVINGS),
        money(cmp.annual_savings, currency)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::REPORT_PAYBACK),
        payback_text(tr, cmp.payback)
    );

    let structure = &evaluation.cost_structure;
    let operation_label = tr.tf(
        keys::REPORT_STRUCTURE_OPERATION,
        &[("years", structure.years.to_string())],
    );
    let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_STRUCTURE_HEADING));
    for (variant_key, part) in [
        (keys::VARIANT_REFERENCE, &structure.reference),
        (keys::VARIANT_PROPOSED, &structure.proposed),
    ] {
        let _ = writeln!(
            out,
            "  {:<16} {}: {:>8.0} | {}: {:>8.0} {currency}/m²",
            tr.t(variant_key),
            tr.t(keys::REPORT_STRUCTURE_INVESTMENT),
            part.investment,
            operation_label,
            part.operation
        );
    }
    out
}

/// 카탈로그 목록 보고서. 단열재는 주어진 두께로 산정한다.
pub fn render_catalog(tr: &Translator, units: UnitSystem, thickness_mm: f64) -> String {
    let currency = tr.t(keys::CURRENCY);
    let u_unit = units.u_value_unit();
    let mut out = String::new();

    let _ = writeln!(out, "{}", tr.t(keys::CATALOG_WALLS_HEADING));
    for wall in wall_catalog::walls() {
        let _ = writeln!(
            out,
            "  {:<24} {:<44} U={:.2} {u_unit}  {}  {}  {:.1} kg CO2-eq/m²",
            wall.id,
            wall.name,
            units.u_value(wall.u_value),
            money(wall.cost_per_m2, currency),
            units.format_thickness(wall.thickness_mm),
            wall.gwp_per_m2
        );
    }

    let _ = writeln!(
        out,
        "\n{}",
        tr.tf(
            keys::CATALOG_INSULATION_HEADING,
            &[("thickness", units.format_thickness(thickness_mm))]
        )
    );
    for kind in InsulationType::ALL {
        let spec = insulation_catalog::lookup(kind, thickness_mm);
        let _ = writeln!(
            out,
            "  {:<14} {:<24} {}={:.3} {}  {}  {:.1} kg CO2-eq/m²",
            kind.id(),
            insulation_label(tr, Some(kind)),
            tr.t(keys::CATALOG_CONDUCTIVITY),
            units.conductivity(spec.conductivity),
            units.conductivity_unit(),
            money(spec.cost_per_m2, currency),
            spec.gwp_per_m2
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{evaluate, EvaluationRequest};

    #[test]
    fn csv_has_two_rows_per_year() {
        let eval = evaluate(&EvaluationRequest::default()).expect("evaluate");
        let mut buf = Vec::new();
        write_csv(&eval.projection, &mut buf).expect("csv");
        let text = String::from_utf8(buf).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("year,variant,cumulative_cost"));
        assert_eq!(lines.count(), 2 * (eval.context.horizon_years as usize + 1));
        assert!(text.contains("0,reference,2850"));
        assert!(text.contains("0,etics,3100"));
    }

    #[test]
    fn payback_texts() {
        let tr = Translator::new("en");
        assert_eq!(payback_text(&tr, Payback::Years(20.0)), "20.0 years");
        assert_eq!(
            payback_text(&tr, Payback::Never),
            "Never (running costs are not lower)"
        );
    }

    #[test]
    fn text_report_mentions_both_variants() {
        let eval = evaluate(&EvaluationRequest::default()).expect("evaluate");
        let tr = Translator::new("en");
        let text = render_text(&eval, &tr, UnitSystem::Si);
        assert!(text.contains("Porotherm 44 Profi"));
        assert!(text.contains("EPS 70F (polystyrene) 160 mm + load-bearing wall"));
        assert!(text.contains("0.159 W/m²K"));
        assert!(text.contains("Operation (30 years)"));
    }

    #[test]
    fn json_export_carries_payback_tag() {
        let eval = evaluate(&EvaluationRequest::default()).expect("evaluate");
        let mut buf = Vec::new();
        write_json(&eval, &mut buf).expect("json");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("parse");
        assert_eq!(value["comparison"]["payback"]["kind"], "years");
        let years = value["comparison"]["payback"]["years"].as_f64().expect("years");
        assert!((years - 17.93).abs() < 0.01, "years={years}");
        assert_eq!(value["projection"].as_array().map(Vec::len), Some(31));
    }
}
