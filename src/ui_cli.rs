use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::evaluation::{evaluate, Scenario, INSULATION_THICKNESS_STEP_MM};
use crate::i18n::{keys, Translator};
use crate::materials::{wall_catalog, InsulationType};
use crate::report;
use crate::units::UnitSystem;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compare,
    Catalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력 스트림이 끝나면 종료로 본다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPARE));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = match read_line(tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compare),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 비교 메뉴를 처리한다. 입력값은 설정의 기본값으로 채워 두고 엔터로 유지할 수 있다.
///
/// 평가에 성공한 입력은 다음 비교의 기본값이 된다. 검증/구성 오류는 출력만 하고 메뉴로 돌아간다.
pub fn handle_compare(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::COMPARE_HEADING));
    let currency = tr.t(keys::CURRENCY);
    let mut request = cfg.defaults.to_request();

    let scenario_labels: Vec<String> = Scenario::ALL
        .iter()
        .map(|s| report::scenario_label(tr, *s).to_string())
        .collect();
    let current = Scenario::ALL
        .iter()
        .position(|s| *s == request.scenario)
        .unwrap_or(0);
    let scenario = Scenario::ALL[select(tr, tr.t(keys::PROMPT_SCENARIO), &scenario_labels, current)?];
    if scenario != request.scenario {
        request.reference_wall = scenario.default_reference().id().to_string();
    }
    request.scenario = scenario;

    let walls = scenario.reference_options();
    let wall_labels: Vec<String> = walls.iter().map(|w| w.material().name.to_string()).collect();
    let current_wall = wall_catalog::lookup(&request.reference_wall).wall;
    let current = walls.iter().position(|w| *w == current_wall).unwrap_or(0);
    let wall = walls[select(tr, tr.t(keys::PROMPT_WALL), &wall_labels, current)?];
    request.reference_wall = wall.id().to_string();

    let insulation_labels: Vec<String> = InsulationType::ALL
        .iter()
        .map(|k| report::insulation_label(tr, Some(*k)).to_string())
        .collect();
    let current = request
        .insulation
        .parse::<InsulationType>()
        .ok()
        .and_then(|k| InsulationType::ALL.iter().position(|x| *x == k))
        .unwrap_or(0);
    let kind =
        InsulationType::ALL[select(tr, tr.t(keys::PROMPT_INSULATION), &insulation_labels, current)?];
    request.insulation = kind.id().to_string();

    request.thickness_mm = snap_thickness(read_f64_or(
        tr,
        tr.t(keys::PROMPT_THICKNESS),
        request.thickness_mm,
    )?);
    let price_label = tr.tf(keys::PROMPT_ENERGY_PRICE, &[("currency", currency.to_string())]);
    request.context.energy_price_per_kwh =
        read_f64_or(tr, &price_label, request.context.energy_price_per_kwh)?;
    request.context.heating_degree_days =
        read_f64_or(tr, tr.t(keys::PROMPT_HDD), request.context.heating_degree_days)?;
    request.context.horizon_years =
        read_u32_or(tr, tr.t(keys::PROMPT_HORIZON), request.context.horizon_years)?;

    match evaluate(&request) {
        Ok(evaluation) => {
            println!();
            print!("{}", report::render_text(&evaluation, tr, cfg.unit_system));
            let d = &mut cfg.defaults;
            d.scenario = request.scenario;
            d.reference_wall = request.reference_wall;
            d.insulation = request.insulation;
            d.thickness_mm = request.thickness_mm;
            d.energy_price_per_kwh = request.context.energy_price_per_kwh;
            d.heating_degree_days = request.context.heating_degree_days;
            d.horizon_years = request.context.horizon_years;
        }
        Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 카탈로그를 현재 기본 두께로 출력한다.
pub fn handle_catalog(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!();
    print!(
        "{}",
        report::render_catalog(tr, cfg.unit_system, cfg.defaults.thickness_mm)
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.tf(
            keys::SETTINGS_CURRENT,
            &[
                ("language", cfg.language.clone()),
                ("units", cfg.unit_system.to_string()),
            ],
        )
    );

    println!("{}", tr.t(keys::SETTINGS_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.unit_system = UnitSystem::Si,
        "2" => cfg.unit_system = UnitSystem::Imperial,
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let language = match sel.trim() {
        "" => None,
        "1" => Some("auto"),
        "2" => Some("cs"),
        "3" => Some("en"),
        "4" => Some("ko"),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            None
        }
    };
    if let Some(language) = language {
        cfg.language = language.to_string();
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 슬라이더와 같은 간격(20 mm)으로 맞춘다. 범위 검사는 평가 단계에서 한다.
fn snap_thickness(value: f64) -> f64 {
    (value / INSULATION_THICKNESS_STEP_MM).round() * INSULATION_THICKNESS_STEP_MM
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(buf)
}

fn prompt_with_default(tr: &Translator, label: &str, default: &str) -> String {
    format!(
        "{label} ({}): ",
        tr.tf(keys::PROMPT_KEEP_DEFAULT, &[("value", default.to_string())])
    )
}

/// 번호 목록에서 하나를 고른다. 엔터는 현재 값을 유지한다.
fn select(
    tr: &Translator,
    label: &str,
    options: &[String],
    current: usize,
) -> Result<usize, AppError> {
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {option}", i + 1);
    }
    let prompt = prompt_with_default(tr, label, &(current + 1).to_string());
    loop {
        let sel = read_line(&prompt)?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(current);
        }
        match sel.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_f64_or(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    let prompt = prompt_with_default(tr, label, &default.to_string());
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.replace(',', ".").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(tr: &Translator, label: &str, default: u32) -> Result<u32, AppError> {
    let prompt = prompt_with_default(tr, label, &default.to_string());
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thickness_snaps_to_slider_step() {
        assert_eq!(snap_thickness(165.0), 160.0);
        assert_eq!(snap_thickness(171.0), 180.0);
        assert_eq!(snap_thickness(0.0), 0.0);
    }
}
