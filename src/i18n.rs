use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const CURRENCY: &str = "general.currency";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SCENARIO_NEW_BUILD: &str = "scenario.new_build";
    pub const SCENARIO_RENOVATION: &str = "scenario.renovation";
    pub const INSULATION_EPS: &str = "insulation.eps";
    pub const INSULATION_MINERAL_WOOL: &str = "insulation.mineral_wool";
    pub const INSULATION_PHENOLIC_FOAM: &str = "insulation.phenolic_foam";
    pub const INSULATION_UNKNOWN: &str = "insulation.unknown";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const PROMPT_SCENARIO: &str = "prompt.scenario";
    pub const PROMPT_WALL: &str = "prompt.wall";
    pub const PROMPT_INSULATION: &str = "prompt.insulation";
    pub const PROMPT_THICKNESS: &str = "prompt.thickness";
    pub const PROMPT_ENERGY_PRICE: &str = "prompt.energy_price";
    pub const PROMPT_HDD: &str = "prompt.hdd";
    pub const PROMPT_HORIZON: &str = "prompt.horizon";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";

    pub const REPORT_CONTEXT: &str = "report.context";
    pub const REPORT_REFERENCE_HEADING: &str = "report.reference_heading";
    pub const REPORT_PROPOSED_HEADING: &str = "report.proposed_heading";
    pub const REPORT_PROPOSED_LABEL: &str = "report.proposed_label";
    pub const REPORT_INVESTMENT: &str = "report.investment";
    pub const REPORT_U_VALUE: &str = "report.u_value";
    pub const REPORT_WALL_THICKNESS: &str = "report.wall_thickness";
    pub const REPORT_EMBODIED_CARBON: &str = "report.embodied_carbon";
    pub const REPORT_ECONOMICS_HEADING: &str = "report.economics_heading";
    pub const REPORT_ANNUAL_COST_REFERENCE: &str = "report.annual_cost_reference";
    pub const REPORT_ANNUAL_COST_PROPOSED: &str = "report.annual_cost_proposed";
    pub const REPORT_ANNUAL_SAVINGS: &str = "report.annual_savings";
    pub const REPORT_PAYBACK: &str = "report.payback";
    pub const PAYBACK_YEARS: &str = "payback.years";
    pub const PAYBACK_IMMEDIATE: &str = "payback.immediate";
    pub const PAYBACK_NEVER: &str = "payback.never";
    pub const REPORT_STRUCTURE_HEADING: &str = "report.structure_heading";
    pub const REPORT_STRUCTURE_INVESTMENT: &str = "report.structure_investment";
    pub const REPORT_STRUCTURE_OPERATION: &str = "report.structure_operation";
    pub const VARIANT_REFERENCE: &str = "variant.reference";
    pub const VARIANT_PROPOSED: &str = "variant.proposed";
    pub const EXPORT_WRITTEN: &str = "export.written";

    pub const CATALOG_WALLS_HEADING: &str = "catalog.walls_heading";
    pub const CATALOG_INSULATION_HEADING: &str = "catalog.insulation_heading";
    pub const CATALOG_CONDUCTIVITY: &str = "catalog.conductivity";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    /// 모든 키 목록. 언어별 누락 검사에 쓴다.
    pub const ALL: &[&str] = &[
        ERROR_PREFIX,
        APP_EXIT,
        CURRENCY,
        MAIN_MENU_TITLE,
        MAIN_MENU_COMPARE,
        MAIN_MENU_CATALOG,
        MAIN_MENU_SETTINGS,
        MAIN_MENU_EXIT,
        PROMPT_MENU_SELECT,
        INVALID_SELECTION_RETRY,
        ERROR_INVALID_NUMBER,
        SCENARIO_NEW_BUILD,
        SCENARIO_RENOVATION,
        INSULATION_EPS,
        INSULATION_MINERAL_WOOL,
        INSULATION_PHENOLIC_FOAM,
        INSULATION_UNKNOWN,
        COMPARE_HEADING,
        PROMPT_SCENARIO,
        PROMPT_WALL,
        PROMPT_INSULATION,
        PROMPT_THICKNESS,
        PROMPT_ENERGY_PRICE,
        PROMPT_HDD,
        PROMPT_HORIZON,
        PROMPT_KEEP_DEFAULT,
        REPORT_CONTEXT,
        REPORT_REFERENCE_HEADING,
        REPORT_PROPOSED_HEADING,
        REPORT_PROPOSED_LABEL,
        REPORT_INVESTMENT,
        REPORT_U_VALUE,
        REPORT_WALL_THICKNESS,
        REPORT_EMBODIED_CARBON,
        REPORT_ECONOMICS_HEADING,
        REPORT_ANNUAL_COST_REFERENCE,
        REPORT_ANNUAL_COST_PROPOSED,
        REPORT_ANNUAL_SAVINGS,
        REPORT_PAYBACK,
        PAYBACK_YEARS,
        PAYBACK_IMMEDIATE,
        PAYBACK_NEVER,
        REPORT_STRUCTURE_HEADING,
        REPORT_STRUCTURE_INVESTMENT,
        REPORT_STRUCTURE_OPERATION,
        VARIANT_REFERENCE,
        VARIANT_PROPOSED,
        EXPORT_WRITTEN,
        CATALOG_WALLS_HEADING,
        CATALOG_INSULATION_HEADING,
        CATALOG_CONDUCTIVITY,
        SETTINGS_HEADING,
        SETTINGS_CURRENT,
        SETTINGS_UNIT_OPTIONS,
        SETTINGS_LANGUAGE_OPTIONS,
        SETTINGS_PROMPT_CHANGE,
        SETTINGS_INVALID,
        SETTINGS_SAVED,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Cs,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else if c.starts_with("cs") || c.starts_with("cz") {
            Language::Cs
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Cs => "cs",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/cs)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾고, 끝내 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ko => ko(key),
            Language::Cs => cs(key),
            Language::En => None,
        };
        builtin.or_else(|| en(key)).unwrap_or(key)
    }

    /// `{name}` 자리표시자를 채운 번역을 만든다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("cs") || other.starts_with("cz") => Some("cs".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" | "en" | "cs" => Some(lang),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.to_string()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }
    Some(map)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting. Settings saved.",
        CURRENCY => "CZK",
        MAIN_MENU_TITLE => "=== ETICS Wall Comparison ===",
        MAIN_MENU_COMPARE => "1) Compare wall assemblies",
        MAIN_MENU_CATALOG => "2) Material catalog",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid selection. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SCENARIO_NEW_BUILD => "New build",
        SCENARIO_RENOVATION => "Renovation (existing wall)",
        INSULATION_EPS => "EPS 70F (polystyrene)",
        INSULATION_MINERAL_WOOL => "MWF (mineral wool)",
        INSULATION_PHENOLIC_FOAM => "Phenolic foam",
        INSULATION_UNKNOWN => "Unknown insulation",
        COMPARE_HEADING => "-- Compare wall assemblies --",
        PROMPT_SCENARIO => "Reference scenario",
        PROMPT_WALL => "Reference wall",
        PROMPT_INSULATION => "Insulation material",
        PROMPT_THICKNESS => "Insulation thickness [mm] (0-300)",
        PROMPT_ENERGY_PRICE => "Energy price [{currency}/kWh]",
        PROMPT_HDD => "Heating degree-days (HDD)",
        PROMPT_HORIZON => "Evaluation period [years] (10-50)",
        PROMPT_KEEP_DEFAULT => "Enter keeps {value}",
        REPORT_CONTEXT => "Energy price {price} {currency}/kWh | HDD {hdd} | period {years} years",
        REPORT_REFERENCE_HEADING => "A) Load-bearing wall / reference",
        REPORT_PROPOSED_HEADING => "B) ETICS proposal",
        REPORT_PROPOSED_LABEL => "{insulation} {thickness} + load-bearing wall",
        REPORT_INVESTMENT => "Investment",
        REPORT_U_VALUE => "U-value",
        REPORT_WALL_THICKNESS => "Wall thickness",
        REPORT_EMBODIED_CARBON => "Embodied carbon",
        REPORT_ECONOMICS_HEADING => "Economic analysis and payback",
        REPORT_ANNUAL_COST_REFERENCE => "Annual cost (reference)",
        REPORT_ANNUAL_COST_PROPOSED => "Annual cost (ETICS)",
        REPORT_ANNUAL_SAVINGS => "Annual savings",
        REPORT_PAYBACK => "Simple payback",
        PAYBACK_YEARS => "{years} years",
        PAYBACK_IMMEDIATE => "Immediate (investment is lower)",
        PAYBACK_NEVER => "Never (running costs are not lower)",
        REPORT_STRUCTURE_HEADING => "Cost structure",
        REPORT_STRUCTURE_INVESTMENT => "Investment",
        REPORT_STRUCTURE_OPERATION => "Operation ({years} years)",
        VARIANT_REFERENCE => "Reference",
        VARIANT_PROPOSED => "ETICS proposal",
        EXPORT_WRITTEN => "Projection written to {path}",
        CATALOG_WALLS_HEADING => "-- Walls --",
        CATALOG_INSULATION_HEADING => "-- ETICS insulation at {thickness} --",
        CATALOG_CONDUCTIVITY => "Conductivity",
        SETTINGS_HEADING => "-- Settings --",
        SETTINGS_CURRENT => "Current: language={language}, units={units}",
        SETTINGS_UNIT_OPTIONS => "Units: 1) SI  2) Imperial",
        SETTINGS_LANGUAGE_OPTIONS => "Language: 1) auto  2) cs  3) en  4) ko",
        SETTINGS_PROMPT_CHANGE => "Choice (Enter to keep): ",
        SETTINGS_INVALID => "Invalid input; not changed.",
        SETTINGS_SAVED => "Settings updated.",
        _ => return None,
    };
    Some(s)
}

fn cs(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Chyba",
        APP_EXIT => "Ukončuji. Nastavení uloženo.",
        CURRENCY => "Kč",
        MAIN_MENU_TITLE => "=== Kalkulátor KZS ===",
        MAIN_MENU_COMPARE => "1) Porovnat skladby",
        MAIN_MENU_CATALOG => "2) Katalog materiálů",
        MAIN_MENU_SETTINGS => "3) Nastavení",
        MAIN_MENU_EXIT => "0) Konec",
        PROMPT_MENU_SELECT => "Vyberte položku: ",
        INVALID_SELECTION_RETRY => "Neplatná volba. Zkuste to znovu.",
        ERROR_INVALID_NUMBER => "Zadejte číslo.",
        SCENARIO_NEW_BUILD => "Novostavba",
        SCENARIO_RENOVATION => "Rekonstrukce (stávající stav)",
        INSULATION_EPS => "EPS 70F (polystyren)",
        INSULATION_MINERAL_WOOL => "MWF (minerální vata)",
        INSULATION_PHENOLIC_FOAM => "Fenolická pěna",
        INSULATION_UNKNOWN => "Neznámý izolant",
        COMPARE_HEADING => "-- Porovnání skladeb --",
        PROMPT_SCENARIO => "Referenční scénář",
        PROMPT_WALL => "Zdivo reference",
        PROMPT_INSULATION => "Materiál izolantu",
        PROMPT_THICKNESS => "Tloušťka izolace [mm] (0-300)",
        PROMPT_ENERGY_PRICE => "Cena energie [{currency}/kWh]",
        PROMPT_HDD => "Počet denostupňů (HDD)",
        PROMPT_HORIZON => "Doba hodnocení [roky] (10-50)",
        PROMPT_KEEP_DEFAULT => "Enter ponechá {value}",
        REPORT_CONTEXT => "Cena energie {price} {currency}/kWh | HDD {hdd} | doba {years} let",
        REPORT_REFERENCE_HEADING => "A) Nosné zdivo / Reference",
        REPORT_PROPOSED_HEADING => "B) Návrh ETICS (zateplení)",
        REPORT_PROPOSED_LABEL => "{insulation} {thickness} + nosné zdivo",
        REPORT_INVESTMENT => "Cena investice",
        REPORT_U_VALUE => "Součinitel U",
        REPORT_WALL_THICKNESS => "Tloušťka stěny",
        REPORT_EMBODIED_CARBON => "Svázané emise",
        REPORT_ECONOMICS_HEADING => "Ekonomická analýza a návratnost",
        REPORT_ANNUAL_COST_REFERENCE => "Roční náklady (reference)",
        REPORT_ANNUAL_COST_PROPOSED => "Roční náklady (ETICS)",
        REPORT_ANNUAL_SAVINGS => "Roční úspora",
        REPORT_PAYBACK => "Prostá návratnost",
        PAYBACK_YEARS => "{years} let",
        PAYBACK_IMMEDIATE => "Ihned (investice je nižší)",
        PAYBACK_NEVER => "Nenastane (proděláváte)",
        REPORT_STRUCTURE_HEADING => "Struktura ceny",
        REPORT_STRUCTURE_INVESTMENT => "Cena investice",
        REPORT_STRUCTURE_OPERATION => "Cena provozu ({years} let)",
        VARIANT_REFERENCE => "Reference",
        VARIANT_PROPOSED => "Návrh ETICS",
        EXPORT_WRITTEN => "Vývoj nákladů uložen do {path}",
        CATALOG_WALLS_HEADING => "-- Zdivo --",
        CATALOG_INSULATION_HEADING => "-- Izolanty ETICS při {thickness} --",
        CATALOG_CONDUCTIVITY => "Tepelná vodivost",
        SETTINGS_HEADING => "-- Nastavení --",
        SETTINGS_CURRENT => "Aktuálně: jazyk={language}, jednotky={units}",
        SETTINGS_UNIT_OPTIONS => "Jednotky: 1) SI  2) Imperiální",
        SETTINGS_LANGUAGE_OPTIONS => "Jazyk: 1) auto  2) cs  3) en  4) ko",
        SETTINGS_PROMPT_CHANGE => "Volba (Enter ponechá): ",
        SETTINGS_INVALID => "Neplatný vstup, beze změny.",
        SETTINGS_SAVED => "Nastavení změněno.",
        _ => return None,
    };
    Some(s)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다. 설정이 저장되었습니다.",
        CURRENCY => "CZK",
        MAIN_MENU_TITLE => "=== ETICS 외벽 비교 계산기 ===",
        MAIN_MENU_COMPARE => "1) 외벽 구성 비교",
        MAIN_MENU_CATALOG => "2) 자재 카탈로그",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SCENARIO_NEW_BUILD => "신축",
        SCENARIO_RENOVATION => "리모델링 (기존 벽체)",
        INSULATION_EPS => "EPS 70F (폴리스티렌)",
        INSULATION_MINERAL_WOOL => "MWF (미네랄울)",
        INSULATION_PHENOLIC_FOAM => "페놀폼",
        INSULATION_UNKNOWN => "알 수 없는 단열재",
        COMPARE_HEADING => "-- 외벽 구성 비교 --",
        PROMPT_SCENARIO => "기준 시나리오",
        PROMPT_WALL => "기준 벽체",
        PROMPT_INSULATION => "단열재",
        PROMPT_THICKNESS => "단열 두께 [mm] (0-300)",
        PROMPT_ENERGY_PRICE => "에너지 단가 [{currency}/kWh]",
        PROMPT_HDD => "난방 도일 (HDD)",
        PROMPT_HORIZON => "평가 기간 [년] (10-50)",
        PROMPT_KEEP_DEFAULT => "엔터 시 {value} 유지",
        REPORT_CONTEXT => "에너지 단가 {price} {currency}/kWh | HDD {hdd} | 기간 {years}년",
        REPORT_REFERENCE_HEADING => "A) 내력벽 / 기준안",
        REPORT_PROPOSED_HEADING => "B) ETICS 제안안",
        REPORT_PROPOSED_LABEL => "{insulation} {thickness} + 내력벽",
        REPORT_INVESTMENT => "시공비",
        REPORT_U_VALUE => "열관류율 U",
        REPORT_WALL_THICKNESS => "벽 두께",
        REPORT_EMBODIED_CARBON => "내재탄소",
        REPORT_ECONOMICS_HEADING => "경제성 분석 및 회수기간",
        REPORT_ANNUAL_COST_REFERENCE => "연간 비용 (기준안)",
        REPORT_ANNUAL_COST_PROPOSED => "연간 비용 (ETICS)",
        REPORT_ANNUAL_SAVINGS => "연간 절감액",
        REPORT_PAYBACK => "단순 회수기간",
        PAYBACK_YEARS => "{years}년",
        PAYBACK_IMMEDIATE => "즉시 (투자비가 더 낮음)",
        PAYBACK_NEVER => "회수 불가 (운영비 절감 없음)",
        REPORT_STRUCTURE_HEADING => "비용 구조",
        REPORT_STRUCTURE_INVESTMENT => "시공비",
        REPORT_STRUCTURE_OPERATION => "운영비 ({years}년)",
        VARIANT_REFERENCE => "기준안",
        VARIANT_PROPOSED => "ETICS 제안안",
        EXPORT_WRITTEN => "누적 비용 추이를 {path}에 저장했습니다",
        CATALOG_WALLS_HEADING => "-- 벽체 --",
        CATALOG_INSULATION_HEADING => "-- ETICS 단열재 ({thickness}) --",
        CATALOG_CONDUCTIVITY => "열전도율",
        SETTINGS_HEADING => "-- 설정 --",
        SETTINGS_CURRENT => "현재: 언어={language}, 단위={units}",
        SETTINGS_UNIT_OPTIONS => "단위: 1) SI  2) Imperial",
        SETTINGS_LANGUAGE_OPTIONS => "언어: 1) auto  2) cs  3) en  4) ko",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_builtin_strings() {
        for key in keys::ALL {
            assert!(en(key).is_some(), "en missing {key}");
            assert!(cs(key).is_some(), "cs missing {key}");
            assert!(ko(key).is_some(), "ko missing {key}");
        }
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("cs", Some("en")), "cs");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        let tr = Translator::new("xx");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::PAYBACK_IMMEDIATE), "Immediate (investment is lower)");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let tr = Translator::new("cs");
        let text = tr.tf(keys::PAYBACK_YEARS, &[("years", "20.0".to_string())]);
        assert_eq!(text, "20.0 let");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[payback]\nnever = \"nikdy\"\n").expect("parse");
        assert_eq!(map.get("payback.never").map(String::as_str), Some("nikdy"));
    }

    #[test]
    fn locale_strings_are_normalized() {
        assert_eq!(normalize_locale_string("cs_CZ.UTF-8").as_deref(), Some("cs"));
        assert_eq!(normalize_locale_string("fr_FR"), None);
    }
}
