use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::cli::{CatalogArgs, Cli, Command, CompareArgs, OutputFormat};
use crate::config::{self, Config, ConfigError};
use crate::evaluation::{evaluate, Evaluation, EvaluationError};
use crate::i18n::{self, keys, Translator};
use crate::report::{self, ExportError};
use crate::telemetry::{self, TelemetryError};
use crate::ui_cli::{self, MenuChoice};
use crate::units::UnitSystem;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 입력 검증 또는 구성 오류
    #[error("{0}")]
    Evaluation(#[from] EvaluationError),
    /// CSV/JSON 내보내기 오류
    #[error("{0}")]
    Export(#[from] ExportError),
    /// 로그 초기화 오류
    #[error("{0}")]
    Telemetry(#[from] TelemetryError),
}

/// CLI 플래그 → 설정 → 시스템 로케일 순으로 언어를 골라 번역기를 만든다.
pub fn translator_for(lang_arg: &str, config: &Config) -> Translator {
    let resolved = i18n::resolve_language(lang_arg, Some(config.language.as_str()));
    Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref())
}

/// 오류 접두어용 번역기. 설정 파일은 읽기만 하고, 읽지 못하면 --lang과 시스템 로케일만 쓴다.
pub fn error_translator(lang_arg: &str, config_path: &Path) -> Translator {
    match config::read(config_path) {
        Ok(config) => translator_for(lang_arg, &config),
        Err(_) => Translator::new(&i18n::resolve_language(lang_arg, None)),
    }
}

/// 설정을 로드하고 로그를 초기화한 뒤 하위 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = config::load_or_default(&cli.config)?;
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    telemetry::init(&log_level)?;
    let mut tr = translator_for(&cli.lang, &config);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Compare(args) => run_compare(&args, &config, &tr),
        Command::Catalog(args) => run_catalog(&args, &config, &tr),
        Command::Interactive => run_interactive(&mut config, &cli.config, &mut tr),
    }
}

fn run_compare(args: &CompareArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let mut request = config.defaults.to_request();
    args.apply(&mut request);
    let units = args.units.unwrap_or(config.unit_system);
    let evaluation = evaluate(&request)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_output(args.format, &evaluation, tr, units, BufWriter::new(file))?;
            eprintln!(
                "{}",
                tr.tf(keys::EXPORT_WRITTEN, &[("path", path.display().to_string())])
            );
        }
        None => {
            let stdout = io::stdout();
            write_output(args.format, &evaluation, tr, units, stdout.lock())?;
        }
    }
    Ok(())
}

fn write_output<W: Write>(
    format: OutputFormat,
    evaluation: &Evaluation,
    tr: &Translator,
    units: UnitSystem,
    mut writer: W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            writer.write_all(report::render_text(evaluation, tr, units).as_bytes())?;
        }
        OutputFormat::Csv => report::write_csv(&evaluation.projection, &mut writer)?,
        OutputFormat::Json => {
            report::write_json(evaluation, &mut writer)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn run_catalog(args: &CatalogArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let units = args.units.unwrap_or(config.unit_system);
    print!("{}", report::render_catalog(tr, units, args.thickness));
    Ok(())
}

/// 메뉴 루프를 실행한다. 설정 변경과 마지막 입력값은 종료 시 설정 파일에 저장된다.
fn run_interactive(
    config: &mut Config,
    config_path: &Path,
    tr: &mut Translator,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Compare => ui_cli::handle_compare(tr, config)?,
            MenuChoice::Catalog => ui_cli::handle_catalog(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
                // 메뉴에서 고른 언어가 --lang 플래그보다 우선한다.
                *tr = translator_for("auto", config);
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
