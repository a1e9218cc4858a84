use std::process::ExitCode;

use clap::Parser;
use etics_calculator::{app, cli::Cli, i18n};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let lang = cli.lang.clone();
    let config_path = cli.config.clone();
    match app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // 세션 중 설정 메뉴에서 바꾼 언어도 반영되도록 실패 후에 설정을 다시 읽는다.
            let tr = app::error_translator(&lang, &config_path);
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
