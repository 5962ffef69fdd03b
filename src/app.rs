use std::path::Path;

use thiserror::Error;

use crate::arena::{IdeaBoard, SortMode};
use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::lab::LabSim;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 터미널 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 알 수 없는 Future Lab 아이디어
    #[error("unknown lab idea: {0}")]
    UnknownIdea(String),
}

/// 설정에 맞춰 번역기를 만든다.
pub fn translator_for(cli_lang: &str, config: &Config) -> Translator {
    let lang_code = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    let tr = Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
    tracing::debug!(
        lang = %lang_code,
        overrides = tr.lookup(i18n::keys::MAIN_MENU_TITLE).is_some(),
        "language resolved"
    );
    tr
}

/// 대화형 세션 동안 유지되는 상태.
pub struct Session {
    pub tr: Translator,
    pub board: IdeaBoard,
    pub sort: SortMode,
    pub lab: LabSim,
}

impl Session {
    pub fn new(tr: Translator, config: &Config) -> Self {
        Self {
            tr,
            board: IdeaBoard::new(),
            sort: SortMode::default(),
            lab: LabSim {
                load: config.lab_load,
                ..LabSim::default()
            },
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, cli_lang: &str) -> Result<(), AppError> {
    let mut session = Session::new(translator_for(cli_lang, config), config);
    loop {
        let step = match ui_cli::main_menu(&session.tr)? {
            MenuChoice::Simulator => ui_cli::handle_simulator(&session.tr, config),
            MenuChoice::Catalog => ui_cli::handle_catalog(&session.tr),
            MenuChoice::Lab => ui_cli::handle_lab(&session.tr, &mut session.lab),
            MenuChoice::Arena => {
                ui_cli::handle_arena(&session.tr, &mut session.board, &mut session.sort)
            }
            MenuChoice::Settings => match ui_cli::handle_settings(&session.tr, config) {
                Ok(changed) => {
                    if changed {
                        session.tr = translator_for("auto", config);
                    }
                    config.save(config_path).map_err(AppError::from)
                }
                Err(err) => Err(err),
            },
            MenuChoice::Exit => break,
        };
        match step {
            Ok(()) => {}
            // 하위 메뉴 도중 입력이 닫히면 정상 종료한다
            Err(err) if ui_cli::is_end_of_input(&err) => {
                tracing::debug!("stdin closed inside a submenu");
                break;
            }
            Err(err) => return Err(err),
        }
    }
    config.save(config_path)?;
    println!("{}", session.tr.t(i18n::keys::APP_EXIT));
    Ok(())
}
