use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::cooling::RackConfig;
use crate::lab::simulation::DEFAULT_LOAD;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드(auto/ko/en)
    pub language: String,
    /// 언어팩 TOML 디렉터리(선택)
    pub language_pack_dir: Option<String>,
    /// `RUST_LOG`가 없을 때 쓰는 로그 필터
    pub log_filter: String,
    /// Future Lab 초기 부하(%)
    pub lab_load: f64,
    /// 시뮬레이터 슬라이더 초기값
    pub rack: RackConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            log_filter: "warn".into(),
            lab_load: DEFAULT_LOAD,
            rack: RackConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
///
/// 로그 필터가 설정에 들어 있으므로 이 함수는 로그를 남기지 않는다.
/// 호출 측이 구독자를 설치한 뒤 [`LoadOutcome`]을 기록한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    load_with_outcome(path).map(|(cfg, _)| cfg)
}

/// 설정 파일을 어떻게 얻었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    DefaultsWritten,
}

/// [`load_or_default`]와 같지만 파일을 새로 만들었는지도 돌려준다.
pub fn load_with_outcome(path: &Path) -> Result<(Config, LoadOutcome), ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok((cfg, LoadOutcome::Loaded))
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok((cfg, LoadOutcome::DefaultsWritten))
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
