//! 명령줄 인자 정의. 하위 명령이 없으면 대화형 메뉴를 실행한다.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::app::{self, AppError};
use crate::config::{self, Config};
use crate::cooling::RackConfig;
use crate::i18n::Translator;
use crate::lab::{FutureIdea, LabSim};
use crate::ui_cli;

#[derive(Debug, Parser)]
#[command(name = "heatstack", version, about = "Data-center cooling stress explorer")]
pub struct Cli {
    /// UI 언어 (auto/ko/en)
    #[arg(long, default_value = "auto", global = true)]
    pub lang: String,

    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 랙 구성을 평가해 스트레스 지표를 출력한다
    Evaluate(EvaluateArgs),
    /// 냉각 방식 프로파일 표를 출력한다
    Profiles,
    /// 현재 쓰이는 냉각 방식 카드를 출력한다
    Catalog {
        /// 상세히 볼 카드 id
        id: Option<String>,
    },
    /// Future Lab 시뮬레이션을 진행하고 히트 필드를 출력한다
    Lab(LabArgs),
}

/// 지정하지 않은 값은 설정 파일의 랙 초기값을 쓴다.
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// GPU 1개당 전력 [W]
    #[arg(long, value_parser = finite_f64)]
    pub gpu_w: Option<f64>,
    #[arg(long)]
    pub gpus_per_server: Option<u32>,
    #[arg(long)]
    pub servers_per_rack: Option<u32>,
    /// 부가 전력 [%]
    #[arg(long, value_parser = finite_f64)]
    pub overhead: Option<f64>,
    /// 냉각 방식 id (air/dtc/imm/pcm/mag)
    #[arg(long)]
    pub cooling: Option<String>,
}

#[derive(Debug, Args)]
pub struct LabArgs {
    /// 아이디어 id (pcm/sched/micro/mag/teg)
    #[arg(long, default_value = "pcm")]
    pub idea: String,
    /// 부하 [%]
    #[arg(long, value_parser = finite_f64)]
    pub load: Option<f64>,
    /// 진행할 프레임 수
    #[arg(long, default_value_t = 0)]
    pub frames: u32,
}

fn finite_f64(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("{s} is not a finite number"))
    }
}

impl EvaluateArgs {
    /// 설정의 초기값 위에 명령줄 값을 덮어쓴다.
    pub fn apply(&self, rack: &mut RackConfig, tr: &Translator) {
        if let Some(w) = self.gpu_w {
            rack.gpu_power_watts = w;
        }
        if let Some(n) = self.gpus_per_server {
            rack.gpus_per_server = n;
        }
        if let Some(n) = self.servers_per_rack {
            rack.servers_per_rack = n;
        }
        if let Some(p) = self.overhead {
            rack.overhead_percent = p;
        }
        if let Some(id) = &self.cooling {
            rack.cooling = ui_cli::parse_cooling(tr, id);
        }
    }
}

/// 파싱된 인자로 명령을 실행한다.
pub fn dispatch(cli: &Cli, mut cfg: Config) -> Result<(), AppError> {
    let tr = app::translator_for(&cli.lang, &cfg);
    match &cli.command {
        None => app::run(&mut cfg, Path::new(&cli.config), &cli.lang)?,
        Some(Command::Evaluate(args)) => {
            let mut rack = cfg.rack.clone();
            args.apply(&mut rack, &tr);
            ui_cli::print_report(&tr, &rack);
        }
        Some(Command::Profiles) => ui_cli::print_profiles(&tr),
        Some(Command::Catalog { id }) => ui_cli::print_catalog(&tr, id.as_deref()),
        Some(Command::Lab(args)) => {
            let idea = FutureIdea::from_id(&args.idea)
                .ok_or_else(|| AppError::UnknownIdea(args.idea.clone()))?;
            let mut lab = LabSim::new(idea, args.load.unwrap_or(cfg.lab_load));
            ui_cli::run_lab(&mut lab, args.frames);
            ui_cli::print_lab_frame(&tr, lab.idea, &lab.frame());
        }
    }
    Ok(())
}
