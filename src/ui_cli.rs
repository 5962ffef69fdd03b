use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::app::AppError;
use crate::arena::{IdeaBoard, SortMode, SubmitError};
use crate::catalog::{self, TechCard};
use crate::config::Config;
use crate::cooling::rack_heat::{rack_cells, IDLE_HEAT};
use crate::cooling::{CoolingTech, RackConfig};
use crate::i18n::{keys, Translator};
use crate::lab::{FutureIdea, LabFrame, LabSim, FIELD_COLS};
use crate::report::{pct, StressReport};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Simulator,
    Catalog,
    Lab,
    Arena,
    Settings,
    Exit,
}

/// 열 강도(0~1)를 터미널 음영 문자로 바꿀 때 쓰는 단계.
const SHADES: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    main_menu_from(tr, &mut io::stdin().lock())
}

/// `input`에서 메뉴 선택을 읽는다. 입력이 끝나면 종료로 본다.
pub fn main_menu_from<R: BufRead>(
    tr: &Translator,
    input: &mut R,
) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_SIMULATOR,
        keys::MAIN_MENU_CATALOG,
        keys::MAIN_MENU_LAB,
        keys::MAIN_MENU_ARENA,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(err) if is_end_of_input(&err) => return Ok(MenuChoice::Exit),
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Simulator),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Lab),
            "4" => return Ok(MenuChoice::Arena),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 시뮬레이터 메뉴를 처리한다. 입력값은 설정의 랙 초기값으로 남는다.
pub fn handle_simulator(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SIM_HEADING));
    println!(
        "{:<20} {}",
        tr.t(keys::RESULT_RACK_HEAT),
        shade_row(&rack_cells(IDLE_HEAT))
    );
    println!("{}", tr.t(keys::NOTE_KEEP_CURRENT));
    let rack = &mut cfg.rack;
    rack.gpu_power_watts = read_f64_or_keep(tr, keys::PROMPT_GPU_POWER, rack.gpu_power_watts)?;
    rack.gpus_per_server = read_or_keep(tr, keys::PROMPT_GPUS_PER_SERVER, rack.gpus_per_server)?;
    rack.servers_per_rack =
        read_or_keep(tr, keys::PROMPT_SERVERS_PER_RACK, rack.servers_per_rack)?;
    rack.overhead_percent = read_f64_or_keep(tr, keys::PROMPT_OVERHEAD, rack.overhead_percent)?;
    let cooling = read_line(&format!(
        "{} [{}]: ",
        tr.t(keys::PROMPT_COOLING),
        rack.cooling.id()
    ))?;
    if !cooling.trim().is_empty() {
        rack.cooling = parse_cooling(tr, cooling.trim());
    }
    print_report(tr, rack);
    Ok(())
}

/// 냉각 식별자를 해석한다. 모르는 값은 알린 뒤 공랭으로 처리한다.
pub fn parse_cooling(tr: &Translator, id: &str) -> CoolingTech {
    CoolingTech::try_from_id(id).unwrap_or_else(|| {
        tracing::warn!(id, "unknown cooling id, using air");
        println!("{} {id}", tr.t(keys::SIM_UNKNOWN_COOLING));
        CoolingTech::from_id(id)
    })
}

/// 평가 결과를 출력한다.
pub fn print_report(tr: &Translator, rack: &RackConfig) {
    let report = StressReport::build(rack);
    println!(
        "{} {}",
        tr.t(keys::RESULT_COOLING),
        report.result.profile.display_name
    );
    println!("{}", report.status.label());
    let rows = [
        (keys::RESULT_RACK_POWER, &report.rack_power, report.fills.rack),
        (keys::RESULT_FLUX, &report.flux, report.fills.flux),
        (keys::RESULT_HOTSPOT, &report.hotspot, report.fills.hotspot),
        (keys::RESULT_DIFFICULTY, &report.difficulty, report.fills.difficulty),
    ];
    for (key, label, fill) in rows {
        println!("{:<20} {:<16} {}", tr.t(key), label, meter(fill, 20));
    }
    println!("{:<20} {}", tr.t(keys::RESULT_WATER), report.water);
    println!(
        "{:<20} {}",
        tr.t(keys::RESULT_RACK_HEAT),
        shade_row(&rack_cells(report.rack_heat))
    );
    println!("> {}", report.callout);
}

/// 프로파일 표를 출력한다.
pub fn print_profiles(tr: &Translator) {
    println!("{}", tr.t(keys::PROFILES_HEADING));
    println!("{}", tr.t(keys::PROFILES_COLUMNS));
    for tech in CoolingTech::ALL {
        let p = tech.profile();
        println!(
            "{:<5} {:<17} {:>11.0}  {:>11.0}  {:>10.0}",
            tech.id(),
            p.display_name,
            p.flux_capacity,
            p.infra_capacity,
            p.complexity_cost
        );
    }
}

/// 냉각 방식 카드 목록 메뉴를 처리한다.
pub fn handle_catalog(tr: &Translator) -> Result<(), AppError> {
    print_catalog(tr, None);
    let id = read_line(tr.t(keys::PROMPT_CARD_ID))?;
    if !id.trim().is_empty() {
        print_catalog(tr, Some(id.trim()));
    }
    Ok(())
}

/// id가 없으면 전체 카드 요약을, 있으면 해당 카드 상세를 출력한다.
pub fn print_catalog(tr: &Translator, id: Option<&str>) {
    match id {
        None => {
            println!("{}", tr.t(keys::CATALOG_HEADING));
            for card in catalog::CARDS {
                println!("{:<9} {} - {}", card.id, card.title, card.sub);
            }
        }
        Some(id) => match catalog::find(id) {
            Some(card) => print_card(card),
            None => println!("{} {id}", tr.t(keys::CATALOG_NOT_FOUND)),
        },
    }
}

fn print_card(card: &TechCard) {
    println!("\n{}", card.title);
    println!("{}", card.sub);
    println!("[{}]", card.tags.join("] ["));
    println!("{}", card.how);
    for p in card.pros {
        println!("  + {p}");
    }
    for c in card.cons {
        println!("  - {c}");
    }
}

/// Future Lab 메뉴를 처리한다.
pub fn handle_lab(tr: &Translator, lab: &mut LabSim) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LAB_HEADING));
    for idea in FutureIdea::ALL {
        println!("{:<6} {} - {}", idea.id(), idea.title(), idea.sub());
    }
    println!("{}", tr.t(keys::NOTE_KEEP_CURRENT));
    let id = read_line(&format!("{} [{}]: ", tr.t(keys::PROMPT_IDEA), lab.idea.id()))?;
    if !id.trim().is_empty() {
        match FutureIdea::from_id(id.trim()) {
            Some(idea) => lab.idea = idea,
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
    lab.load = read_f64_or_keep(tr, keys::PROMPT_LOAD, lab.load)?;
    let frames: u32 = read_or_keep(tr, keys::PROMPT_FRAMES, 0)?;
    run_lab(lab, frames);
    print_lab_frame(tr, lab.idea, &lab.frame());
    Ok(())
}

/// 정해진 프레임 수만큼 진행한 뒤 멈춘다. 0이면 초기 상태를 보여준다.
pub fn run_lab(lab: &mut LabSim, frames: u32) {
    lab.reset();
    if frames == 0 {
        return;
    }
    lab.start();
    for _ in 0..frames {
        lab.advance();
    }
    tracing::debug!(idea = lab.idea.id(), t = lab.t, "lab advanced");
}

/// 히트 필드와 계기값을 출력한다.
pub fn print_lab_frame(tr: &Translator, idea: FutureIdea, frame: &LabFrame) {
    println!("\nLAB: {}", idea.title().to_uppercase());
    for row in frame.cells.chunks(FIELD_COLS) {
        println!("  |{}|", shade_row(row));
    }
    println!("{:<16} {}", tr.t(keys::LAB_LOAD), meter(frame.load, 24));
    println!("{:<16} {}", tr.t(keys::LAB_EFFECT), meter(frame.effect, 24));
    if let Some(rec) = frame.recovered_power {
        println!("{:<16} {}", tr.t(keys::LAB_RECOVERED), meter(rec, 24));
    }
    println!("{}", idea.hint());
}

/// 아이디어 게시판 메뉴를 처리한다.
pub fn handle_arena(
    tr: &Translator,
    board: &mut IdeaBoard,
    sort: &mut SortMode,
) -> Result<(), AppError> {
    loop {
        println!("{}", tr.t(keys::ARENA_HEADING));
        println!("{} {}", tr.t(keys::ARENA_MODE), board.mode().label());
        println!("{}", tr.t(keys::ARENA_OPTIONS));
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => print_ideas(tr, board, *sort),
            "2" => {
                let text = read_line(tr.t(keys::PROMPT_IDEA_TEXT))?;
                let name = read_line(tr.t(keys::PROMPT_IDEA_NAME))?;
                match board.submit(&text, &name) {
                    Ok(_) => println!("{}", tr.t(keys::ARENA_SUBMITTED)),
                    Err(e) => println!("{}", tr.t(submit_error_key(&e))),
                }
            }
            "3" => {
                print_ideas(tr, board, *sort);
                let n: usize = read_or_keep(tr, keys::PROMPT_IDEA_NUMBER, 0)?;
                let id = n
                    .checked_sub(1)
                    .and_then(|i| board.sorted(*sort).get(i).map(|idea| idea.id.clone()));
                match id.and_then(|id| board.upvote(&id)) {
                    Some(up) => println!("{} {up}", tr.t(keys::ARENA_UPVOTED)),
                    None => println!("{}", tr.t(keys::ARENA_NOT_FOUND)),
                }
            }
            "4" => {
                let s = read_line(tr.t(keys::PROMPT_SORT))?;
                *sort = match s.trim() {
                    "1" => SortMode::Hot,
                    "2" => SortMode::New,
                    "3" => SortMode::Top,
                    _ => {
                        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                        *sort
                    }
                };
                print_ideas(tr, board, *sort);
            }
            "0" | "" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn submit_error_key(err: &SubmitError) -> &'static str {
    match err {
        SubmitError::Empty => keys::ARENA_EMPTY,
        SubmitError::TooLong { .. } => keys::ARENA_TOO_LONG,
        SubmitError::Spam => keys::ARENA_SPAM,
    }
}

fn print_ideas(tr: &Translator, board: &IdeaBoard, sort: SortMode) {
    for (i, idea) in board.sorted(sort).iter().enumerate() {
        println!(
            "{:>2}) {} | {} | {} {}",
            i + 1,
            idea.name,
            idea.ts,
            idea.up,
            tr.t(keys::ARENA_UPVOTES)
        );
        println!("    {}", idea.text);
    }
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 `true`를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_COOLING), cfg.rack.cooling.id());
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let lang = lang.trim().to_lowercase();
            if matches!(lang.as_str(), "auto" | "ko" | "en") {
                cfg.language = lang;
                println!("{}", tr.t(keys::SETTINGS_SAVED));
                return Ok(true);
            }
            println!("{}", tr.t(keys::SETTINGS_INVALID));
        }
        "2" => {
            let id = read_line(&format!("{}: ", tr.t(keys::PROMPT_COOLING)))?;
            match CoolingTech::try_from_id(id.trim()) {
                Some(tech) => {
                    cfg.rack.cooling = tech;
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                }
                None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
        }
        "" => {}
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(false)
}

/// `[####------] 40%` 형식의 막대를 만든다.
fn meter(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0)) * width as f64).round() as usize;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(width - filled),
        pct(fraction * 100.0)
    )
}

fn shade_row(cells: &[f64]) -> String {
    cells
        .iter()
        .map(|h| {
            let idx = (h.clamp(0.0, 1.0) * (SHADES.len() - 1) as f64).round() as usize;
            SHADES[idx]
        })
        .collect()
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 닫혀 있으면 `UnexpectedEof`.
pub fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

/// 표준 입력이 끝났는지 여부.
pub fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

/// 빈 입력이면 현재 값을 그대로 쓰고, 아니면 숫자를 다시 물을 때까지 읽는다.
fn read_or_keep<T>(tr: &Translator, key: &str, current: T) -> Result<T, AppError>
where
    T: FromStr + std::fmt::Display + Copy,
{
    loop {
        let s = read_line(&format!("{} [{current}]: ", tr.t(key)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 모델에는 유한한 값만 넘긴다. NaN/inf 입력은 다시 묻는다.
fn read_f64_or_keep(tr: &Translator, key: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let v = read_or_keep(tr, key, current)?;
        if v.is_finite() {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}
