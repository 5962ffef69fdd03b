use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIMULATOR: &str = "main_menu.simulator";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_LAB: &str = "main_menu.lab";
    pub const MAIN_MENU_ARENA: &str = "main_menu.arena";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const NOTE_KEEP_CURRENT: &str = "prompt.keep_current";

    pub const SIM_HEADING: &str = "simulator.heading";
    pub const PROMPT_GPU_POWER: &str = "simulator.prompt_gpu_power";
    pub const PROMPT_GPUS_PER_SERVER: &str = "simulator.prompt_gpus_per_server";
    pub const PROMPT_SERVERS_PER_RACK: &str = "simulator.prompt_servers_per_rack";
    pub const PROMPT_OVERHEAD: &str = "simulator.prompt_overhead";
    pub const PROMPT_COOLING: &str = "simulator.prompt_cooling";
    pub const SIM_UNKNOWN_COOLING: &str = "simulator.unknown_cooling";
    pub const RESULT_COOLING: &str = "result.cooling";
    pub const RESULT_RACK_POWER: &str = "result.rack_power";
    pub const RESULT_FLUX: &str = "result.flux";
    pub const RESULT_HOTSPOT: &str = "result.hotspot";
    pub const RESULT_DIFFICULTY: &str = "result.difficulty";
    pub const RESULT_WATER: &str = "result.water";
    pub const RESULT_RACK_HEAT: &str = "result.rack_heat";

    pub const PROFILES_HEADING: &str = "profiles.heading";
    pub const PROFILES_COLUMNS: &str = "profiles.columns";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const PROMPT_CARD_ID: &str = "catalog.prompt_card_id";
    pub const CATALOG_NOT_FOUND: &str = "catalog.not_found";

    pub const LAB_HEADING: &str = "lab.heading";
    pub const PROMPT_IDEA: &str = "lab.prompt_idea";
    pub const PROMPT_LOAD: &str = "lab.prompt_load";
    pub const PROMPT_FRAMES: &str = "lab.prompt_frames";
    pub const LAB_LOAD: &str = "lab.load";
    pub const LAB_EFFECT: &str = "lab.effect";
    pub const LAB_RECOVERED: &str = "lab.recovered";

    pub const ARENA_HEADING: &str = "arena.heading";
    pub const ARENA_MODE: &str = "arena.mode";
    pub const ARENA_OPTIONS: &str = "arena.options";
    pub const ARENA_UPVOTES: &str = "arena.upvotes";
    pub const PROMPT_IDEA_TEXT: &str = "arena.prompt_text";
    pub const PROMPT_IDEA_NAME: &str = "arena.prompt_name";
    pub const PROMPT_IDEA_NUMBER: &str = "arena.prompt_number";
    pub const PROMPT_SORT: &str = "arena.prompt_sort";
    pub const ARENA_SUBMITTED: &str = "arena.submitted";
    pub const ARENA_EMPTY: &str = "arena.empty";
    pub const ARENA_TOO_LONG: &str = "arena.too_long";
    pub const ARENA_SPAM: &str = "arena.spam";
    pub const ARENA_UPVOTED: &str = "arena.upvoted";
    pub const ARENA_NOT_FOUND: &str = "arena.not_found";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_COOLING: &str = "settings.current_cooling";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 `locales/`를 찾아보고, 그래도 없으면 내장 문자열만 쓴다.
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

    /// 언어팩에서만 키를 조회한다.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
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
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
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
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블을 점(.)으로 이어 붙인 플랫 맵으로 만든다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== HeatStack 냉각 실험실 ===",
        MAIN_MENU_SIMULATOR => "1) 랙 스트레스 시뮬레이터",
        MAIN_MENU_CATALOG => "2) 현재 냉각 방식",
        MAIN_MENU_LAB => "3) Future Lab",
        MAIN_MENU_ARENA => "4) 아이디어 게시판",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        NOTE_KEEP_CURRENT => "(엔터 입력 시 현재 값 유지)",
        SIM_HEADING => "\n-- 랙 스트레스 시뮬레이터 --",
        PROMPT_GPU_POWER => "GPU 전력 [W]",
        PROMPT_GPUS_PER_SERVER => "서버당 GPU 수",
        PROMPT_SERVERS_PER_RACK => "랙당 서버 수",
        PROMPT_OVERHEAD => "부가 전력 [%]",
        PROMPT_COOLING => "냉각 방식 (air/dtc/imm/pcm/mag)",
        SIM_UNKNOWN_COOLING => "알 수 없는 냉각 방식이므로 공랭으로 계산합니다:",
        RESULT_COOLING => "냉각 방식:",
        RESULT_RACK_POWER => "랙 전력:",
        RESULT_FLUX => "열밀도 스트레스:",
        RESULT_HOTSPOT => "핫스팟 위험:",
        RESULT_DIFFICULTY => "인프라 난이도:",
        RESULT_WATER => "용수/복잡도:",
        RESULT_RACK_HEAT => "랙 히트맵:",
        PROFILES_HEADING => "\n-- 냉각 방식 프로파일 --",
        PROFILES_COLUMNS => "id    이름              열밀도 허용  랙 전력[kW]  복잡도",
        CATALOG_HEADING => "\n-- 현재 쓰이는 냉각 방식 --",
        PROMPT_CARD_ID => "자세히 볼 카드 id (엔터 시 건너뜀): ",
        CATALOG_NOT_FOUND => "해당 id의 카드가 없습니다:",
        LAB_HEADING => "\n-- Future Lab --",
        PROMPT_IDEA => "아이디어 id",
        PROMPT_LOAD => "부하 [%]",
        PROMPT_FRAMES => "진행할 프레임 수",
        LAB_LOAD => "부하",
        LAB_EFFECT => "효과",
        LAB_RECOVERED => "회수 전력",
        ARENA_HEADING => "\n-- 아이디어 게시판 --",
        ARENA_MODE => "모드:",
        ARENA_OPTIONS => "1) 목록  2) 아이디어 올리기  3) 추천  4) 정렬 변경  0) 돌아가기",
        ARENA_UPVOTES => "추천",
        PROMPT_IDEA_TEXT => "아이디어 (900자 이내): ",
        PROMPT_IDEA_NAME => "이름 (비우면 anon): ",
        PROMPT_IDEA_NUMBER => "추천할 번호: ",
        PROMPT_SORT => "정렬 (1=hot 2=new 3=top): ",
        ARENA_SUBMITTED => "등록되었습니다.",
        ARENA_EMPTY => "아이디어를 먼저 입력하세요.",
        ARENA_TOO_LONG => "900자 이내로 작성하세요.",
        ARENA_SPAM => "스팸 필터에 걸렸습니다.",
        ARENA_UPVOTED => "추천했습니다. 현재 추천 수:",
        ARENA_NOT_FOUND => "해당 번호의 아이디어가 없습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_COOLING => "기본 냉각 방식:",
        SETTINGS_OPTIONS => "1) 언어 변경  2) 기본 냉각 방식 변경",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== HeatStack Cooling Lab ===",
        MAIN_MENU_SIMULATOR => "1) Rack stress simulator",
        MAIN_MENU_CATALOG => "2) Cooling used today",
        MAIN_MENU_LAB => "3) Future Lab",
        MAIN_MENU_ARENA => "4) Idea Arena",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        NOTE_KEEP_CURRENT => "(press enter to keep the current value)",
        SIM_HEADING => "\n-- Rack Stress Simulator --",
        PROMPT_GPU_POWER => "GPU power [W]",
        PROMPT_GPUS_PER_SERVER => "GPUs per server",
        PROMPT_SERVERS_PER_RACK => "Servers per rack",
        PROMPT_OVERHEAD => "Overhead [%]",
        PROMPT_COOLING => "Cooling (air/dtc/imm/pcm/mag)",
        SIM_UNKNOWN_COOLING => "Unknown cooling id; evaluating with air:",
        RESULT_COOLING => "Cooling:",
        RESULT_RACK_POWER => "Rack power:",
        RESULT_FLUX => "Flux stress:",
        RESULT_HOTSPOT => "Hotspot risk:",
        RESULT_DIFFICULTY => "Infra difficulty:",
        RESULT_WATER => "Water/complexity:",
        RESULT_RACK_HEAT => "Rack heatmap:",
        PROFILES_HEADING => "\n-- Cooling Profiles --",
        PROFILES_COLUMNS => "id    name              flux cap     infra [kW]   complexity",
        CATALOG_HEADING => "\n-- Cooling Used Today --",
        PROMPT_CARD_ID => "Card id for details (enter to skip): ",
        CATALOG_NOT_FOUND => "No card with id:",
        LAB_HEADING => "\n-- Future Lab --",
        PROMPT_IDEA => "Idea id",
        PROMPT_LOAD => "Load [%]",
        PROMPT_FRAMES => "Frames to run",
        LAB_LOAD => "LOAD",
        LAB_EFFECT => "EFFECT",
        LAB_RECOVERED => "RECOVERED POWER",
        ARENA_HEADING => "\n-- Idea Arena --",
        ARENA_MODE => "Mode:",
        ARENA_OPTIONS => "1) List  2) Submit idea  3) Upvote  4) Change sort  0) Back",
        ARENA_UPVOTES => "upvotes",
        PROMPT_IDEA_TEXT => "Idea (under 900 chars): ",
        PROMPT_IDEA_NAME => "Name (blank = anon): ",
        PROMPT_IDEA_NUMBER => "Number to upvote: ",
        PROMPT_SORT => "Sort (1=hot 2=new 3=top): ",
        ARENA_SUBMITTED => "Submitted.",
        ARENA_EMPTY => "Type an idea first.",
        ARENA_TOO_LONG => "Keep it under 900 chars.",
        ARENA_SPAM => "That got eaten by the spam filter.",
        ARENA_UPVOTED => "Upvoted. Current upvotes:",
        ARENA_NOT_FOUND => "No idea with that number.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_COOLING => "Default cooling:",
        SETTINGS_OPTIONS => "1) Change language  2) Change default cooling",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings updated.",
        _ => return None,
    })
}
