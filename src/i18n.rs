use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SINGLE_STOP: &str = "main_menu.single_stop";
    pub const MAIN_MENU_MULTI_STOP: &str = "main_menu.multi_stop";
    pub const MAIN_MENU_VEHICLES: &str = "main_menu.vehicles";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_EFFICIENCY: &str = "prompt.efficiency";
    pub const PROMPT_DISTANCE: &str = "prompt.distance";
    pub const PROMPT_BUFFER: &str = "prompt.buffer";
    pub const PROMPT_STARTING_BATTERY: &str = "prompt.starting_battery";
    pub const PROMPT_LEG_COUNT: &str = "prompt.leg_count";
    pub const PROMPT_LEG_DISTANCE: &str = "prompt.leg_distance";
    pub const PROMPT_SKIP_ANALYSIS: &str = "prompt.skip_analysis";

    pub const SINGLE_STOP_HEADING: &str = "single_stop.heading";
    pub const MULTI_STOP_HEADING: &str = "multi_stop.heading";
    pub const NO_RESULT: &str = "result.none";
    pub const RESULT_NEEDED: &str = "result.needed";
    pub const RESULT_CHARGE_TARGET: &str = "result.charge_target";
    pub const RESULT_BEST_CASE: &str = "result.best_case";
    pub const RESULT_WORST_CASE: &str = "result.worst_case";
    pub const RESULT_CONSERVATIVE_CASE: &str = "result.conservative_case";
    pub const RESULT_LEG_LINE: &str = "result.leg_line";
    pub const RESULT_ARRIVAL_BATTERY: &str = "result.arrival_battery";
    pub const RESULT_TRIP_TOTAL: &str = "result.trip_total";
    pub const RESULT_SKIP_HEADING: &str = "result.skip_heading";
    pub const SKIP_DOABLE: &str = "result.skip_doable";
    pub const SKIP_NOT_DOABLE: &str = "result.skip_not_doable";

    pub const VEHICLES_HEADING: &str = "vehicles.heading";
    pub const VEHICLES_LIST_OPTION: &str = "vehicles.list_option";
    pub const VEHICLES_ADD_OPTION: &str = "vehicles.add_option";
    pub const PROMPT_VEHICLE_NAME: &str = "vehicles.prompt_name";
    pub const PROMPT_VEHICLE_CAPACITY: &str = "vehicles.prompt_capacity";
    pub const VEHICLE_ADDED: &str = "vehicles.added";
    pub const VEHICLE_NOT_ADDED: &str = "vehicles.not_added";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_MODE: &str = "settings.current_mode";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
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

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
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

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
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
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
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
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
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

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Battery Required : EV Trip Calculator ===",
        MAIN_MENU_SINGLE_STOP => "1) 단일 목적지 충전량",
        MAIN_MENU_MULTI_STOP => "2) 다구간 트립 시뮬레이션",
        MAIN_MENU_VEHICLES => "3) 차량 목록/추가",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_EFFICIENCY => "현재 전비 [mi/kWh]: ",
        PROMPT_DISTANCE => "목적지까지 거리 [mi]: ",
        PROMPT_BUFFER => "안전 버퍼 [%] (0~20): ",
        PROMPT_STARTING_BATTERY => "출발 배터리 [%] (0~100): ",
        PROMPT_LEG_COUNT => "구간 수: ",
        PROMPT_LEG_DISTANCE => "구간 거리 [mi]: ",
        PROMPT_SKIP_ANALYSIS => "중간 정차 생략 분석? (y/N): ",
        SINGLE_STOP_HEADING => "\n-- 단일 목적지 충전량 --",
        MULTI_STOP_HEADING => "\n-- 다구간 트립 시뮬레이션 --",
        NO_RESULT => "입력이 부족하거나 잘못되어 계산 결과가 없습니다.",
        RESULT_NEEDED => "필요 에너지 / 배터리:",
        RESULT_CHARGE_TARGET => "권장 충전 목표:",
        RESULT_BEST_CASE => "최선(+10% 전비):",
        RESULT_WORST_CASE => "최악(-10% 전비):",
        RESULT_CONSERVATIVE_CASE => "보수(-20% 전비):",
        RESULT_LEG_LINE => "구간",
        RESULT_ARRIVAL_BATTERY => "최종 도착 배터리:",
        RESULT_TRIP_TOTAL => "트립 합계:",
        RESULT_SKIP_HEADING => "중간 정차 생략 분석:",
        SKIP_DOABLE => "생략 가능",
        SKIP_NOT_DOABLE => "생략 불가",
        VEHICLES_HEADING => "\n-- 차량 --",
        VEHICLES_LIST_OPTION => "1) 목록 보기",
        VEHICLES_ADD_OPTION => "2) 차량 추가",
        PROMPT_VEHICLE_NAME => "차량 이름: ",
        PROMPT_VEHICLE_CAPACITY => "배터리 용량 [kWh]: ",
        VEHICLE_ADDED => "차량을 추가했습니다:",
        VEHICLE_NOT_ADDED => "이름이 비었거나 용량이 잘못되어 추가하지 않았습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_MODE => "현재 산정 방식:",
        SETTINGS_OPTIONS => "1) Buffered(버퍼+±10% 밴드)  2) Conservative(-20% 보수)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "산정 방식이 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Battery Required : EV Trip Calculator ===",
        MAIN_MENU_SINGLE_STOP => "1) Single-destination charge",
        MAIN_MENU_MULTI_STOP => "2) Multi-stop trip simulation",
        MAIN_MENU_VEHICLES => "3) Vehicles (list/add)",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_EFFICIENCY => "Current efficiency [mi/kWh]: ",
        PROMPT_DISTANCE => "Distance to destination [mi]: ",
        PROMPT_BUFFER => "Safety buffer [%] (0-20): ",
        PROMPT_STARTING_BATTERY => "Starting battery [%] (0-100): ",
        PROMPT_LEG_COUNT => "Number of legs: ",
        PROMPT_LEG_DISTANCE => "Leg distance [mi]: ",
        PROMPT_SKIP_ANALYSIS => "Analyze skipping charging stops? (y/N): ",
        SINGLE_STOP_HEADING => "\n-- Single-Destination Charge --",
        MULTI_STOP_HEADING => "\n-- Multi-Stop Trip Simulation --",
        NO_RESULT => "No result; input is missing or invalid.",
        RESULT_NEEDED => "Energy / battery needed:",
        RESULT_CHARGE_TARGET => "Recommended charge target:",
        RESULT_BEST_CASE => "Best (+10% efficiency):",
        RESULT_WORST_CASE => "Worst (-10% efficiency):",
        RESULT_CONSERVATIVE_CASE => "Conservative (-20% efficiency):",
        RESULT_LEG_LINE => "Leg",
        RESULT_ARRIVAL_BATTERY => "Battery on final arrival:",
        RESULT_TRIP_TOTAL => "Trip total:",
        RESULT_SKIP_HEADING => "Skip-a-stop analysis:",
        SKIP_DOABLE => "doable",
        SKIP_NOT_DOABLE => "not doable",
        VEHICLES_HEADING => "\n-- Vehicles --",
        VEHICLES_LIST_OPTION => "1) List vehicles",
        VEHICLES_ADD_OPTION => "2) Add vehicle",
        PROMPT_VEHICLE_NAME => "Vehicle name: ",
        PROMPT_VEHICLE_CAPACITY => "Battery capacity [kWh]: ",
        VEHICLE_ADDED => "Vehicle added:",
        VEHICLE_NOT_ADDED => "Not added: empty name or invalid capacity.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_MODE => "Current projection mode:",
        SETTINGS_OPTIONS => "1) Buffered (buffer + ±10% band)  2) Conservative (-20%)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; mode unchanged.",
        SETTINGS_SAVED => "Projection mode changed to:",
        _ => return None,
    })
}
