use std::sync::OnceLock;

use chrono_tz::Tz;

use crate::filter::utils::PresetDefinition;

pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Tokyo;

/// Quick picks shown in the panel, shortest span first.
pub const PRESETS: &[PresetDefinition] = &[
    PresetDefinition {
        label: "今日",
        days: 0,
    },
    PresetDefinition {
        label: "過去7日間",
        days: 7,
    },
    PresetDefinition {
        label: "過去30日間",
        days: 30,
    },
    PresetDefinition {
        label: "過去90日間",
        days: 90,
    },
];

/// Column headers, Sunday first to match the grid layout.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

/// Time zone used to anchor "today". Resolved once per session from the
/// optional `window.__KIKAN_CONFIG = { time_zone: "..." }` global, falling
/// back to the default.
pub fn current_time_zone() -> Tz {
    *TIME_ZONE.get_or_init(resolve_time_zone)
}

fn resolve_time_zone() -> Tz {
    match read_config_global() {
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            log::warn!("タイムゾーン {name:?} を解釈できません。{DEFAULT_TIME_ZONE} を使用します。");
            DEFAULT_TIME_ZONE
        }),
        None => DEFAULT_TIME_ZONE,
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_global() -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &"__KIKAN_CONFIG".into()).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    let object = js_sys::Object::from(config);
    js_sys::Reflect::get(&object, &"time_zone".into())
        .ok()
        .and_then(|value| value.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_global() -> Option<String> {
    None
}
