// localStorage persistence. Every read falls back to a default; write failures are ignored.

use crate::config::Settings;

pub const SETTINGS_KEY: &str = "mc_settings";
pub const MAZE_KEY: &str = "mc_maze_definition";
pub const SOLUTION_KEY: &str = "mc_solution";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn save_item(key: &str, value: &str) {
    if let Some(store) = local_storage() {
        let _ = store.set_item(key, value);
    }
}

pub fn load_settings() -> Settings {
    load_item(SETTINGS_KEY)
        .and_then(|raw| serde_json::from_str::<Settings>(&raw).ok())
        .unwrap_or_default()
        .normalized()
}

pub fn save_settings(settings: &Settings) {
    if let Ok(raw) = serde_json::to_string(settings) {
        save_item(SETTINGS_KEY, &raw);
    }
}
