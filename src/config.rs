/// Log level from a `?log=<level>` query string; `Info` when absent or unknown.
pub fn parse_log_level(search: &str) -> log::Level {
    let query = search.trim_start_matches('?');
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "log")
        .and_then(|(_, v)| match v.to_ascii_lowercase().as_str() {
            "error" => Some(log::Level::Error),
            "warn" => Some(log::Level::Warn),
            "info" => Some(log::Level::Info),
            "debug" => Some(log::Level::Debug),
            "trace" => Some(log::Level::Trace),
            _ => None,
        })
        .unwrap_or(log::Level::Info)
}

#[cfg(target_arch = "wasm32")]
pub fn log_level() -> log::Level {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|s| parse_log_level(&s))
        .unwrap_or(log::Level::Info)
}
