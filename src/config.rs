use log::Level;

#[cfg(debug_assertions)]
pub fn get_gemini_base_url() -> &'static str {
    match option_env!("GEMINI_API_BASE") {
        Some(url) => url, // Local proxy or mock server while developing
        None => "https://generativelanguage.googleapis.com",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_gemini_base_url() -> &'static str {
    "https://generativelanguage.googleapis.com"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Baked in at build time by trunk; an unset key disables the ticker and the strategist.
pub fn gemini_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.trim().is_empty())
}

pub fn gemini_model() -> &'static str {
    option_env!("GEMINI_MODEL").unwrap_or("gemini-2.0-flash")
}

pub fn generate_content_url(model: &str, api_key: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        get_gemini_base_url(),
        model,
        api_key
    )
}

pub const HOVER_RESCAN_MS: u32 = 2_000;
pub const TICKER_PLACEHOLDER: &str = "SYNCING GLOBAL PROTOCOLS...";
