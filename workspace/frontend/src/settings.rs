use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "mcontas_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Path prefix the app is served under (e.g., "/minhas-contas")
    pub base_path: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_path: "/minhas-contas".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn storage_key(name: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, name)
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Leading slash, no trailing slash; "/" collapses to empty (served at root).
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|name| storage.get_item(&storage_key(name)).ok().flatten());
        }

        settings
    }

    /// Apply stored overrides; values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_path) = lookup("base_path") {
            self.base_path = normalize_base_path(&base_path);
        }

        if let Some(level) = lookup("log_level").as_deref().and_then(parse_level) {
            self.log_level = level;
        }

        if let Some(duration) = lookup("toast_duration_ms").and_then(|d| d.parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }
    }

    /// Router basename, `None` when served from the root
    pub fn basename(&self) -> Option<String> {
        (!self.base_path.is_empty()).then(|| self.base_path.clone())
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.basename(), Some("/minhas-contas".to_string()));
        assert_eq!(settings.log_level, Level::Info);
        assert_eq!(settings.toast_duration_ms, 5000);
    }

    #[test]
    fn test_overrides_applied() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup_from(&[
            ("base_path", "bills/"),
            ("log_level", "TRACE"),
            ("toast_duration_ms", "1500"),
        ]));

        assert_eq!(settings.base_path, "/bills");
        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.toast_duration_ms, 1500);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup_from(&[
            ("log_level", "loud"),
            ("toast_duration_ms", "soon"),
        ]));

        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_root_base_path_has_no_basename() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup_from(&[("base_path", "/")]));
        assert_eq!(settings.basename(), None);
    }
}
