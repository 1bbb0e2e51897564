use leptos::*;
use log::LevelFilter;

pub const DEFAULT_HAMBURGER_ICON: &str = "/hamburger.png";
pub const DEFAULT_CLOSE_ICON: &str = "/close.png";

/// Site-wide settings, fixed when the wasm bundle is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub hamburger_icon: String,
    pub close_icon: String,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hamburger_icon: DEFAULT_HAMBURGER_ICON.to_string(),
            close_icon: DEFAULT_CLOSE_ICON.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl SiteConfig {
    /// Reads overrides baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "NAVBAR_HAMBURGER_ICON" => option_env!("NAVBAR_HAMBURGER_ICON"),
            "NAVBAR_CLOSE_ICON" => option_env!("NAVBAR_CLOSE_ICON"),
            "NAVBAR_LOG_LEVEL" => option_env!("NAVBAR_LOG_LEVEL"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        Self {
            hamburger_icon: lookup("NAVBAR_HAMBURGER_ICON")
                .map(str::to_string)
                .unwrap_or(defaults.hamburger_icon),
            close_icon: lookup("NAVBAR_CLOSE_ICON")
                .map(str::to_string)
                .unwrap_or(defaults.close_icon),
            log_level: lookup("NAVBAR_LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Falls back to defaults when no config was provided, e.g. in isolated component trees.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::from_lookup(|_| None);

        assert_eq!(config.hamburger_icon, "/hamburger.png");
        assert_eq!(config.close_icon, "/close.png");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_config_overrides() {
        let config = SiteConfig::from_lookup(|key| match key {
            "NAVBAR_HAMBURGER_ICON" => Some("/static/menu.svg"),
            "NAVBAR_CLOSE_ICON" => Some("/static/x.svg"),
            "NAVBAR_LOG_LEVEL" => Some("debug"),
            _ => None,
        });

        assert_eq!(config.hamburger_icon, "/static/menu.svg");
        assert_eq!(config.close_icon, "/static/x.svg");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_config_invalid_log_level_falls_back() {
        let config = SiteConfig::from_lookup(|key| match key {
            "NAVBAR_LOG_LEVEL" => Some("loud"),
            _ => None,
        });

        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
