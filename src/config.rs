//! Configuration handling for the site

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration; every field is optional and falls back to a default
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Delay of the simulated submission, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long a notification stays on screen, in milliseconds
    pub notification_display_ms: Option<u64>,
    /// Length of the notification removal transition, in milliseconds
    pub notification_exit_ms: Option<u64>,
    /// Rows hidden under the fixed navbar when scrolling to a section
    pub header_offset: Option<u16>,
    /// Widths at or below this collapse the nav links into the menu
    pub menu_breakpoint: Option<u16>,
    /// Scroll offset past which the navbar switches style
    pub navbar_scroll_threshold: Option<u16>,
    /// Rows before a section's top at which it becomes the active nav item
    pub highlight_lookahead: Option<u16>,
    /// Visible fraction required to reveal a block
    pub reveal_threshold: Option<f32>,
    /// Rows cut from the bottom of the viewport for reveal checks
    pub reveal_bottom_margin: Option<u16>,
    /// Smooth scroll animation length, in milliseconds
    pub smooth_scroll_ms: Option<u64>,
}

impl SiteConfig {
    pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
    pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 5000;
    pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;
    pub const DEFAULT_HEADER_OFFSET: u16 = 3;
    pub const DEFAULT_MENU_BREAKPOINT: u16 = 100;
    pub const DEFAULT_NAVBAR_SCROLL_THRESHOLD: u16 = 2;
    pub const DEFAULT_HIGHLIGHT_LOOKAHEAD: u16 = 8;
    pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;
    pub const DEFAULT_REVEAL_BOTTOM_MARGIN: u16 = 2;
    pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 450;

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "clinic", "clinic-site")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration, writing a file with every default filled in on first run
    pub fn load_or_init() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_or_init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::with_defaults();
        config.save_to(path)?;
        tracing::info!("Wrote default config to {}", path.display());
        Ok(config)
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to `path` as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Every field set to its default value
    pub fn with_defaults() -> Self {
        Self {
            submit_delay_ms: Some(Self::DEFAULT_SUBMIT_DELAY_MS),
            notification_display_ms: Some(Self::DEFAULT_NOTIFICATION_DISPLAY_MS),
            notification_exit_ms: Some(Self::DEFAULT_NOTIFICATION_EXIT_MS),
            header_offset: Some(Self::DEFAULT_HEADER_OFFSET),
            menu_breakpoint: Some(Self::DEFAULT_MENU_BREAKPOINT),
            navbar_scroll_threshold: Some(Self::DEFAULT_NAVBAR_SCROLL_THRESHOLD),
            highlight_lookahead: Some(Self::DEFAULT_HIGHLIGHT_LOOKAHEAD),
            reveal_threshold: Some(Self::DEFAULT_REVEAL_THRESHOLD),
            reveal_bottom_margin: Some(Self::DEFAULT_REVEAL_BOTTOM_MARGIN),
            smooth_scroll_ms: Some(Self::DEFAULT_SMOOTH_SCROLL_MS),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(Self::DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(
            self.notification_display_ms
                .unwrap_or(Self::DEFAULT_NOTIFICATION_DISPLAY_MS),
        )
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(
            self.notification_exit_ms
                .unwrap_or(Self::DEFAULT_NOTIFICATION_EXIT_MS),
        )
    }

    pub fn header_offset(&self) -> u16 {
        self.header_offset.unwrap_or(Self::DEFAULT_HEADER_OFFSET)
    }

    pub fn menu_breakpoint(&self) -> u16 {
        self.menu_breakpoint.unwrap_or(Self::DEFAULT_MENU_BREAKPOINT)
    }

    pub fn navbar_scroll_threshold(&self) -> u16 {
        self.navbar_scroll_threshold
            .unwrap_or(Self::DEFAULT_NAVBAR_SCROLL_THRESHOLD)
    }

    pub fn highlight_lookahead(&self) -> u16 {
        self.highlight_lookahead
            .unwrap_or(Self::DEFAULT_HIGHLIGHT_LOOKAHEAD)
    }

    /// Clamped to `(0.0, 1.0]`
    pub fn reveal_threshold(&self) -> f32 {
        self.reveal_threshold
            .filter(|t| *t > 0.0 && *t <= 1.0)
            .unwrap_or(Self::DEFAULT_REVEAL_THRESHOLD)
    }

    pub fn reveal_bottom_margin(&self) -> u16 {
        self.reveal_bottom_margin
            .unwrap_or(Self::DEFAULT_REVEAL_BOTTOM_MARGIN)
    }

    pub fn smooth_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms.unwrap_or(Self::DEFAULT_SMOOTH_SCROLL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.header_offset.is_none());
        assert!(config.menu_breakpoint.is_none());
        assert!(config.reveal_threshold.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = SiteConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.notification_display(), Duration::from_secs(5));
        assert_eq!(config.notification_exit(), Duration::from_millis(300));
        assert_eq!(config.header_offset(), 3);
        assert_eq!(config.menu_breakpoint(), 100);
        assert_eq!(config.navbar_scroll_threshold(), 2);
        assert_eq!(config.highlight_lookahead(), 8);
        assert_eq!(config.reveal_threshold(), 0.1);
        assert_eq!(config.reveal_bottom_margin(), 2);
        assert_eq!(config.smooth_scroll_duration(), Duration::from_millis(450));
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            submit_delay_ms: Some(500),
            header_offset: Some(4),
            menu_breakpoint: Some(80),
            reveal_threshold: Some(0.25),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.submit_delay(), Duration::from_millis(500));
        assert_eq!(parsed.header_offset(), 4);
        assert_eq!(parsed.menu_breakpoint(), 80);
        assert_eq!(parsed.reveal_threshold(), 0.25);
        assert!(parsed.smooth_scroll_ms.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submit_delay_ms.is_none());
        assert_eq!(parsed.menu_breakpoint(), SiteConfig::DEFAULT_MENU_BREAKPOINT);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"header_offset": 5, "theme": "dark"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.header_offset(), 5);
    }

    #[test]
    fn test_out_of_range_reveal_threshold_falls_back() {
        let config = SiteConfig {
            reveal_threshold: Some(0.0),
            ..Default::default()
        };
        assert_eq!(config.reveal_threshold(), SiteConfig::DEFAULT_REVEAL_THRESHOLD);

        let config = SiteConfig {
            reveal_threshold: Some(1.5),
            ..Default::default()
        };
        assert_eq!(config.reveal_threshold(), SiteConfig::DEFAULT_REVEAL_THRESHOLD);
    }

    mod files {
        use super::*;
        use pretty_assertions::assert_eq;

        /// Fresh directory under the system temp dir, removed on drop
        struct ScratchDir(PathBuf);

        impl ScratchDir {
            fn new() -> Self {
                let name = format!("clinic-site-{}", uuid::Uuid::new_v4());
                Self(std::env::temp_dir().join(name))
            }

            fn config(&self) -> PathBuf {
                self.0.join("config.json")
            }
        }

        impl Drop for ScratchDir {
            fn drop(&mut self) {
                let _ = fs::remove_dir_all(&self.0);
            }
        }

        #[test]
        fn test_load_returns_default_when_no_file() {
            let dir = ScratchDir::new();
            let config = SiteConfig::load_from(&dir.config()).unwrap();
            assert!(config.submit_delay_ms.is_none());
            assert_eq!(config.header_offset(), SiteConfig::DEFAULT_HEADER_OFFSET);
        }

        #[test]
        fn test_save_then_load_round_trips() {
            let dir = ScratchDir::new();
            let config = SiteConfig {
                submit_delay_ms: Some(750),
                menu_breakpoint: Some(90),
                ..Default::default()
            };

            config.save_to(&dir.config()).unwrap();
            let loaded = SiteConfig::load_from(&dir.config()).unwrap();

            assert_eq!(loaded.submit_delay(), Duration::from_millis(750));
            assert_eq!(loaded.menu_breakpoint(), 90);
            assert!(loaded.header_offset.is_none());
        }

        #[test]
        fn test_malformed_file_is_an_error() {
            let dir = ScratchDir::new();
            fs::create_dir_all(&dir.0).unwrap();
            fs::write(dir.config(), "{ not json").unwrap();
            assert!(SiteConfig::load_from(&dir.config()).is_err());
        }

        #[test]
        fn test_first_run_writes_every_default() {
            let dir = ScratchDir::new();
            let config = SiteConfig::load_or_init_at(&dir.config()).unwrap();
            assert_eq!(config.menu_breakpoint, Some(SiteConfig::DEFAULT_MENU_BREAKPOINT));

            let written = fs::read_to_string(dir.config()).unwrap();
            assert!(written.contains("\"smooth_scroll_ms\": 450"));

            // Second run reads the file instead of rewriting it
            fs::write(dir.config(), r#"{"header_offset": 6}"#).unwrap();
            let config = SiteConfig::load_or_init_at(&dir.config()).unwrap();
            assert_eq!(config.header_offset(), 6);
        }
    }
}
