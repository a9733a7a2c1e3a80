use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_RENDERER_MODULE: &str =
    "https://cdn.jsdelivr.net/npm/three@0.134.0/build/three.module.js";
pub const DEFAULT_EFFECT_MODULE: &str = "https://esm.sh/vanta@0.5.24/dist/vanta.dots.min";

/// Timing and module settings for the background effect.
///
/// Provide one through Leptos context to override the defaults for a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundConfig {
    /// Pause after mount before any loading starts, so layout can settle.
    pub settle_delay_ms: u64,
    /// Pause after construction before the fallback is hidden.
    pub reveal_delay_ms: u64,
    /// Quiet period that collapses a burst of resize events into one call.
    pub resize_debounce_ms: u64,
    /// Upper bound on the library load. `None` waits forever.
    pub load_timeout_ms: Option<u64>,
    pub renderer_module: String,
    pub effect_module: String,
    pub dots: DotsOptions,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 1500,
            reveal_delay_ms: 500,
            resize_debounce_ms: 250,
            load_timeout_ms: Some(10_000),
            renderer_module: DEFAULT_RENDERER_MODULE.to_string(),
            effect_module: DEFAULT_EFFECT_MODULE.to_string(),
            dots: DotsOptions::default(),
        }
    }
}

impl BackgroundConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn load_timeout(&self) -> Option<Duration> {
        self.load_timeout_ms.map(Duration::from_millis)
    }
}

/// Visual options handed to the dot-field constructor.
///
/// Field names serialize to the camelCase keys the effect expects; the mount
/// element and the renderer are attached separately at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DotsOptions {
    pub mouse_controls: bool,
    pub touch_controls: bool,
    pub gyro_controls: bool,
    pub min_height: f64,
    pub min_width: f64,
    pub scale: f64,
    pub scale_mobile: f64,
    pub color: u32,
    pub color2: u32,
    pub background_color: u32,
    pub size: f64,
    pub spacing: f64,
    pub show_lines: bool,
}

impl Default for DotsOptions {
    fn default() -> Self {
        Self {
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
            min_height: 200.0,
            min_width: 200.0,
            scale: 1.0,
            scale_mobile: 1.0,
            color: 0x3b82f6,
            color2: 0x8b5cf6,
            background_color: 0x0a0a0f,
            size: 1.2,
            spacing: 60.0,
            show_lines: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = BackgroundConfig::default();
        assert_eq!(config.settle_delay(), Duration::from_millis(1500));
        assert_eq!(config.reveal_delay(), Duration::from_millis(500));
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert_eq!(config.load_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: BackgroundConfig =
            serde_json::from_str(r#"{"settleDelayMs": 0, "loadTimeoutMs": null}"#)
                .expect("config should parse");
        assert_eq!(config.settle_delay(), Duration::ZERO);
        assert_eq!(config.load_timeout(), None);
        assert_eq!(config.reveal_delay_ms, 500);
        assert_eq!(config.effect_module, DEFAULT_EFFECT_MODULE);
        assert_eq!(config.dots, DotsOptions::default());
    }

    #[test]
    fn test_dots_options_use_effect_keys() {
        let value = serde_json::to_value(DotsOptions::default()).expect("options should serialize");
        assert_eq!(value["mouseControls"], true);
        assert_eq!(value["gyroControls"], false);
        assert_eq!(value["minHeight"], 200.0f64);
        assert_eq!(value["scaleMobile"], 1.0f64);
        assert_eq!(value["color"], 0x3b82f6u32);
        assert_eq!(value["color2"], 0x8b5cf6u32);
        assert_eq!(value["backgroundColor"], 0x0a0a0fu32);
        assert_eq!(value["showLines"], true);
        assert!(value.get("el").is_none());
        assert!(value.get("THREE").is_none());
    }

    #[test]
    fn test_nested_dots_override() {
        let config: BackgroundConfig =
            serde_json::from_str(r#"{"dots": {"spacing": 30.0, "showLines": false}}"#)
                .expect("config should parse");
        assert_eq!(config.dots.spacing, 30.0);
        assert!(!config.dots.show_lines);
        assert_eq!(config.dots.size, 1.2);
    }
}
