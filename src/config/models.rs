use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    /// Distance from the viewport top of the line that decides which
    /// section is active.
    #[serde(default = "crate::config::defaults::default_active_line_px")]
    pub active_line_px: f32,
    /// How far above a section's top a programmatic scroll lands, so
    /// the fixed navigation bar does not cover the heading.
    #[serde(default = "crate::config::defaults::default_nav_offset_px")]
    pub nav_offset_px: f32,
    /// Scroll depth past which the navigation bar gets a solid
    /// background.
    #[serde(default = "crate::config::defaults::default_navbar_solid_threshold_px")]
    pub navbar_solid_threshold_px: f32,
    /// Scroll depth past which the scroll-to-top control appears.
    #[serde(default = "crate::config::defaults::default_scroll_top_threshold_px")]
    pub scroll_top_threshold_px: f32,
    #[serde(default = "crate::config::defaults::default_spring_stiffness")]
    pub spring_stiffness: f32,
    #[serde(default = "crate::config::defaults::default_spring_damping")]
    pub spring_damping: f32,
    #[serde(default = "crate::config::defaults::default_spring_rest_delta")]
    pub spring_rest_delta: f32,
    #[serde(default = "crate::config::defaults::default_scroll_duration_secs")]
    pub scroll_duration_secs: f32,
    #[serde(default = "crate::config::defaults::default_reveal_duration_secs")]
    pub reveal_duration_secs: f32,
    #[serde(default = "crate::config::defaults::default_reveal_slide_px")]
    pub reveal_slide_px: f32,
    /// How long a sent/failed contact status stays on screen before
    /// the form returns to idle.
    #[serde(default = "crate::config::defaults::default_status_display_secs")]
    pub status_display_secs: f32,
    #[serde(default = "crate::config::defaults::default_animations")]
    pub animations: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_relay_endpoint")]
    pub relay_endpoint: String,
    #[serde(default)]
    pub relay_service_id: String,
    #[serde(default)]
    pub relay_template_id: String,
    #[serde(default)]
    pub relay_public_key: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_theme")]
    pub key_toggle_theme: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_menu")]
    pub key_toggle_menu: String,
    #[serde(default = "crate::config::defaults::default_key_scroll_top")]
    pub key_scroll_top: String,
    #[serde(default = "crate::config::defaults::default_key_quit")]
    pub key_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            active_line_px: crate::config::defaults::default_active_line_px(),
            nav_offset_px: crate::config::defaults::default_nav_offset_px(),
            navbar_solid_threshold_px:
                crate::config::defaults::default_navbar_solid_threshold_px(),
            scroll_top_threshold_px: crate::config::defaults::default_scroll_top_threshold_px(),
            spring_stiffness: crate::config::defaults::default_spring_stiffness(),
            spring_damping: crate::config::defaults::default_spring_damping(),
            spring_rest_delta: crate::config::defaults::default_spring_rest_delta(),
            scroll_duration_secs: crate::config::defaults::default_scroll_duration_secs(),
            reveal_duration_secs: crate::config::defaults::default_reveal_duration_secs(),
            reveal_slide_px: crate::config::defaults::default_reveal_slide_px(),
            status_display_secs: crate::config::defaults::default_status_display_secs(),
            animations: crate::config::defaults::default_animations(),
            log_level: crate::config::defaults::default_log_level(),
            relay_endpoint: crate::config::defaults::default_relay_endpoint(),
            relay_service_id: String::new(),
            relay_template_id: String::new(),
            relay_public_key: String::new(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_toggle_menu: crate::config::defaults::default_key_toggle_menu(),
            key_scroll_top: crate::config::defaults::default_key_scroll_top(),
            key_quit: crate::config::defaults::default_key_quit(),
        }
    }
}

impl AppConfig {
    pub fn relay_settings(&self) -> crate::relay::RelaySettings {
        crate::relay::RelaySettings {
            endpoint: self.relay_endpoint.clone(),
            service_id: self.relay_service_id.clone(),
            template_id: self.relay_template_id.clone(),
            public_key: self.relay_public_key.clone(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", label)
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
