pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_active_line_px() -> f32 {
    100.0
}

pub(crate) fn default_nav_offset_px() -> f32 {
    80.0
}

pub(crate) fn default_navbar_solid_threshold_px() -> f32 {
    50.0
}

pub(crate) fn default_scroll_top_threshold_px() -> f32 {
    100.0
}

pub(crate) fn default_spring_stiffness() -> f32 {
    100.0
}

pub(crate) fn default_spring_damping() -> f32 {
    30.0
}

pub(crate) fn default_spring_rest_delta() -> f32 {
    0.001
}

pub(crate) fn default_scroll_duration_secs() -> f32 {
    0.6
}

pub(crate) fn default_reveal_duration_secs() -> f32 {
    0.6
}

pub(crate) fn default_reveal_slide_px() -> f32 {
    50.0
}

pub(crate) fn default_status_display_secs() -> f32 {
    5.0
}

pub(crate) fn default_animations() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_relay_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_toggle_menu() -> String {
    "m".to_string()
}

pub(crate) fn default_key_scroll_top() -> String {
    "g".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}
