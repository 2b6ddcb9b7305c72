//! Application configuration
//!
//! Fixed at build time and provided to components through `AppContext`.

/// Storage keys, element ids and timings used by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// localStorage key holding the task collection
    pub todos_key: &'static str,
    /// localStorage key holding the theme name
    pub theme_key: &'static str,
    /// Id of the title element that carries the darker marker
    pub title_id: &'static str,
    /// Id of the clock display region
    pub clock_element_id: &'static str,
    pub clock_interval_ms: u32,
    /// Length of the `fall` exit animation in the stylesheet
    pub fall_animation_ms: u32,
    /// Shown when the user tries to add an empty task
    pub empty_text_message: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            todos_key: "todos",
            theme_key: "savedTheme",
            title_id: "title",
            clock_element_id: "datetime",
            clock_interval_ms: 1000,
            fall_animation_ms: 500,
            empty_text_message: "You must write something!",
        }
    }
}
