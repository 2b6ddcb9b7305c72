//! Themes
//!
//! Three fixed visual variants. Every themed element derives its class
//! list from the active variant, so switching themes relabels the whole
//! widget at once.

use std::fmt;
use std::str::FromStr;

/// Persisted by name, see `Theme::as_str` and `FromStr`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Standard,
    Light,
    Darker,
}

/// Buttons that carry a themed class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Check,
    Delete,
    Add,
}

impl ButtonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Check => "check-btn",
            ButtonKind::Delete => "delete-btn",
            ButtonKind::Add => "todo-btn",
        }
    }
}

/// Marker class added to the title only under `Theme::Darker`
pub const DARKER_TITLE_CLASS: &str = "darker-title";

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Standard, Theme::Light, Theme::Darker];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Standard => "standard",
            Theme::Light => "light",
            Theme::Darker => "darker",
        }
    }

    /// Class of the `<body>` element
    pub fn body_class(&self) -> &'static str {
        self.as_str()
    }

    pub fn input_class(&self) -> String {
        format!("todo-input {}-input", self.as_str())
    }

    /// Class of a task row, keeping its state markers
    pub fn todo_class(&self, completed: bool, falling: bool) -> String {
        let mut class = format!("todo {}-todo", self.as_str());
        if completed {
            class.push_str(" completed");
        }
        if falling {
            class.push_str(" fall");
        }
        class
    }

    pub fn button_class(&self, kind: ButtonKind) -> String {
        format!("{} {}-button", kind.as_str(), self.as_str())
    }

    /// Class of the selector control that activates this theme
    pub fn selector_class(&self) -> String {
        format!("{}-theme", self.as_str())
    }

    pub fn marks_title(&self) -> bool {
        matches!(self, Theme::Darker)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Theme::Standard),
            "light" => Ok(Theme::Light),
            "darker" => Ok(Theme::Darker),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Apply the parts of a theme that live outside the component tree:
/// the `<body>` class and the title marker.
///
/// Missing body or title elements are skipped.
pub fn apply_to_document(theme: Theme, title_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(body) = document.body() {
        body.set_class_name(theme.body_class());
    }

    if let Some(title) = document.get_element_by_id(title_id) {
        let classes = title.class_list();
        let result = if theme.marks_title() {
            classes.add_1(DARKER_TITLE_CLASS)
        } else {
            classes.remove_1(DARKER_TITLE_CLASS)
        };
        if let Err(e) = result {
            log::warn!("[THEME] failed to update title marker: {:?}", e);
        }
    }
}
