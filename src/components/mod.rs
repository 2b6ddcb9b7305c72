//! UI Components
//!
//! Leptos components of the widget.

mod new_task_form;
mod task_row;
mod task_list;
mod theme_selector;
mod clock_display;

pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
pub use task_list::TaskList;
pub use theme_selector::ThemeSelector;
pub use clock_display::ClockDisplay;
