//! Theme Selector Component

use leptos::prelude::*;

use crate::context::{self, use_app_context};
use crate::theme::Theme;

/// One clickable swatch per theme
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="flexrow-container">
            {Theme::ALL.iter().map(|theme| {
                let theme = *theme;
                view! {
                    <div
                        class=format!("{} theme-selector", theme.selector_class())
                        title=theme.as_str()
                        on:click=move |_| context::report("change theme", ctx.change_theme(theme))
                    ></div>
                }
            }).collect_view()}
        </div>
    }
}
