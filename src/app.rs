//! To-Do Widget App
//!
//! Loads persisted state, provides the app context and lays out the
//! header, theme selector, input form and task list.

use leptos::prelude::*;
use web_kv::WebStorage;

use crate::components::{ClockDisplay, NewTaskForm, TaskList, ThemeSelector};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::repository::TodoRepository;
use crate::store::AppStateStoreFields;
use crate::tasks::TodoState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    let state = match TodoState::load(TodoRepository::new(WebStorage, &config)) {
        Ok(state) => state,
        Err(e) => {
            log::error!("[APP] failed to load saved tasks: {}", e);
            TodoState::empty(TodoRepository::new(WebStorage, &config))
        }
    };
    let ctx = AppContext::new(state, config);
    provide_context(ctx);

    // Body class and title marker follow the active theme
    Effect::new(move |_| {
        let theme = ctx.store.theme().get();
        log::debug!("[APP] applying theme {}", theme);
        ctx.apply_theme_to_document();
    });

    view! {
        <div id="header">
            <ThemeSelector />
            <h1 id=config.title_id>"Just do it."</h1>
        </div>
        <ClockDisplay />
        <div id="form">
            <NewTaskForm />
        </div>
        <TaskList />
    }
}
