//! New Task Form Component

use leptos::prelude::*;

use crate::context::{self, use_app_context};
use crate::error::TodoError;
use crate::store::AppStateStoreFields;
use crate::theme::ButtonKind;

/// Input field and add button
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.add_task(&new_text.get()) {
            Ok(()) => set_new_text.set(String::new()),
            Err(TodoError::EmptyText) => {
                if window().alert_with_message(ctx.config.empty_text_message).is_err() {
                    log::warn!("[TASKS] could not show empty-text alert");
                }
            }
            Err(e) => context::report_error("add", &e),
        }
    };

    view! {
        <form on:submit=add_task>
            <input
                type="text"
                placeholder="Add a task."
                class=move || ctx.store.theme().get().input_class()
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class=move || ctx.store.theme().get().button_class(ButtonKind::Add)
            >
                "I Got This!"
            </button>
        </form>
    }
}
