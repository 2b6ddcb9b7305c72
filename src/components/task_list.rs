//! Task List Component

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// All rendered tasks in stored order
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="todo-container">
            <ul class="todo-list">
                <For
                    each=move || ctx.store.tasks().get()
                    key=|task| task.id
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </ul>
        </div>
    }
}
