//! Task Row Component

use leptos::prelude::*;

use crate::context::{self, use_app_context};
use crate::models::Task;
use crate::store::{self, AppStateStoreFields};
use crate::theme::ButtonKind;

/// One rendered task: text, check button, delete button
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let id = task.id;

    let row_class = move || {
        let completed = store::store_task_completed(&ctx.store, id);
        let falling = ctx.store.leaving().read().contains(&id);
        ctx.store.theme().get().todo_class(completed, falling)
    };
    let button_class = move |kind: ButtonKind| move || ctx.store.theme().get().button_class(kind);

    view! {
        <div class=row_class>
            <li class="todo-item">{task.text}</li>
            <button
                class=button_class(ButtonKind::Check)
                on:click=move |_| context::report("toggle", ctx.toggle_task(id))
            >
                <i class="fas fa-check"></i>
            </button>
            <button
                class=button_class(ButtonKind::Delete)
                on:click=move |_| context::report("delete", ctx.delete_task(id))
            >
                <i class="fas fa-trash"></i>
            </button>
        </div>
    }
}
