//! Clock Display Component

use leptos::prelude::*;

use crate::clock;
use crate::context::use_app_context;

/// Display region for the clock; starts ticking once mounted
#[component]
pub fn ClockDisplay() -> impl IntoView {
    let ctx = use_app_context();
    let element_id = ctx.config.clock_element_id;
    let interval_ms = ctx.config.clock_interval_ms;

    Effect::new(move |_| clock::start(element_id, interval_ms));

    view! { <p id=element_id class="datetime"></p> }
}
