//! Device-compatibility blocking overlay.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{messages, ui};

stylance::import_crate_style!(css, "src/components/overlay.module.css");

/// Full-screen blocker shown while the gate verdict is incompatible.
///
/// Mounted under a `<Show>` keyed on the gate state, so it exists exactly
/// once while blocked and unmounts when the device qualifies again. There
/// is no dismissal affordance: the only way out is a qualifying viewport.
#[component]
pub fn Overlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let resolution = move || format!("Your resolution: {}", ctx.viewport.get().display());

    view! {
        <div class=css::overlay style:z-index=ui::Z_OVERLAY.to_string()>
            <div class=css::panel>
                <div class=css::icon>
                    <Icon icon=ic::PHONE />
                </div>
                <h2 class=css::title>"Mobile devices only"</h2>
                <p class=css::message>{messages::DEVICE_NOT_SUPPORTED}</p>
                <p class=css::hint>
                    "Please open it on your mobile device for the best experience."
                </p>
                <div class=css::resolution>{resolution}</div>
            </div>
        </div>
    }
}
