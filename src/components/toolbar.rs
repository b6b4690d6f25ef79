//! Keep/Undo action toolbar.

use leptos::prelude::*;
use pocketchat_core::{ButtonSize, ButtonVariant};

use crate::app::AppContext;
use crate::components::button::Button;
use crate::config::messages;

stylance::import_crate_style!(css, "src/components/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let keep = Callback::new(move |_| ctx.announce(messages::CHANGES_SAVED));
    let undo = Callback::new(move |_| ctx.announce(messages::CHANGES_UNDONE));

    view! {
        <div class=css::toolbar>
            <Button
                label="Keep"
                variant=ButtonVariant::Success
                size=ButtonSize::Small
                on_press=keep
            />
            <Button
                label="Undo"
                variant=ButtonVariant::Secondary
                size=ButtonSize::Small
                on_press=undo
            />
        </div>
    }
}
