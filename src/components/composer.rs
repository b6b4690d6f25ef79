//! Message composer: text input plus send button.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::button::Button;

stylance::import_crate_style!(css, "src/components/composer.module.css");

/// Composer row at the bottom of the shell.
///
/// Enter submits, as does the send button; whitespace-only input is
/// ignored and the field clears after a successful send.
#[component]
pub fn Composer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let submit = move || {
        if ctx.send_message(&input_value.get()) {
            set_input_value.set(String::new());
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    let send_disabled = Signal::derive(move || input_value.with(|v| v.trim().is_empty()));

    view! {
        <div class=css::composer>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                placeholder="Type a message"
                autocomplete="off"
                spellcheck="false"
                prop:value=input_value
                on:input=handle_input
                on:keydown=handle_keydown
            />
            <Button
                label="Send"
                disabled=send_disabled
                on_press=Callback::new(move |_| submit())
            />
        </div>
    }
}
