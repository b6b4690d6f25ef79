//! Reusable button component.
//!
//! Variant and size are closed enums from the core crate, so every button
//! maps to a known class pair; there is no silent fall-through for unknown
//! tokens. Disabled buttons are removed from the tab order and ignore both
//! pointer and keyboard activation.

use leptos::{ev, prelude::*};
use pocketchat_core::{ButtonSize, ButtonVariant};

use crate::config::ui;

stylance::import_crate_style!(css, "src/components/button.module.css");

fn variant_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => css::primary,
        ButtonVariant::Secondary => css::secondary,
        ButtonVariant::Success => css::success,
        ButtonVariant::Error => css::error,
    }
}

fn size_class(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Small => css::small,
        ButtonSize::Medium => css::medium,
        ButtonSize::Large => css::large,
    }
}

/// Keyboard focus participation for the disabled state.
fn tabindex_for(disabled: bool) -> &'static str {
    if disabled { "-1" } else { "0" }
}

/// Keys that activate a focused button.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Minimum height in CSS pixels, keeping every size touch-friendly.
fn touch_floor(size: ButtonSize) -> u32 {
    match size {
        ButtonSize::Small => ui::MIN_TOUCH_TARGET,
        ButtonSize::Medium | ButtonSize::Large => ui::BUTTON_HEIGHT,
    }
}

#[component]
pub fn Button(
    /// Text shown on the button.
    label: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] disabled: Signal<bool>,
    on_press: Callback<()>,
) -> impl IntoView {
    let class = format!(
        "{} {} {}",
        css::btn,
        variant_class(variant),
        size_class(size)
    );

    let handle_click = move |_: ev::MouseEvent| {
        if !disabled.get() {
            on_press.run(());
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            if !disabled.get() {
                on_press.run(());
            }
        }
    };

    view! {
        <button
            class=class
            role="button"
            style:min-height=format!("{}px", touch_floor(size))
            tabindex=move || tabindex_for(disabled.get())
            prop:disabled=move || disabled.get()
            on:click=handle_click
            on:keydown=handle_keydown
        >
            {label}
        </button>
    }
}


// Browser-level checks of the rendered element; run with
// `cargo test --target wasm32-unknown-unknown`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Mount a button into a fresh host element and return the rendered
    /// `<button>`. Presses are counted through `pressed`.
    fn mount_button(disabled: bool, pressed: RwSignal<u32>) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        let on_press = Callback::new(move |_| pressed.update(|n| *n += 1));
        mount_to(host.clone().unchecked_into(), move || {
            view! { <Button label="Send" disabled=disabled on_press=on_press /> }
        })
        .forget();

        host.query_selector("button").unwrap().unwrap()
    }

    fn keydown(key: &str) -> web_sys::KeyboardEvent {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_disabled_button_suppresses_activation() {
        let pressed = RwSignal::new(0u32);
        let button = mount_button(true, pressed);

        assert_eq!(button.get_attribute("tabindex").as_deref(), Some("-1"));

        button.dispatch_event(&keydown("Enter")).unwrap();
        button.dispatch_event(&keydown(" ")).unwrap();
        button.unchecked_ref::<web_sys::HtmlElement>().click();

        assert_eq!(pressed.get_untracked(), 0);
    }

    #[wasm_bindgen_test]
    fn test_enabled_button_activates_on_keyboard() {
        let pressed = RwSignal::new(0u32);
        let button = mount_button(false, pressed);

        assert_eq!(button.get_attribute("tabindex").as_deref(), Some("0"));

        button.dispatch_event(&keydown("Enter")).unwrap();
        button.dispatch_event(&keydown(" ")).unwrap();

        assert_eq!(pressed.get_untracked(), 2);
    }
}
