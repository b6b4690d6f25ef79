//! Single-open dropdown selector.
//!
//! Every dropdown in the shell shares one [`DropdownGroup`], so opening
//! one closes the others. The trigger shows the current selection; items
//! come from a static catalog.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ui;
use crate::models::{CatalogEntry, DropdownGroup, DropdownId};

stylance::import_crate_style!(css, "src/components/dropdown.module.css");

/// Install the document-level dismiss handlers: a click outside any
/// dropdown closes the group, as does Escape anywhere. Called once from
/// the shell; the closures live for the page session.
pub fn install_dismiss_handlers(group: RwSignal<DropdownGroup>) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let Some(document) = crate::utils::dom::document() else {
            return;
        };

        let click = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            if !group.get_untracked().any_open() {
                return;
            }
            let inside = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(&format!(".{}", css::dropdown)).ok().flatten())
                .is_some();
            if !inside {
                group.update(|g| g.close_all());
            }
        }) as Box<dyn Fn(web_sys::Event)>);
        let _ = document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();

        let keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" {
                group.update(|g| g.close_all());
            }
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);
        let _ =
            document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        keydown.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = group;
}

/// Dropdown selector over a static catalog.
///
/// The trigger toggles the menu (click, Enter, or Space); selecting an
/// item updates `selected` through `on_select` and closes the menu.
#[component]
pub fn Dropdown(
    /// Position of this dropdown within the shared group.
    id: DropdownId,
    entries: &'static [CatalogEntry],
    selected: RwSignal<&'static CatalogEntry>,
    on_select: Callback<&'static CatalogEntry>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let group = ctx.dropdowns;

    let is_open = move || group.get().is_open(id);
    let toggle = move || group.update(|g| g.toggle(id));

    let handle_trigger_click = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        toggle();
    };

    let chevron_class = move || {
        if is_open() {
            format!("{} {}", css::chevron, css::chevronOpen)
        } else {
            css::chevron.to_string()
        }
    };

    let handle_trigger_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" | " " => {
            ev.prevent_default();
            toggle();
        }
        "Escape" => group.update(|g| g.close_all()),
        _ => {}
    };

    view! {
        <div class=css::dropdown>
            <button
                class=css::trigger
                tabindex="0"
                on:click=handle_trigger_click
                on:keydown=handle_trigger_keydown
            >
                <span class=css::label>{move || selected.get().label}</span>
                <span class=chevron_class>
                    <Icon icon=ic::CHEVRON_DOWN />
                </span>
            </button>

            <Show when=is_open>
                <div class=css::menu style:z-index=ui::Z_DROPDOWN.to_string()>
                    {entries
                        .iter()
                        .map(|entry| {
                            let handle_item_click = move |ev: ev::MouseEvent| {
                                ev.stop_propagation();
                                on_select.run(entry);
                                group.update(|g| g.close_all());
                            };
                            let item_class = move || {
                                if selected.get().id == entry.id {
                                    format!("{} {}", css::item, css::itemSelected)
                                } else {
                                    css::item.to_string()
                                }
                            };
                            view! {
                                <button
                                    class=item_class
                                    title=entry.description
                                    on:click=handle_item_click
                                >
                                    {entry.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
