//! Main shell component.
//!
//! Lays out the chat surface: header with the keep/undo toolbar, the
//! agent/model selectors, the message log, the status line, and the
//! composer. The shell only mounts once the compatibility gate has
//! reported a compatible environment.

use leptos::prelude::CollectView;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::composer::Composer;
use crate::components::dropdown::{self, Dropdown};
use crate::components::icons as ic;
use crate::components::toolbar::Toolbar;
use crate::config;
use crate::models::{CatalogEntry, DropdownId};

stylance::import_crate_style!(css, "src/components/shell.module.css");

const AGENT_DROPDOWN: DropdownId = 0;
const MODEL_DROPDOWN: DropdownId = 1;

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Document-level dismiss handlers installed once
    let handlers_installed = StoredValue::new(false);
    Effect::new(move || {
        if !handlers_installed.get_value() {
            handlers_installed.set_value(true);
            dropdown::install_dismiss_handlers(ctx.dropdowns);
        }
    });

    let select_agent = Callback::new(move |entry: &'static CatalogEntry| ctx.select_agent(entry));
    let select_model = Callback::new(move |entry: &'static CatalogEntry| ctx.select_model(entry));

    let has_status = move || ctx.status.with(|s| !s.is_empty());

    view! {
        <div class=css::screen>
            <header class=css::header>
                <span class=css::brand>
                    <span class=css::logo>
                        <Icon icon=ic::LOGO />
                    </span>
                    <span class=css::appName>{config::APP_NAME}</span>
                </span>
                <Toolbar />
            </header>

            <div class=css::selectors>
                <Dropdown
                    id=AGENT_DROPDOWN
                    entries=config::AI_AGENTS
                    selected=ctx.selected_agent
                    on_select=select_agent
                />
                <Dropdown
                    id=MODEL_DROPDOWN
                    entries=config::AI_MODELS
                    selected=ctx.selected_model
                    on_select=select_model
                />
            </div>

            <main class=css::log>
                <Show when=move || ctx.messages.with(|m| m.is_empty())>
                    <p class=css::empty>"No messages yet."</p>
                </Show>
                {move || {
                    ctx.messages
                        .get()
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class=css::entry>
                                    <span class=css::agent>{entry.agent}</span>
                                    <span class=css::text>{entry.text}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </main>

            <Show when=has_status>
                <div class=css::statusLine>
                    <span class=css::statusIcon>
                        <Icon icon=ic::CHECK />
                    </span>
                    {move || ctx.status.get()}
                </div>
            </Show>

            <Composer />
        </div>
    }
}
