//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use pocketchat_core::{AppConfig, GateState, Viewport};

use crate::components::{Overlay, Shell};
use crate::config::{self, messages, storage_keys};
use crate::core::GateController;
use crate::models::{CatalogEntry, ChatEntry, DropdownGroup, catalog};
use crate::utils::{dom, log};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`. Configuration is injected
/// here once at startup; nothing reads it from ambient state.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Immutable application settings, loaded once at startup.
    pub config: StoredValue<AppConfig>,
    /// Compatibility gate state; drives overlay and shell mounting.
    pub gate: RwSignal<GateState>,
    /// Viewport dimensions as of the most recent gate evaluation.
    pub viewport: RwSignal<Viewport>,
    /// Single-open state shared by every dropdown in the shell.
    pub dropdowns: RwSignal<DropdownGroup>,
    /// Currently selected AI agent.
    pub selected_agent: RwSignal<&'static CatalogEntry>,
    /// Currently selected model.
    pub selected_model: RwSignal<&'static CatalogEntry>,
    /// Messages sent this session.
    pub messages: RwSignal<Vec<ChatEntry>>,
    /// Transient status line text; empty when there is nothing to show.
    pub status: RwSignal<String>,
}

impl AppContext {
    /// Creates the context, rehydrating dropdown selections from
    /// localStorage where present.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            gate: RwSignal::new(GateState::Unknown),
            viewport: RwSignal::new(Viewport::default()),
            dropdowns: RwSignal::new(DropdownGroup::new()),
            selected_agent: RwSignal::new(restore_selection(
                config::AI_AGENTS,
                storage_keys::SELECTED_AGENT,
            )),
            selected_model: RwSignal::new(restore_selection(
                config::AI_MODELS,
                storage_keys::SELECTED_MODEL,
            )),
            messages: RwSignal::new(Vec::new()),
            status: RwSignal::new(String::new()),
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.config.with_value(|c| c.debug_mode)
    }

    /// Select an agent and persist the choice.
    pub fn select_agent(&self, entry: &'static CatalogEntry) {
        self.selected_agent.set(entry);
        dom::storage_set(storage_keys::SELECTED_AGENT, entry.id);
        log::debug(self.debug_enabled(), &format!("agent changed: {}", entry.id));
    }

    /// Select a model and persist the choice.
    pub fn select_model(&self, entry: &'static CatalogEntry) {
        self.selected_model.set(entry);
        dom::storage_set(storage_keys::SELECTED_MODEL, entry.id);
        log::debug(self.debug_enabled(), &format!("model changed: {}", entry.id));
    }

    /// Show a message on the shell status line.
    pub fn announce(&self, message: &str) {
        self.status.set(message.to_string());
    }

    /// Send a composer message, attributed to the selected agent.
    ///
    /// Whitespace-only input is ignored. Returns whether anything was sent,
    /// so the composer knows to clear its input.
    pub fn send_message(&self, input: &str) -> bool {
        let agent = self.selected_agent.get().label;
        let Some(entry) = ChatEntry::from_input(agent, input) else {
            return false;
        };
        self.messages.update(|m| m.push(entry));
        self.announce(messages::MESSAGE_SENT);
        true
    }
}

/// Restore a persisted catalog selection, falling back to the first entry.
fn restore_selection(entries: &'static [CatalogEntry], key: &str) -> &'static CatalogEntry {
    dom::storage_get(key)
        .and_then(|id| catalog::find(entries, &id))
        .unwrap_or_else(|| entries.first().expect("catalog must not be empty"))
}

// ============================================================================
// App Component
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Receives the loaded configuration from `main` and provides the
///   global AppContext built from it
/// - Installs the compatibility gate (once) and lets its verdict decide
///   what mounts: the Shell while compatible, the blocking Overlay while
///   not. Nothing renders before the first evaluation.
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Gate wiring runs once
    let gate_installed = StoredValue::new(false);
    Effect::new(move || {
        if !gate_installed.get_value() {
            gate_installed.set_value(true);
            GateController::install(ctx);
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e27;
                    color: #e0e0e0;
                    font-family: sans-serif;
                    text-align: center;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #a0a0a0; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="
                        list-style: none;
                        padding: 0;
                        color: #ff6b6b;
                        font-size: 0.9rem;
                    ">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Show when=move || ctx.gate.get().is_compatible()>
                <Shell />
            </Show>
            <Show when=move || ctx.gate.get().is_blocked()>
                <Overlay />
            </Show>
        </ErrorBoundary>
    }
}
