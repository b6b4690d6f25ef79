//! Compatibility gate lifecycle controller.
//!
//! Evaluates the device-compatibility predicate against a fresh
//! environment snapshot and keeps re-evaluating as the viewport changes.
//! The verdict lives in `AppContext::gate`; the overlay and the shell
//! both render from that signal, so repeated evaluations with unchanged
//! inputs cannot stack duplicate overlays.

use leptos::prelude::{Set, Update, WithValue};
use pocketchat_core::is_compatible;

use crate::app::AppContext;
use crate::utils::{dom, log};

/// Wires the predicate to the page lifecycle: one evaluation up front,
/// then one per `resize` and per (debounced) `orientationchange`.
pub struct GateController;

impl GateController {
    /// Evaluate once and subscribe to viewport changes.
    ///
    /// When mobile-only enforcement is disabled in configuration, the gate
    /// reports compatible and no listeners are installed at all.
    pub fn install(ctx: AppContext) {
        if !ctx.config.with_value(|c| c.mobile_only_mode) {
            log::debug(ctx.debug_enabled(), "mobile-only enforcement disabled");
            ctx.viewport.set(dom::viewport_snapshot());
            ctx.gate.update(|state| *state = state.advance(true));
            return;
        }

        Self::evaluate(ctx);

        // Listeners live for the page session; the closures are
        // intentionally leaked (teardown never happens).
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::prelude::Closure;

            let Some(window) = dom::window() else { return };

            let resize = Closure::wrap(Box::new(move || Self::evaluate(ctx)) as Box<dyn Fn()>);
            let _ = window
                .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
            resize.forget();

            // Dimensions reported during an orientation change are stale
            // until the platform settles; re-read after a short delay.
            let orientation = Closure::wrap(Box::new(move || {
                gloo_timers::callback::Timeout::new(crate::config::ORIENTATION_SETTLE_MS, move || {
                    Self::evaluate(ctx)
                })
                .forget();
            }) as Box<dyn Fn()>);
            let _ = window.add_event_listener_with_callback(
                "orientationchange",
                orientation.as_ref().unchecked_ref(),
            );
            orientation.forget();
        }
    }

    /// One gate evaluation: fresh snapshot in, state machine advanced.
    fn evaluate(ctx: AppContext) {
        let viewport = dom::viewport_snapshot();
        let user_agent = dom::user_agent();
        let verdict = ctx
            .config
            .with_value(|config| is_compatible(config, &user_agent, viewport));

        ctx.viewport.set(viewport);
        ctx.gate.update(|state| *state = state.advance(verdict));
        log::debug(
            ctx.debug_enabled(),
            &format!("compatibility verdict: {verdict} at {}", viewport.display()),
        );
    }
}
