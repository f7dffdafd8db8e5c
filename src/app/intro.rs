//! Intro sequence shown while the page pretends to load assets.

use dioxus::prelude::*;

/// How long the intro overlay stays up after mount.
pub const INTRO_DELAY_MS: u32 = 1500;

/// One-shot gate that flips to `true` once, [`INTRO_DELAY_MS`] after mount.
///
/// The timer task is scoped to the calling component, so tearing the
/// component down before expiry drops the timer and the flag never fires.
pub fn use_intro_gate() -> Signal<bool> {
    let loaded = use_signal(|| false);

    use_future(move || async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(INTRO_DELAY_MS).await;
        let mut loaded = loaded;
        loaded.set(true);
    });

    loaded
}

/// Full-screen brand overlay rendered until the gate opens.
#[component]
pub fn IntroSequence() -> Element {
    rsx! {
        div { class: "intro-overlay",
            div { class: "intro-inner",
                div { class: "intro-rule" }
                div { class: "intro-brand", "Eco/Tribe" }
                div { class: "intro-sub", "System Loading" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::Cell;

    // Off the browser the gate has no timer, so the one-shot task resolves
    // on the first pass through the scheduler and the latch semantics can
    // be driven synchronously.

    thread_local! {
        static GATE: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
    }

    fn shell() -> Element {
        let loaded = use_intro_gate();
        GATE.with(|slot| slot.set(Some(loaded)));
        rsx! { div {} }
    }

    #[test]
    fn delay_matches_the_simulated_asset_load() {
        assert_eq!(INTRO_DELAY_MS, 1500);
    }

    #[test]
    fn gate_starts_closed_then_opens_and_never_reverts() {
        let mut dom = VirtualDom::new(shell);
        dom.rebuild_in_place();

        let gate = GATE.with(|slot| slot.get()).expect("shell should have rendered");
        assert!(
            !dom.in_runtime(|| *gate.peek()),
            "gate must be closed immediately after mount"
        );

        // Let the one-shot task fire and apply the resulting re-render
        tokio_test::block_on(dom.wait_for_work());
        dom.render_immediate(&mut NoOpMutations);
        assert!(
            dom.in_runtime(|| *gate.peek()),
            "gate must be open once the task has fired"
        );

        // Re-rendering the consumer must not close the gate again
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        assert!(
            dom.in_runtime(|| *gate.peek()),
            "gate must stay open for the life of the page"
        );
    }
}
