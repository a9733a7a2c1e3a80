use leptos::{html, prelude::*};

use crate::background::{BackgroundConfig, Phase};

const TARGET_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: -10; pointer-events: none;";
const FALLBACK_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: -20; background: linear-gradient(135deg, #0a0a0f 0%, #1a1a2e 50%, #16213e 100%);";

/// Full-viewport background that sits behind all page content.
///
/// Renders the static gradient immediately and upgrades to the animated dot
/// field in the browser once it has loaded. A `BackgroundConfig` in context
/// overrides the defaults.
#[component]
pub fn EffectBackground() -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let phase = RwSignal::new(Phase::Idle);
    let config = use_context::<BackgroundConfig>().unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        use crate::background::{DotsLoader, EffectLifecycle, TimeoutScheduler};

        let lifecycle =
            EffectLifecycle::new(DotsLoader::from_config(&config), TimeoutScheduler, config);
        lifecycle.on_phase_change(move |p| {
            // the signal may already be disposed when unmount reports Destroyed
            let _ = phase.try_set(p);
        });
        let lifecycle = StoredValue::new_local(lifecycle);

        Effect::new(move |_| {
            if let Some(el) = target.get() {
                let el: web_sys::HtmlElement = el.into();
                lifecycle.with_value(|l| l.mount(el));
            }
        });

        let resize = window_event_listener(leptos::ev::resize, move |_| {
            lifecycle.try_with_value(|l| l.handle_resize());
        });

        on_cleanup(move || {
            resize.remove();
            lifecycle.try_with_value(|l| l.unmount());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <div id="effect-bg" node_ref=target style=TARGET_STYLE aria-hidden="true"></div>
        <Show when=move || phase.get().shows_fallback()>
            <div class="fallback-bg" style=FALLBACK_STYLE aria-hidden="true"></div>
        </Show>
    }
}
