//! Browser animation runtime for the landing page.
//!
//! The SSR crate annotates animated elements with a JSON descriptor in
//! their `data-animate` attribute; this module is the engine that plays
//! them. On start it scans the document, parses each descriptor (reusing
//! the canonical `topnotch-landing::motion` types), applies the initial
//! inline styles, and then drives entrances via CSS transitions: mount
//! triggers fire on the next frames, in-view triggers go through a shared
//! `IntersectionObserver` per threshold, and hover descriptors get
//! `mouseenter`/`mouseleave` listeners toggling between the hover target
//! and the entrance target.
//!
//! Malformed descriptors are skipped with a console warning; the page
//! renders fine without any of this running.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// Re-export canonical descriptor types from the SSR crate
pub use topnotch_landing::motion::{Hover, MotionPreset, MotionSpec, MotionState, Trigger};

thread_local! {
    // One observer per distinct visibility threshold, shared by every
    // element using that threshold.
    static OBSERVERS: RefCell<HashMap<u32, IntersectionObserver>> = RefCell::new(HashMap::new());
}

/// Initialize panic hook and mount the runtime on the current document.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mount_motion()
}

/// Scan `[data-animate]` elements and wire up their animations.
///
/// Runs automatically on module start; exported for manual
/// re-initialization after DOM changes. Elements it cannot process are
/// skipped, never failed on.
#[wasm_bindgen]
pub fn mount_motion() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let nodes = document.query_selector_all("[data-animate]")?;
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let Some(spec) = parse_descriptor(&el) else {
            continue;
        };

        apply_state(&el, &spec.preset.initial);

        match spec.trigger {
            Trigger::Mount => schedule_entrance(&el, spec.preset)?,
            Trigger::InView { amount, .. } => {
                observer_for(amount)?.observe(&el);
            }
        }

        if let Some(hover) = spec.hover {
            attach_hover(&el, spec.preset.target, hover)?;
        }
    }

    Ok(())
}

/// Parse an element's descriptor, warning and returning `None` on bad
/// JSON.
fn parse_descriptor(el: &HtmlElement) -> Option<MotionSpec> {
    let raw = el.get_attribute("data-animate")?;
    match serde_json::from_str(&raw) {
        Ok(spec) => Some(spec),
        Err(err) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "motion: skipping malformed descriptor: {err}"
            )));
            None
        }
    }
}

/// Write a state's opacity/transform as inline styles. Unset axes are
/// left untouched.
fn apply_state(el: &HtmlElement, state: &MotionState) {
    let style = el.style();
    if let Some(opacity) = state.opacity {
        let _ = style.set_property("opacity", &opacity.to_string());
    }
    if let Some(transform) = state.transform() {
        let _ = style.set_property("transform", &transform);
    }
}

/// Start a preset's transition toward its target state.
fn fire_entrance(el: &HtmlElement, preset: &MotionPreset) {
    let _ = el.style().set_property("transition", &preset.transition.css());
    apply_state(el, &preset.target);
}

/// Mount trigger: two frames, the first commits the initial styles, the
/// second starts the transition.
fn schedule_entrance(el: &HtmlElement, preset: MotionPreset) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let el = el.clone();

    let inner = Closure::once_into_js(move || {
        fire_entrance(&el, &preset);
    });
    let win = window.clone();
    let outer = Closure::once_into_js(move || {
        let _ = win.request_animation_frame(inner.unchecked_ref());
    });
    window.request_animation_frame(outer.unchecked_ref())?;
    Ok(())
}

/// The shared observer for a visibility threshold, created on first use.
///
/// The callback re-reads each entry's descriptor, fires the entrance once
/// the element is sufficiently visible, and unobserves `once` elements so
/// they never re-trigger.
fn observer_for(amount: f32) -> Result<IntersectionObserver, JsValue> {
    OBSERVERS.with(|cell| {
        let mut observers = cell.borrow_mut();
        if let Some(observer) = observers.get(&amount.to_bits()) {
            return Ok(observer.clone());
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let Ok(el) = entry.target().dyn_into::<HtmlElement>() else {
                        continue;
                    };
                    let Some(spec) = parse_descriptor(&el) else {
                        continue;
                    };
                    fire_entrance(&el, &spec.preset);
                    if matches!(spec.trigger, Trigger::InView { once: true, .. }) {
                        observer.unobserve(&el);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(amount as f64));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        observers.insert(amount.to_bits(), observer.clone());
        Ok(observer)
    })
}

/// Reversible hover sub-cycle: entering transitions to the hover target,
/// leaving transitions back to the entrance target. A new target simply
/// overrides an in-flight transition (native CSS semantics).
fn attach_hover(el: &HtmlElement, rest: MotionState, hover: Hover) -> Result<(), JsValue> {
    let enter_el = el.clone();
    let enter = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let _ = enter_el
            .style()
            .set_property("transition", &hover.transition.css());
        apply_state(&enter_el, &hover.target);
    }) as Box<dyn FnMut(web_sys::Event)>);
    el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
    enter.forget();

    let leave_el = el.clone();
    let leave = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let _ = leave_el
            .style()
            .set_property("transition", &hover.transition.css());
        apply_state(&leave_el, &rest);
    }) as Box<dyn FnMut(web_sys::Event)>);
    el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
    leave.forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use topnotch_landing::motion::{CARD_HOVER, CARD_RISE, HERO_RISE, SECTION_REVEAL, STAGGER_STEP};

    #[test]
    fn parses_every_composer_descriptor_shape() {
        let specs = [
            MotionSpec::mount(HERO_RISE),
            MotionSpec::in_view(SECTION_REVEAL, 0.3),
            MotionSpec::in_view(CARD_RISE, 0.2)
                .staggered(2, STAGGER_STEP)
                .with_hover(CARD_HOVER),
        ];
        for spec in specs {
            let parsed: MotionSpec = serde_json::from_str(&spec.attr()).unwrap();
            assert_eq!(parsed, spec);
        }
    }

    #[test]
    fn malformed_descriptor_is_an_error_not_a_panic() {
        assert!(serde_json::from_str::<MotionSpec>("{not json").is_err());
        assert!(serde_json::from_str::<MotionSpec>("{}").is_err());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use topnotch_landing::motion::{MotionSpec, SECTION_REVEAL};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mounts_and_applies_initial_state() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let el = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        el.set_attribute(
            "data-animate",
            &MotionSpec::in_view(SECTION_REVEAL, 0.3).attr(),
        )
        .unwrap();
        body.append_child(&el).unwrap();

        mount_motion().unwrap();

        // SECTION_REVEAL starts hidden
        assert_eq!(el.style().get_property_value("opacity").unwrap(), "0");

        body.remove_child(&el).unwrap();
    }
}
