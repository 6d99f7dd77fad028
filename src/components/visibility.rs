//! Viewport-visibility hook shared by the reveal and text components. One
//! attachment point (a `NodeRef`), internally fanned out to an
//! `IntersectionObserver` that is disconnected when the caller unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::reveal::ViewLatch;

/// Returns whether the referenced element is in view by `threshold`.
///
/// With `fire_once` the result latches true after the first intersection.
/// An unattached ref is skipped silently; the effect runs after the first
/// render so a ref set during that render is picked up normally. Changing
/// `threshold` or `fire_once` tears the observer down and rebuilds it with
/// a fresh latch.
#[hook]
pub fn use_in_view(node_ref: NodeRef, threshold: f64, fire_once: bool) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |&(threshold, fire_once)| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node_ref.cast::<Element>() {
                    let latch = Rc::new(RefCell::new(ViewLatch::new(fire_once)));
                    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, _: IntersectionObserver| {
                            let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>()
                            else {
                                return;
                            };
                            let mut latch = latch.borrow_mut();
                            if latch.update(entry.is_intersecting()) {
                                visible.set(latch.visible());
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    if let Ok(obs) = IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        obs.observe(&element);
                        observer = Some(obs);
                        callback = Some(on_intersect);
                    }
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (threshold, fire_once),
        );
    }

    *visible
}
