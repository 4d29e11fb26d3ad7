//! Scroll-triggered reveal: content fades in the first time it enters the
//! viewport and stays visible afterwards.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible before it counts as seen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let seen = entries
                                .iter()
                                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                .any(|entry| entry.is_intersecting());
                            if seen {
                                in_view.set(true);
                                observer.disconnect();
                            }
                        },
                    );

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(threshold));
                    let observer =
                        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                            .map_err(|e| log::warn!("IntersectionObserver unavailable: {:?}", e))
                            .ok()?;
                    observer.observe(&element);
                    Some((observer, callback))
                });

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.threshold);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}
