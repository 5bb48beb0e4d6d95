//! Outside-click subscription for dropdowns and popovers.
//!
//! A window `mousedown` listener is installed only while the tracked surface is open and removed
//! as soon as it closes or the owning component unmounts. The listener is attached after the
//! opening click has already been dispatched, so the click that opens a dropdown never closes it.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use wasm_bindgen::JsCast;

/// Closes a surface when a pointer press lands outside `container`.
///
/// `open` drives the subscription lifecycle and `on_outside` runs once per outside press.
pub fn use_outside_click(
    container: NodeRef<html::Div>,
    open: Signal<bool>,
    on_outside: Callback<()>,
) {
    let listener = store_value(None::<WindowListenerHandle>);

    let unsubscribe = move || {
        listener.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.remove();
            }
        });
    };

    create_effect(move |_| {
        if open.get() {
            if listener.with_value(Option::is_some) {
                return;
            }
            let handle = window_event_listener(ev::mousedown, move |ev| {
                let Some(root) = container.get_untracked() else {
                    return;
                };
                let target = ev
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
                if !is_inside(&root, target.as_ref()) {
                    on_outside.call(());
                }
            });
            listener.set_value(Some(handle));
        } else {
            unsubscribe();
        }
    });

    on_cleanup(unsubscribe);
}

fn is_inside(root: &web_sys::Node, target: Option<&web_sys::Node>) -> bool {
    target.is_some_and(|target| root.contains(Some(target)))
}
