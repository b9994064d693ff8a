use gloo::timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

/// Quiet period after the last scroll event before the list counts as settled
pub const SCROLL_SETTLE_MS: u32 = 120;

/// `onscroll` handler that reports the container's `scrollTop` once per
/// gesture, after momentum and snapping have finished.
#[hook]
pub fn use_scroll_settle(node: NodeRef, on_settled: Callback<f64>) -> Callback<Event> {
    let pending = use_mut_ref(|| Option::<Timeout>::None);

    use_callback((node, on_settled), move |_: Event, (node, on_settled)| {
        let node = node.clone();
        let on_settled = on_settled.clone();

        // Replacing the handle drops (and cancels) the previous timer
        *pending.borrow_mut() = Some(Timeout::new(SCROLL_SETTLE_MS, move || {
            if let Some(element) = node.cast::<Element>() {
                on_settled.emit(f64::from(element.scroll_top()));
            }
        }));
    })
}
