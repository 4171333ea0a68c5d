use dioxus::prelude::*;

/// A backdrop that centers its children in a modal card.
///
/// The dialog stays mounted and is shown by toggling the `open` class, so
/// form state survives closing it. Clicking outside the card triggers
/// `on_close`.
#[component]
pub fn ModalOverlay(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: if open { "modal open" } else { "modal" },
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
