use wasm_bindgen::JsCast;
use web_sys::{window, Element, EventTarget, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::dom::Listener;
use super::theme::use_theme;
use crate::cursor::{is_interactive, position_style};

fn follow(nodes: &[NodeRef; 2], event: &MouseEvent) {
    let (left, top) = position_style(event.client_x(), event.client_y());
    for node in nodes {
        if let Some(element) = node.cast::<HtmlElement>() {
            let style = element.style();
            let _ = style.set_property("left", &left);
            let _ = style.set_property("top", &top);
        }
    }
}

fn hovers_interactive(target: Option<EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|element| {
            let classes = element.class_name();
            is_interactive(&element.tag_name(), classes.split_whitespace())
        })
}

/// Ring and dot that trail the pointer; the ring grows over links,
/// buttons, toggles, pills and tags.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let ring = use_node_ref();
    let dot = use_node_ref();
    let theme = use_theme().theme.as_str();
    let pointer = use_state_eq(|| false);

    {
        let nodes = [ring.clone(), dot.clone()];
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let listeners: Vec<Listener> = window()
                .and_then(|w| w.document())
                .map(|document| {
                    let target: EventTarget = document.into();
                    let over = pointer.clone();
                    [
                        Listener::new(&target, "mousemove", move |event| {
                            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                follow(&nodes, event);
                            }
                        }),
                        Listener::new(&target, "mouseover", move |event| {
                            if hovers_interactive(event.target()) {
                                over.set(true);
                            }
                        }),
                        Listener::new(&target, "mouseout", move |_| pointer.set(false)),
                    ]
                    .into_iter()
                    .flatten()
                    .collect()
                })
                .unwrap_or_default();
            move || drop(listeners)
        });
    }

    html! {
        <>
            <div ref={ring} class={classes!("cursor", theme, pointer.then_some("pointer"))} aria-hidden="true" />
            <div ref={dot} class={classes!("cursor-dot", theme)} aria-hidden="true" />
        </>
    }
}
