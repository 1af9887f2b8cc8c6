use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::dom::{viewport, Listener};
use crate::logging::{log_event, LogLevel};
use crate::motion::{anchor_target, reveal_state, AnchorTarget, RevealMode};

const ACTIVE_CLASS: &str = "active";

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn reveal_pass(groups: &[(RevealMode, Vec<Element>)]) {
    let viewport_height = viewport().height;

    for (mode, elements) in groups {
        for element in elements {
            let classes = element.class_list();
            let active = classes.contains(ACTIVE_CLASS);
            let top = element.get_bounding_client_rect().top();
            let next = reveal_state(*mode, top, viewport_height, active);
            if next != active {
                let _ = classes.toggle_with_force(ACTIVE_CLASS, next);
            }
        }
    }
}

/// Toggles `active` on `.reveal` and `.reveal-once` elements as they
/// enter the viewport. The returned listener keeps it running.
pub fn start_scroll_reveal() -> Option<Listener> {
    let window = window()?;
    let document = window.document()?;

    let groups: Vec<(RevealMode, Vec<Element>)> = [RevealMode::Toggle, RevealMode::Once]
        .into_iter()
        .map(|mode| (mode, select_all(&document, &format!(".{}", mode.marker_class()))))
        .collect();

    log_event(
        LogLevel::Debug,
        "scroll_reveal_started",
        json!({
            "toggle": groups[0].1.len(),
            "once": groups[1].1.len(),
        }),
    );

    reveal_pass(&groups);
    let target: EventTarget = window.into();
    Listener::new(&target, "scroll", move |_| reveal_pass(&groups))
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn resolve_offset(document: &Document, target: AnchorTarget<'_>) -> Option<f64> {
    match target {
        AnchorTarget::Top => Some(0.0),
        AnchorTarget::Element(selector) => document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(|element| f64::from(element.offset_top())),
    }
}

/// Replaces the jump of every `href="#..."` link with a smooth scroll.
pub fn bind_smooth_anchors() -> Vec<Listener> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    select_all(&document, "a[href^=\"#\"]")
        .into_iter()
        .filter_map(|anchor| {
            let target: EventTarget = anchor.clone().into();
            let document = document.clone();
            Listener::new(&target, "click", move |event| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                let Some(target) = anchor_target(&href) else {
                    return;
                };

                event.prevent_default();
                if let Some(top) = resolve_offset(&document, target) {
                    smooth_scroll_to(top);
                }
            })
        })
        .collect()
}
