use js_sys::{Function, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;
use yew::prelude::*;

use super::dom::{local_storage, media_matches};
use crate::logging::{log_event, LogLevel};
use crate::theme::{Theme, ThemeStore, ThemeSwitch, THEME_KEY};

/// `localStorage` under the `theme` key.
pub struct BrowserThemeStore;

impl ThemeStore for BrowserThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, value);
        }
    }
}

fn system_prefers_light() -> bool {
    media_matches("(prefers-color-scheme: light)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(body) = document.body() {
        body.set_class_name(theme.as_str());
    }
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Current theme for components under [`ThemeProvider`]; dark when there is
/// no provider.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::Dark,
        toggle: Callback::noop(),
    })
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let switch = use_mut_ref(|| ThemeSwitch::new(BrowserThemeStore, system_prefers_light()));
    let theme = {
        let switch = switch.clone();
        use_state(move || switch.borrow().theme())
    };

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            log_event(
                LogLevel::Debug,
                "theme_initialized",
                json!({ "theme": current.as_str() }),
            );
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = switch.borrow_mut().toggle();
            apply_theme_with_transition(next);
            log_event(
                LogLevel::Debug,
                "theme_toggled",
                json!({ "theme": next.as_str() }),
            );
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}
