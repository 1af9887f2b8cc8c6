use std::rc::Rc;

use web_sys::{window, EventTarget};
use yew::prelude::*;

use super::dom::{scroll_y, Listener};
use super::theme::use_theme;
use crate::motion::is_scrolled;
use crate::profile::Profile;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub profile: Rc<Profile>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let theme = use_theme();
    let scrolled = use_state_eq(|| is_scrolled(scroll_y()));
    let menu_open = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|w| {
                let target: EventTarget = w.into();
                Listener::new(&target, "scroll", move |_| scrolled.set(is_scrolled(scroll_y())))
            });
            move || drop(listener)
        });
    }

    let on_theme_toggle = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let profile = &props.profile;
    let menu_label = if *menu_open { "Fermer le menu" } else { "Ouvrir le menu" };

    html! {
        <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <a href="#" class="nav-logo">{ profile.brand.clone() }</a>
            <div class="nav-right">
                <ul class={classes!("nav-links", menu_open.then_some("active"))}>
                    { for profile.nav.iter().map(|link| html! {
                        <li key={link.href.clone()}>
                            <a href={link.href.clone()} onclick={close_menu.clone()}>
                                { link.label.clone() }
                            </a>
                        </li>
                    }) }
                </ul>
                <button
                    type="button"
                    class="theme-toggle"
                    aria-label={theme.theme.toggle_label()}
                    aria-pressed={theme.theme.is_light().to_string()}
                    onclick={on_theme_toggle}
                >
                    <span aria-hidden="true">{ theme.theme.icon() }</span>
                </button>
                <button
                    type="button"
                    class="mobile-menu-toggle"
                    aria-label={menu_label}
                    aria-expanded={menu_open.to_string()}
                    onclick={on_menu_toggle}
                >
                    <span aria-hidden="true">{ if *menu_open { "✕" } else { "☰" } }</span>
                </button>
            </div>
        </nav>
    }
}
