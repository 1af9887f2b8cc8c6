mod backdrop;
mod canvas;
mod contact;
mod cursor;
mod dom;
mod footer;
mod hero;
mod navbar;
mod projects;
mod scrolling;
mod skills;
mod theme;
mod ticker;

use std::rc::Rc;

use serde_json::json;
use web_sys::window;
use yew::prelude::*;

use crate::logging::{self, log_event, LogLevel};
use crate::profile::Profile;

use contact::Contact;
use cursor::CustomCursor;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use scrolling::{bind_smooth_anchors, start_scroll_reveal};
use skills::Skills;
use theme::ThemeProvider;
use ticker::Ticker;

#[derive(Properties, PartialEq)]
struct AppProps {
    profile: Rc<Profile>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    use_effect_with((), |_| {
        let reveal = start_scroll_reveal();
        let anchors = bind_smooth_anchors();
        log_event(
            LogLevel::Debug,
            "page_effects_bound",
            json!({ "anchors": anchors.len(), "reveal": reveal.is_some() }),
        );
        move || {
            drop(reveal);
            drop(anchors);
        }
    });

    let profile = props.profile.clone();

    html! {
        <ThemeProvider>
            <CustomCursor />
            <Navbar profile={profile.clone()} />
            <main>
                <Hero profile={profile.clone()} />
                <Ticker profile={profile.clone()} />
                <Skills profile={profile.clone()} />
                <Projects profile={profile.clone()} />
                <Contact profile={profile.clone()} />
            </main>
            <Footer {profile} />
        </ThemeProvider>
    }
}

pub fn run() {
    logging::init(LogLevel::from_build());

    let profile = match Profile::embedded() {
        Ok(profile) => Rc::new(profile),
        Err(error) => {
            log_event(
                LogLevel::Error,
                "profile_invalid",
                json!({ "error": error.to_string() }),
            );
            return;
        }
    };

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log_event(LogLevel::Error, "mount_point_missing", json!({ "id": "app" }));
        return;
    };

    log_event(
        LogLevel::Info,
        "app_started",
        json!({ "sections": profile.nav.len(), "ticker_labels": profile.ticker.len() }),
    );
    yew::Renderer::<App>::with_root_and_props(root, AppProps { profile }).render();
}
