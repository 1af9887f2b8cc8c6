use std::rc::Rc;

use yew::prelude::*;

use super::backdrop::use_backdrop;
use super::theme::use_theme;
use crate::profile::Profile;
use crate::scene::hero::HeroScene;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Rc<Profile>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let theme = use_theme().theme;
    let section = use_node_ref();
    let canvas = use_node_ref();
    use_backdrop::<HeroScene>(canvas.clone(), section.clone(), theme);

    let profile = &props.profile;

    html! {
        <section id="hero" class="hero" ref={section}>
            <canvas ref={canvas} class="scene-canvas hero-canvas" aria-hidden="true" />
            <div class="hero-inner">
                <div class="hero-tag">{ profile.role.clone() }</div>
                <h1 class="hero-name">
                    { profile.first_name.clone() }
                    <br />
                    <em>{ profile.last_name.clone() }</em>
                </h1>
                <p class="hero-sub">{ profile.intro.clone() }</p>
                <div class="hero-actions">
                    <a href="#contact" class="hero-cta">
                        { profile.contact_cta.clone() }
                        <span aria-hidden="true">{ " →" }</span>
                    </a>
                    <a href={profile.resume.href.clone()} class="hero-cta hero-cta-secondary" download="">
                        { profile.resume.label.clone() }
                    </a>
                </div>
            </div>
        </section>
    }
}
