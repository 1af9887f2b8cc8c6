use std::rc::Rc;

use yew::prelude::*;

use super::backdrop::use_backdrop;
use super::theme::use_theme;
use crate::motion::{stagger_style, RevealMode};
use crate::profile::{ContactLink, Profile};
use crate::scene::contact::ContactScene;

const ITEM_STAGGER: f64 = 0.1;
/// Kicker and heading come before the links in the stagger order.
const LEADING_ITEMS: usize = 2;

fn contact_link(index: usize, link: &ContactLink) -> Html {
    let external = link.is_external();

    html! {
        <a
            key={link.href.clone()}
            href={link.href.clone()}
            class={classes!("contact-link", RevealMode::Once.marker_class())}
            style={stagger_style(index, ITEM_STAGGER)}
            target={external.then_some("_blank")}
            rel={external.then_some("noopener noreferrer")}
        >
            <span class="contact-link-label">{ link.label.clone() }</span>
            <span class="contact-link-value">{ link.value.clone() }</span>
            <span class="contact-link-arrow" aria-hidden="true">{ "→" }</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub profile: Rc<Profile>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let theme = use_theme().theme;
    let section = use_node_ref();
    let canvas = use_node_ref();
    use_backdrop::<ContactScene>(canvas.clone(), section.clone(), theme);

    let content = &props.profile.contact;
    let reveal = RevealMode::Once.marker_class();

    html! {
        <section id="contact" class="section contact" ref={section}>
            <canvas ref={canvas} class="scene-canvas" aria-hidden="true" />
            <div class="container contact-inner">
                <p class={classes!("contact-pre", reveal)} style={stagger_style(0, ITEM_STAGGER)}>
                    { content.kicker.clone() }
                </p>
                <h2 class={classes!("contact-heading", reveal)} style={stagger_style(1, ITEM_STAGGER)}>
                    { content.heading.clone() }
                    <br />
                    <em>{ content.emphasis.clone() }</em>
                </h2>
                <div class="contact-links">
                    { for content.links.iter().enumerate().map(|(index, link)| contact_link(LEADING_ITEMS + index, link)) }
                </div>
            </div>
        </section>
    }
}
