use std::rc::Rc;

use yew::prelude::*;

use super::backdrop::use_backdrop;
use super::theme::use_theme;
use crate::motion::{stagger_style, RevealMode};
use crate::profile::{Profile, Project};
use crate::scene::projects::ProjectsScene;

const CARD_STAGGER: f64 = 0.2;

fn project_card(index: usize, project: &Project) -> Html {
    html! {
        <article
            key={project.title.clone()}
            class={classes!("project-card", RevealMode::Once.marker_class())}
            style={stagger_style(index, CARD_STAGGER)}
        >
            <div class="project-num">{ format!("{:02}", index + 1) }</div>
            <h3 class="project-title">{ project.title.clone() }</h3>
            <p class="project-desc">{ project.description.clone() }</p>
            if !project.features.is_empty() {
                <ul class="project-features">
                    { for project.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
                </ul>
            }
            if !project.tags.is_empty() {
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{ tag.clone() }</span> }) }
                </div>
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub profile: Rc<Profile>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let theme = use_theme().theme;
    let section = use_node_ref();
    let canvas = use_node_ref();
    use_backdrop::<ProjectsScene>(canvas.clone(), section.clone(), theme);

    let content = &props.profile.projects;

    html! {
        <section id="projects" class="section projects" ref={section}>
            <canvas ref={canvas} class="scene-canvas" aria-hidden="true" />
            <div class="container">
                <div class={classes!("section-header", RevealMode::Toggle.marker_class())}>
                    <span class="section-label">{ content.number.clone() }</span>
                    <h2 class="section-title">{ content.title.clone() }</h2>
                </div>
                <div class="projects-grid">
                    { for content.items.iter().enumerate().map(|(index, project)| project_card(index, project)) }
                </div>
            </div>
        </section>
    }
}
