use std::rc::Rc;

use yew::prelude::*;

use super::backdrop::use_backdrop;
use super::theme::use_theme;
use crate::motion::{stagger_style, RevealMode};
use crate::profile::{Profile, SkillGroup};
use crate::scene::skills::SkillsScene;

const GROUP_STAGGER: f64 = 0.2;

fn skill_group(index: usize, group: &SkillGroup) -> Html {
    html! {
        <div
            key={group.title.clone()}
            class={classes!("skill-group", RevealMode::Once.marker_class())}
            style={stagger_style(index, GROUP_STAGGER)}
        >
            <div class="skill-group-icon" aria-hidden="true">{ group.icon.clone() }</div>
            <div class="skill-group-title">{ group.title.clone() }</div>
            <div class="skill-pills">
                { for group.pills.iter().map(|pill| html! { <span class="pill">{ pill.clone() }</span> }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub profile: Rc<Profile>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let theme = use_theme().theme;
    let section = use_node_ref();
    let canvas = use_node_ref();
    use_backdrop::<SkillsScene>(canvas.clone(), section.clone(), theme);

    let content = &props.profile.skills;

    html! {
        <section id="skills" class="section skills" ref={section}>
            <canvas ref={canvas} class="scene-canvas" aria-hidden="true" />
            <div class="container">
                <div class={classes!("section-header", RevealMode::Toggle.marker_class())}>
                    <span class="section-label">{ content.number.clone() }</span>
                    <h2 class="section-title">{ content.title.clone() }</h2>
                </div>
                <div class="skills-grid">
                    { for content.groups.iter().enumerate().map(|(index, group)| skill_group(index, group)) }
                </div>
            </div>
        </section>
    }
}
