//! Mounts a scene behind a section for as long as the component lives.

use serde_json::json;
use web_sys::{HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use super::canvas::CanvasSurface;
use super::dom::{Registration, WebHost};
use crate::logging::{log_event, LogLevel};
use crate::motion::SectionBounds;
use crate::scene::host::{mount, BoundsProbe, Mounted};
use crate::scene::{Palette, Scene};
use crate::theme::Theme;

type Backdrop<S> = Mounted<Registration, S, CanvasSurface>;

fn start<S: Scene + 'static>(canvas: &NodeRef, section: &NodeRef, theme: Theme) -> Option<Backdrop<S>> {
    let host = WebHost::new()?;
    let surface = match CanvasSurface::attach(canvas.cast::<HtmlCanvasElement>()) {
        Ok(surface) => surface,
        Err(error) => {
            log_event(
                LogLevel::Debug,
                "scene_skipped",
                json!({ "scene": S::NAME, "reason": error.to_string() }),
            );
            return None;
        }
    };

    let mut rng = fastrand::Rng::new();
    let scene = S::build(&Palette::for_theme(theme), host.viewport(), &mut rng);

    let section = section.clone();
    let bounds: BoundsProbe = Box::new(move || {
        section.cast::<HtmlElement>().map(|element| SectionBounds {
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    });

    let mounted = mount(&host, scene, surface, Some(bounds));
    log_event(
        LogLevel::Debug,
        "scene_mounted",
        json!({
            "scene": S::NAME,
            "theme": theme.as_str(),
            "registrations": mounted.registrations(),
        }),
    );
    Some(mounted)
}

/// Rebuilds the scene whenever the theme changes; the previous one is
/// disposed first.
#[hook]
pub fn use_backdrop<S>(canvas: NodeRef, section: NodeRef, theme: Theme)
where
    S: Scene + 'static,
{
    use_effect_with(theme, move |theme| {
        let backdrop = start::<S>(&canvas, &section, *theme);
        move || {
            if backdrop.is_some() {
                log_event(LogLevel::Debug, "scene_disposed", json!({ "scene": S::NAME }));
            }
            drop(backdrop);
        }
    });
}
