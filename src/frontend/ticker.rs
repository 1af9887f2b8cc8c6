use std::{cell::Cell, rc::Rc};

use web_sys::HtmlElement;
use yew::prelude::*;

use super::dom::FrameLoop;
use crate::profile::Profile;
use crate::ticker::{ticker_sequence, TickerLoop};

#[derive(Properties, PartialEq)]
pub struct TickerProps {
    pub profile: Rc<Profile>,
}

#[function_component(Ticker)]
pub fn ticker(props: &TickerProps) -> Html {
    let track = use_node_ref();

    {
        let track = track.clone();
        let label_count = props.profile.ticker.len();
        use_effect_with(label_count, move |label_count| {
            let motion = track.cast::<HtmlElement>().and_then(|element| {
                let strip = TickerLoop::new(*label_count, f64::from(element.scroll_width()));
                let origin = Cell::new(None);
                FrameLoop::start(move |timestamp| {
                    let start = origin.get().unwrap_or(timestamp);
                    origin.set(Some(start));
                    let elapsed = (timestamp - start) / 1_000.0;
                    let _ = element
                        .style()
                        .set_property("transform", &strip.transform(elapsed));
                })
            });
            move || drop(motion)
        });
    }

    html! {
        <div class="ticker-wrap" aria-hidden="true">
            <div class="ticker-track" ref={track}>
                { for ticker_sequence(&props.profile.ticker).into_iter().map(|label| html! {
                    <span class="ticker-item">{ label }</span>
                }) }
            </div>
        </div>
    }
}
