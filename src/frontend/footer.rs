use std::rc::Rc;

use yew::prelude::*;

use crate::profile::Profile;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub profile: Rc<Profile>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    let content = &props.profile.footer;

    html! {
        <footer class="footer">
            <p>{ content.copyright(year) }</p>
            <p>{ content.location.clone() }</p>
        </footer>
    }
}
