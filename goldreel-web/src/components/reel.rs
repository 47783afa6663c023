use yew::prelude::*;

use crate::game::Icon;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub icon: Icon,
    pub spinning: bool,
}

/// One reel face. The flicker animation is driven by the parent
/// swapping `icon` while `spinning` is set; this component only
/// renders the current glyph.
#[function_component(Reel)]
pub fn reel(props: &Props) -> Html {
    let class = if props.spinning {
        "reel reel--spinning"
    } else {
        "reel"
    };
    html! {
        <div {class} aria-live="off">{ props.icon.glyph() }</div>
    }
}
