//! Wrapper that reveals its children once they scroll into view.

use yew::prelude::*;

use super::reveal::{reveal_style, RevealAnimation};
use super::visibility::use_in_view;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub children: Children,
    #[prop_or(RevealAnimation::FadeUp)]
    pub animation: RevealAnimation,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(600)]
    pub duration_ms: u32,
    #[prop_or(0.1)]
    pub threshold: f64,
    /// When set, the element stays revealed after its first appearance.
    /// Otherwise scrolling it back out re-applies the hidden preset.
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_in_view(node_ref.clone(), props.threshold, props.once);
    let style = reveal_style(props.animation, revealed, props.delay_ms, props.duration_ms);

    html! {
        <div ref={node_ref} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
