//! Text whose letters drift with an ambient oscillation, repel from the
//! pointer while hovered, and scatter in on first scroll visibility. The
//! math lives in `motion`; this component owns the per-instance state, the
//! 50 ms ambient interval and the pointer wiring.

use gloo_timers::callback::Interval;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use super::motion::{letters, MotionOptions, TextMotion, DEFAULT_INTENSITY, TICK_MS};
use super::visibility::use_in_view;

#[derive(Properties, PartialEq)]
pub struct GravityTextProps {
    pub text: AttrValue,
    #[prop_or(DEFAULT_INTENSITY)]
    pub intensity: f64,
    /// Scatter the letters until the component first scrolls into view.
    #[prop_or(true)]
    pub animate_on_scroll: bool,
    #[prop_or(true)]
    pub animate_on_hover: bool,
    #[prop_or(true)]
    pub colorful: bool,
    #[prop_or(true)]
    pub glow_effect: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(GravityText)]
pub fn gravity_text(props: &GravityTextProps) -> Html {
    let node_ref = use_node_ref();
    let animate_on_scroll = props.animate_on_scroll;
    let motion = use_mut_ref(move || TextMotion::new(!animate_on_scroll));
    // Bumped whenever the motion state changes so the letters re-render.
    let generation = use_state(|| 0u64);
    let frame_counter = use_mut_ref(|| 0u64);

    // Ambient clock, one per mounted instance. Stopped exactly once on
    // unmount together with the interval handle.
    {
        let motion = motion.clone();
        let generation = generation.clone();
        let frame_counter = frame_counter.clone();
        use_effect_with_deps(
            move |_| {
                let ticker = {
                    let motion = motion.clone();
                    Interval::new(TICK_MS, move || {
                        motion.borrow_mut().advance();
                        let mut frame = frame_counter.borrow_mut();
                        *frame += 1;
                        generation.set(*frame);
                    })
                };
                move || {
                    motion.borrow_mut().stop();
                    drop(ticker);
                }
            },
            (),
        );
    }

    let in_view = use_in_view(node_ref.clone(), 0.1, true);
    {
        let motion = motion.clone();
        let generation = generation.clone();
        let frame_counter = frame_counter.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    motion.borrow_mut().reveal();
                    let mut frame = frame_counter.borrow_mut();
                    *frame += 1;
                    generation.set(*frame);
                }
                || ()
            },
            in_view,
        );
    }

    let onmouseenter = {
        let motion = motion.clone();
        let generation = generation.clone();
        let frame_counter = frame_counter.clone();
        Callback::from(move |_: MouseEvent| {
            motion.borrow_mut().pointer_entered();
            let mut frame = frame_counter.borrow_mut();
            *frame += 1;
            generation.set(*frame);
        })
    };
    let onmouseleave = {
        let motion = motion.clone();
        let generation = generation.clone();
        let frame_counter = frame_counter.clone();
        Callback::from(move |_: MouseEvent| {
            motion.borrow_mut().pointer_left();
            let mut frame = frame_counter.borrow_mut();
            *frame += 1;
            generation.set(*frame);
        })
    };
    let onmousemove = {
        let motion = motion.clone();
        let node_ref = node_ref.clone();
        let generation = generation.clone();
        let frame_counter = frame_counter.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node_ref.cast::<HtmlElement>() {
                let rect = element.get_bounding_client_rect();
                if rect.width() > 0.0 && rect.height() > 0.0 {
                    let x = (e.client_x() as f64 - rect.left()) / rect.width();
                    let y = (e.client_y() as f64 - rect.top()) / rect.height();
                    motion.borrow_mut().pointer_moved(x, y);
                    let mut frame = frame_counter.borrow_mut();
                    *frame += 1;
                    generation.set(*frame);
                }
            }
        })
    };

    let opts = MotionOptions {
        intensity: props.intensity,
        animate_on_hover: props.animate_on_hover,
        colorful: props.colorful,
        glow_effect: props.glow_effect,
    };
    let sequence = letters(&props.text);
    let total = sequence.len();
    let state = motion.borrow();

    let rendered = sequence
        .into_iter()
        .map(|(i, ch)| {
            let frame = state.frame(ch, i, total, &opts);
            let mut style = format!(
                "display: inline-block; \
                 transform: translate({:.4}em, {:.4}em) translateY({:.2}px); \
                 opacity: {}; \
                 transition: transform {:.2}s ease-out, opacity {:.2}s ease-out;",
                frame.offset_x,
                frame.offset_y,
                frame.scatter_y,
                frame.opacity,
                frame.settle_secs,
                frame.settle_secs,
            );
            if ch.is_whitespace() {
                style.push_str(" width: 0.35em;");
            } else if opts.colorful {
                style.push_str(&format!(
                    " background-image: linear-gradient(90deg, hsl({:.0}, 85%, 66%), hsl({:.0}, 85%, 66%)); \
                     -webkit-background-clip: text; background-clip: text; color: transparent;",
                    frame.hue_near, frame.hue_far,
                ));
            }
            if frame.glow > 0.0 {
                style.push_str(&format!(
                    " text-shadow: 0 0 8px hsla({:.0}, 90%, 70%, {:.3});",
                    frame.hue_near, frame.glow,
                ));
            }
            let glyph = if ch.is_whitespace() { '\u{a0}' } else { ch };
            // Keyed by the text itself so a text change remounts every span
            // instead of reusing nodes with in-flight transitions.
            html! {
                <span key={format!("{}-{i}", props.text)} style={style}>{ glyph }</span>
            }
        })
        .collect::<Html>();

    html! {
        <span
            ref={node_ref}
            class={classes!("gravity-text", props.class.clone())}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
            onmousemove={onmousemove}
        >
            <style>
                {r#"
                    .gravity-text {
                        display: inline-block;
                        position: relative;
                        cursor: default;
                        white-space: nowrap;
                    }
                    .gravity-text .gravity-text-literal {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0 0 0 0);
                        white-space: nowrap;
                    }
                "#}
            </style>
            <span class="gravity-text-literal">{ props.text.clone() }</span>
            <span aria-hidden="true">{ rendered }</span>
        </span>
    }
}
