//! Autoplaying carousel used for testimonials. Advances every five seconds,
//! with manual prev/next controls and dot indicators. The interval handle
//! lives in the mount effect and is dropped on unmount.

use std::cell::RefCell;

use web_sys::MouseEvent;
use yew::prelude::*;

const AUTOPLAY_MS: u32 = 5000;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Html>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let active = use_state(|| 0usize);
    let cursor = use_mut_ref(|| 0usize);
    let count = props.slides.len();

    {
        let active = active.clone();
        let cursor = cursor.clone();
        use_effect_with_deps(
            move |&count| {
                let interval_handle = RefCell::new(None);
                if count > 1 {
                    let interval = gloo_timers::callback::Interval::new(AUTOPLAY_MS, move || {
                        let next = {
                            let mut cursor = cursor.borrow_mut();
                            *cursor = (*cursor + 1) % count;
                            *cursor
                        };
                        active.set(next);
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }
                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            count,
        );
    }

    let on_prev = {
        let active = active.clone();
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            if count == 0 {
                return;
            }
            let mut cursor = cursor.borrow_mut();
            *cursor = (*cursor + count - 1) % count;
            active.set(*cursor);
        })
    };

    let on_next = {
        let active = active.clone();
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            if count == 0 {
                return;
            }
            let mut cursor = cursor.borrow_mut();
            *cursor = (*cursor + 1) % count;
            active.set(*cursor);
        })
    };

    let dots = (0..count)
        .map(|i| {
            let cursor = cursor.clone();
            let onclick = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| {
                    *cursor.borrow_mut() = i;
                    active.set(i);
                })
            };
            let class = if i == *active {
                "carousel-dot active"
            } else {
                "carousel-dot"
            };
            html! { <button key={i.to_string()} class={class} onclick={onclick}></button> }
        })
        .collect::<Html>();

    html! {
        <div class={classes!("carousel", props.class.clone())}>
            <style>
                {r#"
                    .carousel { position: relative; overflow: hidden; }
                    .carousel-track {
                        display: flex;
                        transition: transform 0.6s ease;
                    }
                    .carousel-slide { flex: 0 0 100%; }
                    .carousel-controls {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                    .carousel-arrow {
                        background: rgba(255, 255, 255, 0.08);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 50%;
                        width: 2.4rem;
                        height: 2.4rem;
                        color: #fff;
                        cursor: pointer;
                    }
                    .carousel-dot {
                        width: 0.6rem;
                        height: 0.6rem;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.25);
                        cursor: pointer;
                        padding: 0;
                    }
                    .carousel-dot.active { background: #7c5cff; }
                "#}
            </style>
            <div
                class="carousel-track"
                style={format!("transform: translateX(-{}%);", *active * 100)}
            >
                { for props.slides.iter().cloned().enumerate().map(|(i, slide)| html! {
                    <div key={i.to_string()} class="carousel-slide">{ slide }</div>
                }) }
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" onclick={on_prev}>{"‹"}</button>
                { dots }
                <button class="carousel-arrow" onclick={on_next}>{"›"}</button>
            </div>
        </div>
    }
}
