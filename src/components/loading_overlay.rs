//! Full-screen overlay shown briefly after every route change: a rotating
//! ring spinner drawn on a canvas plus a gravity-text caption. The ring
//! animation runs on a requestAnimationFrame loop that is cancelled when
//! the overlay unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::gravity_text::GravityText;

const CANVAS_SIZE: u32 = 160;

fn draw_rings(ctx: &web_sys::CanvasRenderingContext2d, angle: f64) {
    let size = CANVAS_SIZE as f64;
    let center = size / 2.0;
    ctx.clear_rect(0.0, 0.0, size, size);

    // Three arcs at different radii and speeds, spinning around the center.
    let rings: [(f64, f64, &str); 3] = [
        (62.0, 1.0, "rgba(124, 92, 255, 0.9)"),
        (48.0, -1.6, "rgba(64, 208, 255, 0.8)"),
        (34.0, 2.3, "rgba(255, 255, 255, 0.5)"),
    ];
    for (radius, speed, color) in rings {
        let start = angle * speed;
        ctx.begin_path();
        ctx.set_line_width(3.0);
        ctx.set_stroke_style_str(color);
        let _ = ctx.arc(center, center, radius, start, start + 4.2);
        ctx.stroke();
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    #[prop_or(AttrValue::Static("Loading"))]
    pub caption: AttrValue,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let raf_handle = Rc::new(RefCell::new(None::<i32>));
                let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));

                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(CANVAS_SIZE);
                    canvas.set_height(CANVAS_SIZE);
                    let ctx = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok());

                    if let Some(ctx) = ctx {
                        let angle = Rc::new(RefCell::new(0.0f64));
                        let tick_inner = tick.clone();
                        let raf_inner = raf_handle.clone();
                        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                            let mut a = angle.borrow_mut();
                            *a += 0.05;
                            draw_rings(&ctx, *a);
                            drop(a);
                            if let Some(w) = web_sys::window() {
                                if let Some(cb) = tick_inner.borrow().as_ref() {
                                    *raf_inner.borrow_mut() = w
                                        .request_animation_frame(cb.as_ref().unchecked_ref())
                                        .ok();
                                }
                            }
                        })
                            as Box<dyn FnMut()>));

                        if let (Some(w), Some(cb)) = (web_sys::window(), tick.borrow().as_ref()) {
                            *raf_handle.borrow_mut() =
                                w.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
                        }
                    }
                }

                move || {
                    if let (Some(w), Some(handle)) = (web_sys::window(), raf_handle.borrow_mut().take())
                    {
                        let _ = w.cancel_animation_frame(handle);
                    }
                    *tick.borrow_mut() = None;
                }
            },
            (),
        );
    }

    html! {
        <div class="loading-overlay">
            <style>
                {r#"
                    .loading-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 999;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #0b0b14;
                    }
                    .loading-overlay canvas {
                        width: 160px;
                        height: 160px;
                    }
                    .loading-overlay .loading-caption {
                        font-size: 1.4rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #fff;
                    }
                "#}
            </style>
            <canvas ref={canvas_ref}></canvas>
            <div class="loading-caption">
                <GravityText text={props.caption.clone()} animate_on_scroll={false} />
            </div>
        </div>
    }
}
