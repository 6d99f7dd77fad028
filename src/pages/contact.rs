use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::gravity_text::GravityText;
use crate::components::reveal::RevealAnimation;
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;

const SUBMIT_DELAY_MS: u32 = 1200;

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sending = sending.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if name.trim().is_empty() || message.trim().is_empty() {
                error.set(Some("Please fill in your name and a message.".to_string()));
                return;
            }
            error.set(None);
            sending.set(true);

            // No backend: simulate the submission, then hand the
            // conversation over to WhatsApp with the message prefilled.
            let text = format!(
                "Hi, I'm {} ({}). {}",
                name.trim(),
                if email.trim().is_empty() {
                    "no email given"
                } else {
                    email.trim()
                },
                message.trim(),
            );
            Timeout::new(SUBMIT_DELAY_MS, move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&config::whatsapp_link(&text));
                }
            })
            .forget();
        })
    };

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page { max-width: 640px; margin: 0 auto; padding: 7rem 2rem 4rem; }
                    .contact-page .page-title { text-align: center; font-size: 2.6rem; }
                    .contact-page .page-lead {
                        text-align: center;
                        color: #9aa0b4;
                        margin: 1rem auto 3rem;
                        line-height: 1.6;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 2.5rem;
                    }
                    .contact-form label { color: #c5c9d8; font-size: 0.9rem; }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        margin-top: 0.4rem;
                        padding: 0.8rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(0, 0, 0, 0.25);
                        color: #fff;
                        font: inherit;
                    }
                    .contact-form textarea { min-height: 140px; resize: vertical; }
                    .form-error { color: #ff5c8a; font-size: 0.9rem; }
                    .form-note { color: #9aa0b4; font-size: 0.85rem; text-align: center; }
                "#}
            </style>

            <h1 class="page-title">
                <GravityText text="Contact" />
            </h1>
            <p class="page-lead">
                {"Tell us about your project. We reply within one business day."}
            </p>

            <ScrollReveal animation={RevealAnimation::FadeUp}>
                <form class="contact-form" onsubmit={onsubmit}>
                    <label>
                        {"Name"}
                        <input
                            type="text"
                            value={(*name).clone()}
                            oninput={{
                                let name = name.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                })
                            }}
                        />
                    </label>
                    <label>
                        {"Email (optional)"}
                        <input
                            type="email"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </label>
                    <label>
                        {"Message"}
                        <textarea
                            value={(*message).clone()}
                            oninput={{
                                let message = message.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    message.set(input.value());
                                })
                            }}
                        />
                    </label>
                    if let Some(err) = (*error).clone() {
                        <div class="form-error">{ err }</div>
                    }
                    <button type="submit" class="btn btn-primary" disabled={*sending}>
                        { if *sending { "Sending…" } else { "Send message" } }
                    </button>
                    <div class="form-note">
                        {"Sending opens WhatsApp with your message prefilled — nothing is \
                          stored on our side."}
                    </div>
                </form>
            </ScrollReveal>
        </div>
    }
}
