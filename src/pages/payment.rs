use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::gravity_text::GravityText;
use crate::components::reveal::RevealAnimation;
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::pages::courses::COURSES;

const SUBMIT_DELAY_MS: u32 = 1200;

/// Payment is arranged over WhatsApp after an intent is submitted here.
/// There is no payment processor behind this form.
#[function_component(Payment)]
pub fn payment() -> Html {
    let buyer = use_state(String::new);
    let selected = use_state(|| 0usize);
    let sending = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let buyer = buyer.clone();
        let selected = selected.clone();
        let sending = sending.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if buyer.trim().is_empty() {
                error.set(Some("Please enter the name the seat is reserved under.".to_string()));
                return;
            }
            let Some(course) = COURSES.get(*selected) else {
                return;
            };
            error.set(None);
            sending.set(true);

            let text = format!(
                "Payment intent: {} — \"{}\" (€{}). Please send me the payment details.",
                buyer.trim(),
                course.name,
                course.price_eur,
            );
            Timeout::new(SUBMIT_DELAY_MS, move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&config::whatsapp_link(&text));
                }
            })
            .forget();
        })
    };

    let onchange = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(index) = select.value().parse::<usize>() {
                selected.set(index.min(COURSES.len().saturating_sub(1)));
            }
        })
    };

    let price = COURSES.get(*selected).map(|c| c.price_eur).unwrap_or(0);

    html! {
        <div class="payment-page">
            <style>
                {r#"
                    .payment-page { max-width: 640px; margin: 0 auto; padding: 7rem 2rem 4rem; }
                    .payment-page .page-title { text-align: center; font-size: 2.6rem; }
                    .payment-page .page-lead {
                        text-align: center;
                        color: #9aa0b4;
                        margin: 1rem auto 3rem;
                        line-height: 1.6;
                    }
                    .payment-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 2.5rem;
                    }
                    .payment-form label { color: #c5c9d8; font-size: 0.9rem; }
                    .payment-form input, .payment-form select {
                        width: 100%;
                        margin-top: 0.4rem;
                        padding: 0.8rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(0, 0, 0, 0.25);
                        color: #fff;
                        font: inherit;
                    }
                    .payment-total {
                        display: flex;
                        justify-content: space-between;
                        font-size: 1.2rem;
                        color: #fff;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding-top: 1.25rem;
                    }
                    .payment-total .amount { font-weight: 800; color: #7c5cff; }
                    .form-error { color: #ff5c8a; font-size: 0.9rem; }
                    .form-note { color: #9aa0b4; font-size: 0.85rem; text-align: center; }
                "#}
            </style>

            <h1 class="page-title">
                <GravityText text="Payment" />
            </h1>
            <p class="page-lead">
                {"Reserve your course seat. We confirm availability and payment \
                  details over WhatsApp."}
            </p>

            <ScrollReveal animation={RevealAnimation::FadeUp}>
                <form class="payment-form" onsubmit={onsubmit}>
                    <label>
                        {"Your name"}
                        <input
                            type="text"
                            value={(*buyer).clone()}
                            oninput={{
                                let buyer = buyer.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    buyer.set(input.value());
                                })
                            }}
                        />
                    </label>
                    <label>
                        {"Course"}
                        <select onchange={onchange}>
                            { for COURSES.iter().enumerate().map(|(i, c)| html! {
                                <option
                                    key={c.name}
                                    value={i.to_string()}
                                    selected={i == *selected}
                                >
                                    { format!("{} — €{}", c.name, c.price_eur) }
                                </option>
                            }) }
                        </select>
                    </label>
                    <div class="payment-total">
                        <span>{"Total"}</span>
                        <span class="amount">{ format!("€{price}") }</span>
                    </div>
                    if let Some(err) = (*error).clone() {
                        <div class="form-error">{ err }</div>
                    }
                    <button type="submit" class="btn btn-primary" disabled={*sending}>
                        { if *sending { "Preparing…" } else { "Continue on WhatsApp" } }
                    </button>
                    <div class="form-note">
                        {"No card details are collected here."}
                    </div>
                </form>
            </ScrollReveal>
        </div>
    }
}
