use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gravity_text::GravityText;
use crate::components::reveal::RevealAnimation;
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::Route;

struct Highlight {
    title: &'static str,
    blurb: &'static str,
    icon: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Web Development",
        blurb: "Fast, accessible sites and web apps, built to convert visitors into clients.",
        icon: "\u{1F4BB}",
    },
    Highlight {
        title: "Brand & Design",
        blurb: "Identities, design systems and landing pages that feel unmistakably yours.",
        icon: "\u{1F3A8}",
    },
    Highlight {
        title: "Digital Courses",
        blurb: "Hands-on courses that teach your team to run its own digital presence.",
        icon: "\u{1F393}",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-hero {
                        min-height: 85vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem 4rem;
                    }
                    .home-hero .hero-title {
                        font-size: clamp(2.8rem, 8vw, 5.5rem);
                        font-weight: 800;
                    }
                    .home-hero .hero-sub {
                        max-width: 560px;
                        margin: 1.5rem auto 2.5rem;
                        color: #9aa0b4;
                        font-size: 1.15rem;
                        line-height: 1.6;
                    }
                    .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                    .home-highlights {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                    }
                    .highlight-card {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 2rem;
                        height: 100%;
                    }
                    .highlight-card .icon { font-size: 2rem; }
                    .highlight-card h3 { margin: 1rem 0 0.5rem; color: #fff; }
                    .highlight-card p { color: #9aa0b4; line-height: 1.6; }
                    .home-stats {
                        display: flex;
                        justify-content: center;
                        gap: 4rem;
                        flex-wrap: wrap;
                        padding: 3rem 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    .stat { text-align: center; }
                    .stat .value { font-size: 2.4rem; font-weight: 800; color: #7c5cff; }
                    .stat .label { color: #9aa0b4; }
                    .home-cta { text-align: center; padding: 5rem 2rem; }
                    .home-cta h2 { font-size: 2.2rem; color: #fff; margin-bottom: 1.5rem; }
                "#}
            </style>

            <section class="home-hero">
                <h1 class="hero-title">
                    <GravityText text={config::AGENCY_NAME} />
                </h1>
                <p class="hero-sub">
                    {"We design, build and grow digital products for ambitious brands — \
                      from one-page launches to full e-commerce platforms."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Services} classes="btn btn-primary">
                        {"Our services"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="btn btn-ghost">
                        {"Start a project"}
                    </Link<Route>>
                </div>
            </section>

            <section class="home-highlights">
                { for HIGHLIGHTS.iter().enumerate().map(|(i, h)| html! {
                    <ScrollReveal
                        key={h.title}
                        animation={RevealAnimation::FadeUp}
                        delay_ms={(i as u32) * 150}
                    >
                        <div class="highlight-card">
                            <div class="icon">{ h.icon }</div>
                            <h3>{ h.title }</h3>
                            <p>{ h.blurb }</p>
                        </div>
                    </ScrollReveal>
                }) }
            </section>

            <ScrollReveal animation={RevealAnimation::ZoomIn}>
                <section class="home-stats">
                    <div class="stat">
                        <div class="value">{"120+"}</div>
                        <div class="label">{"Projects shipped"}</div>
                    </div>
                    <div class="stat">
                        <div class="value">{"8"}</div>
                        <div class="label">{"Years in business"}</div>
                    </div>
                    <div class="stat">
                        <div class="value">{"97%"}</div>
                        <div class="label">{"Clients who return"}</div>
                    </div>
                </section>
            </ScrollReveal>

            <ScrollReveal animation={RevealAnimation::FadeLeft}>
                <section class="home-cta">
                    <h2>{"Have an idea? Let's make it real."}</h2>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">
                        {"Tell us about it"}
                    </Link<Route>>
                </section>
            </ScrollReveal>
        </div>
    }
}
