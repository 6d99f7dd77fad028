use yew::prelude::*;

use crate::components::gravity_text::GravityText;
use crate::components::reveal::RevealAnimation;
use crate::components::scroll_reveal::ScrollReveal;

struct Project {
    name: &'static str,
    category: &'static str,
    result: &'static str,
    accent: &'static str,
}

const PROJECTS: [Project; 6] = [
    Project {
        name: "Harbor & Pine",
        category: "E-commerce",
        result: "+64% conversion after the storefront rebuild",
        accent: "#7c5cff",
    },
    Project {
        name: "Lumo Fitness",
        category: "Brand + Web",
        result: "Full rebrand and booking site in six weeks",
        accent: "#40d0ff",
    },
    Project {
        name: "Café Aurora",
        category: "Landing Page",
        result: "Local search traffic tripled in three months",
        accent: "#ff8a5c",
    },
    Project {
        name: "Nordic Legal",
        category: "Corporate Site",
        result: "Accessible redesign, WCAG AA across all pages",
        accent: "#7cffc4",
    },
    Project {
        name: "Playdate Studio",
        category: "E-commerce",
        result: "Subscription checkout with 2.1% churn",
        accent: "#ff5c8a",
    },
    Project {
        name: "Atlas Tours",
        category: "Booking Platform",
        result: "Seasonal campaigns now launch in hours, not weeks",
        accent: "#ffd25c",
    },
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <div class="portfolio-page">
            <style>
                {r#"
                    .portfolio-page { max-width: 1100px; margin: 0 auto; padding: 7rem 2rem 4rem; }
                    .portfolio-page .page-title { text-align: center; font-size: 2.6rem; }
                    .portfolio-page .page-lead {
                        text-align: center;
                        color: #9aa0b4;
                        max-width: 540px;
                        margin: 1rem auto 3.5rem;
                        line-height: 1.6;
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .project-card {
                        border-radius: 16px;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.04);
                        height: 100%;
                    }
                    .project-banner { height: 8px; }
                    .project-body { padding: 1.75rem; }
                    .project-body .category {
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.12em;
                        color: #9aa0b4;
                    }
                    .project-body h3 { color: #fff; margin: 0.4rem 0 0.75rem; }
                    .project-body p { color: #9aa0b4; line-height: 1.6; }
                "#}
            </style>

            <h1 class="page-title">
                <GravityText text="Portfolio" />
            </h1>
            <p class="page-lead">
                {"A few recent projects. Every one shipped on time and is still in \
                  production today."}
            </p>

            <div class="project-grid">
                { for PROJECTS.iter().enumerate().map(|(i, p)| html! {
                    <ScrollReveal
                        key={p.name}
                        animation={RevealAnimation::ZoomIn}
                        delay_ms={(i as u32 % 3) * 120}
                    >
                        <div class="project-card">
                            <div
                                class="project-banner"
                                style={format!("background: {};", p.accent)}
                            ></div>
                            <div class="project-body">
                                <div class="category">{ p.category }</div>
                                <h3>{ p.name }</h3>
                                <p>{ p.result }</p>
                            </div>
                        </div>
                    </ScrollReveal>
                }) }
            </div>
        </div>
    }
}
