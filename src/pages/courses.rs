use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gravity_text::GravityText;
use crate::components::reveal::RevealAnimation;
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::Route;

pub struct Course {
    pub name: &'static str,
    pub summary: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub price_eur: u32,
}

pub const COURSES: [Course; 4] = [
    Course {
        name: "Web Fundamentals",
        summary: "HTML, CSS and enough JavaScript to ship and maintain your own site.",
        duration: "4 weeks",
        level: "Beginner",
        price_eur: 290,
    },
    Course {
        name: "Design for Non-Designers",
        summary: "Layout, typography and color theory applied to real marketing pages.",
        duration: "3 weeks",
        level: "Beginner",
        price_eur: 240,
    },
    Course {
        name: "E-commerce Operations",
        summary: "Run a store end to end: catalog, fulfilment, analytics, campaigns.",
        duration: "5 weeks",
        level: "Intermediate",
        price_eur: 390,
    },
    Course {
        name: "Content & SEO",
        summary: "A repeatable publishing system that compounds search traffic.",
        duration: "4 weeks",
        level: "Intermediate",
        price_eur: 320,
    },
];

#[function_component(Courses)]
pub fn courses() -> Html {
    html! {
        <div class="courses-page">
            <style>
                {r#"
                    .courses-page { max-width: 1100px; margin: 0 auto; padding: 7rem 2rem 4rem; }
                    .courses-page .page-title { text-align: center; font-size: 2.6rem; }
                    .courses-page .page-lead {
                        text-align: center;
                        color: #9aa0b4;
                        max-width: 540px;
                        margin: 1rem auto 3.5rem;
                        line-height: 1.6;
                    }
                    .course-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .course-card {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                    }
                    .course-card h3 { color: #fff; margin-bottom: 0.5rem; }
                    .course-card p { color: #9aa0b4; line-height: 1.6; flex: 1; }
                    .course-meta {
                        display: flex;
                        gap: 0.5rem;
                        flex-wrap: wrap;
                        margin: 1rem 0;
                    }
                    .course-meta span {
                        font-size: 0.8rem;
                        padding: 0.25rem 0.7rem;
                        border-radius: 999px;
                        background: rgba(124, 92, 255, 0.15);
                        color: #b9a6ff;
                    }
                    .course-foot {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: 0.5rem;
                    }
                    .course-foot .price { font-size: 1.3rem; font-weight: 800; color: #fff; }
                "#}
            </style>

            <h1 class="page-title">
                <GravityText text="Courses" />
            </h1>
            <p class="page-lead">
                {"Small groups, live sessions, real projects. Enroll over WhatsApp and \
                  pay whichever way suits you."}
            </p>

            <div class="course-grid">
                { for COURSES.iter().enumerate().map(|(i, c)| {
                    let enroll = config::whatsapp_link(&format!(
                        "Hi! I'd like to enroll in the \"{}\" course.",
                        c.name
                    ));
                    html! {
                        <ScrollReveal
                            key={c.name}
                            animation={RevealAnimation::FadeUp}
                            delay_ms={(i as u32) * 120}
                        >
                            <div class="course-card">
                                <h3>{ c.name }</h3>
                                <div class="course-meta">
                                    <span>{ c.duration }</span>
                                    <span>{ c.level }</span>
                                </div>
                                <p>{ c.summary }</p>
                                <div class="course-foot">
                                    <div class="price">{ format!("€{}", c.price_eur) }</div>
                                    <a class="btn btn-primary" href={enroll}>{"Enroll"}</a>
                                </div>
                            </div>
                        </ScrollReveal>
                    }
                }) }
            </div>

            <ScrollReveal animation={RevealAnimation::Flip}>
                <p class="page-lead" style="margin-top: 3.5rem;">
                    {"Prefer to pay online? Use the "}
                    <Link<Route> to={Route::Payment}>{"payment page"}</Link<Route>>
                    {" after you've reserved a seat."}
                </p>
            </ScrollReveal>
        </div>
    }
}
