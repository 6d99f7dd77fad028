use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gravity_text::GravityText;
use crate::components::reveal::RevealAnimation;
use crate::components::scroll_reveal::ScrollReveal;
use crate::Route;

struct Service {
    name: &'static str,
    description: &'static str,
    deliverables: [&'static str; 3],
    price_from: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        name: "Websites & Landing Pages",
        description: "Marketing sites that load fast, rank well and make the next step obvious.",
        deliverables: ["Design + build", "SEO-ready structure", "Analytics setup"],
        price_from: "from €1 200",
    },
    Service {
        name: "E-commerce",
        description: "Stores that are easy to manage and easier to buy from.",
        deliverables: ["Catalog + checkout", "Payment integration", "Order notifications"],
        price_from: "from €2 800",
    },
    Service {
        name: "Brand Identity",
        description: "Logo, typography and a design system your whole team can apply.",
        deliverables: ["Logo suite", "Brand guidelines", "Social templates"],
        price_from: "from €900",
    },
    Service {
        name: "Growth & Maintenance",
        description: "Monthly care: content updates, performance checks and campaigns.",
        deliverables: ["Monthly updates", "Performance reports", "Ad campaign support"],
        price_from: "from €350/mo",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <style>
                {r#"
                    .services-page { max-width: 1100px; margin: 0 auto; padding: 7rem 2rem 4rem; }
                    .services-page .page-title { text-align: center; font-size: 2.6rem; }
                    .services-page .page-lead {
                        text-align: center;
                        color: #9aa0b4;
                        max-width: 540px;
                        margin: 1rem auto 3.5rem;
                        line-height: 1.6;
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                    }
                    .service-card h3 { color: #fff; margin-bottom: 0.5rem; }
                    .service-card p { color: #9aa0b4; line-height: 1.6; }
                    .service-card ul { margin: 1.25rem 0; padding-left: 1.1rem; color: #c5c9d8; }
                    .service-card li { margin-bottom: 0.4rem; }
                    .service-card .price {
                        margin-top: auto;
                        font-weight: 700;
                        color: #7c5cff;
                    }
                    .services-cta { text-align: center; margin-top: 3.5rem; }
                "#}
            </style>

            <h1 class="page-title">
                <GravityText text="Services" />
            </h1>
            <p class="page-lead">
                {"Pick a package or mix and match — every engagement starts with a free \
                  30-minute call to scope what you actually need."}
            </p>

            <div class="service-grid">
                { for SERVICES.iter().enumerate().map(|(i, s)| {
                    let animation = if i % 2 == 0 {
                        RevealAnimation::FadeRight
                    } else {
                        RevealAnimation::FadeLeft
                    };
                    html! {
                        <ScrollReveal key={s.name} animation={animation} delay_ms={(i as u32) * 100}>
                            <div class="service-card">
                                <h3>{ s.name }</h3>
                                <p>{ s.description }</p>
                                <ul>
                                    { for s.deliverables.iter().map(|d| html! { <li>{ d }</li> }) }
                                </ul>
                                <div class="price">{ s.price_from }</div>
                            </div>
                        </ScrollReveal>
                    }
                }) }
            </div>

            <ScrollReveal animation={RevealAnimation::ZoomOut}>
                <div class="services-cta">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">
                        {"Request a quote"}
                    </Link<Route>>
                </div>
            </ScrollReveal>
        </div>
    }
}
