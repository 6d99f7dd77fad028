use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::gravity_text::GravityText;
use crate::components::reveal::RevealAnimation;
use crate::components::scroll_reveal::ScrollReveal;

struct Review {
    author: &'static str,
    company: &'static str,
    quote: &'static str,
    stars: u8,
}

const REVIEWS: [Review; 5] = [
    Review {
        author: "Maija K.",
        company: "Café Aurora",
        quote: "They rebuilt our site in three weeks and reservations doubled the \
                following month. Communication was effortless the whole way.",
        stars: 5,
    },
    Review {
        author: "Jonas B.",
        company: "Harbor & Pine",
        quote: "The only agency we've worked with that treated our deadlines as \
                seriously as we do.",
        stars: 5,
    },
    Review {
        author: "Sofia R.",
        company: "Lumo Fitness",
        quote: "Brand, site, booking flow — one team, one invoice, zero surprises.",
        stars: 5,
    },
    Review {
        author: "Peter H.",
        company: "Nordic Legal",
        quote: "Accessibility was non-negotiable for us and they delivered WCAG AA \
                without being asked twice.",
        stars: 4,
    },
    Review {
        author: "Anna L.",
        company: "Atlas Tours",
        quote: "Their course taught our marketing team to run the site themselves. \
                Best money we spent all year.",
        stars: 5,
    },
];

fn stars(count: u8) -> String {
    let mut s = String::new();
    for i in 0..5 {
        s.push(if i < count { '★' } else { '☆' });
    }
    s
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let slides = REVIEWS
        .iter()
        .map(|r| {
            html! {
                <div class="review-slide">
                    <div class="review-stars">{ stars(r.stars) }</div>
                    <blockquote>{ r.quote }</blockquote>
                    <div class="review-author">
                        { r.author }
                        <span class="review-company">{ format!(" — {}", r.company) }</span>
                    </div>
                </div>
            }
        })
        .collect::<Vec<Html>>();

    html! {
        <div class="reviews-page">
            <style>
                {r#"
                    .reviews-page { max-width: 800px; margin: 0 auto; padding: 7rem 2rem 4rem; }
                    .reviews-page .page-title { text-align: center; font-size: 2.6rem; }
                    .reviews-page .page-lead {
                        text-align: center;
                        color: #9aa0b4;
                        margin: 1rem auto 3rem;
                        line-height: 1.6;
                    }
                    .review-slide {
                        text-align: center;
                        padding: 2rem 2.5rem;
                    }
                    .review-stars { color: #ffd25c; font-size: 1.2rem; letter-spacing: 0.2em; }
                    .review-slide blockquote {
                        font-size: 1.25rem;
                        line-height: 1.7;
                        color: #e7e9f2;
                        margin: 1.25rem 0;
                    }
                    .review-author { color: #fff; font-weight: 700; }
                    .review-company { color: #9aa0b4; font-weight: 400; }
                "#}
            </style>

            <h1 class="page-title">
                <GravityText text="Reviews" />
            </h1>
            <p class="page-lead">{"What clients say after the invoices are paid."}</p>

            <ScrollReveal animation={RevealAnimation::FadeUp}>
                <Carousel slides={slides} />
            </ScrollReveal>
        </div>
    }
}
