use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #0b0b14;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        padding: 3rem 2rem 2rem;
                        color: #9aa0b4;
                    }
                    .footer-grid {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                    }
                    .footer-brand { color: #fff; font-size: 1.3rem; font-weight: 700; }
                    .footer-col h4 { color: #fff; margin-bottom: 0.75rem; }
                    .footer-col a {
                        display: block;
                        color: #9aa0b4;
                        text-decoration: none;
                        margin-bottom: 0.5rem;
                    }
                    .footer-col a:hover { color: #7c5cff; }
                    .footer-bottom {
                        max-width: 1100px;
                        margin: 2rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        font-size: 0.85rem;
                        text-align: center;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div class="footer-col">
                    <div class="footer-brand">{ config::AGENCY_NAME }</div>
                    <p>{"Web experiences, branding and digital courses for growing businesses."}</p>
                </div>
                <div class="footer-col">
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Courses}>{"Courses"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>>
                    <Link<Route> to={Route::Reviews}>{"Reviews"}</Link<Route>>
                </div>
                <div class="footer-col">
                    <h4>{"Get in touch"}</h4>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                    <Link<Route> to={Route::Payment}>{"Payment"}</Link<Route>>
                    <a href={config::whatsapp_link("Hi! I found you through the website.")}>
                        {"WhatsApp"}
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                { format!("© 2026 {}. All rights reserved.", config::AGENCY_NAME) }
            </div>
        </footer>
    }
}
