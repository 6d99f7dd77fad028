use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod carousel;
    pub mod footer;
    pub mod gravity_text;
    pub mod loading_overlay;
    pub mod motion;
    pub mod reveal;
    pub mod scroll_reveal;
    pub mod visibility;
}
mod pages {
    pub mod contact;
    pub mod courses;
    pub mod home;
    pub mod payment;
    pub mod portfolio;
    pub mod reviews;
    pub mod services;
}

use components::footer::Footer;
use components::loading_overlay::LoadingOverlay;
use pages::{
    contact::Contact, courses::Courses, home::Home, payment::Payment, portfolio::Portfolio,
    reviews::Reviews, services::Services,
};

/// How long the transition overlay stays up after a route change.
const OVERLAY_MS: u32 = 1500;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/courses")]
    Courses,
    #[at("/portfolio")]
    Portfolio,
    #[at("/reviews")]
    Reviews,
    #[at("/contact")]
    Contact,
    #[at("/payment")]
    Payment,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Courses => {
            info!("Rendering Courses page");
            html! { <Courses /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::Reviews => {
            info!("Rendering Reviews page");
            html! { <Reviews /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Payment => {
            info!("Rendering Payment page");
            html! { <Payment /> }
        }
        Route::NotFound => {
            info!("Rendering fallback page");
            html! {
                <div style="min-height: 60vh; display: flex; flex-direction: column; \
                            align-items: center; justify-content: center; gap: 1rem;">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back home"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(root) = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                    {
                        is_scrolled.set(root.scroll_top() > 40);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = window.as_ref() {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let nav_link = |route: Route, label: &str| {
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={route} classes="nav-link">{ label.to_string() }</Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::AGENCY_NAME }
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { nav_link(Route::Services, "Services") }
                    { nav_link(Route::Courses, "Courses") }
                    { nav_link(Route::Portfolio, "Portfolio") }
                    { nav_link(Route::Reviews, "Reviews") }
                    { nav_link(Route::Contact, "Contact") }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Payment} classes="nav-cta">{"Payment"}</Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Lives inside the router so it can watch route changes and flash the
/// loading overlay for `OVERLAY_MS` after each one.
#[function_component(AppShell)]
fn app_shell() -> Html {
    let route = use_route::<Route>();
    let overlay_visible = use_state(|| true);

    {
        let overlay_visible = overlay_visible.clone();
        use_effect_with_deps(
            move |_| {
                overlay_visible.set(true);
                let hide = {
                    let overlay_visible = overlay_visible.clone();
                    Timeout::new(OVERLAY_MS, move || overlay_visible.set(false))
                };
                move || drop(hide)
            },
            route,
        );
    }

    html! {
        <>
            <style>
                {r#"
                    * { margin: 0; padding: 0; box-sizing: border-box; }
                    body {
                        background: #0b0b14;
                        color: #e7e9f2;
                        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI',
                                     Roboto, sans-serif;
                    }
                    a { color: #7c5cff; }
                    .btn {
                        display: inline-block;
                        padding: 0.8rem 1.8rem;
                        border-radius: 999px;
                        border: none;
                        font: inherit;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .btn-primary { background: #7c5cff; color: #fff; }
                    .btn-primary:hover { background: #6a4ae6; }
                    .btn-primary:disabled { opacity: 0.6; cursor: default; }
                    .btn-ghost {
                        background: transparent;
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1rem 2rem;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(11, 11, 20, 0.92);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.4);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.3rem;
                        font-weight: 800;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-right { display: flex; align-items: center; gap: 1.5rem; }
                    .nav-link { color: #c5c9d8; text-decoration: none; }
                    .nav-link:hover { color: #fff; }
                    .nav-cta {
                        color: #fff;
                        text-decoration: none;
                        padding: 0.5rem 1.2rem;
                        border-radius: 999px;
                        background: #7c5cff;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 820px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem 2rem;
                            background: rgba(11, 11, 20, 0.98);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
            if *overlay_visible {
                <LoadingOverlay />
            }
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
