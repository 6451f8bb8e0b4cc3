use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod date;
mod nav;
mod booking {
    pub mod booth;
    pub mod form;
    pub mod gateway;
    pub mod modal;
}
mod components {
    pub mod booking_modal;
    pub mod booth_card;
    pub mod footer;
}
mod pages {
    pub mod about;
    pub mod booths;
    pub mod contact;
    pub mod gallery;
    pub mod home;
}

use components::footer::Footer;
use nav::{active_link, nav_links, page_file_name, NavAction, NavState};
use pages::{
    about::About,
    booths::Booths,
    contact::Contact,
    gallery::Gallery,
    home::Home,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/booths.html")]
    Booths,
    #[at("/gallery.html")]
    Gallery,
    #[at("/about.html")]
    About,
    #[at("/contact.html")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Index => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Booths => {
            info!("Rendering Booths page");
            html! { <Booths /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="text-page">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer_eq(NavState::default);
    let location = use_location();

    let current_page = location
        .map(|location| page_file_name(location.path()))
        .unwrap_or_default();
    let links = nav_links();
    let active = active_link(&current_page, links.iter().map(|link| link.href()));

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(NavAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(NavAction::Collapse);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"PixBooth.pk"}
                </Link<Route>>

                <button class="hamburger" aria-label="Toggle navigation" onclick={toggle_menu}>
                    {menu.glyph()}
                </button>
                <div class={classes!("nav-links", menu.is_open.then(|| "active"))}>
                    { for links.into_iter().enumerate().map(|(i, link)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route>
                                to={link.route}
                                classes={classes!("nav-link", (active == Some(i)).then(|| "active"))}
                            >
                                {link.label}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(17, 17, 17, 0.95);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #f5b942;
                    font-weight: 700;
                    font-size: 1.4rem;
                    text-decoration: none;
                }
                .hamburger {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.6rem;
                    cursor: pointer;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }
                .nav-link.active {
                    color: #f5b942;
                    border-bottom: 2px solid #f5b942;
                }
                @media (max-width: 768px) {
                    .hamburger {
                        display: block;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem 2rem;
                        background: #111;
                    }
                    .nav-links.active {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("PixBooth.pk - page loaded");
    yew::Renderer::<App>::new().render();
}
