use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::booth::BOOTHS;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <section class="hero">
                <h1>{"Capture Every Moment"}</h1>
                <p>
                    {"Photo booths for weddings, mehndis, corporate events and birthdays across Pakistan. Instant prints, slow-motion video and memories your guests take home."}
                </p>
                <Link<Route> to={Route::Booths} classes="cta-button">
                    <span>{"Browse Booths"}</span>
                    <i class="arrow">{"→"}</i>
                </Link<Route>>
            </section>

            <section class="highlights">
                <div class="highlight">
                    <h3>{format!("{} booth styles", BOOTHS.len())}</h3>
                    <p>{"From classic enclosed booths to 360° video platforms."}</p>
                </div>
                <div class="highlight">
                    <h3>{"Setup included"}</h3>
                    <p>{"Our team arrives early, sets up and stays until the last guest."}</p>
                </div>
                <div class="highlight">
                    <h3>{"Custom branding"}</h3>
                    <p>{"Print templates and overlays designed around your event."}</p>
                </div>
            </section>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #ffffff;
                    overflow-x: hidden;
                }
                .hero {
                    padding: 8rem 2rem 5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 1.5rem;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    background: linear-gradient(45deg, #fff, #f5b942);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero p {
                    max-width: 640px;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.15rem;
                }
                .cta-button {
                    display: inline-flex;
                    gap: 0.5rem;
                    padding: 0.9rem 1.8rem;
                    border-radius: 8px;
                    background: #f5b942;
                    color: #111;
                    font-weight: 600;
                    text-decoration: none;
                }
                .highlights {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem 5rem;
                }
                .highlight {
                    background: rgba(30, 30, 30, 0.7);
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
