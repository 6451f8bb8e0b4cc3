use yew::prelude::*;
use yew_router::prelude::*;

use crate::date::current_year;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-links">
                    <Link<Route> to={Route::Booths}>{"Booths"}</Link<Route>>
                    <Link<Route> to={Route::Gallery}>{"Gallery"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <p>
                    {"© "}<span id="currentYear">{current_year().to_string()}</span>{" PixBooth.pk. All rights reserved."}
                </p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111;
                    color: rgba(255, 255, 255, 0.7);
                    padding: 2rem;
                    text-align: center;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                .footer-links a {
                    color: #f5b942;
                    text-decoration: none;
                }
                "#}
            </style>
        </footer>
    }
}
