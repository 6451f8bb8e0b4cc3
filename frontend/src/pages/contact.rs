use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="text-page">
            <h1>{"Contact Us"}</h1>
            <p>{"Phone / WhatsApp: "}<a href="tel:+923001234567">{"+92 300 1234567"}</a></p>
            <p>{"Email: "}<a href="mailto:hello@pixbooth.pk">{"hello@pixbooth.pk"}</a></p>
            <p>{"Studio: Gulberg III, Lahore. Visits by appointment."}</p>
            <p>
                {"Ready to book? Pick a booth on the "}
                <Link<Route> to={Route::Booths}>{"booths page"}</Link<Route>>
                {" and send us an appointment request."}
            </p>
            <style>
                {r#"
                .text-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: rgba(255, 255, 255, 0.85);
                    padding: 6rem 2rem 4rem;
                    max-width: 800px;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .text-page h1 {
                    color: #f5b942;
                }
                .text-page a {
                    color: #f5b942;
                }
                "#}
            </style>
        </div>
    }
}
