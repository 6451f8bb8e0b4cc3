use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="text-page">
            <h1>{"About PixBooth.pk"}</h1>
            <p>{"PixBooth.pk started with a single booth at a family wedding. Today we run a fleet of booths for events of every size, from intimate dholkis to product launches with thousands of guests."}</p>
            <p>{"Every booking comes with a trained attendant, props, and a digital gallery your guests can download after the event."}</p>
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
                    margin-bottom: 1.5rem;
                }
                .text-page p {
                    margin-bottom: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
