use yew::prelude::*;

const PHOTOS: &[(&str, &str)] = &[
    ("/assets/gallery/wedding.jpg", "Wedding reception at a Lahore marquee"),
    ("/assets/gallery/mehndi.jpg", "Mehndi night with the classic booth"),
    ("/assets/gallery/corporate.jpg", "Corporate launch with branded prints"),
    ("/assets/gallery/birthday.jpg", "Birthday party at the GIF booth"),
    ("/assets/gallery/360.jpg", "Slow-motion clips on the 360° platform"),
    ("/assets/gallery/mirror.jpg", "Mirror booth signatures"),
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <div class="gallery-page">
            <h1>{"Gallery"}</h1>
            <div class="gallery-grid">
                { for PHOTOS.iter().map(|(src, caption)| html! {
                    <figure>
                        <img src={*src} alt={*caption} loading="lazy" />
                        <figcaption>{*caption}</figcaption>
                    </figure>
                }) }
            </div>
            <style>
                {r#"
                .gallery-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #fff;
                    padding: 6rem 2rem 4rem;
                    text-align: center;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    max-width: 1200px;
                    margin: 2rem auto 0;
                }
                .gallery-grid img {
                    width: 100%;
                    height: 220px;
                    object-fit: cover;
                    border-radius: 8px;
                }
                .gallery-grid figcaption {
                    color: rgba(255, 255, 255, 0.7);
                    margin-top: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}
