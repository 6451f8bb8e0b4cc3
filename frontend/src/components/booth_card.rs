use log::warn;
use yew::prelude::*;

use crate::booking::booth::Booth;

#[derive(Properties, PartialEq)]
pub struct BoothCardProps {
    pub booth: Booth,
    pub on_book: Callback<String>,
}

#[function_component(BoothCard)]
pub fn booth_card(props: &BoothCardProps) -> Html {
    let booth = &props.booth;
    let identifier = booth.identifier();

    let onclick = {
        let on_book = props.on_book.clone();
        let identifier = identifier.clone();
        let title = booth.title;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if identifier.is_none() {
                warn!("Booth card '{}' has no booking name, opening with an empty one", title);
            }
            on_book.emit(identifier.clone().unwrap_or_default());
        })
    };

    html! {
        <div class="booth-card">
            <img src={booth.image} alt={booth.title} loading="lazy" />
            <div class="booth-card-body">
                <h3>{booth.title}</h3>
                <p>{booth.description}</p>
                <ul class="booth-features">
                    { for booth.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                </ul>
                <div class="booth-price">{booth.price}</div>
                <button
                    class="book-booth-btn"
                    data-booth={identifier.unwrap_or_default()}
                    onclick={onclick}
                >
                    {"Book This Booth"}
                </button>
            </div>
        </div>
    }
}
