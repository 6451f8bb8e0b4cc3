use yew::prelude::*;

use crate::booking::booth::BOOTHS;
use crate::booking::modal::{ModalAction, ModalState};
use crate::components::booking_modal::BookingModal;
use crate::components::booth_card::BoothCard;

#[function_component(Booths)]
pub fn booths() -> Html {
    let modal = use_reducer_eq(ModalState::default);

    let on_action = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |action: ModalAction| dispatcher.dispatch(action))
    };

    let on_book = {
        let on_action = on_action.clone();
        Callback::from(move |booth_name: String| on_action.emit(ModalAction::Open(booth_name)))
    };

    html! {
        <div class="booths-page">
            <section class="booths-hero">
                <h1>{"Our Booths"}</h1>
                <p>{"Pick the booth that fits your event. Every package includes setup, an attendant and on-site printing or sharing."}</p>
            </section>
            <section class="booth-grid">
                { for BOOTHS.iter().map(|booth| html! {
                    <BoothCard key={booth.title} booth={booth.clone()} on_book={on_book.clone()} />
                }) }
            </section>
            <BookingModal state={(*modal).clone()} on_action={on_action} />
            <style>
                {r#"
                .booths-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #fff;
                    padding: 6rem 2rem 4rem;
                }
                .booths-hero {
                    text-align: center;
                    max-width: 720px;
                    margin: 0 auto 3rem;
                }
                .booths-hero h1 {
                    font-size: 2.75rem;
                    margin-bottom: 1rem;
                    color: #f5b942;
                }
                .booth-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .booth-card {
                    background: rgba(30, 30, 30, 0.8);
                    border: 1px solid rgba(245, 185, 66, 0.2);
                    border-radius: 12px;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                }
                .booth-card img {
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                }
                .booth-card-body {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    flex: 1;
                }
                .booth-features {
                    padding-left: 1.2rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .booth-price {
                    font-weight: 600;
                    color: #f5b942;
                    margin-top: auto;
                }
                .book-booth-btn {
                    padding: 0.75rem 1rem;
                    border: none;
                    border-radius: 6px;
                    background: #f5b942;
                    color: #111;
                    font-weight: 600;
                    cursor: pointer;
                }
                .book-booth-btn:hover {
                    background: #ffd27a;
                }
                "#}
            </style>
        </div>
    }
}
