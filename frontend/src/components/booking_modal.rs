use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::booking::form::Field;
use crate::booking::gateway::BookingGateway;
use crate::booking::modal::{ModalAction, ModalState};
use crate::date::earliest_booking_date;

const SUBMIT_LABEL: &str = "Request Appointment";

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub state: ModalState,
    pub on_action: Callback<ModalAction>,
}

/// Blocking browser prompt.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.alert_with_message(message);
        }
        None => warn!("No window to show alert: {}", message),
    }
}

fn set_scroll_lock(locked: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let overflow = if locked { "hidden" } else { "auto" };
        if body.style().set_property("overflow", overflow).is_err() {
            warn!("Failed to set body overflow to {}", overflow);
        }
    } else {
        warn!("No document body, scroll lock skipped");
    }
}

/// Locks scrolling while the modal is visible. A hidden modal leaves the
/// body alone; the returned teardown unlocks only what was locked.
fn sync_scroll_lock<F>(visible: bool, set_lock: F) -> impl FnOnce()
where
    F: Fn(bool) + 'static,
{
    if visible {
        set_lock(true);
    }
    move || {
        if visible {
            set_lock(false);
        }
    }
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let state = &props.state;
    let visible = state.is_visible();
    let submitting = state.is_submitting();
    let overlay_ref = use_node_ref();
    let min_date = use_memo(|_| earliest_booking_date(), ());

    use_effect_with_deps(
        |visible| sync_scroll_lock(*visible, set_scroll_lock),
        visible,
    );

    {
        let on_action = props.on_action.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_action.emit(ModalAction::Close);
            }
        });
    }

    let on_close = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ModalAction::Close))
    };

    let on_overlay_click = {
        let on_action = props.on_action.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (e.target_dyn_into::<Node>(), overlay_ref.get()) {
                (Some(target), Some(overlay)) => target == overlay,
                _ => false,
            };
            on_action.emit(ModalAction::BackdropClicked { on_backdrop });
        })
    };

    let on_input = |field: Field| {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(ModalAction::Edit(field, input.value()));
        })
    };

    let on_notes = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_action.emit(ModalAction::Edit(Field::Notes, input.value()));
        })
    };

    let onsubmit = {
        let on_action = props.on_action.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submitting {
                return;
            }

            let attempt = match state.begin_submit() {
                Ok(attempt) => attempt,
                Err(err) => {
                    warn!("Booking form incomplete, missing {:?}", err.missing);
                    alert(&err.to_string());
                    return;
                }
            };

            on_action.emit(ModalAction::Submit);
            let on_action = on_action.clone();
            spawn_local(async move {
                let gateway = BookingGateway::from_config();
                match gateway.submit(&attempt).await {
                    Ok(()) => {
                        alert(&attempt.confirmation_message());
                        info!("Booking request sent for {}", attempt.booth_name);
                        gloo_console::log!(
                            "Appointment request:",
                            serde_json::to_string(&attempt).unwrap_or_default()
                        );
                        on_action.emit(ModalAction::SubmitSucceeded);
                    }
                    Err(err) => {
                        error!("Booking request failed: {}", err);
                        on_action.emit(ModalAction::SubmitFailed(err.to_string()));
                    }
                }
            });
        })
    };

    let text_input = |field: Field, kind: &'static str, placeholder: &'static str| {
        html! {
            <div class="form-group">
                <label for={field.name()}>{field.label()}{" *"}</label>
                <input
                    type={kind}
                    id={field.name()}
                    name={field.name()}
                    placeholder={placeholder}
                    value={state.form.get(field).to_string()}
                    disabled={submitting}
                    oninput={on_input(field)}
                />
            </div>
        }
    };

    html! {
        <div
            id="appointmentModal"
            class="modal-overlay"
            ref={overlay_ref}
            style={if visible { "display: flex;" } else { "display: none;" }}
            onclick={on_overlay_click}
        >
            <div class="modal">
                <button class="close-modal" onclick={on_close} disabled={submitting}>{"×"}</button>
                <h2>{"Book an Appointment"}</h2>
                if !state.booth_name.is_empty() {
                    <p class="modal-booth">{"Booth: "}<strong>{state.booth_name.clone()}</strong></p>
                }
                <form id="appointmentForm" onsubmit={onsubmit}>
                    <input type="hidden" id="boothName" name="boothName" value={state.booth_name.clone()} />
                    { text_input(Field::Name, "text", "Your full name") }
                    { text_input(Field::Email, "email", "you@example.com") }
                    { text_input(Field::Phone, "tel", "03XX XXXXXXX") }
                    <div class="form-group">
                        <label for="eventDate">{Field::EventDate.label()}{" *"}</label>
                        <input
                            type="date"
                            id="eventDate"
                            name="eventDate"
                            min={(*min_date).clone()}
                            value={state.form.event_date.clone()}
                            disabled={submitting}
                            oninput={on_input(Field::EventDate)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="notes">{Field::Notes.label()}</label>
                        <textarea
                            id="notes"
                            name="notes"
                            rows="3"
                            placeholder="Venue, guest count, anything we should know"
                            value={state.form.notes.clone()}
                            disabled={submitting}
                            oninput={on_notes}
                        />
                    </div>
                    if let Some(message) = &state.error {
                        <div class="form-error">{message.clone()}</div>
                    }
                    <button type="submit" class="submit-btn" disabled={submitting}>
                        if submitting {
                            <><i class="fas fa-spinner fa-spin"></i>{" Sending..."}</>
                        } else {
                            {SUBMIT_LABEL}
                        }
                    </button>
                </form>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    justify-content: center;
                    align-items: center;
                    z-index: 1000;
                    padding: 1rem;
                }
                .modal {
                    position: relative;
                    background: #1e1e1e;
                    color: #fff;
                    border-radius: 12px;
                    padding: 2rem;
                    width: 100%;
                    max-width: 520px;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .close-modal {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .modal-booth {
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 1rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                    margin-bottom: 1rem;
                }
                .form-group input,
                .form-group textarea {
                    padding: 0.6rem 0.75rem;
                    border-radius: 6px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: #2a2a2a;
                    color: #fff;
                }
                .form-error {
                    background: rgba(255, 80, 80, 0.15);
                    border: 1px solid rgba(255, 80, 80, 0.5);
                    border-radius: 6px;
                    padding: 0.75rem;
                    margin-bottom: 1rem;
                }
                .submit-btn {
                    width: 100%;
                    padding: 0.8rem;
                    border: none;
                    border-radius: 6px;
                    background: #f5b942;
                    color: #111;
                    font-weight: 600;
                    cursor: pointer;
                }
                .submit-btn:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                "#}
            </style>
        </div>
    }
}
