use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::behavior::form::{ContactFormState, ContactFormValues, Field, SERVICES};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_submit: Callback<ContactFormValues>,
    pub on_return_home: Callback<()>,
}

fn field_error(state: &ContactFormState, field: Field) -> Html {
    match state.error(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_state(ContactFormState::default);
    let show_success = use_state_eq(|| false);

    let update = {
        let form = form.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*form).clone();
            next.update(field, value);
            form.set(next);
        })
    };

    let on_input = |field: Field| {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit((field, input.value()));
        })
    };

    let on_service = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update.emit((Field::Service, select.value()));
        })
    };

    let on_message = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update.emit((Field::Message, area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let show_success = show_success.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let submitted = next.submit();
            form.set(next);
            if let Some(values) = submitted {
                on_submit.emit(values);
                show_success.set(true);
            }
        })
    };

    let return_home = {
        let show_success = show_success.clone();
        let on_return_home = props.on_return_home.clone();
        Callback::from(move |_: MouseEvent| {
            show_success.set(false);
            on_return_home.emit(());
        })
    };

    let values = &form.values;

    html! {
        <>
            {
                if *show_success {
                    html! {
                        <div class="modal-backdrop">
                            <div class="modal success-modal">
                                <div class="success-icon">{"✓"}</div>
                                <h3>{"Vielen Dank!"}</h3>
                                <p>{"Wir haben Ihre Nachricht erhalten und melden uns in Kürze mit Ihrer individuellen Demo."}</p>
                                <button class="cta-button full" onclick={return_home}>{"Zur Startseite"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="contact-form-card">
                <h2>{"Kontakt aufnehmen"}</h2>
                <form onsubmit={onsubmit} novalidate={true}>
                    <div class="form-field">
                        <label for="name">{"Name"}</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Ihr Name"
                            value={values.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                        { field_error(&form, Field::Name) }
                    </div>
                    <div class="form-field">
                        <label for="email">{"E-Mail"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="ihre@firma.ch"
                            value={values.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                        { field_error(&form, Field::Email) }
                    </div>
                    <div class="form-field">
                        <label for="company">{"Unternehmen"}</label>
                        <input
                            id="company"
                            type="text"
                            placeholder="Ihr Unternehmen"
                            value={values.company.clone()}
                            oninput={on_input(Field::Company)}
                        />
                        { field_error(&form, Field::Company) }
                    </div>
                    <div class="form-field">
                        <label for="service">{"Leistung"}</label>
                        <select id="service" onchange={on_service}>
                            <option value="" selected={values.service.is_empty()}>{"Leistung auswählen..."}</option>
                            { for SERVICES.iter().map(|service| html! {
                                <option value={*service} selected={values.service == *service}>{*service}</option>
                            }) }
                        </select>
                        { field_error(&form, Field::Service) }
                    </div>
                    <div class="form-field">
                        <label for="message">{"Nachricht"}</label>
                        <textarea
                            id="message"
                            placeholder="Wie können wir Ihnen helfen?"
                            value={values.message.clone()}
                            oninput={on_message}
                        />
                    </div>
                    <button type="submit" class="cta-button full">{"Nachricht senden"}</button>
                </form>
            </div>
        </>
    }
}
