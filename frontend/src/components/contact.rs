use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONTACT_SUCCESS_RESET_MS;
use crate::contact::form::{ContactForm, Field, FieldError};
use crate::contact::submit::{submit, ContactError};
use crate::data::{PERSONAL, PROJECT_TYPES};
use crate::i18n::use_language;
use crate::scroll::registry::SectionId;

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Editing,
    Submitting,
    Sent,
    Failed(String),
}

/// Name and value of the form control that fired `e`.
fn field_value(e: &Event) -> Option<(Field, String)> {
    let target: EventTarget = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Field::from_name(&input.name()).map(|f| (f, input.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Field::from_name(&area.name()).map(|f| (f, area.value()));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Field::from_name(&select.name()).map(|f| (f, select.value()));
    }
    None
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let language = use_language();
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let status = use_state(|| Status::Editing);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            if let Some((field, value)) = field_value(&e) {
                let mut next = (*form).clone();
                next.set(field, value);
                if errors.iter().any(|err| err.field == field) {
                    errors.set(errors.iter().copied().filter(|err| err.field != field).collect());
                }
                form.set(next);
            }
        })
    };
    let on_input = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| on_change.emit(e.into()))
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Submitting {
                return;
            }
            if let Err(field_errors) = form.validate() {
                errors.set(field_errors);
                return;
            }
            errors.set(Vec::new());
            status.set(Status::Submitting);

            let form = form.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                match submit(&form).await {
                    Ok(()) => {
                        log::info!("Contact form submitted");
                        form.set(ContactForm::default());
                        status.set(Status::Sent);
                        let status = status.clone();
                        *reset_timer.borrow_mut() = Some(Timeout::new(CONTACT_SUCCESS_RESET_MS, move || {
                            status.set(Status::Editing);
                        }));
                    }
                    Err(ContactError::Validation(_)) => status.set(Status::Editing),
                    Err(e) => {
                        gloo_console::error!("Failed to submit contact form:", e.to_string());
                        status.set(Status::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    let send_another = {
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |_: MouseEvent| {
            reset_timer.borrow_mut().take();
            status.set(Status::Editing);
        })
    };

    let error_for = |field: Field| -> Html {
        match errors.iter().find(|err| err.field == field) {
            Some(err) => html! { <span class="field-error">{ language.t(err.message_key) }</span> },
            None => html! {},
        }
    };
    let invalid = |field: Field| errors.iter().any(|err| err.field == field).then(|| "invalid");

    let contact_info = html! {
        <div class="contact-info">
            <a class="info-card" href={format!("tel:{}", PERSONAL.phone)}>
                <span class="info-icon">{"📞"}</span>
                <div>
                    <h4>{ language.t("contact.info.phone") }</h4>
                    <p dir="ltr">{ PERSONAL.phone }</p>
                </div>
            </a>
            <a class="info-card" href={format!("mailto:{}", PERSONAL.email)}>
                <span class="info-icon">{"✉️"}</span>
                <div>
                    <h4>{ language.t("contact.info.email") }</h4>
                    <p>{ PERSONAL.email }</p>
                </div>
            </a>
            <div class="info-card">
                <span class="info-icon">{"📍"}</span>
                <div>
                    <h4>{ language.t("contact.info.location") }</h4>
                    <p>{ PERSONAL.location.get(language.lang) }</p>
                </div>
            </div>
            <div class="info-card">
                <span class="info-icon">{"⏱"}</span>
                <div>
                    <h4>{ language.t("contact.info.response") }</h4>
                    <p>{ language.t("contact.info.responseText") }</p>
                </div>
            </div>
        </div>
    };

    let body = if *status == Status::Sent {
        html! {
            <div class="contact-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{ language.t("contact.success.title") }</h3>
                <p>{ language.t("contact.success.text") }</p>
                <button class="submit-button" onclick={send_another}>
                    { language.t("contact.success.again") }
                </button>
            </div>
        }
    } else {
        let submitting = *status == Status::Submitting;
        html! {
            <div class="contact-grid">
                { contact_info }
                <form class="contact-form" onsubmit={on_submit} novalidate=true>
                    <div class="form-row">
                        <label>
                            { format!("{} *", language.t("contact.form.name")) }
                            <input
                                type="text"
                                name="name"
                                class={classes!(invalid(Field::Name))}
                                value={form.name.clone()}
                                placeholder={language.t("contact.form.name").to_string()}
                                oninput={on_input.clone()}
                            />
                            { error_for(Field::Name) }
                        </label>
                        <label>
                            { format!("{} *", language.t("contact.form.email")) }
                            <input
                                type="email"
                                name="email"
                                dir="ltr"
                                class={classes!(invalid(Field::Email))}
                                value={form.email.clone()}
                                placeholder={language.t("contact.form.email").to_string()}
                                oninput={on_input.clone()}
                            />
                            { error_for(Field::Email) }
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            { language.t("contact.form.phone") }
                            <input
                                type="tel"
                                name="phone"
                                dir="ltr"
                                class={classes!(invalid(Field::Phone))}
                                value={form.phone.clone()}
                                placeholder={language.t("contact.form.phone").to_string()}
                                oninput={on_input.clone()}
                            />
                            { error_for(Field::Phone) }
                        </label>
                        <label>
                            { language.t("contact.form.project") }
                            <select name="project" onchange={on_change.clone()}>
                                <option value="" selected={form.project.is_empty()}>
                                    { language.t("contact.form.selectProject") }
                                </option>
                                { for PROJECT_TYPES.iter().map(|&kind| {
                                    let label = format!("contact.projectTypes.{}", kind);
                                    html! {
                                        <option value={kind} selected={form.project == kind}>
                                            { language.t(&label).to_string() }
                                        </option>
                                    }
                                }) }
                            </select>
                        </label>
                    </div>
                    <label>
                        { format!("{} *", language.t("contact.form.message")) }
                        <textarea
                            name="message"
                            rows="6"
                            class={classes!(invalid(Field::Message))}
                            value={form.message.clone()}
                            placeholder={language.t("contact.form.message").to_string()}
                            oninput={on_input}
                        />
                        { error_for(Field::Message) }
                    </label>
                    {
                        if let Status::Failed(reason) = &*status {
                            html! {
                                <div class="submit-error" title={reason.clone()}>
                                    <p>{ language.t("contact.error.title") }</p>
                                    <a href={form.mailto_link(PERSONAL.email)}>
                                        { language.t("contact.error.mailto") }
                                    </a>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class="submit-button" disabled={submitting}>
                        {
                            if submitting {
                                html! { <><span class="spinner"></span>{ language.t("contact.form.sending") }</> }
                            } else {
                                html! { { language.t("contact.form.send") } }
                            }
                        }
                    </button>
                </form>
            </div>
        }
    };

    html! {
        <section id={SectionId::Contact.as_str()} class="page-section contact-section">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                    }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .info-card {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    a.info-card:hover {
                        border-color: rgba(6, 182, 212, 0.3);
                        transform: scale(1.03);
                    }
                    .info-icon {
                        font-size: 1.5rem;
                    }
                    .info-card h4 {
                        color: #fff;
                        margin: 0 0 0.25rem;
                    }
                    .info-card p {
                        color: #9ca3af;
                        margin: 0;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        color: #fff;
                        font-weight: 500;
                    }
                    .contact-form input, .contact-form select, .contact-form textarea {
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        font: inherit;
                    }
                    .contact-form select option {
                        background: #111827;
                    }
                    .contact-form .invalid {
                        border-color: #f87171;
                    }
                    .field-error {
                        color: #f87171;
                        font-size: 0.85rem;
                        font-weight: 400;
                    }
                    .submit-error {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(248, 113, 113, 0.1);
                        color: #fca5a5;
                    }
                    .submit-error a {
                        color: #22d3ee;
                    }
                    .submit-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: linear-gradient(to right, #06b6d4, #2563eb);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .spinner {
                        width: 18px;
                        height: 18px;
                        border: 2px solid #fff;
                        border-top-color: transparent;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .contact-success {
                        max-width: 640px;
                        margin: 0 auto;
                        padding: 3rem;
                        text-align: center;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .success-icon {
                        width: 80px;
                        height: 80px;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                        color: #fff;
                        background: linear-gradient(to right, #22c55e, #059669);
                    }
                    .contact-success h3 {
                        color: #fff;
                        font-size: 1.9rem;
                    }
                    .contact-success p {
                        color: #9ca3af;
                        margin-bottom: 2rem;
                    }
                    .contact-success .submit-button {
                        margin: 0 auto;
                        border-radius: 9999px;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ language.t("contact.title") }</h2>
                    <p>{ language.t("contact.subtitle") }</p>
                </div>
                { body }
            </div>
        </section>
    }
}
