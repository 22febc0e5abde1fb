use crate::domain::contact::api::FormRelayTransport;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::SectionHeader;
use crate::shared::config::use_site_config;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use contracts::domain::contact::{
    ContactError, ContactField, ContactForm, ContactTransport, SubmitStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// (icon, text)
const CHANNELS: [(&str, &str); 3] = [
    ("mail", "nepoun.dev@gmail.com"),
    ("phone", "+55 (12) 98274-2822"),
    ("map-pin", "São Paulo, Brasil"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let session = use_session();

    view! {
        <section id="contact" class="section section--dark">
            <SectionHeader title_key="contact.title" prefix="console.log(\"" suffix="\")" />

            <div class="contact__grid">
                <div class="contact__info">
                    <h3 class="contact__subtitle">{move || session.t("contact.subtitle")}</h3>
                    <p class="contact__desc">{move || session.t("contact.desc")}</p>

                    <ul class="contact__channels">
                        {CHANNELS
                            .into_iter()
                            .map(|(icon_name, text)| view! {
                                <li class="contact__channel">
                                    {icon(icon_name)}
                                    <span>{text}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>

                    <div class="contact__socials">
                        <a class="contact__social" href="https://github.com/Nepoun" target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            {icon("github")}
                        </a>
                        <a class="contact__social" href="https://www.linkedin.com/in/antonio-nepomuceno" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            {icon("linkedin")}
                        </a>
                        <a class="contact__social" href="https://nepoun.itch.io" target="_blank" rel="noopener noreferrer">
                            <span class="contact__social-text">"itch.io"</span>
                        </a>
                    </div>
                </div>

                <ContactFormView />
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let session = use_session();
    let transport = FormRelayTransport::new(use_site_config().contact.endpoint);
    let form = RwSignal::new(ContactForm::new());
    let is_sending = Signal::derive(move || form.with(|f| f.is_sending()));

    let field_value =
        move |field: ContactField| Signal::derive(move || form.with(|f| f.field(field).to_string()));
    let field_input = move |field: ContactField| {
        Callback::new(move |value: String| form.update(|f| f.set_field(field, value)))
    };
    let field_label = move |field: ContactField| {
        Signal::derive(move || session.t(field.label_key()).to_string())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let message = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(message)) => message,
            Some(Err(ContactError::InFlight)) => {
                log::debug!("Contact submission already in flight");
                return;
            }
            Some(Err(err)) => {
                log::warn!("Contact form rejected locally: {}", err);
                return;
            }
            None => return,
        };

        let transport = transport.clone();
        spawn_local(async move {
            let outcome = transport.send(&message).await;
            match &outcome {
                Ok(()) => log::info!("Contact message delivered"),
                Err(err) => log::error!("Contact submission failed: {}", err),
            }
            form.update(|f| f.complete(outcome));
        });
    };

    let banner = move || {
        form.with(|f| {
            f.status_key().map(|key| {
                let class = if *f.status() == SubmitStatus::Sent {
                    "contact__status contact__status--success"
                } else {
                    "contact__status contact__status--error"
                };
                view! { <p class=class role="status">{session.t(key)}</p> }
            })
        })
    };

    view! {
        <form class="contact__form" on:submit=on_submit novalidate=true>
            <div class="contact__row">
                <Input
                    label=field_label(ContactField::Name)
                    name=ContactField::Name.name()
                    value=field_value(ContactField::Name)
                    on_input=field_input(ContactField::Name)
                    disabled=is_sending
                    autocomplete="name"
                />
                <Input
                    label=field_label(ContactField::Email)
                    name=ContactField::Email.name()
                    input_type="email"
                    value=field_value(ContactField::Email)
                    on_input=field_input(ContactField::Email)
                    disabled=is_sending
                    autocomplete="email"
                />
            </div>
            <Input
                label=field_label(ContactField::Subject)
                name=ContactField::Subject.name()
                value=field_value(ContactField::Subject)
                on_input=field_input(ContactField::Subject)
                disabled=is_sending
            />
            <Textarea
                label=field_label(ContactField::Message)
                name=ContactField::Message.name()
                value=field_value(ContactField::Message)
                on_input=field_input(ContactField::Message)
                disabled=is_sending
                rows=5
            />

            {banner}

            <Button button_type="submit" class="contact__submit" disabled=is_sending>
                {move || {
                    if is_sending.get() {
                        session.t("contact.form.sending")
                    } else {
                        session.t("contact.form.submit")
                    }
                }}
            </Button>
        </form>
    }
}
