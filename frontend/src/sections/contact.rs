use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::RelayConfig;
use crate::contact_form::{ContactFormState, Field, SubmissionStatus};
use crate::content::{ContactKind, CONTACT_INFO, SOCIAL_LINKS};
use crate::relay::{EmailJsRelay, EmailRelay, RelayError, RelayReply};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub relay_config: RelayConfig,
}

pub enum ContactMsg {
    SetField(Field, String),
    Submit,
    Resolved(Result<RelayReply, RelayError>),
}

pub struct Contact {
    form: ContactFormState,
    relay: EmailJsRelay,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ContactProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: ContactFormState::new(),
            relay: EmailJsRelay::new(ctx.props().relay_config.clone()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.relay = EmailJsRelay::new(ctx.props().relay_config.clone());
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetField(field, value) => {
                self.form.set_field(field, value);
                true
            }
            ContactMsg::Submit => match self.form.begin_submit() {
                Ok(params) => {
                    let relay = self.relay.clone();
                    ctx.link().send_future(async move {
                        ContactMsg::Resolved(relay.send(params).await)
                    });
                    true
                }
                Err(e) => {
                    log::warn!("Contact form not submitted: {}", e);
                    false
                }
            },
            ContactMsg::Resolved(outcome) => {
                if let Err(e) = &outcome {
                    gloo_console::error!("Email relay failed:", e.to_string());
                }
                self.form.resolve(&self.relay, outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let submitting = self.form.is_submitting();

        html! {
            <section id="contact" class="page-section contact">
                <style>
                    {r#"
                        .contact-grid {
                            display: grid;
                            grid-template-columns: repeat(2, 1fr);
                            gap: 3rem;
                            align-items: start;
                        }
                        .contact h3 {
                            font-size: 1.5rem;
                            font-weight: 700;
                            margin-bottom: 1.5rem;
                        }
                        .form-field {
                            margin-bottom: 1rem;
                        }
                        .form-field label {
                            display: block;
                            color: #d8b4fe;
                            font-size: 0.875rem;
                            margin-bottom: 0.5rem;
                        }
                        .form-field input, .form-field textarea {
                            width: 100%;
                            background: rgba(0, 0, 0, 0.5);
                            border: 1px solid rgba(88, 28, 135, 0.5);
                            border-radius: 0.375rem;
                            padding: 0.5rem 1rem;
                            color: #fff;
                            transition: border-color 0.3s ease, box-shadow 0.3s ease;
                        }
                        .form-field input:focus, .form-field textarea:focus {
                            outline: none;
                            border-color: #a855f7;
                            box-shadow: 0 0 0 2px rgba(168, 85, 247, 0.5);
                        }
                        .form-field textarea {
                            resize: none;
                        }
                        .contact-submit {
                            width: 100%;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            gap: 0.5rem;
                        }
                        .contact-submit:disabled {
                            opacity: 0.7;
                            cursor: wait;
                        }
                        .spinner {
                            width: 1rem;
                            height: 1rem;
                            border: 2px solid rgba(255, 255, 255, 0.3);
                            border-top-color: #fff;
                            border-radius: 50%;
                            animation: spin 1s linear infinite;
                        }
                        @keyframes spin { to { transform: rotate(360deg); } }
                        .status-message {
                            margin-top: 1rem;
                            padding: 0.75rem;
                            border-radius: 0.375rem;
                            animation: fade 0.3s ease-out;
                        }
                        .status-message.success {
                            background: rgba(20, 83, 45, 0.3);
                            color: #4ade80;
                        }
                        .status-message.error {
                            background: rgba(127, 29, 29, 0.3);
                            color: #f87171;
                        }
                        .contact-info-item {
                            display: flex;
                            align-items: center;
                            gap: 1rem;
                            margin-bottom: 1.5rem;
                            color: #d1d5db;
                            transition: transform 0.2s ease;
                        }
                        .contact-info-item:hover {
                            transform: translateX(10px);
                        }
                        .contact-info-label {
                            background: rgba(88, 28, 135, 0.3);
                            padding: 0.5rem 0.75rem;
                            border-radius: 9999px;
                            font-size: 0.75rem;
                            color: #c084fc;
                        }
                        .social-grid {
                            display: grid;
                            grid-template-columns: repeat(3, 1fr);
                            gap: 1rem;
                        }
                        .social-grid a {
                            text-align: center;
                            padding: 1rem 0;
                            border-radius: 0.5rem;
                            background: rgba(88, 28, 135, 0.2);
                            color: #d1d5db;
                            transition: background 0.3s ease;
                        }
                        .social-grid a:hover {
                            background: rgba(88, 28, 135, 0.4);
                        }
                        @media (max-width: 1024px) {
                            .contact-grid {
                                grid-template-columns: 1fr;
                            }
                        }
                    "#}
                </style>
                <div class="section-container">
                    <Reveal>
                        <h2 class="section-title">{"Get In Touch"}</h2>
                    </Reveal>
                    <div class="contact-grid">
                        <Reveal class={classes!("cyberpunk-card")}>
                            <h3 class="gradient-text">{"Send Me a Message"}</h3>
                            <form onsubmit={onsubmit}>
                                { for Field::ALL.into_iter().map(|field| self.view_field(ctx, field)) }
                                <button type="submit" class="cyberpunk-button contact-submit" disabled={submitting}>
                                    if submitting {
                                        <span class="spinner"></span>
                                        {"Sending..."}
                                    } else {
                                        {"Send Message"}
                                    }
                                </button>
                                { self.view_status() }
                            </form>
                        </Reveal>
                        <div>
                            <Reveal class={classes!("cyberpunk-card")}>
                                <h3 class="gradient-text">{"Contact Information"}</h3>
                                { for CONTACT_INFO.iter().map(|info| html! {
                                    <div class="contact-info-item">
                                        <span class="contact-info-label">{contact_label(info.kind)}</span>
                                        <span>{info.text}</span>
                                    </div>
                                }) }
                            </Reveal>
                            <Reveal class={classes!("cyberpunk-card")}>
                                <h3 class="gradient-text">{"Follow Me"}</h3>
                                <div class="social-grid">
                                    { for SOCIAL_LINKS.iter().map(|link| html! {
                                        <a href={link.url} target="_blank" rel="noopener noreferrer">{link.label}</a>
                                    }) }
                                </div>
                            </Reveal>
                        </div>
                    </div>
                </div>
            </section>
        }
    }
}

impl Contact {
    fn view_field(&self, ctx: &Context<Self>, field: Field) -> Html {
        let value = self.form.fields().get(field).to_string();

        let input = match field {
            Field::Message => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    ContactMsg::SetField(field, area.value())
                });
                html! {
                    <textarea id={field.input_id()} rows="5" required={true} value={value} oninput={oninput} />
                }
            }
            _ => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    ContactMsg::SetField(field, input.value())
                });
                let kind = if field == Field::Email { "email" } else { "text" };
                html! {
                    <input type={kind} id={field.input_id()} required={true} value={value} oninput={oninput} />
                }
            }
        };

        html! {
            <div class="form-field">
                <label for={field.input_id()}>{field.label()}</label>
                {input}
            </div>
        }
    }

    fn view_status(&self) -> Html {
        match self.form.status() {
            SubmissionStatus::Succeeded(message) => html! {
                <div class="status-message success">{message}</div>
            },
            SubmissionStatus::Failed(message) => html! {
                <div class="status-message error">{message}</div>
            },
            SubmissionStatus::Idle | SubmissionStatus::Submitting => html! {},
        }
    }
}

fn contact_label(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Location => "Location",
        ContactKind::Email => "Email",
        ContactKind::Phone => "Phone",
    }
}
