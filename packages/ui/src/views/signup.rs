//! Account creation form.

use dioxus::prelude::*;

use crate::alert::alert;
use crate::form_state::SubmitState;
use crate::icons::{FaEnvelope, FaLock, FaShieldHalved, FaUser};
use crate::{use_api, Icon};

/// Signup page component.
#[component]
pub fn SignupView(on_success: EventHandler<()>) -> Element {
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submit_state = use_signal(SubmitState::default);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        if !submit_state.write().begin() {
            return;
        }

        let api = api.clone();
        spawn(async move {
            let outcome = api
                .signup(name().trim(), email().trim(), &password())
                .await;
            submit_state.write().finish(&outcome);
            match outcome {
                Ok(()) => {
                    alert("Signup successful!");
                    on_success.call(());
                }
                Err(e) => {
                    tracing::error!("Signup failed: {}", e);
                    alert(&format!("Signup failed: {}", e.user_message()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: crate::VIEWS_CSS }
        div {
            class: "form-page",
            div {
                class: "form-card",
                div {
                    class: "form-card__badge",
                    Icon { icon: FaShieldHalved, width: 24, height: 24 }
                }
                h3 { class: "form-card__title", "Create Account" }
                p { class: "form-card__subtitle", "Join SafeSpot Lite and report with ease" }

                form {
                    onsubmit: handle_signup,

                    div {
                        class: "form-field",
                        label { "Full Name" }
                        div {
                            class: "input-group",
                            span { class: "input-group__icon", Icon { icon: FaUser, width: 14, height: 14 } }
                            input {
                                r#type: "text",
                                placeholder: "Enter your name",
                                required: true,
                                value: name(),
                                oninput: move |evt: FormEvent| name.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Email Address" }
                        div {
                            class: "input-group",
                            span { class: "input-group__icon", Icon { icon: FaEnvelope, width: 14, height: 14 } }
                            input {
                                r#type: "email",
                                placeholder: "Enter your email",
                                required: true,
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Password" }
                        div {
                            class: "input-group",
                            span { class: "input-group__icon", Icon { icon: FaLock, width: 14, height: 14 } }
                            input {
                                r#type: "password",
                                placeholder: "Create a password",
                                required: true,
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                    }

                    button {
                        class: "btn btn--success btn--block",
                        r#type: "submit",
                        disabled: submit_state().is_submitting(),
                        if submit_state().is_submitting() { "Creating account..." } else { "Sign Up" }
                    }
                }

                div { class: "form-card__divider", "Already have an account?" }

                a {
                    class: "btn btn--outline btn--block",
                    href: "/login",
                    "Login"
                }
            }
        }
    }
}
