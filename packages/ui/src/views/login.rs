//! Email/password sign-in form.

use dioxus::prelude::*;

use crate::alert::alert;
use crate::form_state::SubmitState;
use crate::icons::{FaEnvelope, FaLock, FaShieldHalved};
use crate::session::{sign_in, use_session};
use crate::{use_api, Icon};

/// Login page. On success the token is stored in the session and
/// `on_success` fires.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submit_state = use_signal(SubmitState::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if !submit_state.write().begin() {
            return;
        }

        let api = api.clone();
        spawn(async move {
            let outcome = api.login(email().trim(), &password()).await;
            submit_state.write().finish(&outcome);
            match outcome {
                Ok(token) => {
                    sign_in(&mut session, token);
                    alert("Login successful!");
                    on_success.call(());
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    alert(&format!("Login failed: {}", e.user_message()));
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
                h3 { class: "form-card__title", "Welcome Back" }
                p { class: "form-card__subtitle", "Sign in to your SafeSpot Lite account" }

                form {
                    onsubmit: handle_login,

                    div {
                        class: "form-field",
                        label { "Email Address" }
                        div {
                            class: "input-group",
                            span { class: "input-group__icon", Icon { icon: FaEnvelope, width: 14, height: 14 } }
                            input {
                                r#type: "email",
                                placeholder: "Enter your email address",
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
                                placeholder: "Enter your password",
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
                        if submit_state().is_submitting() { "Signing in..." } else { "Log In" }
                    }
                }

                div { class: "form-card__divider", "New to SafeSpot Lite?" }

                a {
                    class: "btn btn--outline btn--block",
                    href: "/signup",
                    "Create New Account"
                }
            }
        }
    }
}

