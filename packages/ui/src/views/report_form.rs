use api::{ApiError, Coordinate, ImageAttachment, ReportDraft, ReportRepository};
use dioxus::prelude::*;

use crate::alert::alert;
use crate::form_state::{AttachmentSlot, SubmitState};
use crate::geolocation::request_position;
use crate::session::use_session;
use crate::use_api;

pub const REQUIRED_FIELDS: &str = "Please fill in all required fields.";
pub const SUBMITTED: &str = "Report submitted!";
pub const SUBMIT_FAILED: &str = "Failed to submit report.";
pub const ANONYMOUS_NOTICE: &str = "You are not signed in. This report will be sent without an account.";
pub const IMAGE_PENDING: &str = "Please wait for the image to finish loading.";
pub const LOCATION_PENDING: &str = "Detecting location...";
pub const LOCATION_UNAVAILABLE: &str = "Unable to fetch location. Please allow access.";

/// Alert text for a failed submission.
pub fn submission_alert(error: &ApiError) -> &'static str {
    if error.is_validation() {
        REQUIRED_FIELDS
    } else {
        SUBMIT_FAILED
    }
}

fn location_text(coords: Option<Coordinate>, error: Option<&str>) -> String {
    match (coords, error) {
        (Some(c), _) => format!("{}, {}", c.latitude, c.longitude),
        (None, Some(e)) => e.to_string(),
        (None, None) => LOCATION_PENDING.to_string(),
    }
}

/// Emergency incident report form.
///
/// The device position is queried once on mount and attached to the report;
/// the address is typed by the user. `on_submitted` fires after the service
/// accepts the report.
#[component]
pub fn ReportFormView(on_submitted: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut attachment = use_signal(AttachmentSlot::default);
    let mut coords = use_signal(|| Option::<Coordinate>::None);
    let mut location_error = use_signal(|| Option::<String>::None);
    let mut submit_state = use_signal(SubmitState::default);

    let _position = use_resource(move || async move {
        match request_position().await {
            Ok(c) => coords.set(Some(c)),
            Err(e) => {
                tracing::warn!("Geolocation error: {}", e);
                location_error.set(Some(LOCATION_UNAVAILABLE.to_string()));
            }
        }
    });

    let handle_image = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            attachment.write().clear();
            return;
        };
        let ticket = attachment.write().select();
        spawn(async move {
            let image = match file.read_bytes().await {
                Ok(bytes) => Some(ImageAttachment {
                    file_name: file.name(),
                    content_type: file.content_type(),
                    bytes: bytes.to_vec(),
                }),
                Err(e) => {
                    tracing::error!("Failed to read image: {:?}", e);
                    None
                }
            };
            if !attachment.write().finish(ticket, image) {
                tracing::debug!("Discarded a stale image read");
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if attachment.read().is_reading() {
            alert(IMAGE_PENDING);
            return;
        }

        let draft = ReportDraft {
            title: title(),
            description: description(),
            address: address(),
            coordinate: coords(),
            image: attachment.read().image(),
        };

        // Presence check happens before any payload is built
        if let Err(e) = draft.clone().validate() {
            tracing::warn!("Report rejected: {}", e);
            alert(REQUIRED_FIELDS);
            return;
        }

        if !submit_state.write().begin() {
            return;
        }

        let api = api.clone();
        spawn(async move {
            let outcome = api.create_report(draft).await;
            submit_state.write().finish(&outcome);
            match outcome {
                Ok(()) => {
                    alert(SUBMITTED);
                    on_submitted.call(());
                }
                Err(e) => {
                    tracing::error!("Submission failed: {}", e);
                    alert(submission_alert(&e));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: crate::VIEWS_CSS }
        div {
            class: "form-page form-page--report",
            div {
                class: "form-card form-card--wide",
                div { class: "form-card__banner", "📋 Report Details" }
                div {
                    class: "form-card__body",
                    h4 { class: "form-card__title form-card__title--danger", "Emergency Incident Report" }
                    p {
                        class: "form-card__subtitle",
                        "Please provide detailed information about the emergency situation."
                    }

                    if !session().is_authenticated() {
                        p {
                            class: "form-card__notice",
                            "{ANONYMOUS_NOTICE} "
                            a { href: "/login", "Log in" }
                        }
                    }

                    form {
                        onsubmit: handle_submit,

                        div {
                            class: "form-field",
                            label { "Incident Title *" }
                            input {
                                r#type: "text",
                                placeholder: "Brief description of the incident",
                                required: true,
                                value: title(),
                                oninput: move |evt: FormEvent| title.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { "Detailed Description *" }
                            textarea {
                                placeholder: "Describe the situation, what happened, when, and any actions taken",
                                rows: 4,
                                required: true,
                                value: description(),
                                oninput: move |evt: FormEvent| description.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { "Supporting Documentation" }
                            div {
                                class: "drop-zone",
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    onchange: handle_image,
                                }
                                small { "Click to upload image (JPG/PNG, up to 10MB)" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { "📍 Location Information" }
                            input {
                                r#type: "text",
                                readonly: true,
                                value: location_text(coords(), location_error().as_deref()),
                            }
                            input {
                                r#type: "text",
                                placeholder: "Street Address",
                                required: true,
                                value: address(),
                                oninput: move |evt: FormEvent| address.set(evt.value()),
                            }
                        }

                        div {
                            class: "contact-box",
                            h6 { "📞 Emergency Contacts" }
                            div { "General Emergency: " strong { "911" } }
                            div { "Poison Control: " strong { "1-800-222-1222" } }
                        }

                        button {
                            class: "btn btn--danger btn--block",
                            r#type: "submit",
                            disabled: submit_state().is_submitting() || attachment.read().is_reading(),
                            if submit_state().is_submitting() {
                                "Submitting..."
                            } else if attachment.read().is_reading() {
                                "Loading image..."
                            } else {
                                "Submit Emergency Report"
                            }
                        }
                    }
                }
            }
        }
    }
}
