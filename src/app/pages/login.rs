//! Member login form.
//!
//! Decorative only: any submission is treated as a successful login. A real
//! deployment would swap the submit handler for a credential check.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoginProps {
    /// Invoked when the form is submitted.
    pub on_login: EventHandler<()>,
}

#[component]
pub fn Login(props: LoginProps) -> Element {
    rsx! {
        div { class: "login-screen",
            div { class: "login-card",
                span { class: "eyebrow", "Member portal" }
                h2 { "Sign in" }
                form {
                    onsubmit: move |event| {
                        event.prevent_default();
                        props.on_login.call(());
                    },
                    div { class: "field",
                        label { r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            name: "email",
                            r#type: "email",
                            placeholder: "steward@ecotribe.org",
                        }
                    }
                    div { class: "field",
                        label { r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            name: "password",
                            r#type: "password",
                            placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                        }
                    }
                    button { class: "cta", r#type: "submit", "Enter" }
                }
                p { class: "form-note", "Demo portal: any credentials are accepted." }
            }
        }
    }
}
