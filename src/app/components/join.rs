//! Join section with the signup form.
//!
//! There is no backend; submission only flips a local "received" flag.

use dioxus::prelude::*;

#[component]
pub fn Join() -> Element {
    let mut submitted = use_signal(|| false);

    rsx! {
        section { id: "join",
            span { class: "eyebrow", "Join" }
            h2 { "Put your name in the soil" }
            if submitted() {
                p { class: "form-note",
                    "Received. A chapter steward will reach out before the next planting window."
                }
            } else {
                form {
                    onsubmit: move |event| {
                        event.prevent_default();
                        submitted.set(true);
                    },
                    div { class: "field",
                        label { r#for: "join-name", "Name" }
                        input { id: "join-name", name: "name", placeholder: "Robin of the north verge" }
                    }
                    div { class: "field",
                        label { r#for: "join-email", "Email" }
                        input {
                            id: "join-email",
                            name: "email",
                            r#type: "email",
                            placeholder: "you@example.org",
                        }
                    }
                    button { class: "cta", r#type: "submit", "Count me in" }
                }
            }
        }
    }
}
