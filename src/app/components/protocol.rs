//! Protocol section - the tribe's operating principles.

use dioxus::prelude::*;

const PRINCIPLES: &[(&str, &str)] = &[
    ("P-01", "Leave every site measurably better than you found it."),
    ("P-02", "Knowledge is commons. Document everything, hoard nothing."),
    ("P-03", "Local first. The chapter decides, the network supports."),
    ("P-04", "Celebrate small: one bed planted beats ten beds planned."),
];

#[component]
pub fn Protocol() -> Element {
    rsx! {
        section { id: "protocol",
            span { class: "eyebrow", "Protocol" }
            h2 { "Four rules, loosely held" }
            ul { class: "protocol-list",
                for (idx, text) in PRINCIPLES {
                    li { key: "{idx}",
                        span { class: "idx", "{idx}" }
                        span { "{text}" }
                    }
                }
            }
        }
    }
}
