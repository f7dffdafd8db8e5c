//! Page footer.

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        footer {
            small { "Eco/Tribe v{version} \u{2014} grown in the open" }
        }
    }
}
