//! Landing page: the full scroll of marketing sections.

use dioxus::prelude::*;

use crate::app::components::{Footer, Hero, Join, Manifesto, Process, Protocol};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Manifesto {}
        Process {}
        Protocol {}
        Join {}
        Footer {}
    }
}
