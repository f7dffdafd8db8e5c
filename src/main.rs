//! Eco/Tribe web entry point.

fn main() {
    dioxus::launch(ecotribe::app::App);
}
