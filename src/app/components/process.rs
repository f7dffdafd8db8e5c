//! Process section - how joining works.

use dioxus::prelude::*;

struct Step {
    index: &'static str,
    title: &'static str,
    body: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        index: "01",
        title: "Gather",
        body: "Find your local chapter or seed a new one. Three people and a patch of ground is enough.",
    },
    Step {
        index: "02",
        title: "Cultivate",
        body: "Adopt a site: a verge, a rooftop, a forgotten lot. The collective supplies tools, seed and know-how.",
    },
    Step {
        index: "03",
        title: "Regenerate",
        body: "Log what you plant and what returns. Every season the map gets greener and the data gets shared.",
    },
];

#[component]
pub fn Process() -> Element {
    rsx! {
        section { id: "process",
            span { class: "eyebrow", "Process" }
            h2 { "From signup to soil in three moves" }
            div { class: "step-grid",
                for step in STEPS {
                    div { class: "step", key: "{step.index}",
                        span { class: "step-index", "{step.index}" }
                        h3 { "{step.title}" }
                        p { "{step.body}" }
                    }
                }
            }
        }
    }
}
