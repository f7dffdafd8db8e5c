//! Admin portal shown after login.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AdminPortalProps {
    /// Invoked when the steward signs out.
    pub on_logout: EventHandler<()>,
}

struct ChapterRow {
    chapter: &'static str,
    sites: u32,
    stewards: u32,
    last_planting: &'static str,
}

const CHAPTERS: &[ChapterRow] = &[
    ChapterRow { chapter: "North Verge", sites: 7, stewards: 19, last_planting: "3 days ago" },
    ChapterRow { chapter: "Canal Belt", sites: 4, stewards: 11, last_planting: "yesterday" },
    ChapterRow { chapter: "Rooftop Guild", sites: 12, stewards: 26, last_planting: "today" },
];

/// Steward dashboard: chapter overview plus sign-out.
#[component]
pub fn AdminPortal(props: AdminPortalProps) -> Element {
    rsx! {
        div { class: "portal-shell",
            header { class: "portal-head",
                div {
                    span { class: "eyebrow", "Steward portal" }
                    h2 { "Chapter overview" }
                }
                button {
                    class: "ghost-button",
                    onclick: move |_| props.on_logout.call(()),
                    "Sign out"
                }
            }
            table { class: "portal-table",
                thead {
                    tr {
                        th { "Chapter" }
                        th { "Sites" }
                        th { "Stewards" }
                        th { "Last planting" }
                    }
                }
                tbody {
                    for row in CHAPTERS {
                        tr { key: "{row.chapter}",
                            td { "{row.chapter}" }
                            td { "{row.sites}" }
                            td { "{row.stewards}" }
                            td { class: "status-ok", "{row.last_planting}" }
                        }
                    }
                }
            }
        }
    }
}
