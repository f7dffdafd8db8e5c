//! Decorative background layers behind the whole page.
//!
//! Everything here is derived rendering: color, opacity and blend are pure
//! functions of the current theme, no state of their own.

use dioxus::prelude::*;

use super::theme::Theme;

/// Stroke color for the grid mesh.
///
/// Light mode uses a pure black stroke at 0.4 opacity for a crisp
/// technical-drawing look; dark mode a faint white for a subtle tech feel
/// on black.
pub fn grid_stroke(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rgba(255, 255, 255, 0.15)",
        Theme::Light => "rgba(0, 0, 0, 0.4)",
    }
}

/// Blend/opacity classes for the glow overlay.
///
/// Light mode multiplies so the green soaks into the white background; dark
/// mode blends normally at low opacity to avoid washout.
pub fn glow_blend(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "glow-wrap-dark",
        Theme::Light => "glow-wrap-light",
    }
}

/// Grid mesh layer, behind the glow.
#[component]
pub fn WaveGrid(theme: Theme) -> Element {
    let stroke = grid_stroke(theme);

    rsx! {
        svg {
            class: "wave-grid",
            width: "100%",
            height: "100%",
            defs {
                pattern {
                    id: "tribe-grid",
                    width: "48",
                    height: "48",
                    "patternUnits": "userSpaceOnUse",
                    path {
                        d: "M 48 0 L 0 0 0 48",
                        fill: "none",
                        stroke: "{stroke}",
                        stroke_width: "1",
                    }
                }
            }
            rect {
                width: "100%",
                height: "100%",
                fill: "url(#tribe-grid)",
            }
        }
    }
}

/// Ethereal glow overlay, behind the text.
///
/// Three breathing layers on staggered delays: primary glow, secondary glow
/// and a slow-moving fog.
#[component]
pub fn GlowField(theme: Theme) -> Element {
    let blend = glow_blend(theme);

    rsx! {
        div { class: "glow-field",
            div { class: "glow-wrap {blend}",
                div { class: "glow glow-primary" }
                div { class: "glow glow-secondary", style: "animation-delay: 2s;" }
                div { class: "glow glow-fog", style: "animation-delay: 5s;" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_stroke_follows_theme() {
        assert_eq!(grid_stroke(Theme::Dark), "rgba(255, 255, 255, 0.15)");
        assert_eq!(grid_stroke(Theme::Light), "rgba(0, 0, 0, 0.4)");
    }

    #[test]
    fn glow_blend_follows_theme() {
        assert_eq!(glow_blend(Theme::Dark), "glow-wrap-dark");
        assert_eq!(glow_blend(Theme::Light), "glow-wrap-light");
    }
}
