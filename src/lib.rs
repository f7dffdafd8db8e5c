//! Eco/Tribe - landing page and member portal for the regenerative collective.
//!
//! A client-rendered Dioxus application providing:
//! - Dark/light theming with localStorage persistence
//! - A three-state view switch (home / login / admin)
//! - A timed intro sequence before the main content renders
//! - Decorative animated background layers driven by the theme

pub mod app;
