//! Presentation components for the Eco/Tribe page.

pub mod cursor;
pub mod footer;
pub mod hero;
pub mod join;
pub mod manifesto;
pub mod nav;
pub mod process;
pub mod protocol;

pub use cursor::CustomCursor;
pub use footer::Footer;
pub use hero::Hero;
pub use join::Join;
pub use manifesto::Manifesto;
pub use nav::Nav;
pub use process::Process;
pub use protocol::Protocol;
