//! Values the storefront keeps in a visitor's session slots.

pub mod flash;
pub mod profile;
pub mod session;

pub use flash::{Flash, FlashKind};
pub use profile::ProfileDetails;
pub use session::{SessionToken, keys as session_keys};
