pub mod consent;
pub mod lead;

pub use consent::{ConsentState, CookieChoice};
pub use lead::Lead;
