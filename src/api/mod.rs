//! Review API access: the client seam and response shape validation.

mod client;
mod validate;

pub use client::{ReviewApi, ReviewClient};
pub use validate::check_response;
