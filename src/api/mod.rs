//! HTTP publishing of a single file.
//!
//! Sends the file as a multipart/form-data POST authorized with a bearer
//! token, and reports the outcome as a [`PublishError`] on failure.

mod client;
mod types;

pub use client::PublishClient;
pub use types::PublishError;
