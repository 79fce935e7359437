//! Admin Module
//!
//! The password gate for the administrative surface. The frontend unlocks
//! the upload/delete screen by verifying a shared password against this
//! endpoint; there is no session state beyond the check itself.

pub mod handlers;

#[cfg(test)]
mod tests;
