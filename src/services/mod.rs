//! Host-facing services.
//!
//! The page never opens links itself. Activations go through the
//! [`UriHandler`] trait, which the gpui host implements.

mod uri_handler;

pub use uri_handler::UriHandler;

#[cfg(test)]
pub use uri_handler::MockUriHandler;
