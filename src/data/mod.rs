//! Static page content.
//!
//! Everything shown on the page is a compile-time constant:
//! - `links`: the ordered registry of social/profile links
//! - `profile`: avatar, name, tagline and the attribution footer

pub mod links;
pub mod profile;

pub use links::{links, validate_registry, IconRef, LinkError, LinkRecord, LINKS};
pub use profile::{FooterSegment, Profile, FOOTER, PROFILE};
