//! Reusable UI components.
//!
//! Components are stateless values. Styling comes from the theme colors
//! they are built with.

pub mod hyperlink;
pub mod url_button;

pub use hyperlink::{LinkStyles, RichText, RichTextBuilder, SpanStyle, StyledLink, TextRun};
pub use url_button::{is_activation_key, ButtonMode, UrlButton};
