//! Application views.

mod profile_page;

pub use profile_page::{
    compose, footer_text, is_dark_appearance, InputChange, PageInputs, PageSession, ProfilePage,
};
