//! A responsive personal profile page.
//!
//! The page content is static ([`data`]); the layout adapts to the window
//! width and the colors follow the system appearance ([`ui`]). Links open
//! in the platform's default handler ([`services`]).

pub mod app;
pub mod config;
pub mod data;
pub mod logging;
pub mod services;
pub mod ui;
