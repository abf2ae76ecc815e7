//! UI components and views
//!
//! This module contains the gpui-based user interface for the profile page.
//! The UI is organized into:
//! - `theme`: Color schemes and theme mode resolution
//! - `layout`: Responsive column policy and spacing constants
//! - `tree`: Immutable page tree produced by the composer
//! - `components`: Link buttons and rich text
//! - `views`: The profile page view
//! - `assets`: Bundled icon source

pub mod assets;
pub mod components;
pub mod layout;
pub mod theme;
pub mod tree;
pub mod views;

pub use assets::Assets;
pub use layout::{columns_for, Columns};
pub use theme::{ColorScheme, Theme, ThemeColors, ThemeMode};
pub use tree::{GridRow, Node, PageTree};
pub use views::ProfilePage;
