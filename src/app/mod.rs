//! Application lifecycle.
//!
//! This module contains:
//! - Action definitions (inline via gpui::actions!)
//! - Keybinding registration
//! - Window creation for the profile page

use anyhow::Result;
use gpui::{
    actions, px, size, AppContext, Application, Bounds, KeyBinding, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::config::AppConfig;
use crate::data::PROFILE;
use crate::ui::{Assets, ProfilePage};

// Define application actions
actions!(profile_page, [Quit, ToggleTheme, FocusNextLink, FocusPrevLink]);

/// Main application entry point
pub struct App;

impl App {
    /// Run the application
    pub fn run(config: AppConfig) -> Result<()> {
        Application::new().with_assets(Assets).run(move |cx: &mut gpui::App| {
            Self::register_keybindings(cx);
            cx.on_action(|_: &Quit, cx| cx.quit());

            let (width, height) = config.window.clamped();
            let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(PROFILE.name.into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let theme_mode = config.theme;
            let opened = cx.open_window(options, |window, cx| {
                cx.new(|cx| ProfilePage::new(theme_mode, window, cx))
            });

            match opened {
                Ok(_) => {
                    tracing::info!(width, height, theme = ?theme_mode, "Opened profile window");
                    cx.on_window_closed(|cx| cx.quit()).detach();
                    cx.activate(true);
                }
                Err(err) => {
                    tracing::error!("Failed to open window: {err:#}");
                    cx.quit();
                }
            }
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
            KeyBinding::new("cmd-shift-t", ToggleTheme, None),
            KeyBinding::new("ctrl-shift-t", ToggleTheme, None),
            KeyBinding::new("tab", FocusNextLink, None),
            KeyBinding::new("shift-tab", FocusPrevLink, None),
        ]);
    }
}
