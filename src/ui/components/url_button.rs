//! Link buttons.
//!
//! A [`UrlButton`] shows one registry link with its icon and title. The
//! large variant stacks the icon above the label, the small variant puts
//! them on one line. Both open the link the same way, by click or by
//! `enter`/`space` while the button has keyboard focus.

use std::fmt;

use gpui::{
    div, prelude::*, px, svg, App, ClickEvent, FocusHandle, FontWeight, Hsla, IntoElement,
    KeyDownEvent, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::data::LinkRecord;
use crate::services::UriHandler;
use crate::ui::layout::Columns;
use crate::ui::theme::ThemeColors;

/// Button presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMode {
    /// Icon stacked above the label.
    Large,
    /// Icon and label inline.
    Small,
}

impl ButtonMode {
    /// Large when the grid has more than one column.
    pub fn for_columns(columns: Columns) -> Self {
        if columns.is_multi() {
            ButtonMode::Large
        } else {
            ButtonMode::Small
        }
    }

    fn icon_size(&self) -> f32 {
        match self {
            ButtonMode::Large => 48.0,
            ButtonMode::Small => 32.0,
        }
    }

    fn corner_radius(&self) -> f32 {
        match self {
            ButtonMode::Large => 12.0,
            ButtonMode::Small => 20.0,
        }
    }
}

/// Whether a key activates a focused button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "enter" | "space")
}

/// A clickable button for one link.
#[derive(Clone, IntoElement)]
pub struct UrlButton {
    link: LinkRecord,
    mode: ButtonMode,
    colors: ThemeColors,
    focus_handle: Option<FocusHandle>,
}

// The focus handle is attached by the host at draw time and is not part of
// the button's identity.
impl PartialEq for UrlButton {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link && self.mode == other.mode && self.colors == other.colors
    }
}

impl fmt::Debug for UrlButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlButton")
            .field("link", &self.link)
            .field("mode", &self.mode)
            .field("colors", &self.colors)
            .field("focusable", &self.focus_handle.is_some())
            .finish()
    }
}

impl UrlButton {
    /// Create a button for a link.
    pub fn new(link: LinkRecord, mode: ButtonMode, colors: ThemeColors) -> Self {
        Self {
            link,
            mode,
            colors,
            focus_handle: None,
        }
    }

    /// Set the focus handle. Without one the button is pointer-only.
    pub fn focus_handle(mut self, handle: FocusHandle) -> Self {
        self.focus_handle = Some(handle);
        self
    }

    /// The link shown.
    pub fn link(&self) -> &LinkRecord {
        &self.link
    }

    /// The presentation mode.
    pub fn mode(&self) -> ButtonMode {
        self.mode
    }

    /// Requests the host to open the link. One request per call.
    pub fn activate(&self, handler: &dyn UriHandler) {
        tracing::info!(title = self.link.title, url = self.link.url, "Opening link");
        handler.open_uri(self.link.url);
    }

    fn element_id(&self) -> SharedString {
        SharedString::from(format!("link-{}", self.link.title.to_lowercase().replace(' ', "-")))
    }
}

impl RenderOnce for UrlButton {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let icon_size = self.mode.icon_size();

        let icon = svg()
            .path(self.link.icon.asset_path())
            .size(px(icon_size))
            .flex_none()
            .text_color(colors.on_primary);

        let label = div()
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .child(SharedString::from(self.link.title));

        let content = match self.mode {
            ButtonMode::Large => div()
                .flex()
                .flex_col()
                .items_center()
                .gap(px(4.0))
                .child(icon)
                .child(label),
            ButtonMode::Small => div()
                .flex()
                .items_center()
                .justify_center()
                .child(icon)
                .child(div().pl(px(4.0)).child(label)),
        };

        let hover_bg = colors.primary_hover;
        let padding_y = match self.mode {
            ButtonMode::Large => 16.0,
            ButtonMode::Small => 10.0,
        };

        let focused = self
            .focus_handle
            .as_ref()
            .is_some_and(|handle| handle.is_focused(window));
        let ring = if focused {
            colors.on_surface
        } else {
            Hsla::transparent_black()
        };
        let key_target = self.clone();

        div()
            .id(self.element_id())
            .when_some(self.focus_handle.clone(), |el, handle| el.track_focus(&handle))
            .w_full()
            .px(px(24.0))
            .py(px(padding_y))
            .flex()
            .justify_center()
            .rounded(px(self.mode.corner_radius()))
            .border_2()
            .border_color(ring)
            .bg(colors.primary)
            .text_color(colors.on_primary)
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .active(|style| style.opacity(0.9))
            .on_key_down(move |event: &KeyDownEvent, _window, cx| {
                if is_activation_key(&event.keystroke.key) {
                    key_target.activate(&*cx);
                    cx.stop_propagation();
                }
            })
            .on_click(move |_: &ClickEvent, _window, cx| self.activate(&*cx))
            .child(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::links;
    use crate::services::MockUriHandler;
    use mockall::predicate::eq;

    #[test]
    fn mode_follows_columns() {
        assert_eq!(ButtonMode::for_columns(Columns::One), ButtonMode::Small);
        assert_eq!(ButtonMode::for_columns(Columns::Two), ButtonMode::Large);
        assert_eq!(ButtonMode::for_columns(Columns::Three), ButtonMode::Large);
    }

    #[test]
    fn icon_sizes() {
        assert_eq!(ButtonMode::Large.icon_size(), 48.0);
        assert_eq!(ButtonMode::Small.icon_size(), 32.0);
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("enter"));
        assert!(is_activation_key("space"));
        for key in ["tab", "escape", "a", "shift", ""] {
            assert!(!is_activation_key(key), "{key}");
        }
    }

    #[test]
    fn new_button_is_pointer_only() {
        let button = UrlButton::new(links()[0], ButtonMode::Small, ThemeColors::light());
        assert!(button.focus_handle.is_none());
    }

    #[test]
    fn element_ids_are_unique() {
        let ids: std::collections::HashSet<_> = links()
            .iter()
            .map(|l| UrlButton::new(*l, ButtonMode::Small, ThemeColors::light()).element_id())
            .collect();
        assert_eq!(ids.len(), links().len());
        assert!(ids.contains(&SharedString::from("link-self-hosted")));
    }

    #[test]
    fn activation_opens_link_once() {
        for mode in [ButtonMode::Large, ButtonMode::Small] {
            for link in links() {
                let button = UrlButton::new(*link, mode, ThemeColors::dark());

                let mut handler = MockUriHandler::new();
                handler
                    .expect_open_uri()
                    .with(eq(link.url))
                    .times(1)
                    .return_const(());

                button.activate(&handler);
            }
        }
    }

    #[test]
    fn repeated_activation_is_independent() {
        let button = UrlButton::new(links()[2], ButtonMode::Large, ThemeColors::light());

        let mut handler = MockUriHandler::new();
        handler
            .expect_open_uri()
            .with(eq("https://github.com/anand-bose"))
            .times(2)
            .return_const(());

        button.activate(&handler);
        button.activate(&handler);
    }
}
