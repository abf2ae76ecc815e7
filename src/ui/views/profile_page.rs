//! Profile page view.
//!
//! [`compose`] turns the current inputs (viewport width, system dark mode,
//! configured theme mode) into a [`PageTree`]. It is pure: the same inputs
//! always give the same tree.
//!
//! [`PageSession`] holds the latest inputs and re-composes on every
//! [`InputChange`]. [`ProfilePage`] is the gpui view that feeds window
//! bounds and appearance changes into a session and draws the result. It
//! also owns one focus handle per link button so `tab`/`shift-tab` can move
//! keyboard focus through the grid.

use gpui::{
    div, img, prelude::*, px, AnyElement, Context, FocusHandle, InteractiveText, IntoElement,
    ParentElement, Render, SharedString, Styled, StyledText, Subscription, Window,
    WindowAppearance,
};

use crate::app::{FocusNextLink, FocusPrevLink, ToggleTheme};
use crate::data::{links, FooterSegment, LinkRecord, FOOTER, PROFILE};
use crate::ui::components::{ButtonMode, LinkStyles, RichText, UrlButton};
use crate::ui::layout::{
    columns_for, AVATAR_PADDING_TOP, AVATAR_SIZE, CONTENT_MAX_WIDTH, CONTENT_PADDING_X,
    FOOTER_PADDING_Y, GRID_SPACING, TAGLINE_PADDING_BOTTOM,
};
use crate::ui::theme::{Theme, ThemeColors, ThemeMode};
use crate::ui::tree::{GridRow, Node, PageTree, TextRole};

/// Reactive inputs of a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageInputs {
    /// Available width in logical pixels.
    pub viewport_width: f32,
    /// Whether the host reports a dark appearance.
    pub system_dark: bool,
    /// Configured theme preference.
    pub theme_mode: ThemeMode,
}

/// Builds the attribution footer paragraph.
pub fn footer_text(colors: &ThemeColors) -> RichText {
    let styles = LinkStyles::primary(colors);
    FOOTER
        .iter()
        .fold(RichText::builder(), |builder, segment| match segment {
            FooterSegment::Text(text) => builder.append(*text),
            FooterSegment::Link { text, url } => builder.styled_link(*url, *text, styles),
        })
        .build()
}

/// Composes the page for one set of inputs.
pub fn compose(inputs: &PageInputs) -> PageTree {
    let theme = Theme::for_scheme(inputs.theme_mode.resolve(inputs.system_dark));
    let columns = columns_for(inputs.viewport_width);
    let mode = ButtonMode::for_columns(columns);

    tracing::debug!(
        width = inputs.viewport_width,
        columns = columns.count(),
        scheme = theme.scheme.name(),
        "Composing profile page"
    );

    PageTree::builder(theme, columns)
        .full(Node::Avatar {
            url: PROFILE.avatar_url.into(),
            size: AVATAR_SIZE,
            padding_top: AVATAR_PADDING_TOP,
        })
        .full(Node::Text {
            text: PROFILE.name.into(),
            role: TextRole::Title,
            padding_bottom: 0.0,
        })
        .full(Node::Text {
            text: PROFILE.tagline.into(),
            role: TextRole::Label,
            padding_bottom: TAGLINE_PADDING_BOTTOM,
        })
        .cells(
            links()
                .iter()
                .map(|link| Node::Button(UrlButton::new(*link, mode, theme.colors))),
        )
        .full(Node::Paragraph {
            text: footer_text(&theme.colors),
            padding_y: FOOTER_PADDING_Y,
        })
        .build()
}

/// A change to one of the reactive inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputChange {
    /// The viewport was resized to this width.
    ViewportResized(f32),
    /// The system appearance changed.
    AppearanceChanged { dark: bool },
    /// The configured theme mode changed.
    ThemeModeChanged(ThemeMode),
}

/// Latest inputs plus the re-render rule.
#[derive(Debug, Clone)]
pub struct PageSession {
    inputs: PageInputs,
}

impl PageSession {
    pub fn new(inputs: PageInputs) -> Self {
        Self { inputs }
    }

    pub fn inputs(&self) -> &PageInputs {
        &self.inputs
    }

    /// Composes the page for the current inputs.
    pub fn render(&self) -> PageTree {
        compose(&self.inputs)
    }

    /// Applies a change and re-composes.
    pub fn apply(&mut self, change: InputChange) -> PageTree {
        match change {
            InputChange::ViewportResized(width) => self.inputs.viewport_width = width,
            InputChange::AppearanceChanged { dark } => self.inputs.system_dark = dark,
            InputChange::ThemeModeChanged(mode) => self.inputs.theme_mode = mode,
        }
        self.render()
    }
}

/// Whether a window appearance counts as dark mode.
pub fn is_dark_appearance(appearance: WindowAppearance) -> bool {
    matches!(
        appearance,
        WindowAppearance::Dark | WindowAppearance::VibrantDark
    )
}

/// Index of the link to focus next, wrapping at both ends. Starts from the
/// first (or last) link when none is focused.
pub fn next_focus_index(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(ix), true) => (ix + 1) % len,
        (Some(ix), false) => (ix + len - 1) % len,
    };
    Some(next)
}

/// The gpui view hosting the page.
pub struct ProfilePage {
    focus_handle: FocusHandle,
    /// One per registry link, in registry order.
    link_focus: Vec<FocusHandle>,
    session: PageSession,
    tree: PageTree,
    /// Footer link under the pointer.
    hovered_footer_link: Option<usize>,
    _subscriptions: Vec<Subscription>,
}

impl ProfilePage {
    /// Creates the view and subscribes to window size and appearance.
    pub fn new(theme_mode: ThemeMode, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let session = PageSession::new(PageInputs {
            viewport_width: f32::from(window.viewport_size().width),
            system_dark: is_dark_appearance(window.appearance()),
            theme_mode,
        });
        let tree = session.render();
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        let link_focus = links().iter().map(|_| cx.focus_handle()).collect();

        let subscriptions = vec![
            cx.observe_window_bounds(window, |this, window, cx| {
                let width = f32::from(window.viewport_size().width);
                if width != this.session.inputs().viewport_width {
                    this.apply(InputChange::ViewportResized(width), cx);
                }
            }),
            cx.observe_window_appearance(window, |this, window, cx| {
                let dark = is_dark_appearance(window.appearance());
                this.apply(InputChange::AppearanceChanged { dark }, cx);
            }),
        ];

        Self {
            focus_handle,
            link_focus,
            session,
            tree,
            hovered_footer_link: None,
            _subscriptions: subscriptions,
        }
    }

    fn apply(&mut self, change: InputChange, cx: &mut Context<Self>) {
        self.tree = self.session.apply(change);
        cx.notify();
    }

    fn toggle_theme(&mut self, _: &ToggleTheme, _window: &mut Window, cx: &mut Context<Self>) {
        let mode = self.session.inputs().theme_mode.next();
        tracing::info!(theme = ?mode, "Switching theme mode");
        self.apply(InputChange::ThemeModeChanged(mode), cx);
    }

    fn focus_next_link(&mut self, _: &FocusNextLink, window: &mut Window, cx: &mut Context<Self>) {
        self.move_link_focus(true, window, cx);
    }

    fn focus_prev_link(&mut self, _: &FocusPrevLink, window: &mut Window, cx: &mut Context<Self>) {
        self.move_link_focus(false, window, cx);
    }

    fn move_link_focus(&mut self, forward: bool, window: &mut Window, cx: &mut Context<Self>) {
        let current = self
            .link_focus
            .iter()
            .position(|handle| handle.is_focused(window));
        if let Some(ix) = next_focus_index(current, self.link_focus.len(), forward) {
            tracing::debug!(link = links()[ix].title, "Focusing link");
            window.focus(&self.link_focus[ix]);
            cx.notify();
        }
    }

    fn link_focus_handle(&self, link: &LinkRecord) -> Option<&FocusHandle> {
        links()
            .iter()
            .position(|candidate| candidate == link)
            .and_then(|ix| self.link_focus.get(ix))
    }

    fn render_row(&self, row: GridRow<'_>, cx: &mut Context<Self>) -> AnyElement {
        match row {
            GridRow::Full(node) => self.render_node(node, cx),
            GridRow::Cells(nodes) => {
                let filler = self.tree.columns().count().saturating_sub(nodes.len());
                div()
                    .w_full()
                    .flex()
                    .gap(px(GRID_SPACING))
                    .children(
                        nodes
                            .into_iter()
                            .map(|node| div().flex_1().child(self.render_node(node, cx))),
                    )
                    .children((0..filler).map(|_| div().flex_1()))
                    .into_any_element()
            }
        }
    }

    fn render_node(&self, node: &Node, cx: &mut Context<Self>) -> AnyElement {
        let colors = self.tree.theme().colors;

        match node {
            Node::Avatar {
                url,
                size,
                padding_top,
            } => div()
                .w_full()
                .pt(px(*padding_top))
                .flex()
                .justify_center()
                .child(img(url.clone()).size(px(*size)).rounded_full())
                .into_any_element(),
            Node::Text {
                text,
                role,
                padding_bottom,
            } => {
                let base = div()
                    .w_full()
                    .pb(px(*padding_bottom))
                    .text_center()
                    .text_color(colors.on_surface);
                let sized = match role {
                    TextRole::Title => base.text_xl(),
                    TextRole::Label => base.text_sm().font_weight(gpui::FontWeight::MEDIUM),
                };
                sized.child(text.clone()).into_any_element()
            }
            Node::Button(button) => match self.link_focus_handle(button.link()) {
                Some(handle) => button.clone().focus_handle(handle.clone()).into_any_element(),
                None => button.clone().into_any_element(),
            },
            Node::Paragraph { text, padding_y } => {
                self.render_paragraph(text, *padding_y, &colors, cx)
            }
        }
    }

    fn render_paragraph(
        &self,
        text: &RichText,
        padding_y: f32,
        colors: &ThemeColors,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let styled = StyledText::new(SharedString::from(text.text()))
            .with_highlights(text.highlights(self.hovered_footer_link));

        let click_text = text.clone();
        let hover_text = text.clone();
        let view = cx.entity().downgrade();

        let paragraph = InteractiveText::new("footer-text", styled)
            .on_click(text.link_ranges(), move |ix, _window, cx| {
                if let Some(link) = click_text.links().nth(ix) {
                    link.activate(&*cx);
                }
            })
            .on_hover(move |offset, _event, _window, cx| {
                let hovered = offset.and_then(|offset| hover_text.link_at(offset));
                view.update(cx, |this, cx| {
                    if this.hovered_footer_link != hovered {
                        this.hovered_footer_link = hovered;
                        cx.notify();
                    }
                })
                .ok();
            });

        div()
            .w_full()
            .py(px(padding_y))
            .text_center()
            .text_xs()
            .text_color(colors.on_surface_variant)
            .child(paragraph)
            .into_any_element()
    }
}

impl Render for ProfilePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.tree.theme().colors;
        let rows: Vec<AnyElement> = self
            .tree
            .rows()
            .into_iter()
            .map(|row| self.render_row(row, cx))
            .collect();

        div()
            .id("profile-page")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::toggle_theme))
            .on_action(cx.listener(Self::focus_next_link))
            .on_action(cx.listener(Self::focus_prev_link))
            .size_full()
            .bg(colors.background)
            .text_color(colors.on_surface)
            .overflow_y_scroll()
            .flex()
            .justify_center()
            .child(
                div()
                    .w_full()
                    .max_w(px(CONTENT_MAX_WIDTH))
                    .px(px(CONTENT_PADDING_X))
                    .bg(colors.surface)
                    .flex()
                    .flex_col()
                    .gap(px(GRID_SPACING))
                    .children(rows),
            )
    }
}
