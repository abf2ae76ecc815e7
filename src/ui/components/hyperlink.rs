//! Rich text with embedded hyperlinks.
//!
//! A [`RichText`] is one paragraph built from plain runs and link runs.
//! Each link carries an idle style and an active style. A link is active
//! while the pointer is over it, which also covers pressing it, so the host
//! can restyle a span without rebuilding the paragraph.

use std::ops::Range;

use gpui::{px, HighlightStyle, Hsla, SharedString, UnderlineStyle};

use crate::services::UriHandler;
use crate::ui::theme::ThemeColors;

/// Visual style of a text span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanStyle {
    /// Text color, or inherit when `None`.
    pub color: Option<Hsla>,
    /// Draw an underline.
    pub underline: bool,
}

impl SpanStyle {
    /// Converts to a gpui highlight.
    pub fn to_highlight(&self) -> HighlightStyle {
        HighlightStyle {
            color: self.color,
            underline: self.underline.then(|| UnderlineStyle {
                thickness: px(1.0),
                color: self.color,
                wavy: false,
            }),
            ..Default::default()
        }
    }
}

/// Styles of a link span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkStyles {
    pub idle: SpanStyle,
    pub active: SpanStyle,
}

impl LinkStyles {
    /// Primary-colored link, underlined while active.
    pub fn primary(colors: &ThemeColors) -> Self {
        let idle = SpanStyle {
            color: Some(colors.primary),
            underline: false,
        };
        Self {
            idle,
            active: SpanStyle {
                underline: true,
                ..idle
            },
        }
    }

    pub fn style(&self, active: bool) -> SpanStyle {
        if active {
            self.active
        } else {
            self.idle
        }
    }
}

/// A hyperlink span inside a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLink {
    /// Visible text.
    pub text: SharedString,
    /// Target URL.
    pub url: SharedString,
    /// Idle and active styles.
    pub styles: LinkStyles,
}

impl StyledLink {
    /// Requests the host to open this link.
    pub fn activate(&self, handler: &dyn UriHandler) {
        tracing::info!(text = %self.text, url = %self.url, "Opening footer link");
        handler.open_uri(&self.url);
    }
}

/// A run of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum TextRun {
    /// Unstyled text.
    Plain(SharedString),
    /// Hyperlink.
    Link(StyledLink),
}

impl TextRun {
    fn text(&self) -> &str {
        match self {
            TextRun::Plain(text) => text,
            TextRun::Link(link) => &link.text,
        }
    }
}

/// An immutable paragraph of plain and link runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    runs: Vec<TextRun>,
}

impl RichText {
    /// Starts a new paragraph.
    pub fn builder() -> RichTextBuilder {
        RichTextBuilder::default()
    }

    /// All runs in order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Link runs in order.
    pub fn links(&self) -> impl Iterator<Item = &StyledLink> {
        self.runs.iter().filter_map(|run| match run {
            TextRun::Link(link) => Some(link),
            TextRun::Plain(_) => None,
        })
    }

    /// The paragraph as one string.
    pub fn text(&self) -> String {
        self.runs.iter().map(TextRun::text).collect()
    }

    /// Byte ranges of the link runs within [`RichText::text`].
    pub fn link_ranges(&self) -> Vec<Range<usize>> {
        let mut offset = 0;
        let mut ranges = Vec::new();
        for run in &self.runs {
            let len = run.text().len();
            if let TextRun::Link(_) = run {
                ranges.push(offset..offset + len);
            }
            offset += len;
        }
        ranges
    }

    /// Index of the link covering a byte offset, if any.
    pub fn link_at(&self, offset: usize) -> Option<usize> {
        self.link_ranges()
            .iter()
            .position(|range| range.contains(&offset))
    }

    /// Highlights for every link, given the index of the active one.
    pub fn highlights(&self, active: Option<usize>) -> Vec<(Range<usize>, HighlightStyle)> {
        self.link_ranges()
            .into_iter()
            .zip(self.links())
            .enumerate()
            .map(|(ix, (range, link))| {
                let style = link.styles.style(active == Some(ix));
                (range, style.to_highlight())
            })
            .collect()
    }
}

/// Builder for [`RichText`].
#[derive(Debug, Default)]
pub struct RichTextBuilder {
    runs: Vec<TextRun>,
}

impl RichTextBuilder {
    /// Appends plain text.
    pub fn append(mut self, text: impl Into<SharedString>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.runs.push(TextRun::Plain(text));
        }
        self
    }

    /// Appends a link.
    pub fn styled_link(
        mut self,
        url: impl Into<SharedString>,
        text: impl Into<SharedString>,
        styles: LinkStyles,
    ) -> Self {
        self.runs.push(TextRun::Link(StyledLink {
            text: text.into(),
            url: url.into(),
            styles,
        }));
        self
    }

    /// Finishes the paragraph.
    pub fn build(self) -> RichText {
        RichText { runs: self.runs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockUriHandler;
    use mockall::predicate::eq;

    fn sample() -> RichText {
        let styles = LinkStyles::primary(&ThemeColors::light());
        RichText::builder()
            .append("Built with ")
            .styled_link("https://a.example", "A", styles)
            .append(" and ")
            .styled_link("https://b.example", "Bee", styles)
            .append(".")
            .build()
    }

    #[test]
    fn text_concatenates_runs() {
        assert_eq!(sample().text(), "Built with A and Bee.");
    }

    #[test]
    fn link_ranges_cover_link_text() {
        let text = sample();
        let full = text.text();
        let ranges = text.link_ranges();
        assert_eq!(ranges, vec![11..12, 17..20]);
        assert_eq!(&full[ranges[0].clone()], "A");
        assert_eq!(&full[ranges[1].clone()], "Bee");
    }

    #[test]
    fn link_at_offsets() {
        let text = sample();
        assert_eq!(text.link_at(0), None);
        assert_eq!(text.link_at(11), Some(0));
        assert_eq!(text.link_at(12), None);
        assert_eq!(text.link_at(19), Some(1));
        assert_eq!(text.link_at(20), None);
    }

    #[test]
    fn empty_plain_runs_dropped() {
        let text = RichText::builder().append("").append("x").build();
        assert_eq!(text.runs().len(), 1);
    }

    #[test]
    fn underline_only_when_active() {
        let primary = Some(ThemeColors::dark().primary);
        let styles = LinkStyles::primary(&ThemeColors::dark());

        let idle = styles.style(false);
        assert!(!idle.underline);
        assert_eq!(idle.color, primary);

        let active = styles.style(true);
        assert!(active.underline);
        assert_eq!(active.color, primary);
    }

    #[test]
    fn highlights_mark_active_link() {
        let text = sample();
        let highlights = text.highlights(Some(1));
        assert_eq!(highlights.len(), 2);
        assert!(highlights[0].1.underline.is_none());
        assert!(highlights[1].1.underline.is_some());

        let idle = text.highlights(None);
        assert!(idle.iter().all(|(_, h)| h.underline.is_none()));

        // An index past the last link leaves everything idle.
        let stale = text.highlights(Some(5));
        assert_eq!(stale, idle);
    }

    #[test]
    fn activate_opens_exact_url() {
        let text = sample();
        let link = text.links().nth(1).unwrap();

        let mut handler = MockUriHandler::new();
        handler
            .expect_open_uri()
            .with(eq("https://b.example"))
            .times(1)
            .return_const(());

        link.activate(&handler);
    }
}
