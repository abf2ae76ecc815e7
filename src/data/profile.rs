//! Profile header and footer content.

/// Header content shown above the link grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Remote avatar image.
    pub avatar_url: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line tagline under the name.
    pub tagline: &'static str,
}

/// The page owner's profile.
pub const PROFILE: Profile = Profile {
    avatar_url: "https://avatars.githubusercontent.com/u/64779880?v=4",
    name: "Anand Bose",
    tagline: "I'm passionate about building software with Kotlin and Compose.",
};

/// A run of the attribution footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterSegment {
    /// Plain text.
    Text(&'static str),
    /// Hyperlink with visible text and target URL.
    Link {
        /// Visible text.
        text: &'static str,
        /// Target URL.
        url: &'static str,
    },
}

/// Attribution footer, in reading order.
pub const FOOTER: &[FooterSegment] = &[
    FooterSegment::Text("This website is built with "),
    FooterSegment::Link {
        text: "Compose Multiplatform",
        url: "https://www.jetbrains.com/compose-multiplatform/",
    },
    FooterSegment::Text(" and "),
    FooterSegment::Link {
        text: "Kotlin/WASM",
        url: "https://kotlinlang.org/docs/wasm-overview.html",
    },
    FooterSegment::Text(". The icons are sourced from "),
    FooterSegment::Link {
        text: "icons8.com",
        url: "https://icons8.com",
    },
    FooterSegment::Text(
        " and converted to Vector Drawable using ShapeShifter. Source code is available on ",
    ),
    FooterSegment::Link {
        text: "GitHub",
        url: "https://github.com/anand-bose/anand-bose.github.io",
    },
    FooterSegment::Text("."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_links_in_order() {
        let links: Vec<_> = FOOTER
            .iter()
            .filter_map(|s| match s {
                FooterSegment::Link { text, .. } => Some(*text),
                FooterSegment::Text(_) => None,
            })
            .collect();
        assert_eq!(
            links,
            vec!["Compose Multiplatform", "Kotlin/WASM", "icons8.com", "GitHub"]
        );
    }

    #[test]
    fn footer_alternates_text_and_links() {
        assert!(matches!(FOOTER.first(), Some(FooterSegment::Text(_))));
        assert!(matches!(FOOTER.last(), Some(FooterSegment::Text("."))));
        for pair in FOOTER.windows(2) {
            let both_links = matches!(pair[0], FooterSegment::Link { .. })
                && matches!(pair[1], FooterSegment::Link { .. });
            assert!(!both_links);
        }
    }

    #[test]
    fn profile_avatar_is_remote() {
        assert!(PROFILE.avatar_url.starts_with("https://"));
        assert!(!PROFILE.name.is_empty());
    }
}
