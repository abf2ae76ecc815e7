//! Link registry.
//!
//! The fixed, ordered table of profile links shown in the page grid.

use thiserror::Error;
use url::Url;

/// Icon resource identifiers.
///
/// Each variant names an asset in the bundled icon set. Resolution to
/// bytes happens in the asset source, never in page logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    /// Medium logo.
    Medium,
    /// LinkedIn logo.
    LinkedIn,
    /// GitHub logo.
    GitHub,
    /// Mastodon logo.
    Mastodon,
    /// Bluesky logo.
    Bluesky,
    /// Generic self-hosted server glyph.
    SelfHosted,
}

impl IconRef {
    /// Returns the asset path of this icon.
    pub fn asset_path(&self) -> &'static str {
        match self {
            IconRef::Medium => "icons/social_medium.svg",
            IconRef::LinkedIn => "icons/social_linkedin.svg",
            IconRef::GitHub => "icons/social_github.svg",
            IconRef::Mastodon => "icons/social_mastodon.svg",
            IconRef::Bluesky => "icons/social_bluesky.svg",
            IconRef::SelfHosted => "icons/selfhosted.svg",
        }
    }

    /// Returns all icon references.
    pub fn all() -> &'static [IconRef] {
        &[
            IconRef::Medium,
            IconRef::LinkedIn,
            IconRef::GitHub,
            IconRef::Mastodon,
            IconRef::Bluesky,
            IconRef::SelfHosted,
        ]
    }
}

/// A single profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRecord {
    /// Icon shown on the button.
    pub icon: IconRef,
    /// Button label.
    pub title: &'static str,
    /// Absolute URL opened on activation.
    pub url: &'static str,
}

/// Errors found when validating a link record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The record has an empty title.
    #[error("link {url} has an empty title")]
    EmptyTitle {
        /// URL of the offending record.
        url: &'static str,
    },

    /// The URL does not parse.
    #[error("link {title} has an invalid url {url}: {reason}")]
    InvalidUrl {
        /// Title of the offending record.
        title: &'static str,
        /// The raw URL.
        url: &'static str,
        /// Parser message.
        reason: String,
    },

    /// The URL parses but is not an absolute http(s) link with a host.
    #[error("link {title} url {url} is not an absolute http(s) url")]
    NotWebUrl {
        /// Title of the offending record.
        title: &'static str,
        /// The raw URL.
        url: &'static str,
    },
}

impl LinkRecord {
    /// Parses the URL, checking that it is an absolute http(s) URL with a
    /// host.
    pub fn parsed_url(&self) -> Result<Url, LinkError> {
        let url = Url::parse(self.url).map_err(|e| LinkError::InvalidUrl {
            title: self.title,
            url: self.url,
            reason: e.to_string(),
        })?;

        let web = matches!(url.scheme(), "http" | "https");
        if !web || url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(LinkError::NotWebUrl {
                title: self.title,
                url: self.url,
            });
        }

        Ok(url)
    }

    /// Checks both record invariants.
    pub fn validate(&self) -> Result<(), LinkError> {
        if self.title.trim().is_empty() {
            return Err(LinkError::EmptyTitle { url: self.url });
        }
        self.parsed_url().map(|_| ())
    }
}

/// The profile links, in display order.
pub const LINKS: [LinkRecord; 6] = [
    LinkRecord {
        icon: IconRef::Medium,
        title: "Medium",
        url: "https://medium.com/@anandbose",
    },
    LinkRecord {
        icon: IconRef::LinkedIn,
        title: "LinkedIn",
        url: "https://www.linkedin.com/in/anand-bose/",
    },
    LinkRecord {
        icon: IconRef::GitHub,
        title: "GitHub",
        url: "https://github.com/anand-bose",
    },
    LinkRecord {
        icon: IconRef::Mastodon,
        title: "Mastodon",
        url: "https://mastodon.online/@anandbose",
    },
    LinkRecord {
        icon: IconRef::Bluesky,
        title: "Bluesky",
        url: "https://bsky.app/profile/anandbose.dev",
    },
    LinkRecord {
        icon: IconRef::SelfHosted,
        title: "Self Hosted",
        url: "https://a-b.im",
    },
];

/// Returns the registry as a slice.
pub fn links() -> &'static [LinkRecord] {
    &LINKS
}

/// Validates every record in the registry.
pub fn validate_registry() -> Result<(), LinkError> {
    links().iter().try_for_each(LinkRecord::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_six_links_in_order() {
        let titles: Vec<_> = links().iter().map(|l| l.title).collect();
        assert_eq!(
            titles,
            vec!["Medium", "LinkedIn", "GitHub", "Mastodon", "Bluesky", "Self Hosted"]
        );
    }

    #[test]
    fn registry_is_valid() {
        assert_eq!(validate_registry(), Ok(()));
        for link in links() {
            let url = link.parsed_url().unwrap();
            assert_eq!(url.scheme(), "https", "{}", link.url);
        }
    }

    #[test]
    fn every_icon_is_used_once() {
        for icon in IconRef::all() {
            assert_eq!(links().iter().filter(|l| l.icon == *icon).count(), 1);
        }
    }

    #[test]
    fn asset_paths_are_svg() {
        for icon in IconRef::all() {
            assert!(icon.asset_path().starts_with("icons/"));
            assert!(icon.asset_path().ends_with(".svg"));
        }
    }

    #[test]
    fn empty_title_rejected() {
        let link = LinkRecord {
            icon: IconRef::GitHub,
            title: "  ",
            url: "https://github.com",
        };
        assert_eq!(
            link.validate(),
            Err(LinkError::EmptyTitle {
                url: "https://github.com"
            })
        );
    }

    #[test]
    fn relative_url_rejected() {
        let link = LinkRecord {
            icon: IconRef::GitHub,
            title: "GitHub",
            url: "/anand-bose",
        };
        assert!(matches!(link.validate(), Err(LinkError::InvalidUrl { .. })));

        let link = LinkRecord {
            icon: IconRef::GitHub,
            title: "GitHub",
            url: "mailto:someone@example.com",
        };
        assert!(matches!(link.validate(), Err(LinkError::NotWebUrl { .. })));
    }

    #[test]
    fn non_http_scheme_rejected() {
        for url in ["ftp://example.com/profile", "file:///home/anand"] {
            let link = LinkRecord {
                icon: IconRef::SelfHosted,
                title: "Self Hosted",
                url,
            };
            let err = link.validate().unwrap_err();
            assert!(matches!(err, LinkError::NotWebUrl { .. }), "{url}");
            assert!(err.to_string().contains("http(s)"));
        }

        let link = LinkRecord {
            icon: IconRef::SelfHosted,
            title: "Self Hosted",
            url: "http://a-b.im",
        };
        assert!(link.validate().is_ok());
    }
}
