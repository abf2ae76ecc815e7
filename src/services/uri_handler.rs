//! URI handler seam.

#[cfg(test)]
use mockall::automock;

/// Opens external links in the platform's default handler.
///
/// Implementations must not keep navigation state. Failures are reported
/// by the platform, not returned to the caller.
#[cfg_attr(test, automock)]
pub trait UriHandler {
    /// Requests that `uri` be opened.
    fn open_uri(&self, uri: &str);
}

impl UriHandler for gpui::App {
    fn open_uri(&self, uri: &str) {
        self.open_url(uri);
    }
}
