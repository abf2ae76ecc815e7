//! Bundled icon assets.
//!
//! Icons are embedded at build time and served to gpui through
//! [`AssetSource`], keyed by [`IconRef::asset_path`].

use std::borrow::Cow;

use gpui::{AssetSource, SharedString};

use crate::data::IconRef;

/// Asset source serving the embedded icons.
pub struct Assets;

fn embedded(icon: IconRef) -> &'static [u8] {
    match icon {
        IconRef::Medium => include_bytes!("../../assets/icons/social_medium.svg").as_slice(),
        IconRef::LinkedIn => include_bytes!("../../assets/icons/social_linkedin.svg").as_slice(),
        IconRef::GitHub => include_bytes!("../../assets/icons/social_github.svg").as_slice(),
        IconRef::Mastodon => include_bytes!("../../assets/icons/social_mastodon.svg").as_slice(),
        IconRef::Bluesky => include_bytes!("../../assets/icons/social_bluesky.svg").as_slice(),
        IconRef::SelfHosted => include_bytes!("../../assets/icons/selfhosted.svg").as_slice(),
    }
}

impl Assets {
    /// Bytes of the asset at `path`, if bundled.
    pub fn get(path: &str) -> Option<&'static [u8]> {
        IconRef::all()
            .iter()
            .find(|icon| icon.asset_path() == path)
            .map(|icon| embedded(*icon))
    }
}

impl AssetSource for Assets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        let asset = Self::get(path);
        if asset.is_none() {
            tracing::warn!(path, "Requested asset is not bundled");
        }
        Ok(asset.map(Cow::Borrowed))
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        Ok(IconRef::all()
            .iter()
            .map(IconRef::asset_path)
            .filter(|asset| asset.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_is_bundled() {
        for icon in IconRef::all() {
            let bytes = Assets::get(icon.asset_path()).unwrap();
            assert!(bytes.starts_with(b"<svg"), "{:?}", icon);
        }
    }

    #[test]
    fn unknown_path_loads_nothing() {
        assert!(Assets.load("icons/missing.svg").unwrap().is_none());
    }

    #[test]
    fn list_filters_by_prefix() {
        assert_eq!(Assets.list("icons/").unwrap().len(), IconRef::all().len());
        assert_eq!(Assets.list("icons/social_").unwrap().len(), 5);
        assert!(Assets.list("fonts/").unwrap().is_empty());
    }
}
