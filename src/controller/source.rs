use std::path::{Path, PathBuf};

/// Scheme prefix the player expects for directory locations.
pub const DIRECTORY_SCHEME: &str = "directory://";

/// Where a track to enqueue comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackSource {
    /// Location typed by the user, passed through untouched
    Location(String),

    /// Directory picked in the file chooser
    Directory(PathBuf),
}

impl TrackSource {
    /// Pick the source from the text field and the chooser selection.
    ///
    /// Non-empty text wins over the chooser; an empty or unset chooser
    /// selection alongside empty text yields `None`.
    pub fn resolve(text: Option<&str>, chooser: Option<&Path>) -> Option<Self> {
        if let Some(text) = text.filter(|text| !text.is_empty()) {
            return Some(Self::Location(text.to_string()));
        }

        chooser
            .filter(|path| !path.as_os_str().is_empty())
            .map(|path| Self::Directory(path.to_path_buf()))
    }

    /// Location handed to the player's playlist.
    pub fn uri(&self) -> String {
        match self {
            Self::Location(location) => location.clone(),
            Self::Directory(path) => format!("{DIRECTORY_SCHEME}{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_wins_over_chooser() {
        let source = TrackSource::resolve(Some("http://example.org/a.ogg"), Some(Path::new("/a")));

        assert_eq!(
            source,
            Some(TrackSource::Location("http://example.org/a.ogg".to_string()))
        );
    }

    #[test]
    fn directory_gets_scheme_prefix() {
        let source = TrackSource::resolve(Some(""), Some(Path::new("/a/b"))).unwrap();

        assert_eq!(source.uri(), "directory:///a/b");
    }

    #[test]
    fn nothing_selected_resolves_to_none() {
        assert_eq!(TrackSource::resolve(None, None), None);
        assert_eq!(TrackSource::resolve(Some(""), None), None);
        assert_eq!(TrackSource::resolve(Some(""), Some(Path::new(""))), None);
    }
}
