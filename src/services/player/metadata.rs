use std::collections::HashMap;

use zbus::zvariant::{OwnedValue, Value};

/// Metadata for a playlist item, as attribute name to string value
///
/// The player sends a dictionary of variants; string attributes are kept
/// verbatim and numeric ones (`status`, `length`, bitrates) are rendered
/// with their decimal representation. Attributes the player leaves out are
/// simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    fields: HashMap<String, String>,
}

impl TrackMetadata {
    /// Look up an attribute by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Artist attribute, if present.
    pub fn artist(&self) -> Option<&str> {
        self.get("artist")
    }

    /// Location of the item, if present.
    pub fn uri(&self) -> Option<&str> {
        self.get("URI")
    }

    /// Title attribute, if present.
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// Album attribute, if present.
    pub fn album(&self) -> Option<&str> {
        self.get("album")
    }

    /// Item length in seconds, if present and numeric.
    pub fn length_secs(&self) -> Option<i64> {
        self.get("length").and_then(|length| length.parse().ok())
    }

    /// Text shown for this item: the artist, else the location, else nothing.
    pub fn display_text(&self) -> String {
        match self.artist() {
            Some(artist) if !artist.is_empty() => artist.to_string(),
            _ => self.uri().unwrap_or_default().to_string(),
        }
    }

    /// Whether the player sent no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over attributes sorted by name.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        entries.sort_unstable();
        entries.into_iter()
    }
}

fn variant_to_string(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.as_str().to_string()),
        Value::ObjectPath(path) => Some(path.as_str().to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::U8(n) => Some(n.to_string()),
        Value::I16(n) => Some(n.to_string()),
        Value::U16(n) => Some(n.to_string()),
        Value::I32(n) => Some(n.to_string()),
        Value::U32(n) => Some(n.to_string()),
        Value::I64(n) => Some(n.to_string()),
        Value::U64(n) => Some(n.to_string()),
        Value::F64(n) => Some(n.to_string()),
        Value::Value(inner) => variant_to_string(inner),
        _ => None,
    }
}

impl From<&HashMap<String, OwnedValue>> for TrackMetadata {
    fn from(metadata: &HashMap<String, OwnedValue>) -> Self {
        let fields = metadata
            .iter()
            .filter_map(|(key, value)| variant_to_string(value).map(|text| (key.clone(), text)))
            .collect();

        Self { fields }
    }
}

impl From<HashMap<String, OwnedValue>> for TrackMetadata {
    fn from(metadata: HashMap<String, OwnedValue>) -> Self {
        Self::from(&metadata)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TrackMetadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(value: Value<'_>) -> OwnedValue {
        OwnedValue::try_from(value).unwrap()
    }

    #[test]
    fn display_text_prefers_artist() {
        let metadata =
            TrackMetadata::from_iter([("artist", "Nina Simone"), ("URI", "file:///a.ogg")]);

        assert_eq!(metadata.display_text(), "Nina Simone");
    }

    #[test]
    fn display_text_falls_back_to_uri_without_artist() {
        let metadata = TrackMetadata::from_iter([("title", "Sinnerman"), ("URI", "file:///a.ogg")]);

        assert_eq!(metadata.display_text(), "file:///a.ogg");
    }

    #[test]
    fn display_text_falls_back_to_uri_with_empty_artist() {
        let metadata = TrackMetadata::from_iter([("artist", ""), ("URI", "http://radio/stream")]);

        assert_eq!(metadata.display_text(), "http://radio/stream");
    }

    #[test]
    fn display_text_is_empty_without_artist_or_uri() {
        assert_eq!(TrackMetadata::default().display_text(), "");
    }

    #[test]
    fn variants_are_rendered_as_strings() {
        let mut raw = HashMap::new();
        raw.insert("artist".to_string(), owned(Value::from("Can")));
        raw.insert("status".to_string(), owned(Value::from(0i32)));
        raw.insert("length".to_string(), owned(Value::from(431i64)));
        raw.insert(
            "URI".to_string(),
            owned(Value::Value(Box::new(Value::from("file:///x.flac")))),
        );

        let metadata = TrackMetadata::from(raw);

        assert_eq!(metadata.artist(), Some("Can"));
        assert_eq!(metadata.get("status"), Some("0"));
        assert_eq!(metadata.length_secs(), Some(431));
        assert_eq!(metadata.uri(), Some("file:///x.flac"));
    }

    #[test]
    fn iter_sorted_orders_by_key() {
        let metadata = TrackMetadata::from_iter([("title", "t"), ("URI", "u"), ("album", "a")]);

        let keys: Vec<&str> = metadata.iter_sorted().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["URI", "album", "title"]);
    }
}
