//! Ordered key/value pairs read from a `.env` file.

use indexmap::IndexMap;

/// Ordered mapping of environment variable names to values.
///
/// Keys keep the position of their first appearance; a repeated key
/// overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: IndexMap<String, String>,
}

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `.env` text.
    ///
    /// Blank lines and lines starting with `#` are ignored. Each remaining line
    /// splits at its first `=`; lines without one, or with an empty key, are
    /// skipped. A value wrapped in a single matching pair of `"` or `'` loses
    /// that pair. No escape processing is performed.
    pub fn parse(contents: &str) -> Self {
        let mut map = Self::new();

        for line in contents.split('\n') {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            map.insert(key, strip_matching_quotes(value.trim()));
        }

        map
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

fn strip_matching_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_in_order() {
        let map = EnvMap::parse("B=2\nA=1\n");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(map.get("A"), Some("1"));
    }

    #[test]
    fn last_assignment_wins() {
        let map = EnvMap::parse("A=1\nA=2");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A"), Some("2"));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let map = EnvMap::parse("# A=1\n\n   \n  # note\nB=2");
        assert!(!map.contains_key("A"));
        assert!(!map.contains_key("# A"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn splits_on_first_equals_only() {
        let map = EnvMap::parse("DATABASE_URL=postgres://u:p@h/db?sslmode=require");
        assert_eq!(map.get("DATABASE_URL"), Some("postgres://u:p@h/db?sslmode=require"));
    }

    #[test]
    fn strips_one_pair_of_matching_quotes() {
        let map = EnvMap::parse("A=\"x\"\nB='y'\nC=\"z'\nD=\"\"q\"\"\nE=\"");
        assert_eq!(map.get("A"), Some("x"));
        assert_eq!(map.get("B"), Some("y"));
        assert_eq!(map.get("C"), Some("\"z'"));
        assert_eq!(map.get("D"), Some("\"q\""));
        assert_eq!(map.get("E"), Some("\""));
    }

    #[test]
    fn trims_keys_and_values() {
        let map = EnvMap::parse("  KEY  =  value with spaces  \r\n");
        assert_eq!(map.get("KEY"), Some("value with spaces"));
    }

    #[test]
    fn skips_lines_without_key_or_equals() {
        let map = EnvMap::parse("=orphan\nNOEQUALS\nOK=");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("OK"), Some(""));
    }
}
