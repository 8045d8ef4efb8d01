//! The compiled asset table: name → content mapping for one build.

use rustc_hash::FxHashMap;

/// A single compiled output asset.
///
/// Holds the asset's full text content; `source()` and `size()` mirror the
/// accessor pair a host build tool exposes on its output assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildAsset {
    content: String,
}

impl BuildAsset {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Full text content of the asset.
    pub fn source(&self) -> &str {
        &self.content
    }

    /// Content length in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Mapping from asset name (e.g. `"main.js"`) to its compiled content.
///
/// Built once per build-emit event and read-only while templates render.
/// Only point lookups by name are needed; iteration order is irrelevant.
#[derive(Debug, Default)]
pub struct AssetTable {
    assets: FxHashMap<String, BuildAsset>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, asset: BuildAsset) {
        self.assets.insert(name.into(), asset);
    }

    pub fn get(&self, name: &str) -> Option<&BuildAsset> {
        self.assets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl FromIterator<(String, BuildAsset)> for AssetTable {
    fn from_iter<I: IntoIterator<Item = (String, BuildAsset)>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = AssetTable::new();
        table.insert("main.js", BuildAsset::new("console.log(1)"));

        assert!(table.contains("main.js"));
        assert_eq!(table.get("main.js").unwrap().source(), "console.log(1)");
        assert!(table.get("other.js").is_none());
    }

    #[test]
    fn test_size_is_byte_length() {
        let asset = BuildAsset::new("envelope content");
        assert_eq!(asset.size(), 16);

        // Multi-byte content counts bytes, not characters
        let asset = BuildAsset::new("héllo");
        assert_eq!(asset.size(), 6);
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = AssetTable::new();
        table.insert("a.css", BuildAsset::new("old"));
        table.insert("a.css", BuildAsset::new("new"));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a.css").unwrap().source(), "new");
    }
}
