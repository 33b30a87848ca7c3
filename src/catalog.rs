use crate::foundation::error::{MarqueeError, MarqueeResult};

/// One visual item a scroller displays: a label plus an icon reference.
///
/// The icon reference is opaque to the engine (typically a URL or asset
/// path); loading and fallback are the host's concern. Labels need not be
/// unique — display keys combine the label with the track index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogItem {
    /// Human-readable item name.
    pub label: String,
    /// Opaque reference to the item's icon (URL or asset path).
    pub icon_ref: String,
}

/// Ordered, possibly empty list of items supplied once at row mount.
///
/// Immutable after construction; a row regenerates its track only when
/// handed a catalog with different content.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Wrap an ordered item list. An empty catalog is valid and yields a
    /// static (non-scrolling) row.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Reject items that cannot be displayed: a blank `icon_ref` has
    /// nothing to render. Blank labels are allowed.
    pub fn validate(&self) -> MarqueeResult<()> {
        for (idx, item) in self.items.iter().enumerate() {
            if item.icon_ref.trim().is_empty() {
                return Err(MarqueeError::catalog(format!(
                    "item {idx} ('{}') has a blank icon_ref",
                    item.label
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a catalog from a JSON array of items.
    pub fn from_json_reader(reader: impl std::io::Read) -> MarqueeResult<Self> {
        let catalog: Catalog = serde_json::from_reader(reader)
            .map_err(|e| MarqueeError::serde(format!("parse catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "../tests/unit/catalog.rs"]
mod tests;
