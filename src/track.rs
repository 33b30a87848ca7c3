use crate::catalog::{Catalog, CatalogItem};

/// Number of catalog copies in a track. Three copies guarantee the
/// viewport never reveals the track's start/end boundary while the wrap
/// threshold stays at one catalog pass.
pub const TRACK_COPIES: usize = 3;

/// One slot of the tripled track: a catalog item plus its track index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TrackEntry {
    /// Position within the tripled track, `0..3 * catalog_len`.
    pub index: usize,
    /// The catalog item occupying this slot.
    pub item: CatalogItem,
}

impl TrackEntry {
    /// Stable render key for hosts that need one per slot. Labels may
    /// repeat across the track, so the track index disambiguates.
    pub fn display_key(&self) -> String {
        format!("{}-{}", self.item.label, self.index)
    }
}

/// The catalog concatenated with itself three times, in order.
///
/// Derived, read-only: never mutated after construction and regenerated
/// only when the catalog content changes (compared by fingerprint).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripledTrack {
    entries: Vec<TrackEntry>,
    segment_len: usize,
    fingerprint: u64,
}

impl TripledTrack {
    /// Build `catalog ++ catalog ++ catalog`, preserving element order and
    /// identity. Pure and deterministic; an empty catalog yields an empty
    /// track rather than an error.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let segment_len = catalog.len();
        let mut entries = Vec::with_capacity(segment_len * TRACK_COPIES);
        for copy in 0..TRACK_COPIES {
            for (i, item) in catalog.items().iter().enumerate() {
                entries.push(TrackEntry {
                    index: copy * segment_len + i,
                    item: item.clone(),
                });
            }
        }
        Self {
            entries,
            segment_len,
            fingerprint: catalog_fingerprint(catalog),
        }
    }

    /// Track length, `3 * segment_len`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when built from an empty catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of one untripled catalog pass.
    pub fn segment_len(&self) -> usize {
        self.segment_len
    }

    /// The slots in track order.
    pub fn entries(&self) -> &[TrackEntry] {
        &self.entries
    }

    /// Content fingerprint of the source catalog.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

/// Stable content hash of a catalog, used to detect catalog swaps.
pub fn catalog_fingerprint(catalog: &Catalog) -> u64 {
    let mut h = fnv1a64(0xcbf2_9ce4_8422_2325, &(catalog.len() as u64).to_le_bytes());
    for item in catalog {
        h = fnv1a64(h, item.label.as_bytes());
        h = fnv1a64(h, &[0xff]); // field separator
        h = fnv1a64(h, item.icon_ref.as_bytes());
        h = fnv1a64(h, &[0xfe]);
    }
    h
}

fn fnv1a64(seed: u64, bytes: &[u8]) -> u64 {
    let mut h = seed;
    for &b in bytes {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}

#[cfg(test)]
#[path = "../tests/unit/track.rs"]
mod tests;
