//! A single colored facelet and the attribute map trackers stamp onto it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;

/// An opaque key minted by a tracker. Keys are never reused within a
/// process, so a tracker can stamp a key and later find the unique slice
/// carrying it without ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttrKey(u64);

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

impl AttrKey {
    /// Mints a fresh key, unique for the lifetime of the process.
    pub fn fresh() -> Self {
        AttrKey(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

/// Whatever a tracker wants to stamp alongside its key: usually nothing
/// more than presence, but some trackers tag a role or direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Present,
    Tag(String),
    Int(i64),
}

/// A single colored facelet. Carries a [`Color`] and a small set of
/// tracker-stamped attributes that survive any rotation moving this
/// facelet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartEdge {
    pub color: Color,
    attributes: HashMap<AttrKey, AttrValue>,
}

impl PartEdge {
    pub fn new(color: Color) -> Self {
        PartEdge { color, attributes: HashMap::new() }
    }

    pub fn set_attr(&mut self, key: AttrKey, value: AttrValue) {
        self.attributes.insert(key, value);
    }

    pub fn get_attr(&self, key: AttrKey) -> Option<&AttrValue> {
        self.attributes.get(&key)
    }

    pub fn remove_attr(&mut self, key: AttrKey) -> Option<AttrValue> {
        self.attributes.remove(&key)
    }

    pub fn has_attr(&self, key: AttrKey) -> bool {
        self.attributes.contains_key(&key)
    }

    pub fn clear_attrs(&mut self) {
        self.attributes.clear();
    }

    /// Attribute keys carried on this facelet, for tracker scans.
    pub fn attr_keys(&self) -> impl Iterator<Item = AttrKey> + '_ {
        self.attributes.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_keys_are_distinct() {
        let a = AttrKey::fresh();
        let b = AttrKey::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn attribute_round_trips_and_clears() {
        let mut e = PartEdge::new(Color::Blue);
        let k = AttrKey::fresh();
        assert!(!e.has_attr(k));
        e.set_attr(k, AttrValue::Tag("tracked".into()));
        assert!(e.has_attr(k));
        assert_eq!(e.remove_attr(k), Some(AttrValue::Tag("tracked".into())));
        assert!(!e.has_attr(k));
    }

    #[test]
    fn clear_attrs_removes_everything_but_keeps_color() {
        let mut e = PartEdge::new(Color::Red);
        e.set_attr(AttrKey::fresh(), AttrValue::Present);
        e.clear_attrs();
        assert_eq!(e.attr_keys().count(), 0);
        assert_eq!(e.color, Color::Red);
    }
}
