//! Name-keyed dictionary store backing every dictionary object.
//!
//! A fixed-size bucket array indexed by `hash % slot_count`, with a
//! singly-linked overflow chain per slot. Small PDF dictionaries (a
//! handful of entries) stay on the direct slots; collisions walk a short
//! chain. The table never grows: the slot count is fixed at creation.

use crate::model::objects::{Name, PdfObject};

/// Default slot count for dictionaries built by the parser. A tunable
/// constant, not a hard limit: entries beyond the slot count chain.
pub const DEFAULT_DICT_SLOTS: usize = 256;

#[derive(Debug, Clone)]
struct Entry {
    key: Name,
    value: PdfObject,
    next: Option<Box<Entry>>,
}

/// Fixed-capacity chained hash map from [`Name`] to [`PdfObject`].
///
/// Holds at most one entry per distinct name; inserting an existing key
/// overwrites its value in place without disturbing chain order. There
/// is no deletion and no rehashing.
#[derive(Debug, Clone)]
pub struct Dict {
    slots: Vec<Option<Box<Entry>>>,
    len: usize,
}

impl Dict {
    /// Create a store with [`DEFAULT_DICT_SLOTS`] slots.
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_DICT_SLOTS)
    }

    /// Create a store with `slots` buckets (clamped to at least one).
    pub fn with_slots(slots: usize) -> Self {
        let slots = slots.max(1);
        Self {
            slots: (0..slots).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at creation.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_index(&self, key: &Name) -> usize {
        (key.hash() % self.slots.len() as u64) as usize
    }

    /// Insert a key/value pair, overwriting in place if the key exists.
    pub fn insert(&mut self, key: Name, value: PdfObject) {
        let idx = self.slot_index(&key);
        let mut tail = &mut self.slots[idx];
        loop {
            match tail {
                Some(entry) => {
                    if entry.key == key {
                        entry.value = value;
                        return;
                    }
                    tail = &mut entry.next;
                }
                None => {
                    *tail = Some(Box::new(Entry {
                        key,
                        value,
                        next: None,
                    }));
                    self.len += 1;
                    return;
                }
            }
        }
    }

    /// Look up a value by name.
    pub fn get(&self, key: &Name) -> Option<&PdfObject> {
        let idx = self.slot_index(key);
        let mut entry = self.slots[idx].as_deref();
        while let Some(e) = entry {
            if e.key == *key {
                return Some(&e.value);
            }
            entry = e.next.as_deref();
        }
        None
    }

    /// Look up by a string key, e.g. `dict.get_str("Type")`.
    pub fn get_str(&self, key: &str) -> Option<&PdfObject> {
        self.get(&Name::from(key))
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &Name) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over entries in slot order, chains walked front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
            cur: None,
        }
    }
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

/// Iterator over `(&Name, &PdfObject)` entries.
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Option<Box<Entry>>>,
    cur: Option<&'a Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Name, &'a PdfObject);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.cur {
                self.cur = e.next.as_deref();
                return Some((&e.key, &e.value));
            }
            match self.slots.next() {
                Some(slot) => self.cur = slot.as_deref(),
                None => return None,
            }
        }
    }
}
