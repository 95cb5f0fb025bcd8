// ============================================================
// Layer 3 — Vocabulary Domain Type
// ============================================================
// An ordered mapping from token (lowercase word) to a positive
// integer ID. IDs are assigned densely from 1 upwards in strict
// first-seen order; ID 0 is reserved and never assigned to a
// real token — it denotes "unknown".
//
// ID assignment order is a correctness invariant here, not an
// implementation accident, so the type keeps two structures in
// sync: a HashMap for O(1) lookup and a Vec holding the tokens
// in insertion order (token at index i has ID i + 1). The Vec
// doubles as the reverse lookup used when decoding predictions.
//
// Serialisation keeps the original wire shape — a single JSON
// object `{ "token": id, ... }` — written in insertion order
// and validated on load (IDs must be unique and dense 1..=N).
//
// Reference: Rust Book §8 (HashMaps)
//            serde documentation (custom Serialize/Deserialize)

use std::collections::HashMap;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// The reserved ID for tokens not present in a vocabulary.
pub const UNKNOWN_ID: u32 = 0;

/// Insertion-ordered token → ID mapping, append-only during
/// construction and frozen for every downstream consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Tokens in first-seen order; tokens[i] has ID i + 1
    tokens: Vec<String>,

    /// Lookup map kept in sync with `tokens`
    ids: HashMap<String, u32>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct tokens (the highest assigned ID)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// The ID assigned to `token`, if any
    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.ids.get(token).copied()
    }

    /// Reverse lookup: the token holding `id`.
    /// Returns None for the reserved unknown ID 0 and for IDs
    /// beyond the highest assigned one.
    pub fn token_of(&self, id: u32) -> Option<&str> {
        if id == UNKNOWN_ID {
            return None;
        }
        self.tokens.get(id as usize - 1).map(String::as_str)
    }

    /// Iterate (token, id) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), (i + 1) as u32))
    }

    /// Assign the next ID to `token` if it is not already known.
    /// Returns true when a new ID was assigned. IDs are never
    /// reassigned or removed — the structure is write-once-per-key.
    pub(crate) fn insert(&mut self, token: &str) -> bool {
        if self.ids.contains_key(token) {
            return false;
        }
        let id = (self.tokens.len() + 1) as u32;
        self.ids.insert(token.to_string(), id);
        self.tokens.push(token.to_string());
        true
    }

    /// Rebuild a vocabulary from raw (token, id) entries,
    /// rejecting anything that breaks the dense 1..=N invariant.
    fn from_entries(entries: HashMap<String, u32>) -> Result<Self, String> {
        let n = entries.len();
        let mut slots: Vec<Option<String>> = vec![None; n];

        for (token, id) in entries {
            if id == UNKNOWN_ID || id as usize > n {
                return Err(format!(
                    "vocabulary id {} for token '{}' is outside the dense range 1..={}",
                    id, token, n
                ));
            }
            let slot = &mut slots[id as usize - 1];
            if slot.is_some() {
                return Err(format!("vocabulary id {} is assigned twice", id));
            }
            *slot = Some(token);
        }

        // Every slot is filled: n entries with unique ids in 1..=n
        let tokens: Vec<String> = slots.into_iter().flatten().collect();
        let ids = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), (i + 1) as u32))
            .collect();

        Ok(Self { tokens, ids })
    }
}

// Serialise as a single `{ token: id }` JSON object in
// insertion order — the shape the dataset and vocab files use.
impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
        for (token, id) in self.iter() {
            map.serialize_entry(token, &id)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Vocabulary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = HashMap::<String, u32>::deserialize(deserializer)?;
        Vocabulary::from_entries(entries).map_err(D::Error::custom)
    }
}
