//! Conversion between application property maps and wire property lists.
//!
//! The wire keeps properties as an ordered list that may repeat keys; the
//! application side works with a map. Going list -> map keeps the last
//! occurrence of a repeated key. Going map -> list sorts by key so that the
//! encoded form is reproducible across runs.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::metadata::KeyValue;

/// Convert a property map into a wire property list, sorted by key.
pub fn property_map_to_list<S: BuildHasher>(map: &HashMap<String, String, S>) -> Vec<KeyValue> {
    let mut list: Vec<KeyValue> = map
        .iter()
        .map(|(key, value)| KeyValue::new(key.as_str(), value.as_str()))
        .collect();
    list.sort_unstable_by(|a, b| a.key.cmp(&b.key));
    list
}

/// Fold a wire property list into a map. Later duplicates overwrite earlier ones.
pub fn property_list_to_map(list: &[KeyValue]) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(list.len());
    for kv in list {
        map.insert(kv.key.clone(), kv.value.clone());
    }
    map
}
