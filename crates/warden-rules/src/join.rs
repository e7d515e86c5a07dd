//! Entity joiner: observed-record lookup by entity name.
//!
//! The default join keeps the first record seen per name. Rules that must
//! disambiguate duplicates (job status) select by a record key instead.
//! Lookups for absent names return `None`; rules turn that into a
//! missing-data violation rather than an error.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

/// Index records by entity name, keeping the FIRST record per name.
pub fn index_by_name<'a, R, F>(records: &'a [R], name: F) -> FxHashMap<&'a str, &'a R>
where
    F: Fn(&'a R) -> &'a str,
{
    let mut map = FxHashMap::default();
    map.reserve(records.len());
    for record in records {
        map.entry(name(record)).or_insert(record);
    }
    map
}

/// Index records by entity name, keeping per name the record with the
/// greatest `key`. Ties keep the record encountered first.
pub fn index_latest_by<'a, R, F, G, K>(
    records: &'a [R],
    name: F,
    key: G,
) -> FxHashMap<&'a str, &'a R>
where
    F: Fn(&'a R) -> &'a str,
    G: Fn(&'a R) -> K,
    K: PartialOrd,
{
    let mut map: FxHashMap<&'a str, (&'a R, K)> = FxHashMap::default();
    for record in records {
        let record_key = key(record);
        match map.entry(name(record)) {
            Entry::Occupied(mut slot) => {
                if record_key > slot.get().1 {
                    slot.insert((record, record_key));
                }
            }
            Entry::Vacant(slot) => {
                slot.insert((record, record_key));
            }
        }
    }
    map.into_iter()
        .map(|(entity, (record, _))| (entity, record))
        .collect()
}
