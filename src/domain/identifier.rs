// Identifier allocation
//
// The next id is always recomputed from the current contents: max + 1, or 1 for
// an empty collection. There is no counter that survives removals, so removing
// the highest id and inserting again hands the same id out a second time.

use std::collections::BTreeMap;

pub type FilmId = u64;
pub type UserId = u64;

/// Next unused positive id for a collection keyed by id
pub fn next_id<V>(entries: &BTreeMap<u64, V>) -> u64 {
    entries
        .last_key_value()
        .map(|(max_id, _)| max_id + 1)
        .unwrap_or(1)
}
