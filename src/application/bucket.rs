//! Grouping of records that carry the same change.
//!
//! Two records land in the same bucket when their removed and added lines,
//! in edit-script order, are identical. Reviewers can then look at one
//! representative per bucket instead of every copy of the same edit.

use std::collections::HashMap;

use crate::application::render::check_script;
use crate::domain::{Bucket, DiffRecord, LinePool, RenderError};
use crate::infra::hash::hash_prefixed_lines;

/// Hash of the changed lines of `record`; records without changes all share
/// one value. A malformed edit script is an error, never a partial hash.
pub fn change_hash(pool: &LinePool, record: &DiffRecord) -> Result<u64, RenderError> {
    check_script(pool, record)?;

    let mut changes = Vec::new();
    let (mut xi, mut yi) = (0, 0);
    for op in &record.ops {
        let removed = &record.lt[xi..xi + op.del];
        let added = &record.rt[yi..yi + op.add];
        changes.extend(removed.iter().map(|&id| ('-', pool.get(id).unwrap_or_default())));
        changes.extend(added.iter().map(|&id| ('+', pool.get(id).unwrap_or_default())));
        xi += op.del + op.keep;
        yi += op.add + op.keep;
    }
    Ok(hash_prefixed_lines(changes))
}

/// Groups records by [`change_hash`]. Buckets are named by the 16-digit hex
/// hash and ordered by first appearance; records keep their input order.
pub fn bucket_by_change(
    pool: &LinePool,
    records: impl IntoIterator<Item = DiffRecord>,
) -> Result<Vec<Bucket>, RenderError> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for record in records {
        let hash = change_hash(pool, &record)?;
        let slot = *index.entry(hash).or_insert_with(|| {
            buckets.push(Bucket {
                name: format!("{hash:016x}"),
                records: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].records.push(record);
    }

    log::debug!("grouped records into {} change buckets", buckets.len());
    Ok(buckets)
}
