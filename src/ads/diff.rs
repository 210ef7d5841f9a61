use super::data_types::AdRecord;

/// Compare two deduplicated snapshots and return `(removed, added)`:
/// records present only in `previous`, and records present only in
/// `current`. Membership is full-field equality, so a re-posting that only
/// changed its date shows up in both lists. Each output keeps the order of
/// the snapshot it came from.
#[must_use]
pub fn diff(previous: &[AdRecord], current: &[AdRecord]) -> (Vec<AdRecord>, Vec<AdRecord>) {
    let removed = previous
        .iter()
        .filter(|&ad| !current.contains(ad))
        .cloned()
        .collect();
    let added = current
        .iter()
        .filter(|&ad| !previous.contains(ad))
        .cloned()
        .collect();

    (removed, added)
}
