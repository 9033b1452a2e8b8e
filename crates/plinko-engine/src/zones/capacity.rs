/// Per-zone capacities distributing `total` particles as evenly as possible.
///
/// The first `total % zone_count` zones take one extra member, so the sum is
/// exactly `total` and no two zones differ by more than one. The result is
/// indexed by zone id and fixed for the whole division; zones do not consume
/// a shared schedule, they each own their capacity.
pub fn capacity_plan(total: usize, zone_count: usize) -> Vec<usize> {
    // Config validation rejects a zero zone count before a division starts.
    if zone_count == 0 {
        return Vec::new();
    }
    let base = total / zone_count;
    let leftover = total % zone_count;
    (0..zone_count)
        .map(|index| base + usize::from(index < leftover))
        .collect()
}
