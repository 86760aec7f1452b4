//! In-place ordering of delivery location ids.

use crate::graph::NodeId;

/// Sort `ids` ascending, in place.
///
/// Partition-exchange sort with the last element of the active range as
/// pivot. Not stable; empty and singleton ranges are no-ops. Worst case
/// O(n²) with recursion depth bounded by the range length, which is fine at
/// delivery-list scale.
pub fn sort_node_ids(ids: &mut [NodeId]) {
    if ids.len() <= 1 {
        return;
    }
    let pivot_index = partition(ids);
    let (lower, upper) = ids.split_at_mut(pivot_index);
    sort_node_ids(lower);
    sort_node_ids(&mut upper[1..]);
}

/// Lomuto partition: everything `<=` the pivot ends up before it. Returns
/// the pivot's final index.
fn partition(ids: &mut [NodeId]) -> usize {
    let last = ids.len() - 1;
    let pivot = ids[last];
    let mut boundary = 0;
    for j in 0..last {
        if ids[j] <= pivot {
            ids.swap(boundary, j);
            boundary += 1;
        }
    }
    ids.swap(boundary, last);
    boundary
}
