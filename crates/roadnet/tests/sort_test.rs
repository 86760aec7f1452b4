use roadnet::sort_node_ids;

fn counts(ids: &[u32]) -> std::collections::BTreeMap<u32, usize> {
    let mut out = std::collections::BTreeMap::new();
    for &id in ids {
        *out.entry(id).or_insert(0) += 1;
    }
    out
}

#[test]
fn sorts_ascending() {
    let mut ids = vec![7, 3, 9, 0, 5, 2];
    sort_node_ids(&mut ids);
    assert_eq!(ids, vec![0, 2, 3, 5, 7, 9]);
}

#[test]
fn result_is_a_permutation_of_the_input() {
    let mut ids = vec![4, 4, 1, 8, 1, 1, 30, 2];
    let before = counts(&ids);
    sort_node_ids(&mut ids);
    assert_eq!(counts(&ids), before);
    assert!(ids.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn sorting_a_sorted_sequence_is_a_no_op() {
    let mut ids = vec![0, 1, 2, 3, 4, 5];
    sort_node_ids(&mut ids);
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn reverse_ordered_input() {
    let mut ids: Vec<u32> = (0..50).rev().collect();
    sort_node_ids(&mut ids);
    assert_eq!(ids, (0..50).collect::<Vec<u32>>());
}

#[test]
fn all_equal_elements() {
    let mut ids = vec![6; 17];
    sort_node_ids(&mut ids);
    assert_eq!(ids, vec![6; 17]);
}

#[test]
fn empty_and_singleton_are_no_ops() {
    let mut empty: Vec<u32> = Vec::new();
    sort_node_ids(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![3];
    sort_node_ids(&mut one);
    assert_eq!(one, vec![3]);
}
