use roadnet::{Error, RoadNetwork};

#[test]
fn roads_are_symmetric() {
    let mut g = RoadNetwork::new();
    g.add_road(1, 2, 7);

    assert_eq!(g.road(1, 2), Some(7));
    assert_eq!(g.road(2, 1), Some(7));
    assert!(g.has_intersection(1));
    assert!(g.has_intersection(2));
}

#[test]
fn reinserting_a_road_overwrites_the_length() {
    let mut g = RoadNetwork::new();
    g.add_road(0, 1, 5);
    g.add_road(0, 1, 3);

    assert_eq!(g.road(0, 1), Some(3));
    assert_eq!(g.road(1, 0), Some(3));
}

#[test]
fn isolated_intersections_are_counted() {
    let mut g = RoadNetwork::new();
    g.add_intersection(4);
    g.add_road(0, 1, 2);

    assert_eq!(g.intersection_count(), 3);
    assert!(g.has_intersection(4));
    assert_eq!(g.roads_from(4).count(), 0);
}

#[test]
fn roads_from_lists_every_neighbor() {
    let mut g = RoadNetwork::new();
    g.add_road(0, 1, 4);
    g.add_road(0, 2, 1);

    let mut neighbors: Vec<(u32, u64)> = g.roads_from(0).collect();
    neighbors.sort_unstable();
    assert_eq!(neighbors, vec![(1, 4), (2, 1)]);
}

#[test]
fn validate_rejects_zero_length_roads() {
    let mut g = RoadNetwork::new();
    g.add_road(0, 1, 1);
    g.add_road(1, 2, 0);

    let err = g.validate().unwrap_err();
    assert!(matches!(err, Error::ZeroWeightRoad { .. }));
}

#[test]
fn validate_accepts_positive_lengths() {
    let mut g = RoadNetwork::new();
    g.add_road(0, 1, 1);
    g.add_road(1, 2, 9);
    assert!(g.validate().is_ok());
}
