use grove::cluster::{Clustering, Dbscan, NeighborIndex};
use grove::{Point, SectorScatter, Site};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 0..60)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

fn as_sets(clusters: &[Vec<usize>]) -> BTreeSet<BTreeSet<usize>> {
    clusters
        .iter()
        .map(|c| c.iter().copied().collect())
        .collect()
}

proptest! {
    #[test]
    fn prop_partition_is_total_and_disjoint(
        data in points_strategy(),
        eps in 0.5f64..30.0,
        min_pts in 1usize..6
    ) {
        let result = Dbscan::new(eps, min_pts).fit(&data).unwrap();

        let mut seen = vec![0usize; data.len()];
        for cluster in &result.clusters {
            prop_assert!(!cluster.is_empty());
            for &idx in cluster {
                seen[idx] += 1;
            }
        }
        for &idx in &result.noise {
            seen[idx] += 1;
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
        prop_assert_eq!(result.n_points(), data.len());
    }

    #[test]
    fn prop_core_points_are_never_noise(
        data in points_strategy(),
        eps in 0.5f64..30.0,
        min_pts in 1usize..6
    ) {
        let result = Dbscan::new(eps, min_pts).fit(&data).unwrap();

        for (i, p) in data.iter().enumerate() {
            let within = data.iter().filter(|q| p.distance(q) <= eps).count();
            if within >= min_pts {
                prop_assert!(result.cluster_of(i).is_some());
            }
        }
    }

    #[test]
    fn prop_every_cluster_has_a_core_point(
        data in points_strategy(),
        eps in 0.5f64..30.0,
        min_pts in 1usize..6
    ) {
        let result = Dbscan::new(eps, min_pts).fit(&data).unwrap();

        for cluster in &result.clusters {
            let has_core = cluster.iter().any(|&i| {
                data.iter().filter(|q| data[i].distance(q) <= eps).count() >= min_pts
            });
            prop_assert!(has_core);
        }
    }

    #[test]
    fn prop_noise_shrinks_as_eps_grows(
        data in points_strategy(),
        eps in 0.5f64..20.0,
        extra in 0.0f64..20.0,
        min_pts in 1usize..6
    ) {
        let narrow = Dbscan::new(eps, min_pts).fit(&data).unwrap();
        let wide = Dbscan::new(eps + extra, min_pts).fit(&data).unwrap();

        let narrow_noise: BTreeSet<usize> = narrow.noise.iter().copied().collect();
        prop_assert!(wide.noise.iter().all(|i| narrow_noise.contains(i)));
    }

    #[test]
    fn prop_repeat_runs_give_same_partition(
        data in points_strategy(),
        eps in 0.5f64..30.0,
        min_pts in 1usize..6
    ) {
        let model = Dbscan::new(eps, min_pts);
        let a = model.fit(&data).unwrap();
        let b = model.fit(&data).unwrap();

        prop_assert_eq!(as_sets(&a.clusters), as_sets(&b.clusters));
        prop_assert_eq!(a.noise, b.noise);
    }

    #[test]
    fn prop_grid_index_matches_brute_force(
        data in points_strategy(),
        eps in 0.5f64..30.0,
        min_pts in 1usize..6
    ) {
        let brute = Dbscan::new(eps, min_pts).fit(&data).unwrap();
        let grid = Dbscan::new(eps, min_pts)
            .with_index(NeighborIndex::Grid)
            .fit(&data)
            .unwrap();
        prop_assert_eq!(brute, grid);
    }

    #[test]
    fn prop_min_pts_one_leaves_no_noise(
        data in points_strategy(),
        eps in 0.01f64..30.0
    ) {
        let result = Dbscan::new(eps, 1).fit(&data).unwrap();
        prop_assert!(result.noise.is_empty());
    }

    #[test]
    fn prop_generated_points_respect_site(
        seed in any::<u64>(),
        count in 0usize..600,
        sectors in 1usize..9
    ) {
        let site = Site::default();
        let scatter = SectorScatter::new(sectors);
        let points = scatter.generate_seeded(count, &site, Some(seed)).unwrap();

        prop_assert!(points.len() <= count.min(500));
        let max_r = scatter.max_radius(&site);
        for p in &points {
            let d = p.distance(&site.center);
            prop_assert!(d >= site.min_radius - 1e-9);
            prop_assert!(d <= max_r + 1e-9);
        }
    }
}

#[test]
fn generated_run_scenario() {
    let site = Site::default();
    let scatter = SectorScatter::new(4);
    let points = scatter.generate_seeded(100, &site, Some(2024)).unwrap();
    assert!(points.len() <= 100);

    let result = Dbscan::new(20.0, 4).fit(&points).unwrap();
    assert_eq!(result.n_points(), points.len());

    let zones = result.summaries(&points).unwrap();
    assert_eq!(zones.len(), result.n_clusters());
    for zone in &zones {
        assert!(zone.size >= 1);
        let d = zone.centroid.distance(&site.center);
        assert!(d <= scatter.max_radius(&site));
    }
}

#[cfg(feature = "serde")]
#[test]
fn result_round_trips_through_json() {
    let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(9.0, 9.0)];
    let result = Dbscan::new(1.5, 2).fit(&points).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: grove::ClusterResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);

    let scatter: SectorScatter = serde_json::from_str(r#"{"sector_count": 6}"#).unwrap();
    assert_eq!(scatter.sector_count, 6);
    assert_eq!(scatter.plane_size, 600.0);
}
