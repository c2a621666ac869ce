//! Selection properties over seeded random point sets.

use knnlab_dataset::Label;
use knnlab_knn::{k_nearest, nearest_indices};
use knnlab_project::ProjectedPoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(rng: &mut impl Rng, n: usize) -> Vec<ProjectedPoint> {
    (0..n)
        .map(|row| ProjectedPoint {
            x: rng.random_range(-5.0..5.0),
            y: rng.random_range(-5.0..5.0),
            label: rng.random_range(0..3),
            row,
        })
        .collect()
}

fn dist(p: &ProjectedPoint, q: [f64; 2]) -> f64 {
    ((p.x - q[0]).powi(2) + (p.y - q[1]).powi(2)).sqrt()
}

#[test]
fn returns_exactly_k_distinct_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.random_range(1..60);
        let points = random_points(&mut rng, n);
        let k = rng.random_range(1..=n);
        let query = [rng.random_range(-6.0..6.0), rng.random_range(-6.0..6.0)];

        let set = k_nearest(&points, query, k).unwrap();
        assert_eq!(set.k(), k);

        let mut rows = set.rows();
        rows.sort_unstable();
        rows.dedup();
        assert_eq!(rows.len(), k, "members must be distinct");
        for m in &set.members {
            assert_eq!(*m, points[m.row]);
        }
    }
}

#[test]
fn no_excluded_point_is_closer() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.random_range(2..80);
        let points = random_points(&mut rng, n);
        let k = rng.random_range(1..n);
        let query = [rng.random_range(-6.0..6.0), rng.random_range(-6.0..6.0)];

        let set = k_nearest(&points, query, k).unwrap();
        let farthest = set.distances.iter().copied().fold(0.0_f64, f64::max);
        let chosen = set.rows();
        for p in points.iter().filter(|p| !chosen.contains(&p.row)) {
            assert!(dist(p, query) >= farthest);
        }
        for w in set.distances.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }
}

#[test]
fn majority_label_wins() {
    let labels: [Label; 5] = [0, 0, 0, 1, 1];
    let points: Vec<ProjectedPoint> = labels
        .iter()
        .enumerate()
        .map(|(row, &label)| ProjectedPoint {
            x: row as f64,
            y: -(row as f64),
            label,
            row,
        })
        .collect();
    let set = k_nearest(&points, [10.0, 10.0], 5).unwrap();
    assert_eq!(set.label, 0);
}

#[test]
fn two_dimensional_core_agrees_with_k_nearest() {
    let mut rng = StdRng::seed_from_u64(3);
    let points = random_points(&mut rng, 40);
    let flat: Vec<f64> = points.iter().flat_map(|p| p.coords()).collect();
    let query = [0.5, -1.5];

    let set = k_nearest(&points, query, 9).unwrap();
    let core = nearest_indices(&flat, 2, &query, 9).unwrap();
    assert_eq!(set.rows(), core.indices());
    assert_eq!(set.distances, core.distances());
}
