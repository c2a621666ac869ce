//! Projection properties on iris and on seeded synthetic datasets.

use approx::assert_abs_diff_eq;
use knnlab_dataset::{BlobsConfig, Dataset, iris, make_blobs};
use knnlab_project::{ProjectError, fit_transform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Reference values: sklearn `PCA(n_components=2).fit(load_iris().data)`.
#[test]
fn iris_explained_variance_ratio() {
    let (proj, _) = fit_transform(&iris()).unwrap();
    let [pc1, pc2] = proj.explained_variance_ratio();
    assert_abs_diff_eq!(pc1, 0.924_618_72, epsilon = 1e-6);
    assert_abs_diff_eq!(pc2, 0.053_066_48, epsilon = 1e-6);
}

#[test]
fn iris_directions_and_first_row() {
    let (proj, points) = fit_transform(&iris()).unwrap();
    let [c1, c2] = proj.components();
    let expected_c1 = [0.361_386_59, -0.084_522_51, 0.856_670_61, 0.358_289_20];
    let expected_c2 = [0.656_588_77, 0.730_161_43, -0.173_372_66, -0.075_481_02];
    for j in 0..4 {
        assert_abs_diff_eq!(c1[j], expected_c1[j], epsilon = 1e-6);
        assert_abs_diff_eq!(c2[j], expected_c2[j], epsilon = 1e-6);
    }
    assert_abs_diff_eq!(points[0].x, -2.684_125_63, epsilon = 1e-6);
    assert_abs_diff_eq!(points[0].y, 0.319_397_25, epsilon = 1e-6);
}

#[test]
fn directions_orthonormal_and_ratios_bounded() {
    for seed in 0..25_u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n_features = rng.random_range(2..8);
        let n_per_class = rng.random_range(1..15);
        let config = BlobsConfig::new(3, n_per_class, n_features).with_spread(2.0);
        let ds = make_blobs(&config, &mut rng).unwrap();

        let (proj, points) = fit_transform(&ds).unwrap();
        let [c1, c2] = proj.components();
        assert_abs_diff_eq!(dot(c1, c1), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dot(c2, c2), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dot(c1, c2), 0.0, epsilon = 1e-9);

        let [r1, r2] = proj.explained_variance_ratio();
        assert!(r1 >= 0.0 && r2 >= 0.0, "seed {seed}: negative ratio");
        assert!(r1 + r2 <= 1.0 + 1e-9, "seed {seed}: ratios sum {}", r1 + r2);
        assert!(r1 + 1e-9 >= r2, "seed {seed}: ratios not descending");
        assert_eq!(points.len(), ds.n_rows());
    }
}

#[test]
fn two_features_capture_all_variance() {
    let mut rng = StdRng::seed_from_u64(11);
    let ds = make_blobs(&BlobsConfig::new(2, 20, 2), &mut rng).unwrap();
    let (proj, _) = fit_transform(&ds).unwrap();
    let [r1, r2] = proj.explained_variance_ratio();
    assert_abs_diff_eq!(r1 + r2, 1.0, epsilon = 1e-9);
}

#[test]
fn same_input_same_output() {
    let ds = iris();
    let (a, pa) = fit_transform(&ds).unwrap();
    let (b, pb) = fit_transform(&ds).unwrap();
    assert_eq!(a.components(), b.components());
    assert_eq!(pa, pb);
}

#[test]
fn undersized_inputs_rejected() {
    let single_row = Dataset::new(vec![1.0, 2.0, 3.0], 3, vec![0]).unwrap();
    assert!(matches!(
        fit_transform(&single_row),
        Err(ProjectError::Dimension { .. })
    ));

    let single_feature = Dataset::new(vec![1.0, 2.0, 3.0, 4.0], 1, vec![0, 0, 1, 1]).unwrap();
    assert!(matches!(
        fit_transform(&single_feature),
        Err(ProjectError::Dimension { .. })
    ));
}
