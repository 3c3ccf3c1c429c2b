//! Tests pairing generated fields with the clustering engine.
#![cfg(feature = "field")]

use katamari_core::{ClusterEngine, FieldSpec};
use rstest::rstest;

#[rstest]
#[case(5, 5, 3, 11)]
#[case(20, 20, 10, 99)]
#[case(3, 17, 2, 5)]
fn generated_fields_cluster_cleanly(
    #[case] rows: usize,
    #[case] columns: usize,
    #[case] colors: usize,
    #[case] seed: u64,
) {
    let field = FieldSpec::new(rows, columns, colors)
        .expect("valid spec")
        .generate(seed);
    let set = ClusterEngine::default()
        .find_clusters(field.cells(), field.columns())
        .expect("generated fields are rectangular");
    assert_eq!(set.cell_count(), rows * columns);
    for cluster in &set {
        assert!(cluster.len() >= 3);
        let color = field.cells()[cluster.cells()[0]];
        assert!(cluster.cells().iter().all(|&cell| field.cells()[cell] == color));
    }
}

#[rstest]
fn single_color_field_is_one_cluster() {
    let field = FieldSpec::new(4, 4, 1).expect("valid spec").generate(3);
    let set = ClusterEngine::default()
        .find_clusters(field.cells(), field.columns())
        .expect("valid grid");
    assert_eq!(set.len(), 1);
    assert_eq!(set.clustered_cells(), 16);
}
