use log::debug;
use ndarray::{Array2, ArrayView1, Axis};

use super::types::{ColumnRange, EncodedCatalog, NormalizedCatalog, FEATURE_COLUMNS};

const TARGET_MIN: f64 = 0.0;

/// Rescales every feature column of `encoded` into `[0, 1]`
pub fn normalize(encoded: &EncodedCatalog) -> NormalizedCatalog {
    let mut features = encoded.feature_matrix();
    let ranges = calculate_ranges(&features);

    apply_normalization(&mut features, &ranges);
    log_ranges(&ranges);

    NormalizedCatalog::new(encoded.names().to_vec(), features, ranges)
}

fn calculate_ranges(features: &Array2<f64>) -> Vec<ColumnRange> {
    features
        .axis_iter(Axis(1))
        .map(|column| calculate_range(&column))
        .collect()
}

fn calculate_range(column: &ArrayView1<f64>) -> ColumnRange {
    let min = column.iter().copied().fold(f64::INFINITY, f64::min);
    let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    ColumnRange { min, max }
}

fn apply_normalization(features: &mut Array2<f64>, ranges: &[ColumnRange]) {
    for (mut column, range) in features.axis_iter_mut(Axis(1)).zip(ranges) {
        column.mapv_inplace(|value| transform_value(value, range));
    }
}

fn transform_value(value: f64, range: &ColumnRange) -> f64 {
    let span = range.span();
    if span > 0.0 {
        (value - range.min) / span
    } else {
        TARGET_MIN
    }
}

fn log_ranges(ranges: &[ColumnRange]) {
    for (column, range) in FEATURE_COLUMNS.iter().zip(ranges) {
        debug!("Column {} scaled from [{}, {}]", column, range.min, range.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::record;
    use crate::catalog::CleanedCatalog;
    use crate::features::encode;

    fn normalized(records: Vec<crate::catalog::CatalogRecord>) -> NormalizedCatalog {
        let catalog: CleanedCatalog = records.into_iter().collect();
        let (encoded, _) = encode(&catalog);
        normalize(&encoded)
    }

    #[test]
    fn test_min_maps_to_zero_and_max_to_one() {
        let normalized = normalized(vec![
            record("A", "PS3", "Action", "E", 13.0, 0.7),
            record("B", "Wii", "Racing", "M", 98.0, 9.6),
            record("C", "X360", "Sports", "T", 61.0, 4.3),
        ]);

        for column in normalized.features().axis_iter(Axis(1)) {
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(min, 0.0);
            assert_eq!(max, 1.0);
        }
    }

    #[test]
    fn test_intermediate_values_scale_linearly() {
        let normalized = normalized(vec![
            record("A", "X", "Y", "Z", 0.0, 0.0),
            record("B", "X", "Y", "Z", 50.0, 5.0),
            record("C", "X", "Y", "Z", 100.0, 10.0),
        ]);

        let features = normalized.features();
        assert!((features[[1, 3]] - 0.5).abs() < 1e-12);
        assert!((features[[1, 4]] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let normalized = normalized(vec![
            record("A", "X", "Y", "Z", 80.0, 8.0),
            record("B", "X", "Y", "Z", 82.0, 8.2),
        ]);

        let features = normalized.features();
        for row in 0..2 {
            assert_eq!(features[[row, 0]], 0.0);
            assert_eq!(features[[row, 1]], 0.0);
            assert_eq!(features[[row, 2]], 0.0);
        }
        assert_eq!(normalized.ranges()[3], ColumnRange { min: 80.0, max: 82.0 });
    }

    #[test]
    fn test_rows_keep_names_aligned() {
        let normalized = normalized(vec![
            record("A", "X", "Y", "Z", 10.0, 1.0),
            record("B", "X", "Y", "Z", 20.0, 2.0),
        ]);

        let rows: Vec<_> = normalized.rows().collect();
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[0].critic_score, 0.0);
        assert_eq!(rows[1].name, "B");
        assert_eq!(rows[1].user_score, 1.0);
    }
}
