use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::report::MetricCard;
use crate::segmenter::ValueSlice;

pub const DEMO_DAYS: usize = 7;
pub const HOURS_PER_DAY: usize = 24;

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// The device split the dashboard ships as demo data.
pub fn device_split() -> Vec<ValueSlice> {
    vec![
        ValueSlice::new("Desktop", 45.0, "#8B5CF6"),
        ValueSlice::new("Mobile", 35.0, "#EC4899"),
        ValueSlice::new("Tablet", 20.0, "#3B82F6"),
    ]
}

/// Uniform random activity counts in [0, 100). A fixed seed makes the
/// grid reproducible.
pub fn activity_grid(rows: usize, cols: usize, seed: Option<u64>) -> Array2<f64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Array2::from_shape_fn((rows, cols), |_| rng.gen_range(0..100) as f64)
}

pub fn day_labels(rows: usize) -> Vec<String> {
    if rows == DAY_NAMES.len() {
        DAY_NAMES.iter().map(|day| day.to_string()).collect()
    } else {
        (1..=rows).map(|row| format!("Row {}", row)).collect()
    }
}

pub fn sample_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Total Users", "2,543", 12.5),
        MetricCard::new("Revenue", "$45,231", 8.2),
        MetricCard::new("Conversion Rate", "3.6%", -2.3),
        MetricCard::new("Avg. Session", "2m 56s", 14.6),
    ]
}

#[cfg(test)]
mod tests {
    use crate::demo::{activity_grid, day_labels, device_split, sample_metrics};

    #[test]
    fn device_split_sums_to_hundred() {
        let total: f64 = device_split().iter().map(|slice| slice.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn seeded_grid_is_reproducible() {
        let first = activity_grid(7, 24, Some(42));
        let second = activity_grid(7, 24, Some(42));
        assert_eq!(first, second);
    }

    #[test]
    fn grid_values_stay_in_range() {
        let grid = activity_grid(7, 24, Some(7));
        assert_eq!(grid.dim(), (7, 24));
        assert!(grid.iter().all(|cell| (0.0..100.0).contains(cell)));
    }

    #[test]
    fn week_gets_day_names() {
        assert_eq!(day_labels(7)[0], "Mon");
        assert_eq!(day_labels(7)[6], "Sun");
        assert_eq!(day_labels(3), vec!["Row 1", "Row 2", "Row 3"]);
    }

    #[test]
    fn four_metric_cards() {
        assert_eq!(sample_metrics().len(), 4);
    }
}
