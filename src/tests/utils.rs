use ndarray::Array2;

pub fn close_l1(actual: &Array2<f64>, expected: &Array2<f64>, tolerance: f64) {
    assert_eq!(actual.shape(), expected.shape());
    let distance = (actual - expected).mapv(f64::abs).sum();
    assert!(
        distance < tolerance,
        "L1 distance {} exceeds tolerance {}",
        distance,
        tolerance
    );
}
