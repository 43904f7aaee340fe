use num_traits::Float;

/// Angles are degrees from the positive x-axis, sweeping towards positive
/// y (downwards in screen coordinates).
pub fn deg_to_rad<A: Float>(angle: A) -> A {
    angle * A::from(std::f64::consts::PI).unwrap() / A::from(180.0).unwrap()
}

/// Boundary point on a circle of the given radius around an origin.
pub fn circle_point<A: Float>(origin: (A, A), radius: A, angle_deg: A) -> (A, A) {
    let theta = deg_to_rad(angle_deg);
    (
        origin.0 + radius * theta.cos(),
        origin.1 + radius * theta.sin(),
    )
}

/// Two arcs of the same radius connect two boundary points; `1` selects
/// the long way around the circle.
pub fn large_arc_flag(span_deg: f64) -> u8 {
    if span_deg <= 180.0 {
        0
    } else {
        1
    }
}
