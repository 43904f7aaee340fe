pub mod utils;

use crate::data::read_grid;
use crate::intensity::compute_intensity_grid;
use crate::report::{SessionCheck, SignedOut, User};
use crate::tests::utils::close_l1;
use crate::{wedgemap, Parameters, Source};

const ACTIVITY_FIXTURE: &str = "data/activity.csv";
const DEVICES_FIXTURE: &str = "data/devices.csv";

struct StubSession(Option<User>);

impl SessionCheck for StubSession {
    fn current_user(&self) -> Option<User> {
        self.0.clone()
    }
}

fn signed_in() -> StubSession {
    StubSession(Some(User {
        id: "u-1".to_string(),
        name: "Ada".to_string(),
    }))
}

#[test]
fn demo_dashboard_end_to_end() {
    let doc = wedgemap(Parameters::default(), &signed_in()).unwrap();

    assert!(doc.starts_with("<svg "));
    assert!(doc.contains("Analytics Dashboard"));
    assert!(doc.contains("Pie Chart"));
    assert!(doc.contains("Heatmap"));
    assert!(doc.contains("Desktop"));
    assert!(doc.contains("Total Users"));
    // the demo week renders one labeled row per day
    assert!(doc.contains("Mon"));
    assert!(doc.contains("Sun"));
}

#[test]
fn seeded_demo_output_is_reproducible() {
    let first = wedgemap(Parameters::default(), &signed_in()).unwrap();
    let second = wedgemap(Parameters::default(), &signed_in()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn signed_out_session_never_yields_a_document() {
    let err = wedgemap(Parameters::default(), &StubSession(None)).unwrap_err();
    assert!(err.downcast_ref::<SignedOut>().is_some());
}

#[test]
fn csv_sources_render() {
    let params = Parameters {
        source: Source::Csv {
            grid_path: ACTIVITY_FIXTURE.to_string(),
            distribution_path: DEVICES_FIXTURE.to_string(),
        },
        ..Default::default()
    };

    let doc = wedgemap(params, &signed_in()).unwrap();
    assert!(doc.contains("Desktop"));
    assert!(doc.contains("Mobile"));
    assert!(doc.contains("Tablet"));
}

#[test]
fn fixture_grid_normalization_is_invertible() {
    let grid = read_grid(ACTIVITY_FIXTURE).unwrap();
    assert_eq!(grid.dim(), (7, 24));

    let intensities = compute_intensity_grid(&grid).unwrap();
    let grid_max = grid.iter().cloned().fold(0.0f64, f64::max);
    assert!(grid_max > 0.0);

    close_l1(&intensities.mapv(|cell| cell * grid_max), &grid, 1e-6);
}

#[test]
fn premium_flag_swaps_the_advanced_panel() {
    let locked = wedgemap(Parameters::default(), &signed_in()).unwrap();
    assert!(locked.contains("Upgrade to Pro"));

    let params = Parameters {
        premium: true,
        ..Default::default()
    };
    let unlocked = wedgemap(params, &signed_in()).unwrap();
    assert!(unlocked.contains("Advanced Visualizations"));
    assert!(!unlocked.contains("Upgrade to Pro"));
}
