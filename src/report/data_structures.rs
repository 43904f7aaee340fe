use serde::{Deserialize, Serialize};

/// One summary statistic with its percent change against the previous
/// period.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub change: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl MetricCard {
    pub fn new(title: &str, value: &str, change: f64) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            change,
        }
    }

    pub fn trend(&self) -> Trend {
        if self.change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
}
