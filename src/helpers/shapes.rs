use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
}

/// `param` is the radius of a circle or the side of a square. Negative values
/// are not rejected.
pub fn calculate_area(shape: Shape, param: f64) -> f64 {
    match shape {
        Shape::Circle => PI * param * param,
        Shape::Square => param * param,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    New,
}

pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Active => "green",
        Status::Inactive => "gray",
        Status::New => "blue",
    }
}
