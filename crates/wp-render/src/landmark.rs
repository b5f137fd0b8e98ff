use wp_core::Point;

/// A labelled spot on the map (a building, a street sign).  Purely visual.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Landmark {
    pub id:       String,
    pub label:    String,
    pub position: Point,
}

impl Landmark {
    pub fn new(id: &str, label: &str, x: f64, y: f64) -> Self {
        Self {
            id:       id.to_owned(),
            label:    label.to_owned(),
            position: Point::new(x, y),
        }
    }
}
