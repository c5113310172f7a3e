use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location pin for a canteen site, handed to the canteen screen as its route input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub marker_id: i32,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canteen {
    pub canteen_id: i32,
    pub canteen_name: String,
    #[serde(default)]
    pub canteen_image: Option<String>,
    #[serde(default)]
    pub canteen_stalls_ids: Option<Vec<i32>>,
}

impl Canteen {
    /// Stall ids worth a batch fetch; `None` when the list is absent or empty.
    pub fn stall_ids(&self) -> Option<&[i32]> {
        match self.canteen_stalls_ids.as_deref() {
            Some(ids) if !ids.is_empty() => Some(ids),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stall {
    pub stall_id: i32,
    pub stall_name: String,
    pub cuisine: String,
    #[serde(default)]
    pub stall_image: Option<String>,
}
