use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering of radius-search results by distance from the query point.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GeoSort {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl fmt::Display for GeoSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoSort::Ascending => write!(f, "ASC"),
            GeoSort::Descending => write!(f, "DESC"),
        }
    }
}

impl GeoSort {
    pub fn wire_token(&self) -> &'static str {
        match self {
            GeoSort::Ascending => "ASC",
            GeoSort::Descending => "DESC",
        }
    }
}
