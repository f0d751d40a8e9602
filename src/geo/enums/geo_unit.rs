use serde::{Deserialize, Serialize};
use std::fmt;

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GeoUnit {
    m,
    km,
    mi,
    ft,
}

impl fmt::Display for GeoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoUnit::m => write!(f, "m"),
            GeoUnit::km => write!(f, "km"),
            GeoUnit::mi => write!(f, "mi"),
            GeoUnit::ft => write!(f, "ft"),
        }
    }
}

impl GeoUnit {
    /// The token sent on the wire in GEODIST and GEORADIUS calls.
    pub fn wire_token(&self) -> &'static str {
        match self {
            GeoUnit::m => "m",
            GeoUnit::km => "km",
            GeoUnit::mi => "mi",
            GeoUnit::ft => "ft",
        }
    }
}
