//! Calendar configuration, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{DateKitError, Result};
use crate::weekday::Weekday;

/// Time zone and week convention for a [`GregorianCalendar`](crate::GregorianCalendar).
///
/// Missing fields take their defaults (`"UTC"`, Sunday first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// An IANA timezone name (e.g., `"Europe/Paris"`).
    pub time_zone: String,
    /// Which day begins a week for week intervals and month grids.
    pub first_weekday: Weekday,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_zone: "UTC".to_string(),
            first_weekday: Weekday::Sunday,
        }
    }
}

impl CalendarConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DateKitError::InvalidConfig`] if the document is not valid JSON
    /// or a field has the wrong shape. The timezone name itself is only
    /// checked by [`GregorianCalendar::from_config`](crate::GregorianCalendar::from_config).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DateKitError::InvalidConfig(e.to_string()))
    }
}
