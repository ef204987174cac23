//! JSON interchange for [`MechanicData`] and [`Snapshot`].
//!
//! The wire shape uses camelCase keys and tags events with `"type"` (`"move"`, `"aoe_show"`, ...).
//! Output of [`MechanicData::to_json_string`] re-imports to an equal value and re-exports to the
//! same bytes.

use crate::{Error, MechanicData, Snapshot};

impl MechanicData {
    /// Parses and validates a mechanic.
    pub fn from_json_str(input: &str) -> Result<Self, Error> {
        let data: Self = serde_json::from_str(input).map_err(|e| Error::JsonParse {
            message: e.to_string(),
        })?;
        data.validate()?;
        Ok(data)
    }

    /// Compact canonical JSON.
    pub fn to_json_string(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::JsonSerialize {
            message: e.to_string(),
        })
    }

    pub fn to_json_string_pretty(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| Error::JsonSerialize {
            message: e.to_string(),
        })
    }
}

impl Snapshot {
    pub fn to_json_value(&self) -> Result<serde_json::Value, Error> {
        serde_json::to_value(self).map_err(|e| Error::JsonSerialize {
            message: e.to_string(),
        })
    }
}
