use serde::{Deserialize, Serialize};

use crate::arithmetic::DivisionMode;
use crate::error::Error;
use crate::store::StoreConfig;
use crate::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub division: DivisionMode,
    pub store: StoreConfig,
}

impl Config {
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Config)
    }
}
