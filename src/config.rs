//! Serde-loadable search configuration.
//!
//! ```json
//! {
//!     "mode": "auto",
//!     "mode_encoding": "token",
//!     "thru_nodes": { "first_thru_node": 25 },
//!     "start_cost": 480.0,
//!     "max_label_cost": 10000.0
//! }
//! ```

use std::fmt::Debug;
use num_traits::{Float, NumCast, Zero};
use serde::{Deserialize, Serialize};

use crate::algorithm::label_correcting::LabelCorrecting;
use crate::algorithm::{SearchSettings, ThruNodes};
use crate::graph::{Mode, ModeEncoding};
use crate::{Error, Result};

/// Thru-node boundary in either numbering convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThruNodeConfig {
    #[default]
    All,
    /// Centroids numbered first; nodes `>= n` are thru nodes
    FirstThruNode(usize),
    /// Centroids numbered last; nodes `<= n` are thru nodes
    LastThruNode(usize),
}

impl From<ThruNodeConfig> for ThruNodes {
    fn from(config: ThruNodeConfig) -> Self {
        match config {
            ThruNodeConfig::All => ThruNodes::All,
            ThruNodeConfig::FirstThruNode(first) => ThruNodes::from_first_thru_node(first),
            ThruNodeConfig::LastThruNode(last) => ThruNodes::from_last_thru_node(last),
        }
    }
}

/// Search parameters as read from a configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Mode text in `mode_encoding`; absent means all modes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default)]
    pub mode_encoding: ModeEncoding,
    #[serde(default)]
    pub thru_nodes: ThruNodeConfig,
    #[serde(default)]
    pub start_cost: f64,
    /// Unreachable ceiling; absent means `i32::MAX`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_label_cost: Option<f64>,
}

impl SearchConfig {
    /// Parses a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured travel mode
    pub fn mode(&self) -> Result<Mode> {
        match &self.mode {
            None => Ok(Mode::All),
            Some(text) => Mode::parse(text, self.mode_encoding),
        }
    }

    /// Converts into engine settings for cost type `W`
    pub fn to_settings<W>(&self) -> Result<SearchSettings<W>>
    where
        W: Float + Zero + Debug + Copy,
    {
        let mut settings = SearchSettings::default();
        settings.mode = self.mode()?;
        settings.thru_nodes = self.thru_nodes.into();
        settings.start_cost = cast_cost("start_cost", self.start_cost)?;
        if let Some(ceiling) = self.max_label_cost {
            settings.max_label_cost = cast_cost("max_label_cost", ceiling)?;
        }
        if settings.start_cost >= settings.max_label_cost {
            return Err(Error::InvalidConfig(format!(
                "start_cost {} is not below max_label_cost",
                self.start_cost
            )));
        }
        Ok(settings)
    }
}

impl<W> LabelCorrecting<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds an engine from a loaded configuration
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        Ok(LabelCorrecting::with_settings(config.to_settings()?))
    }
}

fn cast_cost<W: Float>(field: &str, value: f64) -> Result<W> {
    if !value.is_finite() {
        return Err(Error::InvalidConfig(format!("{} must be finite, got {}", field, value)));
    }
    <W as NumCast>::from(value).ok_or_else(|| {
        Error::InvalidConfig(format!("{} = {} does not fit the cost type", field, value))
    })
}
