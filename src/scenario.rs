//! Scenario files: targets, settings and resources as one JSON document.

use crate::core::types::{GlobalSettings, Resources, Targets};
use crate::error::PlanError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the engine needs to evaluate one pull plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    pub targets: Targets,
    pub settings: GlobalSettings,
    pub resources: Resources,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            targets: Targets::first_visit(),
            settings: GlobalSettings::default(),
            resources: Resources::first_visit(),
        }
    }
}

impl Scenario {
    /// Read and sanitize a scenario file.
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let json = fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and sanitize a scenario document. Missing fields take the
    /// first-visit defaults.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        Ok(scenario.sanitized())
    }

    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Clamp targets and complete the exchange priority.
    pub fn sanitized(&self) -> Self {
        Self {
            targets: self.targets.sanitized(),
            settings: self.settings.sanitized(),
            resources: self.resources,
        }
    }
}
