//! Marquee configuration parsing and validation.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use marquee_store::SeedData;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlConfig {
    /// The port on which the GraphQL API server should listen.
    #[serde(default = "Config::default_graphql_api_port")]
    pub port: u16,
    /// Serve the GraphiQL explorer on `GET /graphql`.
    #[serde(default = "Config::default_playground")]
    pub playground: bool,
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            port: Config::default_graphql_api_port(),
            playground: Config::default_playground(),
        }
    }
}

/// A [`serde`]-compatible representation of Marquee's YAML configuration file.
/// Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// GraphQL API configuration.
    #[serde(default)]
    pub graphql: GraphQlConfig,
    /// Initial contents of the store. Defaults to the built-in catalogue.
    #[serde(default)]
    pub seed: SeedData,
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        serde_yaml::from_reader(file).context("invalid config file")
    }

    fn default_graphql_api_port() -> u16 {
        5004
    }

    fn default_playground() -> bool {
        true
    }
}
