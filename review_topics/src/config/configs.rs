// Copyright 2024. Felix Engl
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::{PathsConfig, PipelineConfig, SystemConfig};
use crate::corpus::CorpusSource;
use serde::{Deserialize, Serialize};
use text_processing::configs::StopwordRegistryConfig;

/// A collection of all configs used in a run.
/// There is no default, the pipeline needs an explicit gamma threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename(serialize = "Config"))]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub corpus: CorpusSource,
    #[serde(default)]
    pub stopwords: StopwordRegistryConfig,
    pub pipeline: PipelineConfig,
}

impl Config {
    #[cfg(test)]
    pub fn new(pipeline: PipelineConfig) -> Self {
        Self {
            system: Default::default(),
            paths: Default::default(),
            corpus: Default::default(),
            stopwords: Default::default(),
            pipeline,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::config::PipelineConfig;
    use crate::corpus::CorpusSource;

    #[test]
    fn can_deserialize_minimal_config() {
        let config: Config = serde_json::from_str(r#"{"pipeline": {"gamma_threshold": 0.3}}"#).unwrap();
        assert_eq!(Config::new(PipelineConfig::new(0.3)), config);
        assert_eq!(CorpusSource::default(), config.corpus);
        assert!(config.stopwords.is_empty());
        assert!(serde_json::from_str::<Config>("{}").is_err());
    }
}
