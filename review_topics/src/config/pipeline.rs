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

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;
use topic_model::config::{DEFAULT_SEED, DEFAULT_TOPICS};
use topic_model::reshape::DEFAULT_MAX_TOPICS_PER_DOCUMENT;
use topic_model::{ClassificationParameters, FitParameters, InferenceMethod, LdaConfig};

/// The default minimum global frequency, a term has to be more frequent to be kept.
pub const DEFAULT_MIN_TERM_FREQUENCY: u64 = 20;
/// The default number of rows in a chart table
pub const DEFAULT_CHART_TOP_N: usize = 10;
/// The default topic of the term chart
pub const DEFAULT_CHART_TOPIC: usize = 1;

/// All knobs of the pipeline.
///
/// The gamma threshold has no default, the workflows this is based on used
/// 0.3 as well as 0.05, so it has to be chosen explicitly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename(serialize = "Pipeline"))]
pub struct PipelineConfig {
    /// Terms need a global frequency strictly above this value to reach the matrix.
    #[serde(default = "_default_min_term_frequency")]
    pub min_term_frequency: u64,
    /// The number of rows of every chart table.
    #[serde(default = "_default_chart_top_n")]
    pub chart_top_n: usize,
    /// The number of topics (k)
    #[serde(default = "_default_topics")]
    pub topics: NonZeroUsize,
    #[serde(default)]
    pub method: InferenceMethod,
    #[serde(default = "_default_seed")]
    pub seed: u64,
    /// Only topics with a probability strictly above this value are assigned to a document.
    pub gamma_threshold: f64,
    #[serde(default = "_default_max_topics_per_document")]
    pub max_topics_per_document: NonZeroUsize,
    /// The topic used for the single topic term chart, starts at 1
    #[serde(default = "_default_chart_topic")]
    pub chart_topic: usize,
    #[serde(default)]
    pub lda: LdaConfig,
}

/// A pipeline config with values that can never produce a meaningful result.
#[derive(Debug, Error)]
pub enum PipelineConfigError {
    #[error("The gamma threshold has to be in [0, 1) but was {0}!")]
    GammaThreshold(f64),
    #[error("The chart topic has to be between 1 and {topics} but was {chart_topic}!")]
    ChartTopic { chart_topic: usize, topics: usize },
}

const fn _default_min_term_frequency() -> u64 {
    DEFAULT_MIN_TERM_FREQUENCY
}
const fn _default_chart_top_n() -> usize {
    DEFAULT_CHART_TOP_N
}
const fn _default_topics() -> NonZeroUsize {
    DEFAULT_TOPICS
}
const fn _default_seed() -> u64 {
    DEFAULT_SEED
}
const fn _default_max_topics_per_document() -> NonZeroUsize {
    DEFAULT_MAX_TOPICS_PER_DOCUMENT
}
const fn _default_chart_topic() -> usize {
    DEFAULT_CHART_TOPIC
}

impl PipelineConfig {
    /// Creates a config with all defaults and the explicit [gamma_threshold].
    pub fn new(gamma_threshold: f64) -> Self {
        Self {
            min_term_frequency: _default_min_term_frequency(),
            chart_top_n: _default_chart_top_n(),
            topics: _default_topics(),
            method: InferenceMethod::default(),
            seed: _default_seed(),
            gamma_threshold,
            max_topics_per_document: _default_max_topics_per_document(),
            chart_topic: _default_chart_topic(),
            lda: LdaConfig::default(),
        }
    }

    /// Checks the values serde can not check.
    pub fn validate(&self) -> Result<(), PipelineConfigError> {
        if !(0.0..1.0).contains(&self.gamma_threshold) {
            return Err(PipelineConfigError::GammaThreshold(self.gamma_threshold));
        }
        if self.chart_topic == 0 || self.chart_topic > self.topics.get() {
            return Err(PipelineConfigError::ChartTopic {
                chart_topic: self.chart_topic,
                topics: self.topics.get(),
            });
        }
        Ok(())
    }

    pub fn fit_parameters(&self) -> FitParameters {
        FitParameters {
            k: self.topics,
            method: self.method,
            seed: self.seed,
        }
    }

    pub fn classification_parameters(&self) -> ClassificationParameters {
        ClassificationParameters {
            gamma_threshold: self.gamma_threshold,
            max_topics_per_document: self.max_topics_per_document,
        }
    }
}
