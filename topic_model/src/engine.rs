//Copyright 2024 Felix Engl
//
//Licensed under the Apache License, Version 2.0 (the "License");
//you may not use this file except in compliance with the License.
//You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
//Unless required by applicable law or agreed to in writing, software
//distributed under the License is distributed on an "AS IS" BASIS,
//WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//See the License for the specific language governing permissions and
//limitations under the License.

use crate::config::FitParameters;
use crate::tables::{DocumentTopicProbability, TopicWordProbability};
use text_processing::matrix::DocumentTermMatrix;

/// Something that is able to fit a topic model on a document term matrix.
pub trait TopicModelEngine {
    type Model: FittedTopicModel;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fits a model. Deterministic for the same matrix and parameters.
    fn fit(
        &self,
        matrix: &DocumentTermMatrix,
        parameters: &FitParameters,
    ) -> Result<Self::Model, Self::Error>;
}

/// A fitted topic model, only accessible through its flattened outputs.
pub trait FittedTopicModel {
    /// The number of topics
    fn k(&self) -> usize;

    /// A row for every (topic, term) pair with a probability above zero.
    fn extract_beta(&self) -> Vec<TopicWordProbability>;

    /// A row for every (document, topic) pair.
    fn extract_gamma(&self) -> Vec<DocumentTopicProbability>;
}
