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

//! Consumes topic models on document term matrices.
//!
//! The pipeline only talks to a [TopicModelEngine] and the [FittedTopicModel] it returns.
//! Everything a fitted model hands out is flattened into [TopicWordProbability] (beta)
//! and [DocumentTopicProbability] (gamma) rows, independent of the internals of the engine.

pub mod config;
pub mod engine;
pub mod error;
pub mod lda;
pub mod reshape;
pub mod tables;

pub use config::{FitParameters, InferenceMethod, LdaConfig};
pub use engine::{FittedTopicModel, TopicModelEngine};
pub use error::FitError;
pub use lda::{LdaEngine, LdaModel};
pub use reshape::{classify, top_terms, top_terms_per_topic, Classification, ClassificationParameters};
pub use tables::{DocumentTopicProbability, TopicWordProbability};
