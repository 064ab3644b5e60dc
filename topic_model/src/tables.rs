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

use serde::{Deserialize, Serialize};

/// The probability of a term given a topic (beta).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicWordProbability {
    /// Starts at 1
    pub topic_id: usize,
    pub term: String,
    pub probability: f64,
}

/// The probability of a topic given a document (gamma).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTopicProbability {
    pub document_id: String,
    /// Starts at 1
    pub topic_id: usize,
    pub probability: f64,
}
