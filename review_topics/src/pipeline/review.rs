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
use std::collections::{HashMap, HashSet};
use text_processing::document::Document;
use topic_model::Classification;

/// A classification with the original text of the review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedReview {
    pub document_id: String,
    pub topic_id: usize,
    pub probability: f64,
    pub rank: usize,
    /// None if the document is unknown
    pub text: Option<String>,
}

/// Left joins the [classifications] with the raw text of [documents].
///
/// Classifications without a matching document are kept without a text.
/// Mismatches in both directions are reported as warnings.
pub fn join_reviews(classifications: &[Classification], documents: &[Document]) -> Vec<ClassifiedReview> {
    let texts: HashMap<&str, &str> = documents
        .iter()
        .map(|document| (document.id(), document.raw_text()))
        .collect();

    let mut unmatched = HashSet::new();
    let reviews: Vec<ClassifiedReview> = classifications
        .iter()
        .map(|classification| {
            let text = texts.get(classification.document_id.as_str()).map(|value| value.to_string());
            if text.is_none() {
                unmatched.insert(classification.document_id.as_str());
            }
            ClassifiedReview {
                document_id: classification.document_id.clone(),
                topic_id: classification.topic_id,
                probability: classification.probability,
                rank: classification.rank,
                text,
            }
        })
        .collect();

    if !unmatched.is_empty() {
        log::warn!(
            "{} classified documents have no text: {:?}",
            unmatched.len(),
            unmatched
        );
    }

    let classified: HashSet<&str> = classifications
        .iter()
        .map(|classification| classification.document_id.as_str())
        .collect();
    let unclassified = documents
        .iter()
        .filter(|document| !classified.contains(document.id()))
        .count();
    if unclassified > 0 {
        log::warn!("{unclassified} documents did not get any topic assigned.");
    }

    reviews
}
