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

//! Pure reshaping of the flat beta and gamma tables.

use crate::tables::{DocumentTopicProbability, TopicWordProbability};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::num::NonZeroUsize;

/// The default number of topics kept for a single document
pub const DEFAULT_MAX_TOPICS_PER_DOCUMENT: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(value) => value,
    None => unreachable!(),
};

/// A topic assigned to a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub document_id: String,
    pub topic_id: usize,
    pub probability: f64,
    /// Dense rank inside the document, starts at 1
    pub rank: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationParameters {
    /// Only probabilities strictly above this value are kept.
    pub gamma_threshold: f64,
    pub max_topics_per_document: NonZeroUsize,
}

impl ClassificationParameters {
    pub fn new(gamma_threshold: f64) -> Self {
        Self {
            gamma_threshold,
            max_topics_per_document: DEFAULT_MAX_TOPICS_PER_DOCUMENT,
        }
    }
}

/// Descending by probability, equal probabilities keep their order.
fn by_probability_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// The [n] most probable terms of [topic_id].
pub fn top_terms(
    beta: &[TopicWordProbability],
    topic_id: usize,
    n: usize,
) -> Vec<TopicWordProbability> {
    let mut rows: Vec<TopicWordProbability> = beta
        .iter()
        .filter(|row| row.topic_id == topic_id)
        .cloned()
        .collect();
    rows.sort_by(|a, b| by_probability_desc(a.probability, b.probability));
    rows.truncate(n);
    rows
}

/// The [n] most probable terms of every topic, ordered by topic id.
pub fn top_terms_per_topic(beta: &[TopicWordProbability], n: usize) -> Vec<TopicWordProbability> {
    let mut grouped: IndexMap<usize, Vec<TopicWordProbability>> = IndexMap::new();
    for row in beta {
        grouped.entry(row.topic_id).or_default().push(row.clone());
    }
    grouped.sort_unstable_keys();
    grouped
        .into_values()
        .flat_map(|mut rows| {
            rows.sort_by(|a, b| by_probability_desc(a.probability, b.probability));
            rows.truncate(n);
            rows
        })
        .collect()
}

/// Groups [gamma] by document, drops everything with a probability at or below the threshold,
/// keeps the most probable topics and ranks them densely.
///
/// Documents appear in the order of [gamma]. Equal probabilities share a rank and are
/// ordered by topic id.
pub fn classify(
    gamma: &[DocumentTopicProbability],
    parameters: &ClassificationParameters,
) -> Vec<Classification> {
    let mut grouped: IndexMap<&str, Vec<&DocumentTopicProbability>> = IndexMap::new();
    for row in gamma {
        let entry = grouped.entry(row.document_id.as_str()).or_default();
        if row.probability > parameters.gamma_threshold {
            entry.push(row);
        }
    }

    let mut result = Vec::new();
    for (document_id, mut rows) in grouped {
        rows.sort_by(|a, b| {
            by_probability_desc(a.probability, b.probability).then(a.topic_id.cmp(&b.topic_id))
        });
        rows.truncate(parameters.max_topics_per_document.get());

        let mut rank = 0;
        let mut last = None;
        for row in rows {
            if last != Some(row.probability) {
                rank += 1;
                last = Some(row.probability);
            }
            result.push(Classification {
                document_id: document_id.to_string(),
                topic_id: row.topic_id,
                probability: row.probability,
                rank,
            });
        }
    }
    log::debug!("Classified {} gamma rows into {} rows.", gamma.len(), result.len());
    result
}

#[cfg(test)]
mod test {
    use super::{classify, top_terms, top_terms_per_topic, ClassificationParameters};
    use crate::tables::{DocumentTopicProbability, TopicWordProbability};
    use std::num::NonZeroUsize;

    fn gamma_row(document_id: &str, topic_id: usize, probability: f64) -> DocumentTopicProbability {
        DocumentTopicProbability {
            document_id: document_id.to_string(),
            topic_id,
            probability,
        }
    }

    fn beta_row(topic_id: usize, term: &str, probability: f64) -> TopicWordProbability {
        TopicWordProbability {
            topic_id,
            term: term.to_string(),
            probability,
        }
    }

    fn gamma() -> Vec<DocumentTopicProbability> {
        vec![
            gamma_row("b", 1, 0.05),
            gamma_row("b", 2, 0.6),
            gamma_row("b", 3, 0.35),
            gamma_row("a", 1, 0.1),
            gamma_row("a", 2, 0.2),
            gamma_row("a", 3, 0.2),
            gamma_row("a", 4, 0.5),
            gamma_row("c", 1, 0.25),
            gamma_row("c", 2, 0.25),
            gamma_row("c", 3, 0.25),
            gamma_row("c", 4, 0.25),
        ]
    }

    #[test]
    fn can_classify() {
        let result = classify(&gamma(), &ClassificationParameters::new(0.05));
        let view: Vec<(&str, usize, usize)> = result
            .iter()
            .map(|value| (value.document_id.as_str(), value.topic_id, value.rank))
            .collect();
        assert_eq!(
            vec![
                ("b", 2, 1),
                ("b", 3, 2),
                ("a", 4, 1),
                ("a", 2, 2),
                ("a", 3, 2),
                ("a", 1, 3),
                ("c", 1, 1),
                ("c", 2, 1),
                ("c", 3, 1),
                ("c", 4, 1),
            ],
            view
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        let result = classify(&gamma(), &ClassificationParameters::new(0.25));
        assert!(result.iter().all(|value| value.probability > 0.25));
        assert!(result.iter().all(|value| value.document_id != "c"));
        assert_eq!(3, result.len());
    }

    #[test]
    fn ranks_are_dense_and_increase_with_decreasing_probability() {
        let result = classify(&gamma(), &ClassificationParameters::new(0.0));
        for document in ["a", "b", "c"] {
            let rows: Vec<_> = result.iter().filter(|value| value.document_id == document).collect();
            assert_eq!(1, rows[0].rank);
            for pair in rows.windows(2) {
                if pair[0].probability == pair[1].probability {
                    assert_eq!(pair[0].rank, pair[1].rank);
                } else {
                    assert!(pair[0].probability > pair[1].probability);
                    assert_eq!(pair[0].rank + 1, pair[1].rank);
                }
            }
        }
    }

    #[test]
    fn can_limit_topics_per_document() {
        let parameters = ClassificationParameters {
            gamma_threshold: 0.0,
            max_topics_per_document: NonZeroUsize::new(2).unwrap(),
        };
        let result = classify(&gamma(), &parameters);
        for document in ["a", "b", "c"] {
            assert_eq!(2, result.iter().filter(|value| value.document_id == document).count());
        }
        assert!(classify(&[], &parameters).is_empty());
    }

    #[test]
    fn can_select_top_terms() {
        let beta = vec![
            beta_row(1, "movie", 0.1),
            beta_row(1, "plot", 0.5),
            beta_row(1, "great", 0.1),
            beta_row(1, "boring", 0.3),
            beta_row(2, "movie", 0.9),
            beta_row(2, "plot", 0.1),
        ];
        let top: Vec<_> = top_terms(&beta, 1, 3).into_iter().map(|value| value.term).collect();
        assert_eq!(vec!["plot", "boring", "movie"], top);
        assert!(top_terms(&beta, 3, 10).is_empty());

        let per_topic: Vec<_> = top_terms_per_topic(&beta, 1)
            .into_iter()
            .map(|value| (value.topic_id, value.term))
            .collect();
        assert_eq!(vec![(1, "plot".to_string()), (2, "movie".to_string())], per_topic);
    }
}
