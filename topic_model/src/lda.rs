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

use crate::config::{FitParameters, InferenceMethod, LdaConfig};
use crate::engine::{FittedTopicModel, TopicModelEngine};
use crate::error::FitError;
use crate::tables::{DocumentTopicProbability, TopicWordProbability};
use aprender::primitives::Matrix;
use aprender::text::topic::LatentDirichletAllocation;
use text_processing::matrix::DocumentTermMatrix;

/// Fits LDA models with the [LatentDirichletAllocation] of aprender.
#[derive(Debug, Clone, Default)]
pub struct LdaEngine {
    config: LdaConfig,
}

impl LdaEngine {
    pub fn new(config: LdaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LdaConfig {
        &self.config
    }
}

/// Copies the sparse [matrix] into the dense row major matrix of aprender.
fn to_dense(matrix: &DocumentTermMatrix) -> Result<Matrix<f64>, FitError> {
    let n_terms = matrix.n_terms();
    let mut data = vec![0.0; matrix.n_documents() * n_terms];
    for row in 0..matrix.n_documents() {
        for &(column, count) in matrix.row(row) {
            data[row * n_terms + column] = count as f64;
        }
    }
    Matrix::from_vec(matrix.n_documents(), n_terms, data).map_err(FitError::Matrix)
}

/// The rows of [matrix] as vectors.
fn to_rows(matrix: &Matrix<f64>) -> Vec<Vec<f64>> {
    (0..matrix.n_rows())
        .map(|row| (0..matrix.n_cols()).map(|col| matrix.get(row, col)).collect())
        .collect()
}

impl TopicModelEngine for LdaEngine {
    type Model = LdaModel;
    type Error = FitError;

    fn fit(
        &self,
        matrix: &DocumentTermMatrix,
        parameters: &FitParameters,
    ) -> Result<Self::Model, Self::Error> {
        match parameters.method {
            InferenceMethod::Variational => {}
        }
        if matrix.n_documents() == 0 || matrix.n_terms() == 0 {
            return Err(FitError::EmptyMatrix);
        }
        if self.config.iterations == 0 {
            return Err(FitError::NoIterations);
        }

        log::info!(
            "Fit LDA with k={}, {} iterations and seed {}.",
            parameters.k,
            self.config.iterations,
            parameters.seed
        );
        let dtm = to_dense(matrix)?;
        let mut lda =
            LatentDirichletAllocation::new(parameters.k.get()).with_random_seed(parameters.seed);
        lda.fit(&dtm, self.config.iterations)?;
        log::debug!("Finished the fit on {} cells.", matrix.nnz());

        Ok(LdaModel {
            documents: matrix.documents().to_vec(),
            terms: matrix.terms().map(str::to_string).collect(),
            topic_words: to_rows(lda.topic_words()?),
            document_topics: to_rows(lda.document_topics()?),
        })
    }
}

/// A LDA model fitted by the [LdaEngine].
#[derive(Debug, Clone, PartialEq)]
pub struct LdaModel {
    documents: Vec<String>,
    terms: Vec<String>,
    /// [topic][term]
    topic_words: Vec<Vec<f64>>,
    /// [doc][topic]
    document_topics: Vec<Vec<f64>>,
}

impl FittedTopicModel for LdaModel {
    fn k(&self) -> usize {
        self.topic_words.len()
    }

    fn extract_beta(&self) -> Vec<TopicWordProbability> {
        self.topic_words
            .iter()
            .enumerate()
            .flat_map(|(topic, probabilities)| {
                probabilities
                    .iter()
                    .zip(&self.terms)
                    .filter(|(probability, _)| **probability > 0.0)
                    .map(move |(probability, term)| TopicWordProbability {
                        topic_id: topic + 1,
                        term: term.clone(),
                        probability: *probability,
                    })
            })
            .collect()
    }

    fn extract_gamma(&self) -> Vec<DocumentTopicProbability> {
        self.document_topics
            .iter()
            .zip(&self.documents)
            .flat_map(|(probabilities, document_id)| {
                probabilities
                    .iter()
                    .enumerate()
                    .map(move |(topic, probability)| DocumentTopicProbability {
                        document_id: document_id.clone(),
                        topic_id: topic + 1,
                        probability: *probability,
                    })
            })
            .collect()
    }
}
