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

//! The pipeline from raw reviews to classified reviews.
//!
//! [run_pipeline] does not hold any state between runs, the same input and seed
//! always lead to the same output.

mod error;
pub mod output;
pub mod review;

pub use error::{OutputError, PipelineError};
pub use review::ClassifiedReview;

use crate::config::PipelineConfig;
use std::collections::HashSet;
use std::sync::Arc;
use text_processing::document::{Document, RawDocument};
use text_processing::frequency::{TermCount, TermStatisticsCollector, VocabularyFrequency};
use text_processing::matrix::DocumentTermMatrix;
use text_processing::stopword_registry::StopWordList;
use text_processing::tokenizer::Tokenizer;
use topic_model::{
    classify, top_terms, top_terms_per_topic, Classification, DocumentTopicProbability,
    FittedTopicModel, TopicModelEngine, TopicWordProbability,
};

/// Everything produced by a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub documents: Vec<Document>,
    /// Unigram counts per document, before the frequency filter
    pub term_counts: Vec<TermCount>,
    /// The filtered vocabulary by descending frequency
    pub word_frequencies: Vec<VocabularyFrequency>,
    /// Bigrams without stop words by descending frequency
    pub bigram_frequencies: Vec<VocabularyFrequency>,
    pub word_chart: Vec<VocabularyFrequency>,
    pub bigram_chart: Vec<VocabularyFrequency>,
    pub matrix: DocumentTermMatrix,
    pub beta: Vec<TopicWordProbability>,
    pub gamma: Vec<DocumentTopicProbability>,
    /// The most probable terms of the chart topic
    pub topic_terms: Vec<TopicWordProbability>,
    /// The most probable terms of every topic
    pub topics_top_terms: Vec<TopicWordProbability>,
    pub classifications: Vec<Classification>,
    pub reviews: Vec<ClassifiedReview>,
}

/// Runs all stages on [documents] and fits a topic model with [engine].
pub fn run_pipeline<E: TopicModelEngine>(
    documents: Vec<RawDocument>,
    stop_words: Arc<StopWordList>,
    config: &PipelineConfig,
    engine: &E,
) -> Result<PipelineOutput, PipelineError> {
    if documents.is_empty() {
        return Err(PipelineError::NoInputDocuments);
    }
    let mut seen = HashSet::with_capacity(documents.len());
    for document in &documents {
        if !seen.insert(document.document_id.as_str()) {
            return Err(PipelineError::DuplicateDocument(
                document.document_id.clone(),
            ));
        }
    }

    let documents: Vec<Document> = documents.into_iter().map(Document::from).collect();
    log::info!("Normalized {} documents.", documents.len());

    let tokenizer = Tokenizer::new(Some(stop_words));
    let mut collector = TermStatisticsCollector::new();
    for document in &documents {
        collector.add(&tokenizer, document);
    }
    log::info!("Tokenized the corpus:\n{collector}");

    let vocabulary = collector
        .word_frequencies()
        .filter_above(config.min_term_frequency);
    log::info!(
        "{} terms occur more than {} times.",
        vocabulary.len(),
        config.min_term_frequency
    );
    let word_frequencies = vocabulary.sorted_desc();
    let word_chart = vocabulary.top(config.chart_top_n);
    let bigram_frequencies = collector.bigram_frequencies(&tokenizer);
    let bigram_chart = bigram_frequencies
        .iter()
        .take(config.chart_top_n)
        .cloned()
        .collect();

    let matrix =
        DocumentTermMatrix::build(collector.documents(), &vocabulary, config.min_term_frequency)?;
    log::info!(
        "Fitting {} topics on {} documents and {} terms.",
        config.topics,
        matrix.n_documents(),
        matrix.n_terms()
    );

    let model = engine
        .fit(&matrix, &config.fit_parameters())
        .map_err(|err| PipelineError::TopicModel(Box::new(err)))?;
    let beta = model.extract_beta();
    let gamma = model.extract_gamma();

    let topic_terms = top_terms(&beta, config.chart_topic, config.chart_top_n);
    let topics_top_terms = top_terms_per_topic(&beta, config.chart_top_n);
    let classifications = classify(&gamma, &config.classification_parameters());
    let reviews = review::join_reviews(&classifications, &documents);
    log::info!(
        "Assigned {} topics to {} documents.",
        classifications.len(),
        matrix.n_documents()
    );

    Ok(PipelineOutput {
        term_counts: collector.term_counts(),
        documents,
        word_frequencies,
        bigram_frequencies,
        word_chart,
        bigram_chart,
        matrix,
        beta,
        gamma,
        topic_terms,
        topics_top_terms,
        classifications,
        reviews,
    })
}

#[cfg(test)]
mod test {
    use super::output::write_outputs;
    use super::{run_pipeline, PipelineError};
    use crate::config::{PathsConfig, PipelineConfig};
    use camino_tempfile::tempdir;
    use float_cmp::approx_eq;
    use std::num::NonZeroUsize;
    use std::sync::Arc;
    use text_processing::document::RawDocument;
    use text_processing::error::MatrixError;
    use text_processing::matrix::DocumentTermMatrix;
    use text_processing::stopword_registry::StopWordList;
    use topic_model::{FitError, FitParameters, LdaConfig, LdaEngine, LdaModel, TopicModelEngine};

    fn documents() -> Vec<RawDocument> {
        vec![
            RawDocument::new("docA", "The movie was great and funny"),
            RawDocument::new("docB", "The movie was bad and boring"),
            RawDocument::new("docC", "The great movie had a great cast, great!"),
            RawDocument::new("docD", "Boring plot. A bad movie and a bad cast..."),
        ]
    }

    fn stop_words() -> Arc<StopWordList> {
        Arc::new(StopWordList::new(["the", "was", "and", "a", "had"]))
    }

    fn config() -> PipelineConfig {
        let mut config = PipelineConfig::new(0.05);
        config.min_term_frequency = 1;
        config.topics = NonZeroUsize::new(2).unwrap();
        config.chart_top_n = 3;
        config
    }

    fn engine() -> LdaEngine {
        LdaEngine::new(LdaConfig { iterations: 50 })
    }

    #[test]
    fn can_run_pipeline() {
        let output = run_pipeline(documents(), stop_words(), &config(), &engine()).unwrap();

        let doc_a: Vec<_> = output
            .term_counts
            .iter()
            .filter(|value| value.document_id == "docA")
            .map(|value| (value.term.as_str(), value.count))
            .collect();
        assert_eq!(vec![("movie", 1), ("great", 1), ("funny", 1)], doc_a);
        let doc_b: Vec<_> = output
            .term_counts
            .iter()
            .filter(|value| value.document_id == "docB")
            .map(|value| (value.term.as_str(), value.count))
            .collect();
        assert_eq!(vec![("movie", 1), ("bad", 1), ("boring", 1)], doc_b);

        let words: Vec<_> = output
            .word_frequencies
            .iter()
            .map(|value| (value.term.as_str(), value.total_count))
            .collect();
        assert_eq!(
            vec![("movie", 4), ("great", 4), ("bad", 3), ("boring", 2), ("cast", 2)],
            words
        );
        assert_eq!(3, output.word_chart.len());
        assert_eq!(5, output.matrix.n_terms());
        assert!(!output.matrix.contains_term("funny"));
        assert_eq!(3, output.matrix.get("docC", "great"));

        for bigram in &output.bigram_frequencies {
            let (a, b) = bigram.term.split_once(' ').unwrap();
            assert!(!stop_words().contains(a) && !stop_words().contains(b));
        }
        assert_eq!(3, output.bigram_chart.len());

        for document in output.matrix.documents() {
            let sum: f64 = output
                .gamma
                .iter()
                .filter(|value| &value.document_id == document)
                .map(|value| value.probability)
                .sum();
            assert!(approx_eq!(f64, 1.0, sum, epsilon = 1e-6));
        }
        assert!(output.topic_terms.iter().all(|value| value.topic_id == 1));
        assert!(output.topic_terms.len() <= 3);
        assert!(output
            .classifications
            .iter()
            .all(|value| value.probability > 0.05 && value.rank >= 1));
        assert_eq!(output.classifications.len(), output.reviews.len());
        assert!(output.reviews.iter().all(|value| value.text.is_some()));
    }

    #[test]
    fn same_seed_same_output() {
        let first = run_pipeline(documents(), stop_words(), &config(), &engine()).unwrap();
        let second = run_pipeline(documents(), stop_words(), &config(), &engine()).unwrap();
        assert_eq!(first.matrix, second.matrix);
        assert_eq!(first.classifications, second.classifications);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_documents_do_not_add_rows() {
        let mut documents = documents();
        documents.push(RawDocument::new("empty", "!!! 123 ..."));
        documents.push(RawDocument::new("stop", "the and was"));
        let output = run_pipeline(documents, stop_words(), &config(), &engine()).unwrap();
        assert!(output
            .term_counts
            .iter()
            .all(|value| value.document_id != "empty" && value.document_id != "stop"));
        assert_eq!(4, output.matrix.n_documents());
        assert_eq!(6, output.documents.len());
    }

    #[test]
    fn fails_on_empty_input_and_vocabulary() {
        let result = run_pipeline(Vec::new(), stop_words(), &config(), &engine());
        assert!(matches!(result, Err(PipelineError::NoInputDocuments)));

        let config = PipelineConfig::new(0.05);
        let result = run_pipeline(documents(), stop_words(), &config, &engine());
        assert!(matches!(
            result,
            Err(PipelineError::Matrix(MatrixError::EmptyVocabulary { threshold: 20 }))
        ));

        let mut documents = documents();
        documents.push(RawDocument::new("docA", "again"));
        let result = run_pipeline(documents, stop_words(), &config, &engine());
        assert!(matches!(result, Err(PipelineError::DuplicateDocument(id)) if id == "docA"));
    }

    struct FailingEngine;

    impl TopicModelEngine for FailingEngine {
        type Model = LdaModel;
        type Error = FitError;

        fn fit(&self, _: &DocumentTermMatrix, _: &FitParameters) -> Result<LdaModel, FitError> {
            Err(FitError::EmptyMatrix)
        }
    }

    #[test]
    fn fit_errors_are_labeled() {
        let result = run_pipeline(documents(), stop_words(), &config(), &FailingEngine);
        let err = result.unwrap_err();
        assert!(matches!(err, PipelineError::TopicModel(_)));
        assert!(err.to_string().starts_with("topic model fit failed: "));
    }

    #[test]
    fn can_write_outputs() {
        let output = run_pipeline(documents(), stop_words(), &config(), &engine()).unwrap();
        let dir = tempdir().unwrap();
        let paths = PathsConfig::new(dir.path().join("out"));
        write_outputs(&output, &paths).unwrap();

        let words = std::fs::read_to_string(paths.file_word_frequencies()).unwrap();
        assert!(words.starts_with("term,total_count\nmovie,4\n"));
        let reviews = std::fs::read_to_string(paths.file_classified_reviews()).unwrap();
        assert!(reviews.starts_with("document_id,topic_id,probability,rank,text\n"));
        for file in [
            paths.file_bigram_frequencies(),
            paths.file_term_counts(),
            paths.file_topic_terms(),
            paths.file_topics_top_terms(),
            paths.file_document_topics(),
        ] {
            assert!(file.exists(), "{file} is missing");
        }
    }
}
