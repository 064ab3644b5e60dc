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

use crate::config::Config;
use crate::corpus::CorpusLoadError;
use crate::pipeline::output::write_outputs;
use crate::pipeline::{run_pipeline, OutputError, PipelineError, PipelineOutput};
use itertools::Itertools;
use std::sync::Arc;
use text_processing::error::StopWordError;
use text_processing::stopword_registry::StopWordRegistry;
use thiserror::Error;
use topic_model::LdaEngine;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    StopWords(#[from] StopWordError),
    #[error(transparent)]
    Corpus(#[from] CorpusLoadError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Loads the stop words and the corpus, runs the pipeline and writes all tables.
pub fn run(config: &Config) -> Result<PipelineOutput, RunError> {
    let stop_words = StopWordRegistry::initialize(&config.stopwords).load()?;
    if stop_words.is_empty() {
        log::warn!("No stop words configured, every token is kept.");
    }
    let documents = config.corpus.load()?;
    let engine = LdaEngine::new(config.pipeline.lda);
    let output = run_pipeline(documents, Arc::new(stop_words), &config.pipeline, &engine)?;
    log_summary(&output);
    write_outputs(&output, &config.paths)?;
    Ok(output)
}

fn log_summary(output: &PipelineOutput) {
    log::info!(
        "Matrix: {} of {} documents with {} terms, {} beta and {} gamma rows.",
        output.matrix.n_documents(),
        output.documents.len(),
        output.matrix.n_terms(),
        output.beta.len(),
        output.gamma.len()
    );
    for (name, chart) in [("words", &output.word_chart), ("bigrams", &output.bigram_chart)] {
        log::info!(
            "Top {name}: {}",
            chart
                .iter()
                .map(|value| format!("{} ({})", value.term, value.total_count))
                .join(", ")
        );
    }
    log::info!(
        "Top terms of the chart topic: {}",
        output
            .topic_terms
            .iter()
            .map(|value| format!("{} ({:.4})", value.term, value.probability))
            .join(", ")
    );
    log::info!("{} topic assignments.", output.classifications.len());
}

#[cfg(test)]
mod test {
    use super::{run, RunError};
    use crate::config::{Config, PathsConfig, PipelineConfig};
    use crate::corpus::{CorpusLoadError, CorpusSource};
    use camino_tempfile::tempdir;
    use std::num::NonZeroUsize;
    use text_processing::configs::StopwordRegistryConfig;
    use text_processing::stopword_registry::StopWordRepository;

    #[test]
    fn can_run_from_config() {
        let dir = tempdir().unwrap();
        let reviews = dir.path().join("reviews.json");
        std::fs::write(
            &reviews,
            r#"{
                "docA": "The movie was great and funny",
                "docB": "The movie was bad and boring",
                "docC": "A great movie, great cast and a funny plot",
                "docD": "Bad plot, bad cast, a boring movie"
            }"#,
        )
        .unwrap();
        let stop_words = dir.path().join("stop_words.csv");
        std::fs::write(&stop_words, "word,lexicon\nthe,snowball\nwas,snowball\nand,snowball\na,onix\n").unwrap();

        let mut pipeline = PipelineConfig::new(0.05);
        pipeline.min_term_frequency = 1;
        pipeline.topics = NonZeroUsize::new(2).unwrap();
        pipeline.lda.iterations = 20;
        let mut config = Config::new(pipeline);
        config.paths = PathsConfig::new(dir.path().join("out"));
        config.corpus = CorpusSource::Json { file: reviews };
        config.stopwords = StopwordRegistryConfig {
            registries: vec![
                StopWordRepository::Csv {
                    file: stop_words,
                    column: "word".to_string(),
                    lexicon: Some("snowball".to_string()),
                },
                StopWordRepository::Inline {
                    words: vec!["a".to_string()],
                },
            ],
        };

        let output = run(&config).unwrap();
        assert_eq!(4, output.documents.len());
        assert!(output.term_counts.iter().all(|value| !["the", "was", "and", "a"].contains(&value.term.as_str())));
        assert!(config.paths.file_classified_reviews().exists());
        assert!(config.paths.file_document_topics().exists());
    }

    #[test]
    fn fails_without_documents() {
        let dir = tempdir().unwrap();
        let mut config = Config::new(PipelineConfig::new(0.05));
        config.paths = PathsConfig::new(dir.path().join("out"));
        config.corpus = CorpusSource::Dir {
            dir: dir.path().to_path_buf(),
            extension: "txt".to_string(),
        };
        assert!(matches!(
            run(&config),
            Err(RunError::Corpus(CorpusLoadError::NoInputDocuments))
        ));
    }
}
