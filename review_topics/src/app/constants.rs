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

use crate::config::{Config, PathsConfig, PipelineConfig, SystemConfig};
use crate::corpus::CorpusSource;
use text_processing::configs::StopwordRegistryConfig;
use text_processing::stopword_registry::StopWordRepository;

pub const REVIEW_TOPICS_WELCOME: &str = "Welcome to review_topics!";

/// The default name of a config file
pub const CONFIG_FILE_NAME: &str = "review_topics.json";

pub fn create_example_config() -> Config {
    let mut pipeline = PipelineConfig::new(0.05);
    pipeline.lda.iterations = 500;
    Config {
        system: SystemConfig::default(),
        paths: PathsConfig::new("./review_topics_out"),
        corpus: CorpusSource::Csv {
            file: "path/to/my/reviews.csv".into(),
            id_column: "document_id".to_string(),
            text_column: "text".to_string(),
        },
        stopwords: StopwordRegistryConfig {
            registries: vec![
                StopWordRepository::Inline {
                    words: vec!["movie".to_string(), "film".to_string()],
                },
                StopWordRepository::File {
                    file: "path/to/my/stopwords.txt".into(),
                },
                StopWordRepository::Csv {
                    file: "path/to/my/stop_words.csv".into(),
                    column: "word".to_string(),
                    lexicon: Some("snowball".to_string()),
                },
            ],
        },
        pipeline,
    }
}
