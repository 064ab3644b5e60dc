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

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Where the artifacts of a run are written to.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename(serialize = "Paths"))]
pub struct PathsConfig {
    /// The folder receiving all csv files and the log file.
    #[serde(default = "_default_output_folder")]
    pub output: Utf8PathBuf,
}

fn _default_output_folder() -> Utf8PathBuf {
    Utf8PathBuf::from("./review_topics_out")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output: _default_output_folder(),
        }
    }
}

macro_rules! file_constructors {
    ($($name: ident = $file: literal;)+) => {
        $(
            pub fn $name(&self) -> Utf8PathBuf {
                self.output.join($file)
            }
        )+
    };
}

impl PathsConfig {
    pub fn new(output: impl AsRef<Utf8Path>) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
        }
    }

    pub fn output_path(&self) -> &Utf8Path {
        self.output.as_path()
    }

    file_constructors! {
        file_log = "review_topics.log";
        file_word_frequencies = "word_frequencies.csv";
        file_bigram_frequencies = "bigram_frequencies.csv";
        file_term_counts = "term_counts.csv";
        file_topic_terms = "topic_terms.csv";
        file_topics_top_terms = "topics_top_terms.csv";
        file_document_topics = "document_topics.csv";
        file_classified_reviews = "classified_reviews.csv";
    }
}
