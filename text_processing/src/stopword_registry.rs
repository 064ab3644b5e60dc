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

use crate::configs::StopwordRegistryConfig;
use crate::error::StopWordError;
use camino::{Utf8Path, Utf8PathBuf};
use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use unicode_normalization::UnicodeNormalization;

/// A source of stop words.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StopWordRepository {
    /// Words written directly into the config.
    Inline { words: Vec<String> },
    /// A text file with one word per line. Empty lines and lines starting with `#` are skipped.
    File { file: Utf8PathBuf },
    /// A csv file with a header. The words are read from [column], if [lexicon] is set
    /// only rows where the `lexicon` column matches are used.
    Csv {
        file: Utf8PathBuf,
        #[serde(default = "_default_word_column")]
        column: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lexicon: Option<String>,
    },
}

fn _default_word_column() -> String {
    "word".to_string()
}

/// Provides raw stop words.
pub trait StopWordListRepository {
    fn load_raw_stop_words(&self) -> Result<Vec<String>, StopWordError>;
}

impl StopWordListRepository for StopWordRepository {
    fn load_raw_stop_words(&self) -> Result<Vec<String>, StopWordError> {
        fn check_exists(file: &Utf8Path) -> Result<(), StopWordError> {
            if file.exists() {
                Ok(())
            } else {
                Err(StopWordError::FileNotFound(file.to_path_buf()))
            }
        }

        match self {
            StopWordRepository::Inline { words } => Ok(words.clone()),
            StopWordRepository::File { file } => {
                check_exists(file)?;
                let mut result = Vec::new();
                for line in BufReader::new(File::open(file)?).lines() {
                    let line = line?;
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    result.push(line.to_string());
                }
                Ok(result)
            }
            StopWordRepository::Csv {
                file,
                column,
                lexicon,
            } => {
                check_exists(file)?;
                let mut reader = csv::ReaderBuilder::new()
                    .has_headers(true)
                    .from_reader(BufReader::new(File::open(file)?));
                let headers = reader.headers()?.clone();
                let word_idx = headers.iter().position(|value| value == column).ok_or_else(|| {
                    StopWordError::MissingColumn {
                        file: file.clone(),
                        column: column.clone(),
                    }
                })?;
                let lexicon_idx = match lexicon {
                    None => None,
                    Some(_) => Some(headers.iter().position(|value| value == "lexicon").ok_or_else(
                        || StopWordError::MissingColumn {
                            file: file.clone(),
                            column: "lexicon".to_string(),
                        },
                    )?),
                };
                let mut result = Vec::new();
                for record in reader.records() {
                    let record = record?;
                    if let (Some(idx), Some(lexicon)) = (lexicon_idx, lexicon) {
                        if record.get(idx) != Some(lexicon.as_str()) {
                            continue;
                        }
                    }
                    if let Some(word) = record.get(word_idx) {
                        result.push(word.to_string());
                    }
                }
                Ok(result)
            }
        }
    }
}

/// A registry for stopwords.
/// Every registered repository contributes to the final list.
#[derive(Default)]
pub struct StopWordRegistry {
    repositories: Vec<Box<dyn StopWordListRepository>>,
}

impl StopWordRegistry {
    pub fn initialize(cfg: &StopwordRegistryConfig) -> Self {
        let mut new = Self::default();
        for value in cfg.iter() {
            new.register(value.clone())
        }
        new
    }

    pub fn register<R: StopWordListRepository + 'static>(&mut self, repository: R) {
        self.register_boxed(Box::new(repository))
    }

    pub fn register_boxed(&mut self, repository: Box<dyn StopWordListRepository>) {
        self.repositories.push(repository);
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Loads the union of all registered repositories.
    pub fn load(&self) -> Result<StopWordList, StopWordError> {
        let mut list = StopWordList::default();
        for repo in &self.repositories {
            list.extend(repo.load_raw_stop_words()?);
        }
        log::debug!("Loaded {} stopwords from {} repositories.", list.len(), self.len());
        Ok(list)
    }
}

/// A set of stopwords. Every word is trimmed, NFC normalized and lowercased.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct StopWordList {
    words: HashSet<CompactString>,
}

impl StopWordList {
    pub fn new<I: IntoIterator<Item = Q>, Q: ToCompactString>(words: I) -> Self {
        let mut new = Self::default();
        new.extend(words);
        new
    }

    fn prepare(word: &str) -> CompactString {
        word.trim().nfc().flat_map(char::to_lowercase).collect()
    }

    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.words.contains(value)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn extend_with(&mut self, other: Self) {
        self.words.extend(other.words);
        self.words.shrink_to_fit();
    }
}

impl<Q> Extend<Q> for StopWordList
where
    Q: ToCompactString,
{
    fn extend<T: IntoIterator<Item = Q>>(&mut self, iter: T) {
        for value in iter.into_iter() {
            let word = Self::prepare(&value.to_compact_string());
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
        self.words.shrink_to_fit();
    }
}
