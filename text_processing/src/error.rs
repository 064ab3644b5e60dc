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

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error while loading stop words.
#[derive(Debug, Error)]
pub enum StopWordError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    CSV(#[from] csv::Error),
    #[error("The stopword file {0} does not exist!")]
    FileNotFound(Utf8PathBuf),
    #[error("The stopword csv {file} has no column named {column:?}!")]
    MissingColumn { file: Utf8PathBuf, column: String },
}

/// An error while building a document term matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Empty vocabulary after filtering: no term occurs more than {threshold} times!")]
    EmptyVocabulary { threshold: u64 },
}
