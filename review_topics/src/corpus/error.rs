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

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors when loading a corpus
#[derive(Debug, Error)]
pub enum CorpusLoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("The input {0} is neither a directory nor a csv or json file!")]
    UnsupportedInput(Utf8PathBuf),
    #[error("The file {file} does not have a column {column}!")]
    MissingColumn { file: Utf8PathBuf, column: String },
    #[error("The document {0} exists more than once!")]
    DuplicateDocument(String),
    #[error("no input documents")]
    NoInputDocuments,
}
