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

use text_processing::error::MatrixError;
use thiserror::Error;

/// Errors of a single pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no input documents")]
    NoInputDocuments,
    #[error("The document {0} exists more than once!")]
    DuplicateDocument(String),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error("topic model fit failed: {0}")]
    TopicModel(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Errors when writing the artifacts of a run
#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
