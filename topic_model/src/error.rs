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

use aprender::AprenderError;
use thiserror::Error;

/// An error while fitting a topic model.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("Can not fit a topic model on an empty document term matrix!")]
    EmptyMatrix,
    #[error("A fit needs at least one iteration!")]
    NoIterations,
    #[error("Can not convert the document term matrix: {0}")]
    Matrix(&'static str),
    #[error(transparent)]
    Engine(#[from] AprenderError),
}
