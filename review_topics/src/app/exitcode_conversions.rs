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

use crate::app::instruction::InstructionError;
use crate::app::logging::LoggingError;
use crate::app::run::RunError;
use crate::corpus::CorpusLoadError;
use crate::pipeline::{OutputError, PipelineError};
use std::process::ExitCode;
use text_processing::error::StopWordError;

impl From<InstructionError> for ExitCode {
    fn from(value: InstructionError) -> Self {
        match value {
            InstructionError::IOError(_) => ExitCode::from(2),
            InstructionError::ConfigError(_) => ExitCode::from(3),
            InstructionError::ConfigSerialisationError(_) => ExitCode::from(4),
            InstructionError::InputError(_) => ExitCode::from(5),
            InstructionError::InvalidConfig(_) => ExitCode::from(9),
        }
    }
}

impl From<LoggingError> for ExitCode {
    fn from(value: LoggingError) -> Self {
        match value {
            LoggingError::Io(_) => ExitCode::from(6),
            LoggingError::Config(_) => ExitCode::from(7),
            LoggingError::SetLogger(_) => ExitCode::from(8),
        }
    }
}

impl From<RunError> for ExitCode {
    fn from(value: RunError) -> Self {
        let code: u8 = match value {
            RunError::StopWords(value) => match value {
                StopWordError::IO(_) => 11,
                StopWordError::CSV(_) => 12,
                StopWordError::FileNotFound(_) => 13,
                StopWordError::MissingColumn { .. } => 14,
            },
            RunError::Corpus(value) => match value {
                CorpusLoadError::Io(_) => 21,
                CorpusLoadError::Csv(_) => 22,
                CorpusLoadError::Json(_) => 23,
                CorpusLoadError::UnsupportedInput(_) => 24,
                CorpusLoadError::MissingColumn { .. } => 25,
                CorpusLoadError::DuplicateDocument(_) => 26,
                CorpusLoadError::NoInputDocuments => 27,
            },
            RunError::Pipeline(value) => match value {
                PipelineError::NoInputDocuments => 31,
                PipelineError::DuplicateDocument(_) => 32,
                PipelineError::Matrix(_) => 33,
                PipelineError::TopicModel(_) => 34,
            },
            RunError::Output(value) => match value {
                OutputError::Io(_) => 41,
                OutputError::Csv(_) => 42,
            },
        };
        ExitCode::from(code)
    }
}
