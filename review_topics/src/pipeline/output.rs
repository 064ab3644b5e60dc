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

use crate::config::PathsConfig;
use crate::pipeline::{OutputError, PipelineOutput};
use camino::Utf8Path;
use serde::Serialize;

/// Writes [rows] as a csv file with a header to [path].
pub fn write_csv<T: Serialize>(path: &Utf8Path, rows: &[T]) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::debug!("Wrote {} rows to {path}.", rows.len());
    Ok(())
}

/// Writes all tables of [output] into the output folder of [paths].
pub fn write_outputs(output: &PipelineOutput, paths: &PathsConfig) -> Result<(), OutputError> {
    std::fs::create_dir_all(paths.output_path())?;
    write_csv(&paths.file_word_frequencies(), &output.word_frequencies)?;
    write_csv(&paths.file_bigram_frequencies(), &output.bigram_frequencies)?;
    write_csv(&paths.file_term_counts(), &output.term_counts)?;
    write_csv(&paths.file_topic_terms(), &output.topic_terms)?;
    write_csv(&paths.file_topics_top_terms(), &output.topics_top_terms)?;
    write_csv(&paths.file_document_topics(), &output.gamma)?;
    write_csv(&paths.file_classified_reviews(), &output.reviews)?;
    log::info!("Wrote all tables to {}.", paths.output_path());
    Ok(())
}
