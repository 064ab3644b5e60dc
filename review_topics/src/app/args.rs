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
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
/// Finds the topics of movie reviews
pub struct ReviewTopicsArgs {
    /// A command to create an exemplary config
    #[arg(long)]
    pub generate_example_config: bool,

    /// The mode of the application
    #[command(subcommand)]
    pub mode: Option<RunMode>,
}

#[derive(Subcommand, Debug)]
pub enum RunMode {
    /// Runs the whole pipeline and writes the tables to the output folder.
    RUN {
        /// The config file, if not set ./review_topics.{json,toml,yaml} is used.
        #[arg(short, long)]
        config: Option<Utf8PathBuf>,
        /// A directory with txt files, a csv or a json file with the reviews.
        #[arg(short, long)]
        input: Option<Utf8PathBuf>,
        /// The output folder
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
        /// Topics need a probability above this value to be assigned to a review.
        #[arg(short, long)]
        gamma_threshold: Option<f64>,
        /// The number of topics
        #[arg(short = 'k', long)]
        topics: Option<NonZeroUsize>,
        /// The seed of the topic model
        #[arg(short, long)]
        seed: Option<u64>,
        /// Terms need a global frequency above this value.
        #[arg(short, long)]
        min_term_frequency: Option<u64>,
        /// overrides the log level from the config.
        #[arg(long)]
        override_log_level: Option<log::LevelFilter>,
        /// Log to file
        #[arg(long)]
        log_to_file: bool,
    },
    /// Creates an initial config in the folder.
    INIT {
        #[arg(default_value = ".")]
        folder: Utf8PathBuf,
    },
}
