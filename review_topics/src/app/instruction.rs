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

use crate::app::args::RunMode;
use crate::app::config::load;
use crate::app::constants::{create_example_config, CONFIG_FILE_NAME, REVIEW_TOPICS_WELCOME};
use crate::app::ReviewTopicsArgs;
use crate::config::{Config, PipelineConfigError};
use crate::corpus::{CorpusLoadError, CorpusSource};
use camino::Utf8Path;
use std::fs::File;
use std::io::BufWriter;
use thiserror::Error;

/// The kind of instruction provided by the args.
#[derive(Debug)]
pub enum Instruction {
    RunInstruction(RunInstruction),
    Nothing,
}

/// The instruction to run the pipeline.
#[derive(Debug)]
pub struct RunInstruction {
    pub config: Config,
}

#[derive(Debug, Error)]
pub enum InstructionError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),
    #[error(transparent)]
    ConfigSerialisationError(#[from] serde_json::Error),
    #[error(transparent)]
    InputError(#[from] CorpusLoadError),
    #[error(transparent)]
    InvalidConfig(#[from] PipelineConfigError),
}

/// Writes [cfg] as pretty json to [path], returns false if the file already exists.
fn write_config(path: &Utf8Path, cfg: &Config) -> Result<bool, InstructionError> {
    if path.exists() {
        return Ok(false);
    }
    let file = File::options().create_new(true).write(true).open(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), cfg)?;
    Ok(true)
}

/// Consumes the args and returns everything necessary to run the pipeline
pub(crate) fn prepare_instruction(args: ReviewTopicsArgs) -> Result<Instruction, InstructionError> {
    if let Some(mode) = args.mode {
        match mode {
            RunMode::RUN {
                config,
                input,
                output,
                gamma_threshold,
                topics,
                seed,
                min_term_frequency,
                override_log_level,
                log_to_file,
            } => {
                let mut config = load(config, gamma_threshold)?;

                if let Some(input) = input {
                    config.corpus = CorpusSource::from_path(input)?;
                }
                if let Some(output) = output {
                    config.paths.output = output;
                }
                if let Some(topics) = topics {
                    config.pipeline.topics = topics;
                }
                if let Some(seed) = seed {
                    config.pipeline.seed = seed;
                }
                if let Some(min_term_frequency) = min_term_frequency {
                    config.pipeline.min_term_frequency = min_term_frequency;
                }
                if let Some(log_level) = override_log_level {
                    config.system.log_level = log_level;
                }
                if log_to_file {
                    config.system.log_to_file = log_to_file;
                }
                config.pipeline.validate()?;

                Ok(Instruction::RunInstruction(RunInstruction { config }))
            }
            RunMode::INIT { folder } => {
                println!("{}\n", REVIEW_TOPICS_WELCOME);
                println!("Start creating the initial config.");
                std::fs::create_dir_all(&folder)?;
                let path = folder.join(CONFIG_FILE_NAME);
                if write_config(&path, &create_example_config())? {
                    println!("Created the initial config at {path}.");
                } else {
                    println!("The config already exists in {path}.\nDelete it before regenerating.")
                }
                Ok(Instruction::Nothing)
            }
        }
    } else {
        if args.generate_example_config {
            let path = Utf8Path::new("example_config.json");
            if write_config(path, &create_example_config())? {
                println!("Created the example config at {path}.");
            } else {
                println!("The example config already exists in {path}.")
            }
        }
        Ok(Instruction::Nothing)
    }
}

#[cfg(test)]
mod test {
    use super::{prepare_instruction, Instruction};
    use crate::app::args::RunMode;
    use crate::app::constants::{create_example_config, CONFIG_FILE_NAME};
    use crate::app::ReviewTopicsArgs;
    use crate::app::instruction::InstructionError;
    use crate::config::{Config, PipelineConfigError};
    use crate::corpus::CorpusSource;
    use camino_tempfile::tempdir;
    use std::num::NonZeroUsize;

    #[test]
    fn can_init_config() {
        let dir = tempdir().unwrap();
        let args = ReviewTopicsArgs {
            generate_example_config: false,
            mode: Some(RunMode::INIT {
                folder: dir.path().to_path_buf(),
            }),
        };
        assert!(matches!(prepare_instruction(args).unwrap(), Instruction::Nothing));
        let written: Config = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap(),
        )
        .unwrap();
        assert_eq!(create_example_config(), written);
    }

    #[test]
    fn args_override_config() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("config.json");
        std::fs::write(&file, serde_json::to_string(&create_example_config()).unwrap()).unwrap();
        let reviews = dir.path().join("reviews.json");

        let args = ReviewTopicsArgs {
            generate_example_config: false,
            mode: Some(RunMode::RUN {
                config: Some(file),
                input: Some(reviews.clone()),
                output: Some(dir.path().join("out")),
                gamma_threshold: Some(0.3),
                topics: NonZeroUsize::new(3),
                seed: Some(7),
                min_term_frequency: Some(2),
                override_log_level: Some(log::LevelFilter::Debug),
                log_to_file: true,
            }),
        };
        let Instruction::RunInstruction(instruction) = prepare_instruction(args).unwrap() else {
            panic!("Expected a run instruction!")
        };
        let config = instruction.config;
        assert_eq!(CorpusSource::Json { file: reviews }, config.corpus);
        assert_eq!(dir.path().join("out"), config.paths.output);
        assert_eq!(0.3, config.pipeline.gamma_threshold);
        assert_eq!(3, config.pipeline.topics.get());
        assert_eq!(7, config.pipeline.seed);
        assert_eq!(2, config.pipeline.min_term_frequency);
        assert_eq!(log::LevelFilter::Debug, config.system.log_level);
        assert!(config.system.log_to_file);
    }

    fn run_args(config: camino::Utf8PathBuf, gamma_threshold: Option<f64>, topics: usize) -> ReviewTopicsArgs {
        ReviewTopicsArgs {
            generate_example_config: false,
            mode: Some(RunMode::RUN {
                config: Some(config),
                input: None,
                output: None,
                gamma_threshold,
                topics: NonZeroUsize::new(topics),
                seed: None,
                min_term_frequency: None,
                override_log_level: None,
                log_to_file: false,
            }),
        }
    }

    #[test]
    fn rejects_invalid_pipeline_values() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("config.json");
        std::fs::write(&file, serde_json::to_string(&create_example_config()).unwrap()).unwrap();

        assert!(matches!(
            prepare_instruction(run_args(file.clone(), Some(f64::NAN), 5)),
            Err(InstructionError::InvalidConfig(PipelineConfigError::GammaThreshold(_)))
        ));
        assert!(matches!(
            prepare_instruction(run_args(file.clone(), Some(1.5), 5)),
            Err(InstructionError::InvalidConfig(PipelineConfigError::GammaThreshold(_)))
        ));

        let mut config = create_example_config();
        config.pipeline.chart_topic = 4;
        std::fs::write(&file, serde_json::to_string(&config).unwrap()).unwrap();
        assert!(matches!(
            prepare_instruction(run_args(file.clone(), None, 3)),
            Err(InstructionError::InvalidConfig(PipelineConfigError::ChartTopic { .. }))
        ));
        assert!(matches!(
            prepare_instruction(run_args(file, None, 4)).unwrap(),
            Instruction::RunInstruction(_)
        ));
    }
}
