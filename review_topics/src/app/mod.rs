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

mod args;
mod config;
mod constants;
mod exitcode_conversions;
mod instruction;
mod logging;
mod run;

pub use args::ReviewTopicsArgs;
use instruction::{prepare_instruction, Instruction, RunInstruction};
use std::process::ExitCode;

pub fn exec_args(args: ReviewTopicsArgs) -> ExitCode {
    match prepare_instruction(args) {
        Ok(Instruction::RunInstruction(instruction)) => execute(instruction),
        Ok(Instruction::Nothing) => ExitCode::SUCCESS,
        Err(err) => {
            // The logger is not configured before the config is loaded.
            eprintln!("Failed with: {err}");
            err.into()
        }
    }
}

/// Execute the pipeline
fn execute(instruction: RunInstruction) -> ExitCode {
    if let Err(err) = logging::configure_logging(&instruction.config) {
        eprintln!("Failed to configure the logging: {err}");
        return err.into();
    }
    match run::run(&instruction.config) {
        Ok(output) => {
            log::info!(
                "Finished with {} classified reviews.",
                output.reviews.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed with: {err}");
            err.into()
        }
    }
}
