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

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use strum::{Display, EnumString};

/// The default number of topics
pub const DEFAULT_TOPICS: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(value) => value,
    None => unreachable!(),
};
/// The default seed of a fit
pub const DEFAULT_SEED: u64 = 1234;
/// The default number of iterations of a fit
pub const DEFAULT_ITERATIONS: usize = 200;

/// The inference method of a topic model fit.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InferenceMethod {
    /// Variational expectation maximisation
    #[default]
    #[serde(alias = "vem")]
    #[strum(to_string = "variational", serialize = "vem")]
    Variational,
}

/// The parameters every engine has to respect.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FitParameters {
    /// The number of topics
    pub k: NonZeroUsize,
    pub method: InferenceMethod,
    pub seed: u64,
}

impl Default for FitParameters {
    fn default() -> Self {
        Self {
            k: DEFAULT_TOPICS,
            method: InferenceMethod::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// The settings of the [crate::lda::LdaEngine].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LdaConfig {
    /// The number of update steps over the corpus
    #[serde(default = "_default_iterations")]
    pub iterations: usize,
}

const fn _default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            iterations: _default_iterations(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{InferenceMethod, LdaConfig};
    use std::str::FromStr;

    #[test]
    fn can_parse_method() {
        assert_eq!(InferenceMethod::Variational, InferenceMethod::from_str("VEM").unwrap());
        assert_eq!(InferenceMethod::Variational, InferenceMethod::from_str("variational").unwrap());
        assert_eq!("variational", InferenceMethod::Variational.to_string());
        assert!(InferenceMethod::from_str("gibbs").is_err());
    }

    #[test]
    fn iterations_have_a_default() {
        let config: LdaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(LdaConfig::default(), config);
        assert_eq!(200, config.iterations);
    }
}
