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

use crate::config::Config as ReviewTopicsConfig;
use camino::Utf8Path;
use config::Config;

fn environment() -> config::Environment {
    config::Environment::with_prefix("REVIEW_TOPICS")
        .separator("__")
        .try_parsing(true)
}

/// Loads the config, later sources override earlier ones:
/// the discovered `./review_topics` file, [path], the environment and the [gamma_threshold].
pub fn load<P: AsRef<Utf8Path>>(
    path: Option<P>,
    gamma_threshold: Option<f64>,
) -> Result<ReviewTopicsConfig, config::ConfigError> {
    let mut builder = Config::builder()
        .add_source(config::File::with_name("./review_topics").required(false));
    if let Some(path) = path {
        builder = builder.add_source(config::File::with_name(path.as_ref().as_str()));
    }
    builder
        .add_source(environment())
        .set_override_option("pipeline.gamma_threshold", gamma_threshold)?
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod test {
    use super::load;
    use crate::app::constants::create_example_config;
    use crate::config::Config as ReviewTopicsConfig;
    use camino_tempfile::tempdir;

    #[test]
    fn can_load_config_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("config.json");
        let config = create_example_config();
        std::fs::write(&file, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = load(Some(&file), None).unwrap();
        assert_eq!(config, loaded);

        let loaded = load(Some(&file), Some(0.3)).unwrap();
        assert_eq!(0.3, loaded.pipeline.gamma_threshold);
    }

    #[test]
    fn gamma_threshold_has_to_be_set() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "[pipeline]\ntopics = 5\n").unwrap();
        assert!(load(Some(&file), None).is_err());

        let loaded: ReviewTopicsConfig = load(Some(&file), Some(0.05)).unwrap();
        assert_eq!(5, loaded.pipeline.topics.get());
        assert_eq!(0.05, loaded.pipeline.gamma_threshold);
        assert_eq!(20, loaded.pipeline.min_term_frequency);
    }
}
