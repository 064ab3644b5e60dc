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

use crate::corpus::CorpusLoadError;
use camino::{Utf8Path, Utf8PathBuf};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use text_processing::document::RawDocument;

/// Where the raw reviews come from.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CorpusSource {
    /// Every file with [extension] in [dir] is a document, the id is the file stem.
    /// The documents are ordered by their file name.
    Dir {
        dir: Utf8PathBuf,
        #[serde(default = "_default_extension")]
        extension: String,
    },
    /// A csv file with a header, one document per row.
    Csv {
        file: Utf8PathBuf,
        #[serde(default = "_default_id_column")]
        id_column: String,
        #[serde(default = "_default_text_column")]
        text_column: String,
    },
    /// A json object mapping the name of a document to its text.
    Json { file: Utf8PathBuf },
}

fn _default_extension() -> String {
    "txt".to_string()
}

fn _default_id_column() -> String {
    "document_id".to_string()
}

fn _default_text_column() -> String {
    "text".to_string()
}

impl Default for CorpusSource {
    fn default() -> Self {
        Self::Dir {
            dir: Utf8PathBuf::from("./reviews"),
            extension: _default_extension(),
        }
    }
}

/// The entries of a json object in file order. Repeated keys are kept,
/// a map would silently keep only the last one.
struct JsonDocuments(Vec<RawDocument>);

struct JsonDocumentsVisitor;

impl<'de> Visitor<'de> for JsonDocumentsVisitor {
    type Value = JsonDocuments;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping document names to their text")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut documents = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((id, text)) = access.next_entry::<String, String>()? {
            documents.push(RawDocument::new(id, text));
        }
        Ok(JsonDocuments(documents))
    }
}

impl<'de> Deserialize<'de> for JsonDocuments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(JsonDocumentsVisitor)
    }
}

impl CorpusSource {
    /// Guesses the source from a path. Directories are read with the default extension,
    /// files by their extension.
    pub fn from_path(path: impl AsRef<Utf8Path>) -> Result<Self, CorpusLoadError> {
        let path = path.as_ref();
        if path.is_dir() {
            return Ok(Self::Dir {
                dir: path.to_path_buf(),
                extension: _default_extension(),
            });
        }
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("csv") => Ok(Self::Csv {
                file: path.to_path_buf(),
                id_column: _default_id_column(),
                text_column: _default_text_column(),
            }),
            Some("json") => Ok(Self::Json {
                file: path.to_path_buf(),
            }),
            _ => Err(CorpusLoadError::UnsupportedInput(path.to_path_buf())),
        }
    }

    /// Loads all documents in order.
    /// Fails if a document id is not unique or nothing was found.
    pub fn load(&self) -> Result<Vec<RawDocument>, CorpusLoadError> {
        let documents = match self {
            CorpusSource::Dir { dir, extension } => Self::load_dir(dir, extension)?,
            CorpusSource::Csv {
                file,
                id_column,
                text_column,
            } => Self::load_csv(file, id_column, text_column)?,
            CorpusSource::Json { file } => {
                let reader = BufReader::new(File::open(file)?);
                let JsonDocuments(documents) = serde_json::from_reader(reader)?;
                documents
            }
        };

        if documents.is_empty() {
            return Err(CorpusLoadError::NoInputDocuments);
        }
        let mut seen = HashSet::with_capacity(documents.len());
        for document in &documents {
            if !seen.insert(document.document_id.as_str()) {
                return Err(CorpusLoadError::DuplicateDocument(
                    document.document_id.clone(),
                ));
            }
        }
        log::info!("Loaded {} documents.", documents.len());
        Ok(documents)
    }

    fn load_dir(dir: &Utf8Path, extension: &str) -> Result<Vec<RawDocument>, CorpusLoadError> {
        let mut files = Vec::new();
        for entry in dir.read_dir_utf8()? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension() == Some(extension) {
                files.push(path.to_path_buf());
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut documents = Vec::with_capacity(files.len());
        for file in files {
            let Some(id) = file.file_stem() else {
                log::warn!("Skipping {file}, it has no file stem.");
                continue;
            };
            documents.push(RawDocument::new(id, std::fs::read_to_string(&file)?));
        }
        Ok(documents)
    }

    fn load_csv(
        file: &Utf8Path,
        id_column: &str,
        text_column: &str,
    ) -> Result<Vec<RawDocument>, CorpusLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(File::open(file)?));
        let headers = reader.headers()?.clone();
        let position = |column: &str| {
            headers
                .iter()
                .position(|value| value == column)
                .ok_or_else(|| CorpusLoadError::MissingColumn {
                    file: file.to_path_buf(),
                    column: column.to_string(),
                })
        };
        let id_idx = position(id_column)?;
        let text_idx = position(text_column)?;

        let mut documents = Vec::new();
        for record in reader.records() {
            let record = record?;
            let id = record.get(id_idx).unwrap_or_default();
            let text = record.get(text_idx).unwrap_or_default();
            documents.push(RawDocument::new(id, text));
        }
        Ok(documents)
    }
}

#[cfg(test)]
mod test {
    use super::CorpusSource;
    use crate::corpus::CorpusLoadError;
    use camino_tempfile::tempdir;

    #[test]
    fn can_load_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "The movie was bad and boring").unwrap();
        std::fs::write(dir.path().join("a.txt"), "The movie was great and funny").unwrap();
        std::fs::write(dir.path().join("notes.md"), "not a review").unwrap();

        let source = CorpusSource::from_path(dir.path()).unwrap();
        let documents = source.load().unwrap();
        assert_eq!(2, documents.len());
        assert_eq!("a", documents[0].document_id);
        assert_eq!("The movie was great and funny", documents[0].raw_text);
        assert_eq!("b", documents[1].document_id);
    }

    #[test]
    fn can_load_csv() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("reviews.csv");
        std::fs::write(
            &file,
            "document_id,text,stars\ndocA,\"The movie was great, and funny\",5\ndocB,The movie was bad,1\n",
        )
        .unwrap();

        let documents = CorpusSource::from_path(&file).unwrap().load().unwrap();
        assert_eq!(2, documents.len());
        assert_eq!("docA", documents[0].document_id);
        assert_eq!("The movie was great, and funny", documents[0].raw_text);

        let source = CorpusSource::Csv {
            file,
            id_column: "id".to_string(),
            text_column: "text".to_string(),
        };
        assert!(matches!(
            source.load(),
            Err(CorpusLoadError::MissingColumn { .. })
        ));
    }

    #[test]
    fn can_load_json_in_order() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("reviews.json");
        std::fs::write(&file, r#"{"z": "last one", "a": "first one", "m": "middle"}"#).unwrap();

        let documents = CorpusSource::from_path(&file).unwrap().load().unwrap();
        let ids: Vec<_> = documents.iter().map(|value| value.document_id.as_str()).collect();
        assert_eq!(vec!["z", "a", "m"], ids);
    }

    #[test]
    fn fails_on_empty_or_duplicate_input() {
        let dir = tempdir().unwrap();
        let empty = CorpusSource::Dir {
            dir: dir.path().to_path_buf(),
            extension: "txt".to_string(),
        };
        let result = empty.load();
        assert!(matches!(result, Err(CorpusLoadError::NoInputDocuments)));
        assert_eq!("no input documents", result.unwrap_err().to_string());

        let file = dir.path().join("reviews.csv");
        std::fs::write(&file, "document_id,text\na,one\na,two\n").unwrap();
        assert!(matches!(
            CorpusSource::from_path(&file).unwrap().load(),
            Err(CorpusLoadError::DuplicateDocument(id)) if id == "a"
        ));

        let file = dir.path().join("reviews.json");
        std::fs::write(
            &file,
            r#"{"docA": "first review", "docB": "other", "docA": "second review"}"#,
        )
        .unwrap();
        assert!(matches!(
            CorpusSource::Json { file }.load(),
            Err(CorpusLoadError::DuplicateDocument(id)) if id == "docA"
        ));

        assert!(matches!(
            CorpusSource::from_path(dir.path().join("reviews.xml")),
            Err(CorpusLoadError::UnsupportedInput(_))
        ));
    }

    #[test]
    fn can_deserialize_source() {
        let source: CorpusSource =
            serde_json::from_str(r#"{"kind": "csv", "file": "reviews.csv"}"#).unwrap();
        assert_eq!(
            CorpusSource::Csv {
                file: "reviews.csv".into(),
                id_column: "document_id".to_string(),
                text_column: "text".to_string(),
            },
            source
        );
    }
}
