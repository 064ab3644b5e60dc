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

use crate::normalizer::normalize;
use serde::{Deserialize, Serialize};

/// A document as it comes from a corpus source.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub document_id: String,
    pub raw_text: String,
}

impl RawDocument {
    pub fn new(document_id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// A loaded document. The normalized text is calculated once on creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Document {
    id: String,
    raw_text: String,
    normalized_text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize(&raw_text);
        Self {
            id: id.into(),
            raw_text,
            normalized_text,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    #[inline]
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }
}

impl From<RawDocument> for Document {
    fn from(value: RawDocument) -> Self {
        Self::new(value.document_id, value.raw_text)
    }
}
