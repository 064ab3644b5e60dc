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

use crate::error::MatrixError;
use crate::frequency::{DocumentTermCounts, FrequencyTable, TermCount};
use indexmap::IndexSet;

/// A sparse document term matrix.
/// Rows are documents, columns are the terms of the vocabulary, a cell is the count.
/// Only cells with a count greater than zero are stored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DocumentTermMatrix {
    documents: Vec<String>,
    terms: IndexSet<String>,
    rows: Vec<Vec<(usize, u64)>>,
}

impl DocumentTermMatrix {
    /// Joins the [documents] with the already filtered [vocabulary].
    /// Terms outside of the vocabulary are dropped, documents without any
    /// remaining term do not get a row.
    ///
    /// Fails if the vocabulary is empty, [threshold] is only used for the error.
    pub fn build(
        documents: &[DocumentTermCounts],
        vocabulary: &FrequencyTable,
        threshold: u64,
    ) -> Result<Self, MatrixError> {
        if vocabulary.is_empty() {
            return Err(MatrixError::EmptyVocabulary { threshold });
        }
        let terms: IndexSet<String> = vocabulary.terms().map(str::to_string).collect();

        let mut document_ids = Vec::new();
        let mut rows = Vec::new();
        for doc in documents {
            let row: Vec<(usize, u64)> = doc
                .iter()
                .filter(|(_, count)| *count > 0)
                .filter_map(|(term, count)| terms.get_index_of(term).map(|idx| (idx, count)))
                .collect();
            if !row.is_empty() {
                document_ids.push(doc.document_id().to_string());
                rows.push(row);
            }
        }

        log::debug!(
            "Built document term matrix with {} documents, {} terms and {} entries.",
            document_ids.len(),
            terms.len(),
            rows.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            documents: document_ids,
            terms,
            rows,
        })
    }

    pub fn n_documents(&self) -> usize {
        self.documents.len()
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// The number of stored cells.
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn document(&self, row: usize) -> Option<&str> {
        self.documents.get(row).map(String::as_str)
    }

    pub fn terms(&self) -> impl ExactSizeIterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get_index(column).map(String::as_str)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// The stored (column, count) pairs of a row.
    pub fn row(&self, row: usize) -> &[(usize, u64)] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The count for a document and a term. Zero if not present.
    pub fn get(&self, document: &str, term: &str) -> u64 {
        let Some(column) = self.terms.get_index_of(term) else {
            return 0;
        };
        self.documents
            .iter()
            .position(|value| value == document)
            .and_then(|row| {
                self.rows[row]
                    .iter()
                    .find(|(idx, _)| *idx == column)
                    .map(|(_, count)| *count)
            })
            .unwrap_or(0)
    }

    /// The summed count of a term over all documents.
    pub fn total_count(&self, term: &str) -> u64 {
        let Some(column) = self.terms.get_index_of(term) else {
            return 0;
        };
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|(idx, _)| *idx == column)
            .map(|(_, count)| *count)
            .sum()
    }

    /// All stored cells as rows.
    pub fn term_counts(&self) -> impl Iterator<Item = TermCount> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().map(move |(column, count)| TermCount {
                document_id: self.documents[row].clone(),
                term: self.terms[*column].clone(),
                count: *count,
            })
        })
    }
}
