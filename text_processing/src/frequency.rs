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

use crate::document::Document;
use crate::tokenizer::Tokenizer;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The number of times a term occurs in a document.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TermCount {
    pub document_id: String,
    pub term: String,
    pub count: u64,
}

/// The summed up count of a term over all documents.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct VocabularyFrequency {
    pub term: String,
    pub total_count: u64,
}

/// The term counts of a single document, in order of first occurrence.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DocumentTermCounts {
    document_id: String,
    counts: IndexMap<String, u64>,
}

impl DocumentTermCounts {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            counts: IndexMap::new(),
        }
    }

    pub fn from_tokens<I: IntoIterator<Item = T>, T: AsRef<str>>(
        document_id: impl Into<String>,
        tokens: I,
    ) -> Self {
        let mut new = Self::new(document_id);
        for token in tokens {
            new.add(token.as_ref());
        }
        new
    }

    #[inline]
    pub fn add(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.counts.insert(term.to_string(), 1);
            }
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
    }

    /// The rows of this document.
    pub fn term_counts(&self) -> impl Iterator<Item = TermCount> + '_ {
        self.iter().map(|(term, count)| TermCount {
            document_id: self.document_id.clone(),
            term: term.to_string(),
            count,
        })
    }
}

/// Counts grouped by term. Keeps the order of the first occurrence of a term,
/// which is also the tie breaker when sorting by frequency.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups the items by exact match and counts them.
    pub fn from_items<I: IntoIterator<Item = T>, T: AsRef<str>>(items: I) -> Self {
        let mut new = Self::new();
        for item in items {
            new.add_count(item.as_ref(), 1);
        }
        new
    }

    /// Sums up the counts of all documents.
    pub fn from_documents<'a, I: IntoIterator<Item = &'a DocumentTermCounts>>(docs: I) -> Self {
        let mut new = Self::new();
        for doc in docs {
            for (term, count) in doc.iter() {
                new.add_count(term, count);
            }
        }
        new
    }

    pub fn add_count(&mut self, term: &str, count: u64) {
        match self.counts.get_mut(term) {
            Some(value) => *value = value.saturating_add(count),
            None => {
                self.counts.insert(term.to_string(), count);
            }
        }
    }

    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
    }

    /// Keeps the terms with a total count strictly greater than [threshold].
    pub fn filter_above(&self, threshold: u64) -> Self {
        self.filter(|_, count| count > threshold)
    }

    pub fn filter<F: Fn(&str, u64) -> bool>(&self, condition: F) -> Self {
        Self {
            counts: self
                .counts
                .iter()
                .filter(|(term, count)| condition(term, **count))
                .map(|(term, count)| (term.clone(), *count))
                .collect(),
        }
    }

    /// Sorted by descending count, ties keep the order of first occurrence.
    pub fn sorted_desc(&self) -> Vec<VocabularyFrequency> {
        let mut result: Vec<VocabularyFrequency> = self
            .iter()
            .map(|(term, total_count)| VocabularyFrequency {
                term: term.to_string(),
                total_count,
            })
            .collect();
        // sort_by is stable
        result.sort_by(|a, b| b.total_count.cmp(&a.total_count));
        result
    }

    /// The [n] most frequent terms.
    pub fn top(&self, n: usize) -> Vec<VocabularyFrequency> {
        let mut sorted = self.sorted_desc();
        sorted.truncate(n);
        sorted
    }
}

impl Display for FrequencyTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unique Term Count: {}", self.len())?;
        for (term, count) in self.iter() {
            write!(f, "\n  {term}: {count}")?;
        }
        Ok(())
    }
}

/// Collects the unigram and bigram statistics of a corpus.
#[derive(Debug, Default)]
pub struct TermStatisticsCollector {
    documents: Vec<DocumentTermCounts>,
    token_count: u64,
    raw_bigrams: FrequencyTable,
}

impl TermStatisticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes a [document] and adds its counts.
    /// A document without any remaining token does not add any row.
    pub fn add(&mut self, tokenizer: &Tokenizer, document: &Document) {
        let text = document.normalized_text();
        let unigrams = tokenizer.unigrams(text);
        self.token_count = self.token_count.saturating_add(unigrams.len() as u64);
        let counts = DocumentTermCounts::from_tokens(document.id(), unigrams);
        if !counts.is_empty() {
            self.documents.push(counts);
        }
        for bigram in tokenizer.raw_bigrams(text) {
            self.raw_bigrams.add_count(&bigram, 1);
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    pub fn documents(&self) -> &[DocumentTermCounts] {
        &self.documents
    }

    /// All (document, term, count) rows.
    pub fn term_counts(&self) -> Vec<TermCount> {
        self.documents
            .iter()
            .flat_map(DocumentTermCounts::term_counts)
            .collect()
    }

    /// The global unigram frequencies.
    pub fn word_frequencies(&self) -> FrequencyTable {
        FrequencyTable::from_documents(&self.documents)
    }

    /// The raw bigram frequencies, sorted by descending count.
    /// The constituents are filtered against the stop words of [tokenizer] afterwards.
    pub fn bigram_frequencies(&self, tokenizer: &Tokenizer) -> Vec<VocabularyFrequency> {
        self.raw_bigrams
            .sorted_desc()
            .into_iter()
            .filter(|value| tokenizer.keeps_bigram(&value.term))
            .collect()
    }

    pub fn into_documents(self) -> Vec<DocumentTermCounts> {
        self.documents
    }
}

impl Display for TermStatisticsCollector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Document Count: {}", self.document_count())?;
        writeln!(f, "Token Count: {}", self.token_count)?;
        write!(f, "Raw Bigram Count: {}", self.raw_bigrams.len())
    }
}
