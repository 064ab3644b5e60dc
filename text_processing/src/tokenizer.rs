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

use crate::stopword_registry::StopWordList;
use itertools::Itertools;
use std::sync::Arc;

/// A primitive whitespace tokenizer working on normalized text.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stop_words: Option<Arc<StopWordList>>,
}

impl Tokenizer {
    pub fn new(stop_words: Option<Arc<StopWordList>>) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> Option<&StopWordList> {
        self.stop_words.as_deref()
    }

    #[inline]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words
            .as_ref()
            .is_some_and(|stop_words| stop_words.contains(token))
    }

    /// All tokens of [text] without any filtering.
    pub fn tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect_vec()
    }

    /// The tokens of [text] without the stop words.
    pub fn unigrams<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace()
            .filter(|token| !self.is_stop_word(token))
            .collect_vec()
    }

    /// The adjacent token pairs of [text], joined by a single space.
    /// The stop words are still part of the stream.
    pub fn raw_bigrams(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .tuple_windows()
            .map(|(first, second)| format!("{first} {second}"))
            .collect_vec()
    }

    /// Splits a [bigram] back into its two words and keeps it only if neither is a stop word.
    pub fn keeps_bigram(&self, bigram: &str) -> bool {
        match bigram.split_once(' ') {
            Some((first, second)) => !self.is_stop_word(first) && !self.is_stop_word(second),
            None => false,
        }
    }

    /// The bigrams of [text] where both words are not stop words.
    pub fn bigrams(&self, text: &str) -> Vec<String> {
        self.raw_bigrams(text)
            .into_iter()
            .filter(|bigram| self.keeps_bigram(bigram))
            .collect_vec()
    }
}
