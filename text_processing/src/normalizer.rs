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

/// Lowercases the text and replaces every character outside of `[a-z]` with a single space.
///
/// The mapping works char by char, hence the number of chars in the output is always
/// the number of chars in the input. Runs of spaces are not collapsed, the tokenizer
/// splits on whitespace anyway.
pub fn normalize(text: &str) -> String {
    text.chars().map(normalize_char).collect()
}

/// Normalizes a single char.
#[inline]
pub fn normalize_char(c: char) -> char {
    if c.is_ascii_alphabetic() {
        c.to_ascii_lowercase()
    } else {
        ' '
    }
}

/// Returns true iff [text] only consists of lowercase ascii letters and spaces.
pub fn is_normalized(text: &str) -> bool {
    text.chars().all(|c| c == ' ' || c.is_ascii_lowercase())
}
