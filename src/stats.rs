/*
stats.rs

Copyright 2025 Hervé Quatremain

This file is part of Verboscruzados.

Verboscruzados is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Verboscruzados is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Verboscruzados. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Count the words of the completed puzzles.
//!
//! The main object, [`GameStats`], counts how many words of each grammatical combination the
//! player completed.
//! The combinations are identified by the statistics index of the words (see
//! [`crate::model::stats_index`]), so that the client can draw a heat map per irregularity
//! category, ending class, and tense.
//! This object is saved when the player completes a puzzle, and is restored at startup.
//! See the [`crate::saver::stats`] module that saves and restores the [`GameStats`] object.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::grid::PlacedWord;
use crate::model::{ConjugationType, stats_coordinates};

/// Cumulative word counts indexed by statistics index.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct GameStats {
    counts: HashMap<usize, usize>,
}

impl GameStats {
    /// Create a [`GameStats`] object.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Add the words of a completed puzzle.
    pub fn add_game(&mut self, words: &[PlacedWord]) {
        for word in words {
            *self.counts.entry(word.stats_index).or_insert(0) += 1;
        }
    }

    /// Return the number of completed words for a statistics index.
    pub fn count(&self, index: usize) -> usize {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Return the number of completed words.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Return the number of completed words per tense.
    ///
    /// Unknown indexes, from an older save file, are ignored.
    pub fn by_tense(&self) -> BTreeMap<usize, (ConjugationType, usize)> {
        let mut result: BTreeMap<usize, (ConjugationType, usize)> = BTreeMap::new();
        for (index, count) in &self.counts {
            if let Some((_, _, conjugation_type)) = stats_coordinates(*index) {
                result
                    .entry(conjugation_type.index())
                    .or_insert((conjugation_type, 0))
                    .1 += count;
            }
        }
        result
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BLANK;
    use crate::model::{InfinitiveEnding, IrregularityCategory, stats_index};

    fn word(stats_index: usize) -> PlacedWord {
        PlacedWord {
            key: format!("{stats_index}"),
            word: "hablo".to_string(),
            tense_label: String::new(),
            person_label: String::new(),
            infinitive: "hablar".to_string(),
            translation: "speak".to_string(),
            stats_index,
            row: 0,
            col: 0,
            is_across: true,
            user_entry: vec![BLANK; 5],
        }
    }

    #[test]
    fn add_games() {
        let mut stats: GameStats = GameStats::new();
        assert!(stats.is_empty());

        let preterit: usize = stats_index(
            IrregularityCategory::Irregular,
            InfinitiveEnding::Er,
            ConjugationType::Preterit,
        );
        stats.add_game(&[word(0), word(0), word(preterit)]);
        stats.add_game(&[word(preterit), word(1)]);

        assert_eq!(stats.count(0), 2);
        assert_eq!(stats.count(preterit), 2);
        assert_eq!(stats.count(7), 0);
        assert_eq!(stats.total(), 5);

        let by_tense: BTreeMap<usize, (ConjugationType, usize)> = stats.by_tense();
        assert_eq!(by_tense.get(&0), Some(&(ConjugationType::Present, 2)));
        assert_eq!(by_tense.get(&1), Some(&(ConjugationType::Preterit, 3)));
        assert_eq!(by_tense.len(), 2);
    }

    #[test]
    fn unknown_indexes_are_ignored() {
        let mut stats: GameStats = GameStats::new();
        stats.add_game(&[word(9999)]);
        assert_eq!(stats.total(), 1);
        assert!(stats.by_tense().is_empty());
    }

    #[test]
    fn serialized_as_map() {
        let mut stats: GameStats = GameStats::new();
        stats.add_game(&[word(42)]);
        let json: String = serde_json::to_string(&stats).expect("serializable");
        assert_eq!(json, r#"{"42":1}"#);
        let restored: GameStats = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(restored, stats);
    }
}
