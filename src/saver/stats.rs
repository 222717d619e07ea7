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

//! Save and restore the statistics of the completed puzzles.
//!
//! The saved object is a serialization of the [`GameStats`] object in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::path::PathBuf;

use super::{delete_json, read_json, write_json};
use crate::grid::PlacedWord;
use crate::stats::GameStats;

/// Object to save and restore the statistics.
pub struct SaverStats {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverStats {
    /// Create a [`SaverStats`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the statistics must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("stats.json");
        debug!("Statistics file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`GameStats`] object.
    ///
    /// Return None if no puzzle has been completed yet.
    pub fn get_stats(&self) -> Result<Option<GameStats>, Box<dyn Error>> {
        read_json(&self.save_file)
    }

    /// Save the provided [`GameStats`] object.
    pub fn save_stats(&self, stats: &GameStats) -> Result<(), Box<dyn Error>> {
        write_json(&self.save_file, stats)
    }

    /// Add the words of a completed puzzle to the saved statistics.
    pub fn add_game(&self, words: &[PlacedWord]) -> Result<GameStats, Box<dyn Error>> {
        let mut stats: GameStats = self.get_stats()?.unwrap_or_default();
        stats.add_game(words);
        self.save_stats(&stats)?;
        Ok(stats)
    }

    /// Delete the statistics file.
    pub fn delete_save(&self) {
        delete_json(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BLANK;
    use tempfile::TempDir;

    fn word(stats_index: usize) -> PlacedWord {
        PlacedWord {
            key: format!("hablar|PRESENT|{stats_index}"),
            word: "hablo".to_string(),
            tense_label: "present".to_string(),
            person_label: "Yo".to_string(),
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
    fn counts_accumulate() {
        let dir: TempDir = TempDir::new().expect("temporary directory");
        let saver: SaverStats = SaverStats::new(dir.path().to_path_buf());
        assert_eq!(saver.get_stats().expect("readable"), None);

        saver.add_game(&[word(0), word(16)]).expect("saved");
        let stats: GameStats = saver.add_game(&[word(16)]).expect("saved");
        assert_eq!(stats.count(16), 2);

        let restored: GameStats = saver.get_stats().expect("readable").expect("saved");
        assert_eq!(restored, stats);
        assert_eq!(restored.total(), 3);

        saver.delete_save();
        assert_eq!(saver.get_stats().expect("readable"), None);
    }
}
