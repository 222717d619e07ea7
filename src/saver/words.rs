/*
words.rs

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

//! Save and restore the words of the puzzle in progress.
//!
//! The words are saved in the `words.json` file, in placement order, because that order gives
//! the word indexes stored in the grid cells.
//! Each word is identified by its key, so that a single word can be saved after the player
//! changes one of its letters.
//!
//! The saved object is a serialization of a list of [`PlacedWord`] objects in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::path::PathBuf;

use super::{delete_json, read_json, write_json};
use crate::grid::PlacedWord;

/// Object to save and restore the words of a puzzle.
pub struct SaverWords {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverWords {
    /// Create a [`SaverWords`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the words must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("words.json");
        debug!("Words file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved words.
    ///
    /// Return None if there is no saved puzzle.
    pub fn get_words(&self) -> Result<Option<Vec<PlacedWord>>, Box<dyn Error>> {
        read_json(&self.save_file)
    }

    /// Replace the saved words with the words of a new puzzle.
    pub fn save_words(&self, words: &[PlacedWord]) -> Result<(), Box<dyn Error>> {
        write_json(&self.save_file, words)
    }

    /// Save a single word.
    ///
    /// The word replaces the saved word with the same key, or is added at the end.
    pub fn save_word(&self, word: &PlacedWord) -> Result<(), Box<dyn Error>> {
        let mut words: Vec<PlacedWord> = self.get_words()?.unwrap_or_default();
        match words.iter_mut().find(|w| w.key == word.key) {
            Some(saved) => *saved = word.clone(),
            None => words.push(word.clone()),
        }
        self.save_words(&words)
    }

    /// Delete the saved words.
    pub fn delete_save(&self) {
        delete_json(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BLANK;
    use tempfile::TempDir;

    fn word(key: &str, text: &str) -> PlacedWord {
        PlacedWord {
            key: key.to_string(),
            word: text.to_string(),
            tense_label: "preterite".to_string(),
            person_label: "Tú".to_string(),
            infinitive: "comer".to_string(),
            translation: "eat".to_string(),
            stats_index: 11,
            row: 2,
            col: 3,
            is_across: false,
            user_entry: vec![BLANK; text.chars().count()],
        }
    }

    #[test]
    fn missing_file() {
        let dir: TempDir = TempDir::new().expect("temporary directory");
        let saver: SaverWords = SaverWords::new(dir.path().to_path_buf());
        assert_eq!(saver.get_words().expect("readable"), None);
        saver.delete_save();
    }

    #[test]
    fn save_and_restore() {
        let dir: TempDir = TempDir::new().expect("temporary directory");
        let saver: SaverWords = SaverWords::new(dir.path().to_path_buf());
        let mut words: Vec<PlacedWord> = vec![
            word("comer|PRETERIT|TU", "comiste"),
            word("comer|PRESENT|YO", "como"),
        ];
        saver.save_words(&words).expect("saved");

        words[0].set_user_text("comí");
        saver.save_word(&words[0]).expect("saved");
        let restored: Vec<PlacedWord> = saver.get_words().expect("readable").expect("saved words");
        assert_eq!(restored, words);
        assert_eq!(restored[0].user_entry[3], 'í');

        saver.save_word(&word("comer|GERUND|na", "comiendo")).expect("saved");
        let restored: Vec<PlacedWord> = saver.get_words().expect("readable").expect("saved words");
        assert_eq!(restored.len(), 3);
        assert_eq!(restored[2].word, "comiendo");

        saver.delete_save();
        assert_eq!(saver.get_words().expect("readable"), None);
    }

    #[test]
    fn record_format() {
        let json: String = serde_json::to_string(&word("k", "di")).expect("serializable");
        for field in [
            "\"key\"",
            "\"word\"",
            "\"tenseLabel\"",
            "\"personLabel\"",
            "\"infinitive\"",
            "\"translation\"",
            "\"statsIndex\"",
            "\"row\"",
            "\"col\"",
            "\"isAcross\"",
            "\"userEntry\"",
        ] {
            assert!(json.contains(field), "{field} missing in {json}");
        }
    }

    #[test]
    fn corrupted_file() {
        let dir: TempDir = TempDir::new().expect("temporary directory");
        std::fs::write(dir.path().join("words.json"), "[{").expect("written");
        let saver: SaverWords = SaverWords::new(dir.path().to_path_buf());
        assert!(saver.get_words().is_err());
    }
}
