/*
game.rs

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

//! Manage the status of a puzzle in progress.
//!
//! A [`Game`] object owns the placed words and the grid rebuilt from them.
//! Every player entry goes through [`Game::set_user_char`], which keeps the user entry of the
//! words and the cells of the grid in sync.

use serde::{Deserialize, Serialize};

use crate::grid::{BLANK, Grid, GridCell, PlacedWord, WordRef, replay};

/// Scalar state of the session, saved next to the words.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Time played so far, in seconds.
    pub elapsed_seconds: u64,

    /// Whether the player completed the puzzle.
    pub completed: bool,

    /// Background image displayed by the client.
    pub image_index: usize,
}

/// Puzzle in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Placed words. Their index is the one stored in the grid cells.
    pub words: Vec<PlacedWord>,

    pub grid: Grid,

    pub session: SessionState,

    /// Selected word and letter in that word.
    selected: Option<(usize, usize)>,
}

impl Game {
    /// Create a [`Game`] object from new or restored words.
    ///
    /// Return None when the words do not fit in a grid of the given size.
    pub fn new(words: Vec<PlacedWord>, width: usize, height: usize) -> Option<Self> {
        let grid: Grid = replay(&words, width, height)?;
        Some(Self {
            words,
            grid,
            session: SessionState::default(),
            selected: None,
        })
    }

    /// Create a [`Game`] object with a restored session.
    pub fn with_session(
        words: Vec<PlacedWord>,
        width: usize,
        height: usize,
        session: SessionState,
    ) -> Option<Self> {
        let mut game: Game = Self::new(words, width, height)?;
        game.session = session;
        Some(game)
    }

    /// Select a word, and the first letter that the player should fill in.
    pub fn select_word(&mut self, word_index: usize) {
        self.selected = self
            .words
            .get(word_index)
            .map(|word| (word_index, word.default_selection_index()));
    }

    /// Select a letter of the selected word.
    pub fn select_char(&mut self, char_index: usize) {
        if let Some((word_index, _)) = self.selected
            && char_index < self.words[word_index].len()
        {
            self.selected = Some((word_index, char_index));
        }
    }

    /// Return the selected word and letter.
    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    /// Set a letter of a word.
    ///
    /// The letter is also written into the crossing word when that word has a different,
    /// non-blank letter in the same cell.
    /// Return the indexes of the modified words, which are the ones to save.
    pub fn set_user_char(&mut self, word_index: usize, char_index: usize, ch: char) -> Vec<usize> {
        let Some(word) = self.words.get_mut(word_index) else {
            return Vec::new();
        };
        if char_index >= word.len() {
            return Vec::new();
        }
        word.user_entry[char_index] = ch;
        let is_across: bool = word.is_across;
        let (row, col) = word.position(char_index);
        let mut modified: Vec<usize> = vec![word_index];

        let Some(cell) = self.grid.get_mut(row, col) else {
            return modified;
        };
        let crossing_char: char = if is_across {
            cell.user_char_across = ch;
            cell.user_char_down
        } else {
            cell.user_char_down = ch;
            cell.user_char_across
        };
        if crossing_char == BLANK || crossing_char == ch {
            return modified;
        }
        if is_across {
            cell.user_char_down = ch;
        } else {
            cell.user_char_across = ch;
        }
        if let Some(crossing) = cell.word(!is_across)
            && let Some(other) = self.words.get_mut(crossing.word_index)
        {
            other.user_entry[crossing.char_index] = ch;
            modified.push(crossing.word_index);
        }
        modified
    }

    /// Set the letter of the selected cell.
    pub fn set_selected_char(&mut self, ch: char) -> Vec<usize> {
        match self.selected {
            Some((word_index, char_index)) => self.set_user_char(word_index, char_index, ch),
            None => Vec::new(),
        }
    }

    /// Replace the whole entry of a word.
    ///
    /// Missing letters are blank and extra letters are ignored.
    /// Only the entry of the word itself changes: the crossing words keep their letters, even when
    /// they differ.
    /// Return the indexes of the modified words, which are the ones to save.
    pub fn set_user_text(&mut self, word_index: usize, text: &str) -> Vec<usize> {
        let Some(word) = self.words.get_mut(word_index) else {
            return Vec::new();
        };
        word.set_user_text(text);
        for (char_index, ch) in word.user_entry.iter().enumerate() {
            let (row, col) = word.position(char_index);
            if let Some(cell) = self.grid.get_mut(row, col) {
                if word.is_across {
                    cell.user_char_across = *ch;
                } else {
                    cell.user_char_down = *ch;
                }
            }
        }
        if let Some((selected_word, _)) = self.selected
            && selected_word == word_index
        {
            self.selected = Some((word_index, word.default_selection_index()));
        }
        vec![word_index]
    }

    /// Move the selection to the next or previous letter of the selected word.
    ///
    /// The selection stays on the first or last letter at the ends of the word.
    pub fn advance_selected_char(&mut self, backward: bool) {
        if let Some((word_index, char_index)) = self.selected {
            let last: usize = self.words[word_index].len().saturating_sub(1);
            let char_index: usize = if backward {
                char_index.saturating_sub(1)
            } else {
                (char_index + 1).min(last)
            };
            self.selected = Some((word_index, char_index));
        }
    }

    /// Whether the selected word is completely and correctly filled in.
    pub fn is_selected_word_answered_correctly(&self) -> bool {
        match self.selected {
            Some((word_index, _)) => self.words[word_index].is_answered_correctly(),
            None => false,
        }
    }

    /// Select the next word that has blank letters, or otherwise the next word that has wrong
    /// letters.
    ///
    /// Return false when every word is right, and the selection does not change.
    pub fn select_next_word_favoring_incomplete(&mut self) -> bool {
        self.select_next_word_with_wrap_around(true)
            || self.select_next_word_with_wrap_around(false)
    }

    /// Select the next word after the selected one, wrapping around to the top of the grid.
    ///
    /// With `with_blanks`, only words with blank letters qualify.
    /// Otherwise, words with blank or wrong letters qualify.
    pub fn select_next_word_with_wrap_around(&mut self, with_blanks: bool) -> bool {
        let start: Option<(usize, usize)> = self
            .selected
            .map(|(word_index, _)| (self.words[word_index].row, self.words[word_index].col));
        if let Some((row, col)) = start
            && self.select_next_word(row, col, with_blanks)
        {
            return true;
        }
        self.select_next_word(0, 0, with_blanks)
    }

    /// Select the first qualifying word that starts at or after the given cell.
    ///
    /// The grid is scanned row by row, left to right.
    /// On a cell where two words start, the across word comes first.
    /// The selected word never qualifies.
    pub fn select_next_word(
        &mut self,
        start_row: usize,
        start_col: usize,
        with_blanks: bool,
    ) -> bool {
        let selected: Option<usize> = self.selected.map(|(word_index, _)| word_index);

        // Skip the across word that starts on the same cell as the selected down word, otherwise
        // the selection would bounce between them.
        // With two words only, bouncing between them is the expected behavior.
        let skip_start: bool = self.words.len() > 2
            && selected.is_some_and(|i| {
                let word: &PlacedWord = &self.words[i];
                !word.is_across && word.row == start_row && word.col == start_col
            });
        let mut initial_col: usize = if skip_start { start_col + 1 } else { start_col };

        for row in start_row..self.grid.height() {
            for col in initial_col..self.grid.width() {
                let Some(cell) = self.grid.get(row, col) else {
                    continue;
                };
                let starting: [Option<usize>; 2] = [
                    cell.across
                        .map(|r: WordRef| r.word_index)
                        .filter(|i: &usize| self.words[*i].col == col),
                    cell.down
                        .map(|r: WordRef| r.word_index)
                        .filter(|i: &usize| self.words[*i].row == row),
                ];
                for word_index in starting.into_iter().flatten() {
                    if Some(word_index) != selected && self.needs_work(word_index, with_blanks) {
                        self.select_word(word_index);
                        return true;
                    }
                }
            }
            initial_col = 0;
        }
        false
    }

    /// Whether a word has visibly blank cells, or, without `with_blanks`, wrong letters.
    fn needs_work(&self, word_index: usize, with_blanks: bool) -> bool {
        let word: &PlacedWord = &self.words[word_index];
        let has_blanks: bool = word
            .cells()
            .any(|(row, col, _)| self.grid.get(row, col).is_some_and(GridCell::is_blank));
        has_blanks || (!with_blanks && word.has_errored_cells())
    }

    /// Whether every cell has a letter, and, when `correctly` is true, the right letter.
    pub fn is_complete(&self, correctly: bool) -> bool {
        self.grid.cells().all(|(_, _, cell): (usize, usize, &GridCell)| {
            !cell.is_blank() && !(correctly && cell.has_user_error())
        })
    }

    /// Check the grid and record the completion in the session.
    pub fn check_completed(&mut self) -> bool {
        if !self.session.completed && self.is_complete(true) {
            self.session.completed = true;
        }
        self.session.completed
    }

    pub fn add_elapsed_seconds(&mut self, seconds: u64) {
        self.session.elapsed_seconds += seconds;
    }

    /// Words per minute.
    pub fn completion_rate(&self) -> f32 {
        let elapsed: f32 = (self.session.elapsed_seconds as f32).max(0.1);
        self.words.len() as f32 * 60.0 / elapsed
    }

    /// Return the elapsed time as minutes and seconds ("12:05").
    pub fn elapsed_time_text(&self) -> String {
        elapsed_time_text(self.session.elapsed_seconds)
    }
}

/// Format a number of seconds as minutes and seconds.
pub fn elapsed_time_text(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
