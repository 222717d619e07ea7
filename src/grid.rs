/*
grid.rs

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

//! Character grid of a puzzle and the words placed on it.
//!
//! The [`Grid`] stores a [`GridCell`] for every position covered by at least one
//! [`PlacedWord`].
//! A cell records the correct letter, the words that cross it, and what the player typed for
//! each orientation.
//!
//! [`add_to_grid`] is the only function that writes words into the grid.
//! The layout engine uses it when it places a freshly generated word, and [`replay`] uses it
//! to rebuild the grid from saved words, so both paths produce the same cells.

use serde::{Deserialize, Serialize};

use crate::generator::candidates::WordCandidate;

/// Character of an empty user entry.
pub const BLANK: char = '\0';

/// Word occupying a cell, and the position of the cell in that word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordRef {
    /// Index of the word in the list of placed words.
    pub word_index: usize,

    /// Index of the cell character in the word.
    pub char_index: usize,
}

/// Cell of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Correct letter.
    pub answer: char,

    pub across: Option<WordRef>,
    pub down: Option<WordRef>,

    /// Letter typed by the player while editing the across word.
    pub user_char_across: char,

    /// Letter typed by the player while editing the down word.
    pub user_char_down: char,
}

impl GridCell {
    fn new(answer: char) -> Self {
        Self {
            answer,
            across: None,
            down: None,
            user_char_across: BLANK,
            user_char_down: BLANK,
        }
    }

    /// Letter to display: the down entry if any, otherwise the across entry.
    pub fn user_char(&self) -> char {
        if self.user_char_down != BLANK {
            self.user_char_down
        } else {
            self.user_char_across
        }
    }

    /// The across and down entries are both filled and differ.
    pub fn is_conflict(&self) -> bool {
        self.user_char_across != BLANK
            && self.user_char_down != BLANK
            && self.user_char_across != self.user_char_down
    }

    pub fn is_blank(&self) -> bool {
        self.user_char() == BLANK
    }

    pub fn has_user_error(&self) -> bool {
        self.user_char() != self.answer || self.is_conflict()
    }

    /// Return the word running in the given orientation.
    pub fn word(&self, is_across: bool) -> Option<WordRef> {
        if is_across { self.across } else { self.down }
    }
}

/// Two-dimensional array of optional cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<GridCell>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the cell at the given position, or None if the position is empty or outside the
    /// grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col].as_ref()
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut GridCell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col].as_mut()
    }

    /// Same as [`Grid::get`] with signed coordinates, which is convenient for neighbor checks.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<&GridCell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    fn entry(&mut self, row: usize, col: usize, answer: char) -> &mut GridCell {
        let width: usize = self.width;
        self.cells[row * width + col].get_or_insert_with(|| GridCell::new(answer))
    }

    /// Remove all the cells.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterate over the occupied cells with their row and column.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &GridCell)> {
        let width: usize = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|c| (i / width, i % width, c)))
    }
}

/// Word on the grid, as saved between sessions.
///
/// The JSON field names are part of the save file format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    /// Unique key of the grammatical combination: `infinitive|TENSE|PERSON`.
    pub key: String,

    /// Conjugated verb to find.
    pub word: String,

    pub tense_label: String,

    /// Subject pronoun of the clue, empty for the gerund and the past participle.
    pub person_label: String,

    pub infinitive: String,
    pub translation: String,
    pub stats_index: usize,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    pub is_across: bool,

    /// Letters typed by the player, one per letter of the word, [`BLANK`] when not typed.
    pub user_entry: Vec<char>,
}

impl PlacedWord {
    pub fn new(candidate: &WordCandidate, row: usize, col: usize, is_across: bool) -> Self {
        Self {
            key: candidate.key(),
            word: candidate.word.clone(),
            tense_label: candidate.tense_label().to_string(),
            person_label: candidate.person_label.clone(),
            infinitive: candidate.infinitive.to_string(),
            translation: candidate.translation.to_string(),
            stats_index: candidate.stats_index(),
            row,
            col,
            is_across,
            user_entry: vec![BLANK; candidate.len()],
        }
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Position of the letter at `char_index`.
    pub fn position(&self, char_index: usize) -> (usize, usize) {
        if self.is_across {
            (self.row, self.col + char_index)
        } else {
            (self.row + char_index, self.col)
        }
    }

    /// Iterate over the letters with their row and column.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.word.chars().enumerate().map(|(i, c)| {
            let (row, col) = self.position(i);
            (row, col, c)
        })
    }

    pub fn is_answered_correctly(&self) -> bool {
        self.word.chars().eq(self.user_entry.iter().copied())
    }

    /// Some typed letters are wrong. Blank letters are not errors.
    pub fn has_errored_cells(&self) -> bool {
        self.word
            .chars()
            .zip(self.user_entry.iter())
            .any(|(c, u)| *u != BLANK && *u != c)
    }

    /// Index of the first letter that needs changing, or the last letter when the word is right.
    pub fn default_selection_index(&self) -> usize {
        self.word
            .chars()
            .zip(self.user_entry.iter())
            .position(|(c, u)| *u != c)
            .unwrap_or(self.len().saturating_sub(1))
    }

    /// Replace the user entry with `text`, padding with [`BLANK`] or truncating to the word
    /// length.
    pub fn set_user_text(&mut self, text: &str) {
        let mut chars = text.chars();
        for slot in self.user_entry.iter_mut() {
            *slot = chars.next().unwrap_or(BLANK);
        }
    }
}

/// Write the letters and the user entry of a word into the grid.
///
/// Cells are created as needed with the correct letter of the word.
/// The caller guarantees that the word fits in the grid (see [`words_fit_in_grid`]).
pub fn add_to_grid(grid: &mut Grid, word_index: usize, word: &PlacedWord) {
    for (char_index, (row, col, answer)) in word.cells().enumerate() {
        let user_char: char = word.user_entry.get(char_index).copied().unwrap_or(BLANK);
        let cell: &mut GridCell = grid.entry(row, col, answer);
        let word_ref: WordRef = WordRef {
            word_index,
            char_index,
        };
        if word.is_across {
            cell.across = Some(word_ref);
            cell.user_char_across = user_char;
        } else {
            cell.down = Some(word_ref);
            cell.user_char_down = user_char;
        }
    }
}

/// Check that all the words are inside a grid of the given size.
///
/// Saved words are checked before [`replay`] because the grid dimensions can change between
/// sessions.
pub fn words_fit_in_grid(words: &[PlacedWord], width: usize, height: usize) -> bool {
    words.iter().all(|word| {
        if word.row >= height || word.col >= width {
            return false;
        }
        if word.is_across {
            word.col + word.len() <= width
        } else {
            word.row + word.len() <= height
        }
    })
}

/// Rebuild the grid of saved words.
///
/// Return None when the words do not fit in the grid.
pub fn replay(words: &[PlacedWord], width: usize, height: usize) -> Option<Grid> {
    if !words_fit_in_grid(words, width, height) {
        return None;
    }
    let mut grid: Grid = Grid::new(width, height);
    for (i, word) in words.iter().enumerate() {
        add_to_grid(&mut grid, i, word);
    }
    Some(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, row: usize, col: usize, is_across: bool) -> PlacedWord {
        PlacedWord {
            key: format!("{text}|PRESENT|YO"),
            word: text.to_string(),
            tense_label: "present".to_string(),
            person_label: "Yo".to_string(),
            infinitive: text.to_string(),
            translation: String::new(),
            stats_index: 0,
            row,
            col,
            is_across,
            user_entry: vec![BLANK; text.chars().count()],
        }
    }

    #[test]
    fn crossing_cell_references_both_words() {
        let mut grid: Grid = Grid::new(5, 5);
        add_to_grid(&mut grid, 0, &word("casa", 0, 0, true));
        add_to_grid(&mut grid, 1, &word("sale", 0, 2, false));

        let cell: &GridCell = grid.get(0, 2).expect("crossing cell");
        assert_eq!(cell.answer, 's');
        assert_eq!(
            cell.across,
            Some(WordRef {
                word_index: 0,
                char_index: 2
            })
        );
        assert_eq!(
            cell.down,
            Some(WordRef {
                word_index: 1,
                char_index: 0
            })
        );
        assert_eq!(grid.cells().count(), 7);
        assert!(grid.get(4, 4).is_none());
        assert!(grid.get(9, 0).is_none());
    }

    #[test]
    fn user_entry_is_replayed() {
        let mut across: PlacedWord = word("casa", 0, 0, true);
        across.set_user_text("cas");
        let mut down: PlacedWord = word("sale", 0, 2, false);
        down.set_user_text("x");

        let grid: Grid = replay(&[across, down], 5, 5).expect("words fit");
        let crossing: &GridCell = grid.get(0, 2).expect("crossing cell");
        assert_eq!(crossing.user_char(), 'x');
        assert!(crossing.is_conflict());
        assert!(crossing.has_user_error());
        assert!(grid.get(0, 3).expect("last letter").is_blank());
        assert!(!grid.get(0, 0).expect("first letter").has_user_error());
    }

    #[test]
    fn fit_check() {
        assert!(words_fit_in_grid(&[word("casa", 0, 1, true)], 5, 5));
        assert!(!words_fit_in_grid(&[word("casa", 0, 2, true)], 5, 5));
        assert!(!words_fit_in_grid(&[word("casa", 2, 0, false)], 5, 5));
        assert!(!words_fit_in_grid(&[word("a", 5, 0, false)], 5, 5));
        assert!(replay(&[word("casa", 0, 2, true)], 5, 5).is_none());
        assert!(words_fit_in_grid(&[], 0, 0));
    }

    #[test]
    fn word_answer_state() {
        let mut w: PlacedWord = word("tengo", 0, 0, true);
        assert_eq!(w.default_selection_index(), 0);
        assert!(!w.has_errored_cells());

        w.set_user_text("texgo");
        assert!(w.has_errored_cells());
        assert_eq!(w.default_selection_index(), 2);

        w.set_user_text("tengo and more");
        assert!(w.is_answered_correctly());
        assert_eq!(w.default_selection_index(), 4);
        assert_eq!(w.user_entry.len(), 5);
    }

    #[test]
    fn accented_letters_are_single_cells() {
        let w: PlacedWord = word("dormiréis", 1, 0, true);
        assert_eq!(w.len(), 9);
        assert_eq!(w.position(7), (1, 7));
        assert!(words_fit_in_grid(&[w], 9, 2));
    }
}
