/*
layout.rs

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

//! Place candidate words on the grid.
//!
//! The first word goes to the top left corner.
//! Every following word must cross a word already on the grid, at a letter that both words
//! share, and must not touch any other word along its length or at its ends.
//! The engine repeatedly scans the remaining candidates, alternating across and down words,
//! until a full pass in both orientations places nothing more.

use log::debug;
use std::time::Instant;

use super::candidates::WordCandidate;
use crate::grid::{Grid, PlacedWord, add_to_grid};
use crate::model::{ConjugationType, SubjectPronoun};

/// Index of the last placed word that a candidate already tried to cross, per orientation.
///
/// Placed words are only appended, so a candidate never needs to try the same placed word
/// twice in the same orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SearchCursor {
    across: Option<usize>,
    down: Option<usize>,
}

impl SearchCursor {
    /// Index of the first placed word to try next.
    fn start(&self, is_across: bool) -> usize {
        let last: Option<usize> = if is_across { self.across } else { self.down };
        last.map_or(0, |index| index + 1)
    }

    fn set(&mut self, is_across: bool, last: Option<usize>) {
        if is_across {
            self.across = last;
        } else {
            self.down = last;
        }
    }
}

/// Candidate still waiting for a location.
struct PendingWord {
    candidate: WordCandidate,
    letters: Vec<char>,
    cursor: SearchCursor,
}

impl PendingWord {
    fn new(candidate: WordCandidate) -> Self {
        let letters: Vec<char> = candidate.word.chars().collect();
        Self {
            candidate,
            letters,
            cursor: SearchCursor::default(),
        }
    }
}

/// Order the candidates: longest first, then alternating between the (person, tense) groups.
///
/// Without the interleaving, a tense with long forms, such as the imperfect subjunctive, would
/// fill the grid before the others get a chance.
fn sort_candidates(mut candidates: Vec<WordCandidate>) -> Vec<WordCandidate> {
    // Stable sort: equal lengths keep their sampling order.
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut groups: Vec<((Option<SubjectPronoun>, ConjugationType), Vec<WordCandidate>)> =
        Vec::new();
    for candidate in candidates {
        let group_key: (Option<SubjectPronoun>, ConjugationType) =
            (candidate.pronoun, candidate.conjugation_type);
        match groups.iter_mut().find(|(k, _)| *k == group_key) {
            Some((_, group)) => group.push(candidate),
            None => groups.push((group_key, vec![candidate])),
        }
    }

    let total: usize = groups.iter().map(|(_, group)| group.len()).sum();
    let mut queues: Vec<std::vec::IntoIter<WordCandidate>> = groups
        .into_iter()
        .map(|(_, group)| group.into_iter())
        .collect();
    let mut sorted: Vec<WordCandidate> = Vec::with_capacity(total);
    while sorted.len() < total {
        for queue in queues.iter_mut() {
            if let Some(candidate) = queue.next() {
                sorted.push(candidate);
            }
        }
    }
    sorted
}

/// Check whether the word can be written at the given location.
///
/// Outside of the first word, the location is valid only if the word crosses at least one word
/// already on the grid.
fn is_location_valid(
    grid: &Grid,
    letters: &[char],
    row: isize,
    col: isize,
    is_across: bool,
    is_first_word: bool,
) -> bool {
    if row < 0 || col < 0 {
        return false;
    }
    let len: isize = letters.len() as isize;
    let (width, height): (isize, isize) = (grid.width() as isize, grid.height() as isize);
    let inside: bool = if is_across {
        row < height && col + len <= width
    } else {
        col < width && row + len <= height
    };
    if !inside {
        return false;
    }
    if is_first_word {
        return true;
    }

    let last: usize = letters.len().saturating_sub(1);
    let mut crossing_found: bool = false;
    for (i, letter) in letters.iter().enumerate() {
        let (r, c): (isize, isize) = if is_across {
            (row, col + i as isize)
        } else {
            (row + i as isize, col)
        };
        match grid.get_signed(r, c) {
            Some(cell) => {
                if cell.answer != *letter || cell.word(is_across).is_some() {
                    return false;
                }
                crossing_found = true;
            }
            None => {
                let free: bool = if is_across {
                    grid.get_signed(r - 1, c).is_none()
                        && grid.get_signed(r + 1, c).is_none()
                        && (i != 0 || grid.get_signed(r, c - 1).is_none())
                        && (i != last || grid.get_signed(r, c + 1).is_none())
                } else {
                    grid.get_signed(r, c - 1).is_none()
                        && grid.get_signed(r, c + 1).is_none()
                        && (i != 0 || grid.get_signed(r - 1, c).is_none())
                        && (i != last || grid.get_signed(r + 1, c).is_none())
                };
                if !free {
                    return false;
                }
            }
        }
    }
    crossing_found
}

/// Look for a location for the word in the given orientation.
fn place_in_grid(
    grid: &Grid,
    placed: &[PlacedWord],
    pending: &mut PendingWord,
    is_across: bool,
    is_first_word: bool,
) -> Option<PlacedWord> {
    if is_first_word {
        return is_location_valid(grid, &pending.letters, 0, 0, is_across, true)
            .then(|| PlacedWord::new(&pending.candidate, 0, 0, is_across));
    }

    let mut location: Option<(usize, usize)> = None;
    'search: for other in placed[pending.cursor.start(is_across).min(placed.len())..]
        .iter()
        .rev()
    {
        if other.is_across == is_across {
            continue;
        }
        let other_letters: Vec<char> = other.word.chars().collect();
        for (other_index, other_letter) in other_letters.iter().enumerate().rev() {
            for (index, letter) in pending.letters.iter().enumerate() {
                if letter != other_letter {
                    continue;
                }
                let (row, col): (isize, isize) = if other.is_across {
                    (
                        other.row as isize - index as isize,
                        (other.col + other_index) as isize,
                    )
                } else {
                    (
                        (other.row + other_index) as isize,
                        other.col as isize - index as isize,
                    )
                };
                if is_location_valid(grid, &pending.letters, row, col, is_across, false) {
                    location = Some((row as usize, col as usize));
                    break 'search;
                }
            }
        }
    }

    pending.cursor.set(is_across, placed.len().checked_sub(1));
    location.map(|(row, col)| PlacedWord::new(&pending.candidate, row, col, is_across))
}

/// Place as many candidates as possible on the grid.
///
/// The grid is updated with every placed word, through [`add_to_grid`].
/// The returned words are in placement order, which is also their index in the grid cells.
pub fn layout_words(grid: &mut Grid, candidates: Vec<WordCandidate>) -> Vec<PlacedWord> {
    let start: Instant = Instant::now();
    let candidate_count: usize = candidates.len();
    let mut pending: Vec<PendingWord> = sort_candidates(candidates)
        .into_iter()
        .map(PendingWord::new)
        .collect();
    let mut placed: Vec<PlacedWord> = Vec::new();

    let mut i: usize = 0;
    let mut is_across: bool = true;
    let mut is_first_word: bool = true;
    let mut last_gasp: bool = false;
    let mut attempts: usize = 0;

    while i < pending.len() {
        attempts += 1;
        match place_in_grid(grid, &placed, &mut pending[i], is_across, is_first_word) {
            Some(word) => {
                add_to_grid(grid, placed.len(), &word);
                placed.push(word);
                pending.remove(i);
                i = 0;
                is_across = !is_across;
                is_first_word = false;
                last_gasp = false;
            }
            None if !last_gasp && i + 1 == pending.len() => {
                // One more pass in the other orientation before giving up.
                last_gasp = true;
                is_across = !is_across;
                i = 0;
            }
            None => i += 1,
        }
    }

    debug!(
        "Placed {}/{candidate_count} words in {attempts} attempts and {:.3} s",
        placed.len(),
        start.elapsed().as_secs_f32()
    );
    placed
}

/// Place the candidates on a new grid of the given size.
///
/// The returned list is empty when not even the first word fits.
pub fn layout(
    candidates: Vec<WordCandidate>,
    width: usize,
    height: usize,
) -> (Vec<PlacedWord>, Grid) {
    let mut grid: Grid = Grid::new(width, height);
    let placed: Vec<PlacedWord> = layout_words(&mut grid, candidates);
    (placed, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridCell, replay};
    use crate::model::{InfinitiveEnding, IrregularityCategory};

    fn candidate(
        word: &str,
        conjugation_type: ConjugationType,
        pronoun: Option<SubjectPronoun>,
    ) -> WordCandidate {
        WordCandidate {
            word: word.to_string(),
            infinitive: "hablar",
            translation: "speak",
            ending: InfinitiveEnding::Ar,
            category: IrregularityCategory::Regular,
            conjugation_type,
            pronoun,
            person_label: String::new(),
        }
    }

    fn present(word: &str) -> WordCandidate {
        candidate(word, ConjugationType::Present, Some(SubjectPronoun::Yo))
    }

    #[test]
    fn second_word_crosses_the_first() {
        let (placed, grid) = layout(vec![present("casa"), present("sale")], 5, 5);
        assert_eq!(placed.len(), 2);
        assert_eq!((placed[0].row, placed[0].col, placed[0].is_across), (0, 0, true));
        assert_eq!((placed[1].row, placed[1].col, placed[1].is_across), (0, 2, false));

        let crossing: &GridCell = grid.get(0, 2).expect("crossing cell");
        assert_eq!(crossing.answer, 's');
        assert!(crossing.across.is_some());
        assert!(crossing.down.is_some());
        assert_eq!(grid.get(3, 2).expect("last letter").answer, 'e');
    }

    #[test]
    fn nothing_to_place() {
        let (placed, grid) = layout(Vec::new(), 5, 5);
        assert!(placed.is_empty());
        assert!(grid.is_empty());

        let (placed, _) = layout(vec![present("casa")], 0, 5);
        assert!(placed.is_empty());
        let (placed, _) = layout(vec![present("casa")], 5, 0);
        assert!(placed.is_empty());
    }

    #[test]
    fn first_word_falls_back_to_next_candidate() {
        // Too long for the grid in both orientations.
        let (placed, _) = layout(vec![present("hablaremos"), present("casa")], 5, 5);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].word, "casa");
    }

    #[test]
    fn first_word_down_when_too_wide() {
        let (placed, _) = layout(vec![present("comemos")], 3, 8);
        assert_eq!(placed.len(), 1);
        assert!(!placed[0].is_across);
    }

    #[test]
    fn no_shared_letter_no_placement() {
        let (placed, _) = layout(vec![present("casa"), present("tilo")], 6, 6);
        assert_eq!(placed.len(), 1);
    }

    #[test]
    fn words_do_not_touch() {
        let mut grid: Grid = Grid::new(6, 6);
        let words: [(&str, usize, usize, bool); 3] =
            [("amas", 0, 0, true), ("mal", 0, 1, false), ("sal", 0, 3, false)];
        for (i, (word, row, col, is_across)) in words.into_iter().enumerate() {
            add_to_grid(&mut grid, i, &PlacedWord::new(&present(word), row, col, is_across));
        }
        let letters = |word: &str| -> Vec<char> { word.chars().collect() };

        // Crosses "sal" at its last letter.
        assert!(is_location_valid(&grid, &letters("la"), 2, 3, true, false));
        // Crosses "sal" but touches the end of "mal".
        assert!(!is_location_valid(&grid, &letters("al"), 2, 2, true, false));
        // Runs along "sal".
        assert!(!is_location_valid(&grid, &letters("ola"), 1, 4, false, false));
        // Same orientation as "amas" on the same cells.
        assert!(!is_location_valid(&grid, &letters("am"), 0, 0, true, false));
        // Different letter than "amas".
        assert!(!is_location_valid(&grid, &letters("sol"), 0, 2, false, false));
        // No crossing.
        assert!(!is_location_valid(&grid, &letters("sol"), 4, 0, true, false));
    }

    #[test]
    fn longest_first_then_interleaved() {
        let sorted: Vec<WordCandidate> = sort_candidates(vec![
            candidate("hablo", ConjugationType::Present, Some(SubjectPronoun::Yo)),
            candidate("hablaba", ConjugationType::Imperfect, Some(SubjectPronoun::Yo)),
            candidate("hablaremos", ConjugationType::Future, Some(SubjectPronoun::Nosotros)),
            candidate("hablamos", ConjugationType::Present, Some(SubjectPronoun::Nosotros)),
            candidate("hablaron", ConjugationType::Future, Some(SubjectPronoun::Nosotros)),
            candidate("hablando", ConjugationType::Gerund, None),
        ]);
        let words: Vec<&str> = sorted.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(
            words,
            vec![
                "hablaremos",
                "hablamos",
                "hablando",
                "hablaba",
                "hablo",
                "hablaron"
            ]
        );
    }

    #[test]
    fn cursor_skips_tried_words() {
        let mut cursor: SearchCursor = SearchCursor::default();
        assert_eq!(cursor.start(true), 0);
        cursor.set(true, Some(3));
        assert_eq!(cursor.start(true), 4);
        assert_eq!(cursor.start(false), 0);
    }

    #[test]
    fn same_input_same_layout() {
        let words: Vec<WordCandidate> = [
            "hablamos", "comiste", "tengo", "pienso", "conozco", "construyo", "fui", "vivían",
            "saldremos", "dijeron", "estamos",
        ]
        .iter()
        .map(|w| present(w))
        .collect();

        let (a, grid_a) = layout(words.clone(), 12, 12);
        let (b, grid_b) = layout(words, 12, 12);
        assert!(a.len() > 1);
        assert_eq!(a, b);
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn replay_rebuilds_the_same_grid() {
        let words: Vec<WordCandidate> = ["pensaban", "seguimos", "durmieron", "oyes", "anduve"]
            .iter()
            .map(|w| present(w))
            .collect();
        let (placed, grid) = layout(words, 10, 10);
        assert!(placed.len() > 1);
        assert_eq!(replay(&placed, 10, 10), Some(grid));
    }
}
