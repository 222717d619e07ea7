/*
generator.rs

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

//! Generate new puzzles.
//!
//! A puzzle is generated in two steps:
//!
//! * The [`candidates::sample`] function draws verbs from the verb table, according to the game
//!   options, and conjugates them into a list of [`candidates::WordCandidate`] objects.
//!   The list is larger than what the grid can usually hold.
//!
//! * The [`layout::layout`] function places as many of these candidates as possible on a new
//!   [`Grid`], each word crossing at least one other word.
//!
//! [`new_game`] chains both steps and reports a generation failure when not a single word could
//! be placed.
//! Generation is CPU-bound: see the [`crate::worker`] module to run it outside of the caller's
//! thread.

pub mod candidates;
pub mod layout;

use log::{debug, info};
use rand::Rng;
use std::error::Error;
use std::fmt;

use crate::grid::{Grid, PlacedWord};
use crate::options::GameOptions;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerationError {
    /// No candidate could be placed on the grid.
    NothingPlaced,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::NothingPlaced => write!(f, "no word could be placed on the grid"),
        }
    }
}

impl Error for GenerationError {}

/// Generate the words of a new puzzle.
///
/// # Errors
///
/// The function returns [`GenerationError::NothingPlaced`] when the grid cannot hold any word.
/// The caller should not start a game in that case.
pub fn new_game<R: Rng + ?Sized>(
    options: &GameOptions,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<(Vec<PlacedWord>, Grid), GenerationError> {
    let target: usize = candidates::target_word_count(width, height);
    let pool: Vec<candidates::WordCandidate> = candidates::sample(options, target, rng);
    debug!("{} candidates for a {width}x{height} grid", pool.len());

    let (words, grid) = layout::layout(pool, width, height);
    if words.is_empty() {
        return Err(GenerationError::NothingPlaced);
    }
    info!("New puzzle with {} words", words.len());
    Ok((words, grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::replay;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_puzzle() {
        let mut rng: StdRng = StdRng::seed_from_u64(2025);
        let (words, grid) =
            new_game(&GameOptions::default(), 13, 13, &mut rng).expect("words placed");
        assert!(words.len() > 1);
        assert_eq!(replay(&words, 13, 13), Some(grid));
        assert!(words.iter().all(|w| w.user_entry.iter().all(|c| *c == crate::grid::BLANK)));
    }

    #[test]
    fn empty_grid_is_an_error() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        assert_eq!(
            new_game(&GameOptions::default(), 0, 0, &mut rng),
            Err(GenerationError::NothingPlaced)
        );
    }
}
