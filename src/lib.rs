/*
lib.rs

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

//! Spanish verb conjugation crossword engine.
//!
//! The crate builds crossword puzzles whose answers are conjugated Spanish verbs:
//!
//! * [`verbs`] is the static verb table, and [`conjugation`] computes the surface form of a
//!   verb for a tense and a person.
//! * [`generator`] samples conjugated verbs according to the [`options::GameOptions`] and lays
//!   them out on a [`grid::Grid`].
//! * [`game`] tracks the player's entries, [`stats`] counts the completed words, and [`saver`]
//!   persists everything between sessions.
//! * [`worker`] runs the generation on its own thread.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use verboscruzados::generator::new_game;
//! use verboscruzados::options::GameOptions;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let (words, grid) = new_game(&GameOptions::default(), 10, 10, &mut rng).unwrap();
//! assert!(!words.is_empty());
//! assert_eq!(grid.width(), 10);
//! ```

pub mod conjugation;
pub mod game;
pub mod generator;
pub mod grid;
pub mod model;
pub mod options;
pub mod saver;
pub mod stats;
pub mod verbs;
pub mod worker;

pub use conjugation::conjugate;
pub use generator::candidates::sample;
pub use generator::layout::layout;
pub use grid::{add_to_grid, replay, words_fit_in_grid};
