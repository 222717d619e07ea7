/*
worker.rs

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

//! Generate puzzles outside of the caller's thread.
//!
//! Generating a puzzle can take a while on large grids, so the interactive client starts the
//! generation with [`spawn_generation`] and waits for the result on the returned channel,
//! with `recv().await` from an async executor or `recv_blocking()` from a plain thread.
//! To cancel a generation, the caller drops the receiver: the result is then discarded.

use async_channel::{Receiver, Sender};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;

use crate::generator::{self, GenerationError};
use crate::grid::PlacedWord;
use crate::options::GameOptions;

/// Result sent by the generation thread.
pub type GenerationResult = Result<Vec<PlacedWord>, GenerationError>;

/// Start generating a puzzle in a new thread.
///
/// `seed` makes the generation reproducible. Without it, the thread uses a random seed.
pub fn spawn_generation(
    options: GameOptions,
    width: usize,
    height: usize,
    seed: Option<u64>,
) -> Receiver<GenerationResult> {
    let (sender, receiver) = async_channel::bounded::<GenerationResult>(1);

    thread::spawn(move || generate(sender, &options, width, height, seed));
    receiver
}

fn generate(
    sender: Sender<GenerationResult>,
    options: &GameOptions,
    width: usize,
    height: usize,
    seed: Option<u64>,
) {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let result: GenerationResult =
        generator::new_game(options, width, height, &mut rng).map(|(words, _)| words);

    if sender.send_blocking(result).is_err() {
        debug!("Generation result discarded: the receiver is gone");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::replay;

    #[test]
    fn result_is_delivered() {
        let receiver: Receiver<GenerationResult> =
            spawn_generation(GameOptions::default(), 12, 12, Some(8));
        let words: Vec<PlacedWord> = receiver
            .recv_blocking()
            .expect("result sent")
            .expect("words placed");
        assert!(!words.is_empty());
        assert!(replay(&words, 12, 12).is_some());
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a: GenerationResult = spawn_generation(GameOptions::default(), 10, 10, Some(4))
            .recv_blocking()
            .expect("result sent");
        let b: GenerationResult = spawn_generation(GameOptions::default(), 10, 10, Some(4))
            .recv_blocking()
            .expect("result sent");
        assert_eq!(a, b);
    }

    #[test]
    fn failure_is_delivered() {
        let receiver: Receiver<GenerationResult> =
            spawn_generation(GameOptions::default(), 0, 0, None);
        assert_eq!(
            receiver.recv_blocking().expect("result sent"),
            Err(GenerationError::NothingPlaced)
        );
    }

    #[test]
    fn dropped_receiver() {
        drop(spawn_generation(GameOptions::default(), 8, 8, Some(1)));
    }
}
