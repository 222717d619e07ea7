/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers working on the verb table and on the puzzle
//! generator.
//!
//! # Examples
//!
//! List the verbs:
//!
//! ```text
//! $ verboscruzados --ls
//! hablar      speak               Regular
//! llamar      call                Regular
//! ...
//! ```
//!
//! Print the conjugation table of a verb:
//!
//! ```text
//! $ verboscruzados --verb tener
//! tener (have), Irregular
//!               Yo            Tú            Él/Ella/Ud.   ...
//! present       tengo         tienes        tiene         ...
//! ...
//! ```
//!
//! Generate two 10x10 puzzles with preterit verbs only:
//!
//! ```text
//! $ verboscruzados -g -W 10 -H 10 -c 2 -o PRETERIT --seed 42 --summary
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::time::Instant;

use verboscruzados::conjugation::conjugate;
use verboscruzados::generator::{self, GenerationError};
use verboscruzados::grid::{Grid, PlacedWord};
use verboscruzados::model::{ConjugationType, Facet, SubjectPronoun, Verb};
use verboscruzados::options::GameOptions;
use verboscruzados::verbs;

const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\nLicense GPL-3.0-or-later"
);

/// Inspect the verb table and generate Verboscruzados puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the verbs
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Print the conjugation table of the given verb
    #[arg(short, long)]
    verb: Option<String>,

    /// Generate puzzles
    #[arg(short, long, default_value_t = false)]
    generate: bool,

    /// Width of the grid
    #[arg(short = 'W', long, default_value_t = 13, requires = "generate")]
    width: usize,

    /// Height of the grid
    #[arg(short = 'H', long, default_value_t = 13, requires = "generate")]
    height: usize,

    /// Enable a game option (AR, STEM_CHANGE, NOSOTROS, PRETERIT, ...). Can be repeated.
    /// Without this option, the puzzles use the options of a first game
    #[arg(short, long = "option", requires = "generate")]
    options: Vec<String>,

    /// Seed of the random generator, for reproducible puzzles
    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1, requires = "generate")]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
///
/// Return None when there is nothing to do, otherwise the exit code.
pub fn parse() -> Option<u8> {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the verbs
    //
    if args.ls {
        for (category, verb) in verbs::all() {
            println!("{:<16}{:<32}{category:?}", verb.infinitive, verb.translation);
        }
        return Some(0);
    }

    //
    // Print the conjugations of a verb
    //
    if let Some(infinitive) = &args.verb {
        return match verbs::find(infinitive) {
            Some((category, verb)) => {
                println!("{} ({}), {category:?}", verb.infinitive, verb.translation);
                print_conjugations(verb);
                Some(0)
            }
            None => {
                eprintln!("Unknown verb {infinitive}. Use --ls to list the available verbs.");
                Some(1)
            }
        };
    }

    if !args.generate {
        return None;
    }

    //
    // Generate puzzles
    //
    let mut options: GameOptions = if args.options.is_empty() {
        GameOptions::default()
    } else {
        GameOptions::empty()
    };
    for name in &args.options {
        options.set(&name.to_uppercase(), true);
    }
    let mut rng: StdRng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut words: usize = 0;
    let mut filled: usize = 0;
    let mut errors: usize = 0;
    for i in 0..args.count {
        debug!("Iteration {i}");

        let start: Instant = Instant::now();
        let ret: Result<(Vec<PlacedWord>, Grid), GenerationError> =
            generator::new_game(&options, args.width, args.height, &mut rng);
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        match ret {
            Ok((placed, grid)) => {
                words += placed.len();
                filled += grid.cells().count();
                print_puzzle(&placed, &grid);
            }
            Err(e) => {
                errors += 1;
                eprintln!("Error: {e}");
            }
        }
    }

    // Print some stats
    if args.summary {
        let succeeded: usize = (args.count - errors).max(1);
        println!(
            "
      total time = {}s
    average time = {}s
        max time = {}s
   average words = {}
average fill (%) = {}
          errors = {}",
            total,
            total / args.count.max(1) as f32,
            max,
            words / succeeded,
            filled * 100 / (succeeded * (args.width * args.height).max(1)),
            errors
        );
    }
    if errors == args.count && args.count > 0 {
        Some(1)
    } else {
        Some(0)
    }
}

/// Print the forms of all the tenses and persons.
fn print_conjugations(verb: &Verb) {
    print!("{:<24}", "");
    for pronoun in SubjectPronoun::ALL {
        print!("{:<18}", pronoun.text());
    }
    println!();
    for conjugation_type in ConjugationType::ALL {
        print!("{:<24}", conjugation_type.label());
        if conjugation_type.is_personal() {
            for pronoun in SubjectPronoun::ALL {
                let form: String = conjugate(verb, *conjugation_type, *pronoun)
                    .unwrap_or_else(|_| "-".to_string());
                print!("{form:<18}");
            }
        } else if let Ok(form) = conjugate(verb, *conjugation_type, SubjectPronoun::Yo) {
            print!("{form}");
        }
        println!();
    }
}

/// Print the grid and the list of words.
fn print_puzzle(words: &[PlacedWord], grid: &Grid) {
    println!();
    for row in 0..grid.height() {
        let line: String = (0..grid.width())
            .map(|col| match grid.get(row, col) {
                Some(cell) => cell.answer.to_uppercase().next().unwrap_or(cell.answer),
                None => '.',
            })
            .collect();
        println!("{line}");
    }
    println!();
    for (i, word) in words.iter().enumerate() {
        println!(
            "{:>3} {} ({:>2},{:>2}) {:<16}{} ({}), {}, {}",
            i + 1,
            if word.is_across { "A" } else { "D" },
            word.row,
            word.col,
            word.word,
            word.infinitive,
            word.translation,
            word.tense_label,
            word.person_label
        );
    }
}
