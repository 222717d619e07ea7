/*
saver.rs

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

//! Save and restore the game state between sessions.
//!
//! Each object is saved in its own JSON file, under a data directory that the caller provides:
//!
//! * `words.json`: the placed words of the puzzle in progress, with the user entries
//!   (see [`words::SaverWords`]).
//! * `options.json`: the game options (see [`options::SaverOptions`]).
//! * `stats.json`: the statistics of the completed puzzles (see [`stats::SaverStats`]).
//! * `session.json`: the elapsed time and the other scalar values of the session
//!   (see [`session::SaverSession`]).
//!
//! A missing file is not an error: the `get_*` methods return None.

pub mod options;
pub mod session;
pub mod stats;
pub mod words;

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Deserialize the JSON file, or return None if the file does not exist.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, Box<dyn Error>> {
    let file: File;
    match File::open(path) {
        Ok(f) => file = f,
        Err(error) => match error.kind() {
            ErrorKind::NotFound => return Ok(None),
            _ => return Err(Box::new(error)),
        },
    }
    let reader: BufReader<File> = BufReader::new(file);
    let value: T = serde_json::from_reader(reader)?;
    Ok(Some(value))
}

/// Serialize the object into the JSON file, replacing its content.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Remove the JSON file.
///
/// A missing file is not an error. Other errors are logged and ignored: the next save replaces
/// the file anyway.
fn delete_json(path: &Path) {
    if let Err(error) = remove_file(path)
        && error.kind() != ErrorKind::NotFound
    {
        debug!("Cannot delete {}: {error}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn delete_missing_or_unremovable_file() {
        let dir: TempDir = TempDir::new().expect("temporary directory");
        let path: PathBuf = dir.path().join("missing.json");
        delete_json(&path);
        assert!(!path.exists());

        // A directory cannot be removed as a file
        let sub_dir: PathBuf = dir.path().join("words.json");
        std::fs::create_dir(&sub_dir).expect("directory created");
        delete_json(&sub_dir);
        assert!(sub_dir.is_dir());

        let file: PathBuf = dir.path().join("stats.json");
        write_json(&file, &[1, 2]).expect("saved");
        delete_json(&file);
        assert!(!file.exists());
        assert_eq!(read_json::<Vec<u32>>(&file).expect("readable"), None);
    }
}
