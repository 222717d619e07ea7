/*
options.rs

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

//! Save and restore the game options.
//!
//! The saved object is a serialization of the [`GameOptions`] object in JSON format by using
//! [`serde`]: a flat map of option names to booleans.

use log::debug;
use std::error::Error;
use std::path::PathBuf;

use super::{delete_json, read_json, write_json};
use crate::options::GameOptions;

/// Object to save and restore the game options.
pub struct SaverOptions {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverOptions {
    /// Create a [`SaverOptions`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the options must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("options.json");
        debug!("Options file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`GameOptions`] object.
    ///
    /// Return None if the options have never been saved.
    pub fn get_options(&self) -> Result<Option<GameOptions>, Box<dyn Error>> {
        read_json(&self.save_file)
    }

    /// Save the provided [`GameOptions`] object.
    pub fn save_options(&self, options: &GameOptions) -> Result<(), Box<dyn Error>> {
        write_json(&self.save_file, options)
    }

    /// Delete the options file.
    pub fn delete_save(&self) {
        delete_json(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConjugationType, SubjectPronoun};
    use tempfile::TempDir;

    #[test]
    fn save_and_restore() {
        let dir: TempDir = TempDir::new().expect("temporary directory");
        let saver: SaverOptions = SaverOptions::new(dir.path().to_path_buf());
        assert_eq!(saver.get_options().expect("readable"), None);

        let mut options: GameOptions = GameOptions::default();
        options.enable(ConjugationType::Future, true);
        options.enable(SubjectPronoun::Vosotros, true);
        saver.save_options(&options).expect("saved");

        let restored: GameOptions = saver.get_options().expect("readable").expect("saved");
        assert_eq!(restored, options);
        assert_eq!(
            restored.selected::<ConjugationType>(),
            vec![ConjugationType::Present, ConjugationType::Future]
        );
    }

    #[test]
    fn empty_map_means_everything() {
        let dir: TempDir = TempDir::new().expect("temporary directory");
        std::fs::write(dir.path().join("options.json"), "{}").expect("written");
        let saver: SaverOptions = SaverOptions::new(dir.path().to_path_buf());
        let restored: GameOptions = saver.get_options().expect("readable").expect("saved");
        assert_eq!(restored.selected::<SubjectPronoun>().len(), 6);
        saver.delete_save();
        assert_eq!(saver.get_options().expect("readable"), None);
    }
}
