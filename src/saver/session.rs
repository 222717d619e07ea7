/*
session.rs

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

//! Save and restore the scalar state of the session.
//!
//! The saved object is a serialization of the [`SessionState`] object in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::path::PathBuf;

use super::{delete_json, read_json, write_json};
use crate::game::SessionState;

/// Object to save and restore the session state.
pub struct SaverSession {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverSession {
    /// Create a [`SaverSession`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the session must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("session.json");
        debug!("Session file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`SessionState`] object.
    pub fn get_session(&self) -> Result<Option<SessionState>, Box<dyn Error>> {
        read_json(&self.save_file)
    }

    /// Save the provided [`SessionState`] object.
    pub fn save_session(&self, session: &SessionState) -> Result<(), Box<dyn Error>> {
        write_json(&self.save_file, session)
    }

    /// Delete the session file.
    pub fn delete_save(&self) {
        delete_json(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_restore() {
        let dir: TempDir = TempDir::new().expect("temporary directory");
        let saver: SaverSession = SaverSession::new(dir.path().to_path_buf());
        assert_eq!(saver.get_session().expect("readable"), None);

        let session: SessionState = SessionState {
            elapsed_seconds: 754,
            completed: true,
            image_index: 3,
        };
        saver.save_session(&session).expect("saved");
        assert_eq!(saver.get_session().expect("readable"), Some(session));

        let json: String =
            std::fs::read_to_string(dir.path().join("session.json")).expect("readable");
        assert_eq!(json, r#"{"elapsedSeconds":754,"completed":true,"imageIndex":3}"#);

        saver.delete_save();
        assert_eq!(saver.get_session().expect("readable"), None);
    }
}
