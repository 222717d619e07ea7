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

//! Game options: which verbs, persons, and tenses the puzzles use.
//!
//! The options are a flat map from member names ("AR", "STEM_CHANGE", "TU", "PRESENT", ...) to
//! booleans.
//! A facet with no enabled member is treated as if all its members were enabled.
//! See the [`crate::saver::options`] module that saves and restores the [`GameOptions`] object.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{ConjugationType, Facet, InfinitiveEnding, IrregularityCategory, SubjectPronoun};

/// Selected members of the four facets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct GameOptions {
    selected: HashMap<String, bool>,
}

impl GameOptions {
    /// Create a [`GameOptions`] object with nothing selected, which means everything.
    pub fn empty() -> Self {
        Self {
            selected: HashMap::new(),
        }
    }

    /// Create the options of a first game: all endings, all persons but vosotros, present
    /// tense, and regular verbs.
    pub fn new() -> Self {
        let mut options: GameOptions = Self::empty();
        for ending in InfinitiveEnding::ALL {
            options.enable(*ending, true);
        }
        for pronoun in SubjectPronoun::ALL {
            options.enable(*pronoun, *pronoun != SubjectPronoun::Vosotros);
        }
        options.enable(ConjugationType::Present, true);
        options.enable(IrregularityCategory::Regular, true);
        options
    }

    pub fn set(&mut self, name: &str, value: bool) {
        self.selected.insert(name.to_string(), value);
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.selected.get(name).copied().unwrap_or(false)
    }

    pub fn enable<F: Facet>(&mut self, member: F, value: bool) {
        self.set(member.option_name(), value);
    }

    /// Return the enabled members of a facet, or all of them when none is enabled.
    pub fn selected<F: Facet>(&self) -> Vec<F> {
        let members: Vec<F> = F::ALL
            .iter()
            .filter(|member| self.is_enabled(member.option_name()))
            .copied()
            .collect();
        if members.is_empty() {
            F::ALL.to_vec()
        } else {
            members
        }
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection() {
        let options: GameOptions = GameOptions::default();
        assert_eq!(options.selected::<InfinitiveEnding>().len(), 3);
        assert_eq!(
            options.selected::<SubjectPronoun>(),
            vec![
                SubjectPronoun::Yo,
                SubjectPronoun::Tu,
                SubjectPronoun::ElEllaUsted,
                SubjectPronoun::EllosEllasUstedes,
                SubjectPronoun::Nosotros,
            ]
        );
        assert_eq!(
            options.selected::<ConjugationType>(),
            vec![ConjugationType::Present]
        );
        assert_eq!(
            options.selected::<IrregularityCategory>(),
            vec![IrregularityCategory::Regular]
        );
    }

    #[test]
    fn empty_facet_means_all() {
        let mut options: GameOptions = GameOptions::empty();
        assert_eq!(options.selected::<ConjugationType>().len(), 10);

        options.set("PRETERIT", false);
        assert_eq!(options.selected::<ConjugationType>().len(), 10);

        options.enable(ConjugationType::Gerund, true);
        assert_eq!(
            options.selected::<ConjugationType>(),
            vec![ConjugationType::Gerund]
        );
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut options: GameOptions = GameOptions::empty();
        options.set("PLUPERFECT", true);
        assert_eq!(options.selected::<ConjugationType>().len(), 10);
    }

    #[test]
    fn serialized_as_flat_map() {
        let mut options: GameOptions = GameOptions::empty();
        options.set("AR", true);
        let json: String = serde_json::to_string(&options).expect("serializable");
        assert_eq!(json, r#"{"AR":true}"#);
    }
}
