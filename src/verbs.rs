/*
verbs.rs

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

//! Verb table.
//!
//! The verbs are grouped by infinitive ending ([`ar`], [`er`], [`ir`]) and, inside each group,
//! by [`IrregularityCategory`].
//! The category of a verb is the table it belongs to: it is not derived from the irregularity
//! tags of the verb.

pub mod ar;
pub mod er;
pub mod ir;

use crate::model::{Facet, InfinitiveEnding, IrregularityCategory, Verb};

/// Return the verbs of the given ending class and irregularity category.
pub fn catalog(ending: InfinitiveEnding, category: IrregularityCategory) -> &'static [Verb] {
    match (ending, category) {
        (InfinitiveEnding::Ar, IrregularityCategory::Regular) => ar::REGULAR,
        (InfinitiveEnding::Ar, IrregularityCategory::SpellingChange) => ar::SPELLING_CHANGE,
        (InfinitiveEnding::Ar, IrregularityCategory::StemChange) => ar::STEM_CHANGE,
        (InfinitiveEnding::Ar, IrregularityCategory::Irregular) => ar::IRREGULAR,
        (InfinitiveEnding::Er, IrregularityCategory::Regular) => er::REGULAR,
        (InfinitiveEnding::Er, IrregularityCategory::SpellingChange) => er::SPELLING_CHANGE,
        (InfinitiveEnding::Er, IrregularityCategory::StemChange) => er::STEM_CHANGE,
        (InfinitiveEnding::Er, IrregularityCategory::Irregular) => er::IRREGULAR,
        (InfinitiveEnding::Ir, IrregularityCategory::Regular) => ir::REGULAR,
        (InfinitiveEnding::Ir, IrregularityCategory::SpellingChange) => ir::SPELLING_CHANGE,
        (InfinitiveEnding::Ir, IrregularityCategory::StemChange) => ir::STEM_CHANGE,
        (InfinitiveEnding::Ir, IrregularityCategory::Irregular) => ir::IRREGULAR,
    }
}

/// Iterate over all the verbs with their irregularity category.
pub fn all() -> impl Iterator<Item = (IrregularityCategory, &'static Verb)> {
    InfinitiveEnding::ALL.iter().flat_map(|ending| {
        IrregularityCategory::ALL.iter().flat_map(move |category| {
            catalog(*ending, *category)
                .iter()
                .map(move |verb| (*category, verb))
        })
    })
}

/// Look up a verb by its infinitive.
pub fn find(infinitive: &str) -> Option<(IrregularityCategory, &'static Verb)> {
    all().find(|(_, verb)| verb.infinitive == infinitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn endings_match_tables() {
        for ending in InfinitiveEnding::ALL {
            for category in IrregularityCategory::ALL {
                for verb in catalog(*ending, *category) {
                    assert_eq!(verb.ending(), *ending, "{}", verb.infinitive);
                    let suffix: String = verb.infinitive.chars().skip(verb.root().chars().count()).collect();
                    assert_eq!(suffix.chars().count(), 2, "{}", verb.infinitive);
                    assert_eq!(
                        format!("{}{}", verb.root(), suffix),
                        verb.infinitive,
                        "{}",
                        verb.infinitive
                    );
                }
            }
        }
    }

    #[test]
    fn infinitives_are_unique() {
        let mut seen: HashSet<&str> = HashSet::new();
        for (_, verb) in all() {
            assert!(seen.insert(verb.infinitive), "duplicate {}", verb.infinitive);
        }
        assert!(seen.len() > 600);
    }

    #[test]
    fn frequencies_in_range() {
        assert!(all().all(|(_, v)| (1..=3).contains(&v.frequency)));
    }

    #[test]
    fn find_verb() {
        let (category, verb) = find("tener").expect("tener is in the table");
        assert_eq!(category, IrregularityCategory::Irregular);
        assert_eq!(verb.alt_infinitive_root, Some("tendr"));
        assert!(find("florp").is_none());
    }
}
