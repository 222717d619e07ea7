/*
conjugation.rs

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

//! Conjugate verbs.
//!
//! [`conjugate`] returns the surface form of a verb for a tense and a person.
//! Each tense is implemented in its own module, and all of them resolve a form in the same
//! order:
//!
//! 1. The explicit override of the verb for the tense and the person, if any
//!    (see [`Verb::override_for`]).
//! 2. The default suffix from the suffix table of the tense, selected by the ending class of the
//!    verb and by the person.
//! 3. The root: the dictionary root, or an alternate root for the preterit and the
//!    future/conditional tenses.
//! 4. The stem change, for the persons that stress the root.
//! 5. The spelling adjustments that keep the pronunciation of the root in front of the suffix
//!    (see [`spelling::root_with_spelling_change`]).
//!
//! The suffix tables are arrays indexed by [`SubjectPronoun::row`], so that a missing suffix
//! cannot compile.

mod imperative;
mod nonfinite;
mod present;
mod preterit;
mod simple;
pub mod spelling;
mod subjunctive;

use std::error::Error;
use std::fmt;

use crate::model::{ConjugationType, InfinitiveEnding, SubjectPronoun, Verb};

/// Suffixes for the six persons, in [`SubjectPronoun::row`] order.
type Suffixes = [&'static str; 6];

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ConjugationError {
    /// The imperative has no yo form.
    ImperativeYo,
}

impl fmt::Display for ConjugationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConjugationError::ImperativeYo => write!(f, "the imperative has no yo form"),
        }
    }
}

impl Error for ConjugationError {}

/// Select the suffix for the ending class of the verb and for the person.
fn suffix_for(
    verb: &Verb,
    pronoun: SubjectPronoun,
    ar: &Suffixes,
    er: &Suffixes,
    ir: &Suffixes,
) -> &'static str {
    let table: &Suffixes = match verb.ending() {
        InfinitiveEnding::Ar => ar,
        InfinitiveEnding::Er => er,
        InfinitiveEnding::Ir => ir,
    };
    table[pronoun.row()]
}

/// Return the conjugated form of `verb`.
///
/// `pronoun` is ignored for the gerund and the past participle.
///
/// # Errors
///
/// The function returns [`ConjugationError::ImperativeYo`] when asked for the yo form of the
/// imperative, which does not exist.
pub fn conjugate(
    verb: &Verb,
    conjugation_type: ConjugationType,
    pronoun: SubjectPronoun,
) -> Result<String, ConjugationError> {
    let form: String = match conjugation_type {
        ConjugationType::Present => present::conjugate(verb, pronoun),
        ConjugationType::Preterit => preterit::conjugate(verb, pronoun),
        ConjugationType::Imperfect => simple::imperfect(verb, pronoun),
        ConjugationType::Conditional => simple::conditional(verb, pronoun),
        ConjugationType::Future => simple::future(verb, pronoun),
        ConjugationType::Imperative => imperative::conjugate(verb, pronoun)?,
        ConjugationType::SubjunctivePresent => subjunctive::present(verb, pronoun),
        ConjugationType::SubjunctiveImperfect => subjunctive::imperfect(verb, pronoun),
        ConjugationType::PastParticiple => nonfinite::past_participle(verb),
        ConjugationType::Gerund => nonfinite::gerund(verb),
    };
    Ok(form)
}

/// Return the form of `verb` that does not depend on a person.
///
/// Return None for the personal tenses.
pub fn non_personal_form(verb: &Verb, conjugation_type: ConjugationType) -> Option<String> {
    match conjugation_type {
        ConjugationType::PastParticiple => Some(nonfinite::past_participle(verb)),
        ConjugationType::Gerund => Some(nonfinite::gerund(verb)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Facet;
    use crate::verbs;

    #[test]
    fn non_personal_forms() {
        let (_, verb) = verbs::find("decir").expect("decir is in the table");
        assert_eq!(
            non_personal_form(verb, ConjugationType::PastParticiple),
            Some("dicho".to_string())
        );
        assert_eq!(
            non_personal_form(verb, ConjugationType::Gerund),
            Some("diciendo".to_string())
        );
        assert_eq!(non_personal_form(verb, ConjugationType::Present), None);
        for pronoun in SubjectPronoun::ALL {
            assert_eq!(
                conjugate(verb, ConjugationType::Gerund, *pronoun),
                Ok("diciendo".to_string())
            );
        }
    }

    #[test]
    fn yo_imperative_is_an_error() {
        let (_, verb) = verbs::find("hablar").expect("hablar in table");
        assert_eq!(
            conjugate(verb, ConjugationType::Imperative, SubjectPronoun::Yo),
            Err(ConjugationError::ImperativeYo)
        );
    }

    #[test]
    fn every_verb_conjugates() {
        for (_, verb) in verbs::all() {
            for conjugation_type in ConjugationType::ALL {
                for pronoun in SubjectPronoun::ALL {
                    if *conjugation_type == ConjugationType::Imperative
                        && *pronoun == SubjectPronoun::Yo
                    {
                        continue;
                    }
                    let form: String = conjugate(verb, *conjugation_type, *pronoun)
                        .expect("valid combination");
                    assert!(
                        form.chars().count() > 1,
                        "{} {:?} {:?} -> {form:?}",
                        verb.infinitive,
                        conjugation_type,
                        pronoun
                    );
                }
            }
        }
    }
}
