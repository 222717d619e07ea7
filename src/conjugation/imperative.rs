/*
imperative.rs

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

//! Affirmative imperative.
//!
//! The imperative borrows the present subjunctive, except for the persons listed in
//! [`rule_for`].

use super::spelling::drop_last;
use super::{ConjugationError, present, subjunctive};
use crate::model::{ConjugationType, SubjectPronoun, Verb};

/// Source of the imperative form for a person.
#[derive(Debug, PartialEq)]
enum Rule {
    /// The imperative has no yo form.
    Invalid,

    /// Informal imperative of the verb, or the present él form (habla, come).
    PresentThirdPerson,

    /// Infinitive with its final `r` replaced by `d` (hablad, oíd).
    InfinitiveD,

    /// Present subjunctive (hable, hablemos).
    Subjunctive,
}

fn rule_for(pronoun: SubjectPronoun) -> Rule {
    match pronoun {
        SubjectPronoun::Yo => Rule::Invalid,
        SubjectPronoun::Tu => Rule::PresentThirdPerson,
        SubjectPronoun::Vosotros => Rule::InfinitiveD,
        _ => Rule::Subjunctive,
    }
}

pub fn conjugate(verb: &Verb, pronoun: SubjectPronoun) -> Result<String, ConjugationError> {
    if let Some(form) = verb.override_for(ConjugationType::Imperative, pronoun) {
        return Ok(form.to_string());
    }
    let form: String = match rule_for(pronoun) {
        Rule::Invalid => return Err(ConjugationError::ImperativeYo),
        Rule::PresentThirdPerson => match verb.irregular_imperative_tu {
            Some(form) => form.to_string(),
            None => present::conjugate(verb, SubjectPronoun::ElEllaUsted),
        },
        Rule::InfinitiveD => format!("{}d", drop_last(verb.infinitive, 1)),
        Rule::Subjunctive => subjunctive::present(verb, pronoun),
    };
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::find;

    fn imperative(infinitive: &str, pronoun: SubjectPronoun) -> String {
        let (_, verb) = find(infinitive).expect("verb in table");
        conjugate(verb, pronoun).expect("valid person")
    }

    #[test]
    fn tu_forms() {
        assert_eq!(imperative("hablar", SubjectPronoun::Tu), "habla");
        assert_eq!(imperative("pensar", SubjectPronoun::Tu), "piensa");
        assert_eq!(imperative("decir", SubjectPronoun::Tu), "di");
        assert_eq!(imperative("ser", SubjectPronoun::Tu), "sé");
        assert_eq!(imperative("ir", SubjectPronoun::Tu), "ve");
    }

    #[test]
    fn vosotros_forms() {
        assert_eq!(imperative("hablar", SubjectPronoun::Vosotros), "hablad");
        assert_eq!(imperative("oír", SubjectPronoun::Vosotros), "oíd");
        assert_eq!(imperative("ir", SubjectPronoun::Vosotros), "id");
    }

    #[test]
    fn subjunctive_forms() {
        assert_eq!(imperative("hablar", SubjectPronoun::ElEllaUsted), "hable");
        assert_eq!(imperative("tener", SubjectPronoun::EllosEllasUstedes), "tengan");
        assert_eq!(imperative("ir", SubjectPronoun::Nosotros), "vayamos");
    }

    #[test]
    fn yo_is_invalid() {
        let (_, verb) = find("comer").expect("comer in table");
        assert_eq!(conjugate(verb, SubjectPronoun::Yo), Err(ConjugationError::ImperativeYo));
    }
}
