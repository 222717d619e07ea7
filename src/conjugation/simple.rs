/*
simple.rs

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

//! Tenses that only append a suffix: imperfect, future, and conditional.

use super::{Suffixes, suffix_for};
use crate::model::{ConjugationType, SubjectPronoun, Verb};

const IMPERFECT_AR: Suffixes = ["aba", "abas", "aba", "aban", "ábamos", "abais"];
const IMPERFECT_ER_IR: Suffixes = ["ía", "ías", "ía", "ían", "íamos", "íais"];

const FUTURE: Suffixes = ["é", "ás", "á", "án", "emos", "éis"];
const CONDITIONAL: Suffixes = ["ía", "ías", "ía", "ían", "íamos", "íais"];

pub fn imperfect(verb: &Verb, pronoun: SubjectPronoun) -> String {
    if let Some(form) = verb.override_for(ConjugationType::Imperfect, pronoun) {
        return form.to_string();
    }
    let suffix: &str = suffix_for(verb, pronoun, &IMPERFECT_AR, &IMPERFECT_ER_IR, &IMPERFECT_ER_IR);
    format!("{}{suffix}", verb.root())
}

pub fn future(verb: &Verb, pronoun: SubjectPronoun) -> String {
    if let Some(form) = verb.override_for(ConjugationType::Future, pronoun) {
        return form.to_string();
    }
    format!("{}{}", infinitive_root(verb), FUTURE[pronoun.row()])
}

pub fn conditional(verb: &Verb, pronoun: SubjectPronoun) -> String {
    if let Some(form) = verb.override_for(ConjugationType::Conditional, pronoun) {
        return form.to_string();
    }
    format!("{}{}", infinitive_root(verb), CONDITIONAL[pronoun.row()])
}

/// The future and the conditional are built on the infinitive (hablaré) or on an alternate
/// root (tendré, oiré).
fn infinitive_root(verb: &Verb) -> &'static str {
    verb.alt_infinitive_root.unwrap_or(verb.infinitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::find;

    fn verb(infinitive: &str) -> &'static Verb {
        find(infinitive).expect("verb in table").1
    }

    #[test]
    fn imperfect_forms() {
        assert_eq!(imperfect(verb("hablar"), SubjectPronoun::Nosotros), "hablábamos");
        assert_eq!(imperfect(verb("vivir"), SubjectPronoun::Tu), "vivías");
        assert_eq!(imperfect(verb("ir"), SubjectPronoun::Nosotros), "íbamos");
        assert_eq!(imperfect(verb("ser"), SubjectPronoun::Yo), "era");
    }

    #[test]
    fn future_and_conditional() {
        assert_eq!(future(verb("hablar"), SubjectPronoun::Yo), "hablaré");
        assert_eq!(future(verb("tener"), SubjectPronoun::EllosEllasUstedes), "tendrán");
        assert_eq!(future(verb("oír"), SubjectPronoun::Yo), "oiré");
        assert_eq!(conditional(verb("poder"), SubjectPronoun::Nosotros), "podríamos");
        assert_eq!(conditional(verb("comer"), SubjectPronoun::Vosotros), "comeríais");
    }
}
