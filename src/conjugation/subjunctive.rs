/*
subjunctive.rs

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

//! Present and imperfect subjunctive.
//!
//! The present subjunctive is built on the present yo form (tengo -> tenga) and the imperfect
//! subjunctive on the preterit ellos form (tuvieron -> tuviera).

use super::spelling::{
    drop_last, is_weak_one_syllable_root, last_char, remove_starting_accent, replace_in_last_syllable,
    root_with_spelling_change,
};
use super::{Suffixes, present, preterit, suffix_for};
use crate::model::{ConjugationType, InfinitiveEnding, Irregularity, SubjectPronoun, Verb};

const PRESENT_AR: Suffixes = ["e", "es", "e", "en", "emos", "éis"];
const PRESENT_ER_IR: Suffixes = ["a", "as", "a", "an", "amos", "áis"];

const IMPERFECT: Suffixes = ["ra", "ras", "ra", "ran", "ramos", "rais"];

pub fn present(verb: &Verb, pronoun: SubjectPronoun) -> String {
    if let Some(form) = verb.override_for(ConjugationType::SubjunctivePresent, pronoun) {
        return form.to_string();
    }
    let default_suffix: &str = suffix_for(verb, pronoun, &PRESENT_AR, &PRESENT_ER_IR, &PRESENT_ER_IR);

    let yo_form: String = present::conjugate(verb, SubjectPronoun::Yo);
    // estoy -> esté, doy -> dé
    let yo_root: &str = drop_last(&yo_form, if yo_form.ends_with("oy") { 2 } else { 1 });

    let root: String = match pronoun {
        SubjectPronoun::Nosotros | SubjectPronoun::Vosotros => reverse_stem_change(verb, yo_root),
        _ => yo_root.to_string(),
    };
    let root: String = root_with_spelling_change(&root, "o", default_suffix);

    let suffix: String = if pronoun == SubjectPronoun::Vosotros && is_weak_one_syllable_root(&root) {
        remove_starting_accent(default_suffix)
    } else {
        default_suffix.to_string()
    };
    root + &suffix
}

/// Restore the vowel of the dictionary root in the persons that do not stress it.
///
/// The -ir verbs keep the raised vowel (sintamos, durmamos).
fn reverse_stem_change(verb: &Verb, root: &str) -> String {
    let is_ir: bool = verb.ending() == InfinitiveEnding::Ir;

    if verb.has(Irregularity::StemChangeUToUe) {
        replace_in_last_syllable(root, "ue", "u")
    } else if verb.has(Irregularity::StemChangeOToUe) {
        let changed: &str = if root.contains("güe") {
            "üe"
        } else if root.chars().count() <= 5 && root.starts_with("hue") {
            "hue"
        } else {
            "ue"
        };
        replace_in_last_syllable(root, changed, if is_ir { "u" } else { "o" })
    } else if verb.has(Irregularity::StemChangeEToIe) {
        let changed: &str = if root.chars().count() <= 5 && root.starts_with("ye") {
            "ye"
        } else {
            "ie"
        };
        replace_in_last_syllable(root, changed, if is_ir { "i" } else { "e" })
    } else if verb.has(Irregularity::StemChangeEToAccentedI)
        || verb.has(Irregularity::SpellingChangeIToAccentedI)
    {
        replace_in_last_syllable(root, "í", "i")
    } else if verb.has(Irregularity::SpellingChangeUToAccentedU) {
        replace_in_last_syllable(root, "ú", "u")
    } else {
        root.to_string()
    }
}

pub fn imperfect(verb: &Verb, pronoun: SubjectPronoun) -> String {
    if let Some(form) = verb.override_for(ConjugationType::SubjunctiveImperfect, pronoun) {
        return form.to_string();
    }
    let ellos_form: String = preterit::conjugate(verb, SubjectPronoun::EllosEllasUstedes);
    let root: &str = drop_last(&ellos_form, 3);

    let root: String = if pronoun == SubjectPronoun::Nosotros {
        // The stress moves to the last vowel of the root: habláramos, tuviéramos.
        match last_char(root) {
            Some('a') => format!("{}á", drop_last(root, 1)),
            Some('e') => format!("{}é", drop_last(root, 1)),
            _ => root.to_string(),
        }
    } else {
        root.to_string()
    };
    root + IMPERFECT[pronoun.row()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::find;

    fn verb(infinitive: &str) -> &'static Verb {
        find(infinitive).expect("verb in table").1
    }

    #[test]
    fn present_forms() {
        assert_eq!(present(verb("hablar"), SubjectPronoun::Yo), "hable");
        assert_eq!(present(verb("tener"), SubjectPronoun::Tu), "tengas");
        assert_eq!(present(verb("conocer"), SubjectPronoun::ElEllaUsted), "conozca");
        assert_eq!(present(verb("llegar"), SubjectPronoun::Yo), "llegue");
        assert_eq!(present(verb("construir"), SubjectPronoun::EllosEllasUstedes), "construyan");
        assert_eq!(present(verb("caber"), SubjectPronoun::Yo), "quepa");
    }

    #[test]
    fn present_reverses_stem_changes() {
        assert_eq!(present(verb("pensar"), SubjectPronoun::Yo), "piense");
        assert_eq!(present(verb("pensar"), SubjectPronoun::Nosotros), "pensemos");
        assert_eq!(present(verb("sentir"), SubjectPronoun::Nosotros), "sintamos");
        assert_eq!(present(verb("dormir"), SubjectPronoun::Vosotros), "durmáis");
        assert_eq!(present(verb("volver"), SubjectPronoun::Nosotros), "volvamos");
        assert_eq!(present(verb("jugar"), SubjectPronoun::Nosotros), "juguemos");
        assert_eq!(present(verb("reír"), SubjectPronoun::Vosotros), "riais");
    }

    #[test]
    fn present_overrides_and_oy_forms() {
        assert_eq!(present(verb("estar"), SubjectPronoun::Nosotros), "estemos");
        assert_eq!(present(verb("dar"), SubjectPronoun::Tu), "des");
        assert_eq!(present(verb("ser"), SubjectPronoun::Yo), "sea");
    }

    #[test]
    fn imperfect_forms() {
        assert_eq!(imperfect(verb("hablar"), SubjectPronoun::Yo), "hablara");
        assert_eq!(imperfect(verb("hablar"), SubjectPronoun::Nosotros), "habláramos");
        assert_eq!(imperfect(verb("comer"), SubjectPronoun::Nosotros), "comiéramos");
        assert_eq!(imperfect(verb("andar"), SubjectPronoun::Nosotros), "anduviéramos");
        assert_eq!(imperfect(verb("ir"), SubjectPronoun::Tu), "fueras");
        assert_eq!(imperfect(verb("decir"), SubjectPronoun::EllosEllasUstedes), "dijeran");
    }
}
