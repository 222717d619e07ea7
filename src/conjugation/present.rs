/*
present.rs

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

//! Present indicative.

use super::spelling::{
    drop_first, drop_last, is_weak_one_syllable_root, remove_starting_accent, replace_in_last_syllable,
    root_with_spelling_change, take_last,
};
use super::{Suffixes, suffix_for};
use crate::model::{ConjugationType, Irregularity, SubjectPronoun, Verb};

const AR: Suffixes = ["o", "as", "a", "an", "amos", "áis"];
const ER: Suffixes = ["o", "es", "e", "en", "emos", "éis"];
const IR: Suffixes = ["o", "es", "e", "en", "imos", "ís"];

pub fn conjugate(verb: &Verb, pronoun: SubjectPronoun) -> String {
    if let Some(form) = verb.override_for(ConjugationType::Present, pronoun) {
        return form.to_string();
    }
    let default_suffix: &str = suffix_for(verb, pronoun, &AR, &ER, &IR);

    let root: String = match special_yo_root(verb, pronoun) {
        Some(r) => r,
        None => {
            let r: String =
                root_with_spelling_change(verb.root(), verb.ending().as_str(), default_suffix);
            apply_stem_change(verb, &r, pronoun)
        }
    };

    let suffix: String = match pronoun {
        SubjectPronoun::Nosotros if verb.is_ir_with_accent() => {
            format!("í{}", drop_first(default_suffix))
        }
        SubjectPronoun::Vosotros if is_weak_one_syllable_root(&root) => {
            remove_starting_accent(default_suffix)
        }
        _ => default_suffix.to_string(),
    };
    root + &suffix
}

/// Root of the yo form for the verbs that insert a `g` (tengo, caigo) or a `z` (conozco).
fn special_yo_root(verb: &Verb, pronoun: SubjectPronoun) -> Option<String> {
    if pronoun != SubjectPronoun::Yo {
        return None;
    }
    let root: &str = verb.root();
    if verb.has(Irregularity::SpellingChangeYoGo) {
        if root.ends_with(['l', 'n', 's']) {
            return Some(format!("{root}g"));
        }
        if root.ends_with(['a', 'o']) {
            return Some(format!("{root}ig"));
        }
        if root.ends_with("ec") && verb.has(Irregularity::StemChangeEToI) {
            return Some(format!("{}ig", drop_last(root, 2)));
        }
        if root.ends_with('c') {
            return Some(format!("{}g", drop_last(root, 1)));
        }
        None
    } else if verb.has(Irregularity::SpellingChangeYoZc) {
        Some(format!("{}zc", drop_last(root, 1)))
    } else {
        None
    }
}

/// Change the stressed vowel of the root. Nosotros and vosotros keep the dictionary root.
pub(super) fn apply_stem_change(verb: &Verb, root: &str, pronoun: SubjectPronoun) -> String {
    if matches!(pronoun, SubjectPronoun::Nosotros | SubjectPronoun::Vosotros) {
        return root.to_string();
    }

    if verb.has(Irregularity::StemChangeEToI) {
        replace_in_last_syllable(root, "e", "i")
    } else if verb.has(Irregularity::StemChangeEToAccentedI) {
        replace_in_last_syllable(root, "e", "í")
    } else if verb.has(Irregularity::SpellingChangeIToAccentedI) {
        replace_in_last_syllable(root, "i", "í")
    } else if verb.has(Irregularity::SpellingChangeUToAccentedU) {
        replace_in_last_syllable(root, "u", "ú")
    } else if verb.has(Irregularity::StemChangeIToIe) {
        replace_in_last_syllable(root, "i", "ie")
    } else if verb.has(Irregularity::StemChangeUToUe) {
        replace_in_last_syllable(root, "u", "ue")
    } else if verb.has(Irregularity::StemChangeOToUe) {
        let new_stem: &str = if root.chars().count() <= 5 && root.starts_with('o') {
            // oler -> huelo
            "hue"
        } else if take_last(root, 5).contains("go") {
            // avergonzar -> avergüenzo
            "üe"
        } else {
            "ue"
        };
        replace_in_last_syllable(root, "o", new_stem)
    } else if verb.has(Irregularity::StemChangeEToIe) {
        // errar -> yerro
        let new_stem: &str = if root.rfind('e') == Some(0) { "ye" } else { "ie" };
        replace_in_last_syllable(root, "e", new_stem)
    } else {
        root.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::find;

    fn present(infinitive: &str, pronoun: SubjectPronoun) -> String {
        let (_, verb) = find(infinitive).expect("verb in table");
        conjugate(verb, pronoun)
    }

    #[test]
    fn regular() {
        assert_eq!(present("hablar", SubjectPronoun::Yo), "hablo");
        assert_eq!(present("comer", SubjectPronoun::Vosotros), "coméis");
        assert_eq!(present("vivir", SubjectPronoun::Nosotros), "vivimos");
    }

    #[test]
    fn stem_changes() {
        assert_eq!(present("pensar", SubjectPronoun::Yo), "pienso");
        assert_eq!(present("pensar", SubjectPronoun::Nosotros), "pensamos");
        assert_eq!(present("dormir", SubjectPronoun::EllosEllasUstedes), "duermen");
        assert_eq!(present("jugar", SubjectPronoun::Tu), "juegas");
        assert_eq!(present("pedir", SubjectPronoun::ElEllaUsted), "pide");
        assert_eq!(present("oler", SubjectPronoun::Yo), "huelo");
        assert_eq!(present("errar", SubjectPronoun::Yo), "yerro");
        assert_eq!(present("avergonzar", SubjectPronoun::Yo), "avergüenzo");
        assert_eq!(present("adquirir", SubjectPronoun::Yo), "adquiero");
    }

    #[test]
    fn yo_forms() {
        assert_eq!(present("tener", SubjectPronoun::Yo), "tengo");
        assert_eq!(present("caer", SubjectPronoun::Yo), "caigo");
        assert_eq!(present("hacer", SubjectPronoun::Yo), "hago");
        assert_eq!(present("decir", SubjectPronoun::Yo), "digo");
        assert_eq!(present("conocer", SubjectPronoun::Yo), "conozco");
        assert_eq!(present("conducir", SubjectPronoun::Yo), "conduzco");
    }

    #[test]
    fn spelling_changes() {
        assert_eq!(present("construir", SubjectPronoun::Yo), "construyo");
        assert_eq!(present("construir", SubjectPronoun::Nosotros), "construimos");
        assert_eq!(present("seguir", SubjectPronoun::Yo), "sigo");
        assert_eq!(present("elegir", SubjectPronoun::Yo), "elijo");
        assert_eq!(present("enviar", SubjectPronoun::Yo), "envío");
        assert_eq!(present("continuar", SubjectPronoun::ElEllaUsted), "continúa");
    }

    #[test]
    fn accented_infinitives() {
        assert_eq!(present("oír", SubjectPronoun::Yo), "oigo");
        assert_eq!(present("oír", SubjectPronoun::Tu), "oyes");
        assert_eq!(present("oír", SubjectPronoun::Nosotros), "oímos");
        assert_eq!(present("reír", SubjectPronoun::Yo), "río");
        assert_eq!(present("reír", SubjectPronoun::Nosotros), "reímos");
    }

    #[test]
    fn overrides() {
        assert_eq!(present("ser", SubjectPronoun::Yo), "soy");
        assert_eq!(present("ir", SubjectPronoun::Vosotros), "vais");
        assert_eq!(present("dar", SubjectPronoun::Yo), "doy");
        assert_eq!(present("dar", SubjectPronoun::Tu), "das");
    }
}
