/*
preterit.rs

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

//! Preterit indicative.

use super::spelling::{
    any_vowels, drop_first, drop_last, ends_with_strong_vowel, ir_altered_root, last_char,
    root_with_spelling_change,
};
use super::{Suffixes, suffix_for};
use crate::model::{ConjugationType, InfinitiveEnding, Irregularity, SubjectPronoun, Verb};

const AR: Suffixes = ["é", "aste", "ó", "aron", "amos", "asteis"];
const ER_IR: Suffixes = ["í", "iste", "ió", "ieron", "imos", "isteis"];

pub fn conjugate(verb: &Verb, pronoun: SubjectPronoun) -> String {
    if let Some(form) = verb.override_for(ConjugationType::Preterit, pronoun) {
        return form.to_string();
    }

    // Strong preterits (tuve, hizo, anduve) take the -er/-ir endings without accent.
    let suffix: &str = if verb.has(Irregularity::NoAccentOnPreterit) {
        match pronoun {
            SubjectPronoun::Yo => "e",
            SubjectPronoun::ElEllaUsted => "o",
            _ => ER_IR[pronoun.row()],
        }
    } else {
        suffix_for(verb, pronoun, &AR, &ER_IR, &ER_IR)
    };

    let initial_root: String = match verb.alt_preterit_root {
        Some(r) => r.to_string(),
        None if verb.ending() == InfinitiveEnding::Ir && pronoun.is_third_person() => {
            ir_altered_root(verb, verb.root())
        }
        None => verb.root().to_string(),
    };

    let suffix: String = suffix_with_spelling_change(&initial_root, suffix, pronoun);
    let root: String = root_with_spelling_change(&initial_root, verb.ending().as_str(), &suffix);
    root + &suffix
}

/// Adjust the initial `i` of the suffix after a vowel or a palatal consonant.
///
/// leer -> leyó, leíste; tañer -> tañó; huir -> hui.
fn suffix_with_spelling_change(root: &str, suffix: &str, pronoun: SubjectPronoun) -> String {
    let third_person: bool = pronoun.is_third_person();

    if suffix.starts_with('i') {
        if ends_with_strong_vowel(root) {
            let replacement: &str = if third_person { "y" } else { "í" };
            return format!("{replacement}{}", drop_first(suffix));
        }
        if third_person
            && (root.ends_with('ñ') || root.ends_with("ll") || root.ends_with('j') || root.ends_with('i'))
        {
            return drop_first(suffix).to_string();
        }
        if third_person
            && matches!(last_char(root), Some('a' | 'e' | 'o' | 'u'))
            && !root.ends_with("qu")
            && !root.ends_with("gu")
        {
            return format!("y{}", drop_first(suffix));
        }
    } else if suffix.starts_with('í') && root.ends_with('u') && !any_vowels(drop_last(root, 1)) {
        // One-syllable forms do not carry a written accent.
        return format!("i{}", drop_first(suffix));
    }
    suffix.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::find;

    fn preterit(infinitive: &str, pronoun: SubjectPronoun) -> String {
        let (_, verb) = find(infinitive).expect("verb in table");
        conjugate(verb, pronoun)
    }

    #[test]
    fn regular() {
        assert_eq!(preterit("hablar", SubjectPronoun::Yo), "hablé");
        assert_eq!(preterit("comer", SubjectPronoun::Tu), "comiste");
        assert_eq!(preterit("vivir", SubjectPronoun::EllosEllasUstedes), "vivieron");
    }

    #[test]
    fn spelling_changes() {
        assert_eq!(preterit("buscar", SubjectPronoun::Yo), "busqué");
        assert_eq!(preterit("llegar", SubjectPronoun::Yo), "llegué");
        assert_eq!(preterit("averiguar", SubjectPronoun::Yo), "averigüé");
        assert_eq!(preterit("construir", SubjectPronoun::ElEllaUsted), "construyó");
        assert_eq!(preterit("construir", SubjectPronoun::Yo), "construí");
        assert_eq!(preterit("huir", SubjectPronoun::Yo), "hui");
        assert_eq!(preterit("leer", SubjectPronoun::EllosEllasUstedes), "leyeron");
        assert_eq!(preterit("caer", SubjectPronoun::Tu), "caíste");
        assert_eq!(preterit("oír", SubjectPronoun::ElEllaUsted), "oyó");
    }

    #[test]
    fn ir_stem_changes_in_third_person() {
        assert_eq!(preterit("pedir", SubjectPronoun::ElEllaUsted), "pidió");
        assert_eq!(preterit("pedir", SubjectPronoun::Nosotros), "pedimos");
        assert_eq!(preterit("dormir", SubjectPronoun::EllosEllasUstedes), "durmieron");
        assert_eq!(preterit("seguir", SubjectPronoun::ElEllaUsted), "siguió");
        assert_eq!(preterit("reír", SubjectPronoun::ElEllaUsted), "rió");
        assert_eq!(preterit("reír", SubjectPronoun::Tu), "reíste");
    }

    #[test]
    fn strong_preterits() {
        assert_eq!(preterit("tener", SubjectPronoun::Yo), "tuve");
        assert_eq!(preterit("hacer", SubjectPronoun::ElEllaUsted), "hizo");
        assert_eq!(preterit("decir", SubjectPronoun::EllosEllasUstedes), "dijeron");
        assert_eq!(preterit("andar", SubjectPronoun::Tu), "anduviste");
        assert_eq!(preterit("estar", SubjectPronoun::ElEllaUsted), "estuvo");
    }

    #[test]
    fn overrides() {
        assert_eq!(preterit("ser", SubjectPronoun::Yo), "fui");
        assert_eq!(preterit("ir", SubjectPronoun::Tu), "fuiste");
        assert_eq!(preterit("dar", SubjectPronoun::ElEllaUsted), "dio");
        assert_eq!(preterit("dar", SubjectPronoun::EllosEllasUstedes), "dieron");
    }
}
