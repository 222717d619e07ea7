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

use verboscruzados::conjugation::ConjugationError;
use verboscruzados::model::{ConjugationType, Facet, InfinitiveEnding, SubjectPronoun};
use verboscruzados::{conjugate, verbs};

/// Reference forms: infinitive, tense, person, expected form.
const FIXTURES: &[(&str, ConjugationType, SubjectPronoun, &str)] = &[
    ("hablar", ConjugationType::Present, SubjectPronoun::Yo, "hablo"),
    ("comer", ConjugationType::Preterit, SubjectPronoun::Tu, "comiste"),
    ("tener", ConjugationType::Present, SubjectPronoun::Yo, "tengo"),
    ("pensar", ConjugationType::Present, SubjectPronoun::Yo, "pienso"),
    ("conocer", ConjugationType::Present, SubjectPronoun::Yo, "conozco"),
    ("construir", ConjugationType::Present, SubjectPronoun::Yo, "construyo"),
    ("ser", ConjugationType::Preterit, SubjectPronoun::Yo, "fui"),
    ("decir", ConjugationType::Imperative, SubjectPronoun::Tu, "di"),
    ("ir", ConjugationType::Imperfect, SubjectPronoun::Nosotros, "íbamos"),
    ("tener", ConjugationType::Preterit, SubjectPronoun::Yo, "tuve"),
    ("dormir", ConjugationType::Preterit, SubjectPronoun::EllosEllasUstedes, "durmieron"),
    ("pedir", ConjugationType::Gerund, SubjectPronoun::Yo, "pidiendo"),
    ("volver", ConjugationType::PastParticiple, SubjectPronoun::Yo, "vuelto"),
    ("oír", ConjugationType::Imperative, SubjectPronoun::Vosotros, "oíd"),
    ("tener", ConjugationType::Imperative, SubjectPronoun::EllosEllasUstedes, "tengan"),
];

#[test]
fn reference_forms() {
    for (infinitive, conjugation_type, pronoun, expected) in FIXTURES {
        let (_, verb) = verbs::find(infinitive).expect("verb in table");
        assert_eq!(
            conjugate(verb, *conjugation_type, *pronoun).as_deref(),
            Ok(*expected),
            "{infinitive} {conjugation_type:?} {pronoun:?}"
        );
    }
}

#[test]
fn imperative_has_no_yo_form() {
    for (_, verb) in verbs::all() {
        assert_eq!(
            conjugate(verb, ConjugationType::Imperative, SubjectPronoun::Yo),
            Err(ConjugationError::ImperativeYo)
        );
    }
}

#[test]
fn ending_and_root() {
    for (_, verb) in verbs::all() {
        let ending: InfinitiveEnding = verb.ending();
        let chars: Vec<char> = verb.infinitive.chars().collect();
        let suffix: String = chars[chars.len() - 2..]
            .iter()
            .collect::<String>()
            .replace('í', "i");
        assert_eq!(suffix, ending.as_str(), "{}", verb.infinitive);

        let root: String = chars[..chars.len() - 2].iter().collect();
        assert_eq!(verb.root(), root, "{}", verb.infinitive);
    }
}

#[test]
fn every_form_is_a_word() {
    for (_, verb) in verbs::all() {
        for conjugation_type in ConjugationType::ALL {
            for pronoun in SubjectPronoun::ALL {
                if let Ok(form) = conjugate(verb, *conjugation_type, *pronoun) {
                    assert!(
                        form.chars().count() > 1 && form.chars().all(char::is_alphabetic),
                        "{} {conjugation_type:?} {pronoun:?}: {form:?}",
                        verb.infinitive
                    );
                }
            }
        }
    }
}
