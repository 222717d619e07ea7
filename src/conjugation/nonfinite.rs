/*
nonfinite.rs

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

//! Gerund and past participle.

use super::spelling::{ends_with_strong_vowel, ir_altered_root, last_char};
use crate::model::{InfinitiveEnding, Verb};

pub fn past_participle(verb: &Verb) -> String {
    if let Some(form) = verb.irregular_past_participle {
        return form.to_string();
    }
    let root: &str = verb.root();
    match verb.ending() {
        InfinitiveEnding::Ar => format!("{root}ado"),
        // leído, oído
        _ if ends_with_strong_vowel(root) => format!("{root}ído"),
        _ => format!("{root}ido"),
    }
}

pub fn gerund(verb: &Verb) -> String {
    if let Some(form) = verb.irregular_gerund {
        return form.to_string();
    }
    let root: &str = verb.root();
    if verb.ending() == InfinitiveEnding::Ar {
        return format!("{root}ando");
    }

    let altered_root: String = if verb.ending() == InfinitiveEnding::Ir {
        ir_altered_root(verb, root)
    } else {
        root.to_string()
    };
    let suffix: &str = match last_char(&altered_root) {
        // yendo, cayendo, construyendo
        None => "yendo",
        Some('a' | 'e' | 'o' | 'u')
            if !altered_root.ends_with("qu") && !altered_root.ends_with("gu") =>
        {
            "yendo"
        }
        Some('i' | 'ñ') => "endo",
        _ => "iendo",
    };
    altered_root + suffix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::find;

    fn verb(infinitive: &str) -> &'static Verb {
        find(infinitive).expect("verb in table").1
    }

    #[test]
    fn participles() {
        assert_eq!(past_participle(verb("hablar")), "hablado");
        assert_eq!(past_participle(verb("comer")), "comido");
        assert_eq!(past_participle(verb("leer")), "leído");
        assert_eq!(past_participle(verb("oír")), "oído");
        assert_eq!(past_participle(verb("ir")), "ido");
        assert_eq!(past_participle(verb("volver")), "vuelto");
    }

    #[test]
    fn gerunds() {
        assert_eq!(gerund(verb("hablar")), "hablando");
        assert_eq!(gerund(verb("comer")), "comiendo");
        assert_eq!(gerund(verb("ir")), "yendo");
        assert_eq!(gerund(verb("caer")), "cayendo");
        assert_eq!(gerund(verb("dormir")), "durmiendo");
        assert_eq!(gerund(verb("pedir")), "pidiendo");
        assert_eq!(gerund(verb("reír")), "riendo");
        assert_eq!(gerund(verb("seguir")), "siguiendo");
        assert_eq!(gerund(verb("poder")), "pudiendo");
    }
}
