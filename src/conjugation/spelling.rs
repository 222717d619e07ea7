/*
spelling.rs

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

//! String helpers shared by the tense rules.
//!
//! All the functions work on characters, not bytes: Spanish roots and suffixes contain accented
//! letters.

use crate::model::{Irregularity, STRONG_VOWELS, Verb};

const VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú'];

/// Vowels that carry the stress, including the accented weak vowels.
const STRESSED_VOWELS: [char; 8] = ['a', 'e', 'o', 'á', 'é', 'í', 'ó', 'ú'];

pub fn last_char(text: &str) -> Option<char> {
    text.chars().next_back()
}

pub fn first_char(text: &str) -> Option<char> {
    text.chars().next()
}

/// Return `text` without its last `n` characters.
pub fn drop_last(text: &str, n: usize) -> &str {
    if n == 0 {
        return text;
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &text[..i],
        None => "",
    }
}

/// Return the last `n` characters of `text`.
pub fn take_last(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &text[i..],
        None => text,
    }
}

/// Return `text` without its first character.
pub fn drop_first(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.as_str()
}

pub fn any_vowels(text: &str) -> bool {
    text.chars().any(|c| VOWELS.contains(&c))
}

fn any_stressed_vowels(text: &str) -> bool {
    text.chars().any(|c| STRESSED_VOWELS.contains(&c))
}

pub fn ends_with_strong_vowel(text: &str) -> bool {
    last_char(text).is_some_and(|c| STRONG_VOWELS.contains(&c))
}

/// Replace the last occurrence of `old` in `text`.
///
/// The text is returned unchanged when it does not contain `old`.
pub fn replace_in_last_syllable(text: &str, old: &str, new: &str) -> String {
    match text.rfind(old) {
        Some(i) => format!("{}{}{}", &text[..i], new, &text[i + old.len()..]),
        None => text.to_string(),
    }
}

/// Whether the root has a single syllable made of weak vowels (gui, ri, fi).
///
/// The written accent is dropped from the vosotros suffix of those roots (guiais, riais).
pub fn is_weak_one_syllable_root(root: &str) -> bool {
    !any_vowels(drop_last(root, 2))
        && !any_stressed_vowels(take_last(root, 2))
        && any_vowels(take_last(root, 1))
}

/// Remove the written accent from the first letter of a suffix.
pub fn remove_starting_accent(text: &str) -> String {
    let mut chars = text.chars();
    let first: char = match chars.next() {
        Some('á') => 'a',
        Some('é') => 'e',
        Some('í') => 'i',
        Some('ó') => 'o',
        Some(c) => c,
        None => return String::new(),
    };
    let mut result: String = String::with_capacity(text.len());
    result.push(first);
    result.push_str(chars.as_str());
    result
}

/// Adjust the last letters of a root so that it keeps its pronunciation in front of a suffix.
///
/// `old_suffix` is the suffix the root is normally attached to (the infinitive ending, or `o`
/// for roots taken from the present yo form) and `new_suffix` the one it receives.
pub fn root_with_spelling_change(root: &str, old_suffix: &str, new_suffix: &str) -> String {
    let old_is_hard: bool = matches!(first_char(old_suffix), Some('a' | 'o'));
    let new_first: Option<char> = first_char(new_suffix);

    // y-insertion: construir -> construyo, huir -> huyes
    if matches!(last_char(root), Some('o' | 'u'))
        && !root.ends_with("gu")
        && !root.ends_with("qu")
        && (old_suffix.starts_with("ir") || old_suffix.starts_with("ír"))
        && !matches!(new_first, Some('i' | 'í' | 'y'))
    {
        return format!("{root}y");
    }

    if old_is_hard && matches!(new_first, Some('e' | 'é')) {
        if root.ends_with('c') {
            return format!("{}qu", drop_last(root, 1));
        }
        if root.ends_with('z') {
            return format!("{}c", drop_last(root, 1));
        }
        if root.ends_with('g') {
            return format!("{root}u");
        }
        if root.ends_with("gu") {
            return format!("{}ü", drop_last(root, 1));
        }
    } else if !old_is_hard && matches!(new_first, Some('a' | 'á' | 'o')) {
        if root.ends_with("qu") {
            return format!("{}c", drop_last(root, 2));
        }
        if root.ends_with('c') {
            return format!("{}z", drop_last(root, 1));
        }
        if root.ends_with("gu") {
            return drop_last(root, 1).to_string();
        }
        if root.ends_with('g') {
            return format!("{}j", drop_last(root, 1));
        }
    }
    root.to_string()
}

/// Apply the vowel change of -ir stem-changing verbs in the tenses where the stress does not
/// fall on the root (sintió, durmiendo, pidió).
pub fn ir_altered_root(verb: &Verb, root: &str) -> String {
    if verb.has(Irregularity::StemChangeEToI)
        || verb.has(Irregularity::StemChangeEToAccentedI)
        || verb.has(Irregularity::StemChangeEToIe)
    {
        replace_in_last_syllable(root, "e", "i")
    } else if verb.has(Irregularity::StemChangeOToUe) {
        replace_in_last_syllable(root, "o", "u")
    } else {
        root.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_slicing() {
        assert_eq!(drop_last("oír", 2), "o");
        assert_eq!(drop_last("ab", 5), "");
        assert_eq!(take_last("reír", 2), "ír");
        assert_eq!(take_last("a", 3), "a");
        assert_eq!(drop_first("ímos"), "mos");
    }

    #[test]
    fn replace_last_occurrence() {
        assert_eq!(replace_in_last_syllable("pedir", "e", "i"), "pidir");
        assert_eq!(replace_in_last_syllable("repet", "e", "i"), "repit");
        assert_eq!(replace_in_last_syllable("ten", "o", "u"), "ten");
    }

    #[test]
    fn hard_to_soft() {
        assert_eq!(root_with_spelling_change("busc", "ar", "é"), "busqu");
        assert_eq!(root_with_spelling_change("cruz", "ar", "é"), "cruc");
        assert_eq!(root_with_spelling_change("lleg", "ar", "é"), "llegu");
        assert_eq!(root_with_spelling_change("averigu", "ar", "é"), "averigü");
        assert_eq!(root_with_spelling_change("habl", "ar", "é"), "habl");
    }

    #[test]
    fn soft_to_hard() {
        assert_eq!(root_with_spelling_change("delinqu", "ir", "o"), "delinc");
        assert_eq!(root_with_spelling_change("venc", "er", "o"), "venz");
        assert_eq!(root_with_spelling_change("distingu", "ir", "o"), "disting");
        assert_eq!(root_with_spelling_change("escog", "er", "a"), "escoj");
    }

    #[test]
    fn y_insertion() {
        assert_eq!(root_with_spelling_change("constru", "ir", "o"), "construy");
        assert_eq!(root_with_spelling_change("constru", "ir", "imos"), "constru");
        assert_eq!(root_with_spelling_change("segu", "ir", "es"), "segu");
    }

    #[test]
    fn weak_roots() {
        assert!(is_weak_one_syllable_root("gui"));
        assert!(is_weak_one_syllable_root("ri"));
        assert!(!is_weak_one_syllable_root("habl"));
        assert!(!is_weak_one_syllable_root("envi"));
        assert_eq!(remove_starting_accent("áis"), "ais");
        assert_eq!(remove_starting_accent("ais"), "ais");
    }
}
