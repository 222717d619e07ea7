/*
model.rs

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

//! Grammatical vocabulary shared by the verb table, the conjugation engine, and the generator.
//!
//! The [`Verb`] record is static data: the whole verb table is built at compile time with the
//! `const fn` builder methods of [`Verb`].
//! The enumerations carry the indexes used to classify words in the statistics (see
//! [`stats_index`]), and the names used in the persisted game options (see
//! [`Facet::option_name`]).

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

/// Strong vowels. Weak vowels are `i` and `u`.
pub const STRONG_VOWELS: [char; 3] = ['a', 'e', 'o'];

/// Members of the four facets that the player can filter on in the game options.
pub trait Facet: Copy + Sized + 'static {
    /// All the members of the facet, in display order.
    const ALL: &'static [Self];

    /// Name of the member in the persisted game options.
    fn option_name(&self) -> &'static str;
}

/// Infinitive ending class.
#[derive(Serialize, Deserialize, FromRepr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum InfinitiveEnding {
    Ar = 0,
    Er = 1,
    Ir = 2,
}

impl InfinitiveEnding {
    /// Suffix of the infinitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfinitiveEnding::Ar => "ar",
            InfinitiveEnding::Er => "er",
            InfinitiveEnding::Ir => "ir",
        }
    }

    /// Index of the ending class in the statistics.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Facet for InfinitiveEnding {
    const ALL: &'static [Self] = &[
        InfinitiveEnding::Ar,
        InfinitiveEnding::Er,
        InfinitiveEnding::Ir,
    ];

    fn option_name(&self) -> &'static str {
        match self {
            InfinitiveEnding::Ar => "AR",
            InfinitiveEnding::Er => "ER",
            InfinitiveEnding::Ir => "IR",
        }
    }
}

/// Irregularity tags that select the rule branches of the conjugation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Irregularity {
    /// Preterit yo/él forms end in an unaccented `e`/`o` (pude, pudo).
    NoAccentOnPreterit,
    SpellingChangeIToAccentedI,
    /// Consonant change that keeps the pronunciation of the root (c/qu, z/c, g/gu, g/j).
    SpellingChangePhonetic,
    SpellingChangeUToAccentedU,
    /// Present yo form ends in `zco` (conozco).
    SpellingChangeYoZc,
    /// Present yo form ends in `go` (tengo, caigo).
    SpellingChangeYoGo,
    SpellingChangeY,
    StemChangeEToAccentedI,
    StemChangeEToI,
    StemChangeEToIe,
    /// Only adquirir and inquirir.
    StemChangeIToIe,
    StemChangeOToUe,
    StemChangeUToUe,
}

/// Coarse classification of the verbs, used for filtering.
#[derive(Serialize, Deserialize, FromRepr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum IrregularityCategory {
    Regular = 0,
    SpellingChange = 1,
    StemChange = 2,
    Irregular = 3,
}

impl IrregularityCategory {
    /// Index of the category in the statistics.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Facet for IrregularityCategory {
    const ALL: &'static [Self] = &[
        IrregularityCategory::Regular,
        IrregularityCategory::SpellingChange,
        IrregularityCategory::StemChange,
        IrregularityCategory::Irregular,
    ];

    fn option_name(&self) -> &'static str {
        match self {
            IrregularityCategory::Regular => "REGULAR",
            IrregularityCategory::SpellingChange => "SPELLING_CHANGE",
            IrregularityCategory::StemChange => "STEM_CHANGE",
            IrregularityCategory::Irregular => "IRREGULAR",
        }
    }
}

/// Tenses and moods, including the two non-personal forms.
#[derive(Serialize, Deserialize, FromRepr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum ConjugationType {
    Present = 0,
    Preterit = 1,
    Imperfect = 2,
    Conditional = 3,
    Future = 4,
    Imperative = 5,
    SubjunctivePresent = 6,
    SubjunctiveImperfect = 7,
    PastParticiple = 8,
    Gerund = 9,
}

impl ConjugationType {
    /// Text of the clue.
    pub fn label(&self) -> &'static str {
        match self {
            ConjugationType::Present => "present",
            ConjugationType::Preterit => "preterite",
            ConjugationType::Imperfect => "imperfect",
            ConjugationType::Conditional => "conditional",
            ConjugationType::Future => "future",
            ConjugationType::Imperative => "imperative",
            ConjugationType::SubjunctivePresent => "present subjunctive",
            ConjugationType::SubjunctiveImperfect => "imperfect subjunctive",
            ConjugationType::PastParticiple => "past participle",
            ConjugationType::Gerund => "gerund",
        }
    }

    /// Index of the tense in the statistics.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether the form depends on the subject pronoun.
    pub fn is_personal(&self) -> bool {
        !matches!(
            self,
            ConjugationType::PastParticiple | ConjugationType::Gerund
        )
    }
}

impl Facet for ConjugationType {
    const ALL: &'static [Self] = &[
        ConjugationType::Present,
        ConjugationType::Preterit,
        ConjugationType::Imperfect,
        ConjugationType::Conditional,
        ConjugationType::Future,
        ConjugationType::Imperative,
        ConjugationType::SubjunctivePresent,
        ConjugationType::SubjunctiveImperfect,
        ConjugationType::PastParticiple,
        ConjugationType::Gerund,
    ];

    fn option_name(&self) -> &'static str {
        match self {
            ConjugationType::Present => "PRESENT",
            ConjugationType::Preterit => "PRETERIT",
            ConjugationType::Imperfect => "IMPERFECT",
            ConjugationType::Conditional => "CONDITIONAL",
            ConjugationType::Future => "FUTURE",
            ConjugationType::Imperative => "IMPERATIVE",
            ConjugationType::SubjunctivePresent => "SUBJUNCTIVE_PRESENT",
            ConjugationType::SubjunctiveImperfect => "SUBJUNCTIVE_IMPERFECT",
            ConjugationType::PastParticiple => "PAST_PARTICIPLE",
            ConjugationType::Gerund => "GERUND",
        }
    }
}

/// Grammatical person.
///
/// The order of the variants is the order of the rows in the suffix tables.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectPronoun {
    Yo,
    Tu,
    ElEllaUsted,
    EllosEllasUstedes,
    Nosotros,
    Vosotros,
}

impl SubjectPronoun {
    /// Short text for the pronoun.
    pub fn text(&self) -> &'static str {
        match self {
            SubjectPronoun::Yo => "Yo",
            SubjectPronoun::Tu => "Tú",
            SubjectPronoun::ElEllaUsted => "Él/Ella/Ud.",
            SubjectPronoun::EllosEllasUstedes => "Ellos/Ellas/Uds.",
            SubjectPronoun::Nosotros => "Nosotros",
            SubjectPronoun::Vosotros => "Vosotros",
        }
    }

    pub fn is_third_person(&self) -> bool {
        matches!(
            self,
            SubjectPronoun::ElEllaUsted | SubjectPronoun::EllosEllasUstedes
        )
    }

    /// Row of the pronoun in the suffix tables.
    pub fn row(&self) -> usize {
        *self as usize
    }
}

impl Facet for SubjectPronoun {
    const ALL: &'static [Self] = &[
        SubjectPronoun::Yo,
        SubjectPronoun::Tu,
        SubjectPronoun::ElEllaUsted,
        SubjectPronoun::EllosEllasUstedes,
        SubjectPronoun::Nosotros,
        SubjectPronoun::Vosotros,
    ];

    fn option_name(&self) -> &'static str {
        match self {
            SubjectPronoun::Yo => "YO",
            SubjectPronoun::Tu => "TU",
            SubjectPronoun::ElEllaUsted => "EL_ELLA_USTED",
            SubjectPronoun::EllosEllasUstedes => "ELLOS_ELLAS_USTEDES",
            SubjectPronoun::Nosotros => "NOSOTROS",
            SubjectPronoun::Vosotros => "VOSOTROS",
        }
    }
}

/// Entry of the sparse override table of a verb.
pub type Override = (ConjugationType, SubjectPronoun, &'static str);

/// Spanish verb.
///
/// Two verbs are the same verb when they have the same infinitive.
#[derive(Debug, Clone, Copy)]
pub struct Verb {
    /// Dictionary form of the verb, such as `hablar`.
    pub infinitive: &'static str,

    /// English translation.
    pub translation: &'static str,

    /// Tags that select the rule branches of the conjugation engine.
    pub irregularities: &'static [Irregularity],

    /// How common the verb is, from 1 (default) to 3.
    pub frequency: u8,

    pub irregular_gerund: Option<&'static str>,
    pub irregular_past_participle: Option<&'static str>,

    /// Informal imperative (tú) when it is not the present él form (ten, pon, di).
    pub irregular_imperative_tu: Option<&'static str>,

    /// Root of the preterit when it differs from the dictionary root (tuv, dij).
    pub alt_preterit_root: Option<&'static str>,

    /// Root of the future and the conditional when it is not the infinitive (tendr, podr).
    pub alt_infinitive_root: Option<&'static str>,

    /// Explicit forms, consulted before any rule applies.
    pub overrides: &'static [Override],
}

impl Verb {
    pub const fn new(infinitive: &'static str, translation: &'static str) -> Self {
        Self {
            infinitive,
            translation,
            irregularities: &[],
            frequency: 1,
            irregular_gerund: None,
            irregular_past_participle: None,
            irregular_imperative_tu: None,
            alt_preterit_root: None,
            alt_infinitive_root: None,
            overrides: &[],
        }
    }

    pub const fn frequency(self, frequency: u8) -> Self {
        Self { frequency, ..self }
    }

    pub const fn irregularities(self, irregularities: &'static [Irregularity]) -> Self {
        Self {
            irregularities,
            ..self
        }
    }

    pub const fn gerund(self, gerund: &'static str) -> Self {
        Self {
            irregular_gerund: Some(gerund),
            ..self
        }
    }

    pub const fn past_participle(self, past_participle: &'static str) -> Self {
        Self {
            irregular_past_participle: Some(past_participle),
            ..self
        }
    }

    pub const fn imperative_tu(self, imperative_tu: &'static str) -> Self {
        Self {
            irregular_imperative_tu: Some(imperative_tu),
            ..self
        }
    }

    pub const fn preterit_root(self, root: &'static str) -> Self {
        Self {
            alt_preterit_root: Some(root),
            ..self
        }
    }

    pub const fn future_root(self, root: &'static str) -> Self {
        Self {
            alt_infinitive_root: Some(root),
            ..self
        }
    }

    pub const fn overrides(self, overrides: &'static [Override]) -> Self {
        Self { overrides, ..self }
    }

    /// Ending class, derived from the last two letters of the infinitive.
    ///
    /// Infinitives that end in `ír` (oír, reír) are in the [`InfinitiveEnding::Ir`] class.
    pub fn ending(&self) -> InfinitiveEnding {
        if self.infinitive.ends_with("ar") {
            InfinitiveEnding::Ar
        } else if self.infinitive.ends_with("er") {
            InfinitiveEnding::Er
        } else {
            InfinitiveEnding::Ir
        }
    }

    /// Dictionary root: the infinitive without its last two letters.
    pub fn root(&self) -> &'static str {
        match self.infinitive.char_indices().rev().nth(1) {
            Some((i, _)) => &self.infinitive[..i],
            None => "",
        }
    }

    /// Whether the infinitive ends with an accented `ír`.
    pub fn is_ir_with_accent(&self) -> bool {
        self.infinitive.ends_with("ír")
    }

    pub fn has(&self, irregularity: Irregularity) -> bool {
        self.irregularities.contains(&irregularity)
    }

    /// Explicit form for the given tense and person, if the verb defines one.
    pub fn override_for(
        &self,
        conjugation_type: ConjugationType,
        pronoun: SubjectPronoun,
    ) -> Option<&'static str> {
        self.overrides
            .iter()
            .find(|(t, p, _)| *t == conjugation_type && *p == pronoun)
            .map(|(_, _, form)| *form)
    }
}

impl PartialEq for Verb {
    fn eq(&self, other: &Self) -> bool {
        self.infinitive == other.infinitive
    }
}

impl Eq for Verb {}

/// Build the statistics index of a grammatical combination.
pub fn stats_index(
    category: IrregularityCategory,
    ending: InfinitiveEnding,
    conjugation_type: ConjugationType,
) -> usize {
    ((category.index() * 3) + ending.index()) * 10 + conjugation_type.index()
}

/// Decode a statistics index built by [`stats_index`].
pub fn stats_coordinates(
    index: usize,
) -> Option<(IrregularityCategory, InfinitiveEnding, ConjugationType)> {
    let conjugation_type: ConjugationType = ConjugationType::from_repr(index % 10)?;
    let ending: InfinitiveEnding = InfinitiveEnding::from_repr((index / 10) % 3)?;
    let category: IrregularityCategory = IrregularityCategory::from_repr(index / 30)?;
    Some((category, ending, conjugation_type))
}
