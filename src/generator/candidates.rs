/*
candidates.rs

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

//! Select the words of a new puzzle.
//!
//! [`sample`] draws verbs from the verb table according to the game options, conjugates them,
//! and returns a pool of [`WordCandidate`] objects for the layout engine.
//! The pool is larger than what usually fits in the grid, and the draws favor frequent verbs.

use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

use crate::conjugation::{ConjugationError, conjugate, non_personal_form};
use crate::model::{
    ConjugationType, Facet, InfinitiveEnding, IrregularityCategory, SubjectPronoun, Verb,
    stats_index,
};
use crate::options::GameOptions;
use crate::verbs;

/// Share of the generated candidates that is kept after the last random draw.
const FINAL_SHARE: f64 = 0.8;

/// Margin on the number of verbs drawn from each (ending, category) table.
const VERB_MARGIN: f64 = 1.2;

const EL_ELLA_USTED_LABELS: [&str; 3] = ["Él", "Ella", "Usted"];
const ELLOS_ELLAS_USTEDES_LABELS: [&str; 3] = ["Ellos", "Ellas", "Ustedes"];

/// Conjugated verb that can be placed on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCandidate {
    /// Conjugated form.
    pub word: String,

    pub infinitive: &'static str,
    pub translation: &'static str,
    pub ending: InfinitiveEnding,
    pub category: IrregularityCategory,
    pub conjugation_type: ConjugationType,

    /// None for the gerund and the past participle.
    pub pronoun: Option<SubjectPronoun>,

    /// Subject pronoun shown in the clue.
    pub person_label: String,
}

impl WordCandidate {
    /// Create a candidate for a verb of the table.
    pub fn new(
        verb: &'static Verb,
        category: IrregularityCategory,
        conjugation_type: ConjugationType,
        pronoun: Option<SubjectPronoun>,
        word: String,
        person_label: String,
    ) -> Self {
        Self {
            word,
            infinitive: verb.infinitive,
            translation: verb.translation,
            ending: verb.ending(),
            category,
            conjugation_type,
            pronoun,
            person_label,
        }
    }

    /// Key that identifies the grammatical combination.
    ///
    /// Different combinations can give the same word (imperative and subjunctive, sentar and
    /// sentir), so the word itself cannot be used as the key.
    pub fn key(&self) -> String {
        let pronoun: &str = match self.pronoun {
            Some(p) => p.option_name(),
            None => "na",
        };
        format!(
            "{}|{}|{}",
            self.infinitive,
            self.conjugation_type.option_name(),
            pronoun
        )
    }

    pub fn stats_index(&self) -> usize {
        stats_index(self.category, self.ending, self.conjugation_type)
    }

    pub fn tense_label(&self) -> &'static str {
        self.conjugation_type.label()
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Number of candidates to request for a grid of the given size.
pub fn target_word_count(width: usize, height: usize) -> usize {
    width * height / 5 + 20
}

/// Randomly pick `count` items, or return all of them when there are not enough.
fn random_selection<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    if items.len() <= count {
        return items.to_vec();
    }
    items.choose_multiple(rng, count).cloned().collect()
}

/// Draw about `count` verbs from a table, favoring the frequent ones.
fn random_verb_selection<R: Rng + ?Sized>(
    verbs: &'static [Verb],
    count: usize,
    rng: &mut R,
) -> Vec<&'static Verb> {
    let mut by_frequency: BTreeMap<u8, Vec<&'static Verb>> = BTreeMap::new();
    for verb in verbs {
        by_frequency.entry(verb.frequency).or_default().push(verb);
    }

    let mut selected: Vec<&'static Verb> = Vec::new();
    for (frequency, group) in by_frequency {
        let factor: f64 = match frequency {
            f if f > 2 => 1.5,
            2 => 1.2,
            _ => 1.0,
        };
        let n: usize =
            (factor * count as f64 * group.len() as f64 / verbs.len().max(1) as f64).round() as usize;
        selected.extend(random_selection(&group, n, rng));
    }
    selected
}

/// Draw the verbs for each enabled irregularity category.
fn qualifying_verbs<R: Rng + ?Sized>(
    options: &GameOptions,
    count: usize,
    rng: &mut R,
) -> Vec<(IrregularityCategory, Vec<&'static Verb>)> {
    let endings: Vec<InfinitiveEnding> = options.selected();
    let categories: Vec<IrregularityCategory> = options.selected();

    // The irregular -ar table is small and always taken whole, so it does not count as a
    // combination.
    let includes_irregular_ar: bool = endings.contains(&InfinitiveEnding::Ar)
        && categories.contains(&IrregularityCategory::Irregular);
    let combinations: usize = (endings.len() * categories.len())
        .saturating_sub(usize::from(includes_irregular_ar))
        .max(1);
    let per_combination: usize = (VERB_MARGIN * count as f64 / combinations as f64) as usize;
    debug!("{combinations} verb tables, {per_combination} verbs per table");

    categories
        .iter()
        .map(|category| {
            let mut selected: Vec<&'static Verb> = Vec::new();
            for ending in &endings {
                let table: &'static [Verb] = verbs::catalog(*ending, *category);
                if *ending == InfinitiveEnding::Ar && *category == IrregularityCategory::Irregular {
                    selected.extend(table.iter());
                } else {
                    selected.extend(random_verb_selection(table, per_combination, rng));
                }
            }
            (*category, selected)
        })
        .collect()
}

/// Persons for the imperative: yo is replaced by tú when it is the only enabled person.
fn imperative_pronouns(pronouns: &[SubjectPronoun]) -> Vec<SubjectPronoun> {
    if pronouns == [SubjectPronoun::Yo] {
        vec![SubjectPronoun::Tu]
    } else {
        pronouns
            .iter()
            .filter(|p| **p != SubjectPronoun::Yo)
            .copied()
            .collect()
    }
}

/// Return the pronoun shown in the clue.
///
/// Third persons are shown as one of their pronouns at random, except in the imperative, which
/// is a formal command.
fn person_label<R: Rng + ?Sized>(
    conjugation_type: ConjugationType,
    pronoun: SubjectPronoun,
    rng: &mut R,
) -> String {
    let is_imperative: bool = conjugation_type == ConjugationType::Imperative;
    let label: &str = match pronoun {
        SubjectPronoun::ElEllaUsted if is_imperative => "Usted",
        SubjectPronoun::EllosEllasUstedes if is_imperative => "Ustedes",
        SubjectPronoun::ElEllaUsted => EL_ELLA_USTED_LABELS[rng.random_range(0..3)],
        SubjectPronoun::EllosEllasUstedes => ELLOS_ELLAS_USTEDES_LABELS[rng.random_range(0..3)],
        _ => pronoun.text(),
    };
    label.to_string()
}

/// Build the candidate pool for a new puzzle.
///
/// The pool contains at most `target_count` candidates.
/// When the options are too narrow, the pool is smaller: this is not an error.
pub fn sample<R: Rng + ?Sized>(
    options: &GameOptions,
    target_count: usize,
    rng: &mut R,
) -> Vec<WordCandidate> {
    let pool_target: f64 = (target_count as f64 / FINAL_SHARE).round();
    let verb_pools: Vec<(IrregularityCategory, Vec<&'static Verb>)> =
        qualifying_verbs(options, pool_target as usize, rng);

    let conjugation_types: Vec<ConjugationType> = options.selected();
    let pronouns: Vec<SubjectPronoun> = options.selected();
    let pronouns_for_imperative: Vec<SubjectPronoun> = imperative_pronouns(&pronouns);

    let ideal_per_category: f64 = pool_target / verb_pools.len().max(1) as f64;
    let mut candidates: Vec<WordCandidate> = Vec::new();

    for (category, pool) in &verb_pools {
        if pool.is_empty() {
            continue;
        }
        let verb_multiplier: f64 = (ideal_per_category / pool.len() as f64).max(1.0);
        let pronouns_per_verb: usize = ((verb_multiplier / conjugation_types.len() as f64).round()
            as usize)
            .clamp(1, pronouns.len());
        let types_per_verb: usize = ((verb_multiplier / pronouns_per_verb as f64).round() as usize)
            .clamp(1, conjugation_types.len());
        debug!(
            "{category:?}: {} verbs, {types_per_verb} tenses and {pronouns_per_verb} persons per verb",
            pool.len()
        );

        for &verb in pool {
            let bonus: usize = usize::from(verb.frequency > 2);
            for conjugation_type in random_selection(&conjugation_types, types_per_verb + bonus, rng)
            {
                if !conjugation_type.is_personal() {
                    if let Some(word) = non_personal_form(verb, conjugation_type) {
                        candidates.push(WordCandidate::new(
                            verb,
                            *category,
                            conjugation_type,
                            None,
                            word,
                            String::new(),
                        ));
                    }
                    continue;
                }

                let relevant: &[SubjectPronoun] = if conjugation_type == ConjugationType::Imperative
                {
                    &pronouns_for_imperative
                } else {
                    &pronouns
                };
                for pronoun in random_selection(relevant, pronouns_per_verb + bonus, rng) {
                    let word: Result<String, ConjugationError> =
                        conjugate(verb, conjugation_type, pronoun);
                    match word {
                        Ok(word) => {
                            let label: String = person_label(conjugation_type, pronoun, rng);
                            candidates.push(WordCandidate::new(
                                verb,
                                *category,
                                conjugation_type,
                                Some(pronoun),
                                word,
                                label,
                            ));
                        }
                        Err(e) => warn!("{} {conjugation_type:?} {pronoun:?}: {e}", verb.infinitive),
                    }
                }
            }
        }
    }

    // Keep less than all the candidates so that the same long words do not always win.
    let final_count: usize = target_count.min((FINAL_SHARE * candidates.len() as f64) as usize);
    debug!(
        "Generated {} candidates, keeping {final_count}",
        candidates.len()
    );
    random_selection(&candidates, final_count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn target_count_from_grid_size() {
        assert_eq!(target_word_count(10, 10), 40);
        assert_eq!(target_word_count(0, 0), 20);
    }

    #[test]
    fn pool_is_bounded_and_unique() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let options: GameOptions = GameOptions::empty();
        let candidates: Vec<WordCandidate> = sample(&options, 60, &mut rng);

        assert!(!candidates.is_empty());
        assert!(candidates.len() <= 60);
        let keys: HashSet<String> = candidates.iter().map(WordCandidate::key).collect();
        assert_eq!(keys.len(), candidates.len());
    }

    #[test]
    fn pool_follows_options() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let mut options: GameOptions = GameOptions::empty();
        options.enable(InfinitiveEnding::Er, true);
        options.enable(IrregularityCategory::StemChange, true);
        options.enable(ConjugationType::Preterit, true);
        options.enable(SubjectPronoun::Nosotros, true);

        let candidates: Vec<WordCandidate> = sample(&options, 30, &mut rng);
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert_eq!(c.ending, InfinitiveEnding::Er);
            assert_eq!(c.category, IrregularityCategory::StemChange);
            assert_eq!(c.conjugation_type, ConjugationType::Preterit);
            assert_eq!(c.pronoun, Some(SubjectPronoun::Nosotros));
            assert_eq!(c.person_label, "Nosotros");
            assert!(c.word.ends_with("imos"), "{}", c.word);
        }
    }

    #[test]
    fn imperative_never_uses_yo() {
        assert_eq!(
            imperative_pronouns(&[SubjectPronoun::Yo]),
            vec![SubjectPronoun::Tu]
        );
        assert_eq!(
            imperative_pronouns(&[SubjectPronoun::Yo, SubjectPronoun::Nosotros]),
            vec![SubjectPronoun::Nosotros]
        );

        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let mut options: GameOptions = GameOptions::empty();
        options.enable(ConjugationType::Imperative, true);
        options.enable(SubjectPronoun::Yo, true);
        let candidates: Vec<WordCandidate> = sample(&options, 40, &mut rng);
        assert!(!candidates.is_empty());
        assert!(
            candidates
                .iter()
                .all(|c| c.pronoun == Some(SubjectPronoun::Tu))
        );
    }

    #[test]
    fn non_personal_forms_have_no_pronoun() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut options: GameOptions = GameOptions::empty();
        options.enable(ConjugationType::Gerund, true);
        let candidates: Vec<WordCandidate> = sample(&options, 20, &mut rng);
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert_eq!(c.pronoun, None);
            assert!(c.person_label.is_empty());
            assert!(c.key().ends_with("|GERUND|na"));
        }
    }

    #[test]
    fn same_seed_same_pool() {
        let options: GameOptions = GameOptions::default();
        let a: Vec<WordCandidate> = sample(&options, 40, &mut StdRng::seed_from_u64(42));
        let b: Vec<WordCandidate> = sample(&options, 40, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn frequent_verbs_are_favored() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let selected: Vec<&Verb> = random_verb_selection(verbs::ar::REGULAR, 40, &mut rng);
        assert!(!selected.is_empty());
        assert!(selected.len() <= verbs::ar::REGULAR.len());
        let unique: HashSet<&str> = selected.iter().map(|v| v.infinitive).collect();
        assert_eq!(unique.len(), selected.len());
    }

    #[test]
    fn key_format() {
        let (category, verb) = verbs::find("hablar").expect("hablar in table");
        let c: WordCandidate = WordCandidate::new(
            verb,
            category,
            ConjugationType::SubjunctivePresent,
            Some(SubjectPronoun::EllosEllasUstedes),
            "hablen".to_string(),
            "Ellas".to_string(),
        );
        assert_eq!(c.key(), "hablar|SUBJUNCTIVE_PRESENT|ELLOS_ELLAS_USTEDES");
        assert_eq!(c.stats_index(), 6);
    }
}
