/*
ir.rs

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

//! Verbs ending in `-ir`, one table per irregularity category.

use crate::model::{ConjugationType as T, Irregularity as I, SubjectPronoun as P, Verb};

pub static REGULAR: &[Verb] = &[
    Verb::new("abatir", "shoot down, take down"),
    Verb::new("aburrir", "bore, tire"),
    Verb::new("acudir", "come, turn to"),
    Verb::new("admitir", "admit"),
    Verb::new("añadir", "add"),
    Verb::new("aplaudir", "applaud, clap"),
    Verb::new("asistir", "attend"),
    Verb::new("asumir", "assume"),
    Verb::new("coincidir", "coincide"),
    Verb::new("compartir", "share"),
    Verb::new("confundir", "confuse"),
    Verb::new("consistir", "consist of"),
    Verb::new("consumir", "consume"),
    Verb::new("cumplir", "achieve"),
    Verb::new("decidir", "decide"),
    Verb::new("definir", "define"),
    Verb::new("deprimir", "depress"),
    Verb::new("discutir", "discuss"),
    Verb::new("disuadir", "dissuade"),
    Verb::new("dividir", "divide"),
    Verb::new("escupir", "spit"),
    Verb::new("existir", "exist"),
    Verb::new("imprimir", "print"),
    Verb::new("insistir", "insist"),
    Verb::new("interrumpir", "interrupt"),
    Verb::new("invadir", "invade"),
    Verb::new("ocurrir", "occur"),
    Verb::new("omitir", "omit"),
    Verb::new("partir", "cut, split"),
    Verb::new("percibir", "perceive"),
    Verb::new("permitir", "permit"),
    Verb::new("persistir", "persist"),
    Verb::new("persuadir", "persuade"),
    Verb::new("pulir", "polish"),
    Verb::new("recibir", "receive"),
    Verb::new("recurrir", "turn to, resort to"),
    Verb::new("sacudir", "shake, beat"),
    Verb::new("subir", "go up, climb").frequency(3),
    Verb::new("sufrir", "suffer"),
    Verb::new("suprimir", "eliminate, suppress"),
    Verb::new("unir", "join, unite"),
    Verb::new("vivir", "live").frequency(3),
];

pub static SPELLING_CHANGE: &[Verb] = &[
    Verb::new("bullir", "boil, seethe").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("delinquir", "commit a crime").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("dirigir", "manage, direct").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("distinguir", "distinguish").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("esparcir", "scatter, spread").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("exigir", "demand, require").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("fingir", "feign, pretend").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("gruñir", "grumble, grunt, growl").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("sumergir", "submerge").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("surgir", "arise").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("concluir", "conclude").irregularities(&[I::SpellingChangeY]),
    Verb::new("construir", "build").irregularities(&[I::SpellingChangeY]),
    Verb::new("constituir", "constitute").irregularities(&[I::SpellingChangeY]),
    Verb::new("contribuir", "contribute").irregularities(&[I::SpellingChangeY]),
    Verb::new("destruir", "destroy").irregularities(&[I::SpellingChangeY]),
    Verb::new("diluir", "dilute").irregularities(&[I::SpellingChangeY]),
    Verb::new("distribuir", "distribute").irregularities(&[I::SpellingChangeY]),
    Verb::new("excluir", "exclude").irregularities(&[I::SpellingChangeY]),
    Verb::new("fluir", "flow").irregularities(&[I::SpellingChangeY]),
    Verb::new("huir", "escape, flee").irregularities(&[I::SpellingChangeY]),
    Verb::new("incluir", "include").irregularities(&[I::SpellingChangeY]),
    Verb::new("influir", "influence").irregularities(&[I::SpellingChangeY]),
    Verb::new("instruir", "instruct").irregularities(&[I::SpellingChangeY]),
    Verb::new("obstruir", "obstruct").irregularities(&[I::SpellingChangeY]),
    Verb::new("prohibir", "prohibit").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("asir", "seize, grasp").irregularities(&[I::SpellingChangeYoGo]),
    Verb::new("desoír", "ignore").irregularities(&[I::SpellingChangeYoGo]).future_root("desoir"),
    Verb::new("oír", "hear")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo])
        .future_root("oir"),
    Verb::new("salir", "go out, leave")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo])
        .future_root("saldr")
        .imperative_tu("sal"),
    Verb::new("reunir", "bring together").irregularities(&[I::SpellingChangeUToAccentedU]),
];

pub static STEM_CHANGE: &[Verb] = &[
    Verb::new("colegir", "deduce, gather")
        .irregularities(&[I::StemChangeEToI, I::SpellingChangePhonetic]),
    Verb::new("competir", "compete").irregularities(&[I::StemChangeEToI]),
    Verb::new("concebir", "conceive").irregularities(&[I::StemChangeEToI]),
    Verb::new("conseguir", "get").frequency(2).irregularities(&[I::StemChangeEToI]),
    Verb::new("constreñir", "constrain").irregularities(&[I::StemChangeEToI]),
    Verb::new("corregir", "correct")
        .irregularities(&[I::StemChangeEToI, I::SpellingChangePhonetic]),
    Verb::new("derretir", "melt").irregularities(&[I::StemChangeEToI]),
    Verb::new("despedir", "say goodbye").frequency(2).irregularities(&[I::StemChangeEToI]),
    Verb::new("desvestir", "undress").irregularities(&[I::StemChangeEToI]),
    Verb::new("elegir", "choose, elect")
        .irregularities(&[I::SpellingChangePhonetic, I::StemChangeEToI]),
    Verb::new("estreñir", "constipate").irregularities(&[I::StemChangeEToI]),
    Verb::new("gemir", "groan").irregularities(&[I::StemChangeEToI]),
    Verb::new("impedir", "impede").irregularities(&[I::StemChangeEToI]),
    Verb::new("medir", "measure").irregularities(&[I::StemChangeEToI]),
    Verb::new("pedir", "ask for").frequency(3).irregularities(&[I::StemChangeEToI]),
    Verb::new("perseguir", "pursue")
        .irregularities(&[I::StemChangeEToI, I::SpellingChangePhonetic]),
    Verb::new("rendir", "produce, defeat")
        .irregularities(&[I::StemChangeEToI, I::SpellingChangePhonetic]),
    Verb::new("repetir", "repeat").irregularities(&[I::StemChangeEToI]),
    Verb::new("seguir", "follow")
        .frequency(3)
        .irregularities(&[I::StemChangeEToI, I::SpellingChangePhonetic]),
    Verb::new("servir", "serve").irregularities(&[I::StemChangeEToI]),
    Verb::new("vestir", "dress, wear").frequency(2).irregularities(&[I::StemChangeEToI]),
    Verb::new("reír", "laugh")
        .frequency(2)
        .irregularities(&[I::StemChangeEToAccentedI])
        .future_root("reir"),
    Verb::new("freír", "fry")
        .irregularities(&[I::StemChangeEToAccentedI])
        .future_root("freir")
        .past_participle("frito"),
    Verb::new("sonreír", "smile")
        .irregularities(&[I::StemChangeEToAccentedI])
        .future_root("sonreir"),
    Verb::new("dormir", "sleep").frequency(3).irregularities(&[I::StemChangeOToUe]),
    Verb::new("morir", "die").irregularities(&[I::StemChangeOToUe]).past_participle("muerto"),
    Verb::new("adquirir", "acquire, purchase").irregularities(&[I::StemChangeIToIe]),
    Verb::new("inquirir", "inquire into, investigate").irregularities(&[I::StemChangeIToIe]),
    Verb::new("advertir", "warn, advise, notice").irregularities(&[I::StemChangeEToIe]),
    Verb::new("asentir", "agree, assent, nod").irregularities(&[I::StemChangeEToIe]),
    Verb::new("consentir", "allow").irregularities(&[I::StemChangeEToIe]),
    Verb::new("convertir", "turn into").irregularities(&[I::StemChangeEToIe]),
    Verb::new("desmentir", "deny").irregularities(&[I::StemChangeEToIe]),
    Verb::new("diferir", "differ").irregularities(&[I::StemChangeEToIe]),
    Verb::new("digerir", "digest").irregularities(&[I::StemChangeEToIe]),
    Verb::new("discernir", "discern").irregularities(&[I::StemChangeEToIe]),
    Verb::new("disentir", "disagree, dissent").irregularities(&[I::StemChangeEToIe]),
    Verb::new("divertir", "amuse, entertain").irregularities(&[I::StemChangeEToIe]),
    Verb::new("herir", "wound").irregularities(&[I::StemChangeEToIe]),
    Verb::new("hervir", "boil").irregularities(&[I::StemChangeEToIe]),
    Verb::new("inferir", "infer").irregularities(&[I::StemChangeEToIe]),
    Verb::new("interferir", "interfere").irregularities(&[I::StemChangeEToIe]),
    Verb::new("invertir", "invert, invest").irregularities(&[I::StemChangeEToIe]),
    Verb::new("mentir", "lie").frequency(2).irregularities(&[I::StemChangeEToIe]),
    Verb::new("preferir", "prefer").frequency(2).irregularities(&[I::StemChangeEToIe]),
    Verb::new("referir", "refer").irregularities(&[I::StemChangeEToIe]),
    Verb::new("requerir", "require").irregularities(&[I::StemChangeEToIe]),
    Verb::new("sentir", "feel").frequency(3).irregularities(&[I::StemChangeEToIe]),
    Verb::new("sugerir", "suggest, hint").irregularities(&[I::StemChangeEToIe]),
    Verb::new("transferir", "transfer").irregularities(&[I::StemChangeEToIe]),
];

pub static IRREGULAR: &[Verb] = &[
    Verb::new("abrir", "open").frequency(3).past_participle("abierto"),
    Verb::new("cubrir", "cover").frequency(2).past_participle("cubierto"),
    Verb::new("describir", "describe").past_participle("descrito"),
    Verb::new("descubrir", "discover").past_participle("descubierto"),
    Verb::new("escribir", "write").frequency(3).past_participle("escrito"),
    Verb::new("inscribir", "engrave, enroll, record").past_participle("inscrito"),
    Verb::new("pudrir", "rot, decay").past_participle("podrido"),
    Verb::new("subscribir", "subscribe").past_participle("subscrito"),
    Verb::new("bendecir", "bless")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToI, I::NoAccentOnPreterit])
        .preterit_root("bendij"),
    Verb::new("conducir", "drive, conduct")
        .irregularities(&[I::SpellingChangeYoZc, I::NoAccentOnPreterit])
        .preterit_root("conduj"),
    Verb::new("contradecir", "contradict")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToI, I::NoAccentOnPreterit])
        .preterit_root("contradij")
        .future_root("contradir")
        .past_participle("contradicho"),
    Verb::new("convenir", "be advisable, agree")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("convin")
        .future_root("convendr")
        .imperative_tu("convén"),
    Verb::new("decir", "say, tell")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToI, I::NoAccentOnPreterit])
        .preterit_root("dij")
        .future_root("dir")
        .past_participle("dicho")
        .imperative_tu("di"),
    Verb::new("inducir", "lead to, induce")
        .irregularities(&[I::SpellingChangeYoZc, I::NoAccentOnPreterit])
        .preterit_root("induj"),
    Verb::new("intervenir", "intervene")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("intervin")
        .future_root("intervendr")
        .imperative_tu("intervén"),
    Verb::new("introducir", "insert, introduce")
        .irregularities(&[I::NoAccentOnPreterit, I::SpellingChangeYoZc])
        .preterit_root("introduj"),
    Verb::new("maldecir", "curse")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToI, I::NoAccentOnPreterit])
        .preterit_root("maldij"),
    Verb::new("predecir", "predict")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToI, I::NoAccentOnPreterit])
        .preterit_root("predij"),
    Verb::new("prevenir", "prevent")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("previn")
        .future_root("prevendr")
        .imperative_tu("prevén"),
    Verb::new("producir", "produce")
        .irregularities(&[I::SpellingChangeYoZc, I::NoAccentOnPreterit])
        .preterit_root("produj"),
    Verb::new("reducir", "reduce")
        .irregularities(&[I::SpellingChangeYoZc, I::NoAccentOnPreterit])
        .preterit_root("reduj"),
    Verb::new("reproducir", "reproduce")
        .irregularities(&[I::SpellingChangeYoZc, I::NoAccentOnPreterit])
        .preterit_root("reproduj"),
    Verb::new("traducir", "translate")
        .irregularities(&[I::SpellingChangeYoZc, I::NoAccentOnPreterit])
        .preterit_root("traduj"),
    Verb::new("venir", "come")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("vin")
        .future_root("vendr")
        .imperative_tu("ven"),
    Verb::new("lucir", "shine, wear").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("ir", "go")
        .frequency(3)
        .irregularities(&[I::NoAccentOnPreterit, I::SpellingChangePhonetic, I::StemChangeEToI])
        .preterit_root("fu")
        .imperative_tu("ve")
        .overrides(&[
            (T::Present, P::Yo, "voy"),
            (T::Present, P::Tu, "vas"),
            (T::Present, P::ElEllaUsted, "va"),
            (T::Present, P::EllosEllasUstedes, "van"),
            (T::Present, P::Nosotros, "vamos"),
            (T::Present, P::Vosotros, "vais"),
            (T::Preterit, P::Yo, "fui"),
            (T::Preterit, P::ElEllaUsted, "fue"),
            (T::Preterit, P::EllosEllasUstedes, "fueron"),
            (T::Imperfect, P::Yo, "iba"),
            (T::Imperfect, P::Tu, "ibas"),
            (T::Imperfect, P::ElEllaUsted, "iba"),
            (T::Imperfect, P::EllosEllasUstedes, "iban"),
            (T::Imperfect, P::Nosotros, "íbamos"),
            (T::Imperfect, P::Vosotros, "ibais"),
            (T::SubjunctivePresent, P::Yo, "vaya"),
            (T::SubjunctivePresent, P::Tu, "vayas"),
            (T::SubjunctivePresent, P::ElEllaUsted, "vaya"),
            (T::SubjunctivePresent, P::EllosEllasUstedes, "vayan"),
            (T::SubjunctivePresent, P::Nosotros, "vayamos"),
            (T::SubjunctivePresent, P::Vosotros, "vayáis"),
        ]),
];
