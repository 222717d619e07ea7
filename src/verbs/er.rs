/*
er.rs

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

//! Verbs ending in `-er`, one table per irregularity category.

use crate::model::{ConjugationType as T, Irregularity as I, SubjectPronoun as P, Verb};

pub static REGULAR: &[Verb] = &[
    Verb::new("absorber", "absorb"),
    Verb::new("aprender", "learn").frequency(3),
    Verb::new("atrever", "dare"),
    Verb::new("barrer", "sweep"),
    Verb::new("beber", "drink").frequency(3),
    Verb::new("comer", "eat").frequency(3),
    Verb::new("cometer", "commit"),
    Verb::new("compeler", "compel"),
    Verb::new("comprender", "understand").frequency(3),
    Verb::new("conceder", "concede"),
    Verb::new("correr", "run").frequency(3),
    Verb::new("corresponder", "correspond to, reciprocate"),
    Verb::new("deber", "owe, should").frequency(3),
    Verb::new("depender", "depend"),
    Verb::new("esconder", "hide"),
    Verb::new("exceder", "exceed"),
    Verb::new("lamer", "lick"),
    Verb::new("meter", "put into").frequency(2),
    Verb::new("ofender", "offend"),
    Verb::new("prender", "catch, light"),
    Verb::new("pretender", "attempt, intend, claim"),
    Verb::new("proceder", "proceed"),
    Verb::new("prometer", "promise"),
    Verb::new("recorrer", "travel around"),
    Verb::new("reprender", "reprimand"),
    Verb::new("responder", "respond, reply").frequency(2),
    Verb::new("socorrer", "help, aid, relieve"),
    Verb::new("sorprender", "surprise").frequency(2),
    Verb::new("suceder", "happen"),
    Verb::new("tejer", "knit, weave"),
    Verb::new("temer", "fear").frequency(2),
    Verb::new("toser", "cough"),
    Verb::new("vender", "sell").frequency(3),
];

pub static SPELLING_CHANGE: &[Verb] = &[
    Verb::new("coger", "take, catch").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("convencer", "convince").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("ejercer", "exert, practice a profession")
        .irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("escoger", "choose").frequency(2).irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("proteger", "protect").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("recoger", "pick up, gather")
        .frequency(2)
        .irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("tañer", "strum").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("vencer", "defeat, overcome").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("creer", "believe").frequency(3).irregularities(&[I::SpellingChangeY]),
    Verb::new("descreer", "disbelieve").irregularities(&[I::SpellingChangeY]),
    Verb::new("leer", "read").frequency(3).irregularities(&[I::SpellingChangeY]),
    Verb::new("poseer", "possess").irregularities(&[I::SpellingChangeY]),
    Verb::new("proveer", "provide").irregularities(&[I::SpellingChangeY]),
    Verb::new("releer", "reread").irregularities(&[I::SpellingChangeY]),
    Verb::new("caer", "fall")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo, I::SpellingChangeY]),
    Verb::new("valer", "be worth, cost")
        .irregularities(&[I::SpellingChangeYoGo])
        .future_root("valdr"),
    Verb::new("agradecer", "thank").frequency(2).irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("amanecer", "dawn, get light").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("anochecer", "become night").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("aparecer", "appear").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("apetecer", "want, crave").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("atardecer", "get dark").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("complacer", "please").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("conocer", "know, meet").frequency(3).irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("crecer", "grow").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("desaparecer", "disappear").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("embellecer", "embellish").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("establecer", "establish").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("merecer", "deserve").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("nacer", "be born").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("obedecer", "obey").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("ofrecer", "offer").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("parecer", "seem").frequency(3).irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("permanecer", "remain").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("pertenecer", "belong to").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("placer", "please, gratify").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("prevalecer", "prevail").irregularities(&[I::SpellingChangeYoZc]),
    Verb::new("reconocer", "recognize").irregularities(&[I::SpellingChangeYoZc]),
];

pub static STEM_CHANGE: &[Verb] = &[
    Verb::new("absolver", "absolve, acquit")
        .irregularities(&[I::StemChangeOToUe])
        .past_participle("absuelto"),
    Verb::new("cocer", "cook, bake")
        .irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("conmover", "move emotionally, shake").irregularities(&[I::StemChangeOToUe]),
    Verb::new("demoler", "demolish").irregularities(&[I::StemChangeOToUe]),
    Verb::new("devolver", "return something")
        .irregularities(&[I::StemChangeOToUe])
        .past_participle("devuelto"),
    Verb::new("disolver", "dissolve")
        .irregularities(&[I::StemChangeOToUe])
        .past_participle("disuelto"),
    Verb::new("doler", "hurt").irregularities(&[I::StemChangeOToUe]),
    Verb::new("envolver", "wrap").irregularities(&[I::StemChangeOToUe]).past_participle("envuelto"),
    Verb::new("llover", "rain").frequency(2).irregularities(&[I::StemChangeOToUe]),
    Verb::new("moler", "grind").irregularities(&[I::StemChangeOToUe]),
    Verb::new("morder", "bite").irregularities(&[I::StemChangeOToUe]),
    Verb::new("mover", "move").irregularities(&[I::StemChangeOToUe]),
    Verb::new("oler", "smell").irregularities(&[I::StemChangeOToUe]),
    Verb::new("promover", "promote").irregularities(&[I::StemChangeOToUe]),
    Verb::new("remover", "remove").irregularities(&[I::StemChangeOToUe]),
    Verb::new("resolver", "resolve")
        .irregularities(&[I::StemChangeOToUe])
        .past_participle("resuelto"),
    Verb::new("retorcer", "twist, wring")
        .irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("revolver", "stir, mix, shake")
        .irregularities(&[I::StemChangeOToUe])
        .past_participle("revuelto"),
    Verb::new("soler", "use to, usually").irregularities(&[I::StemChangeOToUe]),
    Verb::new("torcer", "twist").irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("volver", "return")
        .frequency(2)
        .irregularities(&[I::StemChangeOToUe])
        .past_participle("vuelto"),
    Verb::new("ascender", "rise, promote").irregularities(&[I::StemChangeEToIe]),
    Verb::new("atender", "attend to").irregularities(&[I::StemChangeEToIe]),
    Verb::new("defender", "defend").irregularities(&[I::StemChangeEToIe]),
    Verb::new("descender", "fall, descend").irregularities(&[I::StemChangeEToIe]),
    Verb::new("encender", "light, turn on").irregularities(&[I::StemChangeEToIe]),
    Verb::new("entender", "understand").irregularities(&[I::StemChangeEToIe]),
    Verb::new("extender", "extend").irregularities(&[I::StemChangeEToIe]),
    Verb::new("perder", "lose").frequency(3).irregularities(&[I::StemChangeEToIe]),
    Verb::new("tender", "hang, lay out").irregularities(&[I::StemChangeEToIe]),
    Verb::new("verter", "pour, spill").irregularities(&[I::StemChangeEToIe]),
];

pub static IRREGULAR: &[Verb] = &[
    Verb::new("romper", "break").frequency(3).past_participle("roto"),
    Verb::new("componer", "compose, prepare")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("compus")
        .future_root("compondr")
        .past_participle("compuesto")
        .imperative_tu("compón"),
    Verb::new("contener", "contain")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("contuv")
        .future_root("contendr")
        .imperative_tu("contén"),
    Verb::new("contraponer", "compare, contrast")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("contrapus")
        .future_root("contrapondr")
        .past_participle("contrapuesto")
        .imperative_tu("contrapón"),
    Verb::new("deshacer", "undo")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("deshic")
        .future_root("deshar")
        .past_participle("deshecho")
        .imperative_tu("deshaz"),
    Verb::new("detener", "stop")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("detuv")
        .future_root("detendr")
        .imperative_tu("detén"),
    Verb::new("disponer", "arrange, set out")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("dispus")
        .future_root("dispondr")
        .past_participle("dispuesto")
        .imperative_tu("dispón"),
    Verb::new("distraer", "distract")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("distraj"),
    Verb::new("entretener", "entertain")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("entretuv")
        .future_root("entretendr")
        .imperative_tu("entretén"),
    Verb::new("exponer", "expose")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("expus")
        .future_root("expondr")
        .past_participle("expuesto")
        .imperative_tu("expón"),
    Verb::new("extraer", "extract")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("extraj"),
    Verb::new("hacer", "make, do")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("hic")
        .future_root("har")
        .past_participle("hecho")
        .imperative_tu("haz"),
    Verb::new("imponer", "impose")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("impus")
        .future_root("impondr")
        .past_participle("impuesto")
        .imperative_tu("impón"),
    Verb::new("mantener", "maintain")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("mantuv")
        .future_root("mantendr")
        .imperative_tu("mantén"),
    Verb::new("obtener", "obtain")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("obtuv")
        .future_root("obtendr")
        .imperative_tu("obtén"),
    Verb::new("oponer", "oppose")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("opus")
        .future_root("opondr")
        .past_participle("opuesto")
        .imperative_tu("opón"),
    Verb::new("poder", "can, be able to")
        .frequency(3)
        .irregularities(&[I::NoAccentOnPreterit, I::StemChangeOToUe])
        .preterit_root("pud")
        .future_root("podr")
        .gerund("pudiendo"),
    Verb::new("posponer", "postpone")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("pospus")
        .future_root("pospondr")
        .past_participle("pospuesto")
        .imperative_tu("pospón"),
    Verb::new("poner", "put")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("pus")
        .future_root("pondr")
        .past_participle("puesto")
        .imperative_tu("pon"),
    Verb::new("proponer", "propose")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("propus")
        .future_root("propondr")
        .past_participle("propuesto")
        .imperative_tu("propón"),
    Verb::new("querer", "want")
        .frequency(3)
        .irregularities(&[I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("quis")
        .future_root("querr"),
    Verb::new("retener", "retain, keep")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("retuv")
        .future_root("retendr")
        .imperative_tu("retén"),
    Verb::new("satisfacer", "satisfy")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("satisfic")
        .future_root("satisfar")
        .past_participle("satisfecho")
        .imperative_tu("satisfaz"),
    Verb::new("sostener", "hold, sustain")
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("sostuv")
        .future_root("sostendr")
        .imperative_tu("sostén"),
    Verb::new("suponer", "suppose")
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("supus")
        .future_root("supondr")
        .past_participle("supuesto")
        .imperative_tu("supón"),
    Verb::new("tener", "have")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo, I::StemChangeEToIe, I::NoAccentOnPreterit])
        .preterit_root("tuv")
        .future_root("tendr")
        .imperative_tu("ten"),
    Verb::new("traer", "bring")
        .frequency(3)
        .irregularities(&[I::SpellingChangeYoGo, I::NoAccentOnPreterit])
        .preterit_root("traj"),
    Verb::new("caber", "fit")
        .frequency(2)
        .irregularities(&[I::NoAccentOnPreterit])
        .preterit_root("cup")
        .future_root("cabr")
        .overrides(&[
            (T::Present, P::Yo, "quepo"),
        ]),
    Verb::new("haber", "have, exist")
        .frequency(3)
        .irregularities(&[I::NoAccentOnPreterit])
        .preterit_root("hub")
        .future_root("habr")
        .overrides(&[
            (T::Present, P::Yo, "he"),
            (T::Present, P::Tu, "has"),
            (T::Present, P::ElEllaUsted, "ha"),
            (T::Present, P::EllosEllasUstedes, "han"),
            (T::Present, P::Nosotros, "hemos"),
            (T::Present, P::Vosotros, "habéis"),
            (T::SubjunctivePresent, P::Yo, "haya"),
            (T::SubjunctivePresent, P::Tu, "hayas"),
            (T::SubjunctivePresent, P::ElEllaUsted, "haya"),
            (T::SubjunctivePresent, P::EllosEllasUstedes, "hayan"),
            (T::SubjunctivePresent, P::Nosotros, "hayamos"),
            (T::SubjunctivePresent, P::Vosotros, "hayáis"),
        ]),
    Verb::new("saber", "know")
        .frequency(3)
        .irregularities(&[I::NoAccentOnPreterit])
        .preterit_root("sup")
        .future_root("sabr")
        .overrides(&[
            (T::Present, P::Yo, "sé"),
            (T::SubjunctivePresent, P::Yo, "sepa"),
            (T::SubjunctivePresent, P::Tu, "sepas"),
            (T::SubjunctivePresent, P::ElEllaUsted, "sepa"),
            (T::SubjunctivePresent, P::EllosEllasUstedes, "sepan"),
            (T::SubjunctivePresent, P::Nosotros, "sepamos"),
            (T::SubjunctivePresent, P::Vosotros, "sepáis"),
        ]),
    Verb::new("ser", "be")
        .frequency(3)
        .irregularities(&[I::NoAccentOnPreterit])
        .preterit_root("fu")
        .imperative_tu("sé")
        .overrides(&[
            (T::Present, P::Yo, "soy"),
            (T::Present, P::Tu, "eres"),
            (T::Present, P::ElEllaUsted, "es"),
            (T::Present, P::EllosEllasUstedes, "son"),
            (T::Present, P::Nosotros, "somos"),
            (T::Present, P::Vosotros, "sois"),
            (T::Preterit, P::Yo, "fui"),
            (T::Preterit, P::ElEllaUsted, "fue"),
            (T::Preterit, P::EllosEllasUstedes, "fueron"),
            (T::Imperfect, P::Yo, "era"),
            (T::Imperfect, P::Tu, "eras"),
            (T::Imperfect, P::ElEllaUsted, "era"),
            (T::Imperfect, P::EllosEllasUstedes, "eran"),
            (T::Imperfect, P::Nosotros, "éramos"),
            (T::Imperfect, P::Vosotros, "erais"),
            (T::SubjunctivePresent, P::Yo, "sea"),
            (T::SubjunctivePresent, P::Tu, "seas"),
            (T::SubjunctivePresent, P::ElEllaUsted, "sea"),
            (T::SubjunctivePresent, P::EllosEllasUstedes, "sean"),
            (T::SubjunctivePresent, P::Nosotros, "seamos"),
            (T::SubjunctivePresent, P::Vosotros, "seáis"),
        ]),
    Verb::new("ver", "see")
        .frequency(3)
        .irregularities(&[I::NoAccentOnPreterit])
        .past_participle("visto")
        .overrides(&[
            (T::Present, P::Yo, "veo"),
            (T::Present, P::Vosotros, "veis"),
            (T::Preterit, P::Yo, "vi"),
            (T::Preterit, P::ElEllaUsted, "vio"),
            (T::Imperfect, P::Yo, "veía"),
            (T::Imperfect, P::Tu, "veías"),
            (T::Imperfect, P::ElEllaUsted, "veía"),
            (T::Imperfect, P::EllosEllasUstedes, "veían"),
            (T::Imperfect, P::Nosotros, "veíamos"),
            (T::Imperfect, P::Vosotros, "veíais"),
            (T::SubjunctivePresent, P::Yo, "vea"),
            (T::SubjunctivePresent, P::Tu, "veas"),
            (T::SubjunctivePresent, P::ElEllaUsted, "vea"),
            (T::SubjunctivePresent, P::EllosEllasUstedes, "vean"),
            (T::SubjunctivePresent, P::Nosotros, "veamos"),
            (T::SubjunctivePresent, P::Vosotros, "veáis"),
        ]),
];
