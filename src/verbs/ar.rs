/*
ar.rs

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

//! Verbs ending in `-ar`, one table per irregularity category.

use crate::model::{ConjugationType as T, Irregularity as I, SubjectPronoun as P, Verb};

pub static REGULAR: &[Verb] = &[
    Verb::new("abandonar", "abandon"),
    Verb::new("abusar", "abuse"),
    Verb::new("agobiar", "overwhelm"),
    Verb::new("alabar", "praise, applaud"),
    Verb::new("acabar", "finish").frequency(2),
    Verb::new("aceptar", "accept"),
    Verb::new("acompañar", "accompany"),
    Verb::new("aconsejar", "counsel, advise"),
    Verb::new("acostumbrar", "be used to"),
    Verb::new("acumular", "accumulate"),
    Verb::new("acusar", "accuse"),
    Verb::new("adaptar", "adapt"),
    Verb::new("adelantar", "advance, pass"),
    Verb::new("adivinar", "guess"),
    Verb::new("admirar", "admire"),
    Verb::new("adoptar", "adopt"),
    Verb::new("adorar", "adore, worship"),
    Verb::new("afectar", "affect"),
    Verb::new("afeitar", "shave"),
    Verb::new("agarrar", "grab"),
    Verb::new("agitar", "shake"),
    Verb::new("agotar", "use up, exhaust"),
    Verb::new("agradar", "please").frequency(2),
    Verb::new("agravar", "aggravate, make worse"),
    Verb::new("aguardar", "expect, await"),
    Verb::new("ahorrar", "save, not waste"),
    Verb::new("alegrar", "make happy").frequency(2),
    Verb::new("alejar", "move away"),
    Verb::new("alimentar", "feed"),
    Verb::new("aliviar", "alleviate"),
    Verb::new("alquilar", "rent"),
    Verb::new("amar", "love"),
    Verb::new("anunciar", "announce"),
    Verb::new("apoyar", "support, hold up"),
    Verb::new("apresurar", "hurry"),
    Verb::new("aprovechar", "take advantage of"),
    Verb::new("apurar", "use up, exhaust, rush"),
    Verb::new("arrastrar", "drag"),
    Verb::new("arreglar", "fix, arrange"),
    Verb::new("arrojar", "throw"),
    Verb::new("asegurar", "assure"),
    Verb::new("asomar", "stick out"),
    Verb::new("asombrar", "amaze, astonish"),
    Verb::new("aspirar", "inhale"),
    Verb::new("asustar", "frighten"),
    Verb::new("atrapar", "catch"),
    Verb::new("atar", "tie"),
    Verb::new("aumentar", "increase, add to"),
    Verb::new("ayudar", "help").frequency(3),
    Verb::new("bailar", "dance"),
    Verb::new("bajar", "go down").frequency(3),
    Verb::new("bañar", "bathe"),
    Verb::new("bastar", "be enough"),
    Verb::new("besar", "kiss"),
    Verb::new("bloquear", "block"),
    Verb::new("borrar", "delete, erase"),
    Verb::new("brindar", "toast, offer"),
    Verb::new("bromear", "joke"),
    Verb::new("broncear", "tan, bronze"),
    Verb::new("burlar", "evade, cheat, mock"),
    Verb::new("callar", "quiet"),
    Verb::new("cambiar", "change").frequency(3),
    Verb::new("caminar", "walk").frequency(2),
    Verb::new("cancelar", "cancel"),
    Verb::new("cansar", "tire"),
    Verb::new("cantar", "sing").frequency(3),
    Verb::new("casar", "marry"),
    Verb::new("causar", "cause"),
    Verb::new("celebrar", "celebrate"),
    Verb::new("cenar", "eat dinner").frequency(3),
    Verb::new("cepillar", "brush"),
    Verb::new("charlar", "chat"),
    Verb::new("chillar", "shriek"),
    Verb::new("chupar", "suck"),
    Verb::new("cobrar", "charge for, earn"),
    Verb::new("cocinar", "cook"),
    Verb::new("comentar", "discuss, comment"),
    Verb::new("comparar", "compare"),
    Verb::new("completar", "complete"),
    Verb::new("comprar", "buy").frequency(3),
    Verb::new("condenar", "condemn"),
    Verb::new("congelar", "freeze"),
    Verb::new("considerar", "consider"),
    Verb::new("contestar", "answer"),
    Verb::new("contratar", "hire"),
    Verb::new("cortar", "cut").frequency(3),
    Verb::new("crear", "create"),
    Verb::new("cuidar", "take care of").frequency(2),
    Verb::new("dañar", "damage, harm"),
    Verb::new("dejar", "leave, let").frequency(3),
    Verb::new("deletrear", "spell"),
    Verb::new("desayunar", "eat breakfast"),
    Verb::new("descansar", "rest"),
    Verb::new("desear", "wish, desire"),
    Verb::new("desmayar", "lose heart, faint"),
    Verb::new("dibujar", "draw"),
    Verb::new("disculpar", "excuse, forgive"),
    Verb::new("disfrutar", "enjoy").frequency(2),
    Verb::new("disgustar", "disgust"),
    Verb::new("doblar", "fold, bend"),
    Verb::new("duchar", "shower"),
    Verb::new("dudar", "doubt"),
    Verb::new("echar", "throw, pour"),
    Verb::new("empeorar", "worsen"),
    Verb::new("empujar", "push"),
    Verb::new("encantar", "love, enchant").frequency(3),
    Verb::new("enfadar", "upset, annoy"),
    Verb::new("enfermar", "get sick"),
    Verb::new("engañar", "deceive"),
    Verb::new("enojar", "anger"),
    Verb::new("enseñar", "teach, show").frequency(2),
    Verb::new("entrar", "enter").frequency(3),
    Verb::new("escoltar", "escort"),
    Verb::new("escuchar", "listen to").frequency(3),
    Verb::new("esperar", "wait/hope for").frequency(3),
    Verb::new("estornudar", "sneeze"),
    Verb::new("estudiar", "study").frequency(3),
    Verb::new("evitar", "avoid"),
    Verb::new("exagerar", "exaggerate"),
    Verb::new("expresar", "express, state"),
    Verb::new("extrañar", "miss"),
    Verb::new("fallar", "fail"),
    Verb::new("faltar", "lack, miss"),
    Verb::new("felicitar", "congratulate"),
    Verb::new("festejar", "celebrate"),
    Verb::new("fijar", "fix, fasten, notice"),
    Verb::new("firmar", "sign"),
    Verb::new("formar", "form, shape"),
    Verb::new("frotar", "rub"),
    Verb::new("frustrar", "frustrate"),
    Verb::new("fumar", "smoke"),
    Verb::new("funcionar", "function, work"),
    Verb::new("ganar", "win, earn"),
    Verb::new("gastar", "spend, waste"),
    Verb::new("girar", "turn, spin"),
    Verb::new("golpear", "hit"),
    Verb::new("gritar", "shout"),
    Verb::new("guardar", "guard, protect, keep"),
    Verb::new("gustar", "like, please"),
    Verb::new("hablar", "speak").frequency(3),
    Verb::new("hallar", "find"),
    Verb::new("hornear", "bake"),
    Verb::new("imaginar", "imagine"),
    Verb::new("importar", "import, be important"),
    Verb::new("iniciar", "initiate, start"),
    Verb::new("intentar", "try"),
    Verb::new("interesar", "interest"),
    Verb::new("invitar", "invite"),
    Verb::new("jalar", "pull"),
    Verb::new("juntar", "bring together"),
    Verb::new("jurar", "swear"),
    Verb::new("lastimar", "hurt"),
    Verb::new("lavar", "wash"),
    Verb::new("levantar", "raise, lift").frequency(2),
    Verb::new("limpiar", "clean").frequency(2),
    Verb::new("llamar", "call").frequency(3),
    Verb::new("llenar", "fill"),
    Verb::new("llevar", "take, wear").frequency(3),
    Verb::new("llorar", "cry"),
    Verb::new("lograr", "obtain, achieve"),
    Verb::new("luchar", "fight, battle"),
    Verb::new("manchar", "stain"),
    Verb::new("mandar", "send, order"),
    Verb::new("manejar", "drive, manage"),
    Verb::new("marchar", "walk, leave, march"),
    Verb::new("matar", "kill"),
    Verb::new("mejorar", "improve"),
    Verb::new("mencionar", "mention"),
    Verb::new("mirar", "look at").frequency(3),
    Verb::new("mojar", "get wet"),
    Verb::new("molestar", "bother"),
    Verb::new("montar", "ride"),
    Verb::new("nadar", "swim"),
    Verb::new("necesitar", "need").frequency(3),
    Verb::new("notar", "note, notice"),
    Verb::new("observar", "observe"),
    Verb::new("ocultar", "hide, conceal"),
    Verb::new("odiar", "hate"),
    Verb::new("objetar", "object"),
    Verb::new("ocupar", "occupy"),
    Verb::new("ojear", "have a look at"),
    Verb::new("olvidar", "forget"),
    Verb::new("orar", "pray"),
    Verb::new("ordenar", "order, arrange"),
    Verb::new("parar", "stop, stand"),
    Verb::new("pasar", "pass, happen").frequency(3),
    Verb::new("pasear", "take a walk"),
    Verb::new("patinar", "skate"),
    Verb::new("peinar", "comb, style"),
    Verb::new("pelear", "fight"),
    Verb::new("perdonar", "pardon, forgive").frequency(2),
    Verb::new("pesar", "weigh, be heavy"),
    Verb::new("pintar", "paint"),
    Verb::new("pisar", "step on, tread on"),
    Verb::new("preguntar", "ask").frequency(3),
    Verb::new("preocupar", "worry"),
    Verb::new("preparar", "prepare"),
    Verb::new("presentar", "present, introduce"),
    Verb::new("prestar", "lend, borrow"),
    Verb::new("pronunciar", "pronounce"),
    Verb::new("quedar", "stay, remain").frequency(2),
    Verb::new("quejar", "complain"),
    Verb::new("quemar", "burn"),
    Verb::new("quitar", "remove, take away"),
    Verb::new("rebajar", "reduce, lower price"),
    Verb::new("regresar", "return").frequency(2),
    Verb::new("regalar", "give as a gift"),
    Verb::new("registrar", "search, register, record"),
    Verb::new("relajar", "relax, calm"),
    Verb::new("reparar", "fix"),
    Verb::new("representar", "represent"),
    Verb::new("respetar", "respect"),
    Verb::new("resultar", "result, turn out"),
    Verb::new("retirar", "withdraw, retire"),
    Verb::new("retrasar", "delay, postpone"),
    Verb::new("robar", "steal"),
    Verb::new("saltar", "jump"),
    Verb::new("serenar", "calm"),
    Verb::new("señalar", "point out, indicate"),
    Verb::new("saludar", "greet"),
    Verb::new("sobrar", "be left over"),
    Verb::new("soplar", "blow"),
    Verb::new("sospechar", "suspect"),
    Verb::new("sujetar", "hold, fasten"),
    Verb::new("tapar", "cover"),
    Verb::new("tardar", "take time"),
    Verb::new("telefonear", "phone"),
    Verb::new("terminar", "end, finish"),
    Verb::new("tirar", "throw, throw away"),
    Verb::new("tomar", "take, drink").frequency(3),
    Verb::new("trabajar", "work").frequency(3),
    Verb::new("tratar", "treat, try, handle"),
    Verb::new("trepar", "climb"),
    Verb::new("triunfar", "triumph, succeed"),
    Verb::new("usar", "use, wear"),
    Verb::new("viajar", "travel"),
    Verb::new("vigilar", "watch, guard"),
    Verb::new("visitar", "visit"),
    Verb::new("voltear", "turn over"),
];

pub static SPELLING_CHANGE: &[Verb] = &[
    Verb::new("abrazar", "hug").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("acercar", "approach").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("ahogar", "drown, suffocate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("alcanzar", "reach").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("amenazar", "threaten").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("aplicar", "apply").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("arrancar", "pull out").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("apagar", "turn off").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("atacar", "attack").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("avanzar", "advance, move forward").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("averiguar", "find out").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("bostezar", "yawn").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("buscar", "look for").frequency(3).irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("cargar", "load, charge").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("castigar", "punish").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("cazar", "hunt").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("colocar", "place").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("chocar", "collide").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("complicar", "complicate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("comunicar", "communicate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("conjugar", "conjugate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("criticar", "criticize").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("cruzar", "cross").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("dedicar", "dedicate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("delegar", "delegate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("encargar", "entrust").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("entregar", "submit").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("equivocar", "get wrong").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("explicar", "explain").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("fabricar", "fabricate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("glorificar", "glorify").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("gozar", "enjoy oneself").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("identificar", "identify").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("indicar", "indicate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("investigar", "investigate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("justificar", "justify").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("juzgar", "judge").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("lanzar", "throw, hurl").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("llegar", "arrive").frequency(3).irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("localizar", "locate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("marcar", "mark").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("masticar", "chew").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("modificar", "modify").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("notificar", "notify").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("obligar", "obligate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("organizar", "organize").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("pagar", "pay").frequency(2).irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("pegar", "hit, stick, glue").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("pescar", "fish").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("picar", "sting, itch, bite").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("practicar", "practice").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("propagar", "propagate").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("provocar", "provoke, cause").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("realizar", "carry out, fulfill").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("replicar", "reply").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("rezar", "pray").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("roncar", "snore").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("sacar", "take out, remove")
        .frequency(2)
        .irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("secar", "dry").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("significar", "signify, mean").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("tocar", "touch, play instrument")
        .frequency(2)
        .irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("tragar", "swallow").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("utilizar", "use, utilize").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("verificar", "verify").irregularities(&[I::SpellingChangePhonetic]),
    Verb::new("aislar", "isolate, insulate").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("ansiar", "long for").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("chirriar", "screech, creak").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("confiar", "confide, trust").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("criar", "raise, breed").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("desviar", "divert").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("enviar", "send").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("enfriar", "cool").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("espiar", "spy on").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("esquiar", "ski").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("fotografiar", "photograph").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("guiar", "guide").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("piar", "cheep, tweet").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("vaciar", "empty").irregularities(&[I::SpellingChangeIToAccentedI]),
    Verb::new("actuar", "act").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("atenuar", "attenuate").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("aullar", "howl").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("continuar", "continue").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("evaluar", "evaluate").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("fluctuar", "fluctuate").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("habituar", "habituate").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("maullar", "meow").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("insinuar", "insinuate").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("perpetuar", "perpetuate").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("puntuar", "punctuate, score").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("rehusar", "refuse").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("situar", "place").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("tatuar", "tattoo").irregularities(&[I::SpellingChangeUToAccentedU]),
    Verb::new("valuar", "value").irregularities(&[I::SpellingChangeUToAccentedU]),
];

pub static STEM_CHANGE: &[Verb] = &[
    Verb::new("acordar", "agree").frequency(2).irregularities(&[I::StemChangeOToUe]),
    Verb::new("acostar", "put to bed").irregularities(&[I::StemChangeOToUe]),
    Verb::new("almorzar", "eat lunch")
        .irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("apostar", "bet").irregularities(&[I::StemChangeOToUe]),
    Verb::new("aprobar", "approve").irregularities(&[I::StemChangeOToUe]),
    Verb::new("avergonzar", "embarrass")
        .irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("colgar", "hang").irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("consolar", "console").irregularities(&[I::StemChangeOToUe]),
    Verb::new("contar", "tell, count").frequency(3).irregularities(&[I::StemChangeOToUe]),
    Verb::new("costar", "cost").frequency(2).irregularities(&[I::StemChangeOToUe]),
    Verb::new("demostrar", "demonstrate, prove").irregularities(&[I::StemChangeOToUe]),
    Verb::new("descontar", "discount, deduct, exclude").irregularities(&[I::StemChangeOToUe]),
    Verb::new("encontrar", "meet, find").irregularities(&[I::StemChangeOToUe]),
    Verb::new("esforzar", "strain")
        .irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("forzar", "force").irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("mostrar", "show").frequency(3).irregularities(&[I::StemChangeOToUe]),
    Verb::new("probar", "test, taste, prove").frequency(2).irregularities(&[I::StemChangeOToUe]),
    Verb::new("recordar", "remember").irregularities(&[I::StemChangeOToUe]),
    Verb::new("reforzar", "reinforce")
        .irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("renovar", "renovate").irregularities(&[I::StemChangeOToUe]),
    Verb::new("rodar", "roll").irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("rogar", "beg").irregularities(&[I::StemChangeOToUe, I::SpellingChangePhonetic]),
    Verb::new("soltar", "let go of, loosen").irregularities(&[I::StemChangeOToUe]),
    Verb::new("sonar", "sound").irregularities(&[I::StemChangeOToUe]),
    Verb::new("soñar", "dream").irregularities(&[I::StemChangeOToUe]),
    Verb::new("tostar", "toast").irregularities(&[I::StemChangeOToUe]),
    Verb::new("tronar", "thunder").irregularities(&[I::StemChangeOToUe]),
    Verb::new("volar", "fly").irregularities(&[I::StemChangeOToUe]),
    Verb::new("acertar", "guess correctly").irregularities(&[I::StemChangeEToIe]),
    Verb::new("alentar", "encourage").irregularities(&[I::StemChangeEToIe]),
    Verb::new("apretar", "press, squeeze").irregularities(&[I::StemChangeEToIe]),
    Verb::new("atravesar", "cross").irregularities(&[I::StemChangeEToIe]),
    Verb::new("calentar", "warm").irregularities(&[I::StemChangeEToIe]),
    Verb::new("cerrar", "close").frequency(3).irregularities(&[I::StemChangeEToIe]),
    Verb::new("comenzar", "begin, start")
        .frequency(3)
        .irregularities(&[I::StemChangeEToIe, I::SpellingChangePhonetic]),
    Verb::new("confesar", "confess").irregularities(&[I::StemChangeEToIe]),
    Verb::new("despertar", "wake").irregularities(&[I::StemChangeEToIe]),
    Verb::new("desterrar", "banish").irregularities(&[I::StemChangeEToIe]),
    Verb::new("empezar", "begin")
        .frequency(3)
        .irregularities(&[I::StemChangeEToIe, I::SpellingChangePhonetic]),
    Verb::new("encerrar", "enclose, lock up").irregularities(&[I::StemChangeEToIe]),
    Verb::new("enterrar", "bury").irregularities(&[I::StemChangeEToIe]),
    Verb::new("errar", "miss, wander").irregularities(&[I::StemChangeEToIe]),
    Verb::new("fregar", "scrub").irregularities(&[I::StemChangeEToIe, I::SpellingChangePhonetic]),
    Verb::new("gobernar", "govern").irregularities(&[I::StemChangeEToIe]),
    Verb::new("helar", "freeze").irregularities(&[I::StemChangeEToIe]),
    Verb::new("merendar", "snack").irregularities(&[I::StemChangeEToIe]),
    Verb::new("negar", "deny, negate")
        .irregularities(&[I::StemChangeEToIe, I::SpellingChangePhonetic]),
    Verb::new("nevar", "snow").irregularities(&[I::StemChangeEToIe]),
    Verb::new("pensar", "think").frequency(3).irregularities(&[I::StemChangeEToIe]),
    Verb::new("quebrar", "break").irregularities(&[I::StemChangeEToIe]),
    Verb::new("recomendar", "recommend").frequency(2).irregularities(&[I::StemChangeEToIe]),
    Verb::new("regar", "water").irregularities(&[I::StemChangeEToIe, I::SpellingChangePhonetic]),
    Verb::new("remendar", "mend").irregularities(&[I::StemChangeEToIe]),
    Verb::new("sembrar", "plant, sow").irregularities(&[I::StemChangeEToIe]),
    Verb::new("sentar", "sit").frequency(3).irregularities(&[I::StemChangeEToIe]),
    Verb::new("serrar", "saw").irregularities(&[I::StemChangeEToIe]),
    Verb::new("temblar", "tremble").irregularities(&[I::StemChangeEToIe]),
    Verb::new("tentar", "tempt").irregularities(&[I::StemChangeEToIe]),
    Verb::new("tropezar", "stumble")
        .irregularities(&[I::StemChangeEToIe, I::SpellingChangePhonetic]),
    Verb::new("jugar", "play").frequency(3).irregularities(&[I::StemChangeUToUe]),
];

pub static IRREGULAR: &[Verb] = &[
    Verb::new("andar", "walk").irregularities(&[I::NoAccentOnPreterit]).preterit_root("anduv"),
    Verb::new("dar", "give")
        .frequency(3)
        .irregularities(&[I::NoAccentOnPreterit])
        .overrides(&[
            (T::Present, P::Yo, "doy"),
            (T::Present, P::Vosotros, "dais"),
            (T::Preterit, P::Yo, "di"),
            (T::Preterit, P::ElEllaUsted, "dio"),
            (T::SubjunctivePresent, P::Yo, "dé"),
            (T::SubjunctivePresent, P::ElEllaUsted, "dé"),
            (T::SubjunctivePresent, P::Vosotros, "deis"),
        ]),
    Verb::new("estar", "be")
        .frequency(3)
        .irregularities(&[I::NoAccentOnPreterit])
        .preterit_root("estuv")
        .overrides(&[
            (T::Present, P::Yo, "estoy"),
            (T::Present, P::Tu, "estás"),
            (T::Present, P::ElEllaUsted, "está"),
            (T::Present, P::EllosEllasUstedes, "están"),
            (T::SubjunctivePresent, P::Yo, "esté"),
            (T::SubjunctivePresent, P::Tu, "estés"),
            (T::SubjunctivePresent, P::ElEllaUsted, "esté"),
            (T::SubjunctivePresent, P::EllosEllasUstedes, "estén"),
        ]),
];
