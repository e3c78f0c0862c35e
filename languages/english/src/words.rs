use lexi_core::Catalog;

/// Built-in vocabulary list
pub const ENGLISH_WORDS: &[&str] = &[
    "aberration",
    "abstruse",
    "acquiesce",
    "acrimony",
    "admonish",
    "adroit",
    "alacrity",
    "ambivalent",
    "ameliorate",
    "anachronism",
    "anomaly",
    "antipathy",
    "apathy",
    "arcane",
    "arduous",
    "assiduous",
    "audacious",
    "austere",
    "banal",
    "belie",
    "benevolent",
    "bolster",
    "bombastic",
    "brusque",
    "cacophony",
    "candor",
    "capricious",
    "castigate",
    "caustic",
    "circumspect",
    "cogent",
    "complacent",
    "conciliatory",
    "conundrum",
    "corroborate",
    "credulous",
    "debacle",
    "decorum",
    "deference",
    "deleterious",
    "demure",
    "diatribe",
    "didactic",
    "diffident",
    "dilettante",
    "disparate",
    "dogmatic",
    "ebullient",
    "eclectic",
    "efficacy",
    "effrontery",
    "elucidate",
    "embellish",
    "empirical",
    "enervate",
    "ephemeral",
    "equanimity",
    "erudite",
    "esoteric",
    "euphemism",
    "exacerbate",
    "exculpate",
    "exigent",
    "fastidious",
    "fatuous",
    "fervent",
    "garrulous",
    "gregarious",
    "hackneyed",
    "harangue",
    "iconoclast",
    "idiosyncrasy",
    "impetuous",
    "implacable",
    "incisive",
    "indefatigable",
    "ineffable",
    "inimical",
    "insipid",
    "intransigent",
    "inundate",
    "irascible",
    "laconic",
    "languid",
    "laudable",
    "lethargic",
    "loquacious",
    "lucid",
    "magnanimous",
    "malleable",
    "maverick",
    "mendacious",
    "meticulous",
    "mitigate",
    "mollify",
    "nefarious",
    "obdurate",
    "obfuscate",
    "obsequious",
    "obstinate",
    "ostentatious",
    "panacea",
    "paragon",
    "parsimonious",
    "pedantic",
    "perfunctory",
    "pernicious",
    "perspicacious",
    "placate",
    "plethora",
    "pragmatic",
    "precocious",
    "prodigal",
    "propensity",
    "prosaic",
    "quiescent",
    "quixotic",
    "rancorous",
    "recalcitrant",
    "redolent",
    "relegate",
    "reticent",
    "sagacious",
    "salient",
    "sanguine",
    "scrupulous",
    "serendipity",
    "soporific",
    "sporadic",
    "stoic",
    "superfluous",
    "surreptitious",
    "taciturn",
    "tenacious",
    "torpid",
    "transient",
    "trepidation",
    "ubiquitous",
    "undulate",
    "vacillate",
    "venerate",
    "verbose",
    "vex",
    "vicarious",
    "vindicate",
    "volatile",
    "wary",
    "whimsical",
    "zealous",
    "zenith",
];

pub fn english_catalog() -> Catalog {
    Catalog::new(ENGLISH_WORDS.iter().copied())
}
