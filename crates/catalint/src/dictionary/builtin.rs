//! Built-in Swedish auction-catalog vocabulary.
//!
//! Everything here is case-folded except brand and artist display names.

/// Domain terms that are never flagged as misspellings.
pub(super) const WHITELIST: &[&str] = &[
    // Materials
    "stengods", "porslin", "fajans", "flintgods", "benporslin", "keramik",
    "glas", "kristall", "emalj", "cloisonné", "mässing", "koppar", "tenn",
    "silver", "sterlingsilver", "nysilver", "förgylld", "förgyllt", "brons",
    "gjutjärn", "smide", "jakaranda", "palisander", "mahogny", "teak", "valnöt",
    "björk", "ek", "alm", "furu", "rotting", "intarsia", "marmor", "alabaster",
    "elfenben", "pärlemor", "bärnsten",
    // Techniques
    "olja", "duk", "pannå", "akvarell", "gouache", "litografi", "färglitografi",
    "etsning", "torrnål", "akvatint", "serigrafi", "träsnitt", "xylografi",
    "tempera", "pastell", "blyerts", "tusch", "glasyr", "lysterglasyr",
    "craquelé", "sgraffito", "engobe", "slipad", "graverad", "graal", "ariel",
    "munblåst", "formblåst", "pressglas",
    // Markings and condition
    "signerad", "signerat", "monogramsignerad", "numrerad", "daterad",
    "stämplad", "stämpel", "märkt", "märkning", "nagg", "repor",
    "slitage", "bruksslitage", "lagning", "lagad", "nött", "patina",
    // Object types
    "tavla", "målning", "oljemålning", "teckning", "skulptur", "figurin",
    "vas", "skål", "fat", "tallrik", "karaff", "kanna", "pokal", "ljusstake",
    "kandelaber", "servis", "kaffeservis", "terrin", "byrå", "sekretär",
    "karmstol", "fåtölj", "chiffonjé", "gustaviansk", "sengustaviansk",
    "karljohan", "jugend", "funkis", "art", "deco", "rokoko", "barock",
];

/// Known misspellings: `(wrong, correct, category, confidence)`.
pub(super) const CORRECTIONS: &[(&str, &str, &str, f64)] = &[
    // Materials
    ("porsling", "porslin", "material", 0.95),
    ("porslinn", "porslin", "material", 0.95),
    ("porlsin", "porslin", "material", 0.92),
    ("keramick", "keramik", "material", 0.93),
    ("kermik", "keramik", "material", 0.9),
    ("stengos", "stengods", "material", 0.9),
    ("stengodts", "stengods", "material", 0.9),
    ("kristal", "kristall", "material", 0.88),
    ("mahony", "mahogny", "material", 0.92),
    ("mahogni", "mahogny", "material", 0.92),
    ("jacaranda", "jakaranda", "material", 0.85),
    ("fayans", "fajans", "material", 0.9),
    ("emajl", "emalj", "material", 0.92),
    ("massing", "mässing", "material", 0.88),
    // Techniques
    ("litographi", "litografi", "technique", 0.95),
    ("litograffi", "litografi", "technique", 0.95),
    ("lithografi", "litografi", "technique", 0.93),
    ("akvarel", "akvarell", "technique", 0.93),
    ("akvarrell", "akvarell", "technique", 0.93),
    ("aquarell", "akvarell", "technique", 0.85),
    ("etsnig", "etsning", "technique", 0.93),
    ("oljemålnig", "oljemålning", "technique", 0.93),
    ("serigrafie", "serigrafi", "technique", 0.9),
    ("guasch", "gouache", "technique", 0.85),
    // Markings
    ("singerad", "signerad", "marking", 0.95),
    ("signrad", "signerad", "marking", 0.95),
    ("siganerad", "signerad", "marking", 0.93),
    ("numererad", "numrerad", "marking", 0.93),
    ("datered", "daterad", "marking", 0.9),
    ("graverd", "graverad", "marking", 0.9),
    // Objects
    ("tallrick", "tallrik", "object", 0.95),
    ("ljustake", "ljusstake", "object", 0.93),
    ("karraff", "karaff", "object", 0.92),
    ("skulputr", "skulptur", "object", 0.93),
    ("skultpur", "skulptur", "object", 0.93),
    ("sekreterare", "sekretär", "object", 0.85),
    ("inrammad", "inramad", "condition", 0.9),
];

/// Swedish function words skipped by the dictionary pass.
pub(super) const STOP_WORDS: &[&str] = &[
    "och", "med", "från", "till", "under", "över", "för", "som", "eller",
    "samt", "utan", "efter", "inför", "mellan", "omkring", "cirka", "ungefär",
    "även", "detta", "denna", "dessa", "några", "många", "mycket", "något",
    "inte", "också", "bara", "sedan", "varje", "annan", "andra", "ovan",
    "nedan", "varav", "vilka", "vilket", "skick", "höjd", "bredd", "längd",
    "diameter",
];

/// Brand table: `(display name, known misspellings, category, confidence)`.
pub(super) const BRANDS: &[(&str, &[&str], &str, f64)] = &[
    (
        "Orrefors",
        &["orefors", "orrefos", "orreforss", "orrfors", "orrefords"],
        "glass",
        0.96,
    ),
    ("Kosta Boda", &["kosta bodda", "kossta boda"], "glass", 0.95),
    (
        "Gustavsberg",
        &["gustavberg", "gustafsberg", "gustavsbärg", "gustavsber"],
        "ceramics",
        0.96,
    ),
    (
        "Rörstrand",
        &["rörstand", "rörstrnad", "rorstrand", "rörstran"],
        "ceramics",
        0.96,
    ),
    ("Iittala", &["itala", "iitala", "ittala", "iitalla"], "glass", 0.96),
    ("Arabia", &["arrabia", "arabiaa"], "ceramics", 0.95),
    ("Höganäs", &["hoganas", "höganes", "höganäss"], "ceramics", 0.95),
    (
        "Upsala-Ekeby",
        &["upsala ekby", "uppsala ekeby", "upsala ekebi"],
        "ceramics",
        0.95,
    ),
    ("Skultuna", &["skulltuna", "skultna", "skultunna"], "metal", 0.95),
    (
        "Royal Copenhagen",
        &["royal copenhagn", "royal kopenhagen", "royal copenhaegen"],
        "ceramics",
        0.96,
    ),
    ("Svenskt Tenn", &["svensk tenn", "svenska tenn"], "design", 0.95),
    ("Georg Jensen", &["georg jenssen", "georg jensson"], "silver", 0.95),
    ("Pukeberg", &["pukeber", "puckeberg"], "glass", 0.95),
    ("Nuutajärvi", &["nuutajarvi", "nutajärvi"], "glass", 0.95),
    ("Holmegaard", &["holmegard", "holmegaarde"], "glass", 0.95),
];

/// Artists and designers frequently catalogued; used for artist-field checks.
pub(super) const KNOWN_ARTISTS: &[&str] = &[
    "Lisa Larson",
    "Stig Lindberg",
    "Bruno Mathsson",
    "Carl Malmsten",
    "Josef Frank",
    "Bertil Vallien",
    "Ulrica Hydman-Vallien",
    "Sven Palmqvist",
    "Vicke Lindstrand",
    "Edward Hald",
    "Simon Gate",
    "Nils Landberg",
    "Wilhelm Kåge",
    "Berndt Friberg",
    "Tapio Wirkkala",
    "Timo Sarpaneva",
    "Alvar Aalto",
    "Anders Zorn",
    "Carl Larsson",
    "Bruno Liljefors",
    "Rolf Lidberg",
    "Lennart Jirlow",
    "Niels Thorsson",
    "Ingrid Atterberg",
    "Hans Hedberg",
    "Erik Höglund",
    "Mari Simmulson",
    "Gunnar Nylund",
    "Axel Salto",
    "Pablo Picasso",
];
