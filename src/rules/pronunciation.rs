/// Words the engine commonly mispronounces, with respellings
pub const PRONUNCIATIONS: &[(&str, &str)] = &[
    ("segue", "seg-way"),
    ("quinoa", "keen-wah"),
    ("epitome", "ih-pit-uh-mee"),
    ("hyperbole", "hy-per-buh-lee"),
    ("cache", "cash"),
    ("niche", "neesh"),
    ("colonel", "kernel"),
    ("debris", "duh-bree"),
    ("gnocchi", "nyoh-kee"),
    ("nginx", "engine x"),
    ("facade", "fuh-sahd"),
    ("meme", "meem"),
    ("genre", "zhahn-ruh"),
    ("albeit", "all-bee-it"),
    ("anemone", "uh-nem-uh-nee"),
    ("worcestershire", "wuss-ter-sher"),
    ("acai", "ah-sah-ee"),
    ("bruschetta", "broo-sket-uh"),
    ("chipotle", "chih-poht-lay"),
    ("sriracha", "see-rah-chah"),
    ("cliche", "klee-shay"),
    ("mischievous", "mis-chuh-vus"),
    ("kubernetes", "koo-ber-net-eez"),
    ("sudo", "soo-doh"),
    ("gif", "jif"),
    ("suite", "sweet"),
    ("victuals", "vittles"),
    ("boatswain", "bo-sun"),
];

/// Fixed spellings of interjections
pub const INTERJECTIONS: &[(&str, &str)] = &[
    ("mm-hmm", "mhm"),
    ("mm-hm", "mhm"),
    ("uh-huh", "uh huh"),
    ("uh-oh", "uh oh"),
    ("uh-uh", "uh uh"),
    ("tsk", "tisk"),
    ("tsk-tsk", "tisk tisk"),
    ("psst", "pst"),
];

/// Patterns for drawn-out interjections and their canonical spelling
pub const ELONGATIONS: &[(&str, &str)] = &[
    (r"(?i)\bh+m{2,}\b", "hm"),
    (r"(?i)\bsh{3,}\b", "shh"),
    (r"(?i)\ba+h{2,}\b", "ah"),
    (r"(?i)\bo+h{2,}\b", "oh"),
    (r"(?i)\bu+m{2,}\b", "um"),
    (r"(?i)\bu+h{2,}\b", "uh"),
    (r"(?i)\be+r{3,}\b", "er"),
];

/// Which side of the word a context rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    Before,
    After,
}

/// A homograph with its readings and the context rules that choose one
#[derive(Debug, Clone, Copy)]
pub struct HomographSpec {
    pub word: &'static str,
    pub default_variant: &'static str,
    /// (variant name, respelling)
    pub variants: &'static [(&'static str, &'static str)],
    /// (variant name, window, pattern), first match wins
    pub rules: &'static [(&'static str, Window, &'static str)],
}

const MODALS: &str = r"\b(?:to|will|can|could|should|would|must|might|may|shall|cannot|can't|don't|doesn't|didn't|won't|please|let's)$";

pub const HOMOGRAPHS: &[HomographSpec] = &[
    HomographSpec {
        word: "read",
        default_variant: "present",
        variants: &[("present", "reed"), ("past", "red")],
        rules: &[
            ("present", Window::Before, MODALS),
            (
                "past",
                Window::Before,
                r"\b(?:have|has|had|having|was|were|been|be)(?:\s+(?:already|just|never|once|not|recently))?$",
            ),
            ("past", Window::Before, r"\b(?:already|once|recently)$"),
            ("past", Window::After, r"\b(?:yesterday|last|ago|earlier)\b"),
        ],
    },
    HomographSpec {
        word: "lead",
        default_variant: "verb",
        variants: &[("verb", "leed"), ("metal", "led")],
        rules: &[
            (
                "metal",
                Window::After,
                r"^(?:poisoning|pipe|pipes|paint|pencil|pencils|levels?|exposure|weight|weights|based|acid|content|shot)\b",
            ),
            ("metal", Window::Before, r"\b(?:of|unleaded|toxic|heavy)$"),
        ],
    },
    HomographSpec {
        word: "live",
        default_variant: "verb",
        variants: &[("verb", "liv"), ("adjective", "lyve")],
        rules: &[
            (
                "adjective",
                Window::After,
                r"^(?:music|performances?|shows?|concerts?|broadcasts?|streams?|streaming|audience|recordings?|events?|wire|coverage|bait|animals|television|tv|feed|updates?|on)\b",
            ),
            (
                "adjective",
                Window::Before,
                r"\b(?:is|are|was|were|go|goes|going|went|gone|now)$",
            ),
        ],
    },
    HomographSpec {
        word: "tear",
        default_variant: "cry",
        variants: &[("cry", "teer"), ("rip", "tair")],
        rules: &[
            (
                "cry",
                Window::After,
                r"^(?:rolled|ran|fell|streamed|drops?|gas|ducts?|stained|jerker|in\s+(?:his|her|my|your|their)\s+eye)\b",
            ),
            ("rip", Window::Before, r"\bwear\s+and$"),
            ("rip", Window::Before, MODALS),
            (
                "rip",
                Window::After,
                r"^(?:apart|up|down|off|open|into|through|it|them|out)\b",
            ),
        ],
    },
    HomographSpec {
        word: "wind",
        default_variant: "air",
        variants: &[("air", "wind"), ("coil", "wynd")],
        rules: &[
            ("air", Window::Before, r"\b(?:the|a|strong|cold|north|south|east|west|gentle|howling)$"),
            ("coil", Window::Before, MODALS),
            (
                "coil",
                Window::After,
                r"^(?:up|down|it|your|my|his|her|its|their|around|back)\b",
            ),
        ],
    },
    HomographSpec {
        word: "wound",
        default_variant: "injury",
        variants: &[("injury", "woond"), ("coiled", "wownd")],
        rules: &[
            ("injury", Window::Before, r"\b(?:the|a|an|his|her|my|your|their|our|its)$"),
            ("coiled", Window::Before, r"\b(?:was|were|had|has|have|been|tightly|got)$"),
            ("coiled", Window::After, r"^(?:up|down|around|tight|tightly)\b"),
            // Transitive verb: "wound the clock", "wound it up"
            (
                "coiled",
                Window::After,
                r"^(?:the|a|an|his|her|my|your|their|our|its|it|them|this)\b",
            ),
        ],
    },
    HomographSpec {
        word: "bass",
        default_variant: "music",
        variants: &[("music", "bayss"), ("fish", "bass")],
        rules: &[
            (
                "fish",
                Window::Before,
                r"\b(?:fish|fishing|caught|catch|catching|lake|river|striped|largemouth|smallmouth|sea|fried|grilled)\b",
            ),
            (
                "fish",
                Window::After,
                r"^(?:fishing|boat|lake|fillets?|pond|were\s+biting|bit)\b",
            ),
        ],
    },
    HomographSpec {
        word: "bow",
        default_variant: "bend",
        variants: &[("bend", "bau"), ("ribbon", "boh")],
        rules: &[
            ("ribbon", Window::After, r"^(?:and\s+arrows?|ties?|strings?|hunting|hunter)\b"),
            (
                "ribbon",
                Window::Before,
                r"\b(?:tied|ribbon|pink|red|violin|cello|cross|long|velvet|silk)(?:\s+(?:a|the|in\s+a))?$",
            ),
            ("ribbon", Window::Before, r"\b(?:tie|with)\s+(?:a|the)$"),
        ],
    },
    HomographSpec {
        word: "close",
        default_variant: "verb",
        variants: &[("verb", "kloze"), ("near", "klohss")],
        rules: &[
            ("verb", Window::Before, MODALS),
            (
                "near",
                Window::After,
                r"^(?:to|by|friends?|calls?|range|relationship|attention|enough|together|relatives?|proximity|contact|second|race)\b",
            ),
            (
                "near",
                Window::Before,
                r"\b(?:so|too|very|quite|fairly|pretty|really|up|get|got|getting|is|are|was|were|stay|came|draw)$",
            ),
        ],
    },
    HomographSpec {
        word: "minute",
        default_variant: "time",
        variants: &[("time", "minit"), ("tiny", "mynoot")],
        rules: &[
            (
                "tiny",
                Window::After,
                r"^(?:details?|amounts?|quantities|quantity|traces?|particles?|differences?|changes?|fraction)\b",
            ),
            ("tiny", Window::Before, r"\b(?:very|extremely|so|such|quite)$"),
        ],
    },
];
