/// Unambiguous contractions and their expansions (lowercase, ASCII apostrophe)
///
/// Forms ending in `'d` and pronoun `'s` are resolved from context and are
/// not listed here.
pub const EXPANSIONS: &[(&str, &str)] = &[
    ("ain't", "am not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("couldn't", "could not"),
    ("could've", "could have"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'll", "he will"),
    ("here's", "here is"),
    ("how's", "how is"),
    ("i'll", "I will"),
    ("i'm", "I am"),
    ("i've", "I have"),
    ("isn't", "is not"),
    ("it'll", "it will"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mightn't", "might not"),
    ("might've", "might have"),
    ("mustn't", "must not"),
    ("must've", "must have"),
    ("needn't", "need not"),
    ("shan't", "shall not"),
    ("she'll", "she will"),
    ("shouldn't", "should not"),
    ("should've", "should have"),
    ("that'll", "that will"),
    ("there'll", "there will"),
    ("there're", "there are"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what've", "what have"),
    ("where've", "where have"),
    ("who'll", "who will"),
    ("who're", "who are"),
    ("who've", "who have"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("would've", "would have"),
    ("y'all", "you all"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
];

/// Contractions the synthesis engine tends to mispronounce
///
/// Hybrid mode expands these and leaves everything else alone.
pub const PROBLEMATIC: &[&str] = &[
    "i'll", "you'll", "we'll", "they'll", "he'll", "she'll", "it'll", "that'll", "there'll",
    "what'll", "who'll", "i'd", "you'd", "he'd", "she'd", "we'd", "they'd", "it'd", "that'd",
    "there'd", "who'd", "i've", "you've", "we've", "they've", "would've", "could've",
    "should've", "might've", "must've", "y'all", "ain't", "shan't", "mightn't", "needn't",
    "there're", "what're", "who're",
];

/// Contractions the engine already reads well
pub const NATURAL: &[&str] = &[
    "don't", "can't", "won't", "isn't", "aren't", "wasn't", "weren't", "doesn't", "didn't",
    "hasn't", "haven't", "hadn't", "couldn't", "shouldn't", "wouldn't", "mustn't", "it's",
    "that's", "what's", "he's", "she's", "there's", "here's", "where's", "who's", "how's",
    "let's", "i'm", "you're", "we're", "they're", "ma'am",
];

/// Phonetic respellings used by phonetic mode
pub const PHONETIC: &[(&str, &str)] = &[
    ("wasn't", "wuznt"),
    ("isn't", "iznt"),
    ("doesn't", "duznt"),
    ("didn't", "didnt"),
    ("hasn't", "haznt"),
    ("haven't", "havnt"),
    ("hadn't", "hadnt"),
    ("aren't", "arnt"),
    ("weren't", "wernt"),
    ("couldn't", "koodnt"),
    ("shouldn't", "shoodnt"),
    ("wouldn't", "woodnt"),
    ("mustn't", "musnt"),
    ("won't", "wohnt"),
    ("don't", "dohnt"),
    ("can't", "kant"),
    ("ain't", "aint"),
    ("i'll", "ile"),
    ("you'll", "yool"),
    ("we'll", "weel"),
    ("they'll", "thayl"),
    ("it'll", "itl"),
    ("i've", "ive"),
    ("would've", "woodev"),
    ("could've", "koodev"),
    ("should've", "shoodev"),
    ("y'all", "yawl"),
];

/// Words that may carry a contextual `'d` or `'s`
pub const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "that", "there", "here", "what", "where",
    "who", "how", "when", "why", "this", "everyone", "everybody", "someone", "somebody",
    "nobody", "something", "everything", "nothing",
];

/// Adverbs skipped when looking at the word after `'d` or `'s`
pub const SKIPPABLE_ADVERBS: &[&str] = &[
    "never", "already", "just", "always", "ever", "not", "really", "also", "probably",
    "definitely", "certainly", "only", "still", "rather", "actually", "surely", "all",
];

/// Irregular past participles (regular ones end in "-ed")
pub const PAST_PARTICIPLES: &[&str] = &[
    "been", "done", "gone", "seen", "taken", "given", "eaten", "written", "spoken", "broken",
    "chosen", "driven", "forgotten", "gotten", "got", "known", "shown", "thrown", "grown",
    "flown", "drawn", "worn", "torn", "sworn", "born", "beaten", "bitten", "hidden", "ridden",
    "risen", "stolen", "frozen", "woken", "fallen", "forgiven", "shaken", "begun", "run",
    "come", "become", "made", "had", "heard", "said", "told", "sold", "found", "thought",
    "bought", "brought", "caught", "taught", "fought", "sought", "left", "lost", "kept",
    "slept", "felt", "dealt", "meant", "met", "read", "led", "fed", "held", "built", "sent",
    "spent", "lent", "bent", "paid", "laid", "won", "sung", "rung", "swum", "drunk", "sunk",
    "stuck", "struck", "hung", "understood", "stood", "put", "set", "let", "cut", "hit",
    "hurt", "quit",
];

/// Words ending in "-ed" that are not participles
pub const FALSE_PARTICIPLES: &[&str] = &[
    "bed", "red", "shed", "wed", "need", "feed", "seed", "speed", "bleed", "breed", "weed",
    "proceed", "succeed", "exceed", "indeed", "sled", "shred",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_lowercase() {
        for (key, _) in EXPANSIONS.iter().chain(PHONETIC.iter()) {
            assert_eq!(*key, key.to_lowercase());
        }
        for key in PROBLEMATIC.iter().chain(NATURAL.iter()) {
            assert_eq!(*key, key.to_lowercase());
        }
    }

    #[test]
    fn test_problematic_and_natural_disjoint() {
        let problematic: HashSet<&str> = PROBLEMATIC.iter().copied().collect();
        for key in NATURAL {
            assert!(!problematic.contains(key), "{} in both sets", key);
        }
    }

    #[test]
    fn test_no_duplicate_expansions() {
        let mut seen = HashSet::new();
        for (key, _) in EXPANSIONS {
            assert!(seen.insert(*key), "duplicate {}", key);
        }
    }
}
