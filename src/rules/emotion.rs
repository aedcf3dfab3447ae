use crate::models::Emotion;

/// Words that signal an emotion when read aloud
pub const EMOTION_WORDS: &[(&str, Emotion)] = &[
    ("happy", Emotion::Joy),
    ("glad", Emotion::Joy),
    ("delighted", Emotion::Joy),
    ("wonderful", Emotion::Joy),
    ("fantastic", Emotion::Joy),
    ("great", Emotion::Joy),
    ("love", Emotion::Joy),
    ("excited", Emotion::Joy),
    ("thrilled", Emotion::Joy),
    ("yay", Emotion::Joy),
    ("hooray", Emotion::Joy),
    ("sad", Emotion::Sadness),
    ("unhappy", Emotion::Sadness),
    ("sorry", Emotion::Sadness),
    ("miss", Emotion::Sadness),
    ("lonely", Emotion::Sadness),
    ("heartbroken", Emotion::Sadness),
    ("tragic", Emotion::Sadness),
    ("unfortunately", Emotion::Sadness),
    ("grief", Emotion::Sadness),
    ("angry", Emotion::Anger),
    ("furious", Emotion::Anger),
    ("hate", Emotion::Anger),
    ("annoyed", Emotion::Anger),
    ("outraged", Emotion::Anger),
    ("unacceptable", Emotion::Anger),
    ("ridiculous", Emotion::Anger),
    ("wow", Emotion::Surprise),
    ("whoa", Emotion::Surprise),
    ("amazing", Emotion::Surprise),
    ("unbelievable", Emotion::Surprise),
    ("incredible", Emotion::Surprise),
    ("surprised", Emotion::Surprise),
    ("shocked", Emotion::Surprise),
    ("afraid", Emotion::Fear),
    ("scared", Emotion::Fear),
    ("terrified", Emotion::Fear),
    ("frightened", Emotion::Fear),
    ("worried", Emotion::Fear),
    ("nervous", Emotion::Fear),
    ("help", Emotion::Fear),
];

/// Words that strengthen the emotion of the word after them
pub const INTENSIFIERS: &[&str] = &[
    "very", "so", "really", "extremely", "incredibly", "truly", "absolutely", "totally",
    "utterly", "deeply", "super",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_emotion_words_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for (word, _) in EMOTION_WORDS {
            assert_eq!(*word, word.to_lowercase());
            assert!(seen.insert(*word), "duplicate {}", word);
        }
    }

    #[test]
    fn test_every_emotion_has_words() {
        for emotion in [
            Emotion::Joy,
            Emotion::Sadness,
            Emotion::Anger,
            Emotion::Surprise,
            Emotion::Fear,
        ] {
            assert!(EMOTION_WORDS.iter().any(|(_, e)| *e == emotion));
        }
    }
}
