/// End-to-end tests for the normalization pipeline
///
/// Everything here goes through `Normalizer`, the same way an embedding
/// service would.
use porua_normalizer::config::constants::MAX_TEXT_LENGTH;
use porua_normalizer::{
    AbbreviationMode, ContractionMode, MarkerKind, NormalizerConfig, Normalizer, NormalizerError,
    ProcessingMode, ProcessingOptions, RuleKind,
};
use std::io::Write;
use std::thread;
use tempfile::NamedTempFile;

fn normalize(text: &str) -> String {
    let normalizer = Normalizer::builtin().unwrap();
    normalizer
        .normalize(text, &normalizer.default_options())
        .unwrap()
        .processed_text
}

#[test]
fn test_reference_sentences() {
    assert_eq!(
        normalize("$1,234.56"),
        "one thousand two hundred thirty-four dollars and fifty-six cents"
    );
    assert_eq!(
        normalize("2024-12-25"),
        "December twenty-fifth, twenty twenty-four"
    );
    assert_eq!(normalize("I'll be there"), "I will be there");
    assert_eq!(normalize("don't worry"), "don't worry");
    assert_eq!(normalize("ASAP"), "A S A P");
    assert_eq!(normalize("Hmm, that's odd"), "Hm, that's odd");
}

#[test]
fn test_second_pass_changes_nothing() {
    let inputs = [
        "$1,234.56 & more",
        "2024-12-25",
        "I'll be there",
        "Hmm, that's odd",
        "I read the book yesterday.",
        "The rate rose by 15% last year.",
    ];

    for input in inputs {
        let once = normalize(input);
        let twice = normalize(&once);
        assert_eq!(once, twice, "not stable for {:?}", input);
    }
}

#[test]
fn test_second_pass_changes_nothing_in_any_mode() {
    let inputs = [
        "The APIs are down",
        "Two CPUs and three GPUs",
        "a * b and **bold** text",
        "* first item",
        "Meet at 3:30pm or 10:15am",
        "March 3rd, 2021",
        "25th December 2024",
        "Dec 25th 2024",
        "I'll be there",
        "Hmm, that's odd",
        "She's gone and we'd left",
        "$1,234.56 & more",
        "The '90s had ~10 hits",
        "He wound the clock",
    ];
    let normalizer = Normalizer::builtin().unwrap();

    for mode in [
        ProcessingMode::Standard,
        ProcessingMode::Enhanced,
        ProcessingMode::Premium,
    ] {
        for contraction_mode in [
            ContractionMode::Natural,
            ContractionMode::Phonetic,
            ContractionMode::Expanded,
            ContractionMode::Hybrid,
        ] {
            for abbreviation_mode in [
                AbbreviationMode::SpellOut,
                AbbreviationMode::Expand,
                AbbreviationMode::Hybrid,
            ] {
                let options = ProcessingOptions::builder()
                    .mode(mode)
                    .contraction_mode(contraction_mode)
                    .abbreviation_mode(abbreviation_mode)
                    .build()
                    .unwrap();
                for input in inputs {
                    let once = normalizer.normalize(input, &options).unwrap().processed_text;
                    let twice = normalizer.normalize(&once, &options).unwrap().processed_text;
                    assert_eq!(
                        once, twice,
                        "not stable for {:?} in {:?}/{:?}/{:?}",
                        input, mode, contraction_mode, abbreviation_mode
                    );
                }
            }
        }
    }
}

#[test]
fn test_plural_acronym_with_expanded_contractions() {
    let normalizer = Normalizer::builtin().unwrap();
    let options = ProcessingOptions::builder()
        .contraction_mode(ContractionMode::Expanded)
        .abbreviation_mode(AbbreviationMode::SpellOut)
        .build()
        .unwrap();
    let result = normalizer.normalize("The APIs are down", &options).unwrap();
    assert_eq!(result.processed_text, "The A P I's are down");
}

#[test]
fn test_written_dates_with_ordinal_days() {
    assert_eq!(normalize("March 3rd, 2021"), "March third, twenty twenty-one");
    assert_eq!(
        normalize("25th December 2024"),
        "the twenty-fifth of December, twenty twenty-four"
    );
    assert_eq!(normalize("Meet at 3:30pm"), "Meet at three thirty PM");
}

#[test]
fn test_change_spans_do_not_overlap() {
    let normalizer = Normalizer::builtin().unwrap();
    let input = "On 2024-12-25 I'll pay $1,234.56 & 15% more \u{2014} Hmm, odd.";
    let result = normalizer
        .normalize(input, &normalizer.default_options())
        .unwrap();

    assert!(result.changes.len() >= 5);

    let mut spans: Vec<_> = result.changes.iter().map(|c| c.span.clone()).collect();
    spans.sort_by_key(|s| s.start);
    for pair in spans.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "{:?} overlaps {:?}",
            pair[0],
            pair[1]
        );
    }

    for change in &result.changes {
        assert_eq!(&input[change.span.clone()], change.original);
    }
}

#[test]
fn test_currency_runs_before_symbols() {
    let normalizer = Normalizer::builtin().unwrap();
    let result = normalizer
        .normalize("$5 & $10", &normalizer.default_options())
        .unwrap();

    assert_eq!(result.processed_text, "five dollars and ten dollars");

    let last_currency = result
        .changes
        .iter()
        .rposition(|c| c.rule_kind == RuleKind::Currency)
        .unwrap();
    let first_symbol = result
        .changes
        .iter()
        .position(|c| c.rule_kind == RuleKind::Symbol)
        .unwrap();
    assert!(last_currency < first_symbol);
}

#[test]
fn test_stages_follow_mode() {
    let normalizer = Normalizer::builtin().unwrap();
    let text = "I'll pay $5 on 2024-12-25";

    let basic = normalizer
        .normalize(text, &ProcessingOptions::for_mode(ProcessingMode::Basic))
        .unwrap();
    assert_eq!(basic.stages, vec!["numeric_currency", "symbol_punctuation"]);
    assert!(basic.processed_text.contains("I'll"));
    assert!(basic.processed_text.contains("five dollars"));

    let premium = normalizer
        .normalize(text, &ProcessingOptions::for_mode(ProcessingMode::Premium))
        .unwrap();
    assert_eq!(premium.stages.len(), 7);
    assert_eq!(premium.stages.last(), Some(&"prosody"));
    assert_eq!(
        premium.processed_text,
        "I will pay five dollars on December twenty-fifth, twenty twenty-four"
    );
}

#[test]
fn test_empty_input() {
    let normalizer = Normalizer::builtin().unwrap();
    let result = normalizer.normalize("", &normalizer.default_options()).unwrap();

    assert_eq!(result.processed_text, "");
    assert!(result.changes.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_length_limit_boundary() {
    let normalizer = Normalizer::builtin().unwrap();
    let options = normalizer.default_options();

    let at_limit = "a".repeat(MAX_TEXT_LENGTH);
    let result = normalizer.normalize(&at_limit, &options).unwrap();
    assert_eq!(result.processed_text, at_limit);

    let over_limit = "a".repeat(MAX_TEXT_LENGTH + 1);
    match normalizer.normalize(&over_limit, &options) {
        Err(NormalizerError::InputTooLong { length, max }) => {
            assert_eq!(length, MAX_TEXT_LENGTH + 1);
            assert_eq!(max, MAX_TEXT_LENGTH);
        }
        other => panic!("expected InputTooLong, got {:?}", other.map(|r| r.processed_text)),
    }
}

#[test]
fn test_concurrent_requests_share_one_normalizer() {
    let normalizer = Normalizer::builtin().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let normalizer = normalizer.clone();
            thread::spawn(move || {
                let options = normalizer.default_options();
                let text = format!("Item {} costs ${}", i, i + 1);
                normalizer.normalize(&text, &options).unwrap().processed_text
            })
        })
        .collect();

    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(outputs[0], "Item zero costs one dollar");
    assert_eq!(outputs[1], "Item one costs two dollars");
    assert_eq!(outputs[7], "Item seven costs eight dollars");
}

#[test]
fn test_dictionary_file_extends_tables() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "pronunciations": {{"porua": "poh-roo-ah"}},
            "abbreviations": {{"ACME": {{"class": "spell_out"}}}}
        }}"#
    )
    .unwrap();

    let config = NormalizerConfig {
        dictionary_file: Some(file.path().to_path_buf()),
        ..NormalizerConfig::default()
    };
    let normalizer = Normalizer::new(config).unwrap();
    let result = normalizer
        .normalize("Porua works at ACME", &normalizer.default_options())
        .unwrap();

    assert_eq!(result.processed_text, "Poh-roo-ah works at A C M E");
    assert!(result.changes_of_kind(RuleKind::Pronunciation).next().is_some());
    assert!(result.changes_of_kind(RuleKind::Abbreviation).next().is_some());
}

#[test]
fn test_broken_dictionary_fails_at_startup() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"homographs": [{{"word": "row", "default": "x", "variants": {{}}}}]}}"#)
        .unwrap();

    let config = NormalizerConfig {
        dictionary_file: Some(file.path().to_path_buf()),
        ..NormalizerConfig::default()
    };
    let err = Normalizer::new(config).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_premium_prosody_markers() {
    let normalizer = Normalizer::builtin().unwrap();
    let result = normalizer
        .normalize(
            "Is it true? I'm so happy!",
            &ProcessingOptions::for_mode(ProcessingMode::Premium),
        )
        .unwrap();

    let kinds: Vec<MarkerKind> = result.prosody_markers.iter().map(|m| m.marker_kind).collect();
    assert!(kinds.contains(&MarkerKind::Question));
    assert!(kinds.contains(&MarkerKind::Exclamation));
    assert!(kinds.iter().any(|k| matches!(k, MarkerKind::Emotion(_))));

    for marker in &result.prosody_markers {
        assert!(marker.offset <= result.processed_text.len());
        assert!((0.0..=1.0).contains(&marker.strength));
    }
    assert!(result
        .prosody_markers
        .windows(2)
        .all(|pair| pair[0].offset <= pair[1].offset));
}

#[test]
fn test_enhanced_has_no_prosody_markers() {
    let normalizer = Normalizer::builtin().unwrap();
    let result = normalizer
        .normalize("Is it true? I'm so happy!", &normalizer.default_options())
        .unwrap();

    assert!(result.prosody_markers.is_empty());
}

#[test]
fn test_json_output_shape() {
    let normalizer = Normalizer::builtin().unwrap();
    let result = normalizer
        .normalize("Pay $5", &normalizer.default_options())
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["processed_text"], "Pay five dollars");
    assert_eq!(json["mode"], "enhanced");
    assert_eq!(json["changes"][0]["rule_kind"], "currency");
    assert_eq!(json["changes"][0]["processor_name"], "numeric_currency");
}
