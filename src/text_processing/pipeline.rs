use std::time::Instant;

use super::abbreviations::AbbreviationProcessor;
use super::contractions::ContractionProcessor;
use super::datetime::DateTimeProcessor;
use super::numeric::NumericCurrencyProcessor;
use super::pronunciation::PronunciationProcessor;
use super::prosody::ProsodyAnnotator;
use super::symbols::SymbolProcessor;
use super::working_text::WorkingText;
use crate::error::StageError;
use crate::models::{NormalizationResult, ProcessingOptions, RuleKind, Stage};
use crate::rules::RuleTables;

/// Per-stage view of the request
pub struct StageContext<'a> {
    pub options: &'a ProcessingOptions,
    pub tables: &'a RuleTables,
    warnings: Vec<String>,
}

impl<'a> StageContext<'a> {
    pub fn new(options: &'a ProcessingOptions, tables: &'a RuleTables) -> Self {
        Self {
            options,
            tables,
            warnings: Vec::new(),
        }
    }

    /// Record a recoverable problem; the affected span stays as written
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("{}", message);
        self.warnings.push(message);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}

/// One text-rewriting pipeline stage
pub trait Processor: Send + Sync {
    fn stage(&self) -> Stage;

    fn name(&self) -> &'static str {
        self.stage().name()
    }

    /// Rewrite unlocked parts of `text`
    ///
    /// An `Err` makes the orchestrator discard everything this stage did.
    fn process(&self, text: &mut WorkingText, ctx: &mut StageContext<'_>)
        -> Result<(), StageError>;
}

/// Static description of a pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
    pub stage: Stage,
    /// Kinds of change the stage may record
    pub rule_kinds: &'static [RuleKind],
    pub rewrites_text: bool,
}

/// Every stage, in the order it runs
pub const PIPELINE_STAGES: [StageDescriptor; 7] = [
    StageDescriptor {
        stage: Stage::NumericCurrency,
        rule_kinds: &[RuleKind::Currency, RuleKind::Numeric],
        rewrites_text: true,
    },
    StageDescriptor {
        stage: Stage::DateTime,
        rule_kinds: &[RuleKind::DateTime],
        rewrites_text: true,
    },
    StageDescriptor {
        stage: Stage::Contraction,
        rule_kinds: &[RuleKind::Contraction],
        rewrites_text: true,
    },
    StageDescriptor {
        stage: Stage::Abbreviation,
        rule_kinds: &[RuleKind::Abbreviation],
        rewrites_text: true,
    },
    StageDescriptor {
        stage: Stage::SymbolPunctuation,
        rule_kinds: &[RuleKind::Symbol],
        rewrites_text: true,
    },
    StageDescriptor {
        stage: Stage::Pronunciation,
        rule_kinds: &[RuleKind::Pronunciation, RuleKind::Homograph],
        rewrites_text: true,
    },
    StageDescriptor {
        stage: Stage::Prosody,
        rule_kinds: &[],
        rewrites_text: false,
    },
];

/// Position of a stage in [`PIPELINE_STAGES`]
pub fn stage_position(stage: Stage) -> usize {
    PIPELINE_STAGES
        .iter()
        .position(|d| d.stage == stage)
        .unwrap_or(PIPELINE_STAGES.len())
}

fn processor_for(stage: Stage) -> Option<Box<dyn Processor>> {
    match stage {
        Stage::NumericCurrency => Some(Box::new(NumericCurrencyProcessor)),
        Stage::DateTime => Some(Box::new(DateTimeProcessor)),
        Stage::Contraction => Some(Box::new(ContractionProcessor)),
        Stage::Abbreviation => Some(Box::new(AbbreviationProcessor)),
        Stage::SymbolPunctuation => Some(Box::new(SymbolProcessor)),
        Stage::Pronunciation => Some(Box::new(PronunciationProcessor)),
        Stage::Prosody => None,
    }
}

/// Runs the active stages over one request
pub struct Pipeline {
    processors: Vec<Box<dyn Processor>>,
    annotator: ProsodyAnnotator,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        let processors = PIPELINE_STAGES
            .iter()
            .filter(|d| d.rewrites_text)
            .filter_map(|d| processor_for(d.stage))
            .collect();
        Self::with_processors(processors)
    }

    /// Pipeline over a custom processor list, sorted into stage order
    pub fn with_processors(mut processors: Vec<Box<dyn Processor>>) -> Self {
        processors.sort_by_key(|p| stage_position(p.stage()));
        Self {
            processors,
            annotator: ProsodyAnnotator,
        }
    }

    /// Names of the processors in run order
    pub fn processor_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Normalize already-validated, NFC-composed text
    ///
    /// A failing stage is rolled back and reported as a warning; the result
    /// always carries text.
    pub fn run(
        &self,
        text: &str,
        options: &ProcessingOptions,
        tables: &RuleTables,
    ) -> NormalizationResult {
        let started = Instant::now();
        let mode = options.mode();

        if text.is_empty() {
            return NormalizationResult::unchanged(String::new(), mode);
        }

        let mut working = WorkingText::new(text);
        let mut warnings = Vec::new();
        let mut stages = Vec::new();

        for processor in &self.processors {
            let stage = processor.stage();
            if !options.is_stage_enabled(stage) {
                continue;
            }

            let stage_started = Instant::now();
            let snapshot = working.clone();
            let changes_before = working.changes().len();
            let mut ctx = StageContext::new(options, tables);

            match processor.process(&mut working, &mut ctx) {
                Ok(()) => {
                    warnings.extend(ctx.take_warnings());
                    tracing::debug!(
                        stage = processor.name(),
                        changes = working.changes().len() - changes_before,
                        elapsed_us = stage_started.elapsed().as_micros() as u64,
                        "Stage complete"
                    );
                }
                Err(e) => {
                    working = snapshot;
                    tracing::warn!(stage = processor.name(), error = %e, "Stage failed, rolled back");
                    warnings.push(format!("{} stage skipped: {}", processor.name(), e));
                }
            }
            stages.push(processor.name());
        }

        let (processed_text, changes) = working.into_parts();

        let prosody_markers = if options.is_stage_enabled(Stage::Prosody) {
            stages.push(Stage::Prosody.name());
            self.annotator.annotate(&processed_text, tables)
        } else {
            Vec::new()
        };

        NormalizationResult {
            processed_text,
            changes,
            prosody_markers,
            duration_ms: started.elapsed().as_secs_f64() * 1000.0,
            warnings,
            mode,
            stages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessingMode;
    use crate::text_processing::working_text::Edit;

    fn tables() -> RuleTables {
        RuleTables::builtin().unwrap()
    }

    #[test]
    fn test_stage_list_matches_fixed_order() {
        let stages: Vec<Stage> = PIPELINE_STAGES.iter().map(|d| d.stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
    }

    #[test]
    fn test_only_prosody_is_read_only() {
        for descriptor in PIPELINE_STAGES {
            assert_eq!(descriptor.rewrites_text, descriptor.stage != Stage::Prosody);
        }
        assert_eq!(PIPELINE_STAGES.last().map(|d| d.stage), Some(Stage::Prosody));
    }

    #[test]
    fn test_currency_runs_before_symbols() {
        assert!(stage_position(Stage::NumericCurrency) < stage_position(Stage::SymbolPunctuation));
        assert!(stage_position(Stage::DateTime) < stage_position(Stage::Abbreviation));
    }

    #[test]
    fn test_processors_follow_stage_list() {
        let pipeline = Pipeline::new();
        assert_eq!(
            pipeline.processor_names(),
            vec![
                "numeric_currency",
                "datetime",
                "contraction",
                "abbreviation",
                "symbol_punctuation",
                "pronunciation"
            ]
        );
    }

    struct Failing;

    impl Processor for Failing {
        fn stage(&self) -> Stage {
            Stage::Contraction
        }

        fn process(
            &self,
            text: &mut WorkingText,
            _ctx: &mut StageContext<'_>,
        ) -> Result<(), StageError> {
            text.apply(vec![Edit::new(0..5, "HELLO", RuleKind::Contraction)], "failing")?;
            Err(StageError::Conversion("boom".to_string()))
        }
    }

    struct Shouting;

    impl Processor for Shouting {
        fn stage(&self) -> Stage {
            Stage::Pronunciation
        }

        fn process(
            &self,
            text: &mut WorkingText,
            _ctx: &mut StageContext<'_>,
        ) -> Result<(), StageError> {
            let len = text.text().len();
            let upper = text.text().to_uppercase();
            text.apply(vec![Edit::new(0..len, upper, RuleKind::Pronunciation)], "shouting")?;
            Ok(())
        }
    }

    #[test]
    fn test_failing_stage_is_rolled_back() {
        let pipeline = Pipeline::with_processors(vec![Box::new(Shouting), Box::new(Failing)]);
        let options = ProcessingOptions::for_mode(ProcessingMode::Enhanced);

        let result = pipeline.run("hello world", &options, &tables());

        assert_eq!(result.processed_text, "HELLO WORLD");
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].processor_name, "shouting");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("contraction"));
        assert!(result.warnings[0].contains("boom"));
    }

    #[test]
    fn test_disabled_stages_are_skipped() {
        let pipeline = Pipeline::with_processors(vec![Box::new(Shouting)]);
        let options = ProcessingOptions::for_mode(ProcessingMode::Basic);

        let result = pipeline.run("hello", &options, &tables());

        assert_eq!(result.processed_text, "hello");
        assert!(result.stages.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let pipeline = Pipeline::new();
        let result = pipeline.run("", &ProcessingOptions::default(), &tables());

        assert_eq!(result.processed_text, "");
        assert!(result.changes.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_premium_reports_prosody_stage() {
        let pipeline = Pipeline::new();
        let options = ProcessingOptions::for_mode(ProcessingMode::Premium);

        let result = pipeline.run("Really?", &options, &tables());

        assert_eq!(result.stages.last(), Some(&"prosody"));
        assert!(!result.prosody_markers.is_empty());
    }
}
