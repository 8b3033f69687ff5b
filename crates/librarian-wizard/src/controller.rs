use librarian_export::ExportPayload;
use librarian_extraction::Extractor;
use librarian_record::{DraftRecord, RecordEditError, RecordField};
use librarian_utils::logging::{log_finalized, log_ignored, log_transition, wizard_span};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::hook::ProcessingHook;
use crate::stage::{IgnoreReason, Outcome, Stage};

/// Read-only projection of the wizard for presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub stage: Stage,
    pub snippet: String,
    pub record: DraftRecord,
}

/// Shared view of whether a processing hook is pending.
///
/// Cloned out of the controller so it can be polled while `submit_with`
/// holds the controller borrowed.
#[derive(Debug, Clone, Default)]
pub struct ProcessingIndicator(Arc<AtomicBool>);

impl ProcessingIndicator {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn set(&self, active: bool) {
        self.0.store(active, Ordering::Release);
    }
}

/// Clears the indicator when the hook finishes or its future is dropped
struct ProcessingGuard<'a>(&'a ProcessingIndicator);

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Drives one snippet through Input, Review and Finalized.
#[derive(Debug, Default)]
pub struct WizardController {
    extractor: Extractor,
    stage: Stage,
    snippet: String,
    draft: Option<DraftRecord>,
    payload: Option<ExportPayload>,
    processing: ProcessingIndicator,
}

impl WizardController {
    /// Controller using the default extractor options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_extractor(extractor: Extractor) -> Self {
        Self {
            extractor,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Snapshot of stage, stored snippet and current draft.
    ///
    /// Without a draft (fresh or reset), the all-defaults record is reported.
    #[must_use]
    pub fn state(&self) -> WizardState {
        WizardState {
            stage: self.stage,
            snippet: self.snippet.clone(),
            record: self.draft.clone().unwrap_or_default(),
        }
    }

    /// The frozen payload; only present in `Finalized`
    #[must_use]
    pub fn export_payload(&self) -> Option<&ExportPayload> {
        match self.stage {
            Stage::Finalized => self.payload.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing.is_active()
    }

    #[must_use]
    pub fn processing_indicator(&self) -> ProcessingIndicator {
        self.processing.clone()
    }

    /// Analyze a snippet and move to `Review`.
    ///
    /// Blank snippets are ignored. Re-submitting the exact snippet already
    /// held after `back` keeps the edited draft instead of re-analyzing.
    pub fn submit(&mut self, snippet: &str) -> Outcome {
        let span = wizard_span("submit", self.stage.as_str());
        let _guard = span.enter();

        if let Some(reason) = self.submit_blocker(snippet) {
            return self.ignored("submit", reason);
        }

        let retained = self.draft.is_some() && self.snippet == snippet;
        if !retained {
            self.snippet = snippet.to_string();
            self.draft = Some(self.extractor.analyze(snippet).to_draft());
        }
        tracing::debug!(retained, snippet_bytes = snippet.len(), "Snippet accepted");

        self.transition("submit", Stage::Review)
    }

    /// [`submit`](Self::submit) after awaiting `hook`.
    ///
    /// Ignored submissions return without awaiting the hook.
    pub async fn submit_with(&mut self, snippet: &str, hook: &dyn ProcessingHook) -> Outcome {
        if let Some(reason) = self.submit_blocker(snippet) {
            return self.ignored("submit", reason);
        }

        {
            self.processing.set(true);
            let _processing = ProcessingGuard(&self.processing);
            hook.before_analysis().await;
        }

        self.submit(snippet)
    }

    /// Update one draft field.
    ///
    /// Dependencies are stored as the raw text; category values must name a
    /// member of the closed set.
    pub fn edit_field(&mut self, field: RecordField, value: &str) -> Outcome {
        let span = wizard_span("edit_field", self.stage.as_str());
        let _guard = span.enter();

        if let Some(reason) = self.require(Stage::Review) {
            return self.ignored("edit_field", reason);
        }

        let result = match self.draft.as_mut() {
            Some(draft) => draft.apply_edit(field, value),
            None => Ok(()),
        };
        match result {
            Ok(()) => {
                tracing::debug!(field = %field, "Draft field updated");
                Outcome::Applied
            }
            Err(RecordEditError::InvalidCategory { .. }) => {
                self.ignored("edit_field", IgnoreReason::InvalidCategory)
            }
        }
    }

    /// Return to `Input`, keeping the snippet and draft.
    pub fn back(&mut self) -> Outcome {
        let span = wizard_span("back", self.stage.as_str());
        let _guard = span.enter();

        if let Some(reason) = self.require(Stage::Review) {
            return self.ignored("back", reason);
        }
        self.transition("back", Stage::Input)
    }

    /// Freeze the draft and build the export payload.
    pub fn confirm(&mut self) -> Outcome {
        let span = wizard_span("confirm", self.stage.as_str());
        let _guard = span.enter();

        if let Some(reason) = self.require(Stage::Review) {
            return self.ignored("confirm", reason);
        }

        let record = self.draft.clone().unwrap_or_default().finalize();
        log_finalized(
            &record.name,
            record.category.as_str(),
            record.dependencies.len(),
            self.snippet.len(),
        );
        self.payload = Some(librarian_export::format(&record, &self.snippet));

        self.transition("confirm", Stage::Finalized)
    }

    /// Discard everything and return to `Input`. Valid from any stage.
    pub fn reset(&mut self) -> Outcome {
        let span = wizard_span("reset", self.stage.as_str());
        let _guard = span.enter();

        self.snippet.clear();
        self.draft = None;
        self.payload = None;

        self.transition("reset", Stage::Input)
    }

    fn submit_blocker(&self, snippet: &str) -> Option<IgnoreReason> {
        self.require(Stage::Input).or_else(|| {
            snippet
                .trim()
                .is_empty()
                .then_some(IgnoreReason::BlankSnippet)
        })
    }

    fn require(&self, expected: Stage) -> Option<IgnoreReason> {
        (self.stage != expected).then_some(IgnoreReason::WrongStage {
            expected,
            actual: self.stage,
        })
    }

    fn transition(&mut self, operation: &str, to: Stage) -> Outcome {
        log_transition(operation, self.stage.as_str(), to.as_str());
        self.stage = to;
        Outcome::Applied
    }

    fn ignored(&self, operation: &str, reason: IgnoreReason) -> Outcome {
        log_ignored(operation, self.stage.as_str(), &reason.to_string());
        Outcome::Ignored(reason)
    }
}
