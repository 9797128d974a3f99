//! Jarvis Command Pipeline
//!
//! Ties the classifier, the completion service and the language detector
//! together. Shortcut commands are answered immediately; everything else is
//! delegated to the completion service and tagged with the detected language
//! of the original input.

use crate::{
    CommandResult,
    classifier::CommandClassifier,
    completion::{CompletionOutcome, CompletionService},
    language::detect_language,
};
use tracing::{info, instrument};

/// Where a reply came from, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Shortcut(&'static str),
    Completion,
    CompletionFailed,
}

/// Stateless command processor shared by every request.
#[derive(Clone)]
pub struct JarvisAssistant {
    classifier: CommandClassifier,
    completion: CompletionService,
}

impl JarvisAssistant {
    pub fn new(classifier: CommandClassifier, completion: CompletionService) -> Self {
        Self {
            classifier,
            completion,
        }
    }

    /// Uses the default shortcut rules.
    pub fn with_completion(completion: CompletionService) -> Self {
        Self::new(CommandClassifier::default(), completion)
    }

    /// Produces the reply for a single command.
    pub async fn process_command(&self, command: &str) -> CommandResult {
        self.process_command_traced(command).await.0
    }

    /// Like `process_command`, also reporting which path produced the reply.
    #[instrument(name = "process_command", skip_all)]
    pub async fn process_command_traced(&self, command: &str) -> (CommandResult, ReplySource) {
        if let Some((rule, result)) = self.classifier.classify(command) {
            info!(rule, "Command matched a shortcut rule");
            return (result, ReplySource::Shortcut(rule));
        }

        // The detector only looks at the input, so it is independent of the
        // completion outcome.
        let outcome = self.completion.complete(command).await;
        let lang = detect_language(command);
        let source = match outcome {
            CompletionOutcome::Success(_) => ReplySource::Completion,
            CompletionOutcome::Failure(_) => ReplySource::CompletionFailed,
        };
        info!(lang = %lang, ?source, "Command delegated to completion service");

        (
            CommandResult {
                reply: outcome.into_reply(),
                lang,
            },
            source,
        )
    }
}
