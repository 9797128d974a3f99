//! Rule-based command classification.
//!
//! Commands are matched against an ordered list of rules. Each rule is a set of
//! keywords and a canned reply. The first rule with a keyword contained in the
//! lowercased command wins. Commands that match no rule go to the completion
//! service.

use crate::CommandResult;

/// A single shortcut: any keyword contained in the command triggers the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    /// `lower` must already be lowercased.
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|kw| lower.contains(kw))
    }

    fn to_result(&self) -> CommandResult {
        CommandResult::english(self.reply)
    }
}

pub const STOP_RULE: Rule = Rule {
    name: "stop",
    keywords: &["stop", "quit", "cancel"],
    reply: "✅ Speech stopped.",
};

pub const OPEN_GOOGLE_RULE: Rule = Rule {
    name: "open_google",
    keywords: &["open google"],
    reply: "🌐 Opening Google...",
};

pub const OPEN_YOUTUBE_RULE: Rule = Rule {
    name: "open_youtube",
    keywords: &["open youtube"],
    reply: "📺 Opening YouTube...",
};

/// Evaluates rules in order with first-match-wins semantics.
#[derive(Debug, Clone)]
pub struct CommandClassifier {
    rules: Vec<Rule>,
}

impl Default for CommandClassifier {
    fn default() -> Self {
        Self::new(vec![STOP_RULE, OPEN_GOOGLE_RULE, OPEN_YOUTUBE_RULE])
    }
}

impl CommandClassifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Returns the first rule matching the command, if any.
    fn matching_rule(&self, command: &str) -> Option<&Rule> {
        let lower = command.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lower))
    }

    /// Returns the matching rule's name and canned result for a shortcut
    /// command, or `None` when the command should be delegated.
    pub fn classify(&self, command: &str) -> Option<(&'static str, CommandResult)> {
        self.matching_rule(command)
            .map(|rule| (rule.name, rule.to_result()))
    }
}
