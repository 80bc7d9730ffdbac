//! The ordered Markdown-to-Textile rule list
//!
//! Each rule is a global substitution over the whole working string, and each rule sees
//! the output of every rule before it. The order of [`rules()`] is therefore part of the
//! conversion's behaviour, not an implementation detail.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::Config;
use crate::parser::parse_table;
use crate::textile::{code_block_to_textile, table_to_textile};

/// Computes the replacement for one match.
pub type Transform = fn(&Captures<'_>, &Config) -> String;

pub enum Replacement {
    /// `$n`-style template, expanded by the regex crate
    Template(&'static str),
    Transform(Transform),
}

pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: Replacement,
}

impl Rule {
    fn template(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            pattern: compile(name, pattern),
            replacement: Replacement::Template(template),
        }
    }

    fn transform(name: &'static str, pattern: &str, transform: Transform) -> Self {
        Self {
            name,
            pattern: compile(name, pattern),
            replacement: Replacement::Transform(transform),
        }
    }

    /// Apply this rule to every match in `text`.
    pub fn apply(&self, text: &str, config: &Config) -> String {
        let rewritten = match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Transform(transform) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| transform(caps, config)),
        };
        if let Cow::Owned(_) = rewritten {
            log::trace!("rule `{}` matched", self.name);
        }
        rewritten.into_owned()
    }
}

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid regex for rule `{name}`: {e}"))
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::transform("heading", r"(?mR)^(#{1,6}) (.+)$", heading),
        // Bold text is fenced with U+E000 until italic has run, then restored to `*`
        Rule::template(
            "bold",
            r"\*\*([^*\n]+)\*\*|__([^_\n]+)__",
            "\u{E000}${1}${2}\u{E000}",
        ),
        Rule::template("italic", r"\*([^*\n]+)\*|_([^_\n]+)_", "_${1}${2}_"),
        Rule::template("bold_restore", r"\x{E000}", "*"),
        Rule::template("unordered_list", r"(?mR)^[-*] (.+)$", "* ${1}"),
        Rule::template("ordered_list", r"(?mR)^[0-9]+\. (.+)$", "# ${1}"),
        Rule::transform("link", r"(!?)\[([^\]]+)\]\(([^)]+)\)", link),
        Rule::template("image", r"!\[([^\]]+)\]\(([^)]+)\)", "!${2}(${1})!"),
        // Single line only, so code fences survive until the code block rule
        Rule::template("inline_code", r"`([^`\n]+)`", "@${1}@"),
        Rule::transform("code_block", r"(?s)```(\w+)?\n(.+?)\n```", code_block),
        Rule::template("blockquote", r"(?mR)^> (.+)$", "bq. ${1}"),
        Rule::template("horizontal_rule", r"(?mR)^---$", "---"),
        Rule::template("strikethrough", r"~~(.+?)~~", "-${1}-"),
        Rule::transform(
            "table",
            r"(?m)^\|[^\n]*\|(?:\n\|[ \t:|-]*\|)?(?:\n\|[^\n]*\|)*",
            table,
        ),
    ]
});

/// The rule set, in application order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

fn heading(caps: &Captures<'_>, _config: &Config) -> String {
    format!("h{}. {}\n", caps[1].len(), &caps[2])
}

fn link(caps: &Captures<'_>, _config: &Config) -> String {
    // `![alt](url)` belongs to the image rule
    if !caps[1].is_empty() {
        return caps[0].to_string();
    }
    format!("\"{}\":{}", &caps[2], &caps[3])
}

fn code_block(caps: &Captures<'_>, config: &Config) -> String {
    let language = caps.get(1).map(|m| m.as_str());
    code_block_to_textile(language, &caps[2], config.code_blocks.style)
}

fn table(caps: &Captures<'_>, _config: &Config) -> String {
    let block = &caps[0];
    match parse_table(block) {
        Some(parsed) => table_to_textile(&parsed),
        None => {
            log::debug!("pipe line without a second row left unchanged: {block:?}");
            block.to_string()
        }
    }
}
