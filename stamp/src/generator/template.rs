//! Placeholder substitution.

use std::fmt;

use crate::types::BuildInfo;

/// Marker tokens recognised in a build-info template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placeholder {
    CommitSha,
    RunNumber,
    BuildTime,
    Environment,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::CommitSha,
        Placeholder::RunNumber,
        Placeholder::BuildTime,
        Placeholder::Environment,
    ];

    /// Exact token text as it appears in templates.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::CommitSha => "__COMMIT_SHA__",
            Placeholder::RunNumber => "__RUN_NUMBER__",
            Placeholder::BuildTime => "__BUILD_TIME__",
            Placeholder::Environment => "__ENVIRONMENT__",
        }
    }

    /// Value from `info` that replaces this token.
    pub fn value(self, info: &BuildInfo) -> &str {
        match self {
            Placeholder::CommitSha => &info.commit_sha,
            Placeholder::RunNumber => &info.run_number,
            Placeholder::BuildTime => &info.build_time,
            Placeholder::Environment => &info.environment,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Replaces every occurrence of every placeholder token in `template`.
///
/// Substitution is a single left-to-right pass: values are inserted
/// verbatim and never rescanned, so a value that happens to contain a
/// token stays literal. Tokens absent from the template are skipped.
pub fn render(template: &str, info: &BuildInfo) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((at, placeholder)) = next_placeholder(rest) {
        out.push_str(&rest[..at]);
        out.push_str(placeholder.value(info));
        rest = &rest[at + placeholder.token().len()..];
    }
    out.push_str(rest);
    out
}

/// Earliest token occurrence in `text`.
fn next_placeholder(text: &str) -> Option<(usize, Placeholder)> {
    Placeholder::ALL
        .into_iter()
        .filter_map(|p| text.find(p.token()).map(|at| (at, p)))
        .min_by_key(|(at, _)| *at)
}

/// Placeholders that do not occur anywhere in `template`.
pub fn missing_placeholders(template: &str) -> Vec<Placeholder> {
    Placeholder::ALL
        .into_iter()
        .filter(|p| !template.contains(p.token()))
        .collect()
}
