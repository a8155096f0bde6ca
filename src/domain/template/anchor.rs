//! Named insertion points a template can declare.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Traefik router rule, e.g. ``Host(`test.domain.com`)``.
pub static HOST_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Host\(`[^`]*`\)").expect("host rule pattern is valid"));

/// Placeholder production domain used by the workflow templates.
pub const PRODUCTION_DOMAIN_PLACEHOLDER: &str = "prod.domain.com";

/// Where generated content goes relative to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Lines before the anchor line at its indentation, followed by a blank line.
    Before,
    /// Lines after the anchor line, indented `extra_indent` deeper.
    After { extra_indent: usize },
    /// Segments appended to the end of the anchor line.
    Inline,
    /// Whole-text substitution; not a line insertion.
    Substitution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    BuildStep,
    ExposePort,
    ComposeBuildArgs,
    ComposeEnvironment,
    StepEnv,
    EnvsList,
    ExportSection,
    ClearSection,
    RouterHost,
    ProductionDomain,
}

impl Anchor {
    pub fn name(&self) -> &'static str {
        match self {
            Anchor::BuildStep => "build-step",
            Anchor::ExposePort => "expose-port",
            Anchor::ComposeBuildArgs => "compose-build-args",
            Anchor::ComposeEnvironment => "compose-environment",
            Anchor::StepEnv => "step-env",
            Anchor::EnvsList => "envs-list",
            Anchor::ExportSection => "export-section",
            Anchor::ClearSection => "clear-section",
            Anchor::RouterHost => "router-host",
            Anchor::ProductionDomain => "production-domain",
        }
    }

    pub fn placement(&self) -> Placement {
        match self {
            Anchor::BuildStep | Anchor::ExposePort => Placement::Before,
            Anchor::ComposeBuildArgs | Anchor::ComposeEnvironment | Anchor::StepEnv => {
                Placement::After { extra_indent: 2 }
            }
            Anchor::ExportSection | Anchor::ClearSection => Placement::After { extra_indent: 0 },
            Anchor::EnvsList => Placement::Inline,
            Anchor::RouterHost | Anchor::ProductionDomain => Placement::Substitution,
        }
    }

    /// Whether `line` is this anchor's marker line.
    pub fn matches_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        match self {
            Anchor::BuildStep => trimmed == "# Build the app",
            Anchor::ExposePort => trimmed.starts_with("EXPOSE "),
            Anchor::ComposeBuildArgs => trimmed == "args:",
            Anchor::ComposeEnvironment => trimmed == "environment:",
            Anchor::StepEnv => trimmed == "env:",
            Anchor::EnvsList => trimmed.starts_with("envs:"),
            Anchor::ExportSection => trimmed == "# Export environment variables",
            Anchor::ClearSection => trimmed == "# Clear environment variables",
            Anchor::RouterHost => HOST_RULE.is_match(line),
            Anchor::ProductionDomain => line.contains(PRODUCTION_DOMAIN_PLACEHOLDER),
        }
    }

    /// Index of the first line carrying this anchor.
    pub fn locate<S: AsRef<str>>(&self, lines: &[S]) -> Option<usize> {
        lines.iter().position(|line| self.matches_line(line.as_ref()))
    }

    pub fn is_present(&self, text: &str) -> bool {
        text.split('\n').any(|line| self.matches_line(line))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Leading whitespace of `line`.
pub fn indentation(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
