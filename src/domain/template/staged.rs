//! Two-phase template text.
//!
//! A staged template is a list of lines made of segments. `Text` segments are
//! resolved against the environment map at generation time; `Deferred`
//! segments are references resolved later by the shell, Compose or GitHub
//! Actions and are only serialized back to `$` syntax by [`StagedTemplate::render`].

use super::anchor::{Anchor, Placement, indentation};
use crate::domain::env_map::EnvMap;
use crate::domain::error::AppError;
use crate::domain::injector::inject_variables;

/// A reference resolved at deploy time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredRef {
    /// `$NAME`
    Shell(String),
    /// `${NAME}`
    Braced(String),
    /// `${{ secrets.NAME }}`
    Secret(String),
}

impl DeferredRef {
    pub fn render(&self) -> String {
        match self {
            DeferredRef::Shell(name) => format!("${}", name),
            DeferredRef::Braced(name) => format!("${{{}}}", name),
            DeferredRef::Secret(name) => format!("${{{{ secrets.{} }}}}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Deferred(DeferredRef),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedLine {
    segments: Vec<Segment>,
}

impl StagedLine {
    pub fn text(value: impl Into<String>) -> Self {
        Self { segments: vec![Segment::Text(value.into())] }
    }

    pub fn then_text(mut self, value: impl Into<String>) -> Self {
        self.segments.push(Segment::Text(value.into()));
        self
    }

    pub fn then_deferred(mut self, reference: DeferredRef) -> Self {
        self.segments.push(Segment::Deferred(reference));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn indented(mut self, indent: &str) -> Self {
        if !indent.is_empty() {
            self.segments.insert(0, Segment::Text(indent.to_string()));
        }
        self
    }

    fn plain_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Text(text) => Some(text.as_str()),
                Segment::Deferred(_) => None,
            })
            .collect()
    }

    fn render(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.clone(),
                Segment::Deferred(reference) => reference.render(),
            })
            .collect()
    }
}

/// Generated content destined for one anchor.
#[derive(Debug, Clone)]
pub struct Insertion {
    pub anchor: Anchor,
    pub lines: Vec<StagedLine>,
}

impl Insertion {
    pub fn new(anchor: Anchor, lines: Vec<StagedLine>) -> Self {
        Self { anchor, lines }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedTemplate {
    lines: Vec<StagedLine>,
}

impl StagedTemplate {
    pub fn from_text(text: &str) -> Self {
        Self { lines: text.split('\n').map(StagedLine::text).collect() }
    }

    /// Stage `text` and apply every insertion at its anchor.
    ///
    /// All anchors are located on the original lines first, so inserted content
    /// never shifts or shadows another anchor. Insertions with no lines are
    /// skipped.
    pub fn assemble(
        template: &str,
        text: &str,
        declared: &[Anchor],
        insertions: Vec<Insertion>,
    ) -> Result<Self, AppError> {
        let mut staged = Self::from_text(text);
        let originals: Vec<String> = staged.lines.iter().map(StagedLine::plain_text).collect();

        let mut located = Vec::with_capacity(insertions.len());
        for insertion in insertions.into_iter().filter(|i| !i.lines.is_empty()) {
            let not_found = || AppError::AnchorNotFound {
                template: template.to_string(),
                anchor: insertion.anchor.name().to_string(),
            };
            if !declared.contains(&insertion.anchor) {
                return Err(not_found());
            }
            let index = insertion.anchor.locate(&originals).ok_or_else(not_found)?;
            located.push((index, insertion));
        }

        located.sort_by(|a, b| b.0.cmp(&a.0));
        for (index, insertion) in located {
            staged.apply(index, insertion)?;
        }

        Ok(staged)
    }

    fn apply(&mut self, index: usize, insertion: Insertion) -> Result<(), AppError> {
        let base = indentation(&self.lines[index].plain_text()).to_string();

        match insertion.anchor.placement() {
            Placement::Before => {
                let mut block: Vec<StagedLine> =
                    insertion.lines.into_iter().map(|line| line.indented(&base)).collect();
                block.push(StagedLine::default());
                self.lines.splice(index..index, block);
            }
            Placement::After { extra_indent } => {
                let indent = format!("{}{}", base, " ".repeat(extra_indent));
                let block = insertion.lines.into_iter().map(|line| line.indented(&indent));
                self.lines.splice(index + 1..index + 1, block);
            }
            Placement::Inline => {
                let target = &mut self.lines[index];
                for line in insertion.lines {
                    target.segments.extend(line.segments);
                }
            }
            Placement::Substitution => {
                return Err(AppError::config_error(format!(
                    "anchor '{}' is a substitution and cannot take inserted lines",
                    insertion.anchor
                )));
            }
        }

        Ok(())
    }

    /// Inject `vars` into every text segment. Deferred references are untouched.
    pub fn resolve(mut self, vars: &EnvMap) -> Self {
        for line in &mut self.lines {
            for segment in &mut line.segments {
                if let Segment::Text(text) = segment {
                    *text = inject_variables(text, vars);
                }
            }
        }
        self
    }

    pub fn render(&self) -> String {
        self.lines.iter().map(StagedLine::render).collect::<Vec<_>>().join("\n")
    }
}
