//! Turns catalog templates into the final deployment files.

use std::path::PathBuf;

use log::debug;
use regex::NoExpand;

use super::anchor::{Anchor, HOST_RULE, PRODUCTION_DOMAIN_PLACEHOLDER};
use super::catalog::{self, CatalogTemplate};
use super::staged::{DeferredRef, Insertion, StagedLine, StagedTemplate};
use crate::domain::env_map::EnvMap;
use crate::domain::error::AppError;
use crate::domain::output_kind::OutputKind;
use crate::domain::secret_names::application_names;
use crate::domain::variant::ProjectVariant;

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub variant: ProjectVariant,
    pub env: &'a EnvMap,
    /// Names reported by the secrets upload, system names included.
    pub secret_names: &'a [String],
    pub domain: Option<&'a str>,
    pub production_branch: bool,
    pub production_domain: Option<&'a str>,
}

/// A rendered deployment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub content: String,
}

/// Render every output file in scope for `request`.
pub fn generate(request: &GenerationRequest<'_>) -> Result<Vec<TemplateFile>, AppError> {
    let names = application_names(request.secret_names);
    let domain = request.domain.map(str::trim).filter(|d| !d.is_empty());
    let production_domain = if request.production_branch {
        request.production_domain.map(str::trim).filter(|d| !d.is_empty())
    } else {
        None
    };

    let mut vars = request.env.clone();
    if let Some(domain) = domain {
        vars.insert("DOMAIN", domain);
    }
    if let Some(production_domain) = production_domain {
        vars.insert("PROD_DOMAIN", production_domain);
    }

    let wired: &[String] = if request.variant.wires_variables() { &names } else { &[] };
    debug!(
        "Generating {} templates with {} application variables",
        request.variant.id(),
        wired.len()
    );

    OutputKind::in_scope(request.production_branch)
        .into_iter()
        .map(|kind| -> Result<TemplateFile, AppError> {
            let template = catalog::template_for(kind, request.variant, request.production_branch)?;
            let text = substitute(kind, &template, domain, production_domain)?;
            let blocks = insertions(kind, wired);
            let staged = StagedTemplate::assemble(template.name, &text, &template.anchors, blocks)?;
            let content = staged.resolve(&vars).render();

            if kind.is_yaml() {
                validate_yaml(kind, &content)?;
            }

            Ok(TemplateFile { kind, path: PathBuf::from(kind.destination()), content })
        })
        .collect()
}

/// Domain substitutions applied to the raw template text.
fn substitute(
    kind: OutputKind,
    template: &CatalogTemplate,
    domain: Option<&str>,
    production_domain: Option<&str>,
) -> Result<String, AppError> {
    let mut text = template.text.to_string();

    if let (OutputKind::ComposeFile, Some(domain)) = (kind, domain) {
        require(template, Anchor::RouterHost)?;
        let rule = format!("Host(`{}`)", domain);
        text = HOST_RULE.replace_all(&text, NoExpand(&rule)).into_owned();
    }

    if let (true, Some(production_domain)) = (kind.is_workflow(), production_domain) {
        require(template, Anchor::ProductionDomain)?;
        text = text.replace(PRODUCTION_DOMAIN_PLACEHOLDER, production_domain);
    }

    Ok(text)
}

fn require(template: &CatalogTemplate, anchor: Anchor) -> Result<(), AppError> {
    if template.anchors.contains(&anchor) && anchor.is_present(&template.text) {
        return Ok(());
    }
    Err(AppError::AnchorNotFound {
        template: template.name.to_string(),
        anchor: anchor.name().to_string(),
    })
}

fn insertions(kind: OutputKind, names: &[String]) -> Vec<Insertion> {
    if names.is_empty() {
        return Vec::new();
    }

    match kind {
        OutputKind::BuildFile => {
            let block: Vec<StagedLine> = names
                .iter()
                .flat_map(|name| {
                    [
                        StagedLine::text(format!("ARG {}", name)),
                        StagedLine::text(format!("ENV {}=", name))
                            .then_deferred(DeferredRef::Shell(name.clone())),
                    ]
                })
                .collect();
            vec![
                Insertion::new(Anchor::BuildStep, block.clone()),
                Insertion::new(Anchor::ExposePort, block),
            ]
        }
        OutputKind::ComposeFile => {
            let entries: Vec<StagedLine> = names
                .iter()
                .map(|name| {
                    StagedLine::text(format!("- {}=", name))
                        .then_deferred(DeferredRef::Braced(name.clone()))
                })
                .collect();
            vec![
                Insertion::new(Anchor::ComposeBuildArgs, entries.clone()),
                Insertion::new(Anchor::ComposeEnvironment, entries),
            ]
        }
        OutputKind::Workflow | OutputKind::ProdWorkflow => {
            let step_env = names
                .iter()
                .map(|name| {
                    StagedLine::text(format!("{}: ", name))
                        .then_deferred(DeferredRef::Secret(name.clone()))
                })
                .collect();
            let envs: String = names.iter().map(|name| format!(",{}", name)).collect();
            let exports = names
                .iter()
                .map(|name| {
                    StagedLine::text(format!("export {}=\"", name))
                        .then_deferred(DeferredRef::Braced(name.clone()))
                        .then_text("\"")
                })
                .collect();
            let unsets = names.iter().map(|name| StagedLine::text(format!("unset {}", name))).collect();

            vec![
                Insertion::new(Anchor::StepEnv, step_env),
                Insertion::new(Anchor::EnvsList, vec![StagedLine::text(envs)]),
                Insertion::new(Anchor::ExportSection, exports),
                Insertion::new(Anchor::ClearSection, unsets),
            ]
        }
    }
}

fn validate_yaml(kind: OutputKind, content: &str) -> Result<(), AppError> {
    serde_yaml::from_str::<serde_yaml::Value>(content).map(|_| ()).map_err(|e| {
        AppError::MalformedOutput { path: kind.destination().to_string(), details: e.to_string() }
    })
}
