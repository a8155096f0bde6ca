//! Embedded templates keyed by output kind and project variant.

use std::borrow::Cow;

use super::anchor::Anchor;
use crate::domain::error::AppError;
use crate::domain::output_kind::OutputKind::{self, BuildFile, ComposeFile, ProdWorkflow, Workflow};
use crate::domain::variant::ProjectVariant::{self, DatabaseBacked, EnvDriven, Plain};

/// Raw template text and the anchors it supports.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub text: &'static str,
    pub anchors: &'static [Anchor],
}

/// A descriptor with the promotion job optionally appended.
#[derive(Debug, Clone)]
pub struct CatalogTemplate {
    pub name: &'static str,
    pub text: Cow<'static, str>,
    pub anchors: Vec<Anchor>,
}

const DOCKERFILE_ANCHORS: &[Anchor] = &[Anchor::BuildStep, Anchor::ExposePort];
const PLAIN_COMPOSE_ANCHORS: &[Anchor] = &[Anchor::ComposeEnvironment, Anchor::RouterHost];
const ENV_COMPOSE_ANCHORS: &[Anchor] =
    &[Anchor::ComposeBuildArgs, Anchor::ComposeEnvironment, Anchor::RouterHost];
const ENV_WORKFLOW_ANCHORS: &[Anchor] =
    &[Anchor::StepEnv, Anchor::EnvsList, Anchor::ExportSection, Anchor::ClearSection];
const PLAIN_PROD_WORKFLOW_ANCHORS: &[Anchor] = &[Anchor::ProductionDomain];
const ENV_PROD_WORKFLOW_ANCHORS: &[Anchor] = &[
    Anchor::ProductionDomain,
    Anchor::StepEnv,
    Anchor::EnvsList,
    Anchor::ExportSection,
    Anchor::ClearSection,
];

const PLAIN_DOCKERFILE: TemplateDescriptor = TemplateDescriptor {
    name: "plain.Dockerfile",
    text: include_str!("../../assets/templates/dockerfile/plain.Dockerfile"),
    anchors: DOCKERFILE_ANCHORS,
};
const ENV_DOCKERFILE: TemplateDescriptor = TemplateDescriptor {
    name: "env.Dockerfile",
    text: include_str!("../../assets/templates/dockerfile/env.Dockerfile"),
    anchors: DOCKERFILE_ANCHORS,
};
const PRISMA_DOCKERFILE: TemplateDescriptor = TemplateDescriptor {
    name: "prisma.Dockerfile",
    text: include_str!("../../assets/templates/dockerfile/prisma.Dockerfile"),
    anchors: DOCKERFILE_ANCHORS,
};
const PLAIN_COMPOSE: TemplateDescriptor = TemplateDescriptor {
    name: "compose/plain.yml",
    text: include_str!("../../assets/templates/compose/plain.yml"),
    anchors: PLAIN_COMPOSE_ANCHORS,
};
const ENV_COMPOSE: TemplateDescriptor = TemplateDescriptor {
    name: "compose/env.yml",
    text: include_str!("../../assets/templates/compose/env.yml"),
    anchors: ENV_COMPOSE_ANCHORS,
};
const PLAIN_WORKFLOW: TemplateDescriptor = TemplateDescriptor {
    name: "workflows/plain.yml",
    text: include_str!("../../assets/templates/workflows/plain.yml"),
    anchors: &[],
};
const ENV_WORKFLOW: TemplateDescriptor = TemplateDescriptor {
    name: "workflows/env.yml",
    text: include_str!("../../assets/templates/workflows/env.yml"),
    anchors: ENV_WORKFLOW_ANCHORS,
};
const PLAIN_PROD_WORKFLOW: TemplateDescriptor = TemplateDescriptor {
    name: "workflows/plain-prod.yml",
    text: include_str!("../../assets/templates/workflows/plain-prod.yml"),
    anchors: PLAIN_PROD_WORKFLOW_ANCHORS,
};
const ENV_PROD_WORKFLOW: TemplateDescriptor = TemplateDescriptor {
    name: "workflows/env-prod.yml",
    text: include_str!("../../assets/templates/workflows/env-prod.yml"),
    anchors: ENV_PROD_WORKFLOW_ANCHORS,
};

/// Job appended to the main workflow that opens a `main` to `prod` pull request.
const PROMOTION_TAIL: &str = include_str!("../../assets/templates/workflows/promote-tail.yml");
const PROMOTION_TAIL_ANCHORS: &[Anchor] = &[Anchor::ProductionDomain];

static CATALOG: [(OutputKind, ProjectVariant, TemplateDescriptor); 12] = [
    (BuildFile, Plain, PLAIN_DOCKERFILE),
    (BuildFile, EnvDriven, ENV_DOCKERFILE),
    (BuildFile, DatabaseBacked, PRISMA_DOCKERFILE),
    (ComposeFile, Plain, PLAIN_COMPOSE),
    (ComposeFile, EnvDriven, ENV_COMPOSE),
    (ComposeFile, DatabaseBacked, ENV_COMPOSE),
    (Workflow, Plain, PLAIN_WORKFLOW),
    (Workflow, EnvDriven, ENV_WORKFLOW),
    (Workflow, DatabaseBacked, ENV_WORKFLOW),
    (ProdWorkflow, Plain, PLAIN_PROD_WORKFLOW),
    (ProdWorkflow, EnvDriven, ENV_PROD_WORKFLOW),
    (ProdWorkflow, DatabaseBacked, ENV_PROD_WORKFLOW),
];

pub fn descriptor(
    kind: OutputKind,
    variant: ProjectVariant,
) -> Result<&'static TemplateDescriptor, AppError> {
    CATALOG
        .iter()
        .find(|(k, v, _)| *k == kind && *v == variant)
        .map(|(_, _, descriptor)| descriptor)
        .ok_or_else(|| {
            AppError::config_error(format!("No template for {} ({})", kind, variant.id()))
        })
}

/// Template for `kind`, with the promotion job appended to the main workflow when requested.
pub fn template_for(
    kind: OutputKind,
    variant: ProjectVariant,
    with_promotion: bool,
) -> Result<CatalogTemplate, AppError> {
    let descriptor = descriptor(kind, variant)?;
    let mut anchors = descriptor.anchors.to_vec();

    let text = if with_promotion && kind == OutputKind::Workflow {
        anchors.extend_from_slice(PROMOTION_TAIL_ANCHORS);
        Cow::Owned(format!("{}{}", descriptor.text, PROMOTION_TAIL))
    } else {
        Cow::Borrowed(descriptor.text)
    };

    Ok(CatalogTemplate { name: descriptor.name, text, anchors })
}

/// Check that every (kind, variant) pair has a template and that every
/// declared anchor can be located in it.
pub fn verify() -> Result<(), AppError> {
    for kind in OutputKind::ALL {
        for variant in ProjectVariant::ALL {
            for with_promotion in [false, true] {
                let template = template_for(kind, variant, with_promotion)?;
                if let Some(missing) =
                    template.anchors.iter().find(|anchor| !anchor.is_present(&template.text))
                {
                    return Err(AppError::AnchorNotFound {
                        template: template.name.to_string(),
                        anchor: missing.name().to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
