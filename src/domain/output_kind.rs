use std::fmt;

/// One of the fixed deployment files the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputKind {
    BuildFile,
    ComposeFile,
    Workflow,
    ProdWorkflow,
}

impl OutputKind {
    pub const ALL: [OutputKind; 4] =
        [OutputKind::BuildFile, OutputKind::ComposeFile, OutputKind::Workflow, OutputKind::ProdWorkflow];

    /// Destination path relative to the project root.
    pub fn destination(&self) -> &'static str {
        match self {
            OutputKind::BuildFile => "Dockerfile",
            OutputKind::ComposeFile => "docker-compose.yml",
            OutputKind::Workflow => ".github/workflows/deploy.yml",
            OutputKind::ProdWorkflow => ".github/workflows/deploy-prod.yml",
        }
    }

    pub fn is_yaml(&self) -> bool {
        !matches!(self, OutputKind::BuildFile)
    }

    pub fn is_workflow(&self) -> bool {
        matches!(self, OutputKind::Workflow | OutputKind::ProdWorkflow)
    }

    /// Kinds emitted for a run, in write order.
    pub fn in_scope(production_branch: bool) -> Vec<OutputKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| production_branch || *kind != OutputKind::ProdWorkflow)
            .collect()
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.destination())
    }
}
