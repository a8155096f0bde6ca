use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Deployment shape of the Next.js project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProjectVariant {
    Plain,
    EnvDriven,
    DatabaseBacked,
}

impl ProjectVariant {
    pub const ALL: [ProjectVariant; 3] =
        [ProjectVariant::Plain, ProjectVariant::EnvDriven, ProjectVariant::DatabaseBacked];

    /// Stable identifier used in saved configurations and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            ProjectVariant::Plain => "plain",
            ProjectVariant::EnvDriven => "env",
            ProjectVariant::DatabaseBacked => "prisma",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectVariant::Plain => "Plain Next.js",
            ProjectVariant::EnvDriven => "Next.js with .env",
            ProjectVariant::DatabaseBacked => "Next.js with Prisma",
        }
    }

    /// Application variable the project expects to find among the uploaded secrets.
    pub fn required_variable(&self) -> Option<&'static str> {
        match self {
            ProjectVariant::Plain => None,
            ProjectVariant::EnvDriven => Some("NEXT_PUBLIC_DATABASE_URL"),
            ProjectVariant::DatabaseBacked => Some("DATABASE_URL"),
        }
    }

    /// Whether uploaded application variables are wired into the generated files.
    pub fn wires_variables(&self) -> bool {
        !matches!(self, ProjectVariant::Plain)
    }

    pub fn from_id(id: &str) -> Result<Self, AppError> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.id().eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| AppError::UnknownVariant(id.to_string()))
    }
}

impl fmt::Display for ProjectVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<String> for ProjectVariant {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_id(&value)
    }
}

impl From<ProjectVariant> for String {
    fn from(value: ProjectVariant) -> Self {
        value.id().to_string()
    }
}
