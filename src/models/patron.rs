//! Patron model and related types

use serde::{Deserialize, Serialize};

/// Catalog-minted handle for a registered patron.
///
/// Identity of a patron inside the catalog. The caller-assigned numeric id is
/// not guaranteed unique, so loans are matched on this handle instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatronKey(pub(crate) u64);

impl std::fmt::Display for PatronKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "patron#{}", self.0)
    }
}

/// Patron role tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatronRole {
    Student,
    Professor,
    Researcher,
}

impl PatronRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatronRole::Student => "Student",
            PatronRole::Professor => "Professor",
            PatronRole::Researcher => "Researcher",
        }
    }
}

impl std::fmt::Display for PatronRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PatronRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(PatronRole::Student),
            "professor" => Ok(PatronRole::Professor),
            "researcher" => Ok(PatronRole::Researcher),
            _ => Err(format!("Invalid patron role: {}", s)),
        }
    }
}

/// Role-specific payload; fixes the patron's role tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum PatronKind {
    Student { major: String },
    Professor { department: String },
    Researcher { institution: String },
}

impl PatronKind {
    pub fn role(&self) -> PatronRole {
        match self {
            PatronKind::Student { .. } => PatronRole::Student,
            PatronKind::Professor { .. } => PatronRole::Professor,
            PatronKind::Researcher { .. } => PatronRole::Researcher,
        }
    }

    /// The one attribute each role carries: major, department or institution
    pub fn detail(&self) -> &str {
        match self {
            PatronKind::Student { major } => major,
            PatronKind::Professor { department } => department,
            PatronKind::Researcher { institution } => institution,
        }
    }
}

/// Registered library patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    name: String,
    id: i32,
    #[serde(flatten)]
    kind: PatronKind,
}

impl Patron {
    pub fn new(name: impl Into<String>, id: i32, kind: PatronKind) -> Self {
        Self {
            name: name.into(),
            id,
            kind,
        }
    }

    pub fn student(name: impl Into<String>, id: i32, major: impl Into<String>) -> Self {
        Self::new(name, id, PatronKind::Student { major: major.into() })
    }

    pub fn professor(name: impl Into<String>, id: i32, department: impl Into<String>) -> Self {
        Self::new(
            name,
            id,
            PatronKind::Professor {
                department: department.into(),
            },
        )
    }

    pub fn researcher(name: impl Into<String>, id: i32, institution: impl Into<String>) -> Self {
        Self::new(
            name,
            id,
            PatronKind::Researcher {
                institution: institution.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn role(&self) -> PatronRole {
        self.kind.role()
    }

    pub fn kind(&self) -> &PatronKind {
        &self.kind
    }

    pub fn major(&self) -> Option<&str> {
        match &self.kind {
            PatronKind::Student { major } => Some(major),
            _ => None,
        }
    }

    pub fn department(&self) -> Option<&str> {
        match &self.kind {
            PatronKind::Professor { department } => Some(department),
            _ => None,
        }
    }

    pub fn institution(&self) -> Option<&str> {
        match &self.kind {
            PatronKind::Researcher { institution } => Some(institution),
            _ => None,
        }
    }
}
