//! Type-safe enumerations for facets and sorting.
//!
//! The renderer speaks in string tokens (`"level"`, `"title-asc"`); these
//! enums give the core a closed vocabulary for them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Optional course attribute that may become a filter facet.
///
/// The set is closed; declaration order is the order facets are offered in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FacetKey {
    Level,
    Credits,
    Instructor,
    Department,
    Type,
    Skill,
}

impl FacetKey {
    /// Candidate facet keys in offering order.
    pub const ALL: [FacetKey; 6] = [
        FacetKey::Level,
        FacetKey::Credits,
        FacetKey::Instructor,
        FacetKey::Department,
        FacetKey::Type,
        FacetKey::Skill,
    ];

    /// Key name as used in source records and filter state.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKey::Level => "level",
            FacetKey::Credits => "credits",
            FacetKey::Instructor => "instructor",
            FacetKey::Department => "department",
            FacetKey::Type => "type",
            FacetKey::Skill => "skill",
        }
    }

    /// Display label for filter controls.
    pub fn label(&self) -> &'static str {
        match self {
            FacetKey::Level => "Level",
            FacetKey::Credits => "Credits",
            FacetKey::Instructor => "Instructor",
            FacetKey::Department => "Department",
            FacetKey::Type => "Type",
            FacetKey::Skill => "Skill",
        }
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        FacetKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownFacet(s.to_string()))
    }
}

/// Attribute a course list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Title,
    Id,
    Semester,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Id => "id",
            SortKey::Semester => "semester",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Combined sort selection: unsorted, or a key with a direction.
///
/// Parses from and renders to the tokens `none`, `title-asc`, `title-desc`,
/// `id-asc`, `id-desc`, `semester-asc` and `semester-desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SortMode {
    #[default]
    None,
    By {
        key: SortKey,
        direction: SortDirection,
    },
}

impl SortMode {
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        SortMode::By { key, direction }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::None => f.write_str("none"),
            SortMode::By { key, direction } => {
                write!(f, "{}-{}", key.as_str(), direction.as_str())
            }
        }
    }
}

impl FromStr for SortMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "none" {
            return Ok(SortMode::None);
        }
        let unknown = || ModelError::UnknownSortMode(s.to_string());
        let (key, direction) = normalized.split_once('-').ok_or_else(unknown)?;
        let key = match key {
            "title" => SortKey::Title,
            "id" => SortKey::Id,
            "semester" => SortKey::Semester,
            _ => return Err(unknown()),
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(unknown()),
        };
        Ok(SortMode::By { key, direction })
    }
}

impl From<SortMode> for String {
    fn from(mode: SortMode) -> Self {
        mode.to_string()
    }
}

impl TryFrom<String> for SortMode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
