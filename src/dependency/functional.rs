//! Functional dependency entity with the set predicates used by closure and reduction

use crate::dependency::attributes::AttributeSet;
use crate::io::configuration::{ATTRIBUTE_SEPARATOR, DEPENDENCY_ARROW};
use crate::io::error::{FdError, Result, malformed_dependency};
use std::fmt;
use std::str::FromStr;

/// Constraint stating that the determinant attributes fix the dependent attributes
///
/// Both sides are non-empty sets of 0-based column indices. Dependencies kept
/// by a computation are simple (exactly one dependent attribute); compound
/// dependencies only appear while grouping during closure derivation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionalDependency {
    determinant: AttributeSet,
    dependent: AttributeSet,
}

impl FunctionalDependency {
    /// Create a dependency from its two sides
    ///
    /// # Errors
    ///
    /// Returns `MalformedDependency` if either side is empty
    pub fn new(determinant: AttributeSet, dependent: AttributeSet) -> Result<Self> {
        if determinant.is_empty() || dependent.is_empty() {
            return Err(malformed_dependency(
                &format!("{determinant}{DEPENDENCY_ARROW}{dependent}"),
                &"both sides need at least one attribute",
            ));
        }
        Ok(Self {
            determinant,
            dependent,
        })
    }

    /// Create a dependency with a single dependent attribute
    ///
    /// # Errors
    ///
    /// Returns `MalformedDependency` if `determinant` is empty
    pub fn simple(determinant: &[usize], dependent: usize) -> Result<Self> {
        Self::new(
            AttributeSet::new(determinant),
            AttributeSet::singleton(dependent),
        )
    }

    /// Attributes on the left-hand side
    pub const fn determinant(&self) -> &AttributeSet {
        &self.determinant
    }

    /// Attributes on the right-hand side
    pub const fn dependent(&self) -> &AttributeSet {
        &self.dependent
    }

    /// The dependent attribute of a simple dependency
    pub fn simple_dependent(&self) -> Option<usize> {
        self.dependent.single()
    }

    /// A dependency is trivial when its dependents are among its determinants
    pub fn is_trivial(&self) -> bool {
        self.dependent.is_subset(&self.determinant)
    }

    /// Test if `other` makes this dependency redundant
    ///
    /// Holds when both have the same dependents and this determinant is a
    /// superset of the other's: the smaller determinant already says more.
    pub fn covers(&self, other: &Self) -> bool {
        self.dependent == other.dependent && self.determinant.is_superset(&other.determinant)
    }

    /// Split into one simple dependency per dependent attribute
    pub fn decompose(&self) -> Vec<Self> {
        self.dependent
            .iter()
            .map(|attribute| Self {
                determinant: self.determinant.clone(),
                dependent: AttributeSet::singleton(attribute),
            })
            .collect()
    }

    /// Every attribute referenced on either side
    pub fn attributes(&self) -> AttributeSet {
        self.determinant.union(&self.dependent)
    }

    /// Largest attribute index referenced on either side
    pub fn max_attribute(&self) -> Option<usize> {
        self.determinant.largest().max(self.dependent.largest())
    }

    /// Rewrite indices for a table with the columns in `removed` deleted
    #[must_use]
    pub fn remap_for_subtable(&self, removed: &[usize]) -> Self {
        Self {
            determinant: self.determinant.remap(removed),
            dependent: self.dependent.remap(removed),
        }
    }
}

/// Writes the 1-based text form, e.g. `1,2->3`
impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DEPENDENCY_ARROW}{}", self.determinant, self.dependent)
    }
}

impl FromStr for FunctionalDependency {
    type Err = FdError;

    fn from_str(s: &str) -> Result<Self> {
        let Some((left, right)) = s.split_once(DEPENDENCY_ARROW) else {
            return Err(malformed_dependency(&s, &"missing \"->\""));
        };
        let determinant = parse_attribute_list(s, left)?;
        let dependent = parse_attribute_list(s, right)?;
        Self::new(determinant, dependent)
    }
}

/// Parse a comma-separated list of 1-based positive attribute numbers
fn parse_attribute_list(input: &str, list: &str) -> Result<AttributeSet> {
    list.split(ATTRIBUTE_SEPARATOR)
        .map(|item| {
            let trimmed = item.trim();
            match trimmed.parse::<usize>() {
                Ok(number) if number > 0 => Ok(number - 1),
                Ok(_) => Err(malformed_dependency(
                    &input,
                    &"attribute numbers start at 1",
                )),
                Err(_) => Err(malformed_dependency(
                    &input,
                    &format!("\"{trimmed}\" is not a positive integer"),
                )),
            }
        })
        .collect()
}
