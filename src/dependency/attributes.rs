use crate::io::configuration::ATTRIBUTE_SEPARATOR;
use smallvec::SmallVec;
use std::fmt;

/// Sorted, duplicate-free set of 0-based column indices
///
/// Tables rarely have more than a handful of attributes per dependency side,
/// so the indices live inline without heap allocation. The derived ordering is
/// lexicographic over the ascending indices, which gives dependency sides a
/// canonical key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeSet(SmallVec<[usize; 4]>);

impl AttributeSet {
    /// Create a set from indices in any order, duplicates allowed
    pub fn new(attributes: &[usize]) -> Self {
        let mut indices = SmallVec::from_slice(attributes);
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }

    /// Create a set holding one attribute
    pub fn singleton(attribute: usize) -> Self {
        let mut indices = SmallVec::new();
        indices.push(attribute);
        Self(indices)
    }

    /// Test if no attributes are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending iterator over the attribute indices
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Test attribute membership
    pub fn contains(&self, attribute: usize) -> bool {
        self.0.binary_search(&attribute).is_ok()
    }

    /// Test if every attribute of this set is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        let mut theirs = other.iter().peekable();
        'outer: for mine in self.iter() {
            while let Some(&candidate) = theirs.peek() {
                if candidate == mine {
                    theirs.next();
                    continue 'outer;
                }
                if candidate > mine {
                    return false;
                }
                theirs.next();
            }
            return false;
        }
        true
    }

    /// Test if every attribute of `other` is also in this set
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Create a new set containing the attributes of both sets
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).collect()
    }

    /// The only attribute when the set has exactly one
    pub fn single(&self) -> Option<usize> {
        match self.0.as_slice() {
            [attribute] => Some(*attribute),
            _ => None,
        }
    }

    /// Largest attribute index
    pub fn largest(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Shift every index down by the number of removed columns before it
    ///
    /// `removed` lists deleted column indices, none of which may be in the set.
    #[must_use]
    pub fn remap(&self, removed: &[usize]) -> Self {
        self.iter()
            .map(|attribute| {
                attribute - removed.iter().filter(|&&col| col < attribute).count()
            })
            .collect()
    }
}

impl FromIterator<usize> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut indices: SmallVec<[usize; 4]> = iter.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }
}

/// Writes 1-based indices separated by commas, matching the dependency text format
impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attribute) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "{ATTRIBUTE_SEPARATOR}")?;
            }
            write!(f, "{}", attribute + 1)?;
        }
        Ok(())
    }
}
