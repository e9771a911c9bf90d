use crate::catalog::Platform;
use crate::error::{Error, Result};
use crate::variant::IconVariant;
use std::collections::BTreeSet;

/// An ordered, non-empty subset of one platform's generated variants,
/// chosen by the caller for merging into a container.
///
/// Sizes are ascending and unique, inheriting the order of the cached
/// variant list they were selected from.
#[derive(Debug)]
pub struct Selection<'a> {
    platform: Platform,
    variants: Vec<&'a IconVariant>,
}

impl<'a> Selection<'a> {
    /// Narrows `available` down to the sizes in `checked`.
    ///
    /// A checked size with no matching variant is dropped silently: it means
    /// "not generated yet" rather than an error, and callers wanting
    /// strictness should pre-validate.  Fails with
    /// [`EmptySelection`](Error::EmptySelection) when `checked` is empty or
    /// nothing matches.
    pub fn new(
        platform: Platform,
        available: &'a [IconVariant],
        checked: &[u32],
    ) -> Result<Selection<'a>> {
        let checked: BTreeSet<u32> = checked.iter().copied().collect();
        let variants: Vec<&IconVariant> = available
            .iter()
            .filter(|variant| checked.contains(&variant.size()))
            .collect();
        if variants.is_empty() {
            return Err(Error::EmptySelection);
        }
        Ok(Selection { platform, variants })
    }

    /// The platform this selection was made for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The selected variants, ascending by size.
    pub fn variants(&self) -> &[&'a IconVariant] {
        &self.variants
    }

    /// The selected sizes, ascending.
    pub fn sizes(&self) -> Vec<u32> {
        self.variants.iter().map(|variant| variant.size()).collect()
    }

    /// Number of selected variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false for a constructed selection; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
