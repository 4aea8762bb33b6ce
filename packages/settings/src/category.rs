// ABOUTME: Category namespace lookup used while sanitizing
// ABOUTME: Lookup trait plus an in-memory snapshot of the link category taxonomy

use std::collections::HashMap;

use crate::types::CategoryRef;

/// Taxonomy the default category must belong to
pub const LINK_CATEGORY: &str = "link_category";

/// Resolves category identifiers in the link category namespace.
pub trait CategoryLookup {
    fn find(&self, id: i64) -> Option<CategoryRef>;
}

impl CategoryLookup for [CategoryRef] {
    fn find(&self, id: i64) -> Option<CategoryRef> {
        self.iter().find(|category| category.id == id).cloned()
    }
}

impl CategoryLookup for Vec<CategoryRef> {
    fn find(&self, id: i64) -> Option<CategoryRef> {
        self.as_slice().find(id)
    }
}

impl<T: CategoryLookup + ?Sized> CategoryLookup for &T {
    fn find(&self, id: i64) -> Option<CategoryRef> {
        (**self).find(id)
    }
}

/// Snapshot of the category namespace taken before a save.
///
/// Keeps the listing order it was built with so it can also feed the
/// settings view.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: Vec<CategoryRef>,
    by_id: HashMap<i64, usize>,
}

impl CategoryIndex {
    pub fn new(categories: Vec<CategoryRef>) -> Self {
        let by_id = categories
            .iter()
            .enumerate()
            .map(|(position, category)| (category.id, position))
            .collect();

        Self { categories, by_id }
    }

    pub fn as_slice(&self) -> &[CategoryRef] {
        &self.categories
    }
}

impl FromIterator<CategoryRef> for CategoryIndex {
    fn from_iter<I: IntoIterator<Item = CategoryRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CategoryLookup for CategoryIndex {
    fn find(&self, id: i64) -> Option<CategoryRef> {
        self.by_id
            .get(&id)
            .map(|&position| self.categories[position].clone())
    }
}
