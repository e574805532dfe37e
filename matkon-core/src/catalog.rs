use std::sync::Arc;

/// Read-only snapshot of the canonical ingredient names a generation run may
/// draw from.
///
/// The catalog is loaded by the embedding application (usually from its
/// database) and passed to the pipeline explicitly; cloning is cheap and the
/// snapshot never changes under a running generation.
#[derive(Clone, Debug)]
pub struct IngredientCatalog {
    names: Arc<[String]>,
}

impl IngredientCatalog {
    pub fn new(names: Vec<String>) -> Self {
        Self { names: names.into() }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for IngredientCatalog {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl FromIterator<String> for IngredientCatalog {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
