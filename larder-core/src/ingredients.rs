//! The user's on-hand ingredient list.

/// Starting list shown before the user has typed anything.
pub const DEFAULT_INGREDIENTS: &[&str] = &["Tomatoes", "Chicken Breast", "Garlic"];

/// Quick-pick suggestions offered next to the input.
pub const EXAMPLE_INGREDIENTS: &[&str] = &["Onion", "Bell Pepper", "Rice", "Cheese", "Eggs"];

/// Ordered, case-insensitively unique list of ingredient names.
///
/// Entries are stored trimmed and in insertion order. Adding a blank name or a
/// name already present (ignoring case) leaves the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientStore {
    items: Vec<String>,
}

impl IngredientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with [`DEFAULT_INGREDIENTS`].
    pub fn with_defaults() -> Self {
        DEFAULT_INGREDIENTS.iter().copied().collect()
    }

    /// Add an ingredient. Returns true if the list changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.items.push(name.to_string());
        true
    }

    /// Remove the ingredient at `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Case-insensitive membership check on the trimmed name.
    pub fn contains(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.items.iter().any(|item| item.to_lowercase() == needle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = Self::new();
        for name in iter {
            store.add(name.as_ref());
        }
        store
    }
}

impl<'a> IntoIterator for &'a IngredientStore {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
