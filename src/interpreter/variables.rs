/// The variable store.
///
/// A flat mapping from names to values that lives for a whole session.
/// Entries keep the order in which they were first assigned, and the tokenizer
/// matches names in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    entries: Vec<(String, f64)>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Looks up a variable by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|(n, value)| (n == name).then_some(*value))
    }

    /// Inserts a variable, or overwrites it in place if it already exists.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::variables::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// store.set("b", 1.0);
    /// store.set("a", 2.0);
    /// store.set("b", 3.0);
    ///
    /// assert_eq!(store.get("b"), Some(3.0));
    /// assert_eq!(store.names().collect::<Vec<_>>(), ["b", "a"]);
    /// ```
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Removes a variable and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns `true` if the variable exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Variable names in the order they were first assigned.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of variables.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variable has been assigned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_the_original_slot() {
        let mut store = VariableStore::new();
        store.set("x", 1.0);
        store.set("y", 2.0);
        store.set("x", 5.0);

        assert_eq!(store.len(), 2);
        assert_eq!(store.names().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(store.get("x"), Some(5.0));
    }

    #[test]
    fn removed_variables_are_undefined() {
        let mut store = VariableStore::new();
        store.set("x", 1.0);

        assert_eq!(store.remove("x"), Some(1.0));
        assert!(!store.contains("x"));
        assert!(store.is_empty());
        assert_eq!(store.remove("x"), None);
    }
}
