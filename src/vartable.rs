use std::collections::HashMap;

/// Name→value bindings consulted when a program is evaluated.
///
/// Keys are unique; inserting an existing name overwrites its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable<T> {
    variables: HashMap<String, T>,
}

impl<T: Copy> VariableTable<T> {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Builds a table from an ordered sequence of `(name, value)` pairs.
    /// Later pairs overwrite earlier ones with the same name.
    pub fn from_pairs<N, I>(pairs: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, T)>,
    {
        let mut table = Self::new();
        for (name, value) in pairs {
            table.variables.insert(name.into(), value);
        }
        table
    }

    pub fn insert(&mut self, name: &str, value: T) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<T> {
        self.variables.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<N: Into<String>, T: Copy> FromIterator<(N, T)> for VariableTable<T> {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
