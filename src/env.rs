use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Assignment of a binary value to every canonical variable.
///
/// Variables are addressed by position during enumeration and by name during
/// evaluation. Every variable always holds a value (initially 0).
///
/// The name index is built once and shared between clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    names: Vec<String>,
    values: Vec<u8>,
    index: Arc<HashMap<String, usize>>,
}

impl Environment {
    pub fn new(names: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            // First occurrence wins.
            index.entry(name.clone()).or_insert(i);
        }
        let values = vec![0; names.len()];
        Self {
            names,
            values,
            index: Arc::new(index),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Assigns the variable at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: bool) {
        self.values[index] = value as u8;
    }

    /// Value of the variable named `name`, if it is part of this environment.
    pub fn get(&self, name: &str) -> Option<u8> {
        self.index.get(name).map(|&i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.names.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", name, value)?;
        }
        write!(f, "}}")
    }
}
