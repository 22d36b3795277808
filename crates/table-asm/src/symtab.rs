//! String-keyed lookup tables built once from static lists.
//!
//! [`SymbolTable`] is used for field names and keyword tables, where a
//! duplicate name is a defect in the instruction-set description.
//! [`MultiTable`] keeps every entry of a name in insertion order and backs
//! the mnemonic overload lists.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
type Map<V> = alloc::collections::BTreeMap<String, V>;
#[cfg(feature = "std")]
type Map<V> = std::collections::HashMap<String, V>;

/// Exact-name lookup over a list of uniquely named entries.
#[derive(Debug, Clone)]
pub struct SymbolTable<T> {
    map: Map<T>,
}

impl<T> SymbolTable<T> {
    /// Build a table from `(name, entry)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a name appears twice.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, T)>,
    {
        let mut map = Map::new();
        for (name, entry) in entries {
            let prev = map.insert(String::from(name), entry);
            assert!(prev.is_none(), "duplicate table entry '{}'", name);
        }
        Self { map }
    }

    /// Look up an entry by exact name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.map.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Name → ordered list of entry indices.
#[derive(Debug, Clone, Default)]
pub struct MultiTable {
    map: Map<Vec<usize>>,
}

impl MultiTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    /// Append `index` to the list for `name`.
    pub fn insert(&mut self, name: &str, index: usize) {
        match self.map.get_mut(name) {
            Some(list) => list.push(index),
            None => {
                self.map.insert(String::from(name), alloc::vec![index]);
            }
        }
    }

    /// All indices recorded for `name`, in insertion order.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.map.get(name).map(Vec::as_slice)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no names.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
