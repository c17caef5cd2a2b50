use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// An identifier that occurs on more than one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId(pub String);

impl fmt::Display for DuplicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate id '{}'", self.0)
    }
}

impl Error for DuplicateId {}

/// Immutable table of records keyed by a unique string identifier.
///
/// Rows keep their insertion order, which is the natural iteration order for
/// scans. Key lookups go through a hash index.
#[derive(Debug, Clone)]
pub struct Table<R> {
    rows: Vec<(String, R)>,
    index: HashMap<String, usize>,
}

impl<R> Table<R> {
    /// Builds a table from `(id, record)` rows.
    ///
    /// # Errors
    /// Returns `DuplicateId` for the first identifier that occurs more than once.
    pub fn from_rows<I>(rows: I) -> Result<Self, DuplicateId>
    where
        I: IntoIterator<Item = (String, R)>,
    {
        let iter = rows.into_iter();
        let mut table = Self {
            rows: Vec::with_capacity(iter.size_hint().0),
            index: HashMap::new(),
        };
        for (id, record) in iter {
            if table.index.contains_key(&id) {
                return Err(DuplicateId(id));
            }
            table.index.insert(id.clone(), table.rows.len());
            table.rows.push((id, record));
        }
        Ok(table)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.index.get(id).map(|&position| &self.rows[position].1)
    }

    #[must_use]
    pub fn contains_key(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.rows.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Returns the first row accepted by `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<(&str, &R)>
    where
        P: FnMut(&R) -> bool,
    {
        self.iter().find(|(_, record)| predicate(record))
    }

    /// Returns every row accepted by `predicate`, in insertion order.
    pub fn filter<P>(&self, mut predicate: P) -> impl Iterator<Item = (&str, &R)>
    where
        P: FnMut(&R) -> bool,
    {
        self.iter().filter(move |(_, record)| predicate(record))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: &[&str]) -> Vec<(String, usize)> {
        ids.iter()
            .enumerate()
            .map(|(position, id)| ((*id).to_string(), position))
            .collect()
    }

    #[test]
    fn keeps_insertion_order() {
        let table = Table::from_rows(rows(&["b", "c", "a"])).expect("unique ids");
        let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn looks_up_by_key() {
        let table = Table::from_rows(rows(&["b", "c", "a"])).expect("unique ids");
        assert_eq!(table.get("a"), Some(&2));
        assert_eq!(table.get("z"), None);
        assert!(table.contains_key("c"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Table::from_rows(rows(&["a", "b", "a"])).expect_err("duplicate id");
        assert_eq!(err, DuplicateId("a".to_string()));
        assert_eq!(err.to_string(), "duplicate id 'a'");
    }

    #[test]
    fn find_returns_first_match() {
        let table = Table::from_rows(rows(&["x", "y", "z"])).expect("unique ids");
        let found = table.find(|position| *position >= 1);
        assert_eq!(found, Some(("y", &1)));
    }

    #[test]
    fn filter_keeps_order() {
        let table = Table::from_rows(rows(&["x", "y", "z"])).expect("unique ids");
        let ids: Vec<&str> = table.filter(|position| *position != 1).map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["x", "z"]);
    }
}
