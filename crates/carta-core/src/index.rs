//! Bidirectional id / name / index translation.

use indexmap::IndexSet;

use crate::error::{KeyKind, RelationError};

/// Three mutually consistent bijections over region ids, names, and
/// canonical indices.
///
/// Index `i` is the position of the region in the order the ids were
/// supplied. Both ids and names are kept in insertion-ordered sets, so a
/// single structure answers lookups in either direction. The index is
/// immutable once built.
///
/// # Examples
///
/// ```
/// use carta_core::IdentifierIndex;
///
/// let index = IdentifierIndex::build(["E1", "E2"], ["North", "South"]).unwrap();
/// assert_eq!(index.id_to_index("E2").unwrap(), 1);
/// assert_eq!(index.index_to_name(0).unwrap(), "North");
/// assert_eq!(index.name_to_id("South").unwrap(), "E2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierIndex {
    ids: IndexSet<String>,
    names: IndexSet<String>,
}

impl IdentifierIndex {
    /// Build the index from parallel id and name sequences.
    ///
    /// Returns `Err(RelationError::DuplicateKey)` on the first repeated id
    /// or name, and `Err(RelationError::InvalidInput)` if the sequences
    /// have different lengths.
    pub fn build<I, N>(ids: I, names: N) -> Result<Self, RelationError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut id_set = IndexSet::new();
        let mut name_set = IndexSet::new();
        let mut names = names.into_iter();

        for id in ids {
            let id = id.into();
            let Some(name) = names.next() else {
                return Err(RelationError::InvalidInput {
                    reason: format!("id '{id}' has no matching name"),
                });
            };
            let name = name.into();
            if id_set.contains(&id) {
                return Err(RelationError::DuplicateKey {
                    kind: KeyKind::Id,
                    key: id,
                });
            }
            if name_set.contains(&name) {
                return Err(RelationError::DuplicateKey {
                    kind: KeyKind::Name,
                    key: name,
                });
            }
            id_set.insert(id);
            name_set.insert(name);
        }

        if let Some(extra) = names.next() {
            return Err(RelationError::InvalidInput {
                reason: format!("name '{}' has no matching id", extra.into()),
            });
        }

        Ok(Self {
            ids: id_set,
            names: name_set,
        })
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if the index holds no regions.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Canonical index of a region id.
    pub fn id_to_index(&self, id: &str) -> Result<usize, RelationError> {
        self.ids
            .get_index_of(id)
            .ok_or_else(|| RelationError::missing(KeyKind::Id, id))
    }

    /// Canonical index of a region name.
    pub fn name_to_index(&self, name: &str) -> Result<usize, RelationError> {
        self.names
            .get_index_of(name)
            .ok_or_else(|| RelationError::missing(KeyKind::Name, name))
    }

    /// Region id at a canonical index.
    pub fn index_to_id(&self, index: usize) -> Result<&str, RelationError> {
        self.ids
            .get_index(index)
            .map(String::as_str)
            .ok_or_else(|| RelationError::missing(KeyKind::Index, index))
    }

    /// Region name at a canonical index.
    pub fn index_to_name(&self, index: usize) -> Result<&str, RelationError> {
        self.names
            .get_index(index)
            .map(String::as_str)
            .ok_or_else(|| RelationError::missing(KeyKind::Index, index))
    }

    /// Display name of a region id.
    pub fn id_to_name(&self, id: &str) -> Result<&str, RelationError> {
        self.index_to_name(self.id_to_index(id)?)
    }

    /// Region id of a display name.
    pub fn name_to_id(&self, name: &str) -> Result<&str, RelationError> {
        self.index_to_id(self.name_to_index(name)?)
    }

    /// All ids in canonical order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    /// All names in canonical order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> IdentifierIndex {
        IdentifierIndex::build(["a1", "b2", "c3"], ["Alpha", "Beta", "Gamma"]).unwrap()
    }

    // ── Lookups ─────────────────────────────────────────────────

    #[test]
    fn indices_follow_input_order() {
        let index = sample();
        assert_eq!(index.len(), 3);
        assert_eq!(index.id_to_index("a1").unwrap(), 0);
        assert_eq!(index.id_to_index("c3").unwrap(), 2);
        assert_eq!(index.name_to_index("Beta").unwrap(), 1);
    }

    #[test]
    fn cross_lookups_agree() {
        let index = sample();
        assert_eq!(index.id_to_name("b2").unwrap(), "Beta");
        assert_eq!(index.name_to_id("Gamma").unwrap(), "c3");
        assert_eq!(index.index_to_id(0).unwrap(), "a1");
        assert_eq!(index.index_to_name(2).unwrap(), "Gamma");
    }

    #[test]
    fn unknown_keys_are_reported_by_kind() {
        let index = sample();
        assert_eq!(
            index.id_to_index("zz"),
            Err(RelationError::KeyNotFound {
                kind: KeyKind::Id,
                key: "zz".into()
            })
        );
        assert!(matches!(
            index.name_to_index("Omega"),
            Err(RelationError::KeyNotFound {
                kind: KeyKind::Name,
                ..
            })
        ));
        assert!(matches!(
            index.index_to_id(3),
            Err(RelationError::KeyNotFound {
                kind: KeyKind::Index,
                ..
            })
        ));
    }

    #[test]
    fn iterators_yield_canonical_order() {
        let index = sample();
        assert_eq!(index.ids().collect::<Vec<_>>(), vec!["a1", "b2", "c3"]);
        assert_eq!(
            index.names().collect::<Vec<_>>(),
            vec!["Alpha", "Beta", "Gamma"]
        );
    }

    // ── Construction errors ─────────────────────────────────────

    #[test]
    fn duplicate_id_fails_fast() {
        let err = IdentifierIndex::build(["a", "a"], ["x", "y"]).unwrap_err();
        assert_eq!(
            err,
            RelationError::DuplicateKey {
                kind: KeyKind::Id,
                key: "a".into()
            }
        );
    }

    #[test]
    fn duplicate_name_fails_fast() {
        let err = IdentifierIndex::build(["a", "b"], ["x", "x"]).unwrap_err();
        assert!(matches!(
            err,
            RelationError::DuplicateKey {
                kind: KeyKind::Name,
                ..
            }
        ));
    }

    #[test]
    fn mismatched_lengths_are_invalid() {
        assert!(matches!(
            IdentifierIndex::build(["a", "b"], ["x"]),
            Err(RelationError::InvalidInput { .. })
        ));
        assert!(matches!(
            IdentifierIndex::build(["a"], ["x", "y"]),
            Err(RelationError::InvalidInput { .. })
        ));
    }

    #[test]
    fn empty_index_is_valid() {
        let index = IdentifierIndex::build(Vec::<String>::new(), Vec::<String>::new()).unwrap();
        assert!(index.is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn every_index_round_trips(n in 0usize..64) {
            let ids: Vec<String> = (0..n).map(|i| format!("id-{i}")).collect();
            let names: Vec<String> = (0..n).map(|i| format!("name-{i}")).collect();
            let index = IdentifierIndex::build(ids, names).unwrap();
            for i in 0..n {
                let id = index.index_to_id(i).unwrap();
                let name = index.index_to_name(i).unwrap();
                prop_assert_eq!(index.id_to_index(id).unwrap(), i);
                prop_assert_eq!(index.name_to_index(name).unwrap(), i);
            }
        }
    }
}
