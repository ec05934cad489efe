//! Grouping of package members by identifier folder.

use std::collections::HashMap;

use crate::Result;
use crate::formats::Payload;
use crate::formats::SourceEntry;

use super::role::EntryRole;
use super::role::split_member_name;

/// The members found in one identifier folder.
///
/// Each role holds at most one value; a later member with the same role
/// replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierGroup<P> {
    /// Original project-relative path, trimmed. `None` if absent or blank.
    pub pathname: Option<String>,
    /// Asset content.
    pub asset: Option<P>,
    /// `.meta` sidecar content.
    pub meta: Option<P>,
}

impl<P> Default for IdentifierGroup<P> {
    fn default() -> Self {
        Self {
            pathname: None,
            asset: None,
            meta: None,
        }
    }
}

impl<P> IdentifierGroup<P> {
    /// Returns the pathname if the group can be placed in the project tree.
    #[must_use]
    pub fn resolved_path(&self) -> Option<&str> {
        self.pathname.as_deref()
    }
}

/// Identifier folders of a package, in first-seen order.
#[derive(Debug, Clone)]
pub struct PackageIndex<P> {
    groups: Vec<(String, IdentifierGroup<P>)>,
    positions: HashMap<String, usize>,
    ignored: usize,
}

impl<P> Default for PackageIndex<P> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            positions: HashMap::new(),
            ignored: 0,
        }
    }
}

impl<P: Payload> PackageIndex<P> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from decoded members.
    ///
    /// # Errors
    ///
    /// Returns an error if a `pathname` member cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitypack_core::correlation::PackageIndex;
    /// use unitypack_core::formats::RawEntry;
    ///
    /// let entries = vec![
    ///     RawEntry { name: "abc/pathname".into(), size: 9, payload: b"Assets/x\n".to_vec() },
    ///     RawEntry { name: "abc/asset".into(), size: 1, payload: b"x".to_vec() },
    /// ];
    /// let index = PackageIndex::from_entries(entries).unwrap();
    /// let group = index.get("abc").unwrap();
    /// assert_eq!(group.pathname.as_deref(), Some("Assets/x"));
    /// ```
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SourceEntry<P>>,
    {
        let mut index = Self::new();
        for entry in entries {
            index.insert(&entry.name, entry.payload)?;
        }
        Ok(index)
    }

    /// Adds one member to its identifier folder.
    ///
    /// Returns the role the member was classified as, or `None` if its name
    /// has fewer than two segments and it was discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if a `pathname` member cannot be read.
    pub fn insert(&mut self, name: &str, payload: P) -> Result<Option<EntryRole>> {
        let Some((identifier, file_name)) = split_member_name(name) else {
            self.ignored += 1;
            return Ok(None);
        };

        let role = EntryRole::classify(file_name);
        let group = self.group_mut(identifier);
        match role {
            EntryRole::Pathname => {
                let text = payload.read_text()?;
                let trimmed = text.trim();
                group.pathname = (!trimmed.is_empty()).then(|| trimmed.to_string());
            }
            EntryRole::Asset => group.asset = Some(payload),
            EntryRole::Meta => group.meta = Some(payload),
            EntryRole::Other => {}
        }
        Ok(Some(role))
    }
}

impl<P> PackageIndex<P> {
    fn group_mut(&mut self, identifier: &str) -> &mut IdentifierGroup<P> {
        let position = match self.positions.get(identifier) {
            Some(&position) => position,
            None => {
                self.groups
                    .push((identifier.to_string(), IdentifierGroup::default()));
                let position = self.groups.len() - 1;
                self.positions.insert(identifier.to_string(), position);
                position
            }
        };
        &mut self.groups[position].1
    }

    /// Returns the group for an identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&IdentifierGroup<P>> {
        self.positions
            .get(identifier)
            .map(|&position| &self.groups[position].1)
    }

    /// Returns the number of identifier folders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no identifier folders were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns how many members were discarded for having too few segments.
    #[must_use]
    pub fn ignored_count(&self) -> usize {
        self.ignored
    }

    /// Iterates over `(identifier, group)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IdentifierGroup<P>)> {
        self.groups.iter().map(|(id, group)| (id.as_str(), group))
    }
}

impl<P> IntoIterator for PackageIndex<P> {
    type Item = (String, IdentifierGroup<P>);
    type IntoIter = std::vec::IntoIter<(String, IdentifierGroup<P>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::formats::RawEntry;

    fn entry(name: &str, payload: &[u8]) -> RawEntry {
        RawEntry {
            name: name.to_string(),
            size: payload.len() as u64,
            payload: payload.to_vec(),
        }
    }

    #[test]
    fn test_groups_by_identifier() {
        let index = PackageIndex::from_entries(vec![
            entry("a/pathname", b"Assets/A.cs"),
            entry("b/asset", b"B"),
            entry("a/asset", b"A"),
            entry("a/asset.meta", b"meta A"),
        ])
        .unwrap();

        assert_eq!(index.len(), 2);
        let a = index.get("a").unwrap();
        assert_eq!(a.pathname.as_deref(), Some("Assets/A.cs"));
        assert_eq!(a.asset.as_deref(), Some(&b"A"[..]));
        assert_eq!(a.meta.as_deref(), Some(&b"meta A"[..]));

        let b = index.get("b").unwrap();
        assert!(b.pathname.is_none());
        assert!(b.meta.is_none());
    }

    #[test]
    fn test_pathname_is_trimmed() {
        let index =
            PackageIndex::from_entries(vec![entry("g/pathname", b"  Assets/Doc.txt\r\n")]).unwrap();
        assert_eq!(
            index.get("g").unwrap().resolved_path(),
            Some("Assets/Doc.txt")
        );
    }

    #[test]
    fn test_blank_pathname_is_absent() {
        let index = PackageIndex::from_entries(vec![entry("g/pathname", b" \n")]).unwrap();
        assert!(index.get("g").unwrap().pathname.is_none());
    }

    #[test]
    fn test_last_entry_wins() {
        let index = PackageIndex::from_entries(vec![
            entry("g/asset", b"first"),
            entry("g/asset", b"second"),
        ])
        .unwrap();
        assert_eq!(index.get("g").unwrap().asset.as_deref(), Some(&b"second"[..]));
    }

    #[test]
    fn test_single_segment_names_ignored() {
        let mut index = PackageIndex::new();
        assert_eq!(index.insert("pathname", b"x".to_vec()).unwrap(), None);
        assert!(index.is_empty());
        assert_eq!(index.ignored_count(), 1);
    }

    #[test]
    fn test_unknown_members_ignored() {
        let mut index = PackageIndex::new();
        let role = index.insert("g/preview.png", b"png".to_vec()).unwrap();
        assert_eq!(role, Some(EntryRole::Other));
        let group = index.get("g").unwrap();
        assert!(group.asset.is_none() && group.meta.is_none() && group.pathname.is_none());
    }

    #[test]
    fn test_iteration_keeps_first_seen_order() {
        let index = PackageIndex::from_entries(vec![
            entry("z/asset", b"1"),
            entry("a/asset", b"2"),
            entry("z/pathname", b"p"),
        ])
        .unwrap();
        let ids: Vec<_> = index.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }
}
