//! Member directory over the members snapshot.

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::Member,
    storage::SnapshotFile,
};

/// Registered members, keyed by member id.
///
/// Entries keep their insertion order, matching the snapshot on disk. The
/// simple mutators rewrite the snapshot themselves; lending flows mutate the
/// borrow lists through [`get_mut`](Self::get_mut) and call
/// [`persist`](Self::persist) once done.
pub struct MemberDirectory {
    members: IndexMap<String, Member>,
    snapshot: SnapshotFile,
}

impl MemberDirectory {
    /// Open the directory, loading whatever the snapshot currently holds.
    pub fn open(snapshot: SnapshotFile) -> Self {
        let members = snapshot.load();
        Self { members, snapshot }
    }

    /// Register a member under their id, starting with no books borrowed.
    pub fn register(&mut self, id: String, name: String) -> AppResult<()> {
        if self.members.contains_key(&id) {
            return Err(AppError::DuplicateMemberId(id));
        }
        let member = Member {
            name,
            id: id.clone(),
            borrowed: Vec::new(),
        };
        self.members.insert(id, member);
        self.persist()
    }

    /// Remove a member by id, returning the removed entry.
    ///
    /// Loans recorded for the member stay in the ledger untouched.
    pub fn deregister(&mut self, id: &str) -> AppResult<Member> {
        let member = self
            .members
            .shift_remove(id)
            .ok_or_else(|| AppError::MemberNotFound(id.to_string()))?;
        self.persist()?;
        Ok(member)
    }

    /// Get a member by id.
    pub fn get(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    /// Get a member by id for mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Member> {
        self.members.get_mut(id)
    }

    /// Whether a member with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    /// All members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Rewrite the snapshot from the in-memory state.
    pub fn persist(&self) -> AppResult<()> {
        self.snapshot.save(&self.members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn directory(tmp: &TempDir) -> MemberDirectory {
        MemberDirectory::open(SnapshotFile::new(tmp.path().join("usuarios.json")))
    }

    fn register(members: &mut MemberDirectory, id: &str, name: &str) -> AppResult<()> {
        members.register(id.to_string(), name.to_string())
    }

    #[test]
    fn test_register_starts_with_empty_borrow_list() {
        let tmp = TempDir::new().unwrap();
        let mut members = directory(&tmp);

        register(&mut members, "U-001", "Ana").unwrap();
        assert!(members.get("U-001").unwrap().borrowed.is_empty());
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let tmp = TempDir::new().unwrap();
        let mut members = directory(&tmp);

        register(&mut members, "U-001", "Ana").unwrap();
        let err = register(&mut members, "U-001", "Otra Ana").unwrap_err();

        assert!(matches!(err, AppError::DuplicateMemberId(_)));
        assert_eq!(members.len(), 1);
        assert_eq!(members.get("U-001").unwrap().name, "Ana");
    }

    #[test]
    fn test_deregister_unknown_id_fails() {
        let tmp = TempDir::new().unwrap();
        let mut members = directory(&tmp);

        let err = members.deregister("U-404").unwrap_err();
        assert!(matches!(err, AppError::MemberNotFound(_)));
    }

    #[test]
    fn test_mutations_survive_reload() {
        let tmp = TempDir::new().unwrap();
        {
            let mut members = directory(&tmp);
            register(&mut members, "U-001", "Ana").unwrap();
            register(&mut members, "U-002", "Luis").unwrap();
            members.deregister("U-001").unwrap();
        }

        let members = directory(&tmp);
        assert_eq!(members.len(), 1);
        assert!(members.contains("U-002"));
    }
}
