//! Roster: the owning collection of members
//!
//! Owns every `Member` record and the monotonic member-id counter. Same
//! counter discipline as the catalog: IDs start at 1, never reused,
//! members never deleted.

use crate::models::{Member, MemberId};

/// Owning collection of members plus the member-id sequence
#[derive(Debug, Clone)]
pub struct Roster {
    members: Vec<Member>,
    next_id: MemberId,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create an empty roster with the counter at 1
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            next_id: MemberId::from_raw(1),
        }
    }

    /// Rebuild a roster from persisted state, restoring the counter exactly
    pub fn from_parts(members: Vec<Member>, next_id: MemberId) -> Self {
        Self { members, next_id }
    }

    /// Register a member. Assigns the next sequential ID and advances the counter.
    pub fn add(&mut self, name: impl Into<String>) -> Member {
        let member = Member::new(self.next_id, name);
        self.next_id = self.next_id.next();
        self.members.push(member.clone());
        member
    }

    /// Look up a member by ID
    pub fn find_by_id(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Mutable lookup, used by the circulation service to update loan lists
    pub(crate) fn find_by_id_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    /// All members in insertion order
    pub fn list(&self) -> &[Member] {
        &self.members
    }

    /// The ID the next registered member will receive
    pub fn next_id(&self) -> MemberId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increasing_from_one() {
        let mut roster = Roster::new();

        assert_eq!(roster.add("Alice").id, MemberId::from_raw(1));
        assert_eq!(roster.add("Bob").id, MemberId::from_raw(2));
        assert_eq!(roster.next_id(), MemberId::from_raw(3));
    }

    #[test]
    fn test_counters_independent_of_catalog() {
        use crate::store::Catalog;

        let mut roster = Roster::new();
        let mut catalog = Catalog::new();

        catalog.add("Dune", "Herbert");
        catalog.add("Hyperion", "Simmons");

        // Member IDs are their own sequence
        assert_eq!(roster.add("Alice").id, MemberId::from_raw(1));
    }

    #[test]
    fn test_find_by_id() {
        let mut roster = Roster::new();
        let id = roster.add("Alice").id;

        assert_eq!(roster.find_by_id(id).unwrap().name, "Alice");
        assert!(roster.find_by_id(MemberId::from_raw(99)).is_none());
    }

    #[test]
    fn test_list_in_insertion_order() {
        let mut roster = Roster::new();
        roster.add("Alice");
        roster.add("Bob");
        roster.add("Carol");

        let names: Vec<_> = roster.list().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_from_parts_restores_counter() {
        let mut roster = Roster::new();
        roster.add("Alice");

        let mut restored = Roster::from_parts(roster.list().to_vec(), roster.next_id());
        assert_eq!(restored.add("Bob").id, MemberId::from_raw(2));
    }
}
