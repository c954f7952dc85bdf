use std::{
    collections::HashMap,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

/// One user record held by `UserRepository`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    // seconds since epoch
    pub created_at: u64,
    pub is_active: bool,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.username, self.email)
    }

    pub fn update_email(&mut self, new_email: String) {
        self.email = new_email;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// ID-indexed user store
///
/// IDs come from a counter owned by the repository, so two creations in
/// the same instant still get distinct IDs.
pub struct UserRepository {
    users: HashMap<u64, User>,
    next_id: u64,
}

impl Default for UserRepository {
    fn default() -> Self {
        UserRepository::new()
    }
}

impl UserRepository {
    pub fn new() -> UserRepository {
        UserRepository {
            users: HashMap::new(),
            next_id: 1,
        }
    }

    /// create a user with the next free ID and return that ID
    pub fn create(&mut self, username: String, email: String) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.users.insert(
            id,
            User {
                id,
                username,
                email,
                created_at,
                is_active: true,
            },
        );
        id
    }

    /// insert a record with an explicit ID
    ///
    /// return false without overwriting if the ID is already taken or is
    /// `u64::MAX` (reserved so the ID counter cannot overflow); the
    /// counter is bumped past the ID so later `create` calls cannot
    /// collide with it
    pub fn insert(&mut self, user: User) -> bool {
        if user.id == u64::MAX || self.users.contains_key(&user.id) {
            return false;
        }
        if user.id >= self.next_id {
            self.next_id = user.id + 1;
        }
        self.users.insert(user.id, user);
        true
    }

    pub fn find_by_id(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// linear scan on the secondary attribute, first match wins
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|user| user.username == username)
    }

    /// delete a record by ID
    ///
    /// return false if the ID is absent
    pub fn delete(&mut self, id: u64) -> bool {
        self.users.remove(&id).is_some()
    }

    /// all IDs, in no particular order
    pub fn list_ids(&self) -> Vec<u64> {
        self.users.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
