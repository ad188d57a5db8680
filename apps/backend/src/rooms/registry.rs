use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::info;

use crate::domain::RuleSet;
use crate::errors::domain::{DomainError, OperationKind};
use crate::rooms::room::{Room, RoomSummary};

pub const MAX_ROOM_NAME_LEN: usize = 64;

/// Room name to room. Rooms are created on first reference and live for
/// the rest of the process.
pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Room>>,
    default_rules: RuleSet,
}

impl RoomRegistry {
    pub fn new(default_rules: RuleSet) -> Self {
        Self {
            rooms: DashMap::new(),
            default_rules,
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<Room>> {
        self.rooms.get(name).map(|r| Arc::clone(r.value()))
    }

    pub fn get_or_create(&self, name: &str) -> Result<Arc<Room>, DomainError> {
        self.create_with_rules(name, None).map(|(room, _)| room)
    }

    /// Look up `name`, creating it with `rules` (or the default rules) when
    /// absent. Rules of an existing room are never changed. The flag reports
    /// whether this call created the room.
    pub fn create_with_rules(
        &self,
        name: &str,
        rules: Option<RuleSet>,
    ) -> Result<(Arc<Room>, bool), DomainError> {
        validate_room_name(name)?;
        match self.rooms.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok((Arc::clone(entry.get()), false)),
            Entry::Vacant(entry) => {
                let rules = rules.unwrap_or(self.default_rules);
                let room = Arc::new(Room::new(name, rules));
                entry.insert(Arc::clone(&room));
                info!(room = %name, ?rules, "room created");
                Ok((room, true))
            }
        }
    }

    /// Sorted room names.
    pub fn room_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rooms.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    pub fn summaries(&self) -> Vec<RoomSummary> {
        let rooms: Vec<Arc<Room>> = self.rooms.iter().map(|r| Arc::clone(r.value())).collect();
        let mut summaries: Vec<RoomSummary> = rooms.iter().map(|r| r.summary()).collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }
}

/// Room names appear in URLs: 1..=64 ASCII letters, digits, `-` or `_`.
pub fn validate_room_name(name: &str) -> Result<(), DomainError> {
    let ok = !name.is_empty()
        && name.len() <= MAX_ROOM_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if ok {
        Ok(())
    } else {
        Err(DomainError::operation(
            OperationKind::InvalidName,
            format!("Invalid room name {name:?}"),
        ))
    }
}
