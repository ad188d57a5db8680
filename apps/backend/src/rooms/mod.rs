//! Room registry and per-room serialized dispatch.

pub mod registry;
pub mod room;

pub use registry::RoomRegistry;
pub use room::{Joined, Room, RoomEvent, RoomSubscriber, RoomSummary};
