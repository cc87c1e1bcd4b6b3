pub mod common;
pub mod object;

// Re-export common types
pub use common::{EntityId, Position};

// Re-export board object types
pub use object::{GameObject, ObjDetails, ObjType, Team, Unit};
