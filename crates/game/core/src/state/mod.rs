//! Per-turn world snapshot.
//!
//! The host engine builds a fresh [`GameState`] every turn and hands it to the
//! decision core by shared reference. Nothing in this workspace mutates a
//! snapshot after construction.
pub mod error;
pub mod types;

use std::collections::BTreeMap;

pub use error::StateError;
pub use types::{EntityId, GameObject, ObjDetails, ObjType, Position, Team, Unit};

/// Read-only view of the board for one turn.
///
/// # Invariants
///
/// - Every object id is unique.
/// - At most one object stands on any coordinate.
/// - `grid` indexes exactly the objects in `objects`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Turn counter supplied by the host (informational).
    pub turn: u32,
    our_team: Team,
    objects: BTreeMap<EntityId, GameObject>,
    grid: BTreeMap<Position, EntityId>,
}

impl GameState {
    /// Creates an empty snapshot evaluated from `our_team`'s point of view.
    pub fn new(our_team: Team) -> Self {
        Self {
            turn: 0,
            our_team,
            objects: BTreeMap::new(),
            grid: BTreeMap::new(),
        }
    }

    /// Builds a snapshot from a list of objects.
    ///
    /// Fails on the first duplicate id or doubly occupied coordinate.
    pub fn from_objects<I>(turn: u32, our_team: Team, objects: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = GameObject>,
    {
        let mut state = Self::new(our_team);
        state.turn = turn;
        for object in objects {
            state.insert(object)?;
        }
        Ok(state)
    }

    /// Places an object on the board.
    pub fn insert(&mut self, object: GameObject) -> Result<(), StateError> {
        if self.objects.contains_key(&object.id) {
            return Err(StateError::DuplicateId { id: object.id });
        }
        if let Some(&occupant) = self.grid.get(&object.position) {
            return Err(StateError::PositionOccupied {
                position: object.position,
                occupant,
            });
        }

        self.grid.insert(object.position, object.id);
        self.objects.insert(object.id, object);
        Ok(())
    }

    pub fn our_team(&self) -> Team {
        self.our_team
    }

    pub fn other_team(&self) -> Team {
        self.our_team.opposite()
    }

    /// Object standing on `position`, if any.
    ///
    /// Off-board and empty coordinates both resolve to `None`.
    pub fn obj_by_coords(&self, position: Position) -> Option<&GameObject> {
        self.grid
            .get(&position)
            .and_then(|id| self.objects.get(id))
    }

    pub fn obj_by_id(&self, id: EntityId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    /// Units belonging to `team` in ascending id order, dead ones included.
    pub fn objs_by_team(&self, team: Team) -> impl Iterator<Item = &GameObject> + '_ {
        self.objects
            .values()
            .filter(move |object| object.team() == Some(team))
    }

    /// Every object in ascending id order.
    pub fn objects(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(id: u32, x: i32, y: i32) -> GameObject {
        GameObject::unit(EntityId(id), Position::new(x, y), Team::Red, 5)
    }

    #[test]
    fn other_team_is_opposite_of_ours() {
        let state = GameState::new(Team::Blue);
        assert_eq!(state.our_team(), Team::Blue);
        assert_eq!(state.other_team(), Team::Red);
    }

    #[test]
    fn lookup_by_coords_and_id() {
        let state = GameState::from_objects(
            1,
            Team::Red,
            [
                red(1, 2, 2),
                GameObject::terrain(EntityId(2), Position::new(3, 3)),
            ],
        )
        .unwrap();

        assert_eq!(state.turn, 1);
        assert_eq!(state.obj_by_coords(Position::new(2, 2)).map(|o| o.id), Some(EntityId(1)));
        assert_eq!(
            state.obj_by_coords(Position::new(3, 3)).map(|o| o.obj_type()),
            Some(ObjType::Terrain)
        );
        assert!(state.obj_by_coords(Position::new(4, 4)).is_none());
        assert!(state.obj_by_coords(Position::new(-40, 900)).is_none());
        assert_eq!(state.obj_by_id(EntityId(2)).map(|o| o.position), Some(Position::new(3, 3)));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut state = GameState::new(Team::Red);
        state.insert(red(1, 0, 0)).unwrap();
        assert_eq!(
            state.insert(red(1, 5, 5)),
            Err(StateError::DuplicateId { id: EntityId(1) })
        );
    }

    #[test]
    fn insert_rejects_occupied_position() {
        let mut state = GameState::new(Team::Red);
        state.insert(red(1, 0, 0)).unwrap();
        assert_eq!(
            state.insert(red(2, 0, 0)),
            Err(StateError::PositionOccupied {
                position: Position::new(0, 0),
                occupant: EntityId(1),
            })
        );
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn objs_by_team_is_ordered_and_skips_terrain() {
        let state = GameState::from_objects(
            0,
            Team::Red,
            [
                red(7, 0, 0),
                GameObject::unit(EntityId(2), Position::new(1, 0), Team::Blue, 3),
                red(3, 2, 0),
                GameObject::terrain(EntityId(1), Position::new(3, 0)),
            ],
        )
        .unwrap();

        let ids: Vec<_> = state.objs_by_team(Team::Red).map(|o| o.id).collect();
        assert_eq!(ids, vec![EntityId(3), EntityId(7)]);
        let ids: Vec<_> = state.objs_by_team(Team::Blue).map(|o| o.id).collect();
        assert_eq!(ids, vec![EntityId(2)]);
    }
}
