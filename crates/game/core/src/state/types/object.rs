use super::{EntityId, Position};

/// One of the two competing sides.
///
/// Which side is "ours" is decided per snapshot by [`crate::GameState::our_team`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    /// Returns the other side.
    pub const fn opposite(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

/// Coarse object classification used by the tile classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ObjType {
    Unit,
    Terrain,
}

/// Combat unit payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub team: Team,
    /// Hit points. A unit is alive while this is strictly positive.
    pub health: i32,
}

impl Unit {
    pub const fn new(team: Team, health: i32) -> Self {
        Self { team, health }
    }
}

/// What occupies a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObjDetails {
    Unit(Unit),
    /// Impassable feature with no team and no health.
    Terrain,
}

/// An entity placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameObject {
    pub id: EntityId,
    pub position: Position,
    pub details: ObjDetails,
}

impl GameObject {
    pub const fn unit(id: EntityId, position: Position, team: Team, health: i32) -> Self {
        Self {
            id,
            position,
            details: ObjDetails::Unit(Unit::new(team, health)),
        }
    }

    pub const fn terrain(id: EntityId, position: Position) -> Self {
        Self {
            id,
            position,
            details: ObjDetails::Terrain,
        }
    }

    pub const fn obj_type(&self) -> ObjType {
        match self.details {
            ObjDetails::Unit(_) => ObjType::Unit,
            ObjDetails::Terrain => ObjType::Terrain,
        }
    }

    /// Owning team, `None` for terrain.
    pub const fn team(&self) -> Option<Team> {
        match self.details {
            ObjDetails::Unit(unit) => Some(unit.team),
            ObjDetails::Terrain => None,
        }
    }

    /// Current health, `None` for terrain.
    pub const fn health(&self) -> Option<i32> {
        match self.details {
            ObjDetails::Unit(unit) => Some(unit.health),
            ObjDetails::Terrain => None,
        }
    }

    /// True for units with positive health. Terrain is never alive.
    pub const fn is_alive(&self) -> bool {
        matches!(self.details, ObjDetails::Unit(Unit { health, .. }) if health > 0)
    }

    /// True for living units of `team`.
    pub fn is_alive_on(&self, team: Team) -> bool {
        self.is_alive() && self.team() == Some(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_opposite_is_involution() {
        for team in Team::ALL {
            assert_ne!(team.opposite(), team);
            assert_eq!(team.opposite().opposite(), team);
        }
    }

    #[test]
    fn team_parses_case_insensitively() {
        assert_eq!("RED".parse::<Team>(), Ok(Team::Red));
        assert_eq!("blue".parse::<Team>(), Ok(Team::Blue));
        assert!("green".parse::<Team>().is_err());
        assert_eq!(Team::Blue.to_string(), "blue");
    }

    #[test]
    fn terrain_has_no_team_or_health() {
        let rock = GameObject::terrain(EntityId(3), Position::new(1, 1));
        assert_eq!(rock.obj_type(), ObjType::Terrain);
        assert_eq!(rock.team(), None);
        assert_eq!(rock.health(), None);
        assert!(!rock.is_alive());
    }

    #[test]
    fn unit_alive_only_with_positive_health() {
        let pos = Position::new(0, 0);
        assert!(GameObject::unit(EntityId(1), pos, Team::Red, 1).is_alive());
        assert!(!GameObject::unit(EntityId(1), pos, Team::Red, 0).is_alive());
        assert!(!GameObject::unit(EntityId(1), pos, Team::Red, -4).is_alive());
        assert!(GameObject::unit(EntityId(1), pos, Team::Red, 5).is_alive_on(Team::Red));
        assert!(!GameObject::unit(EntityId(1), pos, Team::Red, 5).is_alive_on(Team::Blue));
    }
}
