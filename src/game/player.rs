use std::fmt;
use std::num::NonZeroU32;

/// Identifier of a player. Ids are 1-based and follow roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(NonZeroU32);

impl PlayerId {
    /// Returns `None` for zero, which is never a valid id.
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(PlayerId)
    }

    /// Id of the player at `index` in turn order.
    pub fn from_index(index: usize) -> Self {
        let offset = u32::try_from(index).unwrap_or(u32::MAX);
        PlayerId(NonZeroU32::MIN.saturating_add(offset))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A seat at the table. The color is only used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    color: String,
}

impl Player {
    pub fn new(id: PlayerId, color: impl Into<String>) -> Self {
        Player {
            id,
            color: color.into(),
        }
    }

    /// Build a roster from colors, numbering players 1..=n in order.
    pub fn roster<I, S>(colors: I) -> Vec<Player>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        colors
            .into_iter()
            .enumerate()
            .map(|(index, color)| Player::new(PlayerId::from_index(index), color))
            .collect()
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Get player name for display
    pub fn name(&self) -> String {
        format!("Player {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_an_id() {
        assert!(PlayerId::new(0).is_none());
        assert_eq!(PlayerId::new(3).map(PlayerId::get), Some(3));
    }

    #[test]
    fn test_roster_numbers_from_one() {
        let roster = Player::roster(["red", "yellow", "#00FF00"]);
        let ids: Vec<u32> = roster.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(roster[2].color(), "#00FF00");
    }

    #[test]
    fn test_player_name() {
        let roster = Player::roster(["red", "yellow"]);
        assert_eq!(roster[0].name(), "Player 1");
        assert_eq!(roster[1].name(), "Player 2");
    }
}
