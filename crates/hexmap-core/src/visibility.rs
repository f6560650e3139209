//! Per-player visibility of a node.

/// How much a player currently knows about a node.
///
/// Ordered from least to most visible so "best of" is `max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Visibility {
    /// Never seen.
    #[default]
    Invisible,
    /// Seen before, not currently in sight. The player sees a snapshot.
    FogOfWar,
    /// Currently in sight.
    Visible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_state_is_max() {
        assert_eq!(Visibility::FogOfWar.max(Visibility::Visible), Visibility::Visible);
        assert_eq!(Visibility::Invisible.max(Visibility::FogOfWar), Visibility::FogOfWar);
    }
}
