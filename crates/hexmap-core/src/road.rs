//! Road types stored on node edges.

/// What kind of road occupies an edge between two nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoadType {
    /// No road.
    #[default]
    None,
    /// A road for carriers on foot.
    Normal,
    /// A water road travelled by boat carriers.
    Boat,
}

impl RoadType {
    /// True unless this is [`RoadType::None`].
    pub fn is_some(self) -> bool {
        self != RoadType::None
    }
}
