//! The four exploration policies.

use std::fmt;
use std::str::FromStr;

use pathviz_core::Cell;

use crate::distance::manhattan;

/// Which ordering policy a search uses to pick the next cell to expand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// FIFO frontier; ignores weights, shortest in number of moves.
    BreadthFirst,
    /// LIFO frontier; ignores weights, finds some path.
    DepthFirst,
    /// Frontier ordered by accumulated cost.
    Dijkstra,
    /// Frontier ordered by accumulated cost plus Manhattan distance to the end.
    AStar,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Dijkstra,
        Strategy::AStar,
    ];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// Whether the strategy relaxes accumulated costs (and so honours
    /// weights) instead of enqueueing each cell at most once.
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra | Self::AStar)
    }

    /// Frontier priority of `cell` reached at accumulated cost `g`.
    ///
    /// Only meaningful for weighted strategies.
    #[inline]
    pub fn priority(self, g: u32, cell: Cell, end: Cell) -> u32 {
        match self {
            Self::AStar => g + manhattan(cell, end),
            _ => g,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy \u{201c}{0}\u{201d} (expected bfs, dfs, dijkstra or astar)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("AStar".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!(" bfs ".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert!("greedy".parse::<Strategy>().is_err());
    }

    #[test]
    fn astar_priority_adds_heuristic() {
        let end = Cell::new(4, 4);
        let c = Cell::new(1, 2);
        assert_eq!(Strategy::Dijkstra.priority(3, c, end), 3);
        assert_eq!(Strategy::AStar.priority(3, c, end), 8);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_round_trip() {
        let json = serde_json::to_string(&Strategy::AStar).unwrap();
        assert_eq!(json, r#""AStar""#);
        let back: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Strategy::AStar);
    }
}
