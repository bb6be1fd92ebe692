//! Position evaluation.
//!
//! Territory analysis of each side's pieces, per-session board info, the
//! heuristic that scores pieces and whole boards, and position features.

pub mod features;
pub mod heuristic;
pub mod info;
pub mod territory;

pub use features::{
    feature_score, is_forced_jump, safe_points, side_features, state_heuristic, vulnerable_points,
    SideFeatures,
};
pub use heuristic::{
    board_heuristic, heuristic_value, king_centering_bonus, side_heuristic, KING_SWEET_SPOT,
};
pub use info::BoardInfo;
pub use territory::{territory, territory_pair, BoardTerritory, TerritoryPair};
