mod frontiers;
pub use frontiers::*;
