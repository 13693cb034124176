mod lenient;
pub mod planting;
pub mod season_plan;
pub mod seed_totals;
pub mod variety;

pub use lenient::Unrecognized;
pub use planting::*;
pub use season_plan::*;
pub use seed_totals::*;
pub use variety::*;
