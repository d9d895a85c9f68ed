mod cell;
mod live_set;
mod region;
pub mod life;

pub use cell::Cell;
pub use live_set::LiveSet;
pub use region::Region;
pub use life::step;
