mod choice;
mod directory;

pub use choice::Choice;
pub use directory::{Region, RegionDirectory};
