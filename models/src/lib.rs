pub mod catalog;
pub mod level;
pub mod skill;

pub use catalog::*;
pub use level::*;
pub use skill::*;
