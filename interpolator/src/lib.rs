pub mod config;
pub mod engine;
pub mod extract;
pub mod numeric;
pub mod re;
pub mod revival;
pub mod rules;
pub mod statics;
pub mod strategy;

pub use config::*;
pub use engine::*;
pub use extract::*;
pub use revival::*;
pub use rules::*;
pub use strategy::*;
