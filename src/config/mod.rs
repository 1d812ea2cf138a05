pub mod mission;

pub use mission::{MissionInput, MissionParameters};
