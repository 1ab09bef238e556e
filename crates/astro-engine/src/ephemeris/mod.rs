pub mod generator;
pub mod types;

pub use generator::{generate_positions, PositionGenerator};
pub use types::{sign_index_for_longitude, sign_name, BirthDetails, Body, BodyPosition};
