pub mod generator;
pub mod terrain;

pub use generator::TerrainGenerator;
pub use terrain::{ColorGrid, Grid, HeightGrid, TerrainMaps};
