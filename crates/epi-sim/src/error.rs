use epi_core::EpiError;
use epi_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] EpiError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("density map is {map_width}x{map_height} but the grid is {grid_width}x{grid_height}")]
    DensityDimensionMismatch {
        grid_width:  u32,
        grid_height: u32,
        map_width:   u32,
        map_height:  u32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
