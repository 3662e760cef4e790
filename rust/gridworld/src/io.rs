use crate::error::Result;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk layout: `{"grid": [[0, 1, 2, 3], ...]}`.
#[derive(Debug, Serialize, Deserialize)]
struct MapFile {
    grid: Vec<Vec<u8>>,
}

pub fn parse_map(json: &str) -> Result<Grid> {
    let m: MapFile = serde_json::from_str(json)?;
    Grid::new(&m.grid)
}

pub fn to_json(grid: &Grid) -> Result<String> {
    let m = MapFile {
        grid: grid.to_codes(),
    };
    Ok(serde_json::to_string_pretty(&m)?)
}

pub fn load_map(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let grid = parse_map(&fs::read_to_string(path)?)?;
    info!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "loaded map");

    Ok(grid)
}

/// Write `grid` to `path`, creating missing parent directories.
pub fn save_map(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, to_json(grid)?)?;
    info!(path = %path.display(), "saved map");

    Ok(())
}
