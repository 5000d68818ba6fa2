use std::path::Path;

use crate::api::hotel_dto::HotelDto;
use crate::api::virus_map_dto::VirusMapDto;
use crate::domain::hotel::Hotel;
use crate::domain::virus_map::VirusMap;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads a hotel description from a JSON file and builds the registry.
pub fn load_hotel(path: impl AsRef<Path>) -> Result<Hotel> {
    let dto: HotelDto = parse_json_file(path)?;
    log::info!("Hotel JSON parsed successfully.");
    Hotel::from_dto(dto)
}

/// Loads an infection grid from a JSON file and builds the solver.
pub fn load_virus_map(path: impl AsRef<Path>) -> Result<VirusMap> {
    let dto: VirusMapDto = parse_json_file(path)?;
    log::info!("Grid JSON parsed successfully.");
    VirusMap::from_dto(dto)
}
