pub mod hotel_dto;
pub mod virus_map_dto;
