pub mod hotel;
pub mod room;
pub mod virus_map;

mod virus_map_tests;
