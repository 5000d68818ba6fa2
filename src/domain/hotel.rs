use std::str::FromStr;

use crate::api::hotel_dto::HotelDto;
use crate::domain::room::{Room, RoomStatus};
use crate::error::{Error, Result};

/// The fixed column letters of every floor. Each floor has exactly five rooms.
pub const HOTEL_COLUMNS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// The hotel registry: a fixed grid of floors, each holding five rooms.
///
/// The registry owns all `Room` instances. Floor count and per-floor room
/// count are fixed at construction. Assignment and listing both walk the
/// floors in snake order: odd 1-indexed floors left to right, even floors
/// right to left.
#[derive(Debug)]
pub struct Hotel {
    floors: Vec<Vec<Room>>,
}

impl Hotel {
    /// Builds a hotel with `floor_count` floors of five `Available` rooms,
    /// numbered `{floor}{column}` with 1-based floors.
    pub fn new(floor_count: usize) -> Result<Hotel> {
        if floor_count < 1 {
            return Err(Error::FloorCount(floor_count));
        }

        let floors = (1..=floor_count)
            .map(|floor| HOTEL_COLUMNS.iter().map(|col| Room::new(format!("{}{}", floor, col))).collect())
            .collect();

        log::info!("Hotel created with {} floors, all rooms Available.", floor_count);
        Ok(Hotel { floors })
    }

    /// Builds a hotel from an explicit status matrix.
    ///
    /// The matrix must have exactly `floor_count` rows of exactly five
    /// statuses each; any shape mismatch fails fast.
    pub fn with_statuses(floor_count: usize, statuses: Vec<Vec<RoomStatus>>) -> Result<Hotel> {
        if floor_count < 1 {
            return Err(Error::FloorCount(floor_count));
        }
        if statuses.len() != floor_count {
            return Err(Error::FloorCountMismatch { floors: floor_count, rows: statuses.len() });
        }

        let mut floors = Vec::with_capacity(floor_count);
        for (i, row) in statuses.into_iter().enumerate() {
            let floor = i + 1;
            if row.len() != HOTEL_COLUMNS.len() {
                return Err(Error::RoomCount { floor, count: row.len() });
            }
            floors.push(
                row.into_iter()
                    .zip(HOTEL_COLUMNS.iter())
                    .map(|(status, col)| Room::with_status(format!("{}{}", floor, col), status))
                    .collect(),
            );
        }

        log::info!("Hotel created with {} floors from a status matrix.", floor_count);
        Ok(Hotel { floors })
    }

    /// Builds a hotel from its DTO, parsing the optional status-string matrix.
    pub fn from_dto(dto: HotelDto) -> Result<Hotel> {
        match dto.rooms {
            None => Hotel::new(dto.floors),
            Some(rows) => {
                let statuses = rows
                    .into_iter()
                    .map(|row| row.iter().map(|s| RoomStatus::from_str(s)).collect::<Result<Vec<_>>>())
                    .collect::<Result<Vec<_>>>()?;
                Hotel::with_statuses(dto.floors, statuses)
            }
        }
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Assigns the first `Available` room in snake order, checking it in.
    ///
    /// Returns the room number, or `None` when no room is available.
    pub fn assign_room(&mut self) -> Option<String> {
        for (i, floor) in self.floors.iter_mut().enumerate() {
            let rooms: Box<dyn Iterator<Item = &mut Room> + '_> =
                if i % 2 == 0 { Box::new(floor.iter_mut()) } else { Box::new(floor.iter_mut().rev()) };
            for room in rooms {
                if room.status() == RoomStatus::Available {
                    // check_in cannot fail on an Available room
                    room.check_in().ok()?;
                    log::info!("Assigned room {}.", room.number());
                    return Some(room.number().to_string());
                }
            }
        }
        log::warn!("No available room to assign.");
        None
    }

    /// Lists the numbers of all `Available` rooms in snake order.
    pub fn list_available_rooms(&self) -> Vec<String> {
        self.snake_iter()
            .filter(|room| room.status() == RoomStatus::Available)
            .map(|room| room.number().to_string())
            .collect()
    }

    /// Looks up a room by its textual identifier.
    ///
    /// The identifier is one or more digits (the 1-based floor) followed by
    /// exactly one column letter, e.g. `"12C"`. A malformed or out-of-range
    /// identifier is an absence, not an error.
    pub fn get_room(&self, number: &str) -> Option<&Room> {
        let (floor_idx, col_idx) = Self::parse_room_number(number, self.floors.len())?;
        Some(&self.floors[floor_idx][col_idx])
    }

    /// Mutable variant of [`get_room`](Hotel::get_room), for walking a room
    /// through its lifecycle after lookup.
    pub fn get_room_mut(&mut self, number: &str) -> Option<&mut Room> {
        let (floor_idx, col_idx) = Self::parse_room_number(number, self.floors.len())?;
        Some(&mut self.floors[floor_idx][col_idx])
    }

    /// Splits `number` into 0-based (floor, column) indices, or `None` if the
    /// format does not parse or the floor is out of range.
    fn parse_room_number(number: &str, floor_count: usize) -> Option<(usize, usize)> {
        let column = number.chars().last()?;
        let digits = &number[..number.len() - column.len_utf8()];
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let col_idx = HOTEL_COLUMNS.iter().position(|&c| c == column)?;
        let floor: usize = digits.parse().ok()?;
        if floor < 1 || floor > floor_count {
            return None;
        }
        Some((floor - 1, col_idx))
    }

    /// Walks all rooms in snake order: odd 1-indexed floors left to right,
    /// even floors right to left.
    fn snake_iter(&self) -> impl Iterator<Item = &Room> {
        self.floors.iter().enumerate().flat_map(|(i, floor)| {
            let forward: Box<dyn Iterator<Item = &Room> + '_> =
                if i % 2 == 0 { Box::new(floor.iter()) } else { Box::new(floor.iter().rev()) };
            forward
        })
    }
}
