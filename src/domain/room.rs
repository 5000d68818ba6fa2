use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Defines the lifecycle state of a single hotel room.
///
/// The cycle, starting from a freshly built room, is:
/// `Available` → `Occupied` → `Vacant` → `Available` (after cleaning),
/// with an optional maintenance detour `Vacant` → `Repair` → `Vacant`.
/// There is no terminal state; a room cycles indefinitely.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    /// The room is cleaned and ready for a guest.
    Available,
    /// A guest is currently checked in.
    Occupied,
    /// The guest has left; the room awaits cleaning or repair.
    Vacant,
    /// The room is under maintenance and cannot be assigned.
    Repair,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Vacant => "Vacant",
            RoomStatus::Repair => "Repair",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RoomStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Available" => Ok(RoomStatus::Available),
            "Occupied" => Ok(RoomStatus::Occupied),
            "Vacant" => Ok(RoomStatus::Vacant),
            "Repair" => Ok(RoomStatus::Repair),
            other => Err(Error::RoomStatus(other.to_string())),
        }
    }
}

/// A single room, identified by its number (e.g. `"12C"`).
///
/// Status changes go exclusively through the transition methods below.
/// A failed transition leaves the status untouched.
#[derive(Debug, Clone)]
pub struct Room {
    number: String,
    status: RoomStatus,
}

impl Room {
    pub fn new(number: impl Into<String>) -> Room {
        Room { number: number.into(), status: RoomStatus::Available }
    }

    pub fn with_status(number: impl Into<String>, status: RoomStatus) -> Room {
        Room { number: number.into(), status }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    /// A guest moves in. Valid only from `Available`.
    pub fn check_in(&mut self) -> Result<()> {
        if self.status != RoomStatus::Available {
            return Err(Error::CheckIn);
        }
        self.status = RoomStatus::Occupied;
        log::debug!("Room {} checked in.", self.number);
        Ok(())
    }

    /// The guest leaves. Valid only from `Occupied`.
    pub fn check_out(&mut self) -> Result<()> {
        if self.status != RoomStatus::Occupied {
            return Err(Error::CheckOut);
        }
        self.status = RoomStatus::Vacant;
        log::debug!("Room {} checked out.", self.number);
        Ok(())
    }

    /// Housekeeping done. Valid only from `Vacant`.
    pub fn clean(&mut self) -> Result<()> {
        if self.status != RoomStatus::Vacant {
            return Err(Error::Clean);
        }
        self.status = RoomStatus::Available;
        log::debug!("Room {} cleaned.", self.number);
        Ok(())
    }

    /// The room goes into maintenance. Valid only from `Vacant`.
    pub fn repair(&mut self) -> Result<()> {
        if self.status != RoomStatus::Vacant {
            return Err(Error::Repair);
        }
        self.status = RoomStatus::Repair;
        log::debug!("Room {} sent to repair.", self.number);
        Ok(())
    }

    /// Maintenance finished. Valid only from `Repair`.
    pub fn repaired(&mut self) -> Result<()> {
        if self.status != RoomStatus::Repair {
            return Err(Error::Repaired);
        }
        self.status = RoomStatus::Vacant;
        log::debug!("Room {} repaired.", self.number);
        Ok(())
    }
}
