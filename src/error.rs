use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse input JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Floor count must be a positive integer, got {0}")]
    FloorCount(usize),

    #[error("Status matrix has {rows} rows but the hotel declares {floors} floors")]
    FloorCountMismatch { floors: usize, rows: usize },

    #[error("Room count must be 5, floor {floor} got {count}")]
    RoomCount { floor: usize, count: usize },

    #[error("{0} is not an acceptable room status")]
    RoomStatus(String),

    #[error("Grid must be {rows}x{cols}, row {row} has {count} cells")]
    GridShape { rows: usize, cols: usize, row: usize, count: usize },

    #[error("Grid dimensions must be at least 1x1, got {rows}x{cols}")]
    GridDimensions { rows: usize, cols: usize },

    #[error("Cell ({row},{col}) holds {value}, expected 0, 1 or 2")]
    CellValue { row: usize, col: usize, value: u8 },

    #[error("room must be Available to be Occupied")]
    CheckIn,

    #[error("room must be Occupied to be Vacant")]
    CheckOut,

    #[error("room must be Vacant to be Available")]
    Clean,

    #[error("room must be Vacant to be Repair")]
    Repair,

    #[error("room must be Repair to be Vacant")]
    Repaired,
}

pub type Result<T> = std::result::Result<T, Error>;
