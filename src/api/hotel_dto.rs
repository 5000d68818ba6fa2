use serde::{Deserialize, Serialize};

/// External input shape for hotel construction.
///
/// `rooms`, when present, is a floor-by-floor matrix of the four verbatim
/// status strings (`"Available"`, `"Occupied"`, `"Vacant"`, `"Repair"`).
/// Validation happens during the DTO-to-domain conversion.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HotelDto {
    pub floors: usize,
    #[serde(default)]
    pub rooms: Option<Vec<Vec<String>>>,
}
