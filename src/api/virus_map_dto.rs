use serde::{Deserialize, Serialize};

/// External input shape for an infection grid: `m` rows by `n` columns of
/// raw cell values (0 = empty, 1 = healthy, 2 = infected).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VirusMapDto {
    pub m: usize,
    pub n: usize,
    pub grid: Vec<Vec<u8>>,
}
