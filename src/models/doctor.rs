use serde::Serialize;

/// A doctor patients can book appointments with. The roster is seeded
/// at startup and no endpoint mutates it.
#[derive(Debug, Serialize, Clone)]
pub struct Doctor {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
}
