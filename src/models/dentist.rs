use serde::{Deserialize, Serialize};

/// A dentist on the clinic's roster. Referenced by appointments, never
/// owned by them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dentist {
    pub id: i64,
    pub name: String,
    /// Professional registration number, unique per dentist.
    pub cro: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub active: bool,
}
