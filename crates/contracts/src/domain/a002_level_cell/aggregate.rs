use serde::{Deserialize, Serialize};

/// Row identifier of a salary grid cell in `rf_niveis`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCellId(pub i64);

/// One grade × reference salary entry of the grid.
///
/// Within one `code`, the (grade, reference) pair is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCell {
    pub id: LevelCellId,

    /// Base code as stored, usually without prefix ("58", "20-B")
    #[serde(rename = "codigo")]
    pub code: String,

    /// Complete code when the source stores one
    #[serde(rename = "codigo_completo", default)]
    pub complete_code: Option<String>,

    /// Roman numeral I–X or a small integer
    #[serde(rename = "grau")]
    pub grade: String,

    /// A letter, optionally followed by a number ("A", "A1")
    #[serde(rename = "referencia")]
    pub reference: String,

    #[serde(rename = "salario")]
    pub salary: f64,
}
