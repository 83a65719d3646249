//! Asset row type

use serde::Deserialize;
use serde::Serialize;

use super::CellValue;
use super::Column;

/// One displayable row of the fleet table.
///
/// A fixed, typed, nullable-aware record. The table never mutates an asset;
/// it only reorders and filters them. `mileage` is the one genuinely nullable
/// field; the remaining display fields default when a source row omits them,
/// so a malformed row degrades to placeholder display rather than failing.
///
/// # Example
///
/// ```
/// use fleet_table::model::{Asset, Column};
///
/// let asset = Asset {
///     id: 7,
///     name: "Excavator".into(),
///     code: "EX-07".into(),
///     mileage: None,
///     ..Asset::default()
/// };
///
/// assert_eq!(asset.display(Column::Mileage), "NA");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Identifying field, required on ingestion.
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub needing_repair: bool,
    #[serde(default)]
    pub durability: i64,
    #[serde(default)]
    pub max_durability: i64,
    #[serde(default)]
    pub mileage: Option<f64>,
}

impl Asset {
    /// Projects one declared column to its cell value.
    pub fn cell(&self, column: Column) -> CellValue {
        match column {
            Column::Id => CellValue::Int(self.id),
            Column::Name => CellValue::from(self.name.as_str()),
            Column::Code => CellValue::from(self.code.as_str()),
            Column::Availability => CellValue::Bool(self.availability),
            Column::NeedingRepair => CellValue::Bool(self.needing_repair),
            Column::Durability => CellValue::Int(self.durability),
            Column::MaxDurability => CellValue::Int(self.max_durability),
            Column::Mileage => CellValue::from(self.mileage),
        }
    }

    /// Display text for one column, with the `"NA"` placeholder for null.
    pub fn display(&self, column: Column) -> String {
        self.cell(column).display()
    }

    /// The full textual serialization of the row: the canonical string form
    /// of every declared field, space-separated, in column order.
    ///
    /// This is the haystack for the whole-record substring search. Making it
    /// an explicit concatenation keeps the matched text independent of any
    /// particular serialization format.
    pub fn search_text(&self) -> String {
        let mut text = String::new();
        for column in Column::ALL {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&self.cell(column).search_text());
        }
        text
    }
}
