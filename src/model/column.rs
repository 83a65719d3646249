//! Column enum naming the declared row fields

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ColumnError;

/// A declared column of the table.
///
/// The row shape is fixed, so the comparator key is an enum rather than a
/// free string: a sort request can only ever name a field that exists on the
/// row. Host-facing boundaries that carry column names as strings go through
/// [`FromStr`], which rejects unknown names with a typed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Id,
    Name,
    Code,
    Availability,
    NeedingRepair,
    Durability,
    MaxDurability,
    Mileage,
}

impl Column {
    /// All declared columns, in display order.
    pub const ALL: [Column; 8] = [
        Column::Id,
        Column::Name,
        Column::Code,
        Column::Availability,
        Column::NeedingRepair,
        Column::Durability,
        Column::MaxDurability,
        Column::Mileage,
    ];

    /// The canonical field name.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Code => "code",
            Column::Availability => "availability",
            Column::NeedingRepair => "needing_repair",
            Column::Durability => "durability",
            Column::MaxDurability => "max_durability",
            Column::Mileage => "mileage",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = ColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ColumnError::unknown(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for column in Column::ALL {
            assert_eq!(column.name().parse::<Column>().unwrap(), column);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("serial_number".parse::<Column>().is_err());
        assert!("".parse::<Column>().is_err());
    }
}
