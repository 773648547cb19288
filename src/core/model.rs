// Municode - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;

// =============================================================================
// Record (normalised output of parsing)
// =============================================================================

/// One municipality, as parsed from one data line of the dataset.
///
/// Every field is always populated: cells that are missing or cannot be
/// coerced hold the type's zero value (`""`, `false`, `0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    /// Municipality name. Assumed unique within a load, not enforced.
    pub name: String,

    /// Within a 30-40 minute commute of a major city.
    pub is_suburb: bool,

    /// Located in the Arctic zone of the Russian Federation.
    pub is_arctic: bool,

    /// Retail revenue per capita, roubles.
    pub revenue_per_capita: f64,

    /// Profit per capita, roubles.
    pub profit_per_capita: f64,

    /// Investment per capita, roubles.
    pub investment_per_capita: f64,

    /// Number of federal retail chains present.
    pub federal_retail_count: u32,

    /// Kindergarten accessibility score.
    pub kindergarten_access: f64,

    /// Primary medical care accessibility score.
    pub primary_care_access: f64,

    /// Sports facility accessibility score.
    pub sports_facility_access: f64,
}

// =============================================================================
// Column
// =============================================================================

/// How a column's raw text is turned into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Text,
    Flag,
    Integer,
    Float,
}

/// The fixed set of columns a dataset may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    IsSuburb,
    IsArctic,
    Revenue,
    Profit,
    Investment,
    FederalRetail,
    KindergartenAccess,
    PrimaryCareAccess,
    SportsFacilities,
}

impl Column {
    /// All columns in dataset order.
    pub fn all() -> &'static [Column] {
        &[
            Column::Name,
            Column::IsSuburb,
            Column::IsArctic,
            Column::Revenue,
            Column::Profit,
            Column::Investment,
            Column::FederalRetail,
            Column::KindergartenAccess,
            Column::PrimaryCareAccess,
            Column::SportsFacilities,
        ]
    }

    /// Header text as it appears in the published dataset.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "Муниципалитет",
            Column::IsSuburb => "Пригород (30-40 мин)",
            Column::IsArctic => "Арктическая зона",
            Column::Revenue => "Выручка на чел.",
            Column::Profit => "Прибыль на чел.",
            Column::Investment => "Инвестиции на чел.",
            Column::FederalRetail => "Фед. ритейл",
            Column::KindergartenAccess => "Доступность д/с",
            Column::PrimaryCareAccess => "Доступность ПМП",
            Column::SportsFacilities => "Спорт. объекты",
        }
    }

    /// Latin-script alias accepted in place of the dataset header.
    pub fn alias(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::IsSuburb => "IsSuburb",
            Column::IsArctic => "IsArctic",
            Column::Revenue => "Revenue",
            Column::Profit => "Profit",
            Column::Investment => "Investment",
            Column::FederalRetail => "FederalRetail",
            Column::KindergartenAccess => "KindergartenAccess",
            Column::PrimaryCareAccess => "PrimaryCareAccess",
            Column::SportsFacilities => "SportsFacilities",
        }
    }

    /// Resolve a header cell to a column. Matching is exact and case-sensitive.
    pub fn from_header(header: &str) -> Option<Column> {
        Column::all()
            .iter()
            .copied()
            .find(|c| c.header() == header || c.alias() == header)
    }

    pub fn coercion(&self) -> Coercion {
        match self {
            Column::Name => Coercion::Text,
            Column::IsSuburb | Column::IsArctic => Coercion::Flag,
            Column::FederalRetail => Coercion::Integer,
            Column::Revenue
            | Column::Profit
            | Column::Investment
            | Column::KindergartenAccess
            | Column::PrimaryCareAccess
            | Column::SportsFacilities => Coercion::Float,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_alias_resolve() {
        for column in Column::all() {
            assert_eq!(Column::from_header(column.header()), Some(*column));
            assert_eq!(Column::from_header(column.alias()), Some(*column));
        }
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        assert_eq!(Column::from_header("name"), None);
        assert_eq!(Column::from_header("ISSUBURB"), None);
        assert_eq!(Column::from_header("Population"), None);
    }

    #[test]
    fn test_coercion_dispatch() {
        assert_eq!(Column::Name.coercion(), Coercion::Text);
        assert_eq!(Column::IsSuburb.coercion(), Coercion::Flag);
        assert_eq!(Column::IsArctic.coercion(), Coercion::Flag);
        assert_eq!(Column::FederalRetail.coercion(), Coercion::Integer);
        assert_eq!(Column::Investment.coercion(), Coercion::Float);
        assert_eq!(Column::SportsFacilities.coercion(), Coercion::Float);
    }
}
