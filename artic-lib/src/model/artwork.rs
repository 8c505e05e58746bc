//! Artwork row shape and the projection from raw API records.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Value;

/// Unique identifier of an artwork record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl From<u64> for ArtworkId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One displayed table row.
///
/// Every field is optional: the upstream source is not validated, and a
/// field that is absent or carries an unexpected JSON type maps to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtworkRow {
    pub id: Option<ArtworkId>,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
}

impl ArtworkRow {
    /// Projects a raw API record onto the row shape.
    ///
    /// Total: any JSON value yields a row. Non-object input yields an
    /// all-`None` row, and fields other than the seven are ignored.
    pub fn from_value(value: &Value) -> Self {
        let string = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        let integer = |key: &str| value.get(key).and_then(Value::as_i64);

        Self {
            id: value.get("id").and_then(Value::as_u64).map(ArtworkId),
            title: string("title"),
            place_of_origin: string("place_of_origin"),
            artist_display: string("artist_display"),
            inscriptions: string("inscriptions"),
            date_start: integer("date_start"),
            date_end: integer("date_end"),
        }
    }

    /// Returns the display text for a column. Missing values render empty.
    pub fn cell(&self, column: Column) -> String {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let number = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();

        match column {
            Column::Title => text(&self.title),
            Column::PlaceOfOrigin => text(&self.place_of_origin),
            Column::ArtistDisplay => text(&self.artist_display),
            Column::Inscriptions => text(&self.inscriptions),
            Column::DateStart => number(self.date_start),
            Column::DateEnd => number(self.date_end),
        }
    }
}

impl<'de> Deserialize<'de> for ArtworkRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Data columns of the artworks table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl Column {
    /// All data columns in display order.
    pub const ALL: [Column; 6] = [
        Column::Title,
        Column::PlaceOfOrigin,
        Column::ArtistDisplay,
        Column::Inscriptions,
        Column::DateStart,
        Column::DateEnd,
    ];

    /// Column header text.
    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::PlaceOfOrigin => "Place of Origin",
            Column::ArtistDisplay => "Artist Display",
            Column::Inscriptions => "Inscriptions",
            Column::DateStart => "Start Date",
            Column::DateEnd => "End Date",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_maps_all_fields() {
        let row = ArtworkRow::from_value(&json!({
            "id": 27992,
            "title": "A Sunday on La Grande Jatte",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886,
            "image_id": "ignored"
        }));

        assert_eq!(row.id, Some(ArtworkId(27992)));
        assert_eq!(row.title.as_deref(), Some("A Sunday on La Grande Jatte"));
        assert_eq!(row.place_of_origin.as_deref(), Some("France"));
        assert_eq!(row.inscriptions, None);
        assert_eq!(row.date_start, Some(1884));
        assert_eq!(row.date_end, Some(1886));
    }

    #[test]
    fn test_missing_and_wrong_typed_fields_are_none() {
        let row = ArtworkRow::from_value(&json!({
            "id": "not-a-number",
            "title": 42,
            "date_start": "1900"
        }));
        assert_eq!(row, ArtworkRow::default());
    }

    #[test]
    fn test_non_object_input() {
        assert_eq!(ArtworkRow::from_value(&json!(null)), ArtworkRow::default());
        assert_eq!(ArtworkRow::from_value(&json!([1, 2])), ArtworkRow::default());
    }

    #[test]
    fn test_deserialize_is_lenient() {
        let row: ArtworkRow = serde_json::from_str(r#"{"id": 7, "date_end": true}"#).unwrap();
        assert_eq!(row.id, Some(ArtworkId(7)));
        assert_eq!(row.date_end, None);
    }

    #[test]
    fn test_cells() {
        let row = ArtworkRow {
            title: Some("Nighthawks".into()),
            date_start: Some(1942),
            ..Default::default()
        };
        assert_eq!(row.cell(Column::Title), "Nighthawks");
        assert_eq!(row.cell(Column::DateStart), "1942");
        assert_eq!(row.cell(Column::DateEnd), "");
        assert_eq!(Column::ALL.map(Column::header)[1], "Place of Origin");
    }
}
