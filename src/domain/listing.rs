use crate::domain::columns::{ColumnMap, Field};
use crate::domain::parse::{parse_count, parse_price};
use serde::Serialize;

/// One rental derived from a sheet row.
///
/// Text fields are kept as they appear in the sheet for display; `price`,
/// `beds` and `baths` are the numeric readings used by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub link: String,
    pub image: String,
    pub price_text: String,
    pub title: String,
    pub address: String,
    pub beds_text: String,
    pub baths_text: String,
    pub cars_text: String,
    pub size: String,
    pub description: String,

    pub price: u64,
    pub beds: u32,
    pub baths: u32,
}

impl Listing {
    pub fn from_row(row: &[String], columns: &ColumnMap) -> Self {
        let text = |field| columns.cell(row, field).to_string();

        let price_text = text(Field::Price);
        let beds_text = text(Field::Beds);
        let baths_text = text(Field::Baths);

        Self {
            link: text(Field::Link),
            image: text(Field::Image),
            title: text(Field::Title),
            address: text(Field::Address),
            cars_text: text(Field::Cars),
            size: text(Field::Size),
            description: text(Field::Description),

            price: parse_price(&price_text),
            beds: parse_count(&beds_text),
            baths: parse_count(&baths_text),

            price_text,
            beds_text,
            baths_text,
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// Decode a fetched value grid. The first row is the header: it is used to
/// resolve columns and never appears in the output. Fully blank rows are
/// skipped.
pub fn decode_listings(values: &[Vec<String>]) -> Vec<Listing> {
    let Some((header, rows)) = values.split_first() else {
        return Vec::new();
    };

    let columns = ColumnMap::from_header(header);

    rows.iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|row| Listing::from_row(row, &columns))
        .collect()
}
