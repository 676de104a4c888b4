// src/domain/columns.rs

/// A named listing field backed by one sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Link,
    Image,
    Price,
    Title,
    Address,
    Beds,
    Baths,
    Cars,
    Size,
    Description,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Link,
        Field::Image,
        Field::Price,
        Field::Title,
        Field::Address,
        Field::Beds,
        Field::Baths,
        Field::Cars,
        Field::Size,
        Field::Description,
    ];

    /// Column used when the header row does not name this field.
    pub fn default_index(self) -> usize {
        match self {
            Field::Link => 0,
            Field::Image => 1,
            Field::Price => 2,
            Field::Title => 4,
            Field::Address => 5,
            Field::Beds => 6,
            Field::Baths => 7,
            Field::Cars => 8,
            Field::Size => 10,
            Field::Description => 12,
        }
    }

    // Header spellings, already normalized (lowercase alphanumerics only).
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Link => &["link", "url", "listingurl", "listinglink", "propertylink", "href"],
            Field::Image => &["image", "imageurl", "img", "photo", "picture", "thumbnail"],
            Field::Price => &["price", "rent", "weeklyrent", "cost"],
            Field::Title => &["title", "name", "headline", "heading"],
            Field::Address => &["address", "location", "streetaddress"],
            Field::Beds => &["beds", "bed", "bedrooms", "bedroom"],
            Field::Baths => &["baths", "bath", "bathrooms", "bathroom"],
            Field::Cars => &["cars", "car", "carspaces", "parking", "garage"],
            Field::Size => &["size", "area", "landsize", "floorarea", "sqft"],
            Field::Description => &["description", "details", "desc", "summary"],
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Resolved column index for every [`Field`].
///
/// Built from the sheet's header row: a field whose header is recognised
/// maps to that column, the rest fall back to their default index unless
/// that column was already claimed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; 10],
}

impl ColumnMap {
    pub fn positional() -> Self {
        let mut indices = [None; 10];
        for field in Field::ALL {
            indices[field.slot()] = Some(field.default_index());
        }
        Self { indices }
    }

    pub fn from_header(header: &[String]) -> Self {
        let normalized: Vec<String> = header.iter().map(|h| normalize_header(h)).collect();
        let mut indices = [None; 10];
        let mut claimed = vec![false; normalized.len().max(13)];

        for field in Field::ALL {
            let found = normalized
                .iter()
                .enumerate()
                .find(|(idx, name)| !claimed[*idx] && field.aliases().contains(&name.as_str()))
                .map(|(idx, _)| idx);

            if let Some(idx) = found {
                indices[field.slot()] = Some(idx);
                claimed[idx] = true;
            }
        }

        for field in Field::ALL {
            if indices[field.slot()].is_some() {
                continue;
            }
            let idx = field.default_index();
            if !claimed[idx] {
                indices[field.slot()] = Some(idx);
                claimed[idx] = true;
            }
        }

        Self { indices }
    }

    pub fn index_of(&self, field: Field) -> Option<usize> {
        self.indices[field.slot()]
    }

    /// Trimmed cell text for `field`, or "" when the column is unmapped or
    /// the row is too short.
    pub fn cell<'a>(&self, row: &'a [String], field: Field) -> &'a str {
        self.index_of(field)
            .and_then(|idx| row.get(idx))
            .map(|cell| cell.trim())
            .unwrap_or("")
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::positional()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
