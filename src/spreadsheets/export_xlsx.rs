use crate::domain::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, XlsxError};

const HEADERS: [&str; 10] = [
    "Title",
    "Address",
    "Price",
    "Price (as listed)",
    "Beds",
    "Baths",
    "Cars",
    "Size",
    "Link",
    "Description",
];

pub fn export_listings_xlsx(listings: &[&Listing]) -> ResultResp {
    let buffer = listings_workbook(listings)?;
    xlsx_response(buffer, "listings.xlsx")
}

/// One worksheet: a header row, then one row per listing in the order given.
pub fn listings_workbook(listings: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .set_name("Listings")
        .map_err(xlsx_err("sheet name"))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_err(header))?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &listing.title)
            .map_err(xlsx_err("title"))?;
        worksheet
            .write_string(r, 1, &listing.address)
            .map_err(xlsx_err("address"))?;
        worksheet
            .write_number(r, 2, listing.price as f64)
            .map_err(xlsx_err("price"))?;
        worksheet
            .write_string(r, 3, &listing.price_text)
            .map_err(xlsx_err("listed price"))?;
        worksheet
            .write_number(r, 4, f64::from(listing.beds))
            .map_err(xlsx_err("beds"))?;
        worksheet
            .write_number(r, 5, f64::from(listing.baths))
            .map_err(xlsx_err("baths"))?;
        worksheet
            .write_string(r, 6, &listing.cars_text)
            .map_err(xlsx_err("cars"))?;
        worksheet
            .write_string(r, 7, &listing.size)
            .map_err(xlsx_err("size"))?;
        worksheet
            .write_string(r, 8, &listing.link)
            .map_err(xlsx_err("link"))?;
        worksheet
            .write_string(r, 9, &listing.description)
            .map_err(xlsx_err("description"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}
