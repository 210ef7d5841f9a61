use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use super::data_types::{AdRecord, NO_CONTACT};

/// Instructional sentence that appears exactly once on the page, inside the
/// ad-listing table. Used to locate the table in the nested-table layout.
pub const AD_TABLE_ANCHOR: &str = "Obavezno prvo pročitajte uputstvo za \
                                   bezbednu kupoprodaju preko malih oglasa.";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("ad listing not found: the anchor text is missing from the page")]
    StructureNotFound,
}

/// A single ad table that does not match the expected three-row shape.
/// Recovered by skipping the table, never fatal to the whole extraction.
#[derive(Debug, Error)]
#[error("malformed ad table: {0}")]
struct MalformedAd(String);

/// Result of one extraction pass: the well-formed records in page order,
/// plus the number of ad tables skipped as malformed.
#[derive(Debug)]
pub struct Extraction {
    pub ads: Vec<AdRecord>,
    pub skipped: usize,
}

/// Extract one raw record per ad table found under the listing table.
/// A missing anchor (layout change, error page) aborts the run; a single
/// malformed ad table is logged, counted and skipped.
pub fn extract(document: &Html) -> Result<Extraction, ExtractError> {
    let main_table = find_main_table(document)?;
    let ad_table_selector = Selector::parse("tr > td > table").expect("valid selector");

    let mut ads = Vec::new();
    let mut skipped = 0;
    for ad_table in main_table.select(&ad_table_selector) {
        match parse_ad_table(ad_table) {
            Ok(ad) => ads.push(ad),
            Err(e) => {
                eprintln!("Skipping ad: {e}");
                skipped += 1;
            }
        }
    }

    Ok(Extraction { ads, skipped })
}

/// Find the nearest `table` ancestor of the anchor text node. The walk is
/// iterative so a deeply nested or broken document cannot blow the stack.
fn find_main_table(document: &Html) -> Result<ElementRef<'_>, ExtractError> {
    let anchor = document
        .tree
        .nodes()
        .find(|node| {
            node.value()
                .as_text()
                .is_some_and(|text| text.contains(AD_TABLE_ANCHOR))
        })
        .ok_or(ExtractError::StructureNotFound)?;

    let mut current = anchor.parent();
    while let Some(node) = current {
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() == "table" {
                return Ok(element);
            }
        }
        current = node.parent();
    }

    Err(ExtractError::StructureNotFound)
}

/// All non-empty text fragments of a cell, stripped of surrounding whitespace.
fn stripped_strings<'a>(cell: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    cell.text().map(str::trim).filter(|text| !text.is_empty())
}

/// Parse the fixed three-row ad table: title row, body row (price,
/// discounted price, description), contact row (phone and date, or date only).
fn parse_ad_table(ad_table: ElementRef<'_>) -> Result<AdRecord, MalformedAd> {
    let cell_selector = Selector::parse("tr > td").expect("valid selector");
    let cells: Vec<ElementRef> = ad_table.select(&cell_selector).collect();
    let &[title_td, ad_td, contact_td] = cells.as_slice() else {
        return Err(MalformedAd(format!(
            "expected 3 cells, found {}",
            cells.len()
        )));
    };

    let title = stripped_strings(title_td).collect::<Vec<_>>().join(" ");

    let body: Vec<&str> = stripped_strings(ad_td).collect();
    let &[price, new_price, text] = body.as_slice() else {
        return Err(MalformedAd(format!(
            "expected 3 body fragments, found {}",
            body.len()
        )));
    };

    let (contact_number, date) = match stripped_strings(contact_td)
        .collect::<Vec<_>>()
        .as_slice()
    {
        [contact_number, date] => ((*contact_number).to_string(), (*date).to_string()),
        [date] => (NO_CONTACT.to_string(), (*date).to_string()),
        fragments => {
            return Err(MalformedAd(format!(
                "expected 1 or 2 contact fragments, found {}",
                fragments.len()
            )));
        }
    };

    Ok(AdRecord {
        title,
        price: price.to_string(),
        new_price: new_price.to_string(),
        text: text.to_string(),
        contact_number,
        date,
    })
}
