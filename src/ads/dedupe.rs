use std::cmp::Ordering;

use super::data_types::AdRecord;

/// Natural order over the identity triple (title, price, contact number).
/// Numeric runs compare by value, so "Ad 9" sorts before "Ad 10".
fn identity_cmp(a: &AdRecord, b: &AdRecord) -> Ordering {
    natord::compare(&a.title, &b.title)
        .then_with(|| natord::compare(&a.price, &b.price))
        .then_with(|| natord::compare(&a.contact_number, &b.contact_number))
}

/// Two ads are the same listing when title, price and contact number all
/// match exactly, even if the description or date differ (re-postings).
fn same_identity(a: &AdRecord, b: &AdRecord) -> bool {
    a.title == b.title && a.price == b.price && a.contact_number == b.contact_number
}

/// De-duplicate the ads, keeping one record per identity triple: the one
/// with the lexically greatest date (the newest posting; a date column with
/// mixed formats can defeat the lexical comparison, which is a known
/// limitation of the source data). The result is ordered by natural order
/// of title, then price, then contact number.
#[must_use]
pub fn dedupe(ads: Vec<AdRecord>) -> Vec<AdRecord> {
    let mut ads = ads;
    ads.sort_by(identity_cmp);

    let mut unique_ads: Vec<AdRecord> = Vec::new();
    for ad in ads {
        match unique_ads.last_mut() {
            Some(last) if same_identity(last, &ad) => {
                if ad.date > last.date {
                    *last = ad;
                }
            }
            _ => unique_ads.push(ad),
        }
    }

    unique_ads
}
