use crate::ads::prelude::AdRecord;

/// Render one report section. Snapshots are ordered by title, so grouping
/// over consecutive equal titles is enough.
fn section_to_text(heading: &str, ads: &[AdRecord]) -> String {
    let mut body = format!("{heading} ({}):\n", ads.len());
    let mut last_title: Option<&str> = None;
    for ad in ads {
        if last_title != Some(ad.title.as_str()) {
            body.push_str(&format!("{}\n", ad.title));
            last_title = Some(ad.title.as_str());
        }
        body.push_str(&format!("\t{}  {}\n", ad.price, ad.text));
        body.push_str(&format!("\t\t{}  {}\n", ad.date, ad.contact_number));
    }

    body
}

/// Render the full delta report.
#[must_use]
pub fn report_to_text(added: &[AdRecord], removed: &[AdRecord]) -> String {
    if added.is_empty() && removed.is_empty() {
        return String::from("No changes since the previous snapshot\n");
    }

    let mut report = String::new();
    if !added.is_empty() {
        report.push_str(&section_to_text("New ads", added));
    }
    if !removed.is_empty() {
        if !report.is_empty() {
            report.push('\n');
        }
        report.push_str(&section_to_text("Removed ads", removed));
    }

    report
}

pub fn print_report(added: &[AdRecord], removed: &[AdRecord]) {
    println!("Report for {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));
    print!("{}", report_to_text(added, removed));
}

pub fn print_baseline(ads_total: usize) {
    println!("No previous snapshot, storing {ads_total} ads as the baseline");
}
