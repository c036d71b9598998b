//! CSV export of the currently displayed listings

use crate::generator::HotelListing;
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const CSV_HEADERS: [&str; 13] = [
    "Name",
    "Municipality",
    "Region",
    "Revenue (NOK)",
    "Equity %",
    "Employees",
    "SEO Score",
    "Financial Score",
    "Opportunity Score",
    "Website",
    "Email",
    "Phone",
    "SEO Issues",
];

/// Default export file name, stamped with the municipality code and date
pub fn export_file_name(municipality_code: &str, date: NaiveDate) -> String {
    format!(
        "hotel_seo_scan_{}_{}.csv",
        municipality_code,
        date.format("%Y-%m-%d")
    )
}

/// Write listings as CSV. Every field is quoted; issues join with "; ".
pub fn write_csv<W: Write>(writer: W, listings: &[&HotelListing]) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for listing in listings {
        let record = [
            listing.name.clone(),
            listing.municipality.clone(),
            listing.region.clone(),
            listing.revenue.to_string(),
            listing.equity.to_string(),
            listing.employees.to_string(),
            listing.seo_score.to_string(),
            listing.financial_score.to_string(),
            listing.opportunity_score.to_string(),
            listing.website.clone(),
            listing.contact.clone(),
            listing.phone.clone(),
            listing.seo_issues.join("; "),
        ];
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write listings to a file, returning the number of rows exported
pub fn export_to_path(path: &Path, listings: &[&HotelListing]) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, listings)?;
    info!(path = %path.display(), rows = listings.len(), "Exported scan results");
    Ok(listings.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MUNICIPALITIES;
    use crate::generator::generate_listings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_listings() -> Vec<HotelListing> {
        let mut rng = StdRng::seed_from_u64(11);
        generate_listings(&mut rng, &MUNICIPALITIES[0], 3)
    }

    fn csv_lines(listings: &[HotelListing]) -> Vec<String> {
        let refs: Vec<&HotelListing> = listings.iter().collect();
        let mut buf = Vec::new();
        write_csv(&mut buf, &refs).expect("write csv");
        String::from_utf8(buf)
            .expect("utf8")
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn header_row_matches_fixed_column_set() {
        let lines = csv_lines(&sample_listings());
        assert_eq!(
            lines[0],
            "\"Name\",\"Municipality\",\"Region\",\"Revenue (NOK)\",\"Equity %\",\
             \"Employees\",\"SEO Score\",\"Financial Score\",\"Opportunity Score\",\
             \"Website\",\"Email\",\"Phone\",\"SEO Issues\""
        );
    }

    #[test]
    fn one_row_per_listing_all_quoted() {
        let listings = sample_listings();
        let lines = csv_lines(&listings);
        assert_eq!(lines.len(), listings.len() + 1);
        for line in &lines[1..] {
            assert!(line.starts_with('"') && line.ends_with('"'));
            assert_eq!(line.matches("\",\"").count(), CSV_HEADERS.len() - 1);
        }
    }

    #[test]
    fn issues_join_with_semicolon() {
        let mut listing = sample_listings().remove(0);
        listing.seo_issues = vec!["No H1 tag found".into(), "Poor Core Web Vitals".into()];
        let lines = csv_lines(std::slice::from_ref(&listing));
        assert!(lines[1].ends_with("\"No H1 tag found; Poor Core Web Vitals\""));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let listings = sample_listings();
        let refs: Vec<&HotelListing> = listings.iter().collect();
        let path = dir.path().join("out.csv");
        let rows = export_to_path(&path, &refs).expect("export");
        assert_eq!(rows, listings.len());
        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content.lines().count(), listings.len() + 1);
    }

    #[test]
    fn file_name_is_stamped_with_code_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).expect("date");
        assert_eq!(
            export_file_name("0301", date),
            "hotel_seo_scan_0301_2026-08-06.csv"
        );
    }
}
