//! Filtering and sorting logic

use super::App;
use crate::generator::HotelListing;
use crate::types::*;

/// Apply the threshold filter and sort order, returning indices into
/// `listings`. Listings themselves are never mutated.
pub fn visible_listing_indices(
    listings: &[HotelListing],
    min_revenue: i64,
    min_equity: u8,
    key: SortKey,
    dir: SortDirection,
) -> Vec<usize> {
    let mut indices: Vec<usize> = listings
        .iter()
        .enumerate()
        .filter(|(_, l)| l.revenue >= min_revenue && l.equity >= min_equity)
        .map(|(i, _)| i)
        .collect();

    indices.sort_by(|&a, &b| {
        let la = &listings[a];
        let lb = &listings[b];
        let cmp = match key {
            SortKey::Opportunity => la.opportunity_score.cmp(&lb.opportunity_score),
            SortKey::Financial => la.financial_score.cmp(&lb.financial_score),
            SortKey::Seo => la.seo_score.cmp(&lb.seo_score),
            SortKey::Revenue => la.revenue.cmp(&lb.revenue),
            SortKey::Name => la.name.to_lowercase().cmp(&lb.name.to_lowercase()),
            SortKey::Equity => la.equity.cmp(&lb.equity),
            SortKey::Employees => la.employees.cmp(&lb.employees),
        };
        if dir == SortDirection::Descending {
            cmp.reverse()
        } else {
            cmp
        }
    });

    indices
}

/// Summarize a completed scan over the qualifying subset.
pub fn compute_stats(listings: &[HotelListing], visible: &[usize]) -> ScanStats {
    let qualifying = visible.len();

    let avg_opportunity = if qualifying > 0 {
        let sum: f64 = visible
            .iter()
            .map(|&i| listings[i].opportunity_score as f64)
            .sum();
        (sum / qualifying as f64).round() as u32
    } else {
        0
    };

    // Mode of issue findings, first-seen wins on ties
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for &i in visible {
        for issue in &listings[i].seo_issues {
            match counts.iter_mut().find(|(name, _)| *name == issue.as_str()) {
                Some(entry) => entry.1 += 1,
                None => counts.push((issue, 1)),
            }
        }
    }
    let top_issue = counts
        .iter()
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "—".to_string());

    ScanStats {
        total_scanned: listings.len(),
        qualifying,
        avg_opportunity,
        top_issue,
    }
}

impl App {
    /// Rebuild the visible index list from thresholds and sort order.
    pub fn apply_filters(&mut self) {
        self.visible_indices = visible_listing_indices(
            &self.listings,
            self.min_revenue,
            self.min_equity,
            self.sort_key,
            self.sort_direction,
        );

        if self.has_scanned {
            self.stats = Some(compute_stats(&self.listings, &self.visible_indices));
        }
    }

    /// Switch the primary sort key, resetting to its natural direction.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.sort_direction = key.default_direction();
        self.apply_filters();
    }

    /// Table header click: toggle direction on the active column, otherwise
    /// switch to the clicked column.
    pub fn toggle_sort_column(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = match self.sort_direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort_key = key;
            self.sort_direction = key.default_direction();
        }
        self.apply_filters();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, revenue: i64, equity: u8, seo: u32, opportunity: u32) -> HotelListing {
        HotelListing {
            id: format!("hotel-0301-{}", name.len()),
            name: name.to_string(),
            org_number: "912345678".to_string(),
            website: "https://www.example.no".to_string(),
            municipality: "Oslo".to_string(),
            region: "Østlandet".to_string(),
            revenue,
            equity,
            employees: 20,
            seo_score: seo,
            financial_score: 50,
            opportunity_score: opportunity,
            seo_issues: vec!["Missing meta description".to_string()],
            contact: "post@example.no".to_string(),
            phone: "+47 12345678".to_string(),
        }
    }

    fn fixture() -> Vec<HotelListing> {
        vec![
            listing("Alpha", 10_000_000, 50, 80, 40),
            listing("Bravo", 4_000_000, 60, 20, 70),
            listing("Charlie", 20_000_000, 15, 50, 55),
        ]
    }

    fn names(listings: &[HotelListing], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| listings[i].name.clone()).collect()
    }

    #[test]
    fn thresholds_exclude_weak_listings() {
        let listings = fixture();
        // Bravo fails revenue, Charlie fails equity
        let indices = visible_listing_indices(
            &listings,
            5_000_000,
            30,
            SortKey::Opportunity,
            SortDirection::Descending,
        );
        assert_eq!(names(&listings, &indices), vec!["Alpha"]);
    }

    #[test]
    fn opportunity_sorts_descending() {
        let listings = fixture();
        let indices = visible_listing_indices(
            &listings,
            0,
            0,
            SortKey::Opportunity,
            SortDirection::Descending,
        );
        assert_eq!(names(&listings, &indices), vec!["Bravo", "Charlie", "Alpha"]);
    }

    #[test]
    fn seo_sorts_weakest_first() {
        let listings = fixture();
        let indices = visible_listing_indices(
            &listings,
            0,
            0,
            SortKey::Seo,
            SortKey::Seo.default_direction(),
        );
        assert_eq!(names(&listings, &indices), vec!["Bravo", "Charlie", "Alpha"]);
    }

    #[test]
    fn name_sorts_case_insensitively() {
        let mut listings = fixture();
        listings[0].name = "alpha".to_string();
        let indices = visible_listing_indices(
            &listings,
            0,
            0,
            SortKey::Name,
            SortKey::Name.default_direction(),
        );
        assert_eq!(names(&listings, &indices), vec!["alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn stats_average_rounds() {
        let listings = fixture();
        let stats = compute_stats(&listings, &[0, 1, 2]);
        assert_eq!(stats.total_scanned, 3);
        assert_eq!(stats.qualifying, 3);
        // (40 + 70 + 55) / 3 = 55
        assert_eq!(stats.avg_opportunity, 55);
        assert_eq!(stats.top_issue, "Missing meta description");
    }

    #[test]
    fn stats_with_no_qualifying_listings() {
        let listings = fixture();
        let stats = compute_stats(&listings, &[]);
        assert_eq!(stats.qualifying, 0);
        assert_eq!(stats.avg_opportunity, 0);
        assert_eq!(stats.top_issue, "—");
    }

    #[test]
    fn top_issue_is_the_mode() {
        let mut listings = fixture();
        listings[0].seo_issues = vec!["No H1 tag found".into(), "Slow page load (>3s)".into()];
        listings[1].seo_issues = vec!["Slow page load (>3s)".into()];
        listings[2].seo_issues = vec!["Missing meta description".into()];
        let stats = compute_stats(&listings, &[0, 1, 2]);
        assert_eq!(stats.top_issue, "Slow page load (>3s)");
    }
}
