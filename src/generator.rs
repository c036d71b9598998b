//! Synthetic listing generation
//!
//! Fabricates hotel records for a municipality at scan time. Every value is
//! drawn from the provided RNG so a seeded generator reproduces the same
//! batch.

use crate::catalog::{Municipality, FALLBACK_ISSUE, HOTEL_NAMES, SEO_ISSUES};
use rand::seq::SliceRandom;
use rand::Rng;

/// A fabricated hotel business, immutable once generated
#[derive(Debug, Clone, PartialEq)]
pub struct HotelListing {
    pub id: String,
    pub name: String,
    pub org_number: String,
    pub website: String,
    pub municipality: String,
    pub region: String,
    pub revenue: i64,
    pub equity: u8,
    pub employees: u32,
    pub seo_score: u32,
    pub financial_score: u32,
    pub opportunity_score: u32,
    pub seo_issues: Vec<String>,
    pub contact: String,
    pub phone: String,
}

/// Financial health: equity ratio and revenue each contribute up to 50
/// points, capped at 100.
pub fn financial_score(revenue: i64, equity: u8) -> u32 {
    let score = (equity as f64 / 70.0) * 50.0 + (revenue as f64 / 50_000_000.0) * 50.0;
    (score.floor() as u32).min(100)
}

/// Opportunity: strong finances and weak SEO make a good prospect,
/// headcount weighs in as a proxy for company size.
pub fn opportunity_score(financial: u32, seo: u32, employees: u32) -> u32 {
    let score =
        financial as f64 * 0.4 + (100 - seo.min(100)) as f64 * 0.4 + employees as f64 * 0.2;
    score.floor() as u32
}

/// Lowercased name with whitespace removed, used for the fabricated domain
fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect()
}

fn draw_issues(rng: &mut impl Rng) -> Vec<String> {
    let mut issues: Vec<String> = SEO_ISSUES
        .iter()
        .filter(|&&(_, p)| rng.random_bool(p))
        .map(|&(name, _)| name.to_string())
        .collect();
    if issues.is_empty() {
        issues.push(FALLBACK_ISSUE.to_string());
    }
    issues
}

/// Fabricate `count` listings for the municipality. Names are drawn without
/// replacement from the catalog pool, so `count` is clamped to the pool
/// size.
pub fn generate_listings(
    rng: &mut impl Rng,
    municipality: &Municipality,
    count: usize,
) -> Vec<HotelListing> {
    let mut names: Vec<&str> = HOTEL_NAMES.to_vec();
    names.shuffle(rng);

    names
        .into_iter()
        .take(count.min(HOTEL_NAMES.len()))
        .enumerate()
        .map(|(idx, name)| {
            let revenue = rng.random_range(5_000_000..50_000_000);
            let equity = rng.random_range(10..70) as u8;
            let employees = rng.random_range(5..85);
            let seo_score = rng.random_range(0..100);
            let financial = financial_score(revenue, equity);
            let slug = slug(name);

            HotelListing {
                id: format!("hotel-{}-{}", municipality.code, idx),
                name: name.to_string(),
                org_number: format!("9{:08}", rng.random_range(0..100_000_000)),
                website: format!("https://www.{}.no", slug),
                municipality: municipality.name.to_string(),
                region: municipality.region.to_string(),
                revenue,
                equity,
                employees,
                seo_score,
                financial_score: financial,
                opportunity_score: opportunity_score(financial, seo_score, employees),
                seo_issues: draw_issues(rng),
                contact: format!("post@{}.no", slug),
                phone: format!("+47 {}", rng.random_range(10_000_000..100_000_000)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MUNICIPALITIES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn oslo() -> &'static Municipality {
        &MUNICIPALITIES[0]
    }

    #[test]
    fn generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_listings(&mut rng, oslo(), 8).len(), 8);
    }

    #[test]
    fn count_is_clamped_to_name_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let listings = generate_listings(&mut rng, oslo(), 100);
        assert_eq!(listings.len(), HOTEL_NAMES.len());
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_listings(&mut a, oslo(), 8),
            generate_listings(&mut b, oslo(), 8)
        );
    }

    #[test]
    fn fields_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(3);
        for (idx, listing) in generate_listings(&mut rng, oslo(), 8).iter().enumerate() {
            assert_eq!(listing.id, format!("hotel-0301-{}", idx));
            assert_eq!(listing.org_number.len(), 9);
            assert!(listing.org_number.starts_with('9'));
            assert!(listing.org_number.chars().all(|c| c.is_ascii_digit()));
            assert!(listing.website.starts_with("https://www."));
            assert!(listing.website.ends_with(".no"));
            assert!(!listing.website.contains(' '));
            assert!(listing.contact.starts_with("post@"));
            assert!(listing.phone.starts_with("+47 "));
            assert!(!listing.seo_issues.is_empty());
            assert!((5_000_000..50_000_000).contains(&listing.revenue));
            assert!((10..70).contains(&listing.equity));
            assert!((5..85).contains(&listing.employees));
            assert!(listing.seo_score < 100);
        }
    }

    #[test]
    fn scores_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(4);
        for listing in generate_listings(&mut rng, oslo(), 8) {
            assert!(listing.financial_score <= 100);
            assert!(listing.opportunity_score <= 100);
            assert_eq!(
                listing.opportunity_score,
                opportunity_score(listing.financial_score, listing.seo_score, listing.employees)
            );
        }
    }

    #[test]
    fn financial_score_is_capped() {
        assert_eq!(financial_score(50_000_000, 70), 100);
        assert_eq!(financial_score(100_000_000, 70), 100);
        assert_eq!(financial_score(0, 0), 0);
        // midpoints contribute half of each weight
        assert_eq!(financial_score(25_000_000, 35), 50);
    }

    #[test]
    fn opportunity_rewards_weak_seo() {
        let strong_seo = opportunity_score(80, 90, 40);
        let weak_seo = opportunity_score(80, 10, 40);
        assert!(weak_seo > strong_seo);
    }

    #[test]
    fn slug_strips_whitespace_and_case() {
        assert_eq!(slug("Fjord Vista Hotel"), "fjordvistahotel");
        assert_eq!(slug("Nordic Grand"), "nordicgrand");
    }
}
