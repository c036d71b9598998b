//! Fixed catalogs: municipalities, hotel name pool, SEO issue findings

/// A Norwegian municipality the scanner can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Municipality {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

impl Municipality {
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.region)
    }
}

pub static MUNICIPALITIES: [Municipality; 10] = [
    Municipality { code: "0301", name: "Oslo", region: "Østlandet" },
    Municipality { code: "4601", name: "Bergen", region: "Vestland" },
    Municipality { code: "5001", name: "Trondheim", region: "Trøndelag" },
    Municipality { code: "1103", name: "Stavanger", region: "Rogaland" },
    Municipality { code: "1201", name: "Kristiansand", region: "Agder" },
    Municipality { code: "1902", name: "Tromsø", region: "Troms" },
    Municipality { code: "0106", name: "Fredrikstad", region: "Østfold" },
    Municipality { code: "3005", name: "Drammen", region: "Viken" },
    Municipality { code: "1149", name: "Karmøy", region: "Rogaland" },
    Municipality { code: "3024", name: "Bærum", region: "Viken" },
];

pub fn municipality_by_code(code: &str) -> Option<&'static Municipality> {
    MUNICIPALITIES.iter().find(|m| m.code == code)
}

/// Candidate names drawn from per scan
pub const HOTEL_NAMES: [&str; 16] = [
    "Fjord Vista Hotel",
    "Nordic Grand",
    "Midnight Sun Lodge",
    "Aurora Borealis Inn",
    "Viking Heritage Hotel",
    "Coastal Breeze Resort",
    "Mountain Peak Lodge",
    "Hanseatic House",
    "Polar Star Hotel",
    "Stave Church Inn",
    "Northern Lights Hotel",
    "Glacier View Lodge",
    "Salmon River Resort",
    "Troll Valley Inn",
    "Lofoten Suites",
    "Bergen Bay Hotel",
];

/// SEO issue findings with their independent occurrence probability
pub const SEO_ISSUES: [(&str, f64); 8] = [
    ("Missing meta description", 0.5),
    ("No H1 tag found", 0.4),
    ("Images without alt tags", 0.6),
    ("Missing SSL certificate", 0.3),
    ("Slow page load (>3s)", 0.5),
    ("Not mobile-friendly", 0.4),
    ("Missing structured data", 0.2),
    ("Poor Core Web Vitals", 0.5),
];

/// Shown when no issue clears its probability draw
pub const FALLBACK_ISSUE: &str = "Minor optimization needed";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn municipality_codes_are_unique() {
        let codes: HashSet<_> = MUNICIPALITIES.iter().map(|m| m.code).collect();
        assert_eq!(codes.len(), MUNICIPALITIES.len());
    }

    #[test]
    fn every_municipality_has_region() {
        for m in &MUNICIPALITIES {
            assert!(!m.region.is_empty(), "{} missing region", m.name);
            assert_eq!(m.code.len(), 4);
        }
    }

    #[test]
    fn lookup_by_code() {
        let oslo = municipality_by_code("0301").expect("Oslo");
        assert_eq!(oslo.name, "Oslo");
        assert!(municipality_by_code("9999").is_none());
    }

    #[test]
    fn issue_probabilities_are_valid() {
        for &(name, p) in &SEO_ISSUES {
            assert!(!name.is_empty());
            assert!((0.0..=1.0).contains(&p), "{} has probability {}", name, p);
        }
    }
}
