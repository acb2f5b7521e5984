// src/dedup.rs
//
// Set difference on the identity key: a freshly scraped record is new
// iff (position, company, location) has never been stored. Duplicate
// cards within one scrape are NOT collapsed against each other; the
// store only ever holds distinct keys because this filter runs before
// every append.

use std::collections::HashSet;

use crate::data::JobRecord;

/// Records from `extracted` whose identity key is absent from `stored`,
/// in extraction order.
pub fn new_records(extracted: &[JobRecord], stored: &[JobRecord]) -> Vec<JobRecord> {
    let seen: HashSet<(&str, &str, &str)> = stored.iter().map(|r| r.identity()).collect();

    extracted
        .iter()
        .filter(|r| !seen.contains(&r.identity()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(position: &str, deadline: &str, link: &str) -> JobRecord {
        JobRecord {
            position: s!(position),
            company: s!("Acme"),
            location: s!("Zagreb"),
            deadline: s!(deadline),
            link: s!(link),
        }
    }

    #[test]
    fn empty_store_everything_is_new() {
        let extracted = vec![
            record("Backend Developer", "2025-01-01", "https://mojposao.hr/job/1"),
            record("QA Engineer", "2025-01-05", "https://mojposao.hr/job/2"),
        ];
        assert_eq!(new_records(&extracted, &[]), extracted);
    }

    #[test]
    fn known_identity_is_filtered() {
        let stored = vec![record("Backend Developer", "2025-01-01", "https://mojposao.hr/job/1")];
        let extracted = vec![
            record("Backend Developer", "2025-01-01", "https://mojposao.hr/job/1"),
            record("DevOps Engineer", "2025-01-09", "https://mojposao.hr/job/3"),
        ];
        let fresh = new_records(&extracted, &stored);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].position, "DevOps Engineer");
    }

    #[test]
    fn dedup_is_idempotent() {
        let batch = vec![
            record("Backend Developer", "2025-01-01", "https://mojposao.hr/job/1"),
            record("QA Engineer", "2025-01-05", "https://mojposao.hr/job/2"),
        ];
        let first = new_records(&batch, &[]);
        assert_eq!(first.len(), 2);
        // store now contains the batch; same input again yields nothing
        let second = new_records(&batch, &first);
        assert!(second.is_empty());
    }

    #[test]
    fn changed_deadline_or_link_is_still_the_same_listing() {
        let stored = vec![record("Backend Developer", "2025-01-01", "https://mojposao.hr/job/1")];
        let extracted = vec![record("Backend Developer", "2025-03-01", "https://mojposao.hr/job/99")];
        assert!(new_records(&extracted, &stored).is_empty());
    }

    #[test]
    fn intra_run_duplicates_are_kept() {
        // Two identical cards on one page both pass through; only
        // history filters, matching the original behavior.
        let extracted = vec![
            record("Backend Developer", "2025-01-01", "https://mojposao.hr/job/1"),
            record("Backend Developer", "2025-01-01", "https://mojposao.hr/job/1"),
        ];
        assert_eq!(new_records(&extracted, &[]).len(), 2);
    }

    #[test]
    fn order_follows_extraction_order() {
        let extracted = vec![
            record("Zebra Handler", "2025-01-01", "https://mojposao.hr/job/5"),
            record("Apiarist", "2025-01-02", "https://mojposao.hr/job/6"),
        ];
        let fresh = new_records(&extracted, &[]);
        assert_eq!(fresh[0].position, "Zebra Handler");
        assert_eq!(fresh[1].position, "Apiarist");
    }
}
