// src/data.rs
//
// The one domain entity. Records are plain immutable values: built once
// by the extractor, compared by identity key, appended to the store,
// never mutated after that.

/// One job listing as shown on the search page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRecord {
    pub position: String,
    pub company: String,
    pub location: String,
    /// Free-form date string, as printed on the card.
    pub deadline: String,
    /// Absolute URL to the listing.
    pub link: String,
}

impl JobRecord {
    /// Identity for dedup purposes. Deadline and link are excluded:
    /// a reposted listing with a pushed-out deadline is the same job.
    pub fn identity(&self) -> (&str, &str, &str) {
        (&self.position, &self.company, &self.location)
    }

    /// Store row in column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.position.clone(),
            self.company.clone(),
            self.location.clone(),
            self.deadline.clone(),
            self.link.clone(),
        ]
    }

    /// Inverse of `to_row`. Errors on wrong arity; a malformed store
    /// is fatal rather than silently misread.
    pub fn from_row(row: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        if row.len() != 5 {
            return Err(format!("Malformed store row: expected 5 columns, got {}", row.len()).into());
        }
        Ok(Self {
            position: row[0].clone(),
            company: row[1].clone(),
            location: row[2].clone(),
            deadline: row[3].clone(),
            link: row[4].clone(),
        })
    }
}
