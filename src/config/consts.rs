// src/config/consts.rs
//
// Everything baked-in lives here. The tool takes no operational
// arguments; changing the search is an edit + rebuild.

use std::time::Duration;

/// Search page we scrape. IT jobs in Zagreb and surroundings.
pub const TARGET_URL: &str = "https://mojposao.hr/pretraga-poslova?positions=IT,+telekomunikacije&locations=Grad+Zagreb+i+Zagreba%C4%8Dka+%C5%BEupanija";

/// Origin prefixed onto relative listing links.
pub const SITE_ORIGIN: &str = "https://mojposao.hr";

/// Durable record of every listing we have seen.
pub const STORE_FILE: &str = "jobs.csv";

/// Store header row. Column names are the site's domain language;
/// existing store files depend on these bytes exactly.
pub const STORE_HEADERS: [&str; 5] = ["Pozicija", "Firma", "Lokacija", "Datum prijave do", "Link"];

/// How long we wait for the cookie-consent button before giving up on it.
pub const CONSENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Consent button inside the overlay mount point.
pub const CONSENT_BUTTON_SELECTOR: &str = "#teleport button";

/// Fixed scroll budget: STEPS scrolls of STEP_PX each, PAUSE between.
/// Not adaptive to page height; the site lazy-loads within this window.
pub const SCROLL_STEPS: u32 = 5;
pub const SCROLL_STEP_PX: u32 = 1000;
pub const SCROLL_PAUSE: Duration = Duration::from_millis(750);
pub const SETTLE_PAUSE: Duration = Duration::from_secs(2);

/// Mail submission endpoint (STARTTLS on the standard submission port).
pub const SMTP_RELAY: &str = "smtp.gmail.com";
pub const SMTP_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAIL_SUBJECT: &str = "Novi poslovi na mojposao.hr";
