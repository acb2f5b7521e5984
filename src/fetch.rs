// src/fetch.rs
//
// One headless Chrome per call: navigate, deal with the cookie
// overlay, scroll the lazy-loader into submission, hand back the
// rendered markup. The browser process dies when `Browser` drops.

use std::error::Error;
use std::thread;

use headless_chrome::{Browser, LaunchOptionsBuilder};

use crate::config::consts::{
    CONSENT_BUTTON_SELECTOR, CONSENT_TIMEOUT, SCROLL_PAUSE, SCROLL_STEPS, SCROLL_STEP_PX,
    SETTLE_PAUSE,
};

/// Fetch the fully rendered markup for `url`.
///
/// Consent-dialog absence is the only tolerated failure; anything else
/// (launch, navigation, script evaluation) propagates and fails the run.
pub fn fetch_page(url: &str) -> Result<String, Box<dyn Error>> {
    let options = LaunchOptionsBuilder::default().headless(true).build()?;
    let browser = Browser::new(options)?;
    let tab = browser.new_tab()?;

    tab.navigate_to(url)?;
    tab.wait_until_navigated()?;

    // The consent overlay is optional; the site serves the page either way.
    match tab.wait_for_element_with_custom_timeout(CONSENT_BUTTON_SELECTOR, CONSENT_TIMEOUT) {
        Ok(button) => {
            button.click()?;
            logf!("Dismissed cookie consent dialog");
        }
        Err(_) => {
            println!("No accept cookies button found.");
            logf!("Consent dialog not found within {:?}", CONSENT_TIMEOUT);
        }
    }

    thread::sleep(SETTLE_PAUSE);

    // Fixed scroll budget. Same step count every run regardless of how
    // tall the page actually is.
    for step in 0..SCROLL_STEPS {
        let offset = step * SCROLL_STEP_PX;
        tab.evaluate(&format!("window.scrollTo(0, {offset});"), false)?;
        thread::sleep(SCROLL_PAUSE);
    }

    thread::sleep(SETTLE_PAUSE);

    let markup = tab.get_content()?;
    logf!("Fetched {} bytes of markup from {}", markup.len(), url);
    Ok(markup)
}
