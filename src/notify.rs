// src/notify.rs
//
// One plain-text email per run, only when there is something to say.
// A failed send is logged and swallowed: the store is already updated,
// so the run still counts; the notification is simply lost.

use std::error::Error;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::consts::{MAIL_SUBJECT, SMTP_RELAY, SMTP_TIMEOUT};
use crate::config::env::MailConfig;
use crate::data::JobRecord;

/// Compose and send the new-jobs summary. Never returns an error:
/// transport and auth failures end up on the console and in the log.
pub fn send(config: &MailConfig, new_jobs: &[JobRecord]) {
    match try_send(config, new_jobs) {
        Ok(()) => {
            println!("Email sent successfully.");
            logf!("Notified {} about {} new job(s)", config.receiver, new_jobs.len());
        }
        Err(e) => {
            println!("Failed to send email. Error: {e}");
            loge!("Email send failed: {e}");
        }
    }
}

fn try_send(config: &MailConfig, new_jobs: &[JobRecord]) -> Result<(), Box<dyn Error>> {
    let email = Message::builder()
        .from(config.sender.parse()?)
        .to(config.receiver.parse()?)
        .subject(MAIL_SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(compose_body(new_jobs))?;

    let creds = Credentials::new(config.sender.clone(), config.password.clone());

    // STARTTLS on the submission port; fresh connection, no pooling.
    // The source had no timeout at all; 30 s keeps a dead relay from
    // hanging the run.
    let mailer = SmtpTransport::starttls_relay(SMTP_RELAY)?
        .credentials(creds)
        .timeout(Some(SMTP_TIMEOUT))
        .build();

    mailer.send(&email)?;
    Ok(())
}

/// Greeting, count, one labelled block per record, sign-off.
/// Labels mirror the store columns.
pub fn compose_body(new_jobs: &[JobRecord]) -> String {
    let mut body = format!("Bok,\n\nDodana su {} nova posla:\n", new_jobs.len());

    for job in new_jobs {
        body.push_str(&format!(
            "\nPozicija: {}\nFirma: {}\nLokacija: {}\nDatum prijave do: {}\nLink: {}\n",
            job.position, job.company, job.location, job.deadline, job.link
        ));
    }

    body.push_str("\nLp");
    body
}
