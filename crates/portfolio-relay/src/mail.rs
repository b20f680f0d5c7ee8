//! Outbound mail: the external mail collaborator seam and its SMTP
//! implementation. Handlers only see the [`Mailer`] trait, so tests can
//! substitute stubs for the transport.

use crate::contact::ContactSubmission;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

pub const CONTACT_SUBJECT: &str = "New Contact Form Submission";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(String),
    #[error("mail transport failed: {0}")]
    Transport(String),
}

/// A contact submission rendered into the fields of one outgoing email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    pub fn from_submission(submission: &ContactSubmission) -> Self {
        Self {
            from: format!(
                "{} {} <{}>",
                submission.first_name, submission.last_name, submission.email
            ),
            reply_to: submission.email.clone(),
            subject: CONTACT_SUBJECT.to_string(),
            body: format!(
                "Name: {} {}\nEmail: {}\nMessage: {}\n",
                submission.first_name, submission.last_name, submission.email, submission.message
            ),
        }
    }
}

/// The mail-sending collaborator: given an email, succeed or fail.
/// Sends are blocking; callers on async runtimes use `spawn_blocking`.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// SMTP delivery with credentials from the environment.
pub struct SmtpMailer {
    transport: SmtpTransport,
    recipient: Mailbox,
}

impl SmtpMailer {
    pub fn new(host: &str, user: &str, password: &str, recipient: &str) -> Result<Self, MailError> {
        let recipient = recipient
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(e.to_string()))?;
        let transport = SmtpTransport::relay(host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build();
        Ok(Self {
            transport,
            recipient,
        })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let from = email
            .from
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(e.to_string()))?;
        let reply_to = email
            .reply_to
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(e.to_string()))?;
        let message = Message::builder()
            .from(from)
            .reply_to(reply_to)
            .to(self.recipient.clone())
            .subject(email.subject.clone())
            .body(email.body.clone())
            .map_err(|e| MailError::Transport(e.to_string()))?;
        self.transport
            .send(&message)
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(())
    }
}
