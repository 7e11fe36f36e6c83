//! Outbound delivery seam.
//!
//! Composition never sends anything.  Callers that want to deliver a
//! [`ComposedMessage`](crate::ComposedMessage) convert it with
//! [`to_outgoing`](crate::ComposedMessage::to_outgoing) and hand it to an
//! [`OutboundTransport`].  [`DryRunTransport`] renders the RFC 5322 text and
//! keeps it in memory.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{ComposeError, Result};

/// A message ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Proof that a transport accepted a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub id: Uuid,
    /// Id of the transport that accepted the message.
    pub transport: String,
    pub accepted_at: DateTime<Utc>,
    /// Size of the rendered message in bytes.
    pub rendered_bytes: usize,
}

#[async_trait]
pub trait OutboundTransport: Send + Sync {
    /// Stable identifier, e.g. `"dry-run"`.
    fn id(&self) -> &str;

    /// Deliver one message.
    async fn deliver(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt>;
}

/// Render a plain-text message with CRLF line endings.
pub fn render_message(from: &str, email: &OutgoingEmail) -> String {
    let body = email.body.replace("\r\n", "\n").replace('\n', "\r\n");
    format!(
        "From: {from}\r\n\
         To: {to}\r\n\
         Subject: {subject}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: text/plain; charset=UTF-8\r\n\
         \r\n\
         {body}\r\n",
        to = email.to,
        subject = email.subject,
    )
}

/// Transport that renders messages without sending them.
#[derive(Debug)]
pub struct DryRunTransport {
    id: String,
    from: String,
    outbox: Mutex<Vec<String>>,
}

impl DryRunTransport {
    /// A transport reporting `id` that renders messages as sent by `from`.
    pub fn new(id: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// Rendered messages accepted so far, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl OutboundTransport for DryRunTransport {
    fn id(&self) -> &str {
        &self.id
    }

    async fn deliver(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt> {
        if !email.to.contains('@') {
            return Err(ComposeError::Transport {
                reason: format!("recipient `{}` is not an email address", email.to),
            });
        }

        let rendered = render_message(&self.from, email);
        let receipt = DeliveryReceipt {
            id: Uuid::now_v7(),
            transport: self.id.clone(),
            accepted_at: Utc::now(),
            rendered_bytes: rendered.len(),
        };

        info!(
            transport = %self.id,
            to = %email.to,
            subject = %email.subject,
            bytes = receipt.rendered_bytes,
            "message accepted"
        );

        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(rendered);

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: to.into(),
            subject: "Hello".into(),
            body: "Hi Ann,\nline two\n\nBest".into(),
        }
    }

    #[test]
    fn rendered_headers_and_crlf_body() {
        let msg = render_message("agent@x.com", &email("ann@y.com"));
        assert!(msg.starts_with("From: agent@x.com\r\nTo: ann@y.com\r\nSubject: Hello\r\n"));
        assert!(msg.contains("MIME-Version: 1.0\r\n"));
        assert!(msg.contains("Content-Type: text/plain; charset=UTF-8\r\n\r\n"));
        assert!(msg.ends_with("Hi Ann,\r\nline two\r\n\r\nBest\r\n"));
        assert!(!msg.replace("\r\n", "").contains('\n'));
    }

    #[tokio::test]
    async fn dry_run_records_message() {
        let transport = DryRunTransport::new("dry-run", "agent@x.com");
        let receipt = transport.deliver(&email("ann@y.com")).await.unwrap();

        assert_eq!(transport.id(), "dry-run");
        assert_eq!(receipt.transport, "dry-run");
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(receipt.rendered_bytes, sent[0].len());
    }

    #[tokio::test]
    async fn dry_run_rejects_non_address() {
        let transport = DryRunTransport::new("dry-run", "agent@x.com");
        let result = transport.deliver(&email("ann")).await;
        assert!(matches!(result, Err(ComposeError::Transport { .. })));
        assert!(transport.sent().is_empty());
    }
}
