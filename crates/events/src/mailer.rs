//! Bounded in-process mail queue.
//!
//! [`Mailer`] is the cloneable producer handle given to request-path code;
//! [`spawn_mail_worker`] drains the queue on a dedicated task. Enqueueing
//! never blocks and never fails the caller: a full or closed queue drops
//! the job with a warning. Render and transport failures are logged per
//! job and do not affect later jobs.

use tokio::sync::mpsc;

use crate::delivery::email::EmailDelivery;
use crate::templates;

/// Default queue capacity before new jobs are dropped.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// One templated email waiting to be rendered and sent.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailJob {
    pub to: String,
    pub subject: String,
    pub template: String,
    pub model: serde_json::Value,
}

/// Producer handle over the mail queue.
#[derive(Clone)]
pub struct Mailer {
    tx: mpsc::Sender<EmailJob>,
}

impl Mailer {
    /// Create a mailer and the receiver half to pass to [`spawn_mail_worker`].
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<EmailJob>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Queue a templated email.
    ///
    /// Fire-and-forget: the caller gets no result and is never blocked.
    /// The only loss modes are a full queue and a stopped worker, both
    /// logged here.
    pub fn send_templated(
        &self,
        to: impl Into<String>,
        subject: impl Into<String>,
        template: impl Into<String>,
        model: serde_json::Value,
    ) {
        let job = EmailJob {
            to: to.into(),
            subject: subject.into(),
            template: template.into(),
            model,
        };
        match self.tx.try_send(job) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(job)) => {
                tracing::warn!(to = %job.to, subject = %job.subject, "Mail queue full, dropping email");
            }
            Err(mpsc::error::TrySendError::Closed(job)) => {
                tracing::warn!(to = %job.to, subject = %job.subject, "Mail worker stopped, dropping email");
            }
        }
    }
}

/// Spawn the worker task that drains the mail queue.
///
/// With `delivery` absent (SMTP not configured) every job is logged and
/// dropped. The task ends when all [`Mailer`] handles have been dropped
/// and the queue is empty.
pub fn spawn_mail_worker(
    mut rx: mpsc::Receiver<EmailJob>,
    delivery: Option<EmailDelivery>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            let body = match templates::render(&job.template, &job.model) {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!(error = %e, template = %job.template, "Failed to render email template");
                    continue;
                }
            };

            let Some(delivery) = delivery.as_ref() else {
                tracing::debug!(to = %job.to, subject = %job.subject, "SMTP not configured, dropping email");
                continue;
            };

            if let Err(e) = delivery.send(&job.to, &job.subject, body).await {
                tracing::error!(error = %e, to = %job.to, "Failed to send email");
            }
        }
        tracing::info!("Mail queue closed, mail worker shutting down");
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
