//! User-facing notices.
//!
//! Transient toast-style messages surfaced to the operator. Decoupled
//! from any particular surface: the terminal front end prints them,
//! tests record them.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

/// One transient message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Notice for a failed search, regardless of which call failed.
    pub fn fetch_failed() -> Self {
        Self::error("Error", "Failed to fetch user data. Please try again.")
    }

    /// Notice for confirming the duplicate-account warning without
    /// checking the acknowledgment box.
    pub fn acknowledgment_required() -> Self {
        Self::warning("Warning", "Please check the acknowledgment checkbox first.")
    }
}

/// Sink for notices.
pub trait Notifier: Send {
    fn notify(&mut self, notice: Notice);
}

/// Prints notices to stderr and mirrors them to the log.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => log::error!("{}: {}", notice.title, notice.body),
            NoticeKind::Warning => log::warn!("{}: {}", notice.title, notice.body),
        }
        eprintln!("[{}] {}", notice.title, notice.body);
    }
}
