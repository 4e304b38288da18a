//! Status lines on stderr.

use console::{Style, Term};

/// Writes one colored status line per call to stderr, keeping stdout free
/// for rendered markup.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(&Style::new(), msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&Style::new().green(), msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(&Style::new().yellow(), msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&Style::new().red().bold(), msg);
    }

    fn line(&self, style: &Style, msg: &str) {
        // A closed stderr must not turn a finished render into a failure
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}
