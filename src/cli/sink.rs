//! Result delivery: console line or message box.

use std::io::{self, Write};

use rfd::{MessageButtons, MessageDialog, MessageLevel};

use super::{DispatchResult, Severity, formatting::PRODUCT_NAME};

/// Destination for a finished command result.
pub trait ResultSink {
    /// Presents `result` to the user.
    fn emit(&self, result: &DispatchResult);
}

/// Writes the message to stdout. Write failures are ignored; there is
/// nowhere else to report them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn emit(&self, result: &DispatchResult) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", result.message);
        let _ = stdout.flush();
    }
}

/// Shows a blocking native message box whose icon follows the severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModalSink;

impl ResultSink for ModalSink {
    fn emit(&self, result: &DispatchResult) {
        let level = match result.severity {
            Severity::None | Severity::Info => MessageLevel::Info,
            Severity::Warning => MessageLevel::Warning,
            Severity::Error => MessageLevel::Error,
        };

        MessageDialog::new()
            .set_title(PRODUCT_NAME)
            .set_description(result.message.as_str())
            .set_level(level)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Routes results to the sink picked at startup.
///
/// Print-only results always take the console.
pub struct Presenter {
    console: Box<dyn ResultSink>,
    selected: Box<dyn ResultSink>,
}

impl Presenter {
    /// Console output when `silent`, message boxes otherwise.
    pub fn for_mode(silent: bool) -> Self {
        let selected: Box<dyn ResultSink> = if silent {
            Box::new(ConsoleSink)
        } else {
            Box::new(ModalSink)
        };

        Self::new(Box::new(ConsoleSink), selected)
    }

    /// Presenter over explicit sinks.
    pub fn new(console: Box<dyn ResultSink>, selected: Box<dyn ResultSink>) -> Self {
        Self { console, selected }
    }

    /// Delivers `result` to the appropriate sink.
    pub fn present(&self, result: &DispatchResult) {
        if result.print_only {
            self.console.emit(result);
        } else {
            self.selected.emit(result);
        }
    }
}
