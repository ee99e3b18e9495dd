use common::{PredictionView, RenderedPrediction, SubmitControl};
use std::cell::RefCell;
use std::io::{self, Stdout, Write};
use tracing::{debug, warn};

/// Renders prediction outcomes as plain text lines.
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_lines(&self, lines: &[&str]) {
        let mut out = self.out.borrow_mut();
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(out, "{}", line))
            .and_then(|_| out.flush());
        if let Err(e) = result {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> PredictionView for TerminalView<W> {
    fn clear(&self) {
        debug!("Clearing previous prediction output");
    }

    fn show_result(&self, prediction: &RenderedPrediction) {
        self.write_lines(&[
            &format!("Predicted solar irradiance: {}", prediction.value_text),
            prediction.interpretation_text(),
        ]);
    }

    fn show_error(&self, message: &str) {
        self.write_lines(&[&format!("Error: {}", message)]);
    }

    fn set_submit_control(&self, control: &SubmitControl) {
        if control.enabled {
            debug!("Submit control idle: {}", control.label);
        } else {
            self.write_lines(&[control.label]);
        }
    }
}
