//! Rendering seam between the controller and the screen.

use std::io::{self, Write};

use crate::session::ClockView;

/// Draws the session's views.
pub trait Renderer: Send + Sync {
    /// Show the input prompt.
    fn show_input(&self);

    /// Show that a lookup for `country` is in progress.
    fn show_loading(&self, country: &str);

    /// Replace the input view with the clock view.
    fn show_clock(&self, view: &ClockView);

    /// Update the time and date of the visible clock.
    fn update_clock(&self, time: &str, date: &str);

    /// Surface an error message.
    fn show_error(&self, message: &str);
}

/// Renders to standard output. The clock line is redrawn in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    fn write(&self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::debug!(error = %e, "failed to write to terminal");
        }
    }
}

impl Renderer for TerminalRenderer {
    fn show_input(&self) {
        self.write("\nEnter a country name (:q to quit): ");
    }

    fn show_loading(&self, country: &str) {
        self.write(&format!("Looking up {country}...\n"));
    }

    fn show_clock(&self, view: &ClockView) {
        self.write(&format!("\n{}\n", view.label));
        self.update_clock(&view.time, &view.date);
    }

    fn update_clock(&self, time: &str, date: &str) {
        self.write(&format!("\r{time}  {date}   "));
    }

    fn show_error(&self, message: &str) {
        self.write(&format!("\n{message}\n"));
        self.show_input();
    }
}
