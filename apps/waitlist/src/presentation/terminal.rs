//! Line-oriented front end for the waitlist form.
//!
//! Each line read is one input event for the prompted field. After all
//! fields are entered the form is submitted; on rejection only the failing
//! fields are prompted again.

use std::io::{BufRead, Write};

use tracing::debug;

use super::view::FormView;
use crate::application::submit_signup::{dto::SubmitOutcome, use_case::FormController};
use crate::domain::signup::{
    field::Field,
    normalizers::{PIN_DIGITS, normalize_digits},
};

#[derive(Debug, Clone)]
pub struct TerminalOptions {
    pub product_name: String,
    pub reset_after_submit: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            product_name: "Spidr Air Fryer".to_string(),
            reset_after_submit: false,
        }
    }
}

pub struct TerminalForm<R, W> {
    input: R,
    output: W,
    controller: FormController,
    options: TerminalOptions,
}

impl<R: BufRead, W: Write> TerminalForm<R, W> {
    pub fn new(input: R, output: W, controller: FormController, options: TerminalOptions) -> Self {
        Self {
            input,
            output,
            controller,
            options,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Runs sessions until input ends or the user declines another signup.
    ///
    /// Returns how many submissions the sink accepted.
    ///
    /// # Errors
    /// Fails on I/O errors and when the sink refuses a submission.
    pub fn run(&mut self) -> anyhow::Result<usize> {
        let mut accepted = 0;

        loop {
            if !self.run_session()? {
                return Ok(accepted);
            }
            accepted += 1;

            if !self.options.reset_after_submit {
                return Ok(accepted);
            }
            write!(self.output, "Sign up someone else? [y/N]: ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => self.controller.reset(),
                _ => return Ok(accepted),
            }
        }
    }

    /// Returns `false` when input ended before the form was submitted.
    fn run_session(&mut self) -> anyhow::Result<bool> {
        self.print_header()?;
        let mut pending: Vec<Field> = Field::ALL.to_vec();

        loop {
            for field in &pending {
                if !self.prompt(*field)? {
                    return Ok(false);
                }
            }

            match self.controller.submit()? {
                SubmitOutcome::Submitted(receipt) => {
                    writeln!(
                        self.output,
                        "\nThanks {}! You're on the {} waitlist.",
                        receipt.submission.first_name.trim(),
                        self.options.product_name
                    )?;
                    return Ok(true);
                }
                SubmitOutcome::Rejected(errors) => {
                    debug!(failed = errors.len(), "Re-prompting failing fields");
                    writeln!(self.output, "\nPlease fix the following:")?;
                    let view = self.view();
                    for field_view in view.errors() {
                        if let Some(message) = &field_view.error {
                            writeln!(self.output, "  {}: {}", field_view.label, message)?;
                        }
                    }
                    pending = errors.iter().map(|(field, _)| field).collect();
                }
            }
        }
    }

    fn print_header(&mut self) -> anyhow::Result<()> {
        let view = self.view();
        writeln!(self.output, "{}", view.heading)?;
        for line in &view.intro {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Returns `false` on end of input.
    fn prompt(&mut self, field: Field) -> anyhow::Result<bool> {
        write!(self.output, "{} ({}): ", field.label(), field.placeholder())?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let changed = self.controller.handle_input_change(field, &line);

        if field == Field::Pin && !changed && normalize_digits(&line).len() > PIN_DIGITS {
            writeln!(
                self.output,
                "  PIN holds at most {PIN_DIGITS} digits, keeping {:?}",
                self.controller.fields().pin
            )?;
        }
        Ok(true)
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn view(&self) -> FormView {
        FormView::build(&self.controller, &self.options.product_name, None, false)
    }
}
