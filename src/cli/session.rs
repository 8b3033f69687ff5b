//! Line-oriented interactive wizard
//!
//! Reads commands from any `BufRead` and writes responses to any `Write`, so
//! the same loop drives a terminal and in-memory tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use librarian_record::RecordField;
use librarian_utils::canonicalization::emit_pretty;
use librarian_utils::error::{LibrarianError, UserFriendlyError};
use librarian_wizard::{IgnoreReason, Outcome, ProcessingHook, Stage, WizardController};
use strum::VariantNames;

use super::commands::{PayloadView, invalid_category, render_payload, serialization_error};

/// Terminates a pasted snippet
pub const PASTE_TERMINATOR: &str = ".end";

const HELP: &str = "\
Commands:
  paste                  start a snippet; finish with a line containing only .end
  edit <field> <value>   change name, category, dependencies or description
  back                   return to input, keeping the snippet
  confirm                finalize the record
  export [canonical|preview]
                         print the finalized payload
  state                  print stage, snippet and current record
  reset                  discard everything and start over
  help                   show this list
  quit                   leave the session";

/// Interactive wizard session over a reader/writer pair
pub struct Session<'h, R, W> {
    wizard: WizardController,
    hook: &'h dyn ProcessingHook,
    input: R,
    output: W,
    default_view: PayloadView,
    preview_chars: usize,
}

impl<'h, R: BufRead, W: Write> Session<'h, R, W> {
    pub(crate) fn new(
        wizard: WizardController,
        hook: &'h dyn ProcessingHook,
        input: R,
        output: W,
        default_view: PayloadView,
        preview_chars: usize,
    ) -> Self {
        Self {
            wizard,
            hook,
            input,
            output,
            default_view,
            preview_chars,
        }
    }

    /// The wizard driven by this session
    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    /// Run until `quit` or end of input.
    ///
    /// # Errors
    /// Only I/O failures on the underlying streams end the session with an error.
    pub async fn run(&mut self) -> Result<(), LibrarianError> {
        writeln!(self.output, "librarian session. Type 'help' for commands.")?;

        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let line = line.trim();
            let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

            match command {
                "" => {}
                "paste" => self.paste().await?,
                "edit" => self.edit(rest)?,
                "back" => {
                    let outcome = self.wizard.back();
                    self.report(outcome)?;
                }
                "confirm" => {
                    let outcome = self.wizard.confirm();
                    self.report(outcome)?;
                }
                "reset" => {
                    let outcome = self.wizard.reset();
                    self.report(outcome)?;
                }
                "state" => self.print_state()?,
                "export" => self.export(rest.trim())?,
                "help" => writeln!(self.output, "{HELP}")?,
                "quit" | "exit" => break,
                other => writeln!(
                    self.output,
                    "unknown command '{other}'. Type 'help' for commands."
                )?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), LibrarianError> {
        let stage = self.wizard.stage();
        write!(self.output, "[{}/3 {stage}]> ", stage.step())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, LibrarianError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    async fn paste(&mut self) -> Result<(), LibrarianError> {
        let stage = self.wizard.stage();
        if stage != Stage::Input {
            return self.report(Outcome::Ignored(IgnoreReason::WrongStage {
                expected: Stage::Input,
                actual: stage,
            }));
        }

        writeln!(
            self.output,
            "Paste the snippet, then a line with only {PASTE_TERMINATOR}"
        )?;
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.trim() == PASTE_TERMINATOR {
                break;
            }
            lines.push(line);
        }
        let snippet = lines.join("\n");

        writeln!(self.output, "Analyzing...")?;
        let outcome = self.wizard.submit_with(&snippet, self.hook).await;
        self.report(outcome)?;
        if outcome.is_applied() {
            self.print_record()?;
        }
        Ok(())
    }

    fn edit(&mut self, args: &str) -> Result<(), LibrarianError> {
        let (field_name, value) = args.split_once(' ').unwrap_or((args, ""));
        let Ok(field) = RecordField::from_str(field_name) else {
            let err = LibrarianError::InvalidEdit {
                field: "field".to_string(),
                value: field_name.to_string(),
                allowed: RecordField::VARIANTS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            };
            return self.print_error(&err);
        };

        match self.wizard.edit_field(field, value) {
            Outcome::Ignored(IgnoreReason::InvalidCategory) => {
                self.print_error(&invalid_category(value))
            }
            outcome => self.report(outcome),
        }
    }

    fn export(&mut self, view_name: &str) -> Result<(), LibrarianError> {
        let view = match view_name {
            "" => self.default_view,
            "pretty" => PayloadView::Pretty,
            "canonical" => PayloadView::Canonical,
            "preview" => PayloadView::Preview,
            other => {
                writeln!(
                    self.output,
                    "unknown export view '{other}' (pretty, canonical, preview)"
                )?;
                return Ok(());
            }
        };

        let Some(payload) = self.wizard.export_payload() else {
            let err = LibrarianError::NotFinalized {
                stage: self.wizard.stage().to_string(),
            };
            return self.print_error(&err);
        };
        let rendered = render_payload(payload, view, self.preview_chars)?;
        writeln!(self.output, "{rendered}")?;
        Ok(())
    }

    fn print_state(&mut self) -> Result<(), LibrarianError> {
        let json = emit_pretty(&self.wizard.state()).map_err(|e| serialization_error(&e))?;
        writeln!(self.output, "{json}")?;
        Ok(())
    }

    fn print_record(&mut self) -> Result<(), LibrarianError> {
        let record = self.wizard.state().record;
        writeln!(self.output, "  name:         {}", record.name)?;
        writeln!(self.output, "  category:     {}", record.category)?;
        writeln!(self.output, "  dependencies: {}", record.dependencies)?;
        writeln!(self.output, "  description:  {}", record.description)?;
        Ok(())
    }

    fn report(&mut self, outcome: Outcome) -> Result<(), LibrarianError> {
        match outcome {
            Outcome::Applied => writeln!(self.output, "ok ({})", self.wizard.stage())?,
            Outcome::Ignored(reason) => writeln!(self.output, "ignored: {reason}")?,
        }
        Ok(())
    }

    fn print_error(&mut self, err: &LibrarianError) -> Result<(), LibrarianError> {
        writeln!(self.output, "error: {}", err.user_message())?;
        if let Some(context) = err.context() {
            writeln!(self.output, "  {context}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use librarian_wizard::Immediate;
    use std::io::Cursor;

    async fn run_session(script: &str, view: PayloadView) -> (String, Stage) {
        let mut output = Vec::new();
        let stage = {
            let mut session = Session::new(
                WizardController::new(),
                &Immediate,
                Cursor::new(script.as_bytes()),
                &mut output,
                view,
                100,
            );
            session.run().await.unwrap();
            session.wizard().stage()
        };
        (String::from_utf8(output).unwrap(), stage)
    }

    #[tokio::test]
    async fn test_full_walkthrough() {
        let script = "\
paste
import Foo from 'lib-a';
const Card = (props) => {}
.end
edit description A product card.
confirm
export
quit
";
        let (output, stage) = run_session(script, PayloadView::Pretty).await;
        assert_eq!(stage, Stage::Finalized);
        assert!(output.contains("  name:         Card"));
        assert!(output.contains("ok (finalized)"));
        assert!(output.contains("\"description\": \"A product card.\""));
        assert!(output.contains("\"dependencies\": [\n    \"lib-a\"\n  ]"));
    }

    #[tokio::test]
    async fn test_blank_paste_is_ignored() {
        let (output, stage) = run_session("paste\n   \n.end\n", PayloadView::Pretty).await;
        assert_eq!(stage, Stage::Input);
        assert!(output.contains("ignored: snippet is blank"));
    }

    #[tokio::test]
    async fn test_invalid_category_keeps_review() {
        let script = "paste\nconst Card = () => {}\n.end\nedit category Widget\nstate\n";
        let (output, stage) = run_session(script, PayloadView::Pretty).await;
        assert_eq!(stage, Stage::Review);
        assert!(output.contains("error:"));
        assert!(output.contains("Atom, Molecule, Organism, Template, Logic, Utility"));
        assert!(output.contains("\"category\": \"Molecule\""));
    }

    #[tokio::test]
    async fn test_unknown_field_is_reported() {
        let script = "paste\nconst Card = () => {}\n.end\nedit colour red\n";
        let (output, _) = run_session(script, PayloadView::Pretty).await;
        assert!(output.contains("error:"));
        assert!(output.contains("name, category, dependencies, description"));
    }

    #[tokio::test]
    async fn test_export_before_confirm_is_refused() {
        let (output, stage) = run_session("export\n", PayloadView::Pretty).await;
        assert_eq!(stage, Stage::Input);
        assert!(output.contains("error: The record has not been finalized yet"));
    }

    #[tokio::test]
    async fn test_back_and_reset() {
        let script = "paste\nconst Card = () => {}\n.end\nback\nconfirm\nreset\nstate\n";
        let (output, stage) = run_session(script, PayloadView::Pretty).await;
        assert_eq!(stage, Stage::Input);
        assert!(output.contains("ok (input)"));
        assert!(output.contains("ignored: only valid in review stage (currently input)"));
        assert!(output.contains("\"snippet\": \"\""));
        assert!(output.contains("\"name\": \"UntitledComponent\""));
    }

    #[tokio::test]
    async fn test_export_preview_and_canonical() {
        let script = "paste\nconst Card = () => {}\n.end\nconfirm\nexport preview\nexport canonical\n";
        let (output, _) = run_session(script, PayloadView::Pretty).await;
        assert!(output.contains("const Card = () => {}... (full code stored)"));
        assert!(output.contains("{\"codeSnippet\":\"const Card = () => {}\""));
    }

    #[tokio::test]
    async fn test_default_view_from_config() {
        let script = "paste\nconst Card = () => {}\n.end\nconfirm\nexport\n";
        let (output, _) = run_session(script, PayloadView::Canonical).await;
        assert!(output.contains("{\"codeSnippet\":"));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let (output, _) = run_session("dance\n", PayloadView::Pretty).await;
        assert!(output.contains("unknown command 'dance'"));
    }

    #[tokio::test]
    async fn test_paste_outside_input_is_ignored() {
        let script = "paste\nconst Card = () => {}\n.end\nconfirm\npaste\nstate\n";
        let (output, stage) = run_session(script, PayloadView::Pretty).await;
        assert_eq!(stage, Stage::Finalized);
        assert!(output.contains("ignored: only valid in input stage (currently finalized)"));
        assert!(!output.contains("unknown command 'state'"));
        assert!(output.contains("\"stage\": \"finalized\""));
    }
}
