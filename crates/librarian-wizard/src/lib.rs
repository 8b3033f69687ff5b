//! Wizard controller for the Input → Review → Finalized workflow
//!
//! The controller is a strict linear state machine. A snippet is submitted in
//! `Input`, the extracted draft is edited in `Review`, and confirmation freezes
//! it into an export payload in `Finalized`. `reset` returns to `Input` from
//! anywhere.
//!
//! Operations never fail: anything attempted outside its stage, a blank
//! submit, or an out-of-set category edit returns [`Outcome::Ignored`] and
//! leaves state untouched.
//!
//! ```rust
//! use librarian_wizard::{Stage, WizardController};
//! use librarian_record::RecordField;
//!
//! let mut wizard = WizardController::new();
//! wizard.submit("const Card = (props) => {}");
//! assert_eq!(wizard.stage(), Stage::Review);
//!
//! wizard.edit_field(RecordField::Description, "A card.");
//! wizard.confirm();
//! let payload = wizard.export_payload().unwrap();
//! assert_eq!(payload.name, "Card");
//! assert_eq!(payload.description, "A card.");
//! ```

mod controller;
mod hook;
mod stage;

pub use controller::{ProcessingIndicator, WizardController, WizardState};
pub use hook::{DEFAULT_PROCESSING_DELAY, Immediate, ProcessingHook, SimulatedLatency};
pub use stage::{IgnoreReason, Outcome, Stage};
