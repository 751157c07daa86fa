//! Interactive workflows
//!
//! Each workflow drives one multi-step procedure through a [`Prompt`],
//! calls into the services for every state change and hands a [`Flow`]
//! back to the router. Only the router ends a session.

pub mod dispatch;
pub mod expense;
pub mod gate;
pub mod ordering;
pub mod router;

pub use gate::GateOutcome;
pub use router::{run, Session, SessionEnd};

use crate::error::PesBuddyResult;
use crate::prompt::Prompt;

/// What a finished sub-workflow asks the router to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    ReturnToMenu,
    Terminate,
}

/// Ask whether to go back to the main menu; only `0` does
pub(crate) fn ask_return_or_exit<P: Prompt>(io: &mut P) -> PesBuddyResult<Flow> {
    let answer = io.read_line("\nEnter 0 to go to the main menu or any other key to exit: ")?;
    if answer.trim() == "0" {
        Ok(Flow::ReturnToMenu)
    } else {
        Ok(Flow::Terminate)
    }
}
