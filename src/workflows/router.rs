//! Session router
//!
//! Greets the user, runs the entry gate and then loops over the main menu,
//! dispatching to one workflow at a time.

use tracing::{debug, info};

use crate::config::settings::Settings;
use crate::error::PesBuddyResult;
use crate::prompt::Prompt;
use crate::services::{DispatchLedger, OrderLedger};
use crate::storage::Storage;

use super::gate::{self, GateOutcome};
use super::{dispatch, expense, ordering, Flow};

/// State carried through one logged-in session
pub struct Session<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,
    /// Name entered at login
    pub user: String,
    pub dispatch: DispatchLedger,
    pub orders: OrderLedger,
}

impl<'a> Session<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, user: impl Into<String>) -> Self {
        Self {
            storage,
            settings,
            user: user.into(),
            dispatch: DispatchLedger::new(),
            orders: OrderLedger::new(),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Exit picked from the main menu
    Exited,
    /// A workflow's closing question answered with anything but `0`
    Terminated,
    LockedOut,
    /// Input stream ended
    InputClosed,
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Expenses,
    Scooters,
    Canteens,
    Exit,
}

impl MenuChoice {
    fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(MenuChoice::Expenses),
            2 => Some(MenuChoice::Scooters),
            3 => Some(MenuChoice::Canteens),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run a full interactive session
///
/// End of input at any prompt ends the session cleanly.
pub fn run<P: Prompt>(io: &mut P, storage: &Storage, settings: &Settings) -> PesBuddyResult<SessionEnd> {
    match run_inner(io, storage, settings) {
        Err(e) if e.is_input_closed() => {
            debug!("Input closed, ending session");
            Ok(SessionEnd::InputClosed)
        }
        other => other,
    }
}

fn run_inner<P: Prompt>(io: &mut P, storage: &Storage, settings: &Settings) -> PesBuddyResult<SessionEnd> {
    io.say("Hey buddy, Welcome to PES BUDDY!")?;

    let user = match gate::run(io, storage, settings)? {
        GateOutcome::Authenticated { name } => name,
        GateOutcome::LockedOut => return Ok(SessionEnd::LockedOut),
    };
    info!("Session started");

    let mut session = Session::new(storage, settings, user);
    main_menu(io, &mut session)
}

/// Loop over the main menu until a workflow terminates or the user exits
pub fn main_menu<P: Prompt>(io: &mut P, session: &mut Session<'_>) -> PesBuddyResult<SessionEnd> {
    loop {
        io.say("\n---- Main Menu ----")?;
        io.say("1. Expense Tracker\n2. PES Scootigo\n3. PES Doormato\n4. Exit")?;

        let selection = io.read_int("Your Choice: ")?;
        let flow = match MenuChoice::from_selection(selection) {
            Some(MenuChoice::Expenses) => expense::run(io, session)?,
            Some(MenuChoice::Scooters) => {
                dispatch::run(io, session)?;
                Flow::ReturnToMenu
            }
            Some(MenuChoice::Canteens) => ordering::run(io, session)?,
            Some(MenuChoice::Exit) => {
                io.say("\nThank You!")?;
                return Ok(SessionEnd::Exited);
            }
            None => {
                io.say("\nKindly enter a valid choice!")?;
                Flow::ReturnToMenu
            }
        };

        if flow == Flow::Terminate {
            io.say("Thank You!")?;
            return Ok(SessionEnd::Terminated);
        }
    }
}
