//! Order ledger
//!
//! Collects the items picked during one canteen ordering session and keeps
//! the running total in step with the entries.

use serde::Serialize;

use crate::error::PesBuddyResult;
use crate::models::{Canteen, MenuItem, OrderEntry, OrderSessionId};
use crate::storage::MenuRepository;

/// Maximum number of entries in one ordering session
pub const ORDER_CAPACITY: usize = 100;

/// Result of an item selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Added(OrderEntry),
    /// Selection 0: nothing ordered
    Cancelled,
    InvalidSelection,
    Full,
    /// The item's price would push the total past `i64::MAX`
    TotalOverflow,
}

/// Result of loading a canteen menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLoad {
    Loaded(Vec<MenuItem>),
    Unavailable,
}

/// Load a canteen's menu, mapping a missing file to `Unavailable`
pub fn load_menu(menus: &MenuRepository, canteen: Canteen) -> PesBuddyResult<MenuLoad> {
    match menus.load(canteen) {
        Ok(items) => Ok(MenuLoad::Loaded(items)),
        Err(e) if e.is_not_found() => Ok(MenuLoad::Unavailable),
        Err(e) => Err(e),
    }
}

/// Snapshot of a ledger for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub session_id: OrderSessionId,
    pub entries: Vec<OrderEntry>,
    pub total_cost: i64,
}

/// Bounded, session-scoped list of ordered items
#[derive(Debug, Clone)]
pub struct OrderLedger {
    session_id: OrderSessionId,
    entries: Vec<OrderEntry>,
    total_cost: i64,
    capacity: usize,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    /// Empty ledger with the standard capacity
    pub fn new() -> Self {
        Self::with_capacity(ORDER_CAPACITY)
    }

    /// Empty ledger holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            session_id: OrderSessionId::new(),
            entries: Vec::with_capacity(capacity),
            total_cost: 0,
            capacity,
        }
    }

    /// Start a fresh session: no entries, zero total, new session id
    pub fn reset(&mut self) {
        self.session_id = OrderSessionId::new();
        self.entries.clear();
        self.total_cost = 0;
    }

    pub fn session_id(&self) -> OrderSessionId {
        self.session_id
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Add the item at one-based `selection` from `items`
    ///
    /// Only `Added` changes the ledger.
    pub fn place_order(&mut self, canteen: Canteen, items: &[MenuItem], selection: i64) -> OrderOutcome {
        if selection == 0 {
            return OrderOutcome::Cancelled;
        }

        let item = match usize::try_from(selection) {
            Ok(n) if n >= 1 && n <= items.len() => &items[n - 1],
            _ => return OrderOutcome::InvalidSelection,
        };

        if self.is_full() {
            return OrderOutcome::Full;
        }

        let Some(total_cost) = self.total_cost.checked_add(item.price) else {
            return OrderOutcome::TotalOverflow;
        };

        let entry = OrderEntry::new(item.name.clone(), canteen.name(), item.price);
        self.total_cost = total_cost;
        self.entries.push(entry.clone());

        OrderOutcome::Added(entry)
    }

    /// Entries and their total
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            session_id: self.session_id,
            entries: self.entries.clone(),
            total_cost: self.total_cost,
        }
    }
}
