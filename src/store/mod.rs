//! The state store
//!
//! `Store` is the single owner of the transaction, category and budget
//! collections and the only write path to them. Every change is a
//! [`Mutation`] passed to [`Store::dispatch`]; an applied mutation replaces
//! the affected collection with a new one, writes the whole snapshot to the
//! durable slot, then notifies subscribers.
//!
//! Writes are best-effort: a failing slot is logged and the mutation still
//! stands. Reads at startup fall back to the seed dataset when the slot is
//! empty or unreadable.

pub mod mutation;

pub use mutation::{Mutation, Outcome};

use log::{debug, error, warn};

use crate::models::{
    Budget, BudgetId, BudgetPatch, Category, CategoryId, CategoryPatch, Money, NewBudget,
    NewCategory, NewTransaction, Snapshot, Transaction, TransactionId, TransactionPatch,
};
use crate::storage::{seed_snapshot, MemorySlot, StateSlot};

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot)>;

/// Single-owner container for the three collections
pub struct Store {
    state: Snapshot,
    slot: Box<dyn StateSlot>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    /// Rehydrate from `slot`, or start from the seed dataset when it holds
    /// nothing readable
    pub fn open(slot: impl StateSlot + 'static) -> Self {
        let state = match slot.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                debug!("no persisted state found, starting from seed data");
                seed_snapshot()
            }
            Err(e) => {
                warn!("persisted state could not be read, starting from seed data: {}", e);
                seed_snapshot()
            }
        };

        Self {
            state,
            slot: Box::new(slot),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// A store over a fresh in-memory slot, seeded
    pub fn in_memory() -> Self {
        Self::open(MemorySlot::new())
    }

    /// Current snapshot
    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.state.budgets
    }

    /// Register a callback run with the new snapshot after each applied mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Apply a mutation
    pub fn dispatch(&mut self, mutation: Mutation) -> Outcome {
        let kind = mutation.kind();
        let outcome = self.apply(mutation);

        match outcome {
            Outcome::Applied => {
                debug!("applied {}", kind);
                self.persist();
                self.notify();
            }
            Outcome::NotFound => debug!("{} ignored: no such id", kind),
            Outcome::Protected => {}
        }

        outcome
    }

    fn apply(&mut self, mutation: Mutation) -> Outcome {
        match mutation {
            Mutation::AddTransaction(txn) => {
                self.state.transactions = appended(&self.state.transactions, txn);
                Outcome::Applied
            }
            Mutation::UpdateTransaction(id, patch) => {
                match updated(&self.state.transactions, |t| t.id == id, |t| patch.apply_to(t)) {
                    Some(next) => {
                        self.state.transactions = next;
                        Outcome::Applied
                    }
                    None => Outcome::NotFound,
                }
            }
            Mutation::DeleteTransaction(id) => {
                match removed(&self.state.transactions, |t| t.id == id) {
                    Some(next) => {
                        self.state.transactions = next;
                        Outcome::Applied
                    }
                    None => Outcome::NotFound,
                }
            }

            Mutation::AddCategory(category) => {
                self.state.categories = appended(&self.state.categories, category);
                Outcome::Applied
            }
            Mutation::UpdateCategory(id, patch) => {
                match updated(&self.state.categories, |c| c.id == id, |c| patch.apply_to(c)) {
                    Some(next) => {
                        self.state.categories = next;
                        Outcome::Applied
                    }
                    None => Outcome::NotFound,
                }
            }
            Mutation::DeleteCategory(id) => {
                if self
                    .find_category(&id)
                    .is_some_and(|category| category.is_reserved())
                {
                    warn!("refused to delete reserved category {}", id);
                    return Outcome::Protected;
                }
                // Transactions and budgets keep their embedded copy
                match removed(&self.state.categories, |c| c.id == id) {
                    Some(next) => {
                        self.state.categories = next;
                        Outcome::Applied
                    }
                    None => Outcome::NotFound,
                }
            }

            Mutation::AddBudget(mut budget) => {
                budget.spent = Money::zero();
                self.state.budgets = appended(&self.state.budgets, budget);
                Outcome::Applied
            }
            Mutation::UpdateBudget(id, patch) => {
                match updated(&self.state.budgets, |b| b.id == id, |b| patch.apply_to(b)) {
                    Some(next) => {
                        self.state.budgets = next;
                        Outcome::Applied
                    }
                    None => Outcome::NotFound,
                }
            }
            Mutation::DeleteBudget(id) => match removed(&self.state.budgets, |b| b.id == id) {
                Some(next) => {
                    self.state.budgets = next;
                    Outcome::Applied
                }
                None => Outcome::NotFound,
            },

            Mutation::Replace(snapshot) => {
                self.state = snapshot;
                Outcome::Applied
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.slot.save(&self.state) {
            error!("Failed to persist state: {}", e);
        }
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }

    // === Named operations ===

    /// Append a transaction under a freshly generated id
    pub fn add_transaction(&mut self, data: NewTransaction) -> TransactionId {
        let id = TransactionId::new();
        self.dispatch(Mutation::AddTransaction(data.into_transaction(id.clone())));
        id
    }

    pub fn update_transaction(&mut self, id: &TransactionId, patch: TransactionPatch) -> Outcome {
        self.dispatch(Mutation::UpdateTransaction(id.clone(), patch))
    }

    pub fn delete_transaction(&mut self, id: &TransactionId) -> Outcome {
        self.dispatch(Mutation::DeleteTransaction(id.clone()))
    }

    /// Append a category under a freshly generated id
    pub fn add_category(&mut self, data: NewCategory) -> CategoryId {
        let id = CategoryId::new();
        self.dispatch(Mutation::AddCategory(data.into_category(id.clone())));
        id
    }

    pub fn update_category(&mut self, id: &CategoryId, patch: CategoryPatch) -> Outcome {
        self.dispatch(Mutation::UpdateCategory(id.clone(), patch))
    }

    /// Remove a category. Does not cascade; the reserved "Income"
    /// category yields [`Outcome::Protected`].
    pub fn delete_category(&mut self, id: &CategoryId) -> Outcome {
        self.dispatch(Mutation::DeleteCategory(id.clone()))
    }

    /// Append a budget under a freshly generated id, with nothing spent
    pub fn add_budget(&mut self, data: NewBudget) -> BudgetId {
        let id = BudgetId::new();
        self.dispatch(Mutation::AddBudget(data.into_budget(id.clone())));
        id
    }

    pub fn update_budget(&mut self, id: &BudgetId, patch: BudgetPatch) -> Outcome {
        self.dispatch(Mutation::UpdateBudget(id.clone(), patch))
    }

    pub fn delete_budget(&mut self, id: &BudgetId) -> Outcome {
        self.dispatch(Mutation::DeleteBudget(id.clone()))
    }

    /// Swap in a whole new snapshot
    pub fn replace(&mut self, snapshot: Snapshot) -> Outcome {
        self.dispatch(Mutation::Replace(snapshot))
    }

    // === Lookups ===

    pub fn find_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.state.transactions.iter().find(|t| &t.id == id)
    }

    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        self.state.categories.iter().find(|c| &c.id == id)
    }

    /// Case-insensitive lookup by name
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        self.state.categories.iter().find(|c| c.has_name(name))
    }

    pub fn find_budget(&self, id: &BudgetId) -> Option<&Budget> {
        self.state.budgets.iter().find(|b| &b.id == id)
    }
}

fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

fn updated<T, P, F>(items: &[T], matches: P, merge: F) -> Option<Vec<T>>
where
    T: Clone,
    P: Fn(&T) -> bool,
    F: Fn(&T) -> T,
{
    if !items.iter().any(&matches) {
        return None;
    }
    Some(
        items
            .iter()
            .map(|item| if matches(item) { merge(item) } else { item.clone() })
            .collect(),
    )
}

fn removed<T, P>(items: &[T], matches: P) -> Option<Vec<T>>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    if !items.iter().any(&matches) {
        return None;
    }
    Some(items.iter().filter(|item| !matches(item)).cloned().collect())
}
