// Rule priorities: static table, base fallback and resolver.
//
// When two rules match overlapping text, the match of the rule with the
// higher priority is reported. Priorities are plain signed integers; zero is
// the baseline and negative values rank below it.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

/// Execution priority of a rule. Higher wins.
pub type Priority = i32;

/// Priority used when neither the table nor the fallback knows an identifier.
pub const DEFAULT_PRIORITY: Priority = 0;

// ---------------------------------------------------------------------------
// PriorityTable
// ---------------------------------------------------------------------------

/// Immutable mapping from rule identifier to priority.
///
/// Built once from a static entry list and never modified afterwards.
#[derive(Clone, Default)]
pub struct PriorityTable {
    entries: HashMap<&'static str, Priority>,
}

impl PriorityTable {
    /// Build a table from `(rule_id, priority)` pairs.
    ///
    /// Identifiers must be unique; a repeated identifier is a bug in the
    /// declaring profile (checked in debug builds).
    pub fn new(entries: &[(&'static str, Priority)]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for &(id, priority) in entries {
            let previous = map.insert(id, priority);
            debug_assert!(previous.is_none(), "duplicate priority entry for {id}");
        }
        Self { entries: map }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, rule_id: &str) -> Option<Priority> {
        self.entries.get(rule_id).copied()
    }

    /// Number of identifiers in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(rule_id, priority)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Priority)> + '_ {
        self.entries.iter().map(|(&id, &p)| (id, p))
    }
}

impl fmt::Debug for PriorityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Default-priority capability of the base profile.
///
/// Consulted for identifiers a language's own table does not list.
/// Returning `None` means "no opinion" and resolves to [`DEFAULT_PRIORITY`].
pub trait PriorityFallback: Send + Sync {
    fn priority_for_id(&self, id: &str) -> Option<Priority>;
}

/// Base priorities shared by every language, keyed by rule or category id.
#[derive(Debug, Clone, Default)]
pub struct BasePriorities {
    table: PriorityTable,
}

impl BasePriorities {
    /// Base priorities with no entries: every lookup falls through to 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Base priorities backed by the given entries.
    pub fn from_entries(entries: &[(&'static str, Priority)]) -> Self {
        Self {
            table: PriorityTable::new(entries),
        }
    }
}

impl PriorityFallback for BasePriorities {
    fn priority_for_id(&self, id: &str) -> Option<Priority> {
        self.table.get(id)
    }
}

// ---------------------------------------------------------------------------
// PriorityResolver
// ---------------------------------------------------------------------------

/// Resolves rule priorities: own table first, then the base fallback, then 0.
///
/// Pure and lock-free; safe to share between threads.
#[derive(Clone)]
pub struct PriorityResolver {
    table: PriorityTable,
    fallback: Arc<dyn PriorityFallback>,
}

impl PriorityResolver {
    pub fn new(table: PriorityTable, fallback: Arc<dyn PriorityFallback>) -> Self {
        Self { table, fallback }
    }

    /// Resolver with the given table and an empty base.
    pub fn with_table(table: PriorityTable) -> Self {
        Self::new(table, Arc::new(BasePriorities::empty()))
    }

    /// Replace the base fallback, keeping the table.
    pub fn set_fallback(&mut self, fallback: Arc<dyn PriorityFallback>) {
        self.fallback = fallback;
    }

    /// Priority of `rule_id`. Total: unknown identifiers are not an error.
    pub fn priority_of(&self, rule_id: &str) -> Priority {
        self.table
            .get(rule_id)
            .or_else(|| self.fallback.priority_for_id(rule_id))
            .unwrap_or(DEFAULT_PRIORITY)
    }

    /// Priority of a rule taking its category into account.
    ///
    /// A non-zero priority for the rule itself takes precedence; otherwise the
    /// category's priority applies.
    pub fn rule_priority(&self, rule_id: &str, category_id: &str) -> Priority {
        match self.priority_of(rule_id) {
            DEFAULT_PRIORITY => self.priority_of(category_id),
            p => p,
        }
    }

    /// The language's own table, without the fallback.
    pub fn table(&self) -> &PriorityTable {
        &self.table
    }
}

impl fmt::Debug for PriorityResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityResolver")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
