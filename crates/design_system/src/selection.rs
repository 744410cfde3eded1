//! Active-item bookkeeping shared by the accordion and chip primitives.
//!
//! [`ToggleSet`] is a plain value: components keep one inside a component-scoped
//! signal and read its snapshot while rendering. It never validates ids against
//! the host's item list; reconciling stale ids after the item list changes is
//! the host's job.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How many items may be active at once.
pub enum SelectionMode {
    /// Any number of items may be active.
    Multiple,
    /// At most one item is active after every toggle.
    Exclusive,
}

impl Default for SelectionMode {
    fn default() -> Self {
        Self::Multiple
    }
}

impl SelectionMode {
    /// Maps an `exclusive` flag onto a mode.
    pub fn exclusive(exclusive: bool) -> Self {
        if exclusive {
            Self::Exclusive
        } else {
            Self::Multiple
        }
    }

    /// Maps an "allow multiple" / "multi select" prop onto a mode.
    pub fn from_allow_multiple(allow_multiple: bool) -> Self {
        Self::exclusive(!allow_multiple)
    }

    /// Returns `true` for [`SelectionMode::Exclusive`].
    pub fn is_exclusive(self) -> bool {
        matches!(self, Self::Exclusive)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Set of active item ids mutated only through [`ToggleSet::toggle`].
///
/// Ids are kept in the order they became active, so [`ToggleSet::snapshot`]
/// is deterministic. That order is unrelated to the host's item order.
pub struct ToggleSet {
    mode: SelectionMode,
    active: Vec<String>,
}

impl ToggleSet {
    /// Creates an empty set.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            active: Vec::new(),
        }
    }

    /// Creates a set seeded with `ids`.
    ///
    /// Duplicate ids are collapsed. In [`SelectionMode::Exclusive`] only the
    /// first seeded id is kept.
    pub fn with_active<I, S>(mode: SelectionMode, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut active: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !active.contains(&id) {
                active.push(id);
            }
        }
        if mode.is_exclusive() {
            active.truncate(1);
        }
        Self { mode, active }
    }

    /// Flips membership of `id`.
    ///
    /// A disabled toggle is a no-op and returns `false`. Otherwise the call is
    /// applied and returns `true`. Membership is read before anything changes;
    /// in exclusive mode every other id is then cleared, so toggling the only
    /// active id deactivates it and the set ends up empty.
    pub fn toggle(&mut self, id: &str, is_disabled: bool) -> bool {
        if is_disabled {
            return false;
        }

        let position = self.active.iter().position(|active| active == id);
        if self.mode.is_exclusive() {
            self.active.clear();
            if position.is_none() {
                self.active.push(id.to_string());
            }
            return true;
        }

        match position {
            Some(index) => {
                self.active.remove(index);
            }
            None => self.active.push(id.to_string()),
        }
        true
    }

    /// Returns whether `id` is currently active.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.iter().any(|active| active == id)
    }

    /// Borrowed view of the active ids.
    pub fn active_ids(&self) -> &[String] {
        &self.active
    }

    /// Owned copy of the active ids, as handed to selection callbacks.
    pub fn snapshot(&self) -> Vec<String> {
        self.active.clone()
    }

    /// Number of active ids.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` when nothing is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Mode fixed at construction.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }
}
