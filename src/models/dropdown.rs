//! Single-open dropdown group state.
//!
//! The UI invariant is that at most one dropdown in a group is ever open.
//! Keeping the whole group's state in one value (rather than a flag per
//! dropdown) makes that invariant structural.

/// Identifies one dropdown within the group.
pub type DropdownId = usize;

/// Tracks which dropdown in the group is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownGroup {
    open: Option<DropdownId>,
}

impl DropdownGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is the currently open dropdown.
    #[inline]
    pub fn is_open(&self, id: DropdownId) -> bool {
        self.open == Some(id)
    }

    /// Whether any dropdown in the group is open.
    #[inline]
    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }

    /// Toggle `id`: closes whatever else is open, then opens `id` if it
    /// was closed (clicking the open dropdown's trigger closes it).
    pub fn toggle(&mut self, id: DropdownId) {
        self.open = if self.is_open(id) { None } else { Some(id) };
    }

    /// Close every dropdown (outside click, Escape, or item selection).
    pub fn close_all(&mut self) {
        self.open = None;
    }
}
