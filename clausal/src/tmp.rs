//! Scratch buffers shared by loading and pure literal elimination.
use clausal_formula::Lit;

/// Buffers reused between calls to avoid allocating per clause or per search step.
#[derive(Default)]
pub struct TmpData {
    /// Sorted literals of the clause being loaded, or the pure literals found in one pass.
    ///
    /// Contents are only meaningful within a single call.
    pub lits: Vec<Lit>,
    /// Occurrence marks indexed by [`Lit::code`].
    ///
    /// All false between calls. Has two entries per variable.
    pub flags: Vec<bool>,
}

impl TmpData {
    /// Update structures for a new variable count.
    pub fn set_var_count(&mut self, count: usize) {
        self.flags.resize(count * 2, false);
    }
}
