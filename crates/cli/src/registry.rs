use crate::errors::ShellError;
use dnastrand::Strand;
use log::debug;
use std::slice;

/// Indexed collection of the strands a shell session works on.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Strand>,
    /// Number of strands supplied by the most recent `insert_batch`.
    last_batch: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_batch(&self) -> usize {
        self.last_batch
    }

    pub fn iter(&self) -> slice::Iter<'_, Strand> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Strand, ShellError> {
        let len = self.len();
        self.entries
            .get(index)
            .ok_or(ShellError::NoSuchEntry { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Strand, ShellError> {
        let len = self.len();
        self.entries
            .get_mut(index)
            .ok_or(ShellError::NoSuchEntry { index, len })
    }

    /// Append `strands`, followed by one empty strand.
    pub fn insert_batch(&mut self, strands: Vec<Strand>) {
        self.last_batch = strands.len();
        self.entries.extend(strands);
        self.entries.push(Strand::new());
        debug!(
            "registry grew by {} to {} entries",
            self.last_batch + 1,
            self.len()
        );
    }

    pub fn remove(&mut self, index: usize) -> Result<Strand, ShellError> {
        self.get(index)?;
        Ok(self.entries.remove(index))
    }

    /// Exchange the contents of two entries. `first == second` is a no-op.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), ShellError> {
        self.get(first)?;
        self.get(second)?;
        self.entries.swap(first, second);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
