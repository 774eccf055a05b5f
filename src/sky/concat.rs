//! Read-only view over several slices laid end to end
//!
//! Indices of the view are mapped back to a part and a position within that
//! part on demand, so no combined copy is ever made. Each part carries a tag
//! telling the caller which source it came from.

/// Slices of `T` seen as one sequence, each tagged with a `K`
#[derive(Debug, Clone)]
pub struct Concatenation<'a, K, T> {
    parts: Vec<(K, &'a [T])>,
}

impl<'a, K: Copy, T> Concatenation<'a, K, T> {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append a part at the end of the view
    pub fn push(&mut self, tag: K, part: &'a [T]) {
        self.parts.push((tag, part));
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.parts.iter().map(|(_, part)| part.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|(_, part)| part.is_empty())
    }

    /// Tag of the part holding element `index`, and the element's position in it
    pub fn locate(&self, index: usize) -> Option<(K, usize)> {
        let mut local = index;
        for (tag, part) in &self.parts {
            if local < part.len() {
                return Some((*tag, local));
            }
            local -= part.len();
        }
        None
    }

    /// Element at `index` of the view
    pub fn get(&self, index: usize) -> Option<&'a T> {
        let mut local = index;
        for (_, part) in &self.parts {
            if local < part.len() {
                return Some(&part[local]);
            }
            local -= part.len();
        }
        None
    }

    /// Elements in view order
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.parts.iter().flat_map(|(_, part)| part.iter())
    }
}

impl<K: Copy, T> Default for Concatenation<'_, K, T> {
    fn default() -> Self {
        Self::new()
    }
}
