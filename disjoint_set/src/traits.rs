use crate::error::Error;

// All disjoint-set variants must implement the following trait
pub trait DisjointSet {
    // Number of elements in the fixed universe
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Number of components currently in the partition
    fn count(&self) -> usize;

    // Merge the components containing p and q
    fn union(&mut self, p: usize, q: usize) -> Result<(), Error>;

    // True iff p and q are in the same component. Takes `&mut self` because
    // the weighted variant compresses paths while answering; observable
    // answers never depend on it.
    fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error>;
}
