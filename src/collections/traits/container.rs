/// The operations shared by every container, regardless of how it stores its elements.
///
/// Most containers also provide these as inherent methods, the trait exists so that code can be
/// written over containers in general.
pub trait Container {
    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and drops every element in the container.
    fn clear(&mut self);
}
