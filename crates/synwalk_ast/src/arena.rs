//! Arena allocator for syntax tree nodes.
//!
//! Uses `bumpalo` for bump allocation. A front-end allocates every node,
//! spelling, and child slice of one translation unit in the same arena,
//! and the whole tree is freed at once when the arena is dropped.

use bumpalo::Bump;

/// Arena owning the memory of one ingested syntax tree.
///
/// The visitor engine never allocates tree memory of its own; handles
/// borrow from this arena and stay valid for its lifetime.
///
/// # Example
///
/// ```rust
/// use synwalk_ast::TreeArena;
///
/// let arena = TreeArena::new();
/// let spelling = arena.alloc_str("foo");
/// assert_eq!(spelling, "foo");
/// ```
pub struct TreeArena {
    bump: Bump,
}

impl TreeArena {
    /// Creates a new empty arena.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity in bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Resets the arena, invalidating all allocated objects.
    ///
    /// Note: this does NOT call `Drop` for allocated objects.
    #[inline]
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_value() {
        let arena = TreeArena::new();
        let value = arena.alloc(7u32);
        assert_eq!(*value, 7);
    }

    #[test]
    fn alloc_str_and_slice() {
        let arena = TreeArena::new();
        let s = arena.alloc_str("namespace");
        assert_eq!(s, "namespace");
        let slice = arena.alloc_slice_copy(&[1, 2, 3]);
        assert_eq!(slice, &[1, 2, 3]);
    }

    #[test]
    fn reset_allows_reuse() {
        let mut arena = TreeArena::new();
        let _ = arena.alloc(1u64);
        arena.reset();
        let v = arena.alloc(2u64);
        assert_eq!(*v, 2);
    }
}
