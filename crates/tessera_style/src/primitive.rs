//! Rendering primitives wrapped by styled components

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::input::FlatStyle;

/// Shared handle slot filled in by a primitive when it mounts
///
/// Clones share storage: a caller keeps one clone and passes another down
/// through the styled wrapper.
pub struct NodeRef<H> {
    storage: Rc<RefCell<Option<H>>>,
}

impl<H> NodeRef<H> {
    pub fn new() -> Self {
        Self {
            storage: Rc::new(RefCell::new(None)),
        }
    }

    /// Store the mounted handle
    pub fn set(&self, handle: H) {
        *self.storage.borrow_mut() = Some(handle);
    }

    pub fn is_set(&self) -> bool {
        self.storage.borrow().is_some()
    }

    /// Whether both refs share the same storage
    pub fn ptr_eq(&self, other: &NodeRef<H>) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl<H: Clone> NodeRef<H> {
    pub fn get(&self) -> Option<H> {
        self.storage.borrow().clone()
    }
}

impl<H> Clone for NodeRef<H> {
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
        }
    }
}

impl<H> Default for NodeRef<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for NodeRef<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("set", &self.is_set()).finish()
    }
}

/// A base rendering primitive (`View`, `Text`, `Pressable`, ...)
///
/// Implemented by the host. Styled components call [`render`](Self::render)
/// with resolved styles and forward the caller's ref unchanged.
pub trait Primitive {
    /// The primitive's own props, compared shallowly for re-render skipping
    type Props: Clone + PartialEq;
    /// What a ref to the mounted primitive holds
    type Handle;
    /// Rendered output
    type Node: Clone;

    fn display_name(&self) -> &str;

    fn render(
        &self,
        props: &Self::Props,
        style: &FlatStyle,
        node_ref: Option<&NodeRef<Self::Handle>>,
    ) -> Self::Node;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_handle() {
        let node_ref = NodeRef::<u32>::new();
        let forwarded = node_ref.clone();
        assert!(!node_ref.is_set());
        forwarded.set(7);
        assert_eq!(node_ref.get(), Some(7));
        assert!(node_ref.ptr_eq(&forwarded));
        assert!(!node_ref.ptr_eq(&NodeRef::new()));
    }
}
