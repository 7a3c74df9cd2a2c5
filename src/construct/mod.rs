//! Construct tree: nodes, parent/child composition and per-node metadata.
//!
//! A [`Node`] is a cheap, reference-counted handle. Cloning it yields another
//! handle to the same tree element, and equality is identity. Parents own
//! their children; children only hold a weak link back up, so the whole tree
//! lives exactly as long as its root.
//!
//! ```
//! use interface_component::construct::Node;
//!
//! let root = Node::root("");
//! let child = Node::new(&root, "child").unwrap();
//! child.add_metadata("note", "hello");
//!
//! assert_eq!(child.path(), "child");
//! assert!(child.has_metadata("note", "hello"));
//! ```

pub mod metadata;

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use serde_json::Value;

use crate::component::Component;
use crate::error::{ConstructError, Result};
use crate::project::Project;

pub use metadata::MetadataEntry;

/// Separator between ids in a node path.
pub const PATH_SEP: &str = "/";

/// What a node was created as. Lets projects recover typed handles from a
/// plain tree walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Plain,
    Project,
    Component,
}

struct NodeInner {
    id: String,
    kind: NodeKind,
    parent: Option<Weak<NodeInner>>,
    children: RefCell<Vec<Node>>,
    metadata: RefCell<Vec<MetadataEntry>>,
    context: RefCell<HashMap<String, Value>>,
}

/// Anything that is backed by a node in the construct tree.
pub trait Construct {
    /// The tree node backing this value.
    fn node(&self) -> &Node;
}

/// Handle to an element of the construct tree.
#[derive(Clone)]
pub struct Node {
    inner: Rc<NodeInner>,
}

impl Node {
    /// Create a parentless root node. Only roots may have an empty id.
    pub fn root(id: impl Into<String>) -> Self {
        Self::detached(sanitize_id(&id.into()), NodeKind::Plain)
    }

    /// Create a node as a child of `scope`.
    pub fn new(scope: &dyn Construct, id: &str) -> Result<Self> {
        Self::attach(scope.node(), id, NodeKind::Plain)
    }

    pub(crate) fn detached(id: String, kind: NodeKind) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                id,
                kind,
                parent: None,
                children: RefCell::new(Vec::new()),
                metadata: RefCell::new(Vec::new()),
                context: RefCell::new(HashMap::new()),
            }),
        }
    }

    pub(crate) fn attach(scope: &Node, id: &str, kind: NodeKind) -> Result<Self> {
        let id = sanitize_id(id);
        if id.is_empty() {
            return Err(ConstructError::EmptyId {
                scope: scope.display_path(),
            });
        }
        if scope.try_find_child(&id).is_some() {
            return Err(ConstructError::DuplicateId {
                id,
                scope: scope.display_path(),
            });
        }

        let node = Self {
            inner: Rc::new(NodeInner {
                id,
                kind,
                parent: Some(Rc::downgrade(&scope.inner)),
                children: RefCell::new(Vec::new()),
                metadata: RefCell::new(Vec::new()),
                context: RefCell::new(HashMap::new()),
            }),
        };
        scope.inner.children.borrow_mut().push(node.clone());
        Ok(node)
    }

    pub(crate) fn kind(&self) -> NodeKind {
        self.inner.kind
    }

    /// The id of this node within its parent.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Ids from the first child of the root down to this node, joined by `/`.
    /// The root itself has an empty path.
    pub fn path(&self) -> String {
        self.scopes()
            .iter()
            .skip(1)
            .map(|n| n.id().to_string())
            .collect::<Vec<_>>()
            .join(PATH_SEP)
    }

    /// Path suitable for messages: `<root>` instead of an empty string.
    pub fn display_path(&self) -> String {
        let path = self.path();
        if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        }
    }

    /// The parent node, if this is not a root and the tree is still alive.
    pub fn parent(&self) -> Option<Node> {
        self.inner
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| Node { inner })
    }

    /// All nodes from the root down to and including this one.
    pub fn scopes(&self) -> Vec<Node> {
        let mut scopes = vec![self.clone()];
        let mut current = self.parent();
        while let Some(node) = current {
            current = node.parent();
            scopes.push(node);
        }
        scopes.reverse();
        scopes
    }

    /// The root of the tree this node belongs to.
    pub fn root_node(&self) -> Node {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> Vec<Node> {
        self.inner.children.borrow().clone()
    }

    /// Look up a direct child by id.
    pub fn try_find_child(&self, id: &str) -> Option<Node> {
        self.inner
            .children
            .borrow()
            .iter()
            .find(|c| c.id() == id)
            .cloned()
    }

    /// This node and all descendants, pre-order.
    pub fn find_all(&self) -> Vec<Node> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<Node>) {
        out.push(self.clone());
        for child in self.inner.children.borrow().iter() {
            child.collect_into(out);
        }
    }

    /// Append a metadata entry. Entries are never removed or rewritten.
    pub fn add_metadata(&self, entry_type: impl Into<String>, data: impl Into<String>) {
        self.inner
            .metadata
            .borrow_mut()
            .push(MetadataEntry::new(entry_type, data));
    }

    /// Snapshot of the metadata sequence in insertion order.
    pub fn metadata(&self) -> Vec<MetadataEntry> {
        self.inner.metadata.borrow().clone()
    }

    /// Whether at least one entry matches `(entry_type, data)` exactly.
    pub fn has_metadata(&self, entry_type: &str, data: &str) -> bool {
        self.inner
            .metadata
            .borrow()
            .iter()
            .any(|e| e.matches(entry_type, data))
    }

    /// Data of every entry of the given type, in insertion order.
    pub fn metadata_of_type(&self, entry_type: &str) -> Vec<String> {
        self.inner
            .metadata
            .borrow()
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .map(|e| e.data.clone())
            .collect()
    }

    /// Set a context value visible to this node and its descendants.
    pub fn set_context(&self, key: impl Into<String>, value: Value) -> Result<()> {
        if !self.inner.children.borrow().is_empty() {
            return Err(ConstructError::ContextAfterChildren {
                path: self.display_path(),
            });
        }
        self.inner.context.borrow_mut().insert(key.into(), value);
        Ok(())
    }

    /// Look up a context value on this node or the nearest scope that has it.
    pub fn try_get_context(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.inner.context.borrow().get(key) {
            return Some(value.clone());
        }
        self.parent().and_then(|p| p.try_get_context(key))
    }
}

impl Construct for Node {
    fn node(&self) -> &Node {
        self
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("path", &self.display_path())
            .field("kind", &self.inner.kind)
            .field("metadata", &*self.inner.metadata.borrow())
            .finish()
    }
}

fn sanitize_id(id: &str) -> String {
    id.replace(PATH_SEP, "--")
}

/// Resolve a type-erased value to its tree node.
///
/// Only the crate's own handles and boxed or shared `dyn Construct` objects
/// are recognised. A user type implementing [`Construct`] is not visible
/// through `&dyn Any`; box it as `Box<dyn Construct>` or call
/// [`Construct::node`] directly.
pub fn as_construct(value: &dyn Any) -> Option<&Node> {
    if let Some(node) = value.downcast_ref::<Node>() {
        return Some(node);
    }
    if let Some(component) = value.downcast_ref::<Component>() {
        return Some(component.node());
    }
    if let Some(project) = value.downcast_ref::<Project>() {
        return Some(project.node());
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Construct>>() {
        return Some(boxed.node());
    }
    if let Some(shared) = value.downcast_ref::<Rc<dyn Construct>>() {
        return Some(shared.node());
    }
    None
}

/// Whether a type-erased value is one of the constructs [`as_construct`] recognises.
pub fn is_construct(value: &dyn Any) -> bool {
    as_construct(value).is_some()
}
