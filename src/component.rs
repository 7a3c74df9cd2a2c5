//! Composable project units.
//!
//! A [`Component`] is a tree node that belongs to a [`Project`]. It may be
//! attached directly under the project or under another node inside it.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::construct::{Construct, Node, NodeKind};
use crate::error::{ConstructError, Result};
use crate::project::Project;

/// Source of automatic component ids. Shared by all projects in the process.
static AUTO_ID_COUNTER: AtomicU64 = AtomicU64::new(1000);

fn next_auto_id() -> u64 {
    AUTO_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A unit of a project, backed by a node in the project's tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    node: Node,
}

impl Component {
    /// Create a component under `scope`.
    ///
    /// Without an explicit id one is generated as `Component#<n>`.
    pub fn new(scope: &dyn Construct, id: Option<&str>) -> Result<Self> {
        Self::with_type_name(scope, id, "Component")
    }

    /// Create a component whose automatic id is derived from `type_name`.
    pub(crate) fn with_type_name(
        scope: &dyn Construct,
        id: Option<&str>,
        type_name: &str,
    ) -> Result<Self> {
        let scope = scope.node();
        if Project::of(scope).is_none() {
            return Err(ConstructError::NotInProject {
                path: scope.display_path(),
            });
        }

        let id = match id {
            Some(id) => id.to_string(),
            None => format!("{}#{}", type_name, next_auto_id()),
        };
        let node = Node::attach(scope, &id, NodeKind::Component)?;
        log::debug!("Created component {}", node.display_path());
        Ok(Self { node })
    }

    /// Recover a component handle from a node created as a component.
    pub fn from_node(node: &Node) -> Option<Self> {
        (node.kind() == NodeKind::Component).then(|| Self { node: node.clone() })
    }

    /// The nearest enclosing project.
    ///
    /// `None` only once the project tree has been dropped.
    pub fn project(&self) -> Option<Project> {
        Project::of(&self.node)
    }
}

impl Construct for Component {
    fn node(&self) -> &Node {
        &self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectOptions;

    #[test]
    fn test_component_belongs_to_project() {
        let project = Project::new(ProjectOptions::new("root"));
        let component = Component::new(&project, Some("one")).unwrap();

        assert_eq!(component.node().path(), "one");
        assert_eq!(component.project(), Some(project.clone()));
        assert_eq!(project.components(), vec![component]);
    }

    #[test]
    fn test_auto_ids_are_unique() {
        let project = Project::new(ProjectOptions::new("root"));
        let a = Component::new(&project, None).unwrap();
        let b = Component::new(&project, None).unwrap();

        assert!(a.node().id().starts_with("Component#"));
        assert!(b.node().id().starts_with("Component#"));
        assert_ne!(a.node().id(), b.node().id());
    }

    #[test]
    fn test_nested_component_resolves_project() {
        let project = Project::new(ProjectOptions::new("root"));
        let outer = Component::new(&project, Some("outer")).unwrap();
        let inner = Component::new(&outer, Some("inner")).unwrap();

        assert_eq!(inner.node().path(), "outer/inner");
        assert_eq!(inner.project(), Some(project));
    }

    #[test]
    fn test_component_outside_project_fails() {
        let root = Node::root("");
        let err = Component::new(&root, Some("orphan")).unwrap_err();
        assert_eq!(
            err,
            ConstructError::NotInProject {
                path: "<root>".to_string()
            }
        );
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_from_node_only_for_components() {
        let project = Project::new(ProjectOptions::new("root"));
        let component = Component::new(&project, Some("c")).unwrap();
        let plain = Node::new(&project, "plain").unwrap();

        assert_eq!(Component::from_node(component.node()), Some(component));
        assert_eq!(Component::from_node(&plain), None);
        assert_eq!(Component::from_node(project.node()), None);
    }
}
