//! Projects: the roots of component trees and the registry of their components.
//!
//! A [`Project`] owns a construct tree. Every [`Component`] created under it
//! (directly or nested) is enumerable through [`Project::components`], which
//! is what interface lookups search.

pub mod options;

use serde_json::Value;

use crate::component::Component;
use crate::construct::{Construct, Node, NodeKind};
use crate::error::Result;

pub use options::ProjectOptions;

/// Context key holding the project name.
pub const PROJECT_NAME_CONTEXT_KEY: &str = "project:name";

/// Context key holding the project output directory.
pub const PROJECT_OUTDIR_CONTEXT_KEY: &str = "project:outdir";

/// A project and the tree of components it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    node: Node,
}

impl Project {
    /// Create a root project.
    ///
    /// Options are taken as given. Only options loaded through
    /// [`ProjectOptions::from_yaml_str`], [`ProjectOptions::from_json_str`]
    /// or [`ProjectOptions::from_file`] are validated; call
    /// [`ProjectOptions::validate`] first for hand-built options.
    pub fn new(options: ProjectOptions) -> Self {
        let node = Node::detached(String::new(), NodeKind::Project);
        let project = Self { node };
        project.store_options(&options);
        log::debug!("Created project '{}'", options.name);
        project
    }

    /// Create a project nested under `parent`.
    pub fn subproject(parent: &Project, options: ProjectOptions) -> Result<Self> {
        let id = format!("Project#{}#{}", options.name, options.outdir);
        let node = Node::attach(&parent.node, &id, NodeKind::Project)?;
        let project = Self { node };
        project.store_options(&options);
        log::debug!(
            "Created subproject '{}' under '{}'",
            options.name,
            parent.name()
        );
        Ok(project)
    }

    // Freshly created nodes have no children, so context can always be set.
    fn store_options(&self, options: &ProjectOptions) {
        for (key, value) in [
            (PROJECT_NAME_CONTEXT_KEY, &options.name),
            (PROJECT_OUTDIR_CONTEXT_KEY, &options.outdir),
        ] {
            if let Err(e) = self.node.set_context(key, Value::String(value.clone())) {
                log::warn!("Failed to record project option {}: {}", key, e);
            }
        }
    }

    /// The nearest project enclosing `construct`, including itself.
    pub fn of(construct: &dyn Construct) -> Option<Project> {
        let mut current = Some(construct.node().clone());
        while let Some(node) = current {
            if node.kind() == NodeKind::Project {
                return Some(Self { node });
            }
            current = node.parent();
        }
        None
    }

    /// Project name.
    pub fn name(&self) -> String {
        self.context_string(PROJECT_NAME_CONTEXT_KEY)
    }

    /// Output directory, relative to the parent project if nested.
    pub fn outdir(&self) -> String {
        self.context_string(PROJECT_OUTDIR_CONTEXT_KEY)
    }

    /// The options this project was created with.
    pub fn options(&self) -> ProjectOptions {
        ProjectOptions::new(self.name()).with_outdir(self.outdir())
    }

    fn context_string(&self, key: &str) -> String {
        self.node
            .try_get_context(key)
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default()
    }

    /// The enclosing project, if this is a subproject.
    pub fn parent(&self) -> Option<Project> {
        self.node.parent().and_then(|p| Project::of(&p))
    }

    /// Every component owned by this project, in tree order.
    ///
    /// Components that belong to a subproject are not included.
    pub fn components(&self) -> Vec<Component> {
        self.node
            .find_all()
            .iter()
            .filter_map(Component::from_node)
            .filter(|c| c.project().as_ref() == Some(self))
            .collect()
    }

    /// Projects nested directly under this one.
    pub fn subprojects(&self) -> Vec<Project> {
        self.node
            .find_all()
            .into_iter()
            .skip(1)
            .filter(|n| n.kind() == NodeKind::Project)
            .map(|node| Self { node })
            .filter(|p| p.parent().as_ref() == Some(self))
            .collect()
    }

    /// First component matching `predicate`.
    pub fn find_component<F>(&self, predicate: F) -> Option<Component>
    where
        F: Fn(&Component) -> bool,
    {
        self.components().into_iter().find(|c| predicate(c))
    }

    /// All components matching `predicate`, in component order.
    pub fn filter_components<F>(&self, predicate: F) -> Vec<Component>
    where
        F: Fn(&Component) -> bool,
    {
        self.components()
            .into_iter()
            .filter(|c| predicate(c))
            .collect()
    }
}

impl Construct for Project {
    fn node(&self) -> &Node {
        &self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_options_round_trip_through_context() {
        let project = Project::new(ProjectOptions::new("root").with_outdir("out"));
        assert_eq!(project.name(), "root");
        assert_eq!(project.outdir(), "out");
        assert_eq!(
            project.options(),
            ProjectOptions::new("root").with_outdir("out")
        );
        assert!(project.parent().is_none());
    }

    #[test]
    fn test_hand_built_options_are_not_validated() {
        let options = ProjectOptions::new("");
        assert!(options.validate().is_err());

        let project = Project::new(options);
        assert_eq!(project.name(), "");
        assert_eq!(project.outdir(), ".");
    }

    #[test]
    fn test_project_of_walks_up() {
        let project = Project::new(ProjectOptions::new("root"));
        let plain = Node::new(&project, "plain").unwrap();
        let deep = Node::new(&plain, "deep").unwrap();

        assert_eq!(Project::of(&project), Some(project.clone()));
        assert_eq!(Project::of(&deep), Some(project));
        assert_eq!(Project::of(&Node::root("")), None);
    }

    #[test]
    fn test_components_in_construction_order() {
        let project = Project::new(ProjectOptions::new("root"));
        let a = Component::new(&project, Some("a")).unwrap();
        Node::new(&project, "not-a-component").unwrap();
        let b = Component::new(&project, Some("b")).unwrap();
        let a_child = Component::new(&a, Some("child")).unwrap();

        assert_eq!(project.components(), vec![a, a_child, b]);
    }

    #[test]
    fn test_subproject_components_are_separate() {
        let parent = Project::new(ProjectOptions::new("parent"));
        let own = Component::new(&parent, Some("own")).unwrap();
        let child_options = ProjectOptions::new("child").with_outdir("packages/child");
        let child = Project::subproject(&parent, child_options).unwrap();
        let nested = Component::new(&child, Some("nested")).unwrap();

        assert_eq!(parent.components(), vec![own]);
        assert_eq!(child.components(), vec![nested]);
        assert_eq!(parent.subprojects(), vec![child.clone()]);
        assert_eq!(child.parent(), Some(parent));
        assert_eq!(child.name(), "child");
        assert_eq!(child.node().id(), "Project#child#packages--child");
    }

    #[test]
    fn test_find_and_filter_components() {
        let project = Project::new(ProjectOptions::new("root"));
        let first = Component::new(&project, Some("first")).unwrap();
        let second = Component::new(&project, Some("second")).unwrap();

        let found = project.find_component(|c| c.node().id().starts_with('s'));
        assert_eq!(found, Some(second.clone()));
        assert_eq!(project.find_component(|_| false), None);
        assert_eq!(
            project.filter_components(|c| c.node().id().len() > 1),
            vec![first, second]
        );
    }
}
