//! Interface components: tag-based, discoverable interface implementations.
//!
//! A marker type implements [`InterfaceComponent`] and names itself through
//! [`InterfaceComponent::NAME`]. Any construct can then be found as "the
//! implementer of that interface", whether it was built as the marker type
//! itself or was declared an implementer afterwards with
//! [`InterfaceComponent::register`]. One construct may implement several
//! unrelated interfaces at once.
//!
//! Membership is recorded as `("interface", NAME)` metadata on the node and
//! tested by exact name only. It does not follow type composition: a marker
//! that reuses another marker's body is not an implementer of that other
//! marker unless registered for it explicitly.
//!
//! ```
//! use interface_component::construct::{Construct, Node};
//! use interface_component::component::Component;
//! use interface_component::interface::InterfaceComponent;
//! use interface_component::project::{Project, ProjectOptions};
//!
//! struct Foo {
//!     component: Component,
//! }
//!
//! impl InterfaceComponent for Foo {
//!     const NAME: &'static str = "Foo";
//! }
//!
//! impl Construct for Foo {
//!     fn node(&self) -> &Node {
//!         self.component.node()
//!     }
//! }
//!
//! let project = Project::new(ProjectOptions::new("root"));
//! let foo = Foo { component: Foo::create(&project).unwrap() };
//! assert!(Foo::test(&foo));
//!
//! let other = Component::new(&project, Some("other")).unwrap();
//! assert!(!Foo::test(&other));
//! Foo::register(&other);
//! assert!(Foo::test(&other));
//! ```

use crate::component::Component;
use crate::construct::{Construct, Node};
use crate::error::Result;
use crate::project::Project;

/// Metadata entry type used for interface tags.
pub const INTERFACE_METADATA_TYPE: &str = "interface";

/// A named interface that constructs can be discovered by.
///
/// Repeated registration is not deduplicated: every call appends another
/// entry. Membership is unaffected.
pub trait InterfaceComponent {
    /// Exact name recorded in, and matched against, interface tags.
    const NAME: &'static str;

    /// Create the component backing a new instance of this marker type.
    ///
    /// The returned component is already tagged with [`Self::NAME`].
    fn create(scope: &dyn Construct) -> Result<Component> {
        Self::create_with_id(scope, None)
    }

    /// Like [`create`](Self::create), with an explicit id.
    fn create_with_id(scope: &dyn Construct, id: Option<&str>) -> Result<Component> {
        let component = Component::with_type_name(scope, id, Self::NAME)?;
        tag(component.node(), Self::NAME);
        Ok(component)
    }

    /// Mark `implementer` as an implementation of this interface.
    fn register(implementer: &dyn Construct) {
        tag(implementer.node(), Self::NAME);
    }

    /// Whether `candidate` is tagged as an implementation of this interface.
    fn test(candidate: &dyn Construct) -> bool {
        is_tagged(candidate.node(), Self::NAME)
    }

    /// The first component of `project` implementing this interface.
    fn of(project: &Project) -> Option<Component> {
        project.find_component(|c| Self::test(c))
    }

    /// Every component of `project` implementing this interface.
    fn all_of(project: &Project) -> Vec<Component> {
        project.filter_components(|c| Self::test(c))
    }
}

fn tag(node: &Node, name: &str) {
    node.add_metadata(INTERFACE_METADATA_TYPE, name);
    log::debug!(
        "Registered {} as an implementation of interface '{}'",
        node.display_path(),
        name
    );
}

fn is_tagged(node: &Node, name: &str) -> bool {
    node.has_metadata(INTERFACE_METADATA_TYPE, name)
}

/// Whether `candidate` implements the interface `M`.
pub fn implements<M: InterfaceComponent>(candidate: &dyn Construct) -> bool {
    M::test(candidate)
}

/// Names of all interfaces `candidate` is tagged with, in tag order.
pub fn interfaces_of(candidate: &dyn Construct) -> Vec<String> {
    candidate.node().metadata_of_type(INTERFACE_METADATA_TYPE)
}
