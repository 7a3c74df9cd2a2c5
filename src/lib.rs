//! # Interface Component
//!
//! Discoverable interface implementations for components in a construct tree.
//!
//! A project is the root of a tree of composable components. Some components
//! play named roles ("interfaces") that other code needs to find, e.g. "the
//! component that manages the package manifest". Those roles are declared
//! with [`InterfaceComponent`]: a component built as a marker type is tagged
//! with the marker's name, and any other construct can be declared an
//! implementer later. Lookups then ask the project for the component carrying
//! the tag, independent of how that component was built.
//!
//! - [`construct`]: the tree, node metadata and context
//! - [`component`]: project-owned units
//! - [`project`]: project roots, options and component enumeration
//! - [`interface`]: interface tagging and membership tests

pub mod component;
pub mod construct;
pub mod error;
pub mod interface;
pub mod project;

pub use component::Component;
pub use construct::{Construct, MetadataEntry, Node};
pub use error::{ConfigError, ConstructError, Result};
pub use interface::{implements, interfaces_of, InterfaceComponent, INTERFACE_METADATA_TYPE};
pub use project::{Project, ProjectOptions};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
