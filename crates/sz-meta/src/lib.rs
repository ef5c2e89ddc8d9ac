//! Page metadata and layout collaborators for soulzip.
//!
//! The archive core treats everything in this crate as an external
//! collaborator: it calls through the [`MetadataProvider`] trait and copies
//! the results into the seed manifest without interpreting them.
//!
//! Two collaborators live here:
//! - Filename-derived page metadata ([`PageMetadata`]), parsed best-effort
//!   from the `publication_date_pageN.ext` naming convention.
//! - The layout archetype dictionary ([`LayoutStore`]), an explicit handle
//!   with a load/save lifecycle, consumed by the placeholder layout analyzer
//!   in [`ArchetypeProvider`].

pub mod error;
pub mod layout;
pub mod page;
pub mod provider;

pub use error::{MetaError, Result};
pub use layout::{LayoutDictionary, LayoutStore};
pub use page::{PageMetadata, UNKNOWN};
pub use provider::{ArchetypeProvider, MetadataProvider};
