//! Restage - WebXR project restructuring tool
//!
//! Restage takes a flat legacy WebXR project (campus tour components,
//! WebXR samples media) and scaffolds the deployment layout a static host
//! expects: `public/` for media, `src/` for scripts, `docs/` for generated
//! documentation, plus the package and deployment descriptors.
//!
//! Every step is idempotent and missing legacy sources are skipped, so the
//! tool can be re-run on a partially migrated tree at any time.

pub mod descriptors;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod restructure;
pub mod templates;

// Re-exports for convenience
pub use descriptors::{DeployDescriptor, PackageDescriptor};
pub use error::{RestageError, RestageResult};
pub use manifest::{CopySet, MediaSource, DIRECTORY_PLAN, LEGACY_DIRS, MEDIA_SOURCES};
pub use restructure::{CopyOutcome, Restructurer, RunReport};
