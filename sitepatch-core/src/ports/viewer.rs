// sitepatch-core/src/ports/viewer.rs

// What the pipeline needs from the host once the site is patched, without
// knowing which framework or browser does it.

use crate::error::SitePatchError;

pub trait DocsViewer {
    /// Rebuild the documentation site (host framework command).
    fn build_docs(&self) -> Result<(), SitePatchError>;

    /// Show the patched site to the operator.
    fn open_docs(&self) -> Result<(), SitePatchError>;
}
