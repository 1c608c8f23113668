pub mod delta;
pub mod pipeline;
pub mod site;
pub mod util;

pub const TOOL_NAME: &str = "scorecard";

/// Version of the external `assay` scanner the pipeline is pinned to.
/// Bumped deliberately so score movements reflect repository changes,
/// not silent tool drift.
pub const ASSAY_VERSION: &str = "1.5.3";

/// Public URL the static site is served from.
pub const SITE_URL: &str = "https://haserjian.github.io/assay-scorecard";
