//! Configuration constants.

/// Artifact name under which the scanning task persists its broken-link pairs.
pub const BROKEN_LINKS_ARTIFACT: &str = "BrokenLinks";

/// Artifact name under which a failed task persists its error text.
pub const ERROR_ARTIFACT: &str = "Error";

/// File name of the task status record inside a task directory.
pub const STATUS_FILE: &str = "status.json";

/// Upper bound on the ancestor-chain walk.
///
/// A well-formed course tree is a handful of levels deep (course, section,
/// subsection, unit, leaf). The bound exists to stop a pathological parent
/// chain, not to constrain real content.
pub const MAX_ANCESTOR_DEPTH: usize = 64;

/// Status code reported when no task status record exists yet.
pub const STATUS_NO_TASK: i32 = 0;

/// Status code reported once the link check has succeeded.
pub const STATUS_SUCCEEDED: i32 = 3;

/// Highest in-progress status code (second and later stages all report 2).
pub const STATUS_MAX_IN_PROGRESS: i32 = 2;

/// Lowest (worst) failure status code; failures clamp at stage -2.
pub const STATUS_MIN_FAILED: i32 = -2;
