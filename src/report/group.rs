//! Benchmark group and display label resolution

use super::error::ReportError;
use regex::Regex;
use std::sync::OnceLock;

/// Group used for every record when no groups are configured
pub const DEFAULT_GROUP: &str = "default_group";

/// Prefix `go test` puts on every benchmark function name
const BENCHMARK_PREFIX: &str = "Benchmark";

/// Trailing `-<GOMAXPROCS>` suffix (cached for performance)
static PARALLELISM_SUFFIX_RE: OnceLock<Regex> = OnceLock::new();

fn parallelism_suffix_re() -> &'static Regex {
    PARALLELISM_SUFFIX_RE.get_or_init(|| {
        // Pattern is a literal and always compiles
        Regex::new(r"-\d+$").expect("parallelism suffix regex is valid")
    })
}

/// Group and label a benchmark identifier resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Group name
    pub group: String,
    /// Short lower-case display label
    pub label: String,
}

/// Maps benchmark identifiers to (group, label) pairs
///
/// With configured groups the first group (in configuration order) that
/// occurs in the identifier wins, so overlapping names such as `Map` and
/// `HashMap` must be listed most specific first.
///
/// # Examples
///
/// ```
/// use benchgraph::report::{GroupResolver, DEFAULT_GROUP};
///
/// let resolver = GroupResolver::new(vec!["GroupA".to_string()]);
/// let resolved = resolver.resolve("BenchmarkGroupAFoo-4")?;
/// assert_eq!(resolved.group, "GroupA");
/// assert_eq!(resolved.label, "foo");
///
/// let implicit = GroupResolver::default().resolve("BenchmarkFibonacciLoop-8")?;
/// assert_eq!(implicit.group, DEFAULT_GROUP);
/// assert_eq!(implicit.label, "fibonacciloop");
/// # Ok::<(), benchgraph::report::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupResolver {
    groups: Vec<String>,
}

impl GroupResolver {
    /// Create a resolver for the given ordered group names
    pub fn new(groups: Vec<String>) -> Self {
        Self { groups }
    }

    /// Configured group names, in match order
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Whether records go to the implicit default group
    pub fn is_implicit(&self) -> bool {
        self.groups.is_empty()
    }

    /// Resolve an identifier to its group and display label
    pub fn resolve(&self, identifier: &str) -> Result<Resolution, ReportError> {
        if self.is_implicit() {
            return Ok(Resolution {
                group: DEFAULT_GROUP.to_string(),
                label: implicit_label(identifier),
            });
        }

        let group = self
            .groups
            .iter()
            .find(|group| identifier.contains(group.as_str()))
            .ok_or_else(|| ReportError::GroupNotFound {
                identifier: identifier.to_string(),
            })?;

        Ok(Resolution {
            group: group.clone(),
            label: grouped_label(identifier, group),
        })
    }
}

/// Label for a record in a configured group
///
/// Removes the benchmark prefix and the group name, then cuts at the first
/// `/` (sub-benchmark) or, if there is none, the first `-` (parallelism).
fn grouped_label(identifier: &str, group: &str) -> String {
    let name = identifier
        .replacen(BENCHMARK_PREFIX, "", 1)
        .replacen(group, "", 1);

    let cut = name.find('/').or_else(|| name.find('-'));
    let name = match cut {
        Some(index) => &name[..index],
        None => name.as_str(),
    };

    name.to_lowercase()
}

/// Label for a record in the implicit default group
fn implicit_label(identifier: &str) -> String {
    let name = identifier
        .strip_prefix(BENCHMARK_PREFIX)
        .unwrap_or(identifier);
    parallelism_suffix_re().replace(name, "").to_lowercase()
}
