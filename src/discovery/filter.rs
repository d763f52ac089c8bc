//! Selects the packages that carry modules.

use crate::composer::InstalledPackage;
use crate::ports::sink::MessageSink;

/// Returns the packages whose type equals `marker_type`, in their original order.
///
/// Emits one message per selected package and nothing for the rest.
pub fn filter_module_packages<'a>(
    packages: &'a [InstalledPackage],
    marker_type: &str,
    sink: &dyn MessageSink,
) -> Vec<&'a InstalledPackage> {
    packages
        .iter()
        .filter(|package| package.package_type == marker_type)
        .inspect(|package| {
            sink.write(&format!("  Found {marker_type} type package: {}", package.name));
        })
        .collect()
}
