use crate::activity::Activity;
use crate::registry::ActivityRegistry;

/// All activities sorted ascending by date.
///
/// Recomputed from the registry on every call; there is no cached state to
/// drift. The sort is stable, so equal dates keep the registry's
/// iteration order.
#[must_use]
pub fn by_date(registry: &ActivityRegistry) -> Vec<Activity> {
    let mut activities: Vec<Activity> = registry.values().cloned().collect();
    activities.sort_by_key(|activity| activity.date);
    activities
}
