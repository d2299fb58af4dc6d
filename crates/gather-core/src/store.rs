use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

use crate::activity::Activity;
use crate::backend::ActivityBackend;
use crate::error::StoreError;
use crate::registry::ActivityRegistry;
use crate::selection::SelectionState;
use crate::tracker::OpTracker;
use crate::views;

/// Everything a presentation layer needs to render, captured under a
/// single lock acquisition so it can never show a torn view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub activities_by_date: Vec<Activity>,
    pub selected: Option<Activity>,
    pub edit_mode: bool,
    pub loading_initial: bool,
    pub submitting: bool,
    pub target: Option<String>,
}

#[derive(Debug, Default)]
struct StoreState {
    registry: ActivityRegistry,
    tracker: OpTracker,
    selection: SelectionState,
}

/// The client-side entity store.
///
/// Owns the canonical activity collection, sequences every CRUD operation
/// against the backend collaborator, and tracks busy state so the UI
/// never has to. Construct one explicitly and share it (e.g. behind an
/// `Arc`) with whoever owns the UI loop; there is no ambient singleton.
///
/// Each async operation follows the same shape: set the busy flag, await
/// the backend without holding the state lock, commit the result as one
/// atomic transition, and clear the busy flag on every exit path,
/// including failure and the operation future being dropped mid-flight.
/// Failures are logged and returned as typed errors; local state is left
/// exactly as it was.
pub struct ActivityStore<B> {
    backend: B,
    state: Mutex<StoreState>,
    generation: watch::Sender<u64>,
}

#[derive(Clone, Copy)]
enum Busy {
    Load,
    Submit,
    Delete,
}

/// Restores the tracker to idle when an operation settles, no matter how
/// it exits.
struct BusyGuard<'a, B> {
    store: &'a ActivityStore<B>,
    busy: Busy,
}

impl<B> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.store.mutate(|state| match self.busy {
            Busy::Load => state.tracker.loading_initial = false,
            Busy::Submit => state.tracker.submitting = false,
            Busy::Delete => {
                state.tracker.submitting = false;
                state.tracker.target = None;
            }
        });
    }
}

impl<B> ActivityStore<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            backend,
            state: Mutex::new(StoreState::default()),
            generation,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs one state transition under the lock, then notifies
    /// subscribers. Commits are only ever applied through here, so
    /// readers see them fully-before or fully-after.
    fn mutate<F>(&self, apply: F)
    where
        F: FnOnce(&mut StoreState),
    {
        {
            let mut state = self.state.lock();
            apply(&mut state);
        }
        self.generation.send_modify(|generation| *generation += 1);
    }
}

impl<B: ActivityBackend> ActivityStore<B> {
    /// Fetches all activities and merges them into the collection.
    ///
    /// Merge, never clear: entries absent from the fetch are kept until
    /// deleted through this store. A record with an unparseable date
    /// aborts the whole commit, so readers observe either the full fetch
    /// or none of it.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), StoreError> {
        let _busy = self.begin(Busy::Load, None);

        let fetched = match self.backend.list_all().await {
            Ok(fetched) => fetched,
            Err(err) => {
                error!(error = %err, "failed to load activities");
                return Err(err.into());
            }
        };

        let mut incoming = Vec::with_capacity(fetched.len());
        for dto in fetched {
            match Activity::from_wire(dto) {
                Ok(activity) => incoming.push(activity),
                Err(err) => {
                    error!(error = %err, "discarding fetched batch");
                    return Err(err);
                }
            }
        }

        let count = incoming.len();
        self.mutate(move |state| {
            for activity in incoming {
                state.registry.set(activity);
            }
        });
        info!(count, "activities loaded");
        Ok(())
    }

    /// Submits a new activity; on success it joins the collection and the
    /// form closes. On failure nothing is added and the form stays as it
    /// was.
    #[instrument(skip(self, activity), fields(id = %activity.id))]
    pub async fn create(&self, activity: Activity) -> Result<(), StoreError> {
        let _busy = self.begin(Busy::Submit, None);

        if let Err(err) = self.backend.create(&activity.to_wire()).await {
            error!(error = %err, "failed to create activity");
            return Err(err.into());
        }

        debug!("create committed");
        self.mutate(move |state| {
            state.registry.set(activity);
            state.selection.edit_mode = false;
        });
        Ok(())
    }

    /// Submits a changed activity; on success it replaces the stored
    /// entry, becomes the selection, and the form closes.
    #[instrument(skip(self, activity), fields(id = %activity.id))]
    pub async fn update(&self, activity: Activity) -> Result<(), StoreError> {
        let _busy = self.begin(Busy::Submit, None);

        if let Err(err) = self.backend.update(&activity.to_wire()).await {
            error!(error = %err, "failed to update activity");
            return Err(err.into());
        }

        debug!("update committed");
        self.mutate(move |state| {
            let id = activity.id.clone();
            state.registry.set(activity);
            state.selection.selected = Some(id);
            state.selection.edit_mode = false;
        });
        Ok(())
    }

    /// Deletes by identifier; `target` names the row for the duration so
    /// the UI can spin exactly that row. On success the entry is removed
    /// and the selection cleared.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let _busy = self.begin(Busy::Delete, Some(id));

        if let Err(err) = self.backend.delete_by_id(id).await {
            error!(error = %err, "failed to delete activity");
            return Err(err.into());
        }

        debug!("delete committed");
        self.mutate(|state| {
            state.registry.remove(id);
            state.selection.cancel_selection();
        });
        Ok(())
    }
}

impl<B> ActivityStore<B> {
    pub fn select_activity(&self, id: Option<&str>) {
        self.mutate(|state| state.selection.select(&state.registry, id));
    }

    pub fn open_create_form(&self) {
        self.mutate(|state| state.selection.open_create_form());
    }

    pub fn open_edit_form(&self, id: &str) {
        self.mutate(|state| state.selection.open_edit_form(&state.registry, id));
    }

    pub fn cancel_selection(&self) {
        self.mutate(|state| state.selection.cancel_selection());
    }

    pub fn cancel_form(&self) {
        self.mutate(|state| state.selection.cancel_form());
    }

    /// Atomic view of the whole store.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.lock();
        StoreSnapshot {
            activities_by_date: views::by_date(&state.registry),
            selected: state
                .selection
                .selected
                .as_deref()
                .and_then(|id| state.registry.get(id))
                .cloned(),
            edit_mode: state.selection.edit_mode,
            loading_initial: state.tracker.loading_initial,
            submitting: state.tracker.submitting,
            target: state.tracker.target.clone(),
        }
    }

    /// All activities sorted ascending by date, recomputed on every call.
    #[must_use]
    pub fn activities_by_date(&self) -> Vec<Activity> {
        views::by_date(&self.state.lock().registry)
    }

    #[must_use]
    pub fn selected_activity(&self) -> Option<Activity> {
        let state = self.state.lock();
        state
            .selection
            .selected
            .as_deref()
            .and_then(|id| state.registry.get(id))
            .cloned()
    }

    #[must_use]
    pub fn flags(&self) -> OpTracker {
        self.state.lock().tracker.clone()
    }

    /// Ticks once per committed state transition. Subscribers re-derive
    /// whatever views they need from [`ActivityStore::snapshot`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }

    /// Flag writes are scoped per operation kind: only the delete path
    /// ever touches `target`, so an overlapping create or update cannot
    /// clobber an in-flight delete's row marker.
    fn begin(&self, busy: Busy, target: Option<&str>) -> BusyGuard<'_, B> {
        self.mutate(|state| match busy {
            Busy::Load => state.tracker.loading_initial = true,
            Busy::Submit => state.tracker.submitting = true,
            Busy::Delete => {
                state.tracker.submitting = true;
                state.tracker.target = target.map(str::to_string);
            }
        });
        BusyGuard { store: self, busy }
    }
}

impl<B> std::fmt::Debug for ActivityStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ActivityStore")
            .field("activities", &state.registry.len())
            .field("tracker", &state.tracker)
            .field("selection", &state.selection)
            .finish()
    }
}
