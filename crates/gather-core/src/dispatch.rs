use std::collections::BTreeMap;

use gather_shared::{ActivityCommand, ActivityDto, ActivityQuery};
use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::backend::ActivityBackend;
use crate::error::BackendError;

/// Result of a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Activities(Vec<ActivityDto>),
    Done,
}

/// What a dispatcher routes requests to.
///
/// Keeps the transport surface decoupled from the logic that produces
/// results: an endpoint builds an [`ActivityQuery`] or [`ActivityCommand`]
/// and hands it over without knowing which handler runs.
pub trait ActivitySource: Send + Sync {
    fn list_all(&self) -> Result<Vec<ActivityDto>, BackendError>;
    fn upsert(&self, activity: ActivityDto) -> Result<(), BackendError>;
    fn delete(&self, id: &str) -> Result<(), BackendError>;
}

/// Routes a typed query to its handler. Stateless request/response facade.
#[instrument(skip(source))]
pub fn dispatch_query<S: ActivitySource>(
    source: &S,
    query: ActivityQuery,
) -> Result<Reply, BackendError> {
    match query {
        ActivityQuery::ListAll => source.list_all().map(Reply::Activities),
    }
}

/// Routes a typed command to its handler.
#[instrument(skip(source, command))]
pub fn dispatch_command<S: ActivitySource>(
    source: &S,
    command: ActivityCommand,
) -> Result<Reply, BackendError> {
    match command {
        ActivityCommand::Create(activity) | ActivityCommand::Edit(activity) => {
            source.upsert(activity).map(|()| Reply::Done)
        }
        ActivityCommand::Delete { id } => source.delete(&id).map(|()| Reply::Done),
    }
}

/// In-process backend: a mutex-guarded map served through the dispatch
/// layer. Stands in for the remote service in tests and offline runs.
#[derive(Debug, Default)]
pub struct MemoryService {
    records: Mutex<BTreeMap<String, ActivityDto>>,
}

impl MemoryService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the service, replacing anything already stored.
    pub fn seed<I>(&self, activities: I)
    where
        I: IntoIterator<Item = ActivityDto>,
    {
        let mut records = self.records.lock();
        records.clear();
        records.extend(
            activities
                .into_iter()
                .map(|activity| (activity.id.clone(), activity)),
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl ActivitySource for MemoryService {
    fn list_all(&self) -> Result<Vec<ActivityDto>, BackendError> {
        let records = self.records.lock();
        debug!(count = records.len(), "listing activities");
        Ok(records.values().cloned().collect())
    }

    fn upsert(&self, activity: ActivityDto) -> Result<(), BackendError> {
        debug!(id = %activity.id, "upserting activity");
        self.records
            .lock()
            .insert(activity.id.clone(), activity);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), BackendError> {
        debug!(%id, "deleting activity");
        self.records.lock().remove(id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityBackend for MemoryService {
    async fn list_all(&self) -> Result<Vec<ActivityDto>, BackendError> {
        match dispatch_query(self, ActivityQuery::ListAll)? {
            Reply::Activities(activities) => Ok(activities),
            Reply::Done => Err(BackendError::Malformed(
                "list query answered with no payload".to_string(),
            )),
        }
    }

    async fn create(&self, activity: &ActivityDto) -> Result<(), BackendError> {
        dispatch_command(self, ActivityCommand::Create(activity.clone())).map(|_| ())
    }

    async fn update(&self, activity: &ActivityDto) -> Result<(), BackendError> {
        dispatch_command(self, ActivityCommand::Edit(activity.clone())).map(|_| ())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), BackendError> {
        dispatch_command(
            self,
            ActivityCommand::Delete { id: id.to_string() },
        )
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: &str) -> ActivityDto {
        ActivityDto {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            category: String::new(),
            date: "2025-01-01T09:00:00".to_string(),
            city: String::new(),
            venue: String::new(),
        }
    }

    #[test]
    fn list_query_returns_seeded_records() {
        let service = MemoryService::new();
        service.seed([dto("a"), dto("b")]);

        let reply = dispatch_query(&service, ActivityQuery::ListAll).expect("dispatch");
        let Reply::Activities(activities) = reply else {
            panic!("expected activity payload");
        };
        assert_eq!(activities.len(), 2);
    }

    #[test]
    fn commands_mutate_the_service() {
        let service = MemoryService::new();

        dispatch_command(&service, ActivityCommand::Create(dto("a"))).expect("create");
        assert_eq!(service.len(), 1);

        dispatch_command(
            &service,
            ActivityCommand::Delete {
                id: "a".to_string(),
            },
        )
        .expect("delete");
        assert!(service.is_empty());
    }

    #[test]
    fn deleting_a_missing_id_is_accepted() {
        let service = MemoryService::new();
        dispatch_command(
            &service,
            ActivityCommand::Delete {
                id: "ghost".to_string(),
            },
        )
        .expect("delete of missing id");
    }
}
