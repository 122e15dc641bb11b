use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with natural key and atomic actions)
// =============================================================================

/// Trait that any stored record must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    /// Natural key; at most one stored item may carry a given key.
    type Key: Eq + Clone + Send + Sync + Display + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type ActionError: Send + Sync + Debug;

    /// Get the ID of the entity, `None` until the store assigns one
    fn id(&self) -> Option<&Self::Id>;

    /// Called by the store on first save
    fn assign_id(&mut self, id: Self::Id);

    fn key(&self) -> &Self::Key;

    /// Handle a custom domain-specific action.
    ///
    /// Must leave `self` untouched when returning an error.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::ActionError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Outcome of an action: the outer layer is the transport, the inner one is the entity's verdict.
pub type ActionOutcome<T> = Result<<T as Entity>::ActionResult, <T as Entity>::ActionError>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Save {
        item: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindByKey {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<ActionOutcome<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// In-memory store that serves one request at a time, so every request is atomic.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs until every client has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Save { item, respond_to } => {
                    let _ = respond_to.send(self.handle_save(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::FindByKey { key, respond_to } => {
                    let item = self.store.values().find(|item| *item.key() == key).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = match self.store.remove(&id) {
                        Some(_) => Ok(()),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => Ok(item.handle_action(action)),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(items = self.store.len(), "ResourceActor stopped");
    }

    fn handle_save(&mut self, mut item: T) -> Result<T, FrameworkError> {
        let conflict = self
            .store
            .iter()
            .any(|(id, existing)| existing.key() == item.key() && Some(id) != item.id());
        if conflict {
            debug!(key = %item.key(), "Rejected save with duplicate key");
            return Err(FrameworkError::DuplicateKey(item.key().to_string()));
        }

        let id = match item.id() {
            Some(id) => id.clone(),
            None => {
                let id = self.fresh_id();
                item.assign_id(id.clone());
                id
            }
        };
        debug!(id = %id, "Saved item");
        self.store.insert(id, item.clone());
        Ok(item)
    }

    // Skips ids already taken by items saved with an explicit id.
    fn fresh_id(&self) -> T::Id {
        loop {
            let id = (self.next_id_fn)();
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn save(&self, item: T) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Save { item, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn find_by_key(&self, key: T::Key) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::FindByKey { key, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Delete { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<ActionOutcome<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Action { id, action, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Gauge {
        id: Option<u64>,
        label: String,
        level: u32,
        cap: u32,
    }

    impl Gauge {
        fn new(label: &str, level: u32, cap: u32) -> Self {
            Self { id: None, label: label.to_string(), level, cap }
        }
    }

    #[derive(Debug)]
    enum GaugeAction {
        Raise(u32),
    }

    impl Entity for Gauge {
        type Id = u64;
        type Key = String;
        type Action = GaugeAction;
        type ActionResult = u32;
        type ActionError = String;

        fn id(&self) -> Option<&u64> { self.id.as_ref() }

        fn assign_id(&mut self, id: u64) { self.id = Some(id); }

        fn key(&self) -> &String { &self.label }

        fn handle_action(&mut self, action: GaugeAction) -> Result<u32, String> {
            match action {
                GaugeAction::Raise(by) => {
                    let next = self.level + by;
                    if next > self.cap {
                        return Err(format!("{} exceeds cap {}", next, self.cap));
                    }
                    self.level = next;
                    Ok(next)
                }
            }
        }
    }

    fn start() -> (ResourceClient<Gauge>, tokio::task::JoinHandle<()>) {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::new(10, next_id);
        (client, tokio::spawn(actor.run()))
    }

    // --- Test ---

    #[tokio::test]
    async fn test_save_assigns_ids_and_lists_in_id_order() {
        let (client, _handle) = start();

        let first = client.save(Gauge::new("a", 0, 10)).await.unwrap();
        let second = client.save(Gauge::new("b", 0, 10)).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        let all = client.list().await.unwrap();
        let labels: Vec<_> = all.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_key_but_allows_resave() {
        let (client, _handle) = start();

        let saved = client.save(Gauge::new("a", 0, 10)).await.unwrap();
        let err = client.save(Gauge::new("a", 5, 10)).await.unwrap_err();
        assert_eq!(err, FrameworkError::DuplicateKey("a".to_string()));

        // Same id, same key: a replacement rather than a duplicate
        let mut updated = saved.clone();
        updated.level = 7;
        client.save(updated).await.unwrap();
        let found = client.find_by_key("a".to_string()).await.unwrap().unwrap();
        assert_eq!(found.level, 7);
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fresh_ids_skip_explicitly_saved_ids() {
        let (client, _handle) = start();

        let mut explicit = Gauge::new("explicit", 0, 10);
        explicit.id = Some(1);
        client.save(explicit).await.unwrap();

        let generated = client.save(Gauge::new("generated", 0, 10)).await.unwrap();
        assert_eq!(generated.id, Some(2));
    }

    #[tokio::test]
    async fn test_rejected_action_leaves_item_unchanged() {
        let (client, _handle) = start();
        let id = client.save(Gauge::new("a", 4, 10)).await.unwrap().id.unwrap();

        let raised = client.perform_action(id, GaugeAction::Raise(6)).await.unwrap();
        assert_eq!(raised, Ok(10));

        let rejected = client.perform_action(id, GaugeAction::Raise(1)).await.unwrap();
        assert!(rejected.is_err());
        assert_eq!(client.get(id).await.unwrap().unwrap().level, 10);
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let (client, _handle) = start();

        assert_eq!(client.get(42).await.unwrap(), None);
        assert_eq!(client.delete(42).await, Err(FrameworkError::NotFound("42".to_string())));
        assert_eq!(
            client.perform_action(42, GaugeAction::Raise(1)).await.unwrap_err(),
            FrameworkError::NotFound("42".to_string())
        );
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_are_dropped() {
        let (client, handle) = start();
        let id = client.save(Gauge::new("a", 0, 10)).await.unwrap().id.unwrap();
        client.delete(id).await.unwrap();
        assert!(client.list().await.unwrap().is_empty());

        drop(client);
        handle.await.unwrap();
    }
}
