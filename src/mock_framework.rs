//! # Mock Framework
//!
//! Utilities for testing code that talks to a resource actor, without running one.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_find_by_key`] or [`expect_save`] to assert on each
//! request and script its reply, and [`expect_no_more_requests`] to assert that
//! nothing else, in particular no mutation, was sent.

use crate::actor_framework::{ActionOutcome, Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The client sends messages to a channel we control (`receiver`) instead of a
/// running `ResourceActor`. The test inspects each message as it arrives and answers
/// through its responder, which simulates the actor's behavior deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindByKey request
pub async fn expect_find_by_key<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Key, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::FindByKey { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, Responder<ActionOutcome<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Returns true once every client is gone and no request is left unread.
pub async fn expect_no_more_requests<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> bool {
    receiver.recv().await.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::brahma;
    use crate::domain::Beer;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Beer>(10);

        let save_task = tokio::spawn(async move {
            let mut beer = brahma();
            beer.id = None;
            client.save(beer).await
        });

        let (item, responder) = expect_save(&mut receiver).await.expect("Expected Save request");
        assert_eq!(item.name, "Brahma");
        responder.send(Ok(brahma())).unwrap();

        let result = save_task.await.unwrap();
        assert_eq!(result, Ok(brahma()));
        assert!(expect_no_more_requests(&mut receiver).await);
    }
}
