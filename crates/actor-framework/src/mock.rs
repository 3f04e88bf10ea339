//! # Mock Clients
//!
//! Two ways to stand in for a real actor in tests:
//!
//! - [`MockClient`]: queue canned responses up front (`expect_get(..).return_ok(..)`),
//!   hand `client()` to the code under test, then `verify()` that every
//!   expectation was consumed. Requests are answered strictly in queue order.
//! - [`create_mock_client`] plus the `expect_*` helpers: receive the raw
//!   request yourself, assert on its payload and answer through the responder.
//!   Use this when the payload matters (e.g. which quantities an order form sent).
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, canned answers | real entity state |
//! | **Error injection** | `return_err` | needs the state that triggers it |
//! | **Use** | logic *around* a client | the entity itself or the full system |
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Session>::new();
//! mock.expect_query(SessionId(1)).return_ok(SessionQueryResult::Version(4));
//!
//! let store = StoreHandle::new(SessionClient::new(mock.client()), SessionId(1));
//! assert_eq!(store.version().await?, 4);
//! mock.verify();
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// One queued answer. The id is kept for diagnostics only; requests are
/// matched by kind and order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Query {
        id: T::Id,
        response: Result<T::QueryResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Self::Get { id, .. } => format!("Get({id})"),
            Self::Create { .. } => "Create".to_string(),
            Self::Delete { id, .. } => format!("Delete({id})"),
            Self::Action { id, .. } => format!("Action({id})"),
            Self::Query { id, .. } => format!("Query({id})"),
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
        ResourceRequest::Query { .. } => "Query",
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime; the responder runs as a task.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Query { respond_to, .. }, Some(Expectation::Query { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expected) => {
                        panic!(
                            "Unexpected {} request, expected {}",
                            request_kind(&request),
                            expected.map_or_else(|| "nothing".to_string(), |e| e.describe())
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get {
            id,
            response,
        })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Delete {
            id,
            response,
        })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Action {
            id,
            response,
        })
    }

    pub fn expect_query(&mut self, id: T::Id) -> ExpectationBuilder<T, T::QueryResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Query {
            id,
            response,
        })
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps.iter().map(Expectation::describe).collect();
            panic!("Not all expectations were met: {}", pending.join(", "));
        }
    }
}

/// Finishes an `expect_*` call with the response the mock should give.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver you control.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Query.
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Query, Responder<T::QueryResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query {
            id,
            query,
            respond_to,
        }) => Some((id, query, respond_to)),
        _ => None,
    }
}
