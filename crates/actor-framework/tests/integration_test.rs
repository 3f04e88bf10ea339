use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    label: String,
    stock: u32,
    withdrawals: u32,
}

#[derive(Debug)]
struct BinCreate {
    label: String,
    stock: u32,
}

#[derive(Debug)]
enum BinAction {
    Withdraw(u32),
}

#[derive(Debug)]
enum BinQuery {
    Stock,
    Withdrawals,
}

#[derive(Debug, thiserror::Error)]
enum BinError {
    #[error("Empty label")]
    EmptyLabel,
    #[error("{0}")]
    Client(String),
}

impl From<String> for BinError {
    fn from(msg: String) -> Self {
        BinError::Client(msg)
    }
}

#[async_trait]
impl ActorEntity for Bin {
    type Id = u32;
    type Create = BinCreate;
    type Action = BinAction;
    type ActionResult = u32;
    type Query = BinQuery;
    type QueryResult = u32;
    type Context = ();
    type Error = BinError;

    fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(BinError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            stock: params.stock,
            withdrawals: 0,
        })
    }

    async fn handle_action(&mut self, action: BinAction, _ctx: &()) -> Result<u32, BinError> {
        match action {
            BinAction::Withdraw(n) => {
                self.stock = self.stock.saturating_sub(n);
                self.withdrawals += 1;
                Ok(self.stock)
            }
        }
    }

    fn handle_query(&self, query: BinQuery) -> Result<u32, BinError> {
        Ok(match query {
            BinQuery::Stock => self.stock,
            BinQuery::Withdrawals => self.withdrawals,
        })
    }
}

struct BinClient {
    inner: ResourceClient<Bin>,
}

#[async_trait]
impl ActorClient<Bin> for BinClient {
    type Error = BinError;

    fn inner(&self) -> &ResourceClient<Bin> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BinError::Client(e.to_string())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let id = client
        .create(BinCreate {
            label: "A1".into(),
            stock: 5,
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // 2. Action mutates, query observes
    let left = client.perform_action(id, BinAction::Withdraw(3)).await.unwrap();
    assert_eq!(left, 2);
    assert_eq!(client.query(id, BinQuery::Stock).await.unwrap(), 2);

    // 3. Floors at zero
    let left = client.perform_action(id, BinAction::Withdraw(10)).await.unwrap();
    assert_eq!(left, 0);
    assert_eq!(client.query(id, BinQuery::Withdrawals).await.unwrap(), 2);

    // 4. Get returns a snapshot
    let bin = client.get(id).await.unwrap().unwrap();
    assert_eq!(bin.id, id);
    assert_eq!(bin.label, "A1");
    assert_eq!(bin.stock, 0);

    // 5. Delete, then every request on that id misses
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.query(id, BinQuery::Stock).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(
        client.perform_action(id, BinAction::Withdraw(1)).await,
        Err(FrameworkError::NotFound(_))
    ));

    // 6. Ids are not reused after a delete
    let next = client
        .create(BinCreate {
            label: "A2".into(),
            stock: 1,
        })
        .await
        .unwrap();
    assert_eq!(next, 2);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_create_failure_is_reported_as_entity_error() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let result = client
        .create(BinCreate {
            label: String::new(),
            stock: 1,
        })
        .await;
    match result {
        Err(FrameworkError::EntityError(e)) => assert_eq!(e.to_string(), "Empty label"),
        other => panic!("Expected EntityError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_actor_client_defaults_and_closed_actor() {
    let (actor, inner) = ResourceActor::<Bin>::new(10);
    let handle = tokio::spawn(actor.run(()));
    let client = BinClient { inner };

    let id = client
        .inner()
        .create(BinCreate {
            label: "B1".into(),
            stock: 3,
        })
        .await
        .unwrap();
    assert!(client.get(id).await.unwrap().is_some());
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    // A clone outlives the actor once the task is aborted
    let orphan = client.inner().clone();
    handle.abort();
    let _ = handle.await;
    let err = orphan.get(id).await.unwrap_err();
    assert!(err.is_disconnected());
}
