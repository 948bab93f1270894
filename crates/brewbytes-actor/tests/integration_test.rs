use async_trait::async_trait;
use brewbytes_actor::{ActorState, FrameworkError, StateActor};

// --- Test State ---

#[derive(Debug, Default)]
struct TipJar {
    coins: Vec<u32>,
    started: bool,
}

#[derive(Debug)]
enum TipAction {
    Drop(u32),
    Steal(u32),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TipError {
    #[error("jar only holds {held}, cannot take {wanted}")]
    NotEnough { held: u32, wanted: u32 },
}

#[async_trait]
impl ActorState for TipJar {
    type Action = TipAction;
    type ActionResult = u32;
    type Snapshot = (bool, u32);
    type Context = u32;
    type Error = TipError;

    async fn on_start(&mut self, _ctx: &u32) -> Result<(), TipError> {
        self.started = true;
        Ok(())
    }

    async fn handle_action(&mut self, action: TipAction, bonus: &u32) -> Result<u32, TipError> {
        match action {
            TipAction::Drop(coin) => {
                self.coins.push(coin + bonus);
                Ok(self.total())
            }
            TipAction::Steal(wanted) => {
                let held = self.total();
                if wanted > held {
                    return Err(TipError::NotEnough { held, wanted });
                }
                self.coins = vec![held - wanted];
                Ok(self.total())
            }
        }
    }

    fn snapshot(&self) -> (bool, u32) {
        (self.started, self.total())
    }
}

impl TipJar {
    fn total(&self) -> u32 {
        self.coins.iter().sum()
    }
}

// --- Tests ---

#[tokio::test]
async fn test_actions_are_applied_in_order_with_context() {
    let (actor, client) = StateActor::new(TipJar::default(), 10);
    let handle = tokio::spawn(actor.run(1));

    assert_eq!(client.perform_action(TipAction::Drop(4)).await.unwrap(), 5);
    assert_eq!(client.perform_action(TipAction::Drop(9)).await.unwrap(), 15);
    assert_eq!(client.snapshot().await.unwrap(), (true, 15));

    drop(client);
    let jar = handle.await.unwrap();
    assert_eq!(jar.coins, vec![5, 10]);
}

#[tokio::test]
async fn test_state_error_is_returned_and_state_kept() {
    let (actor, client) = StateActor::new(TipJar::default(), 10);
    tokio::spawn(actor.run(0));

    client.perform_action(TipAction::Drop(3)).await.unwrap();
    let err = client
        .perform_action(TipAction::Steal(10))
        .await
        .unwrap_err();
    assert_eq!(
        err.into_entity::<TipError>().unwrap(),
        TipError::NotEnough { held: 3, wanted: 10 }
    );
    assert_eq!(client.snapshot().await.unwrap(), (true, 3));
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = StateActor::new(TipJar::default(), 1);
    drop(actor);

    assert!(client.is_closed());
    let result = client.snapshot().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

#[tokio::test]
async fn test_concurrent_writers_are_serialized() {
    let (actor, client) = StateActor::new(TipJar::default(), 4);
    tokio::spawn(actor.run(0));

    let mut handles = vec![];
    for _ in 0..50 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.perform_action(TipAction::Drop(2)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(client.snapshot().await.unwrap(), (true, 100));
}

#[tokio::test]
async fn test_shutdown_stops_actor_while_clients_remain() {
    let (actor, client) = StateActor::new(TipJar::default(), 10);
    let handle = tokio::spawn(actor.run(0));
    let other = client.clone();

    client.perform_action(TipAction::Drop(7)).await.unwrap();
    client.shutdown().await;

    let jar = tokio::time::timeout(std::time::Duration::from_secs(3), handle)
        .await
        .expect("actor stopped with clients still alive")
        .unwrap();
    assert_eq!(jar.coins, vec![7]);

    assert!(other.is_closed());
    let result = other.perform_action(TipAction::Drop(1)).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));

    // Already stopped: nothing to do.
    other.shutdown().await;
}
