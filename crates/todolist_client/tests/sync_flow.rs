use std::cell::{Cell, RefCell};
use std::rc::Rc;

use todolist_client::{ClientError, Filter, TodoClient, TodoTransport};
use todolist_core::{Todo, TodoId};
use uuid::Uuid;

/// In-memory stand-in for the server: a collection plus a failure switch
/// that can be flipped after the client takes ownership of the transport.
struct FakeTransport {
    store: Rc<RefCell<Vec<Todo>>>,
    fail: Rc<Cell<bool>>,
}

impl FakeTransport {
    fn new() -> Self {
        Self {
            store: Rc::new(RefCell::new(Vec::new())),
            fail: Rc::new(Cell::new(false)),
        }
    }

    fn seeded(todos: Vec<Todo>) -> Self {
        let transport = Self::new();
        *transport.store.borrow_mut() = todos;
        transport
    }

    fn failure_switch(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.fail)
    }

    fn check_failure(&self) -> Result<(), ClientError> {
        if self.fail.get() {
            return Err(ClientError::Api {
                status: 500,
                message: "injected store failure".to_string(),
            });
        }
        Ok(())
    }
}

impl TodoTransport for FakeTransport {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.check_failure()?;
        Ok(self.store.borrow().clone())
    }

    async fn create_todo(&self, text: &str) -> Result<Todo, ClientError> {
        self.check_failure()?;
        let created = Todo::new(text);
        self.store.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_todo(
        &self,
        id: TodoId,
        status: bool,
        text: &str,
    ) -> Result<Todo, ClientError> {
        self.check_failure()?;
        let mut store = self.store.borrow_mut();
        let item = store
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(ClientError::Api {
                status: 404,
                message: "Todo not found".to_string(),
            })?;
        item.status = status;
        item.todo = text.to_string();
        Ok(item.clone())
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ClientError> {
        self.check_failure()?;
        let mut store = self.store.borrow_mut();
        let before = store.len();
        store.retain(|todo| todo.id != id);
        if store.len() == before {
            return Err(ClientError::Api {
                status: 404,
                message: "Todo not found".to_string(),
            });
        }
        Ok(())
    }
}

#[tokio::test]
async fn load_replaces_local_state_wholesale() {
    let seeded = vec![Todo::new("one"), Todo::new("two")];
    let mut client = TodoClient::new(FakeTransport::seeded(seeded.clone()));

    client.load().await.unwrap();
    assert_eq!(client.state().todos(), seeded.as_slice());
}

#[tokio::test]
async fn add_appends_the_server_assigned_item() {
    let mut client = TodoClient::new(FakeTransport::new());
    client.load().await.unwrap();

    let id = client.add("buy milk").await.unwrap();
    let item = client.state().get(id).unwrap();
    assert_eq!(item.todo, "buy milk");
    assert!(!item.status);
}

#[tokio::test]
async fn toggle_flips_status_and_resends_text_verbatim() {
    let mut client = TodoClient::new(FakeTransport::new());
    client.load().await.unwrap();
    let id = client.add("  spaced text  ").await.unwrap();

    client.toggle(id).await.unwrap();
    let item = client.state().get(id).unwrap();
    assert!(item.status);
    assert_eq!(item.todo, "  spaced text  ");

    client.toggle(id).await.unwrap();
    assert!(!client.state().get(id).unwrap().status);
}

#[tokio::test]
async fn commit_edit_applies_draft_and_clears_slot() {
    let mut client = TodoClient::new(FakeTransport::new());
    client.load().await.unwrap();
    let id = client.add("first draft").await.unwrap();
    client.toggle(id).await.unwrap();

    assert!(client.begin_edit(id));
    client.set_draft("second draft");
    client.commit_edit().await.unwrap();

    let item = client.state().get(id).unwrap();
    assert_eq!(item.todo, "second draft");
    // Edit commit marks the item active again.
    assert!(!item.status);
    assert!(client.state().editing().is_none());
}

#[tokio::test]
async fn commit_edit_rejects_empty_draft_before_any_network_call() {
    let transport = FakeTransport::new();
    let fail = transport.failure_switch();
    let mut client = TodoClient::new(transport);
    client.load().await.unwrap();
    let id = client.add("keep me").await.unwrap();

    client.begin_edit(id);
    client.set_draft("   ");

    // Any network call would now surface as an Api error; NothingToCommit
    // proves the transport was never reached.
    fail.set(true);
    let err = client.commit_edit().await.unwrap_err();
    assert!(matches!(err, ClientError::NothingToCommit));
    assert_eq!(client.state().get(id).unwrap().todo, "keep me");
}

#[tokio::test]
async fn commit_edit_without_slot_is_rejected() {
    let mut client = TodoClient::new(FakeTransport::new());
    let err = client.commit_edit().await.unwrap_err();
    assert!(matches!(err, ClientError::NothingToCommit));
}

#[tokio::test]
async fn remove_drops_the_local_item() {
    let mut client = TodoClient::new(FakeTransport::new());
    client.load().await.unwrap();
    let keep = client.add("keep").await.unwrap();
    let gone = client.add("drop").await.unwrap();

    client.remove(gone).await.unwrap();
    assert!(client.state().get(gone).is_none());
    assert!(client.state().get(keep).is_some());
}

#[tokio::test]
async fn toggle_of_unknown_id_is_rejected_before_any_network_call() {
    let transport = FakeTransport::new();
    let fail = transport.failure_switch();
    let mut client = TodoClient::new(transport);
    let unknown = Uuid::new_v4();

    // Toggle needs the local text to resend; UnknownItem instead of an Api
    // error proves the transport was never reached.
    fail.set(true);
    let err = client.toggle(unknown).await.unwrap_err();
    assert!(matches!(err, ClientError::UnknownItem(id) if id == unknown));
}

#[tokio::test]
async fn remove_of_unknown_id_round_trips_and_surfaces_the_server_answer() {
    let mut client = TodoClient::new(FakeTransport::new());
    client.load().await.unwrap();

    let err = client.remove(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
}

#[tokio::test]
async fn failed_mutations_leave_local_state_unchanged() {
    let transport = FakeTransport::new();
    let fail = transport.failure_switch();
    let mut client = TodoClient::new(transport);
    client.load().await.unwrap();
    let id = client.add("stable").await.unwrap();
    let before = client.state().todos().to_vec();

    fail.set(true);

    assert!(client.add("never lands").await.is_err());
    assert!(client.toggle(id).await.is_err());
    client.begin_edit(id);
    client.set_draft("never committed");
    assert!(client.commit_edit().await.is_err());
    assert!(client.remove(id).await.is_err());

    assert_eq!(client.state().todos(), before.as_slice());
    // A failed commit keeps the slot so the user can retry.
    assert!(client.state().editing().is_some());
}

#[tokio::test]
async fn filter_changes_are_local_and_pure() {
    let transport = FakeTransport::new();
    let fail = transport.failure_switch();
    let mut client = TodoClient::new(transport);
    client.load().await.unwrap();
    let a = client.add("a").await.unwrap();
    let b = client.add("b").await.unwrap();
    client.toggle(b).await.unwrap();

    // Filtering keeps working with the transport down.
    fail.set(true);

    client.set_filter(Filter::Active);
    let visible: Vec<_> = client.state().visible().iter().map(|t| t.id).collect();
    assert_eq!(visible, vec![a]);

    client.set_filter(Filter::Done);
    let visible: Vec<_> = client.state().visible().iter().map(|t| t.id).collect();
    assert_eq!(visible, vec![b]);

    client.set_filter(Filter::All);
    assert_eq!(client.state().visible().len(), 2);
}
