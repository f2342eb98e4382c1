//! Store behavior against an in-process mock backend.
//!
//! The backend keeps its slot collection behind a mutex and counts hits
//! per mutating route, so the tests can assert two things the unit tests
//! cannot: that every successful write is followed by a full re-list, and
//! that validation failures never reach the wire.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use claritycall_api::{ApiClient, ApiConfig};
use claritycall_client::{BookingStore, PublicSlotBoard, SlotForm, SlotStore};
use claritycall_shared::time::Meridiem;
use claritycall_shared::types::{BookingId, Role, SlotId, UserId};

#[derive(Default)]
struct Backend {
    slots: Mutex<Vec<Value>>,
    create_hits: AtomicUsize,
    delete_hits: AtomicUsize,
    confirm_hits: AtomicUsize,
    public_list_hits: AtomicUsize,
}

impl Backend {
    fn seed_slot(&self, id: &str, start: &str, price: f64) {
        self.slots.lock().unwrap().push(json!({
            "_id": id,
            "start": start,
            "durationMinutes": 45,
            "price": price,
        }));
    }
}

async fn list_slots(State(backend): State<Arc<Backend>>) -> Json<Value> {
    Json(Value::Array(backend.slots.lock().unwrap().clone()))
}

async fn create_slot(
    State(backend): State<Arc<Backend>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    backend.create_hits.fetch_add(1, Ordering::SeqCst);
    body["_id"] = json!(uuid::Uuid::new_v4().to_string());
    backend.slots.lock().unwrap().push(body.clone());
    Json(body)
}

async fn update_slot(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    body["_id"] = json!(id);
    let mut slots = backend.slots.lock().unwrap();
    match slots.iter_mut().find(|s| s["_id"] == json!(id)) {
        Some(slot) => {
            *slot = body.clone();
            Ok(Json(body))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_slot(State(backend): State<Arc<Backend>>, Path(id): Path<String>) -> StatusCode {
    backend.delete_hits.fetch_add(1, Ordering::SeqCst);
    backend
        .slots
        .lock()
        .unwrap()
        .retain(|s| s["_id"] != json!(id));
    StatusCode::OK
}

async fn public_slots(
    State(backend): State<Arc<Backend>>,
    Path(_mentor_id): Path<String>,
) -> Json<Value> {
    backend.public_list_hits.fetch_add(1, Ordering::SeqCst);
    Json(Value::Array(backend.slots.lock().unwrap().clone()))
}

async fn create_booking(
    State(backend): State<Arc<Backend>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let slot_id = body["slotId"].as_str().unwrap_or_default().to_string();
    let mut slots = backend.slots.lock().unwrap();
    let position = slots.iter().position(|s| s["_id"] == json!(slot_id));
    let slot = match position {
        Some(i) => slots.remove(i),
        None => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(json!({"message": "Slot not found"})),
            ))
        }
    };

    Ok(Json(json!({
        "_id": uuid::Uuid::new_v4().to_string(),
        "slotId": slot,
        "userId": {"_id": "u1", "firstName": "Neha"},
        "mentorId": {"_id": "m1", "firstName": "Amit"},
        "status": "pending",
        "notes": body["notes"],
        "createdAt": "2025-03-01T12:00:00Z",
    })))
}

async fn confirm_booking(
    State(backend): State<Arc<Backend>>,
    Path(_id): Path<String>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.confirm_hits.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Booking not found"})),
    )
}

async fn list_bookings(State(_backend): State<Arc<Backend>>) -> Json<Value> {
    Json(json!([]))
}

async fn spawn_backend() -> (Arc<Backend>, ApiClient) {
    let backend = Arc::new(Backend::default());
    let app = Router::new()
        .route("/api/slots", get(list_slots).post(create_slot))
        .route("/api/slots/{id}", put(update_slot).delete(delete_slot))
        .route("/api/mentors/{id}/slots", get(public_slots))
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/mentor", get(list_bookings))
        .route("/api/bookings/{id}/confirm", put(confirm_booking))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::new(&ApiConfig::with_base_url(format!("http://{addr}"))).unwrap();
    (backend, client)
}

fn form(date: &str, time: &str, meridiem: Meridiem) -> SlotForm {
    SlotForm {
        date: date.to_string(),
        time: time.to_string(),
        meridiem,
        ..SlotForm::default()
    }
}

// ---------------------------------------------------------------------------
// SlotStore
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_refetches_from_server() {
    let (backend, client) = spawn_backend().await;
    let mut store = SlotStore::new(client);

    store.refresh().await.unwrap();
    assert!(store.slots().is_empty());

    let mut form = form("2030-03-10", "09:30", Meridiem::Am);
    form.price = 500.0;
    form.label = Some("Resume review".to_string());
    store.create(&form).await.unwrap();

    assert_eq!(backend.create_hits.load(Ordering::SeqCst), 1);
    assert_eq!(store.slots().len(), 1);
    // The cached record is the server's copy, id included.
    let slot = &store.slots()[0];
    assert!(!slot.id.0.is_empty());
    assert_eq!(slot.price, 500.0);
    assert_eq!(slot.label.as_deref(), Some("Resume review"));
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let (_backend, client) = spawn_backend().await;
    let mut store = SlotStore::new(client);

    store
        .create(&form("2030-03-10", "09:00", Meridiem::Am))
        .await
        .unwrap();
    store
        .create(&form("2030-03-11", "02:00", Meridiem::Pm))
        .await
        .unwrap();
    let first_id = store.slots()[0].id.clone();
    let second_id = store.slots()[1].id.clone();

    let mut edited = form("2030-03-12", "04:00", Meridiem::Pm);
    edited.price = 750.0;
    store.update(&first_id, &edited).await.unwrap();

    assert_eq!(store.slots().len(), 2);
    // Server order is preserved: the edited slot stays first.
    assert_eq!(store.slots()[0].id, first_id);
    assert_eq!(store.slots()[0].price, 750.0);
    assert_eq!(store.slots()[1].id, second_id);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let (backend, client) = spawn_backend().await;
    let mut store = SlotStore::new(client);

    let half_filled = form("", "09:00", Meridiem::Am);
    let err = store.create(&half_filled).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(backend.create_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_delete_declined_sends_nothing() {
    let (backend, client) = spawn_backend().await;
    let mut store = SlotStore::new(client);

    store
        .create(&form("2030-03-10", "09:00", Meridiem::Am))
        .await
        .unwrap();
    let id = store.slots()[0].id.clone();

    let deleted = store.delete(&id, |_| false).await.unwrap();

    assert!(!deleted);
    assert_eq!(backend.delete_hits.load(Ordering::SeqCst), 0);
    assert_eq!(store.slots().len(), 1);
}

#[tokio::test]
async fn test_delete_confirmed_removes() {
    let (backend, client) = spawn_backend().await;
    let mut store = SlotStore::new(client);

    let mut form = form("2030-03-10", "09:00", Meridiem::Am);
    form.label = Some("Intro call".to_string());
    store.create(&form).await.unwrap();
    let id = store.slots()[0].id.clone();

    // The confirmation gate sees the cached record before anything is sent.
    let deleted = store
        .delete(&id, |slot| slot.label.as_deref() == Some("Intro call"))
        .await
        .unwrap();

    assert!(deleted);
    assert_eq!(backend.delete_hits.load(Ordering::SeqCst), 1);
    assert!(store.slots().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_id_is_validation() {
    let (backend, client) = spawn_backend().await;
    let mut store = SlotStore::new(client);
    store.refresh().await.unwrap();

    let err = store
        .delete(&SlotId::from("missing"), |_| true)
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(backend.delete_hits.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// BookingStore
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_blank_meeting_link_sends_nothing() {
    let (backend, client) = spawn_backend().await;
    let mut store = BookingStore::new(client, Role::Mentor);

    let err = store
        .confirm(&BookingId::from("b1"), "   ")
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(backend.confirm_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_seeker_cannot_confirm() {
    let (backend, client) = spawn_backend().await;
    let mut store = BookingStore::new(client, Role::Seeker);

    let err = store
        .confirm(&BookingId::from("b1"), "https://meet.example.com/xyz")
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(backend.confirm_hits.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// PublicSlotBoard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_booking_reloads_public_board() {
    let (backend, client) = spawn_backend().await;
    backend.seed_slot("s1", "2030-03-10T09:00:00Z", 500.0);
    backend.seed_slot("s2", "2030-03-11T09:00:00Z", 0.0);

    let mut board = PublicSlotBoard::new(client, UserId::from("m1"));
    assert!(!board.loaded());

    board.refresh().await.unwrap();
    assert_eq!(board.slots().map(|s| s.len()), Some(2));

    let booking = board
        .book(&SlotId::from("s1"), Some("Resume review focus"))
        .await
        .unwrap();
    assert_eq!(booking.slot.id, SlotId::from("s1"));
    assert_eq!(booking.notes.as_deref(), Some("Resume review focus"));

    // The board was invalidated and re-fetched, not patched locally.
    assert_eq!(backend.public_list_hits.load(Ordering::SeqCst), 2);
    let remaining = board.slots().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, SlotId::from("s2"));
}

#[tokio::test]
async fn test_booking_missing_slot_surfaces_server_message() {
    let (_backend, client) = spawn_backend().await;
    let mut board = PublicSlotBoard::new(client, UserId::from("m1"));
    board.refresh().await.unwrap();

    let err = board.book(&SlotId::from("gone"), None).await.unwrap_err();
    assert!(!err.is_validation());
    assert!(err.to_string().contains("Slot not found"));
}
