use super::*;
use crate::error::{DELETE_TOUR_FAILED, LOAD_TOURS_FAILED, SAVE_TOUR_FAILED};
use crate::tours::form_state::TourField;
use crate::tours::state::{DialogMode, Phase};
use crate::web::MockHttpClient;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use trek_admin_shared::{Tour, TourId};

// =========================================================
// 辅助函数
// =========================================================

impl TourStore for Rc<RefCell<TourManager>> {
    fn modify<R>(&self, f: impl FnOnce(&mut TourManager) -> R) -> Option<R> {
        Some(f(&mut RefCell::borrow_mut(self)))
    }
}

type TestController = ToursController<Rc<RefCell<TourManager>>, MockHttpClient>;

fn tour_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "Full day hike",
        "altitude": 4600,
        "difficulty": 2,
        "distance": 14,
        "temperature": "5-15°C",
        "days": 1,
        "hours": 0,
        "price_one": 120,
        "price_couple": 110,
        "price_three_to_five": 100,
        "price_six_plus": 90,
        "images": ["https://cdn.test/a.jpg", "https://cdn.test/b.jpg"],
        "includes": ["Transportation", "Guide"],
        "recommendations": ["Bring warm clothes"],
        "status": "active",
        "created_at": "2024-03-01T08:00:00+00:00"
    })
}

fn sample_tour(id: i64, name: &str) -> Tour {
    serde_json::from_value(tour_json(id, name)).unwrap()
}

fn create_controller(client: &MockHttpClient) -> TestController {
    let api = TrekApi::with_client("https://example.test/api", client.clone()).authorized("tok");
    ToursController::new(Rc::new(RefCell::new(TourManager::default())), api)
}

fn with_state<R>(controller: &TestController, f: impl FnOnce(&TourManager) -> R) -> R {
    f(&RefCell::borrow(&controller.store))
}

// =========================================================
// 加载
// =========================================================

#[tokio::test]
async fn test_load_populates_list() {
    let client = MockHttpClient::new();
    client.mock_response(
        "get_all_tours",
        200,
        json!([tour_json(1, "Laguna 69"), tour_json(2, "Pastoruri")]),
    );
    let controller = create_controller(&client);

    controller.load().await;

    with_state(&controller, |m| {
        assert_eq!(m.phase(), Phase::Idle);
        assert_ne!(m.phase(), Phase::Loading);
        assert_eq!(m.error(), None);
        assert_eq!(m.tours().len(), 2);
        assert_eq!(m.tours()[1].details.name, "Pastoruri");
    });
}

#[tokio::test]
async fn test_load_failure_shows_error_and_no_list() {
    let client = MockHttpClient::new();
    client.mock_response("get_all_tours", 200, json!([tour_json(1, "Laguna 69")]));
    let controller = create_controller(&client);
    controller.load().await;

    client.mock_response("get_all_tours", 503, json!({}));
    controller.load().await;

    with_state(&controller, |m| {
        assert_eq!(m.phase(), Phase::Error);
        assert_ne!(m.phase(), Phase::Loading);
        assert_eq!(m.error(), Some(LOAD_TOURS_FAILED));
        assert!(m.tours().is_empty());
    });
}

#[tokio::test]
async fn test_network_failure_on_load() {
    let client = MockHttpClient::new();
    client.mock_network_error("get_all_tours");
    let controller = create_controller(&client);

    controller.load().await;

    with_state(&controller, |m| {
        assert_eq!(m.error(), Some(LOAD_TOURS_FAILED));
        assert_ne!(m.phase(), Phase::Loading);
    });
}

#[tokio::test]
async fn test_successful_reload_clears_previous_error() {
    let client = MockHttpClient::new();
    client.mock_network_error("get_all_tours");
    let controller = create_controller(&client);
    controller.load().await;

    client.mock_response("get_all_tours", 200, json!([tour_json(3, "Churup")]));
    controller.load().await;

    with_state(&controller, |m| {
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.error(), None);
        assert_eq!(m.tours().len(), 1);
    });
}

// =========================================================
// 创建 / 编辑
// =========================================================

#[tokio::test]
async fn test_create_submits_integer_difficulty_then_reloads() {
    let client = MockHttpClient::new();
    client.mock_response("create_tour", 200, json!({ "id": 10 }));
    client.mock_response("get_all_tours", 200, json!([tour_json(10, "X")]));
    let controller = create_controller(&client);

    controller.store.modify(|m| {
        m.open_create();
        m.edit_form(TourField::Name, "X".into());
        m.edit_form(TourField::Difficulty, "3".into());
    });
    assert_eq!(
        with_state(&controller, TourManager::phase),
        Phase::DialogOpen(DialogMode::Create)
    );

    controller.submit().await;

    let body = client.last_request("create_tour").unwrap().body;
    assert_eq!(body["name"], json!("X"));
    assert_eq!(body["difficulty"], json!(3));
    assert_eq!(body["status"], json!("active"));
    assert_eq!(client.calls("get_all_tours"), 1);
    with_state(&controller, |m| {
        assert!(m.dialog().is_none());
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.tours()[0].id, TourId(10));
    });
}

#[tokio::test]
async fn test_non_numeric_difficulty_defaults_to_one() {
    let client = MockHttpClient::new();
    client.mock_response("create_tour", 200, json!(null));
    let controller = create_controller(&client);

    controller.store.modify(|m| {
        m.open_create();
        m.edit_form(TourField::Difficulty, "very hard".into());
    });
    controller.submit().await;

    let body = client.last_request("create_tour").unwrap().body;
    assert_eq!(body["difficulty"], json!(1));
}

#[tokio::test]
async fn test_failed_submit_keeps_dialog_open() {
    let client = MockHttpClient::new();
    client.mock_response("create_tour", 400, json!({ "error": "bad" }));
    let controller = create_controller(&client);

    controller.store.modify(|m| {
        m.open_create();
        m.edit_form(TourField::Name, "Broken".into());
    });
    controller.submit().await;

    assert_eq!(client.calls("get_all_tours"), 0);
    with_state(&controller, |m| {
        assert_eq!(m.error(), Some(SAVE_TOUR_FAILED));
        let dialog = m.dialog().expect("dialog should stay open");
        assert_eq!(dialog.form.name, "Broken");
    });
}

#[tokio::test]
async fn test_edit_updates_by_id_with_split_lists() {
    let client = MockHttpClient::new();
    client.mock_response("update_tour", 200, json!({ "ok": true }));
    client.mock_response("get_all_tours", 200, json!([tour_json(7, "Laguna 69")]));
    let controller = create_controller(&client);
    let tour = sample_tour(7, "Laguna 69");

    controller.store.modify(|m| m.open_edit(&tour));
    with_state(&controller, |m| {
        let dialog = m.dialog().unwrap();
        assert_eq!(dialog.mode(), DialogMode::Edit);
        assert_eq!(dialog.form.images, "https://cdn.test/a.jpg, https://cdn.test/b.jpg");
        assert_eq!(dialog.form.includes, "Transportation, Guide");
    });

    controller
        .store
        .modify(|m| m.edit_form(TourField::Images, "a.jpg, b.jpg,  ".into()));
    controller.submit().await;

    let body = client.last_request("update_tour").unwrap().body;
    assert_eq!(body["action"], json!("update_tour"));
    assert_eq!(body["id"], json!(7));
    assert_eq!(body["images"], json!(["a.jpg", "b.jpg"]));
    assert_eq!(body["includes"], json!(["Transportation", "Guide"]));
    assert!(body.get("created_at").is_none());
    assert_eq!(client.calls("create_tour"), 0);
    assert_eq!(client.calls("get_all_tours"), 1);
}

#[tokio::test]
async fn test_submit_without_dialog_does_nothing() {
    let client = MockHttpClient::new();
    let controller = create_controller(&client);

    controller.submit().await;

    assert_eq!(client.request_count(), 0);
}

// =========================================================
// 删除
// =========================================================

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let client = MockHttpClient::new();
    client.mock_response("delete_tour", 200, json!({}));
    client.mock_response("get_all_tours", 200, json!([]));
    let controller = create_controller(&client);
    let tour = sample_tour(4, "Santa Cruz");

    controller.store.modify(|m| m.request_delete(&tour));

    assert_eq!(client.calls("delete_tour"), 0);
    assert_eq!(with_state(&controller, TourManager::phase), Phase::DeleteConfirm);

    controller.confirm_delete().await;

    assert_eq!(client.calls("delete_tour"), 1);
    assert_eq!(
        client.last_request("delete_tour").unwrap().body,
        json!({ "action": "delete_tour", "id": 4 })
    );
    assert_eq!(client.calls("get_all_tours"), 1);
    with_state(&controller, |m| assert!(m.pending_delete().is_none()));
}

#[tokio::test]
async fn test_cancelled_delete_never_calls_backend() {
    let client = MockHttpClient::new();
    let controller = create_controller(&client);
    let tour = sample_tour(4, "Santa Cruz");

    controller.store.modify(|m| {
        m.request_delete(&tour);
        m.cancel_delete();
    });
    controller.confirm_delete().await;

    assert_eq!(client.calls("delete_tour"), 0);
    assert_eq!(with_state(&controller, TourManager::phase), Phase::Idle);
}

#[tokio::test]
async fn test_failed_delete_reports_error() {
    let client = MockHttpClient::new();
    client.mock_network_error("delete_tour");
    let controller = create_controller(&client);
    let tour = sample_tour(4, "Santa Cruz");

    controller.store.modify(|m| m.request_delete(&tour));
    controller.confirm_delete().await;

    assert_eq!(client.calls("get_all_tours"), 0);
    with_state(&controller, |m| {
        assert_eq!(m.error(), Some(DELETE_TOUR_FAILED));
        assert_eq!(m.pending_delete().map(|t| t.id), Some(TourId(4)));
    });
}
