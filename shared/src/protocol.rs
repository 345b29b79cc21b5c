use crate::{Tour, TourDraft, TourId};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// 后端函数的一个动作：定义动作名与响应类型
///
/// 所有请求都发往同一个端点，由信封中的 `action` 字段区分。
pub trait ApiAction: Serialize {
    /// The response type returned by this action.
    type Response: DeserializeOwned;
    /// 信封中的 `action` 值
    const ACTION: &'static str;
}

/// 请求信封：`{ "action": ..., ...params }`
#[derive(Debug, Serialize)]
pub struct ActionEnvelope<'a, A> {
    pub action: &'static str,
    #[serde(flatten)]
    pub params: &'a A,
}

impl<'a, A: ApiAction> ActionEnvelope<'a, A> {
    pub fn new(params: &'a A) -> Self {
        Self {
            action: A::ACTION,
            params,
        }
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// List all tours (no parameters)
#[derive(Debug, Serialize, Deserialize)]
pub struct ListToursRequest {}

impl ApiAction for ListToursRequest {
    type Response = Vec<Tour>;
    const ACTION: &'static str = "get_all_tours";
}

/// Create a tour; the backend assigns `id` and `created_at`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTourRequest {
    #[serde(flatten)]
    pub tour: TourDraft,
}

impl ApiAction for CreateTourRequest {
    type Response = serde_json::Value;
    const ACTION: &'static str = "create_tour";
}

/// Replace every editable field of an existing tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTourRequest {
    pub id: TourId,
    #[serde(flatten)]
    pub tour: TourDraft,
}

impl ApiAction for UpdateTourRequest {
    type Response = serde_json::Value;
    const ACTION: &'static str = "update_tour";
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteTourRequest {
    pub id: TourId,
}

impl ApiAction for DeleteTourRequest {
    type Response = serde_json::Value;
    const ACTION: &'static str = "delete_tour";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;
    use serde_json::json;

    #[test]
    fn test_list_envelope_has_only_action() {
        let value = serde_json::to_value(ActionEnvelope::new(&ListToursRequest {})).unwrap();
        assert_eq!(value, json!({ "action": "get_all_tours" }));
    }

    #[test]
    fn test_update_envelope_flattens_id_and_fields() {
        let req = UpdateTourRequest {
            id: TourId(42),
            tour: TourDraft {
                name: "Laguna 69".into(),
                difficulty: Difficulty::new(2).unwrap(),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(ActionEnvelope::new(&req)).unwrap();
        assert_eq!(value["action"], json!("update_tour"));
        assert_eq!(value["id"], json!(42));
        assert_eq!(value["name"], json!("Laguna 69"));
        assert_eq!(value["difficulty"], json!(2));
        assert!(value.get("tour").is_none());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_delete_envelope() {
        let req = DeleteTourRequest { id: TourId(3) };
        let value = serde_json::to_value(ActionEnvelope::new(&req)).unwrap();
        assert_eq!(value, json!({ "action": "delete_tour", "id": 3 }));
    }
}
