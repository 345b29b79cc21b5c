use trek_admin_shared::protocol::{
    ActionEnvelope, ApiAction, CreateTourRequest, DeleteTourRequest, ListToursRequest,
    UpdateTourRequest,
};
use trek_admin_shared::{
    CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, Tour, TourDraft, TourId, bearer,
};

use crate::error::{ApiError, ApiResult};
use crate::web::{FetchClient, HttpClient, HttpRequest};

/// Nevado Trek 后端函数客户端
///
/// 每个操作都是发往同一端点的 POST，请求体为 `{ action, ...params }`。
/// 持有 token 时，每个请求都带上 `Authorization: Bearer <token>`。
#[derive(Clone, Debug)]
pub struct TrekApi<C = FetchClient> {
    endpoint: String,
    token: Option<String>,
    client: C,
}

impl TrekApi<FetchClient> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, FetchClient)
    }
}

impl<C: HttpClient> TrekApi<C> {
    pub fn with_client(endpoint: impl Into<String>, client: C) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            client,
        }
    }

    /// 返回携带指定 token 的新客户端
    pub fn authorized(&self, token: &str) -> Self
    where
        C: Clone,
    {
        Self {
            endpoint: self.endpoint.clone(),
            token: Some(token.to_string()),
            client: self.client.clone(),
        }
    }

    async fn call<A: ApiAction>(&self, params: &A) -> ApiResult<A::Response> {
        let action = A::ACTION;
        let body = serde_json::to_string(&ActionEnvelope::new(params))
            .map_err(|source| ApiError::Encode { action, source })?;

        let mut req = HttpRequest::post(&self.endpoint)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .with_body(body);
        if let Some(token) = &self.token {
            req = req.with_header(HEADER_AUTHORIZATION, &bearer(token));
        }

        tracing::debug!(action, "calling backend");
        let res = self
            .client
            .send(req)
            .await
            .map_err(|source| ApiError::Transport { action, source })?;

        if !res.ok() {
            return Err(ApiError::Status {
                action,
                status: res.status,
            });
        }

        // 空响应体按 JSON null 处理
        let text = if res.body.trim().is_empty() {
            "null"
        } else {
            res.body.as_str()
        };
        serde_json::from_str(text).map_err(|source| ApiError::Decode { action, source })
    }

    /// 获取全部行程
    pub async fn get_all_tours(&self) -> ApiResult<Vec<Tour>> {
        self.call(&ListToursRequest {}).await
    }

    /// 创建行程，返回后端的原始 JSON 响应
    pub async fn create_tour(&self, tour: &TourDraft) -> ApiResult<serde_json::Value> {
        self.call(&CreateTourRequest { tour: tour.clone() }).await
    }

    /// 整体替换行程的可编辑字段
    pub async fn update_tour(&self, id: TourId, tour: &TourDraft) -> ApiResult<serde_json::Value> {
        self.call(&UpdateTourRequest {
            id,
            tour: tour.clone(),
        })
        .await
    }

    pub async fn delete_tour(&self, id: TourId) -> ApiResult<serde_json::Value> {
        self.call(&DeleteTourRequest { id }).await
    }

    /// 验证 token：用该 token 请求一次行程列表，仅关心是否成功
    pub async fn verify_token(&self, token: &str) -> bool
    where
        C: Clone,
    {
        match self.authorized(token).call(&ListToursRequest {}).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "token verification failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::MockHttpClient;
    use serde_json::json;
    use trek_admin_shared::Difficulty;

    const ENDPOINT: &str = "https://example.test/functions/v1/trek-api";

    fn api(client: &MockHttpClient) -> TrekApi<MockHttpClient> {
        TrekApi::with_client(ENDPOINT, client.clone())
    }

    #[tokio::test]
    async fn test_get_all_tours_posts_action_envelope() {
        let client = MockHttpClient::new();
        client.mock_response(
            "get_all_tours",
            200,
            json!([{ "id": 1, "name": "Pastoruri", "altitude": 5000, "difficulty": 2,
                     "distance": 3, "days": 0, "hours": 6, "price_one": 90,
                     "price_couple": 80, "price_three_to_five": 70, "price_six_plus": 60,
                     "status": "active" }]),
        );

        let tours = api(&client).authorized("tok").get_all_tours().await.unwrap();

        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].details.name, "Pastoruri");
        let req = client.last_request("get_all_tours").unwrap();
        assert_eq!(req.url, ENDPOINT);
        assert_eq!(req.body, json!({ "action": "get_all_tours" }));
        assert_eq!(req.authorization.as_deref(), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_non_2xx_is_request_failure() {
        let client = MockHttpClient::new();
        client.mock_response("delete_tour", 500, json!({ "error": "boom" }));

        let err = api(&client).delete_tour(TourId(9)).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Status {
                action: "delete_tour",
                status: 500
            }
        ));
        assert_eq!(
            client.last_request("delete_tour").unwrap().body,
            json!({ "action": "delete_tour", "id": 9 })
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_request_failure() {
        let client = MockHttpClient::new();
        client.mock_network_error("get_all_tours");

        let err = api(&client).get_all_tours().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
        assert_eq!(err.action(), "get_all_tours");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let client = MockHttpClient::new();
        client.mock_response("get_all_tours", 200, json!({ "not": "a list" }));

        let err = api(&client).get_all_tours().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_create_sends_flat_fields_with_integer_difficulty() {
        let client = MockHttpClient::new();
        client.mock_response("create_tour", 201, json!({ "id": 12 }));
        let draft = TourDraft {
            name: "X".into(),
            difficulty: Difficulty::new(3).unwrap(),
            ..Default::default()
        };

        let res = api(&client).create_tour(&draft).await.unwrap();

        assert_eq!(res, json!({ "id": 12 }));
        let body = client.last_request("create_tour").unwrap().body;
        assert_eq!(body["action"], json!("create_tour"));
        assert_eq!(body["name"], json!("X"));
        assert_eq!(body["difficulty"], json!(3));
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_verify_token() {
        let client = MockHttpClient::new();
        let api = api(&client);

        assert!(!api.verify_token("bad").await);

        client.mock_response("get_all_tours", 200, json!([]));
        assert!(api.verify_token("good").await);

        let req = client.last_request("get_all_tours").unwrap();
        assert_eq!(req.authorization.as_deref(), Some("Bearer good"));
        // 验证不会修改原客户端
        assert_eq!(api.token, None);
    }
}
