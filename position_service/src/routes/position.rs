use aave_client::{ClientError, UserPosition};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub network: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub user_data: UserPosition,
    pub total_collateral: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Handles `POST /api/position` as one request/response cycle. Validation failures and
/// client-classified errors answer 400 with a stable code; anything the
/// client could not classify answers 500. Every request either returns the
/// complete account data or an error, never a partial result.
pub async fn get_position(Json(request): Json<PositionRequest>) -> Response {
    let address = request.address.trim().to_string();
    let network = request.network.trim().to_string();

    if address.is_empty() || network.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Address and network are required".to_string(),
            None,
        );
    }

    match fetch_position(&address, &network).await {
        Ok(position) => {
            info!(
                "Fetched position for {} on {}",
                position.user_address, position.network
            );
            let total_collateral = total_collateral(&position);
            (
                StatusCode::OK,
                Json(PositionResponse {
                    user_data: position,
                    total_collateral,
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!("Position lookup failed for {} on {}: {}", address, network, err);
            error_response(error_status(&err), err.to_string(), Some(err.code().to_string()))
        }
    }
}

/// A fresh client per invocation; no connection is shared across requests.
async fn fetch_position(address: &str, network: &str) -> Result<UserPosition, ClientError> {
    let client = aave_client::connect(network)?;
    client.get_user_position(address).await
}

fn error_status(err: &ClientError) -> StatusCode {
    match err {
        ClientError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

fn total_collateral(position: &UserPosition) -> f64 {
    position
        .account_data
        .total_collateral_base
        .parse()
        .unwrap_or(0.0)
}

fn error_response(status: StatusCode, error: String, code: Option<String>) -> Response {
    (status, Json(ErrorResponse { error, code })).into_response()
}
