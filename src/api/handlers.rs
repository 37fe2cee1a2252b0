//! Request handlers for the API endpoints.

use std::fmt::Display;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{
    CurveQuery, ErrorResponse, MetricsQuery, MetricsResponse, RevenueQuery, RevenueResponse,
};
use crate::project::{
    CashFlowProjection, CurvePoint, Parameter, ProjectInputs, ProjectMetrics, revenue_curve,
};
use crate::tariff::TariffSchedule;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(e: impl Display) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn check_inputs(inputs: &ProjectInputs) -> Result<(), ApiError> {
    match inputs.validate().into_iter().next() {
        None => Ok(()),
        Some(e) => Err(bad_request(format!("`{}` {}", e.field, e.message))),
    }
}

fn check_yield(yield_kwh_per_kwc: f64) -> Result<(), ApiError> {
    Parameter::Yield
        .check(yield_kwh_per_kwc)
        .map_err(|msg| bad_request(format!("`{}` {msg}", Parameter::Yield.key())))
}

/// Returns the buyback schedule.
///
/// `GET /tariff` → 200 + `TariffSchedule` JSON
pub async fn get_tariff(State(state): State<Arc<AppState>>) -> Json<TariffSchedule> {
    Json(state.schedule.clone())
}

/// Returns the buyback revenue of a production and capacity.
///
/// `GET /revenue?annual_kwh=X&installed_kwc=Y` → 200 + `RevenueResponse`
/// `GET /revenue?annual_kwh=X&installed_kwc=501` → 400 + `ErrorResponse`
pub async fn get_revenue(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RevenueQuery>,
) -> Result<Json<RevenueResponse>, ApiError> {
    let annual_revenue = state
        .schedule
        .buyback_revenue(query.annual_kwh, query.installed_kwc)
        .map_err(bad_request)?;
    Ok(Json(RevenueResponse {
        annual_kwh: query.annual_kwh,
        installed_kwc: query.installed_kwc,
        annual_revenue,
    }))
}

/// Returns project metrics for the scenario, overridden by the query.
///
/// `GET /metrics` → 200 + `MetricsResponse` for the scenario as loaded
/// `GET /metrics?capacity_kwc=250` → same, at 250 kWc
/// `GET /metrics?capacity_kwc=600` → 400 + `ErrorResponse`
/// `GET /metrics?cost_per_kwc=-2000` → 400 + `ErrorResponse`
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let inputs = query.apply(state.scenario.inputs());
    check_inputs(&inputs)?;
    let metrics = ProjectMetrics::evaluate(&inputs, &state.schedule).map_err(bad_request)?;
    let cash_flow = CashFlowProjection::from_metrics(&metrics, state.scenario.contract.years);
    Ok(Json(MetricsResponse::new(inputs, &metrics, &cash_flow)))
}

/// Returns the revenue curve over the scenario's capacity range.
///
/// `GET /curve` → 200 + `Vec<CurvePoint>` at the scenario yield
/// `GET /curve?yield_kwh_per_kwc=1320` → same, at 1320 kWh/kWc
pub async fn get_curve(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CurveQuery>,
) -> Result<Json<Vec<CurvePoint>>, ApiError> {
    let yield_kwh_per_kwc = query
        .yield_kwh_per_kwc
        .unwrap_or(state.scenario.installation.yield_kwh_per_kwc);
    check_yield(yield_kwh_per_kwc)?;
    let points = revenue_curve(&state.schedule, yield_kwh_per_kwc, &state.scenario.sweep())
        .map_err(bad_request)?;
    Ok(Json(points))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::ScenarioConfig;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState {
            schedule: TariffSchedule::default(),
            scenario: ScenarioConfig::default(),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(make_test_state());
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn tariff_lists_five_bands() {
        let (status, json) = get_json("/tariff").await;
        assert_eq!(status, StatusCode::OK);
        let bands = json["bands"].as_array().unwrap();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[0]["rate"]["kind"], "flat");
        assert_eq!(bands[4]["rate"]["kind"], "degressive");
        assert_eq!(bands[4]["max_kwc"], 500.0);
    }

    #[tokio::test]
    async fn revenue_with_excess_production() {
        let (status, json) = get_json("/revenue?annual_kwh=250000&installed_kwc=200").await;
        assert_eq!(status, StatusCode::OK);
        let revenue = json["annual_revenue"].as_f64().unwrap();
        assert!((revenue - 25_554.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn revenue_beyond_ceiling_returns_400() {
        let (status, json) = get_json("/revenue?annual_kwh=700000&installed_kwc=501").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("500 kWc"));
    }

    #[tokio::test]
    async fn metrics_default_to_scenario() {
        let (status, json) = get_json("/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["installation_cost"], 90_000.0);
        assert_eq!(json["annual_maintenance_cost"], 2_000.0);
        assert_eq!(json["inputs"]["capacity_kwc"], 100.0);
        assert!(json["amortization_years"].as_f64().unwrap().is_finite());
    }

    #[tokio::test]
    async fn metrics_not_amortizable_is_null() {
        let (status, json) = get_json("/metrics?maintenance_per_kwc=500").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["amortization_years"].is_null());
        assert!(json["break_even_year"].is_null());
    }

    #[tokio::test]
    async fn metrics_out_of_range_returns_400() {
        let (status, json) = get_json("/metrics?capacity_kwc=600").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn metrics_reject_negative_or_nan_costs() {
        let (status, json) = get_json("/metrics?cost_per_kwc=-2000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("cost_per_kwc"));

        for uri in ["/metrics?connection_cost=-1", "/metrics?maintenance_per_kwc=NaN"] {
            let (status, _) = get_json(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn curve_uses_query_yield() {
        let (status, json) = get_json("/curve?yield_kwh_per_kwc=1320").await;
        assert_eq!(status, StatusCode::OK);
        let points = json.as_array().unwrap();
        assert_eq!(points.len(), 500);
        assert_eq!(points[9]["capacity_kwc"], 10.0);
        assert_eq!(points[9]["annual_production_kwh"], 13_200.0);
    }

    #[tokio::test]
    async fn curve_rejects_non_positive_yield() {
        let (status, _) = get_json("/curve?yield_kwh_per_kwc=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
