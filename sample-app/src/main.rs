use mediator::context::RequestContext;
use sample_app::app;
use sample_app::config::AppConfig;
use sample_app::controllers::HomeController;
use sample_app::telemetry;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    telemetry::init(&config)?;

    let mediator = Arc::new(app::build_mediator()?);
    tracing::info!(
        requests = ?mediator.registered_requests(),
        behaviors = ?mediator.behaviors(),
        "mediator ready"
    );

    // Ctrl-C 取消进行中的分发
    let token = CancellationToken::new();
    tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        }
    });

    let ctx = RequestContext::builder()
        .cancellation(token)
        .maybe_correlation_id(Some(Uuid::new_v4().to_string()))
        .build();
    let controller = HomeController::new(mediator);

    let results = app::run_actions(&controller, &ctx)
        .instrument(telemetry::service_span(&config))
        .await?;

    for result in &results {
        tracing::info!(
            view = result.view,
            no_store = result.no_store,
            request_id = result.model.as_ref().and_then(|m| m.request_id.as_deref()),
            "rendered"
        );
    }
    Ok(())
}
