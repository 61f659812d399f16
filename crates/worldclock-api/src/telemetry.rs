//! Tracing subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::AppError;

const SERVICE_NAME: &str = "worldclock-api";

/// Installs the global subscriber: JSON logs filtered by `RUST_LOG`
/// (default `info`), plus OTLP span export when `otlp_endpoint` is set.
///
/// The returned provider must be shut down before exit to flush spans.
///
/// # Errors
///
/// Returns `AppError::Telemetry` if the OTLP exporter cannot be built.
pub fn init(otlp_endpoint: Option<&str>) -> Result<Option<SdkTracerProvider>, AppError> {
    let provider = otlp_endpoint
        .map(|endpoint| {
            let exporter = SpanExporter::builder()
                .with_tonic()
                .with_endpoint(endpoint)
                .build()
                .map_err(|e| AppError::Telemetry(e.to_string()))?;
            Ok::<_, AppError>(
                SdkTracerProvider::builder()
                    .with_resource(Resource::builder().with_service_name(SERVICE_NAME).build())
                    .with_batch_exporter(exporter)
                    .build(),
            )
        })
        .transpose()?;

    let otel_layer = provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(SERVICE_NAME)));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().json())
        .with(otel_layer)
        .init();

    Ok(provider)
}
