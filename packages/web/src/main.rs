// Entry point for the job board web application

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    jobboard_web::telemetry::init();

    tracing::info!("Starting job board web server");

    jobboard_web::server::serve(jobboard_web::App).await
}

#[cfg(not(feature = "server"))]
fn main() {
    jobboard_web::telemetry::init();

    tracing::info!("Starting job board web shell");

    dioxus::launch(jobboard_web::App);
}
