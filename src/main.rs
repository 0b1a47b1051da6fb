mod telemetry;

use homeboard_api::Application;
use homeboard_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("homeboard_reminders".into(), "info".into());
    init_subscriber(subscriber);

    run_migration().await?;
    let context = setup_context().await?;
    info!(timezone = %context.config.timezone, "Configuration loaded");

    let app = Application::new(context).await?;
    app.start().await?;
    Ok(())
}
