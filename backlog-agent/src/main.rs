//! backlog-agent: serverless action-group function searching Backlog issues
//! and wikis on behalf of a conversational agent.

use anyhow::{Context, Result};
use backlog_agent::{ActionRequest, Dispatcher};
use backlog_api::BacklogClient;
use backlog_core::{AppConfig, AwsSecretsManager, BacklogSettings, SecretBundle};
use lambda_runtime::{LambdaEvent, service_fn};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
  // CloudWatch timestamps every line and does not render ANSI escapes.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
    .with_ansi(false)
    .without_time()
    .init();

  let config = AppConfig::from_env().context("Failed to read configuration")?;

  // Secrets are fetched once, before any invocation is accepted.
  let source = AwsSecretsManager::new(&config.region).await;
  let bundle = SecretBundle::load(&source, &config.secret_name)
    .await
    .context("Failed to load Backlog secrets")?;
  let settings = BacklogSettings::from_bundle(&bundle).context("Backlog secrets are incomplete")?;
  info!("Loaded Backlog settings for {}", settings.base_url);

  let dispatcher = Dispatcher::new(BacklogClient::new(&settings), config.strict_routes);
  let dispatcher = &dispatcher;

  lambda_runtime::run(service_fn(move |event: LambdaEvent<ActionRequest>| async move {
    dispatcher.handle(event.payload).await.map_err(|err| {
      error!("Invocation failed: {}", err);
      lambda_runtime::Error::from(err)
    })
  }))
  .await
  .map_err(|err| anyhow::anyhow!(err))
  .context("Lambda runtime exited")?;

  Ok(())
}
