use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use vault_autounseal::cli::Cli;
use vault_autounseal::config::Settings;
use vault_autounseal::infra::shutdown;
use vault_autounseal::logging;
use vault_autounseal::secrets::resolve_unseal_key;
use vault_autounseal::unseal::UnsealController;
use vault_autounseal::vault::VaultClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    let settings = Settings::build(cli.config.as_deref(), &cli.overrides())?;
    let key = resolve_unseal_key(&settings.unseal)?;
    let client = VaultClient::new(&settings.address).context("Unable to initialize Vault client")?;

    info!(
        "Watching Vault at {} every {}s",
        client.base_url(),
        settings.loop_seconds
    );

    let shutdown_token = CancellationToken::new();
    let listener = shutdown::spawn_signal_listener(shutdown_token.clone());

    let controller = UnsealController::new(client, key, settings.poll_interval());
    let stats = controller.run(shutdown_token).await;
    listener.abort();

    info!(
        "Shut down after {} iteration(s), {} successful unseal(s)",
        stats.iterations, stats.unsealed
    );

    Ok(())
}
