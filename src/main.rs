use clap::Parser;
use kvserve::cli::Cli;
use kvserve::imds::ImdsClient;
use kvserve::logging;
use kvserve::server::SecretServer;
use kvserve::vault::VaultClient;
use std::net::SocketAddr;
use std::process;
use tracing::info;

#[tokio::main]
async fn main() {
    logging::init();

    // Wrong argument count must exit with status 1, not clap's default 2.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            let _ = err.print();
            process::exit(1);
        }
        // --help / --version
        err.exit()
    });

    info!("Fetching managed identity token");
    let token = match ImdsClient::new().fetch_identity_token().await {
        Ok(token) => token,
        Err(err) => {
            eprintln!("Error getting KeyVault Token: {err}");
            process::exit(1);
        }
    };

    info!(
        "Fetching secret {} from vault {}",
        cli.secret_name, cli.vault_name
    );
    let vault = VaultClient::new(&cli.vault_name);
    let secret = match vault.fetch_secret(&cli.secret_name, &token).await {
        Ok(secret) => secret,
        Err(err) => {
            eprintln!("Error getting Secret: {err}");
            process::exit(1);
        }
    };

    let addr: SocketAddr = ([0, 0, 0, 0], 80).into();
    let result = match SecretServer::bind(addr, secret).await {
        Ok(server) => server.serve().await,
        Err(err) => Err(err),
    };
    if let Err(err) = result {
        eprintln!("Error serving secret: {err}");
        process::exit(1);
    }
}
