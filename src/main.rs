use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::bank_service::BankService;
use payment_gateway::application::merchant_service::MerchantService;
use payment_gateway::application::payment_service::PaymentService;
use payment_gateway::domain::ports::{SharedMerchantStore, SharedPaymentStore};
use payment_gateway::infrastructure::acquirer::AcquirerClient;
use payment_gateway::infrastructure::in_memory::{InMemoryMerchantStore, InMemoryPaymentStore};
use payment_gateway::interfaces::http::{AppState, router};
use reqwest::Url;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Authorization endpoint of the acquiring bank
    #[arg(long, default_value = "http://localhost:8080/payments")]
    acquirer_url: Url,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let payment_store: SharedPaymentStore = Arc::new(InMemoryPaymentStore::new());
    let merchant_store: SharedMerchantStore = Arc::new(InMemoryMerchantStore::new());

    let bank = BankService::new(Box::new(AcquirerClient::new(cli.acquirer_url)));
    let state = AppState {
        payment_service: Arc::new(PaymentService::new(payment_store.clone(), bank)),
        merchant_service: Arc::new(MerchantService::new(merchant_store.clone())),
        payment_store,
        merchant_store,
    };

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .into_diagnostic()?;
    tracing::info!(listen = %cli.listen, "payment gateway listening");
    axum::serve(listener, router(state)).await.into_diagnostic()?;

    Ok(())
}
