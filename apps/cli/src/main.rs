//! bookledger binary entry point.

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    bookledger_cli::run().await
}
