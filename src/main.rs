use anyhow::Result;
use clap::Parser;
use hotlist::config::Config;
use hotlist::{pipeline, youtrack};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hotlist=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    match pipeline::run(&config).await {
        Ok(()) => Ok(()),
        Err(e) if is_connection_failure(&e) => {
            eprintln!(
                "{}",
                console::style("Can't establish a connection to the tracker")
                    .red()
                    .bold()
            );
            eprintln!("{e:#}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Auth rejections and transport-level connect failures end the run without
/// reports and with a zero exit; anything else propagates for a non-zero one.
fn is_connection_failure(err: &anyhow::Error) -> bool {
    err.downcast_ref::<youtrack::Error>()
        .is_some_and(youtrack::Error::is_connection_failure)
}
