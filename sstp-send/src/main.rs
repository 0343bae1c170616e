// sstp-send - fire a single SSTP notification from the command line
//
// Exits successfully even when no listener is bound: delivery is
// best-effort, matching the library's fire-and-forget contract.

use anyhow::Result;
use clap::Parser;
use sstp_client::SstpNotifier;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "sstp-send",
    about = "Send an SSTP/1.1 NOTIFY request to a companion listener"
)]
struct Args {
    /// Sender identity placed in the Sender header
    #[arg(long, default_value = "GIPS.NET")]
    sender: String,

    /// Event name placed in the Event header
    #[arg(long)]
    event: String,

    /// Positional reference value (repeatable, order preserved)
    #[arg(long = "ref", value_name = "VALUE")]
    references: Vec<String>,

    /// Listener host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Listener port
    #[arg(long, default_value_t = 9801)]
    port: u16,

    /// Charset label used to frame the request and read the reply
    #[arg(long, default_value = "Shift-JIS")]
    charset: String,

    /// Connect/read deadline in seconds
    #[arg(long, default_value_t = 3)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing to stderr only - stdout stays clean for scripting
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sstp_client=debug".parse()?)
                .add_directive("sstp_send=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let notifier = SstpNotifier::new(args.sender)
        .with_host(args.host)
        .with_port(args.port)
        .with_charset(args.charset)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    let references: Vec<&str> = args.references.iter().map(String::as_str).collect();
    notifier.notify(&args.event, &references).await;

    info!("Notification dispatched: {}", args.event);
    Ok(())
}
