// Manual check: send a session-start notification to a live listener
//
// Start an SSTP-capable companion (SSP etc.) on the default port first.

use sstp_client::SstpNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Enable tracing
    tracing_subscriber::fmt()
        .with_env_filter("sstp_client=debug")
        .init();

    println!("Sending OnGIPSStart to 127.0.0.1:9801...");

    let notifier = SstpNotifier::new("GIPS.NET");
    let reply = notifier.send("OnGIPSStart", &["GIPS.NET", "0.1"]).await?;

    println!("✓ Notification delivered! (reply reserved: {:?})", reply);

    Ok(())
}
