// Manual check: forward an unhandled-exception event the way the IDE glue
// does, via the fire-and-forget path. Succeeds with or without a listener.

use sstp_client::{SstpNotifier, UnhandledException};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("sstp_client=debug")
        .init();

    let notifier = SstpNotifier::new("GIPS.NET");

    let event = UnhandledException {
        language: "C#".to_string(),
        exception_type: "System.NullReferenceException".to_string(),
        file: "Program.cs".to_string(),
        line: 42,
        message: "Object reference not set to an instance of an object.".to_string(),
    };

    println!("Forwarding {:?}", event);
    notifier.notify_event(&event).await;
    println!("✓ Done (delivery is best-effort)");

    Ok(())
}
