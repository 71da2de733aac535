// Pattern 3: Strategy - Notification Channels
// The service picks a strategy per channel at runtime.

use colored::Colorize;
use design_patterns::config::LoggingConfig;
use design_patterns::logging;
use design_patterns::strategy::NotificationService;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init(&LoggingConfig::default())?;

    println!("{}", "Pattern 3: Strategy - Notification Channels".bold());
    println!("============================================\n");

    let service = NotificationService::new();
    println!("Registered channels: {}\n", service.channels().join(", "));

    let channels = ["discord", "instagram", "twitter", "whatsapp", "email", "telegram"];

    for channel in channels {
        println!("Sending notification via {}...", channel.cyan());
        match service.notify(channel, "user@example.com", "Hello! This is a test message.") {
            Ok(receipt) => println!(
                "{} Delivered to {} via {}",
                "✓".green(),
                receipt.destination,
                receipt.platform
            ),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
        println!();
    }

    Ok(())
}
