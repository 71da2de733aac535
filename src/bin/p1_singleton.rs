// Pattern 1: Singleton - Database Connection Manager
// One lazily built DatabaseManager shared by every caller in the process.

use colored::Colorize;
use design_patterns::config::AppConfig;
use design_patterns::logging;
use design_patterns::singleton::{ConnectOutcome, DatabaseManager, DisconnectOutcome};
use rayon::prelude::*;
use std::error::Error;
use std::thread;
use std::time::Duration;

const CONFIG: &str = include_str!("../../config/singleton.toml");

// ============================================================================
// Example: Every accessor call yields the same instance
// ============================================================================

fn same_instance_example() {
    let db1 = DatabaseManager::global();
    let db2 = DatabaseManager::global();
    let db3 = DatabaseManager::global();

    println!("db1: {:p}", db1);
    println!("db2: {:p}", db2);
    println!("db3: {:p}", db3);
    println!("db1 == db2: {}", std::ptr::eq(db1, db2));
    println!("db2 == db3: {}", std::ptr::eq(db2, db3));
    println!("Connection string: {}", db1.connection_string());
}

// ============================================================================
// Example: Several services sharing the connection concurrently
// ============================================================================

fn use_database(service: &str) {
    let db = DatabaseManager::global();
    println!("\n{} {} starting...", "🔧".cyan(), service.bold());

    match db.connect() {
        ConnectOutcome::Connected { connection_number } => println!(
            "{} {}: connected (connection #{})",
            "✓".green(),
            service,
            connection_number
        ),
        ConnectOutcome::AlreadyConnected { .. } => {
            println!("{} {}: connection already active", "ℹ".blue(), service)
        }
    }

    let queries = [
        format!("SELECT * FROM {}_users", service),
        format!("SELECT * FROM {}_config", service),
    ];

    for query in &queries {
        match db.execute_query(query) {
            Ok(result) => println!("{} {}: {}", "✓".green(), service, result),
            Err(e) => println!("{} {}: query failed: {}", "✗".red(), service, e),
        }
        thread::sleep(Duration::from_millis(100));
    }

    println!("{} {} finished", "🏁".yellow(), service);
}

fn concurrent_services_example() {
    let services = ["UserService", "OrderService", "PaymentService", "NotificationService"];

    thread::scope(|s| {
        for service in services {
            s.spawn(move || use_database(service));
        }
    });
}

// ============================================================================
// Example: Final state and explicit state transitions
// ============================================================================

fn final_state_example() -> Result<(), Box<dyn Error>> {
    let db = DatabaseManager::global();
    let status = db.status();
    println!("{}", status);
    println!("As JSON: {}", serde_json::to_string(&status)?);

    match db.disconnect() {
        DisconnectOutcome::Disconnected => println!("{} Disconnected", "✓".green()),
        DisconnectOutcome::AlreadyDisconnected => {
            println!("{} No active connection to close", "ℹ".blue())
        }
    }

    match db.execute_query("SELECT 1") {
        Ok(result) => println!("{} {}", "✓".green(), result),
        Err(e) => println!("{} Query after disconnect: {}", "✗".red(), e),
    }
    println!("{}", db.status());
    Ok(())
}

// ============================================================================
// Example: Thread safety of the accessor
// ============================================================================

fn thread_safety_example() {
    let addresses: Vec<usize> = (0..10)
        .into_par_iter()
        .map(|i| {
            let instance = DatabaseManager::global();
            println!("Worker {} got instance: {:p}", i, instance);
            instance as *const DatabaseManager as usize
        })
        .collect();

    let first = addresses[0];
    let mismatched: Vec<usize> = addresses
        .iter()
        .enumerate()
        .filter(|&(_, &addr)| addr != first)
        .map(|(i, _)| i)
        .collect();

    if mismatched.is_empty() {
        println!("{}", "✓ All instances are identical - thread safety confirmed!".green());
    } else {
        for i in mismatched {
            println!("{}", format!("✗ Instance {} is different!", i).red());
        }
    }

    let registry = DatabaseManager::global_registry();
    println!("Constructions so far: {}", registry.constructions());
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_toml_str(CONFIG)?;
    logging::init(&config.logging)?;
    DatabaseManager::init_global(config.database);

    println!("{}", "Pattern 1: Singleton - Database Connection Manager".bold());
    println!("{}", "=".repeat(60));

    println!("\n=== Same Instance ===");
    same_instance_example();

    println!("\n=== Concurrent Services ===");
    concurrent_services_example();

    println!("\n=== Final State ===");
    final_state_example()?;

    println!("\n=== Thread Safety ===");
    thread_safety_example();

    println!("\n=== Key Points ===");
    println!("1. OnceLock runs the initializer exactly once, even under contention");
    println!("2. Every caller shares the same &'static DatabaseManager");
    println!("3. One Mutex serializes connect, disconnect, queries and status reads");
    println!("4. Prefer an owned Registry passed by reference when globals aren't needed");
    Ok(())
}
