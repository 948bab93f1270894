//! # BrewBytes
//!
//! Starts the café floor from config, optionally places the demo orders, lets
//! the ticker run, then prints the final ranked orders, roster and stats as
//! JSON.

use brewbytes::cli;
use brewbytes::config::{self, CafeConfig};
use brewbytes::lifecycle::CafeSystem;
use brewbytes::model::{Order, Priority, Waiter};
use brewbytes::stats::FloorStats;
use brewbytes_actor::tracing::setup_tracing;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn, Instrument};

/// Sample orders placed by `--demo`: (menu item id, priority).
const DEMO_ORDERS: [(u32, Priority); 6] = [
    (2, Priority::Regular),
    (1, Priority::Vip),
    (18, Priority::Online),
    (10, Priority::Regular),
    (5, Priority::Vip),
    (19, Priority::Online),
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FinalReport {
    ranked_orders: Vec<Order>,
    waiters: Vec<Waiter>,
    stats: FloorStats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::parse();
    setup_tracing();

    let mut config = load_config(&args)?;
    if let Some(tick_ms) = args.tick_ms {
        config.tick_interval_ms = tick_ms;
    }

    let system = CafeSystem::start(&config)?;
    info!(menu_items = system.menu().len(), "Floor ready");

    if args.demo {
        let span = tracing::info_span!("demo_orders");
        async {
            for (item_id, priority) in DEMO_ORDERS {
                match system.cafe_client.place_order(item_id, priority).await {
                    Ok(receipt) => info!(
                        order_id = %receipt.order.id,
                        waiter = %receipt.order.waiter_name,
                        "Demo order placed"
                    ),
                    Err(e) => error!(error = %e, item_id, "Demo order failed"),
                }
            }
        }
        .instrument(span)
        .await;
    }

    match args.run_secs {
        Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
        None => {
            info!("Running until Ctrl-C");
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Could not listen for Ctrl-C, shutting down");
            }
        }
    }

    let snapshot = system.shutdown().await?;
    let report = FinalReport {
        ranked_orders: snapshot.ranked_orders(),
        stats: snapshot.stats(),
        waiters: snapshot.waiters,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_config(args: &cli::CliArgs) -> Result<CafeConfig, config::ConfigError> {
    match &args.config {
        Some(path) => config::load_and_validate(path),
        None => {
            let path = config::default_config_path();
            if path.exists() {
                config::load_and_validate(path)
            } else {
                Ok(CafeConfig::default())
            }
        }
    }
}
