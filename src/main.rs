#[macro_use]
extern crate log;
extern crate pretty_env_logger;

use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::{dotenv, var};
use tokio::sync::mpsc;
use xs_client::config::ClientConfig;
use xs_client::enums::ViewMode;
use xs_client::models::{Coordinate, Marker};
use xs_client::screens::{CanteenRoute, LogNotifier, NavigationEvent};
use xs_client::AppState;

const USAGE: &str = "usage:
  xs_client canteen <marker_id> [--queue] [--at <lat>,<lng>] [--select <stall_id>]
  xs_client transactions [ongoing|past] [--select <transaction_id>]";

enum Command {
    Canteen {
        route: CanteenRoute,
        select: Option<i32>,
    },
    Transactions {
        mode: ViewMode,
        select: Option<i64>,
    },
}

fn parse_args(args: &[String]) -> Option<Command> {
    let (cmd, rest) = args.split_first()?;
    match cmd.as_str() {
        "canteen" => {
            let marker_id = rest.first()?.parse::<i32>().ok()?;
            let mut coordinate = Coordinate {
                latitude: 0.0,
                longitude: 0.0,
            };
            let mut is_queuing = false;
            let mut select = None;
            let mut it = rest[1..].iter();
            while let Some(arg) = it.next() {
                match arg.as_str() {
                    "--queue" => is_queuing = true,
                    "--at" => {
                        let (lat, lng) = it.next()?.split_once(',')?;
                        coordinate = Coordinate {
                            latitude: lat.trim().parse().ok()?,
                            longitude: lng.trim().parse().ok()?,
                        };
                    }
                    "--select" => select = Some(it.next()?.parse().ok()?),
                    _ => return None,
                }
            }
            Some(Command::Canteen {
                route: CanteenRoute {
                    marker: Marker {
                        marker_id,
                        coordinate,
                    },
                    is_queuing,
                },
                select,
            })
        }
        "transactions" => {
            let mut mode = ViewMode::default();
            let mut select = None;
            let mut it = rest.iter();
            while let Some(arg) = it.next() {
                match arg.as_str() {
                    "--select" => select = Some(it.next()?.parse().ok()?),
                    other => mode = ViewMode::get_enum_from_str(Some(other))?,
                }
            }
            Some(Command::Transactions { mode, select })
        }
        _ => None,
    }
}

fn print_navigation(rx: &mut mpsc::UnboundedReceiver<NavigationEvent>) {
    while let Ok(event) = rx.try_recv() {
        match serde_json::to_string(&event) {
            Ok(json) => println!("navigate {}", json),
            Err(e) => error!("Unable to encode navigation event: {}", e),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenv() {
        eprintln!("Failed to load .env file: {}", e);
    }

    // Setup logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Some(command) => command,
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("Unable to build client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<NavigationEvent>();
    let notifier = Arc::new(LogNotifier);

    match command {
        Command::Canteen { route, select } => {
            let screen = state.canteen_screen(notifier, Arc::new(tx));
            screen.load(route).await;
            let view = screen.view();
            if let Some(canteen) = &view.canteen {
                println!("{}", canteen.canteen_name);
            }
            if view.is_empty() {
                println!("No stalls available");
            }
            for stall in &view.stalls {
                println!("  [{}] {} ({})", stall.stall_id, stall.stall_name, stall.cuisine);
            }
            if let Some(stall_id) = select {
                screen.select_stall(stall_id);
            }
        }
        Command::Transactions { mode, select } => {
            match var("XS_ACCESS_TOKEN") {
                Ok(token) => {
                    if let Err(e) = state.session.login(state.auth.as_ref(), &token).await {
                        warn!("Continuing without a session: {}", e);
                    }
                }
                Err(_) => warn!("XS_ACCESS_TOKEN not set, no session available"),
            }

            let screen = state.transactions_screen(notifier, Arc::new(tx));
            screen.set_mode(mode);
            screen.refresh().await;
            let view = screen.view();
            if let Some(session) = state.session.reader().current() {
                println!(
                    "Signed in as {} since {}",
                    session.user.id,
                    session.established_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
            println!(
                "Transactions ({}): {} ongoing, {} past",
                view.mode.human_readable(),
                view.ongoing_count,
                view.past_count
            );
            if view.transactions.is_empty() {
                println!("No transactions available.");
            }
            for t in &view.transactions {
                println!("  #{} buyer={} queuer={}", t.id, t.buyer_id, t.queuer_id);
            }
            if let Some(id) = select {
                screen.select_transaction(id);
            }
        }
    }

    print_navigation(&mut rx);
    ExitCode::SUCCESS
}
