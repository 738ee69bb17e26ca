use anyhow::Result;
use order_store::config::Config;
use order_store::constants::ERROR_ORDER_NOT_FOUND;
use order_store::{logger, LocalStorage, Repository};

const USAGE: &str = "Usage: order-store <command>

Commands:
  list                 Print every order as JSON
  show <id>            Print one order as JSON
  init-config [path]   Write a default configuration file";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("init-config") => {
            let path = match args.get(1) {
                Some(path) => path.into(),
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)?;
        }
        Some("list") => {
            let storage = open_storage().await?;
            let orders = storage.orders().find_all().await?;
            println!("{}", serde_json::to_string_pretty(&orders)?);
        }
        Some("show") => {
            let Some(id) = args.get(1) else {
                eprintln!("{}", USAGE);
                std::process::exit(2);
            };
            let storage = open_storage().await?;
            match storage.orders().find(id).await {
                Ok(order) => println!("{}", serde_json::to_string_pretty(&order)?),
                Err(e) if e.is_not_found() => {
                    eprintln!("{}: {}", ERROR_ORDER_NOT_FOUND, id);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn open_storage() -> Result<LocalStorage> {
    let config = Config::load()?;
    logger::init(&config.logging)?;
    LocalStorage::new(&config.database).await
}
