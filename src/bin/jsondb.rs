//! jsondb CLI
//!
//! Inspect and edit a store from the command line, or seed it with a demo
//! collection.

use clap::{Parser, Subcommand};
use jsondb::{Config, Store};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// jsondb CLI
#[derive(Parser, Debug)]
#[command(name = "jsondb")]
#[command(about = "File-backed JSON document store")]
#[command(version)]
struct Args {
    /// Store name
    #[arg(long, default_value = "test")]
    db: String,

    /// Directory holding store roots
    #[arg(short, long, default_value = jsondb::config::DEFAULT_BASE_PATH)]
    base_path: String,

    /// Skip fsync before committing writes
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a sample "users" collection and print it back
    Demo,

    /// Store a JSON document
    Write {
        /// Collection name
        collection: String,

        /// Resource key
        key: String,

        /// Document body (JSON text)
        json: String,
    },

    /// Print a document
    Read {
        /// Collection name
        collection: String,

        /// Resource key
        key: String,
    },

    /// Print every document in a collection
    ReadAll {
        /// Collection name
        collection: String,
    },

    /// List resource keys in a collection
    Keys {
        /// Collection name
        collection: String,
    },

    /// Delete a document
    Delete {
        /// Collection name
        collection: String,

        /// Resource key
        key: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct User {
    name: String,
    age: u32,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,jsondb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::debug!("jsondb v{}", jsondb::VERSION);

    let config = Config::builder()
        .base_path(&args.base_path)
        .sync_writes(!args.no_sync)
        .build();

    let store = match Store::open(&args.db, config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&store, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(store: &Store, command: Commands) -> jsondb::Result<()> {
    match command {
        Commands::Demo => demo(store),
        Commands::Write {
            collection,
            key,
            json,
        } => store.collection(&collection)?.write_raw(&key, &json),
        Commands::Read { collection, key } => {
            print!("{}", store.collection(&collection)?.read(&key)?);
            Ok(())
        }
        Commands::ReadAll { collection } => {
            for document in store.collection(&collection)?.read_all()? {
                print!("{}", document);
            }
            Ok(())
        }
        Commands::Keys { collection } => {
            for key in store.collection(&collection)?.keys()? {
                println!("{}", key);
            }
            Ok(())
        }
        Commands::Delete { collection, key } => store.collection(&collection)?.delete(&key),
    }
}

fn demo(store: &Store) -> jsondb::Result<()> {
    let users = store.collection("users")?;

    let employees = [
        ("John", 30),
        ("Mary", 25),
        ("Peter", 20),
        ("Mike", 15),
        ("Jack", 10),
        ("Jill", 5),
    ];

    for (name, age) in employees {
        users.write(
            name,
            &User {
                name: name.to_string(),
                age,
            },
        )?;
    }

    let john: User = users.read_as("John")?;
    println!("{:?}", john);

    let everyone: Vec<User> = users.read_all_as()?;
    println!("{:?}", everyone);

    Ok(())
}
