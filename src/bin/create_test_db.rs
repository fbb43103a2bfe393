use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use saving_rs::{
    NewUser, PasswordHash, SQLiteTransactionStore, SQLiteUserStore, TransactionFields,
    TransactionStore, UserStore, ValidatedPassword, initialize_db,
};

/// A utility for creating a test database for the REST API server of saving_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let connection = Arc::new(Mutex::new(conn));
    let users = SQLiteUserStore::new(connection.clone());
    let transactions = SQLiteTransactionStore::new(connection);

    println!("Creating test user...");

    let password_hash = PasswordHash::new(
        ValidatedPassword::new_unchecked("test1234"),
        PasswordHash::DEFAULT_COST,
    )?;

    let user = users.create(NewUser {
        name: "Test User".to_owned(),
        email: "test@test.com".parse()?,
        password_hash,
    })?;

    println!("Creating test transactions...");

    let today = OffsetDateTime::now_utc().date();

    for (days_ago, amount, description) in [
        (30, 2500.0, "Salary"),
        (21, -120.5, "Groceries"),
        (14, -60.0, "Power bill"),
        (7, 500.0, "Savings deposit"),
        (0, -4.5, "Coffee"),
    ] {
        transactions.create(TransactionFields {
            user_id: user.id,
            amount,
            date: today - Duration::days(days_ago),
            description: description.to_owned(),
        })?;
    }

    println!("Success! Log in with the email {} and the password test1234", user.email);

    Ok(())
}
