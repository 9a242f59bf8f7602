//! Command-line front end for the bookshelf stores.
//!
//! # Responsibility
//! - Wire connection bootstrap, the SQLite executor and both stores.
//! - Print records as one JSON object per line.

use anyhow::{Context, Result};
use bookshelf_core::db::{open_db, open_db_in_memory};
use bookshelf_core::{
    core_version, default_log_level, init_logging, Author, AuthorId, AuthorRepository,
    AuthorStore, Book, BookRepository, BookStore, LoggingConfig, SqliteExecutor,
};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Typed CRUD over authors and books")]
struct Cli {
    /// SQLite database file; an in-memory database is used when omitted.
    #[arg(long, env = "BOOKSHELF_DB", global = true)]
    db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "BOOKSHELF_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files; logging stays off when omitted.
    #[arg(long, env = "BOOKSHELF_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage authors.
    #[command(subcommand)]
    Author(AuthorCommand),
    /// Manage books.
    #[command(subcommand)]
    Book(BookCommand),
    /// Print the core library version.
    Version,
}

#[derive(Debug, Subcommand)]
enum AuthorCommand {
    Create(AuthorFields),
    Get { id: AuthorId },
    List,
    /// Overwrite the author stored under ID (the new fields may change the id).
    Update {
        #[arg(value_name = "ID")]
        target_id: AuthorId,
        #[command(flatten)]
        fields: AuthorFields,
    },
}

#[derive(Debug, Subcommand)]
enum BookCommand {
    Create(BookFields),
    Get { isbn: String },
    List,
    /// Overwrite the book stored under ISBN (the new fields may change the isbn).
    Update {
        #[arg(value_name = "ISBN")]
        target_isbn: String,
        #[command(flatten)]
        fields: BookFields,
    },
}

#[derive(Debug, Args)]
struct AuthorFields {
    #[arg(long)]
    id: AuthorId,
    #[arg(long)]
    name: String,
    #[arg(long)]
    age: i32,
}

impl From<AuthorFields> for Author {
    fn from(fields: AuthorFields) -> Self {
        Author::new(fields.id, fields.name, fields.age)
    }
}

#[derive(Debug, Args)]
struct BookFields {
    #[arg(long)]
    isbn: String,
    #[arg(long)]
    title: String,
    #[arg(long)]
    author_id: AuthorId,
}

impl From<BookFields> for Book {
    fn from(fields: BookFields) -> Self {
        Book::new(fields.isbn, fields.title, fields.author_id)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(&LoggingConfig::new(level, log_dir.clone()))
            .context("failed to initialize logging")?;
    }

    if let Command::Version = cli.command {
        println!("bookshelf_core version={}", core_version());
        return Ok(());
    }

    let conn = match &cli.db {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open database `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory database")?,
    };
    let executor = SqliteExecutor::new(&conn);

    match cli.command {
        Command::Author(command) => run_author(AuthorStore::new(&executor), command),
        Command::Book(command) => run_book(BookStore::new(&executor), command),
        Command::Version => Ok(()),
    }
}

fn run_author(store: impl AuthorRepository, command: AuthorCommand) -> Result<()> {
    match command {
        AuthorCommand::Create(fields) => {
            let author = Author::from(fields);
            store
                .create(&author)
                .with_context(|| format!("failed to create author {}", author.id))?;
            info!("event=author_create module=cli status=ok");
            print_json(&author)
        }
        AuthorCommand::Get { id } => {
            let author = store
                .find_one(id)
                .with_context(|| format!("failed to read author {id}"))?;
            print_json(&author)
        }
        AuthorCommand::List => {
            for author in store.find_many().context("failed to list authors")? {
                print_json(&author)?;
            }
            Ok(())
        }
        AuthorCommand::Update { target_id, fields } => {
            let author = Author::from(fields);
            store
                .update(&author, target_id)
                .with_context(|| format!("failed to update author {target_id}"))?;
            info!("event=author_update module=cli status=ok");
            print_json(&author)
        }
    }
}

fn run_book(store: impl BookRepository, command: BookCommand) -> Result<()> {
    match command {
        BookCommand::Create(fields) => {
            let book = Book::from(fields);
            store
                .create(&book)
                .with_context(|| format!("failed to create book `{}`", book.isbn))?;
            info!("event=book_create module=cli status=ok");
            print_json(&book)
        }
        BookCommand::Get { isbn } => {
            let book = store
                .find_one(&isbn)
                .with_context(|| format!("failed to read book `{isbn}`"))?;
            print_json(&book)
        }
        BookCommand::List => {
            for book in store.find_many().context("failed to list books")? {
                print_json(&book)?;
            }
            Ok(())
        }
        BookCommand::Update {
            target_isbn,
            fields,
        } => {
            let book = Book::from(fields);
            store
                .update(&book, &target_isbn)
                .with_context(|| format!("failed to update book `{target_isbn}`"))?;
            info!("event=book_update module=cli status=ok");
            print_json(&book)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
