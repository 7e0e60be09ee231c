use library_loan_decision::{
    adapters::mock::{
        authorization_service::AuthorizationService as MockAuthorizationService,
        book_service::BookService as MockBookService,
    },
    application::loan::{LoanDependencies, decide_loan},
    domain::commands::LoanBook,
};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: library-loan-decision <user_id> <book_id>";

/// コマンドライン引数のエラー
#[derive(Debug, Error)]
enum CliError {
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),

    #[error("invalid {name} {value:?}: {source}")]
    InvalidId {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("unexpected extra argument {0:?}")]
    UnexpectedArgument(String),
}

fn parse_id(name: &'static str, arg: Option<String>) -> Result<i64, CliError> {
    let value = arg.ok_or(CliError::MissingArgument(name))?;
    value
        .trim()
        .parse()
        .map_err(|source| CliError::InvalidId {
            name,
            value,
            source,
        })
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<LoanBook, CliError> {
    let user_id = parse_id("user_id", args.next())?;
    let book_id = parse_id("book_id", args.next())?;
    if let Some(extra) = args.next() {
        return Err(CliError::UnexpectedArgument(extra));
    }
    Ok(LoanBook::new(user_id, book_id))
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_loan_decision=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cmd = match parse_args(std::env::args().skip(1)) {
        Ok(cmd) => cmd,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    // Initialize adapters
    let deps = LoanDependencies::new(
        Arc::new(MockAuthorizationService::new()),
        Arc::new(MockBookService::new()),
    );

    match decide_loan(&deps, cmd) {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Loan decision failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
