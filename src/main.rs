//! Library catalog demo
//!
//! Builds a small catalog, lends a few books and prints the resulting
//! reports: the full book list and one patron's active loans.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    config::{AppConfig, LoggingConfig},
    models::{Book, Patron},
    Catalog,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!("Starting library catalog v{}", env!("CARGO_PKG_VERSION"));

    let mut catalog = Catalog::with_config(&config.catalog);

    let paco = catalog.add_book(Book::new("Paco Yunque", "Autor 1", "ISBN1", "Ficción", 2020, true))?;
    let huasipungo =
        catalog.add_book(Book::new("Huasipungo", "Autor 2", "ISBN2", "Ciencia Ficción", 2019, true))?;
    let memorias = catalog.add_book(Book::academic(
        "Memorias de Alex",
        "Alexander Velasquez",
        "ISBN3",
        "Matemáticas",
        2018,
        true,
        "Editorial 1",
        2,
    ))?;

    let student = catalog.register_patron(Patron::student("Estudiante 1", 1, "Ingeniería"))?;
    let professor = catalog.register_patron(Patron::professor("Profesor 1", 2, "Departamento de Física"))?;
    let researcher =
        catalog.register_patron(Patron::researcher("Investigador 1", 3, "Instituto de Investigación"))?;

    catalog.issue_loan(paco, student, "2024-01-01", "2024-04-15")?;
    catalog.issue_loan(huasipungo, professor, "2024-01-05", "2024-05-20")?;
    catalog.issue_loan(memorias, researcher, "2024-01-10", "2024-06-25")?;

    println!("Books in the catalog:");
    for book in catalog.search_books("") {
        println!("{} - {}", book.title(), book.author());
    }

    let name = catalog.patron(student).map(|p| p.name()).unwrap_or_default();
    println!("Active loans of {}:", name);
    for loan in catalog.get_loan_history(student) {
        let title = catalog.book(loan.book()).map(|b| b.title()).unwrap_or("<removed>");
        println!("{} - {} - {}", title, loan.loan_date(), loan.due_date());
    }

    tracing::info!(
        "Catalog holds {} book(s), {} patron(s), {} active loan(s)",
        catalog.book_count(),
        catalog.patron_count(),
        catalog.loan_count()
    );

    Ok(())
}

/// Install the global subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
