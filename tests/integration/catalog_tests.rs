//! End-to-end scenarios driven through the public catalog API

use library_catalog::{
    config::CatalogConfig,
    models::{Book, BookKey, Patron, PatronKey},
    AppError, Catalog,
};

/// The demo library: three books, one patron of each role
fn demo_catalog() -> (Catalog, [BookKey; 3], [PatronKey; 3]) {
    let mut catalog = Catalog::new();

    let books = [
        catalog
            .add_book(Book::new("Paco Yunque", "Autor 1", "ISBN1", "Ficción", 2020, true))
            .expect("add ISBN1"),
        catalog
            .add_book(Book::new("Huasipungo", "Autor 2", "ISBN2", "Ciencia Ficción", 2019, true))
            .expect("add ISBN2"),
        catalog
            .add_book(Book::academic(
                "Memorias de Alex",
                "Alexander Velasquez",
                "ISBN3",
                "Matemáticas",
                2018,
                true,
                "Editorial 1",
                2,
            ))
            .expect("add ISBN3"),
    ];

    let patrons = [
        catalog
            .register_patron(Patron::student("Estudiante 1", 1, "Ingeniería"))
            .expect("register student"),
        catalog
            .register_patron(Patron::professor("Profesor 1", 2, "Departamento de Física"))
            .expect("register professor"),
        catalog
            .register_patron(Patron::researcher("Investigador 1", 3, "Instituto de Investigación"))
            .expect("register researcher"),
    ];

    (catalog, books, patrons)
}

#[test]
fn test_loan_lifecycle() {
    let mut catalog = Catalog::new();
    let book = catalog
        .add_book(Book::new("Paco Yunque", "Autor 1", "ISBN1", "Ficción", 2020, true))
        .unwrap();
    let patron = catalog
        .register_patron(Patron::student("Estudiante 1", 1, "Ingeniería"))
        .unwrap();

    let loan = catalog
        .issue_loan(book, patron, "2024-01-01", "2024-04-15")
        .expect("first loan succeeds");
    assert!(!catalog.get_book_details("ISBN1").unwrap().is_available());

    let second = catalog.issue_loan(book, patron, "2024-02-01", "2024-05-15");
    assert!(matches!(second, Err(AppError::Unavailable(_))));

    catalog.return_loan(&loan);
    assert!(catalog.get_book_details("ISBN1").unwrap().is_available());
    assert!(catalog.get_loan_history(patron).is_empty());
}

#[test]
fn test_missing_isbn_errors() {
    let (mut catalog, _, _) = demo_catalog();

    assert!(matches!(
        catalog.remove_book("ISBN-nonexistent"),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        catalog.update_book(Book::new("Nada", "Nadie", "ISBN-nonexistent", "Ninguno", 1900, true)),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        catalog.get_book_details("ISBN-nonexistent"),
        Err(AppError::NotFound(_))
    ));
    assert_eq!(catalog.book_count(), 3);
}

#[test]
fn test_demo_reports() {
    let (mut catalog, [paco, huasipungo, memorias], [student, professor, researcher]) =
        demo_catalog();

    catalog.issue_loan(paco, student, "2024-01-01", "2024-04-15").unwrap();
    catalog.issue_loan(huasipungo, professor, "2024-01-05", "2024-05-20").unwrap();
    catalog.issue_loan(memorias, researcher, "2024-01-10", "2024-06-25").unwrap();

    // The full listing still includes books that are out on loan
    let listing: Vec<(&str, &str)> = catalog
        .search_books("")
        .into_iter()
        .map(|b| (b.title(), b.author()))
        .collect();
    assert_eq!(
        listing,
        vec![
            ("Paco Yunque", "Autor 1"),
            ("Huasipungo", "Autor 2"),
            ("Memorias de Alex", "Alexander Velasquez"),
        ]
    );
    assert!(catalog.available_books().is_empty());

    let history = catalog.get_loan_history(student);
    assert_eq!(history.len(), 1);
    let loan = history[0];
    assert_eq!(catalog.book(loan.book()).unwrap().title(), "Paco Yunque");
    assert_eq!(loan.loan_date(), "2024-01-01");
    assert_eq!(loan.due_date(), "2024-04-15");
}

#[test]
fn test_details_track_updates_and_removal() {
    let (mut catalog, [paco, ..], _) = demo_catalog();
    let original = catalog.get_book_details("ISBN1").unwrap().clone();
    assert_eq!(catalog.book(paco), Some(&original));

    let revised = Book::new("Paco Yunque", "César Vallejo", "ISBN1", "Cuento", 1951, true);
    catalog.update_book(revised.clone()).unwrap();
    assert_eq!(catalog.get_book_details("ISBN1").unwrap(), &revised);
    assert_eq!(catalog.book(paco), Some(&revised));

    catalog.remove_book("ISBN1").unwrap();
    assert!(catalog.get_book_details("ISBN1").is_err());
    assert!(catalog.book(paco).is_none());
}

#[test]
fn test_update_can_release_a_lent_book() {
    // A wholesale replacement takes the caller's availability flag, even
    // while a loan on the old record is still open.
    let (mut catalog, [paco, ..], [student, professor, _]) = demo_catalog();
    let loan = catalog.issue_loan(paco, student, "2024-01-01", "2024-04-15").unwrap();

    catalog
        .update_book(Book::new("Paco Yunque", "Autor 1", "ISBN1", "Ficción", 2020, true))
        .unwrap();

    let again = catalog.issue_loan(paco, professor, "2024-02-01", "2024-05-01").unwrap();
    assert_eq!(catalog.get_loan_history(student), vec![&loan]);
    assert_eq!(catalog.get_loan_history(professor), vec![&again]);
}

#[test]
fn test_returning_pre_update_loan_cannot_double_lend() {
    let (mut catalog, [paco, ..], [student, professor, researcher]) = demo_catalog();
    let before = catalog.issue_loan(paco, student, "2024-01-01", "2024-04-15").unwrap();

    catalog
        .update_book(Book::new("Paco Yunque", "Autor 1", "ISBN1", "Ficción", 2020, true))
        .unwrap();
    catalog.issue_loan(paco, professor, "2024-02-01", "2024-05-01").unwrap();
    catalog.return_loan(&before);

    let third = catalog.issue_loan(paco, researcher, "2024-03-01", "2024-06-01");
    assert!(matches!(third, Err(AppError::Unavailable(_))));
    assert_eq!(catalog.active_loans().filter(|l| l.book() == paco).count(), 1);
    assert!(catalog.get_loan_history(student).is_empty());
}

#[test]
fn test_return_outside_issuing_catalog() {
    let (mut catalog, [paco, ..], [student, ..]) = demo_catalog();
    let loan = catalog.issue_loan(paco, student, "2024-01-01", "2024-04-15").unwrap();

    // A catalog that never issued the loan leaves its own records alone
    let (mut elsewhere, [own_book, ..], [own_patron, ..]) = demo_catalog();
    let own_loan = elsewhere
        .issue_loan(own_book, own_patron, "2024-01-01", "2024-04-15")
        .unwrap();
    assert_ne!(own_loan.id(), loan.id());

    elsewhere.return_loan(&loan);
    assert!(!elsewhere.book(own_book).unwrap().is_available());
    assert_eq!(elsewhere.get_loan_history(own_patron), vec![&own_loan]);
    assert!(matches!(
        elsewhere.issue_loan(paco, own_patron, "2024-02-01", "2024-05-01"),
        Err(AppError::NotFound(_))
    ));

    catalog.return_loan(&loan);
    catalog.return_loan(&loan);
    assert!(catalog.book(paco).unwrap().is_available());
    assert_eq!(catalog.loan_count(), 0);
}

#[test]
fn test_strict_uniqueness_policy() {
    let mut catalog = Catalog::with_config(&CatalogConfig {
        allow_duplicate_isbn: false,
        allow_duplicate_patron_id: false,
    });

    catalog
        .add_book(Book::new("Paco Yunque", "Autor 1", "ISBN1", "Ficción", 2020, true))
        .unwrap();
    catalog
        .register_patron(Patron::student("Estudiante 1", 1, "Ingeniería"))
        .unwrap();

    let dup_book = catalog.add_book(Book::new("Otro", "Otro", "ISBN1", "Otro", 2000, true));
    let dup_patron = catalog.register_patron(Patron::professor("Profesor 1", 1, "Física"));

    assert!(matches!(dup_book, Err(AppError::Conflict(_))));
    assert!(matches!(dup_patron, Err(AppError::Conflict(_))));
    assert_eq!(catalog.book_count(), 1);
    assert_eq!(catalog.patron_count(), 1);
}
