//! Scripted console sessions

use std::io::Cursor;

use library_of_stuff::{config::AppConfig, services::Catalog, shell::Shell};

fn session(catalog: &mut Catalog, script: &str) -> String {
    let mut output = Vec::new();
    Shell::new(catalog, Cursor::new(script.as_bytes()), &mut output)
        .run()
        .expect("session runs to completion");
    String::from_utf8(output).expect("output is utf-8")
}

#[test]
fn test_full_session() {
    let mut catalog = Catalog::from_config(&AppConfig::default()).unwrap();
    let out = session(
        &mut catalog,
        "U001\n\
         borrow WT001\n\
         user U002\n\
         borrow WT001\n\
         user U001\n\
         3\n\
         WT001\n\
         exit\n",
    );

    assert!(out.contains("Welcome, Alice Smith!"));
    assert!(out.contains("Success! You borrowed Cordless Drill."));
    assert!(out.contains("Welcome, Bob Jones!"));
    assert!(out.contains("Item is not available."));
    assert!(out.contains("Item returned successfully."));

    assert!(catalog.get_item("WT001").unwrap().is_available());
    assert_eq!(catalog.get_user("U001").unwrap().loyalty_points(), 10);
    assert_eq!(catalog.get_user("U002").unwrap().loyalty_points(), 0);
    catalog.verify_integrity().unwrap();
}

#[test]
fn test_session_ends_at_end_of_input() {
    let mut catalog = Catalog::from_config(&AppConfig::default()).unwrap();
    let out = session(&mut catalog, "U003\n2\n");
    assert!(out.contains("Enter ID to borrow: "));
    assert!(out.trim_end().ends_with("Goodbye!"));
    assert!(catalog.get_user("U003").unwrap().held_count() == 0);
}
