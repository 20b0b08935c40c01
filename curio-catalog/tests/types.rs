use curio_catalog::{Item, ItemKind};

fn movie() -> Item {
    Item::Movie {
        name: "Dune".to_string(),
        year: 2021,
        genre: "Sci-Fi".to_string(),
        director: "Denis Villeneuve".to_string(),
    }
}

fn game() -> Item {
    Item::Game {
        name: "Hollow Knight".to_string(),
        year: 2017,
        genre: "Metroidvania".to_string(),
        studio: "Team Cherry".to_string(),
    }
}

fn book() -> Item {
    Item::Book {
        name: "Dune".to_string(),
        year: 1965,
        genre: "Sci-Fi".to_string(),
        publisher: "Chilton Books".to_string(),
    }
}

#[test]
fn shared_accessors_cover_all_variants() {
    assert_eq!(movie().name(), "Dune");
    assert_eq!(movie().year(), 2021);
    assert_eq!(movie().genre(), "Sci-Fi");

    assert_eq!(game().name(), "Hollow Knight");
    assert_eq!(game().year(), 2017);
    assert_eq!(game().genre(), "Metroidvania");

    assert_eq!(book().name(), "Dune");
    assert_eq!(book().year(), 1965);
    assert_eq!(book().genre(), "Sci-Fi");
}

#[test]
fn detail_follows_the_variant() {
    assert_eq!(movie().detail(), "Denis Villeneuve");
    assert_eq!(movie().detail_label(), "Director");

    assert_eq!(game().detail(), "Team Cherry");
    assert_eq!(game().detail_label(), "Studio");

    assert_eq!(book().detail(), "Chilton Books");
    assert_eq!(book().detail_label(), "Publisher");
}

#[test]
fn kind_matches_variant() {
    assert_eq!(movie().kind(), ItemKind::Movie);
    assert_eq!(game().kind(), ItemKind::Game);
    assert_eq!(book().kind(), ItemKind::Book);
}

#[test]
fn kind_parses_loose_names() {
    assert_eq!("movie".parse::<ItemKind>().unwrap(), ItemKind::Movie);
    assert_eq!("Movies".parse::<ItemKind>().unwrap(), ItemKind::Movie);
    assert_eq!("film".parse::<ItemKind>().unwrap(), ItemKind::Movie);
    assert_eq!("GAMES".parse::<ItemKind>().unwrap(), ItemKind::Game);
    assert_eq!("book".parse::<ItemKind>().unwrap(), ItemKind::Book);

    assert!("vinyl".parse::<ItemKind>().is_err());
    assert!("".parse::<ItemKind>().is_err());
}

#[test]
fn kind_display_round_trips() {
    for kind in ItemKind::ALL {
        assert_eq!(kind.as_str().parse::<ItemKind>().unwrap(), kind);
    }
}
