use curio_catalog::{Item, ValidationError, validate};

fn complete_movie() -> Item {
    Item::Movie {
        name: "Dune".to_string(),
        year: 2021,
        genre: "Sci-Fi".to_string(),
        director: "Denis Villeneuve".to_string(),
    }
}

#[test]
fn accepts_a_complete_item() {
    assert_eq!(validate(&complete_movie()), Ok(()));
}

#[test]
fn rejects_empty_name() {
    let item = Item::Movie {
        name: String::new(),
        year: 2021,
        genre: "Sci-Fi".to_string(),
        director: "Denis Villeneuve".to_string(),
    };
    assert_eq!(validate(&item), Err(ValidationError::EmptyField("Name")));
}

#[test]
fn rejects_whitespace_only_genre() {
    let item = Item::Movie {
        name: "Dune".to_string(),
        year: 2021,
        genre: "   ".to_string(),
        director: "Denis Villeneuve".to_string(),
    };
    assert_eq!(validate(&item), Err(ValidationError::EmptyField("Genre")));
}

#[test]
fn rejects_zero_year() {
    let item = Item::Movie {
        name: "Dune".to_string(),
        year: 0,
        genre: "Sci-Fi".to_string(),
        director: "Denis Villeneuve".to_string(),
    };
    assert_eq!(validate(&item), Err(ValidationError::ZeroYear));
}

#[test]
fn rejects_empty_variant_field_for_each_kind() {
    let movie = Item::Movie {
        name: "Dune".to_string(),
        year: 2021,
        genre: "Sci-Fi".to_string(),
        director: String::new(),
    };
    assert_eq!(validate(&movie), Err(ValidationError::EmptyField("Director")));

    let game = Item::Game {
        name: "Hollow Knight".to_string(),
        year: 2017,
        genre: "Metroidvania".to_string(),
        studio: String::new(),
    };
    assert_eq!(validate(&game), Err(ValidationError::EmptyField("Studio")));

    let book = Item::Book {
        name: "Dune".to_string(),
        year: 1965,
        genre: "Sci-Fi".to_string(),
        publisher: String::new(),
    };
    assert_eq!(validate(&book), Err(ValidationError::EmptyField("Publisher")));
}
