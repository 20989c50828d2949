use super::*;

fn users() -> Vec<UserSummary> {
    vec![
        UserSummary { id: 1, first_name: "Ada".to_owned(), last_name: "Lovelace".to_owned() },
        UserSummary { id: 2, first_name: "Alan".to_owned(), last_name: "Turing".to_owned() },
    ]
}

#[test]
fn author_label_placeholder_when_nothing_selected() {
    assert_eq!(author_label(&users(), None), AUTHOR_PLACEHOLDER);
}

#[test]
fn author_label_shows_selected_name() {
    assert_eq!(author_label(&users(), Some(2)), "Alan Turing");
}

#[test]
fn author_label_placeholder_for_unknown_id() {
    assert_eq!(author_label(&users(), Some(42)), AUTHOR_PLACEHOLDER);
}
