use super::*;

#[test]
fn test_new_selection_is_empty() {
    let selection = SelectedLogin::new();
    assert_eq!(selection.get(), None);
}

#[test]
fn test_select_replaces_previous_login() {
    let mut selection = SelectedLogin::new();

    selection.select("mojombo");
    selection.select(" octocat ");

    assert_eq!(selection.get(), Some("octocat"));
}

#[test]
fn test_select_blank_clears_selection() {
    let mut selection = SelectedLogin::new();
    selection.select("octocat");

    selection.select("   ");

    assert_eq!(selection.get(), None);
}

#[test]
fn test_take_empties_selection() {
    let mut selection = SelectedLogin::new();
    selection.select("octocat");

    assert_eq!(selection.take(), Some("octocat".to_string()));
    assert_eq!(selection.get(), None);
}

#[test]
fn test_clear() {
    let mut selection = SelectedLogin::new();
    selection.select("octocat");

    selection.clear();

    assert_eq!(selection, SelectedLogin::default());
}
