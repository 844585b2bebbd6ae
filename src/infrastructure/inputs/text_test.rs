use super::TextInput;

#[test]
fn it_trims_whitespace() {
    assert_eq!(
        TextInput::normalize("  I have a headache \n"),
        Some("I have a headache".to_string())
    );
}

#[test]
fn it_treats_blank_text_as_absent() {
    assert_eq!(TextInput::normalize(""), None);
    assert_eq!(TextInput::normalize("   \t\n"), None);
}
