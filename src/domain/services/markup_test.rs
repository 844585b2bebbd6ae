use super::normalize;

#[test]
fn it_bolds_paired_markers() {
    let res = normalize("**Possible Diseases**\nViral fever.");

    assert!(res.contains("\u{1b}[1m"));
    assert!(res.contains("Possible Diseases"));
    assert!(!res.contains("**"));
    assert!(res.contains("\nViral fever."));
}

#[test]
fn it_bolds_multiple_sections() {
    let res = normalize("**First Aid** rest. **Prevention** masks.");

    assert_eq!(res.matches("\u{1b}[1m").count(), 2);
    assert!(!res.contains("**"));
}

#[test]
fn it_leaves_unpaired_markers_alone() {
    assert_eq!(normalize("no markers here"), "no markers here");
    assert_eq!(normalize("dangling ** marker"), "dangling ** marker");

    let res = normalize("**bold** then dangling ** tail");
    assert_eq!(res.matches("\u{1b}[1m").count(), 1);
    assert!(res.contains("** tail"));
}

#[test]
fn it_replaces_tabs() {
    assert_eq!(normalize("a\tb"), "a  b");
}
