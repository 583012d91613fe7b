#[cfg(test)]
mod tests {
    use ticklist::ui::entry::EntryField;

    fn type_text(field: &mut EntryField, text: &str) {
        for c in text.chars() {
            field.insert(c);
        }
    }

    #[test]
    fn test_starts_with_placeholder() {
        let field = EntryField::new("Add a task");
        assert!(field.is_placeholder());
        assert_eq!(field.display_text(), "Add a task");
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_typing_is_ignored_until_focused() {
        let mut field = EntryField::new("Add a task");
        type_text(&mut field, "abc");
        assert_eq!(field.text(), "");
        assert!(field.is_placeholder());
    }

    #[test]
    fn test_focus_in_clears_and_edits() {
        let mut field = EntryField::new("Add a task");
        field.focus_in();
        assert!(!field.is_placeholder());
        assert_eq!(field.display_text(), "");

        type_text(&mut field, "Buy milkk");
        field.backspace();
        assert_eq!(field.text(), "Buy milk");
        assert_eq!(field.display_text(), "Buy milk");
    }

    #[test]
    fn test_focus_out_restores_placeholder_only_when_empty() {
        let mut field = EntryField::new("Add a task");
        field.focus_in();
        field.focus_out();
        assert!(field.is_placeholder());

        field.focus_in();
        type_text(&mut field, "draft");
        field.focus_out();
        assert!(!field.is_placeholder());
        assert_eq!(field.display_text(), "draft");

        // Focusing a field that holds text keeps the text
        field.focus_in();
        assert_eq!(field.text(), "draft");
    }

    #[test]
    fn test_submit_takes_text() {
        let mut field = EntryField::new("Add a task");
        field.focus_in();
        type_text(&mut field, "Read a book");

        assert_eq!(field.submit(), Some("Read a book".to_string()));
        assert_eq!(field.text(), "");
        assert!(!field.is_placeholder());
    }

    #[test]
    fn test_submit_ignores_blank_input() {
        let mut field = EntryField::new("Add a task");
        assert_eq!(field.submit(), None);

        field.focus_in();
        assert_eq!(field.submit(), None);

        type_text(&mut field, "   ");
        assert_eq!(field.submit(), None);
        assert_eq!(field.text(), "   ");
    }
}
