//! Statement templates and the matching used by editors to suggest them.

/// Every statement template of the language, in suggestion order.
pub const COMMANDS: [&str; 6] = [
    "if!app.run ^^true^^::do",
    "Console.line^^text in here^^",
    "app.add ^^variable_name^^:: value%^^value here^^",
    "app.get::^^function_name^^",
    "app.getthe^^function_name^^",
    "!",
];

// Last whitespace separated word of the text, if any
fn last_word(text: &str) -> Option<&str> {
    text.split_whitespace().last()
}

/// Templates containing the word being typed (the last word of
/// `text_before_cursor`). A partial match anywhere in the template counts.
pub fn complete(text_before_cursor: &str) -> Vec<&'static str> {
    match last_word(text_before_cursor) {
        Some(word) => COMMANDS
            .iter()
            .copied()
            .filter(|cmd| cmd.contains(word))
            .collect(),
        None => Vec::new(),
    }
}

/// Replaces the word being typed with the selected template.
pub fn apply_completion(text_before_cursor: &str, selected: &str) -> String {
    let Some(word) = last_word(text_before_cursor) else {
        return selected.to_string();
    };

    // The last word ends where the trailing whitespace starts
    let end = text_before_cursor.trim_end().len();
    let start = end - word.len();

    let mut completed = String::with_capacity(start + selected.len());
    completed.push_str(&text_before_cursor[..start]);
    completed.push_str(selected);
    completed
}
