const SEPARATORS: [char; 4] = ['/', ',', '(', ')'];

/// Splits an aliased function cell such as ``"`Foo` / Bar (Baz)"`` into
/// `["Foo", "Bar", "Baz"]`.
pub fn normalise_function_names(name: &str) -> Vec<String> {
    name.split(SEPARATORS)
        .map(|part| part.replace('`', "").trim().to_owned())
        .filter(|part| !part.is_empty())
        .collect()
}
