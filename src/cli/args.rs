//! Raw process arguments to command tokens.

use std::path::Path;

const SILENT_FLAGS: [&str; 3] = ["--silent", "-s", "/silent"];
const DATA_STORE_FILE: &str = "datastore";

/// Whether `argument` requests console output instead of dialogs.
pub fn is_silent_flag(argument: &str) -> bool {
    SILENT_FLAGS
        .iter()
        .any(|flag| argument.eq_ignore_ascii_case(flag))
}

/// Whether `argument` names an existing data-store dump file.
pub fn is_data_store_path(argument: &str) -> bool {
    let path = Path::new(argument.trim());

    path.file_name()
        .is_some_and(|name| name.eq_ignore_ascii_case(DATA_STORE_FILE))
        && path.is_file()
}

/// Normalizes raw arguments into command tokens
///
/// Silent flags and data-store paths are dropped, the rest trimmed and
/// blanks discarded. A token containing `=` is split at the first `=` into
/// key and value; an empty half is dropped rather than kept as an empty
/// token. Input order is preserved.
///
/// # Examples
///
/// ```
/// use rose_loader::cli::command_args;
///
/// let tokens = command_args(["--set-option", "language=French", "-s"], |_| false);
/// assert_eq!(tokens, ["--set-option", "language", "French"]);
/// ```
pub fn command_args<I, S>(args: I, is_data_store: impl Fn(&str) -> bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Vec::new();

    for argument in args {
        let argument = argument.as_ref();
        if is_silent_flag(argument) || is_data_store(argument) {
            continue;
        }

        let value = argument.trim();
        if value.is_empty() {
            continue;
        }

        match value.split_once('=') {
            Some((key, rest)) => {
                tokens.extend(
                    [key, rest]
                        .into_iter()
                        .filter(|part| !part.is_empty())
                        .map(str::to_string),
                );
            }
            None => tokens.push(value.to_string()),
        }
    }

    tokens
}
