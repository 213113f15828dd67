use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Pretty JSON on stdout, CRLF-terminated.
pub fn print_json(value: &serde_json::Value) {
    print!(
        "{}\r\n",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }
    let table = Table::new(data).with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Result of a service call, on stderr.
pub fn print_outcome(success: bool) {
    eprintln!("{}", if success { "Success" } else { "Failure" });
}

pub fn print_error(err: &crate::error::AppError) {
    eprintln!(
        "{}",
        serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
    );
}
