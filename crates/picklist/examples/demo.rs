//! Console demo of the add/remove combo box.
//!
//! Run with `cargo run -p picklist --example demo`. Set `RUST_LOG=debug` to
//! watch the ordering and selection logic.
//!
//! Commands:
//! - `list`: show the rows
//! - `click N`: click the body of row N
//! - `button N`: press the add/remove button of row N
//! - `sort on|off`: toggle alphabetical sorting
//! - `quit`

use std::io::{self, BufRead, Write};

use picklist::widget::{AddAction, AddRemoveComboBox, PromptRequest, RemoveAction, TextPrompt};
use picklist::ADD_MARKER_PLACEHOLDER;
use tracing_subscriber::EnvFilter;

/// Reads the new item from standard input.
struct StdinPrompt;

impl TextPrompt for StdinPrompt {
    fn prompt(&self, request: &PromptRequest) -> Option<String> {
        print!("[{}] {}", request.title, request.content);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end().to_string()),
        }
    }
}

fn print_rows(combo: &AddRemoveComboBox) {
    for row in combo.rows() {
        let label = if row.is_add_row() { "[+] add item" } else { row.display_text.as_str() };
        let button = if row.is_add_row() { "" } else { " [x]" };
        let marker = if row.selected { '>' } else { ' ' };
        println!("{marker} {:>2}: {label}{button}", row.index);
    }
    println!("value: {:?}", combo.current_value());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let combo = AddRemoveComboBox::builder()
        .with_items(["Dummy", "List", ADD_MARKER_PLACEHOLDER])
        .with_add_action(AddAction::prompt(StdinPrompt))
        .with_remove_action(RemoveAction::RemoveFromList)
        .build()?;

    combo.value_changed().connect(|value| {
        println!("value changed: {value:?}");
    });

    print_rows(&combo);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        let result = match (words.next(), words.next()) {
            (Some("quit"), _) => break,
            (Some("list"), _) => Ok(()),
            (Some("click"), Some(n)) => match n.parse() {
                Ok(index) => combo.click_row(index),
                Err(_) => {
                    println!("not a row: {n}");
                    continue;
                }
            },
            (Some("button"), Some(n)) => match n.parse() {
                Ok(index) => combo.activate_row(index),
                Err(_) => {
                    println!("not a row: {n}");
                    continue;
                }
            },
            (Some("sort"), Some(mode)) => {
                combo.set_sort_alphabetically(mode == "on");
                Ok(())
            }
            _ => {
                println!("commands: list, click N, button N, sort on|off, quit");
                continue;
            }
        };

        if let Err(err) = result {
            println!("error: {err}");
        }
        // End of the event-loop turn.
        combo.dispatcher().process_pending();
        print_rows(&combo);
    }

    Ok(())
}
