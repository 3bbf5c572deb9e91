//! Interactive main menu.
//!
//! Menu loop over a fully ingested database: search, numerical listing,
//! histogram, exit. Line editing and history via rustyline.

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::debug;

use crate::cli::colors::Colors;
use crate::cli::output;
use crate::db::heatmap::BUCKETS;
use crate::db::{self, FrequencyDb};

/// Presentation context, passed explicitly to every rendering call.
pub struct View {
    pub colors: Colors,
    pub width: usize,
    pub pause: bool,
}

const MENU_OPTIONS: [&str; 4] = [
    "Search for Item by Name",
    "Display Count of All Items (Numerical)",
    "Display Count of All Items (Histogram)",
    "Exit",
];

type MenuEditor = Editor<(), DefaultHistory>;

/// Get history file path
fn history_path() -> Option<std::path::PathBuf> {
    dirs::data_dir().map(|p| p.join("tallydb").join("history"))
}

/// Frame `text` within `width` using `pad` as filler and the given edge
/// characters.
fn framed(text: &str, width: usize, pad: &str, start: &str, end: &str) -> String {
    let inner = width.saturating_sub(
        output::display_width(text) + output::display_width(start) + output::display_width(end),
    );
    let left = inner / 2;
    let right = inner - left;
    format!("{}{}{}{}{}", start, pad.repeat(left), text, pad.repeat(right), end)
}

/// Print the startup banner.
pub fn print_banner(view: &View) {
    let c = &view.colors;
    println!("{}", c.cyan());
    println!("{}", framed("", view.width, "═", "╔", "╗"));
    println!(
        "{}",
        framed(" tallydb — Purchase Frequency Analyzer ", view.width, " ", "║", "║")
    );
    println!("{}", framed("", view.width, "═", "╚", "╝"));
    println!("{}", c.reset());
}

/// Print the farewell message.
pub fn print_farewell(view: &View) {
    let c = &view.colors;
    println!();
    println!(
        "{}{}{}",
        c.cyan(),
        output::center("Thank you for using tallydb!", view.width),
        c.reset()
    );
}

fn print_menu(view: &View) {
    let c = &view.colors;
    println!();
    print!("{}", c.cyan());
    println!("{}", framed(" Main Menu ", view.width, "═", "╔", "╗"));
    println!("{}", framed("", view.width, " ", "║", "║"));
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        let line = format!("║ {} - {}", i + 1, option);
        let pad = view.width.saturating_sub(output::display_width(&line) + 1);
        println!("{}{}║", line, " ".repeat(pad));
    }
    println!("{}", framed("", view.width, " ", "║", "║"));
    println!("{}", framed("", view.width, "═", "╚", "╝"));
    print!("{}", c.reset());
}

fn wait_for_enter(rl: &mut MenuEditor, view: &View) {
    if !view.pause {
        return;
    }
    let _ = rl.readline("Press Enter to continue...");
}

/// Run the menu loop until the user exits.
pub fn run(db: &FrequencyDb, view: &View) -> crate::Result<()> {
    let mut rl: MenuEditor = Editor::new().map_err(|e| {
        crate::Error::Config(format!("cannot initialize line editor: {}", e))
    })?;

    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.load_history(&path);
    }

    loop {
        print_menu(view);
        let prompt = format!("Enter your choice (1-{}): ", MENU_OPTIONS.len());

        match rl.readline(&prompt) {
            Ok(line) => {
                let choice = match line.trim().parse::<usize>() {
                    Ok(n) if (1..=MENU_OPTIONS.len()).contains(&n) => n,
                    _ => {
                        println!("{}Invalid choice{}", view.colors.red(), view.colors.reset());
                        continue;
                    }
                };

                match choice {
                    1 => search_item(db, view, &mut rl)?,
                    2 => list_numerical(db, view, &mut rl)?,
                    3 => list_histogram(db, view, &mut rl)?,
                    _ => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                break;
            }
            Err(err) => {
                println!("{}Error: {:?}{}", view.colors.red(), err, view.colors.reset());
                break;
            }
        }
    }

    if let Some(path) = history_path() {
        let _ = rl.save_history(&path);
    }

    Ok(())
}

fn search_item(db: &FrequencyDb, view: &View, rl: &mut MenuEditor) -> crate::Result<()> {
    let c = &view.colors;
    let line = match rl.readline("Enter the name of the item to search for: ") {
        Ok(line) => line,
        Err(_) => return Ok(()),
    };

    let name = line.trim();
    if name.is_empty() {
        println!("{}Invalid item name{}", c.red(), c.reset());
        wait_for_enter(rl, view);
        return Ok(());
    }

    match db::resolve(db, name)? {
        Some(count) => {
            debug!("search hit: {} -> {}", name, count);
            let bucket = db::bucket(count, db.max_count()?, BUCKETS)?;
            println!(
                "\n{}{}{}\n",
                c.heat(bucket),
                output::center_pair(name, &count.to_string(), view.width),
                c.reset()
            );
        }
        None => {
            println!("\n{}Item not found{}\n", c.yellow(), c.reset());
        }
    }

    wait_for_enter(rl, view);
    Ok(())
}

fn list_numerical(db: &FrequencyDb, view: &View, rl: &mut MenuEditor) -> crate::Result<()> {
    let c = &view.colors;
    let max = db.max_count()?;

    for (name, count) in db.entries()? {
        let bucket = db::bucket(count, max, BUCKETS)?;
        println!(
            "{}{}{}",
            c.heat(bucket),
            output::center_pair(name, &count.to_string(), view.width),
            c.reset()
        );
    }

    println!("\n{}{}{}\n", c.cyan(), output::color_key(c, max), c.reset());
    wait_for_enter(rl, view);
    Ok(())
}

fn list_histogram(db: &FrequencyDb, view: &View, rl: &mut MenuEditor) -> crate::Result<()> {
    let c = &view.colors;
    let max = db.max_count()?;

    for (name, count) in db.entries()? {
        let bucket = db::bucket(count, max, BUCKETS)?;
        println!(
            "{}{}{}",
            c.heat(bucket),
            output::center_pair(name, &output::histogram_bar(count), view.width),
            c.reset()
        );
    }

    println!("\n{}{}{}\n", c.cyan(), output::color_key(c, max), c.reset());
    wait_for_enter(rl, view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framed_symmetric() {
        assert_eq!(framed("", 6, "═", "╔", "╗"), "╔════╗");
        assert_eq!(framed("ab", 8, " ", "║", "║"), "║  ab  ║");
    }

    #[test]
    fn test_framed_never_underflows() {
        // Text wider than the frame: edges only, no panic.
        assert_eq!(framed("abcdef", 4, " ", "║", "║"), "║abcdef║");
    }
}
