//! # Folio CLI
//!
//! Terminal preview of the portfolio page. Loads the catalog, asks for a
//! category and an optional card to select, then prints the grouped rows
//! and the page view model as JSON.
//!
//! Usage: `folio_cli [settings.toml]`

mod logger;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use tracing::error;

use folio_core::presentation::{GridView, OffsetTag};
use folio_core::{Category, FolioResult, PageSettings, PortfolioPage, SelectionState};

fn prompt(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn prompt_category() -> Category {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let answer = prompt(&format!("Category ({}) [All]: ", labels.join(", ")));
    if answer.is_empty() {
        return Category::All;
    }

    Category::from_label(&answer).unwrap_or_else(|| {
        println!("Unknown category '{}', showing All", answer);
        Category::All
    })
}

fn load_page() -> FolioResult<PortfolioPage> {
    let settings = match std::env::args().nth(1) {
        Some(path) => PageSettings::load(Path::new(&path))?,
        None => PageSettings::default(),
    };
    PortfolioPage::from_settings(&settings)
}

fn main() -> ExitCode {
    logger::init_logger();

    println!("Folio CLI - Portfolio Layout Preview");
    println!("====================================");
    println!();

    let mut page = match load_page() {
        Ok(page) => page,
        Err(e) => {
            error!(code = e.error_code(), "{}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return ExitCode::FAILURE;
        }
    };

    println!("Loaded {} projects.", page.catalog().len());
    println!();

    page.set_category(prompt_category());

    let slug = prompt("Select a project by slug (blank to skip): ");
    let selected_at = Instant::now();
    let ticket = if slug.is_empty() {
        None
    } else if page.catalog().find(&slug).is_none() {
        println!("No project with slug '{}'", slug);
        None
    } else {
        page.select(slug, selected_at)
    };

    println!();
    print_page(&page);

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&page.view()) {
        println!("{}", json);
    }

    if let Some(ticket) = ticket {
        page.expire_due(ticket.deadline());
        println!();
        println!(
            "After {} ms the highlight expires: {}",
            ticket.deadline().duration_since(selected_at).as_millis(),
            match page.selection() {
                SelectionState::Idle => "idle".to_string(),
                SelectionState::Active(slug) => format!("still active ({})", slug),
            }
        );
    }

    ExitCode::SUCCESS
}

fn print_page(page: &PortfolioPage) {
    let view = page.view();

    let buttons: Vec<String> = view
        .categories
        .iter()
        .map(|b| {
            if b.selected {
                format!("[{} {}]", b.category.label(), b.count)
            } else {
                format!(" {} {} ", b.category.label(), b.count)
            }
        })
        .collect();
    println!("{}", buttons.join(" "));
    println!("═══════════════════════════════════════");

    match &view.grid {
        GridView::Empty { message } => {
            println!();
            println!("  {}", message);
        }
        GridView::Rows { rows } => {
            for row in rows {
                println!();
                println!(
                    "Row {} ({:?}, +{} ms)",
                    row.reveal_order + 1,
                    row.size,
                    row.cards.first().map(|c| c.reveal_delay_ms).unwrap_or(0)
                );
                for card in &row.cards {
                    println!(
                        "  {} {:<7} {}{:<24} {:<14} {}",
                        offset_marker(card.offset),
                        card.offset.as_str(),
                        if card.is_active { "*" } else { " " },
                        card.project.title,
                        card.project.category.label(),
                        card.project.caption()
                    );
                }
            }
        }
    }
    println!("═══════════════════════════════════════");
}

fn offset_marker(offset: OffsetTag) -> &'static str {
    match offset {
        OffsetTag::Up => "↑",
        OffsetTag::Neutral => "·",
        OffsetTag::Down => "↓",
    }
}
