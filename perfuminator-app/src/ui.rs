//! Screen rendering and the stdin prompt loop.
//!
//! All confirmation dialogs live here; the core is only called once the user
//! has said yes. Recoverable errors render as messages and the screen is
//! redrawn with state unchanged.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use perfuminator_core::{
    MAX_NOTES, NAME_MAX_CHARS, ScentProfile, Screen, Session, SessionError,
};

/// Drive the session until the user quits.
pub fn run(session: &mut Session) -> Result<()> {
    loop {
        let keep_going = match session.screen() {
            Screen::MainMenu => main_menu(session)?,
            Screen::PaletteSelect => palette_select(session)?,
            Screen::Picking => picking(session)?,
            Screen::Checkout => checkout(session)?,
        };
        if !keep_going {
            println!("Thanks for visiting the Perfuminator!");
            return Ok(());
        }
    }
}

fn main_menu(session: &mut Session) -> Result<bool> {
    println!();
    println!("{}", "Welcome to the Perfuminator".bold());
    println!("Would you like to choose from:");
    println!("  1) Free Reign (the whole catalog)");
    println!("  2) Preset Palettes");
    println!("  q) Quit");

    let Some(input) = prompt("> ")? else {
        return Ok(false);
    };
    match input.as_str() {
        "1" => report(session.choose_free_reign()),
        "2" => report(session.browse_palettes()),
        "q" => return Ok(false),
        other => println!("{}", format!("Unknown option '{other}'").red()),
    }
    Ok(true)
}

fn palette_select(session: &mut Session) -> Result<bool> {
    println!();
    println!("{}", "Our Premade Palettes".bold());
    let palettes: Vec<String> = session
        .list_palettes()
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    for (i, name) in palettes.iter().enumerate() {
        match palette_blurb(name) {
            Some(blurb) => println!("  {}) {name} ({blurb})", i + 1),
            None => println!("  {}) {name}", i + 1),
        }
    }
    println!("  b) Back to main menu");

    let Some(input) = prompt("> ")? else {
        return Ok(false);
    };
    if input == "b" {
        report(session.go_back());
        return Ok(true);
    }
    // Accept either the number or the palette name itself.
    let name = input
        .parse::<usize>()
        .ok()
        .and_then(|n| palettes.get(n.wrapping_sub(1)).cloned())
        .unwrap_or(input);
    report(session.choose_palette(&name));
    Ok(true)
}

fn picking(session: &mut Session) -> Result<bool> {
    println!();
    println!(
        "{} (palette: {})",
        "Build Your Perfume".bold(),
        session.palette().label()
    );

    let notes: Vec<(String, ScentProfile)> = session
        .list_notes()
        .map_err(anyhow::Error::from)?
        .into_iter()
        .map(|(name, profile)| (name.to_string(), *profile))
        .collect();
    for (i, (name, profile)) in notes.iter().enumerate() {
        println!("  {:>2}) {}", i + 1, name.bold());
        println!("      {}", profile_line(profile));
    }

    let selection = session.current_selection().map_err(anyhow::Error::from)?;
    println!();
    println!("{}", "Selected Scents".bold());
    for slot in 0..MAX_NOTES {
        match selection.get(slot) {
            Some(name) => println!("  Scent {}: {name}", slot + 1),
            None => println!("  Scent {}: (None)", slot + 1),
        }
    }

    let totals = session.current_totals().map_err(anyhow::Error::from)?;
    println!("{}", "Combined Totals".bold());
    println!("  {}", profile_line(&totals));
    println!();
    println!("Type a number to add a scent, or: reset / back / checkout / quit");

    let Some(input) = prompt("> ")? else {
        return Ok(false);
    };
    match input.as_str() {
        "quit" => return Ok(false),
        "reset" => {
            if confirm("Are you sure you want to reset choices?")? {
                report(session.reset());
            }
        }
        "back" => {
            if confirm("Are you sure you want to go back? Your choices will not be saved")? {
                report(session.go_back());
            }
        }
        "checkout" => {
            if confirm(
                "Proceed to checkout? You will not be able to change your chosen scents",
            )? {
                report(session.request_checkout().map(|_| ()));
            }
        }
        other => {
            let name = other
                .parse::<usize>()
                .ok()
                .and_then(|n| notes.get(n.wrapping_sub(1)))
                .map_or_else(|| other.to_string(), |(name, _)| name.clone());
            report(session.select(&name));
        }
    }
    Ok(true)
}

fn checkout(session: &mut Session) -> Result<bool> {
    println!();
    println!("{}", "Your Created Perfume".bold());
    println!("Name your scent! (max {NAME_MAX_CHARS} characters)");

    loop {
        let Some(input) = prompt("> ")? else {
            return Ok(false);
        };
        match session.finalize_name(&input) {
            Ok(order) => {
                println!();
                println!("Your Final Scent: {}", order.name.bold().green());
                println!("{}", "Fragrance Profile".bold());
                println!("  {}", profile_line(&order.totals));
                println!("{}", "Selected Scents".bold());
                for note in &order.notes {
                    println!("  {note}");
                }
                break;
            }
            Err(err) => println!("{}", err.to_string().red()),
        }
    }

    if confirm("Create another perfume?")? {
        report(session.go_back());
        Ok(true)
    } else {
        Ok(false)
    }
}

/// One-line palette description shown beside its name.
fn palette_blurb(name: &str) -> Option<&'static str> {
    match name {
        "summer" => Some("more fruity scents"),
        "outdoors" => Some("more woody scents"),
        "candy" => Some("more sweet scents"),
        "zesty" => Some("more citrusy scents"),
        _ => None,
    }
}

fn profile_line(profile: &ScentProfile) -> String {
    profile
        .entries()
        .iter()
        .map(|(attr, value)| format!("{}: {value}", capitalize(attr)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Print the outcome of a core call; errors are messages, not crashes.
fn report(result: Result<(), SessionError>) {
    if let Err(err) = result {
        log::debug!("rejected: {err}");
        println!("{}", err.to_string().red());
    }
}

fn confirm(question: &str) -> Result<bool> {
    let Some(answer) = prompt(&format!("{question} (y/n) "))? else {
        return Ok(false);
    };
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Read one trimmed line from stdin. `None` means end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
