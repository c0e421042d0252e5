//! Text collaborator for the wagering sequence and the end-of-round
//! report. Values typed here only enter the book through `place_bet`,
//! which does all the validating; this module just loops and prints.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use orchard_wager::{Settlement, WagerBook};

/// Line-oriented text I/O.
///
/// `read_line` returns `None` once the underlying stream is exhausted;
/// callers treat that the same as a deliberate blank entry.
pub trait Console {
    fn print_line(&mut self, line: &str);
    fn read_line(&mut self) -> Option<String>;
}

/// Console backed by stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
        let _ = io::stdout().flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while buf.ends_with('\n') || buf.ends_with('\r') {
                    buf.pop();
                }
                Some(buf)
            }
        }
    }
}

/// Run the pre-round prompt sequence, recording accepted bets in the
/// book. A blank bettor name, or end of input, closes the book.
pub fn collect_bets<C>(console: &mut C, book: &mut WagerBook)
where
    C: Console + ?Sized,
{
    let last = book.entity_count().saturating_sub(1);
    console.print_line(&format!(
        "Betting is open on fruits 0 through {last}. Blank name closes the book."
    ));

    loop {
        console.print_line("Bettor name (blank to finish):");
        let name = match console.read_line() {
            Some(line) => line.trim().to_string(),
            None => break,
        };
        if name.is_empty() {
            break;
        }

        let entity: usize = match read_number(console, &format!("Which fruit? (0-{last}):")) {
            Some(value) => value,
            None => break,
        };
        let amount: f64 = match read_number(console, "Stake:") {
            Some(value) => value,
            None => break,
        };

        match book.place_bet(&name, entity, amount) {
            Ok(()) => console.print_line(&format!("{name} backs fruit {entity}.")),
            Err(err) => console.print_line(&format!("Bet refused: {err}.")),
        }
    }
}

/// Announce how the round ended.
pub fn report_winner<C>(console: &mut C, winner: Option<usize>)
where
    C: Console + ?Sized,
{
    match winner {
        Some(fruit) => console.print_line(&format!("Fruit {fruit} wins the round.")),
        None => console.print_line("Round abandoned, no winner."),
    }
}

/// Print the payout report. An unsettled book (the round was abandoned)
/// or a settlement with nothing to hand out both read "No payouts."
pub fn report_settlement<C>(console: &mut C, settlement: Option<&Settlement>)
where
    C: Console + ?Sized,
{
    let settlement = match settlement {
        Some(s) if s.has_payouts() => s,
        _ => {
            console.print_line("No payouts.");
            return;
        }
    };

    console.print_line(&format!(
        "Pot {:.2}, tax {:.2}, {:.2} to distribute.",
        settlement.pot, settlement.tax, settlement.distributable
    ));
    for payout in &settlement.payouts {
        console.print_line(&format!(
            "  {} backed fruit {} with {:.2} and collects {:.2}",
            payout.bettor, payout.entity, payout.stake, payout.amount
        ));
    }
}

/// Prompt until the line parses, re-prompting on junk. `None` means the
/// stream ended first.
fn read_number<T, C>(console: &mut C, prompt: &str) -> Option<T>
where
    T: FromStr,
    C: Console + ?Sized,
{
    loop {
        console.print_line(prompt);
        let line = console.read_line()?;
        match line.trim().parse() {
            Ok(value) => return Some(value),
            Err(_) => console.print_line("That is not a number, try again."),
        }
    }
}
