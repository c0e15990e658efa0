//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ticklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use ticklist_core::{DeleteDecision, ListView, TodoSession};

fn main() {
    println!("ticklist_core ping={}", ticklist_core::ping());
    println!("ticklist_core version={}", ticklist_core::core_version());

    // Walk the screen's event flow once without a UI attached.
    let mut session = TodoSession::seeded();
    session.set_input("Buy milk");
    let id = session.submit_input();
    session.mark_done(id).expect("freshly added id resolves");
    let prompt = session.request_delete(id).expect("done item can be deleted");
    println!("prompt: {} ({})", prompt.message, prompt.title);
    session
        .resolve_delete(DeleteDecision::Cancel)
        .expect("cancel never fails");

    match session.snapshot() {
        ListView::Empty { placeholder } => println!("{placeholder}"),
        ListView::Rows(rows) => {
            for row in rows {
                let marker = if row.struck { "x" } else { " " };
                println!("[{marker}] {}", row.title);
            }
        }
    }
}
