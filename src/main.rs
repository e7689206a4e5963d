// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

// Use library instead of local modules
use household_builder::{Candidate, HouseholdBuilder};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "demo" {
        // Scripted walkthrough (no TTY needed)
        run_demo()?;
    } else {
        // Interactive form (default)
        run_ui_mode()?;
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    println!("🏠 Household Builder - scripted walkthrough");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut builder = HouseholdBuilder::standard();
    println!("\n📋 Allowed relationships: {}", builder.catalog().join());

    // 1. Admit a few members
    println!("\n➕ Adding members...");
    let candidates = [
        Candidate::new("45", "self", false),
        Candidate::new("42", "spouse", true),
        Candidate::new("9", "child", false),
    ];
    for candidate in &candidates {
        match builder.add_candidate(candidate) {
            Ok(id) => println!("✓ Added age {} ({}) as {}", candidate.age, candidate.rel, id),
            Err(errors) => {
                for error in errors {
                    println!("✗ {}", error);
                }
            }
        }
    }

    // 2. A bad candidate is rejected with every violation at once
    println!("\n🚫 Trying an invalid candidate (age -1, relationship \"roommate\")...");
    if let Err(errors) = builder.add_candidate(&Candidate::new("-1", "roommate", false)) {
        for error in errors {
            println!("✗ {}", error);
        }
    }
    println!("✓ Household still has {} members", builder.members().len());

    // 3. Remove one member by id
    if let Some(last) = builder.members().last() {
        let id = last.id.clone();
        println!("\n➖ Removing {}...", last);
        builder.remove_member(&id);
        println!("✓ Household now has {} members", builder.members().len());
    }

    // 4. Submit (the mocked trip to the server)
    println!("\n📤 Submitting household...");
    let payload = builder.submit()?;
    println!("✓ Payload:\n{}", payload);

    // 5. Submission keeps the roster; an emptied household is refused
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "✓ Roster intact after submission: {} members",
        builder.members().len()
    );
    let empty = HouseholdBuilder::standard();
    if let Err(err) = empty.submit() {
        println!("✓ Empty household refused: {}", err);
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🖥️  Loading Household Builder UI...\n");

    let builder = HouseholdBuilder::standard();
    println!(
        "📋 Relationship options: {}\n",
        builder.catalog().join()
    );
    println!("Starting UI... (Press Esc to quit)\n");

    let mut app = ui::App::new(builder);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the scripted mode: cargo run demo");
    std::process::exit(1);
}
