//! Interactive terminal front end for the hierarchy lookup tool.
//!
//! Prompt loop: read a username, search both account namespaces, walk
//! the duplicate-account warning gate when needed, then print the
//! results. Failures surface as notices and the prompt returns; nothing
//! is fatal to the process.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use hierarchy_lookup::bridge::BridgeClient;
use hierarchy_lookup::hierarchy::{render_user, user_view};
use hierarchy_lookup::notification::TerminalNotifier;
use hierarchy_lookup::search::SearchSession;
use hierarchy_lookup::types::AccountKind;

const WARNING_TITLE: &str = "Duplicate Account Warning";
const WARNING_BODY: &str = "This username has both agent and player accounts. Please exercise \
caution when processing transactions as this may indicate potential fraud or could lead to \
processing errors. Double-check all details before proceeding with any transactions.";
const ACKNOWLEDGMENT_LABEL: &str = "I understand the risks associated with duplicate accounts";
const DUPLICATE_BANNER: &str = "Warning: This user has both agent and player accounts!";

type InputLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut session = SearchSession::new(BridgeClient::new(), Box::new(TerminalNotifier));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Team Marc Agent Tools — hierarchy lookup (exit to quit)");
    loop {
        let Some(input) = prompt(&mut lines, "username> ").await? else {
            break;
        };
        let username = input.trim();
        if username.is_empty() {
            continue;
        }
        if matches!(username, "exit" | "quit") {
            break;
        }

        println!("Searching...");
        session.handle_search(username).await;

        if session.state().show_duplicate_warning {
            run_warning_gate(&mut session, &mut lines).await?;
        }
        if session.state().show_results {
            print_results(&session);
        }
    }

    Ok(())
}

/// Print `text` without a newline and read one line of input. `None`
/// means EOF.
async fn prompt(lines: &mut InputLines, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// The duplicate-account dialog: shown until the operator checks the
/// acknowledgment box and confirms. EOF leaves the gate in place.
async fn run_warning_gate(
    session: &mut SearchSession<BridgeClient>,
    lines: &mut InputLines,
) -> Result<()> {
    println!();
    println!("!! {}", WARNING_TITLE);
    println!("{}", WARNING_BODY);
    println!();

    loop {
        let question = format!("[{}] — check the box? [y/N] ", ACKNOWLEDGMENT_LABEL);
        let Some(answer) = prompt(lines, &question).await? else {
            return Ok(());
        };
        session.set_warning_acknowledged(matches!(answer.trim(), "y" | "Y" | "yes"));
        if session.acknowledge_warning() {
            return Ok(());
        }
    }
}

fn print_results(session: &SearchSession<BridgeClient>) {
    let state = session.state();
    println!();

    if state.has_both_accounts() {
        println!("{}", DUPLICATE_BANNER);
        println!();
    }

    if state.has_agent_account() {
        if let Some(agent) = &state.agent_data {
            println!("=== Agent Account ===");
            for line in render_user(&user_view(agent, AccountKind::Agent)) {
                println!("{}", line);
            }
            println!();
        }
    }

    if state.has_player_account() {
        if let Some(player) = &state.player_data {
            println!("=== Player Account ===");
            for line in render_user(&user_view(player, AccountKind::Player)) {
                println!("{}", line);
            }
            println!();
        }
    }

    if !state.has_agent_account() && !state.has_player_account() {
        println!("No matching accounts.");
    }
}
