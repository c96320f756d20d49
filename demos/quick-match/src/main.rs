//! Plays one complete match through the coordinator: Alice hosts, Bob
//! joins, both answer five rounds against the bot, and the final
//! leaderboard is printed. Run with `RUST_LOG=debug` to watch the
//! coordinator's internal events.

use mathclash_room::RoomCoordinator;
use tracing_subscriber::EnvFilter;

fn solve(prompt: &str) -> i64 {
    let mut parts = prompt.split(' ');
    let a: i64 = parts.next().unwrap_or("0").parse().unwrap_or(0);
    let op = parts.next().unwrap_or("+");
    let b: i64 = parts.next().unwrap_or("0").parse().unwrap_or(0);
    match op {
        "-" => a - b,
        "*" => a * b,
        _ => a + b,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let coordinator = RoomCoordinator::new();

    let room = coordinator.create_room("host-1", "Alice")?;
    let code = room.code;
    println!("room {code} created by Alice (vs {})", room.players[1].name);

    coordinator.join_room(&code, "guest-1", "Bob")?;
    let mut room = coordinator.start_game(&code, "host-1")?;
    println!("match started: {} questions\n", room.total_questions);

    while let Some(question) = room.current_question.clone() {
        let answer = solve(&question.prompt);
        println!("Q{}: {} = ?", question.id, question.prompt);

        // Alice is quick and always right; Bob fumbles every other round.
        coordinator.submit_answer(&code, "host-1", answer, 700 + 100 * question.id as u64)?;
        let bob_answer = if question.id % 2 == 0 { answer } else { answer + 1 };
        room = coordinator.submit_answer(&code, "guest-1", bob_answer.min(999), 1800)?;

        println!("  -> round closed, status {}", room.status);
    }

    println!("\nfinal ranking for room {code}:");
    for (place, player) in coordinator.get_ranking(&code)?.iter().enumerate() {
        println!(
            "  {}. {:<8} {:>3} pts  (avg {:.0} ms{})",
            place + 1,
            player.name,
            player.score,
            player.average_response_time,
            if player.is_bot { ", bot" } else { "" },
        );
    }

    coordinator.leave_room(&code, "guest-1")?;
    coordinator.leave_room(&code, "host-1")?;
    println!("\nrooms still tracked: {}", coordinator.room_count());
    Ok(())
}
