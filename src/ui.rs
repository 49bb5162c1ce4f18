//! Text rendering of boards for the command line.

use std::fmt::Write;
use std::string::String;

use crate::core::{
    board::{Board, BoardView},
    config::BOARD_SIZE,
    position::Position,
};
use crate::strategy::{AttackCoordinator, HuntPhase};

/// Render `board` with columns `A`..`J` (x) and rows `1`..`10` (y).
/// With `reveal`, unattacked ship cells are drawn as `S`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ╔═══════════════════════╗\n");
    out.push_str("    ║  ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + x) as char);
    }
    out.push_str(" ║\n");
    out.push_str("    ╠═══════════════════════╣\n");
    for y in 0..BOARD_SIZE {
        let _ = write!(out, "    ║ {:2}", y + 1);
        for x in 0..BOARD_SIZE {
            let ch = match Position::new(x, y) {
                Ok(pos) => cell_char(board, pos, reveal),
                Err(_) => '?',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push_str(" ║\n");
    }
    out.push_str("    ╚═══════════════════════╝\n");
    if reveal {
        out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
        for ship in board.ships() {
            let status = if ship.is_sunk() { "SUNK" } else { "Active" };
            let _ = writeln!(
                out,
                "      {} ({}): {}",
                ship.ship_type().name(),
                ship.ship_type().length(),
                status
            );
        }
    } else {
        out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

fn cell_char(board: &Board, pos: Position, reveal: bool) -> char {
    if board.hits().contains(pos) {
        'X'
    } else if board.is_attacked(pos) {
        'o'
    } else if reveal && board.is_occupied(pos) {
        'S'
    } else {
        '.'
    }
}

/// One-line description of what the attacker is doing.
pub fn describe_strategy(strategy: &AttackCoordinator) -> String {
    let Some(hunt) = strategy.hunt() else {
        return String::from("searching at random");
    };
    match (hunt.phase(), hunt.first_hit(), hunt.current_direction()) {
        (HuntPhase::Axis, Some(first), Some(direction)) => {
            format!("walking {} along the axis through {}", direction, first)
        }
        (_, Some(first), _) => format!(
            "probing around {} ({} directions left)",
            first,
            hunt.remaining_directions().len()
        ),
        _ => String::from("hunting"),
    }
}
