//! Chicane Quickstart: a complete, minimal race from scratch.
//!
//! Demonstrates:
//!   1. Building a RaceConfig and RaceWorld
//!   2. Spawning opponents while the simulation runs
//!   3. Steering with cooldown-gated lane changes
//!   4. Reacting to collision events
//!   5. Reading metrics and resetting the world
//!
//! Run with:
//!   cargo run --example quickstart

use chicane_core::{Car, LaneChange};
use chicane_engine::{RaceConfig, RaceWorld};

// ─── Frame parameters ───────────────────────────────────────────

const DT: f64 = 1.0 / 60.0;
const OPPONENT_SPEED: f64 = 9.0;
const VIEW_AHEAD: f64 = 60.0;
const VIEW_COLS: usize = 30;

// ─── ASCII track rendering ──────────────────────────────────────
//
// One row per lane, the player's window of track compressed into
// VIEW_COLS cells. `P` marks the player, `#` an opponent center.

fn render(world: &RaceWorld) {
    let base = world.player().position;
    for lane in 0..world.lane_count() {
        let mut row = vec!['.'; VIEW_COLS];
        for (_, car) in world.opponents() {
            if car.lane_index != lane {
                continue;
            }
            let offset = car.position - base;
            if (0.0..VIEW_AHEAD).contains(&offset) {
                let col = (offset / VIEW_AHEAD * VIEW_COLS as f64) as usize;
                row[col.min(VIEW_COLS - 1)] = '#';
            }
        }
        if lane == world.player().lane_index {
            row[0] = 'P';
        }
        let cells: String = row.into_iter().collect();
        println!("  lane {lane}: {cells}");
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Chicane Quickstart ===\n");

    // 1. Build a three-lane world, player mid-lane.
    let config = RaceConfig {
        player: Car::new(1, 0.0),
        ..RaceConfig::new(3)
    };
    let mut world = RaceWorld::new(config)?;
    println!(
        "World created: {} lanes, cooldown {:.2}s, despawn margin {:.1}\n",
        world.lane_count(),
        world.lane_change_cooldown(),
        world.despawn_margin(),
    );

    // 2. Seed some traffic ahead of the player.
    world.spawn_opponent(0, 25.0)?;
    world.spawn_opponent(1, 40.0)?;
    world.spawn_opponent(2, 55.0)?;
    println!("Spawned {} opponents:", world.opponent_count());
    render(&world);

    // 3. Drive 240 frames (~4 s), dodging the mid-lane opponent by
    //    swerving left and back. Spawn fresh traffic as the field thins.
    println!("\nRunning at 60 Hz...");
    for frame in 0..240u32 {
        let command = match frame {
            100 => LaneChange::Left,
            180 => LaneChange::Right,
            _ => LaneChange::None,
        };

        let collision = world.advance(DT, OPPONENT_SPEED, command)?;
        if let Some(event) = collision {
            println!(
                "  frame {frame:>3}: collision in lane {} (overlap {:.2}, opponent {} at {:.2})",
                event.lane_index, event.overlap, event.opponent, event.opponent_center,
            );
        }

        // Keep the track populated: replace culled opponents.
        if world.last_metrics().culled > 0 {
            let lane = (frame as usize) % world.lane_count();
            world.spawn_opponent(lane, world.player().position + 70.0)?;
        }

        if frame % 60 == 0 {
            let metrics = world.last_metrics();
            println!(
                "  frame {frame:>3}: lane={}, opponents={}, step={}us",
                world.player().lane_index,
                metrics.opponent_count,
                metrics.total_us,
            );
        }
    }

    // 4. Final state.
    println!(
        "\nAfter {} ticks: {} lane changes, {} collisions",
        world.current_tick(),
        world.lane_changes(),
        world.collisions(),
    );
    render(&world);

    // 5. Reset and verify.
    world.reset();
    println!(
        "\nReset: tick {}, opponents {}, lane {}",
        world.current_tick(),
        world.opponent_count(),
        world.player().lane_index,
    );

    println!("Done.");
    Ok(())
}
