//! Trail Runner headless entry point
//!
//! Runs one simulated run with a simple autopilot and logs the result.
//! Usage: `trail-runner [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use trail_runner::sim::{Intent, World};
    use trail_runner::tuning::Tuning;

    env_logger::init();
    log::info!("Trail Runner (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut world = World::new(tuning, seed);
    world.push_intent(Intent::Start);

    // 60 Hz frames, capped at ten minutes of play
    let dt = 1.0 / 60.0;
    let max_frames = 60 * 60 * 10;
    let mut frames = 0;
    while frames < max_frames {
        for intent in autopilot(&world) {
            world.push_intent(intent);
        }
        world.frame(dt);
        frames += 1;
        if world.summary().is_some() {
            break;
        }
        if frames % 600 == 0 {
            let v = &world.state.vitals;
            log::info!(
                "t={:>4.0}s distance {:>7.1} score {:>6} energy {:>5.1} hydration {:>5.1}",
                frames as f32 * dt,
                world.state.distance,
                world.state.score,
                v.energy,
                v.hydration
            );
        }
    }

    match world.summary() {
        Some(summary) => {
            println!("Run ended ({:?}) after {:.1}s", summary.cause, frames as f32 * dt);
            println!("  score:     {}", summary.score);
            println!("  distance:  {:.0}m", summary.distance);
            println!("  calories:  {:.0}", summary.calories);
            println!("  collected: {}", summary.items_collected);
            for insight in &summary.insights {
                println!("  * {}", insight.message());
            }
            if log::log_enabled!(log::Level::Debug) {
                for entry in trail_runner::sim::encyclopedia() {
                    log::debug!("{} {}: {}", entry.item.emoji, entry.item.name, entry.notes.join(" "));
                }
            }
        }
        None => println!(
            "Still running after {:.0}s: score {}, distance {:.0}m",
            frames as f32 * dt,
            world.state.score,
            world.state.distance
        ),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<trail_runner::Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(trail_runner::Tuning::from_json(&json)?)
}

/// Steer toward the nearest item ahead, jumping for elevated ones
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(world: &trail_runner::World) -> Vec<trail_runner::Intent> {
    use trail_runner::Intent;

    let tuning = &world.tuning;
    let player_z = -world.state.distance;
    let target = world
        .segments()
        .flat_map(|segment| {
            segment.remaining().map(move |item| {
                let z = segment.world_z() + item.local_pos.z;
                let lane = (item.local_pos.x / tuning.lane_width).round() as i32;
                (player_z - z, lane, item.local_pos.y)
            })
        })
        .filter(|(ahead, _, _)| *ahead > 0.0 && *ahead < 20.0)
        .min_by(|a, b| a.0.total_cmp(&b.0));

    let mut intents = Vec::new();
    if let Some((ahead, lane, y)) = target {
        let diff = lane - world.state.lane;
        if diff != 0 {
            intents.push(Intent::LaneChange(diff.signum()));
        }
        let speed = tuning.base_speed * world.state.vitals.speed_multiplier();
        // Leave the ground roughly half an airtime before reaching the item
        let half_airtime = tuning.jump_force / tuning.gravity;
        if y > tuning.item_ground_y && ahead < speed * half_airtime && !world.player.airborne {
            intents.push(Intent::Jump);
        }
    }
    intents
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
