//! Grid Chase
//!
//! This example demonstrates a mimic learning to move like a player.
//!
//! Key concepts:
//! - A player entity driven by a scripted input queue
//! - A mimic entity exposing its moves through `Controllable`
//! - Training on every player move, stepping on a `Cadence`
//! - Out-of-bounds moves reported as failed steps, not crashes
//!
//! Run with: RUST_LOG=mimicry=debug cargo run --example grid_chase

use mimicry::builder::action_names;
use mimicry::core::{ActionName, Symbol};
use mimicry::registry::{CapabilityError, Controllable, Method};
use mimicry::{EngineBuilder, EngineConfig, StepResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

const GRID: i32 = 600;
const STRIDE: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    x: i32,
    y: i32,
}

impl Position {
    fn shifted(self, dx: i32, dy: i32) -> Option<Position> {
        let next = Position {
            x: self.x + dx,
            y: self.y + dy,
        };
        let inside = next.x > -STRIDE && next.x < GRID && next.y > -STRIDE && next.y < GRID;
        inside.then_some(next)
    }
}

// The mimic's body: every move is a capability the engine may dispatch
#[derive(Debug)]
struct Walker {
    position: Position,
    moves: usize,
}

impl Walker {
    fn at(x: i32, y: i32) -> Self {
        Self {
            position: Position { x, y },
            moves: 0,
        }
    }

    fn shift(&mut self, dx: i32, dy: i32) -> Result<(), CapabilityError> {
        let next = self.position.shifted(dx, dy).ok_or_else(|| {
            CapabilityError::failed(format!(
                "move to ({}, {}) leaves the grid",
                self.position.x + dx,
                self.position.y + dy
            ))
        })?;
        self.position = next;
        self.moves += 1;
        Ok(())
    }

    fn left(&mut self) -> Result<(), CapabilityError> {
        self.shift(-STRIDE, 0)
    }

    fn right(&mut self) -> Result<(), CapabilityError> {
        self.shift(STRIDE, 0)
    }

    fn up(&mut self) -> Result<(), CapabilityError> {
        self.shift(0, -STRIDE)
    }

    fn down(&mut self) -> Result<(), CapabilityError> {
        self.shift(0, STRIDE)
    }
}

impl Controllable<ActionName> for Walker {
    fn methods() -> Vec<(ActionName, Method<Self>)> {
        vec![
            (ActionName::new("LEFT"), Walker::left as Method<Self>),
            (ActionName::new("RIGHT"), Walker::right as Method<Self>),
            (ActionName::new("UP"), Walker::up as Method<Self>),
            (ActionName::new("DOWN"), Walker::down as Method<Self>),
        ]
    }
}

// Player input for one frame, if any
fn scripted_input() -> VecDeque<Option<&'static str>> {
    let pattern = [
        Some("RIGHT"),
        None,
        Some("RIGHT"),
        Some("DOWN"),
        None,
        None,
        Some("RIGHT"),
        Some("UP"),
        Some("LEFT"),
        None,
    ];
    pattern.iter().copied().cycle().take(120).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mimicry=info")),
        )
        .with_target(false)
        .init();

    println!("=== Grid Chase ===\n");

    let config = EngineConfig::from_json(r#"{ "seed": 2024, "step_interval": 3 }"#)?;
    let mut cadence = config.cadence();

    let mimic = Arc::new(Mutex::new(Walker::at(300, 300)));
    let mut engine = EngineBuilder::new()
        .config(config)
        .actions(action_names(&["LEFT", "RIGHT", "UP", "DOWN"]))
        .build(&mimic)?;

    let mut player = Walker::at(0, 0);
    let mut inputs = scripted_input();
    let mut frame = 0usize;

    while let Some(input) = inputs.pop_front() {
        frame += 1;

        if let Some(direction) = input {
            let action = ActionName::new(direction);
            let moved = match direction {
                "LEFT" => player.left(),
                "RIGHT" => player.right(),
                "UP" => player.up(),
                _ => player.down(),
            };
            if moved.is_ok() {
                engine.train(action);
            }
        }

        if !cadence.tick() {
            continue;
        }

        match engine.step() {
            StepResult::Untrained => println!("[{frame:>3}] mimic waiting for input"),
            StepResult::Idle { next } => println!("[{frame:>3}] mimic idle, next {}", next),
            StepResult::Dispatched { symbol, .. } => {
                let at = mimic.lock().map(|m| m.position).map_err(|e| e.to_string())?;
                println!("[{frame:>3}] mimic {:<5} -> ({}, {})", symbol, at.x, at.y);
            }
            StepResult::Unbound { symbol, .. } => {
                println!("[{frame:>3}] mimic cannot {}", symbol.name())
            }
            StepResult::Failed { error, .. } => println!("[{frame:>3}] mimic blocked: {}", error),
        }
    }

    let metadata = engine.metadata();
    let mimic = mimic.lock().map_err(|e| e.to_string())?;

    println!("\n=== Summary ===");
    println!(
        "Player at ({}, {}) after {} moves",
        player.position.x, player.position.y, player.moves
    );
    println!(
        "Mimic at ({}, {}) after {} moves",
        mimic.position.x, mimic.position.y, mimic.moves
    );
    println!(
        "Observations: {}, steps: {}, dispatched: {}, failed: {}",
        metadata.observations, metadata.steps, metadata.dispatches, metadata.failures
    );

    println!("\nLearned transitions:");
    for record in engine.model().records() {
        let successors: Vec<String> = record
            .distribution()
            .into_iter()
            .map(|(next, weight)| format!("{}x{}", next, weight))
            .collect();
        println!("  {:<5} -> [{}]", record.symbol(), successors.join(", "));
    }

    Ok(())
}
