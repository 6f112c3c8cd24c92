//! End-to-end scenarios: a player trains the engine and a mimic replays it.

use mimicry::builder::action_names;
use mimicry::core::{ActionName, FixedIndex, ScriptedSampler, Symbol};
use mimicry::engine::{ActionEngine, StepResult};
use mimicry::registry::{
    CapabilityError, CapabilitySet, Controllable, DispatchError, Method,
};
use mimicry::{Checkpoint, EngineBuilder, EngineConfig};
use std::sync::{Arc, Mutex};

fn name(s: &str) -> ActionName {
    ActionName::new(s)
}

fn recording_target(log: &Arc<Mutex<Vec<String>>>, names: &[&str]) -> CapabilitySet<ActionName> {
    names.iter().fold(CapabilitySet::new(), |set, n| {
        let log = Arc::clone(log);
        let label = n.to_string();
        set.bind(name(n), move || {
            log.lock().unwrap().push(label.clone());
            Ok(())
        })
    })
}

#[derive(Debug, Default)]
struct Walker {
    x: i32,
    y: i32,
}

impl Walker {
    fn left(&mut self) -> Result<(), CapabilityError> {
        self.x -= 20;
        Ok(())
    }

    fn right(&mut self) -> Result<(), CapabilityError> {
        self.x += 20;
        Ok(())
    }

    fn up(&mut self) -> Result<(), CapabilityError> {
        if self.y <= 0 {
            return Err(CapabilityError::failed("already at the top edge"));
        }
        self.y -= 20;
        Ok(())
    }
}

impl Controllable<ActionName> for Walker {
    fn methods() -> Vec<(ActionName, Method<Self>)> {
        vec![
            (name("LEFT"), Walker::left as Method<Self>),
            (name("RIGHT"), Walker::right as Method<Self>),
            (name("UP"), Walker::up as Method<Self>),
        ]
    }
}

#[derive(Debug, Default)]
struct Turret {
    shots: usize,
}

impl Turret {
    fn overheat(&mut self) -> Result<(), CapabilityError> {
        panic!("barrel overheated");
    }

    fn fire(&mut self) -> Result<(), CapabilityError> {
        self.shots += 1;
        Ok(())
    }
}

impl Controllable<ActionName> for Turret {
    fn methods() -> Vec<(ActionName, Method<Self>)> {
        vec![
            (name("OVERHEAT"), Turret::overheat as Method<Self>),
            (name("FIRE"), Turret::fire as Method<Self>),
        ]
    }
}

#[test]
fn registry_keeps_only_capabilities_the_target_has() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let target = recording_target(&log, &["up", "left"]);

    let engine = ActionEngine::new(&target, &action_names(&["up", "down", "left"]));

    assert_eq!(engine.registry().symbols(), action_names(&["up", "left"]).as_slice());
    assert!(!engine.registry().contains(&name("down")));
}

#[test]
fn left_left_right_left_replays_through_the_mimic() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let target = recording_target(&log, &["left", "right"]);
    let mut engine =
        ActionEngine::with_sampler(&target, &action_names(&["left", "right"]), FixedIndex(0));

    for action in ["left", "left", "right", "left"] {
        engine.train(name(action));
    }

    let model = engine.model();
    assert_eq!(model.len(), 3);
    assert_eq!(model.record(&ActionName::none()).unwrap().observed_next(), &[name("left")]);
    assert_eq!(
        model.record(&name("left")).unwrap().observed_next(),
        &[name("left"), name("right")]
    );
    assert_eq!(model.record(&name("right")).unwrap().observed_next(), &[name("left")]);

    assert_eq!(engine.step(), StepResult::Idle { next: name("left") });
    for _ in 0..3 {
        assert!(engine.step().is_dispatched());
    }
    assert_eq!(*log.lock().unwrap(), vec!["left", "left", "left"]);
}

#[test]
fn untrained_mimic_never_acts() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let target = recording_target(&log, &["left"]);
    let mut engine = ActionEngine::new(&target, &action_names(&["left"]));

    for _ in 0..20 {
        assert_eq!(engine.step(), StepResult::Untrained);
    }
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn failing_and_panicking_capabilities_do_not_stop_the_mimic() {
    let target = CapabilitySet::new()
        .bind(name("A"), || Err(CapabilityError::failed("jammed")))
        .bind(name("B"), || panic!("boom"));
    let mut engine = ActionEngine::with_sampler(
        &target,
        &action_names(&["A", "B"]),
        ScriptedSampler::new([0, 0, 0, 0]),
    );
    engine.train(name("A"));
    engine.train(name("B"));
    engine.train(name("A"));

    assert!(matches!(engine.step(), StepResult::Idle { .. }));

    let failed = engine.step();
    assert!(matches!(
        failed.error(),
        Some(DispatchError::Failed { symbol, .. }) if symbol == "A"
    ));

    let panicked = engine.step();
    assert!(matches!(
        panicked.error(),
        Some(DispatchError::Panicked { message, .. }) if message == "boom"
    ));

    assert_eq!(engine.metadata().failures, 2);
    assert!(engine.step().next().is_some());
}

#[test]
fn controllable_walker_moves_on_dispatch() {
    let walker = Arc::new(Mutex::new(Walker { x: 100, y: 100 }));
    let mut engine = EngineBuilder::new()
        .actions(action_names(&["LEFT", "RIGHT", "UP", "DOWN"]))
        .with_sampler(FixedIndex(0))
        .build(&walker)
        .unwrap();

    assert_eq!(engine.registry().len(), 3);

    engine.train(name("RIGHT"));
    engine.train(name("UP"));

    engine.step();
    engine.step();
    engine.step();

    let walker = walker.lock().unwrap();
    assert_eq!((walker.x, walker.y), (120, 80));
}

#[test]
fn walker_errors_surface_as_failed_steps() {
    let walker = Arc::new(Mutex::new(Walker::default()));
    let mut engine = ActionEngine::with_sampler(&walker, &action_names(&["UP"]), FixedIndex(0));
    engine.train(name("UP"));

    engine.step();
    let result = engine.step();

    assert_eq!(result.symbol(), Some(&name("UP")));
    assert!(matches!(
        result.error(),
        Some(DispatchError::Failed {
            source: CapabilityError::Failed(_),
            ..
        })
    ));
}

#[test]
fn checkpoint_survives_json_and_binary_round_trips() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let target = recording_target(&log, &["left", "right"]);
    let desired = action_names(&["left", "right"]);
    let mut engine = ActionEngine::with_sampler(&target, &desired, FixedIndex(0));
    for action in ["left", "left", "right", "left"] {
        engine.train(name(action));
    }

    let checkpoint = engine.checkpoint();
    let from_json = Checkpoint::<ActionName>::from_json(&checkpoint.to_json().unwrap()).unwrap();
    let from_bytes =
        Checkpoint::<ActionName>::from_bytes(&checkpoint.to_bytes().unwrap()).unwrap();

    assert_eq!(from_json.records, checkpoint.records);
    assert_eq!(from_bytes.records, checkpoint.records);
    assert_eq!(from_bytes.observation_count(), 4);

    let mut resumed = ActionEngine::resume(from_json, &target, &desired, FixedIndex(0)).unwrap();
    assert_eq!(resumed.model().observation_count(), 4);
    assert_eq!(resumed.training_cursor(), &name("left"));

    assert!(matches!(resumed.step(), StepResult::Idle { .. }));
    assert!(resumed.step().is_dispatched());
    assert_eq!(*log.lock().unwrap(), vec!["left"]);
}

#[test]
fn config_drives_cadence_and_seed() {
    let config = EngineConfig::from_json(r#"{ "seed": 5, "step_interval": 3 }"#).unwrap();
    let mut cadence = config.cadence();

    let fired: Vec<bool> = (0..6).map(|_| cadence.tick()).collect();
    assert_eq!(fired, vec![false, false, true, false, false, true]);

    let log = Arc::new(Mutex::new(Vec::new()));
    let target = recording_target(&log, &["left", "right"]);
    let run = || {
        let mut engine = EngineBuilder::new()
            .config(config.clone())
            .actions(action_names(&["left", "right"]))
            .build(&target)
            .unwrap();
        for action in ["left", "right", "right", "left", "left"] {
            engine.train(name(action));
        }
        (0..20).map(|_| engine.peek_next_symbol()).collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn panicking_entity_method_does_not_block_later_dispatches() {
    let turret = Arc::new(Mutex::new(Turret::default()));
    let mut engine = ActionEngine::with_sampler(
        &turret,
        &action_names(&["OVERHEAT", "FIRE"]),
        ScriptedSampler::new([0, 0, 0, 0]),
    );
    engine.train(name("OVERHEAT"));
    engine.train(name("FIRE"));
    engine.train(name("FIRE"));

    assert!(matches!(engine.step(), StepResult::Idle { .. }));

    let overheated = engine.step();
    assert!(matches!(
        overheated.error(),
        Some(DispatchError::Panicked { message, .. }) if message == "barrel overheated"
    ));

    let fired = engine.step();
    assert!(fired.is_dispatched(), "unexpected step result: {fired:?}");
    assert!(engine.step().is_dispatched());

    assert_eq!(turret.lock().unwrap().shots, 2);
    assert_eq!(engine.metadata().failures, 1);
    assert_eq!(engine.metadata().dispatches, 2);
}
