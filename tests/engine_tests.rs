use broadside::{
    play_out, BoardError, ConfigError, Coordinate, EngineError, GameConfig, HuntPhase, Ocean, Orientation,
    Ship, Target, TargetingEngine,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Wraps a board and remembers every shot.
struct Recorder<'a> {
    inner: &'a mut Ocean,
    shots: Vec<(Coordinate, bool)>,
}

impl Target for Recorder<'_> {
    fn board_size(&self) -> usize {
        self.inner.board_size()
    }

    fn fire(&mut self, at: Coordinate) -> Result<bool, BoardError> {
        let hit = self.inner.fire(at)?;
        self.shots.push((at, hit));
        Ok(hit)
    }
}

/// Reports water everywhere, so nothing is ever found.
struct EmptySea {
    size: usize,
}

impl Target for EmptySea {
    fn board_size(&self) -> usize {
        self.size
    }

    fn fire(&mut self, _at: Coordinate) -> Result<bool, BoardError> {
        Ok(false)
    }
}

/// Claims every cell was already fired at.
struct Stale;

impl Target for Stale {
    fn board_size(&self) -> usize {
        10
    }

    fn fire(&mut self, at: Coordinate) -> Result<bool, BoardError> {
        Err(BoardError::AlreadyFired(at))
    }
}

/// A lone hit cell where the engine expects a longer ship.
struct Decoy {
    size: usize,
    hit: Coordinate,
}

impl Target for Decoy {
    fn board_size(&self) -> usize {
        self.size
    }

    fn fire(&mut self, at: Coordinate) -> Result<bool, BoardError> {
        Ok(at == self.hit)
    }
}

#[test]
fn test_single_ship_in_corner() {
    let mut ocean = Ocean::new(10);
    let target = Ship::new(Coordinate::new(0, 0), Orientation::Horizontal, 2, 10).unwrap();
    ocean.place(target).unwrap();

    let mut engine = TargetingEngine::new_game(10, &[2]).unwrap();
    assert_eq!(engine.stride(), 2);

    let mut rng = SmallRng::seed_from_u64(2024);
    let mut board = Recorder {
        inner: &mut ocean,
        shots: Vec::new(),
    };
    while engine.take_turn(&mut board, &mut rng).unwrap() {
        assert!(engine.shots_fired() <= 100);
    }

    assert!(engine.is_finished());
    assert!(engine.remaining_sizes().is_empty());
    assert_eq!(engine.hunt().phase(), HuntPhase::Idle);

    let hits: Vec<Coordinate> = board
        .shots
        .iter()
        .filter(|(_, hit)| *hit)
        .map(|(at, _)| *at)
        .collect();
    assert_eq!(hits.len(), 2);
    assert!(hits.contains(&Coordinate::new(0, 0)));
    assert!(hits.contains(&Coordinate::new(0, 1)));

    // The halo of the sunk ship is excluded, and the game stopped on the sink.
    for at in [(0, 2), (1, 0), (1, 1), (1, 2)] {
        assert!(engine.excluded().contains(at.into()));
    }
    assert!(board.shots.last().unwrap().1);
    assert!(ocean.all_sunk());
}

#[test]
fn test_finished_engine_stops_firing() {
    let mut ocean = Ocean::new(3);
    ocean
        .place(Ship::new(Coordinate::new(1, 0), Orientation::Horizontal, 3, 3).unwrap())
        .unwrap();
    let mut engine = TargetingEngine::new_game(3, &[3]).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    while engine.take_turn(&mut ocean, &mut rng).unwrap() {}
    let shots = engine.shots_fired();
    assert!(!engine.take_turn(&mut ocean, &mut rng).unwrap());
    assert_eq!(engine.shots_fired(), shots);
    assert_eq!(ocean.shots_fired(), shots);
}

#[test]
fn test_longest_ship_sinks_without_probing_the_ends() {
    // A length-4 ship when 4 is the longest afloat: the sink is declared on
    // the fourth hit, with no miss needed.
    let mut ocean = Ocean::new(8);
    ocean
        .place(Ship::new(Coordinate::new(3, 2), Orientation::Horizontal, 4, 8).unwrap())
        .unwrap();
    let mut engine = TargetingEngine::new_game(8, &[4]).unwrap();
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = Recorder {
        inner: &mut ocean,
        shots: Vec::new(),
    };
    while engine.take_turn(&mut board, &mut rng).unwrap() {}
    assert!(board.shots.last().unwrap().1);
    assert_eq!(board.shots.iter().filter(|(_, hit)| *hit).count(), 4);
    assert_eq!(engine.hits(), 4);
    assert_eq!(engine.shots_fired(), board.shots.len());
}

#[test]
fn test_play_out_reports_hits_and_stops_at_the_limit() {
    let mut ocean = Ocean::new(8);
    ocean
        .place(Ship::new(Coordinate::new(2, 2), Orientation::Vertical, 3, 8).unwrap())
        .unwrap();
    ocean
        .place(Ship::new(Coordinate::new(6, 4), Orientation::Horizontal, 2, 8).unwrap())
        .unwrap();
    let mut rng = SmallRng::seed_from_u64(4);

    let mut engine = TargetingEngine::new_game(8, &[3, 2]).unwrap();
    let summary = play_out(&mut engine, &mut ocean, &mut rng, 64).unwrap();
    assert!(summary.finished);
    assert_eq!(summary.hits, 5);
    assert_eq!(summary.ships_sunk, 2);
    assert_eq!(summary.shots, ocean.shots_fired());

    let mut fresh = Ocean::new(8);
    fresh
        .place(Ship::new(Coordinate::new(2, 2), Orientation::Vertical, 3, 8).unwrap())
        .unwrap();
    let mut engine = TargetingEngine::new_game(8, &[3, 2]).unwrap();
    let summary = play_out(&mut engine, &mut fresh, &mut rng, 1).unwrap();
    assert_eq!(summary.shots, 1);
    assert!(summary.hits <= 1);
    assert!(!summary.finished);
}

#[test]
fn test_empty_sea_exhausts_search_space() {
    let mut engine = TargetingEngine::new_game(6, &[3, 2]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut sea = EmptySea { size: 6 };
    let err = loop {
        match engine.take_turn(&mut sea, &mut rng) {
            Ok(true) => continue,
            Ok(false) => panic!("engine claims to have sunk ships on an empty sea"),
            Err(e) => break e,
        }
    };
    assert_eq!(
        err,
        EngineError::ExhaustedSearchSpace {
            stride: 2,
            ships_remaining: 2
        }
    );
    // 6x6 at stride 2 samples 18 cells
    assert_eq!(engine.shots_fired(), 18);
    assert_eq!(engine.take_turn(&mut sea, &mut rng), Err(EngineError::Aborted));
}

#[test]
fn test_refire_is_reported() {
    let mut engine = TargetingEngine::new_game(10, &[2]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let err = engine.take_turn(&mut Stale, &mut rng).unwrap_err();
    assert!(matches!(err, EngineError::RefireAttempt(_)));
    assert_eq!(engine.shots_fired(), 0);
    assert_eq!(engine.take_turn(&mut Stale, &mut rng), Err(EngineError::Aborted));
}

#[test]
fn test_impossible_run_is_a_fleet_mismatch() {
    // (0,0) is on the stride-2 grid; once hit, both neighbours miss and the
    // run of one matches nothing in the fleet.
    let mut engine = TargetingEngine::new_game(6, &[2]).unwrap();
    let mut rng = SmallRng::seed_from_u64(8);
    let mut decoy = Decoy {
        size: 6,
        hit: Coordinate::new(0, 0),
    };
    let err = loop {
        match engine.take_turn(&mut decoy, &mut rng) {
            Ok(true) => continue,
            Ok(false) => panic!("engine sank a ship that does not exist"),
            Err(e) => break e,
        }
    };
    assert_eq!(
        err,
        EngineError::FleetMismatch {
            run_length: 1,
            remaining: vec![2],
        }
    );
    assert_eq!(engine.remaining_sizes(), &[2]);
}

#[test]
fn test_board_size_mismatch() {
    let mut engine = TargetingEngine::new_game(10, &[2]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut sea = EmptySea { size: 8 };
    assert_eq!(
        engine.take_turn(&mut sea, &mut rng),
        Err(EngineError::BoardSizeMismatch {
            expected: 10,
            actual: 8
        })
    );
}

#[test]
fn test_new_game_rejects_bad_setup() {
    assert_eq!(
        TargetingEngine::new_game(0, &[2]).unwrap_err(),
        EngineError::Config(ConfigError::ZeroBoard)
    );
    assert_eq!(
        TargetingEngine::new_game(10, &[]).unwrap_err(),
        EngineError::Config(ConfigError::EmptyFleet)
    );
    assert_eq!(
        TargetingEngine::new_game(10, &[3, 0]).unwrap_err(),
        EngineError::Config(ConfigError::ZeroLengthShip)
    );
    assert_eq!(
        TargetingEngine::new_game(4, &[5]).unwrap_err(),
        EngineError::Config(ConfigError::ShipTooLong {
            length: 5,
            board_size: 4
        })
    );
    let engine = TargetingEngine::from_config(&GameConfig::default()).unwrap();
    assert_eq!(engine.board_size(), 10);
    assert_eq!(engine.stride(), 2);
}
