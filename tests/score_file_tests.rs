use std::path::PathBuf;

use broadside::{Coord, FileScoreStore, Game, MemoryScoreStore, NullSink, ScoreStore, Side, Turn};
use rand::{rngs::SmallRng, SeedableRng};

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("broadside-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("nested").join("best.bin")
}

#[test]
fn test_missing_file_means_no_best() {
    let store = FileScoreStore::new(scratch_path("missing"));
    assert_eq!(store.load_best().unwrap(), None);
    store.reset().unwrap();
}

#[test]
fn test_best_score_survives_reopen() {
    let path = scratch_path("reopen");
    let mut store = FileScoreStore::new(&path);
    store.save_best(23).unwrap();
    assert!(path.exists());

    let reopened = FileScoreStore::new(&path);
    assert_eq!(reopened.load_best().unwrap(), Some(23));

    reopened.reset().unwrap();
    assert_eq!(reopened.load_best().unwrap(), None);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let path = scratch_path("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, [0xffu8]).unwrap();
    assert!(FileScoreStore::new(&path).load_best().is_err());
}

#[test]
fn test_game_loads_best_from_file() {
    let path = scratch_path("game");
    FileScoreStore::new(&path).save_best(31).unwrap();

    let game = Game::start(
        SmallRng::seed_from_u64(8),
        None,
        FileScoreStore::new(&path),
        NullSink,
    )
    .unwrap();
    assert_eq!(game.best_score(), Some(31));

    let fresh = Game::start(
        SmallRng::seed_from_u64(8),
        None,
        MemoryScoreStore::new(),
        NullSink,
    )
    .unwrap();
    assert_eq!(fresh.best_score(), None);
}

#[test]
fn test_better_score_is_written_to_file() {
    let path = scratch_path("better");
    FileScoreStore::new(&path).save_best(40).unwrap();

    let mut game = Game::start(
        SmallRng::seed_from_u64(9),
        None,
        FileScoreStore::new(&path),
        NullSink,
    )
    .unwrap();
    assert_eq!(game.best_score(), Some(40));

    let targets: Vec<Coord> = game
        .state()
        .computer()
        .fleet
        .ships()
        .iter()
        .flat_map(|s| s.cells())
        .collect();
    let mut targets = targets.into_iter();
    while !game.turn().is_over() {
        if let Turn::Player { .. } = game.turn() {
            let at = targets.next().unwrap();
            game.player_shoot(at.row, at.col).unwrap();
        } else {
            game.computer_turn();
        }
    }

    assert_eq!(game.turn().winner(), Some(Side::Player));
    assert_eq!(game.best_score(), Some(17));
    assert_eq!(FileScoreStore::new(&path).load_best().unwrap(), Some(17));
}
