//! Randomized checks of move generation and view invariants.
//!
//! Each test builds boards from many fixed seeds so failures reproduce.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use stratego::board::ALL_PIECE_VALUES;
use stratego::movegen::all_legal_actions;
use stratego::{
    ApplyMode, Board, BoardBuilder, BoardView, Cell, Coord, PieceId, PieceValue, PlayerId,
    RestrictedView,
};

const SEEDS: u64 = 200;

#[derive(Debug, Clone, Copy)]
enum Square {
    Lake,
    Piece(PlayerId, PieceValue),
}

struct Layout {
    rows: usize,
    cols: usize,
    squares: Vec<(Coord, Square)>,
    starting: PlayerId,
}

impl Layout {
    fn random(rng: &mut SmallRng) -> Layout {
        let rows: usize = rng.gen_range(1..=8);
        let cols: usize = rng.gen_range(1..=8);
        let mut squares = Vec::new();
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                let roll: f64 = rng.gen();
                let square = if roll < 0.1 {
                    Square::Lake
                } else if roll < 0.5 {
                    let owner = if rng.gen_bool(0.5) {
                        PlayerId::Red
                    } else {
                        PlayerId::Blue
                    };
                    let value = ALL_PIECE_VALUES[rng.gen_range(0..ALL_PIECE_VALUES.len())];
                    Square::Piece(owner, value)
                } else {
                    continue;
                };
                squares.push((Coord::new(x, y), square));
            }
        }
        let starting = if rng.gen_bool(0.5) {
            PlayerId::Red
        } else {
            PlayerId::Blue
        };
        Layout {
            rows,
            cols,
            squares,
            starting,
        }
    }

    fn build(&self) -> Board {
        self.squares
            .iter()
            .fold(
                BoardBuilder::new(self.rows, self.cols).starting(self.starting),
                |b, &(c, square)| match square {
                    Square::Lake => b.lake(c),
                    Square::Piece(owner, value) => b.piece(c, owner, value),
                },
            )
            .build()
            .unwrap()
    }

    /// The same layout with every piece of `owner` turned into `value`.
    fn with_ranks(&self, owner: PlayerId, value: PieceValue) -> Layout {
        let squares = self
            .squares
            .iter()
            .map(|&(c, square)| match square {
                Square::Piece(o, _) if o == owner => (c, Square::Piece(o, value)),
                other => (c, other),
            })
            .collect();
        Layout {
            squares,
            ..*self
        }
    }
}

fn squares(board: &Board) -> impl Iterator<Item = Coord> {
    let (rows, cols) = (board.rows() as i32, board.cols() as i32);
    (0..rows).flat_map(move |y| (0..cols).map(move |x| Coord::new(x, y)))
}

fn ids_of(board: &Board, player: PlayerId) -> Vec<PieceId> {
    board
        .pieces()
        .filter(|(_, p)| p.owner == player)
        .map(|(id, _)| id)
        .collect()
}

#[test]
fn destinations_are_in_bounds_and_not_friendly() {
    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Layout::random(&mut rng).build();
        let mover = board.current_player();
        for action in all_legal_actions(&board).unwrap() {
            assert!(board.is_in_bounds(action.to), "seed {}: {}", seed, action);
            match board.cell_at(action.to).unwrap() {
                Cell::Empty => {}
                Cell::Piece(id) => {
                    assert_ne!(board.piece_at(id).unwrap().owner, mover, "seed {}", seed)
                }
                other => panic!("seed {}: {} lands on {:?}", seed, action, other),
            }
            assert_eq!(board.owner_at(action.from).unwrap(), Some(mover));
        }
    }
}

#[test]
fn reach_matches_rank() {
    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Layout::random(&mut rng).build();
        for action in all_legal_actions(&board).unwrap() {
            let id = match board.cell_at(action.from).unwrap() {
                Cell::Piece(id) => id,
                other => panic!("seed {}: moving from {:?}", seed, other),
            };
            let value = board.piece_at(id).unwrap().value;
            assert!(!value.is_immobile(), "seed {}: {:?} moved", seed, value);
            let step = action.from.distance(action.to);
            if value == PieceValue::Scout {
                assert!(action.from.x == action.to.x || action.from.y == action.to.y);
                // Every square strictly between the endpoints is empty.
                let dx = (action.to.x - action.from.x).signum();
                let dy = (action.to.y - action.from.y).signum();
                for k in 1..step as i32 {
                    let c = Coord::new(action.from.x + dx * k, action.from.y + dy * k);
                    assert_eq!(board.cell_at(c).unwrap(), Cell::Empty, "seed {}", seed);
                }
            } else {
                assert_eq!(step, 1, "seed {}: {:?} {}", seed, value, action);
            }
        }
    }
}

#[test]
fn legality_agrees_with_destinations() {
    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Layout::random(&mut rng).build();
        for from in squares(&board) {
            let legal = board.legal_destinations(from).unwrap();
            for to in squares(&board) {
                let action = stratego::Action::new(from, to);
                assert_eq!(board.is_legal(action).unwrap(), legal.contains(&action));
            }
        }
    }
}

#[test]
fn copy_apply_never_mutates() {
    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Layout::random(&mut rng).build();
        let before = board.clone();
        for action in all_legal_actions(&before).unwrap() {
            let next = board.apply(action, ApplyMode::Copy).unwrap().into_owned();
            assert_eq!(board, before, "seed {}: {}", seed, action);
            assert_eq!(next.current_player(), before.current_player().other());
            assert_eq!(next.cell_at(action.from).unwrap(), Cell::Empty);
        }
    }
}

#[test]
fn random_playouts_keep_the_grid_consistent() {
    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Layout::random(&mut rng).build();
        let total = board.pieces().count();
        for _ in 0..50 {
            let actions = all_legal_actions(&board).unwrap();
            if actions.is_empty() {
                break;
            }
            let action = actions[rng.gen_range(0..actions.len())];
            let on_grid_before = board.occupied().count();
            let event = board.play(action).unwrap();
            assert_eq!(board.occupied().count(), on_grid_before - event.removed().len());
            assert_eq!(board.pieces().count(), total);
            for id in event.removed() {
                assert_eq!(board.locate(*id), None, "seed {}", seed);
            }
            board.has_ended().unwrap();
        }
    }
}

#[test]
fn restricted_snapshot_is_stable() {
    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Layout::random(&mut rng).build();
        let view = RestrictedView::new(&board, ids_of(&board, PlayerId::Red));
        let first = view.snapshot();
        assert_eq!(view.snapshot(), first);
        for (y, row) in board.snapshot().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let expected = match cell {
                    Cell::Piece(id) if board.piece_at(*id).unwrap().owner == PlayerId::Blue => {
                        Cell::Hidden
                    }
                    other => *other,
                };
                assert_eq!(first[y][x], expected, "seed {}", seed);
            }
        }
    }
}

/// Changing the ranks of hidden pieces must not change anything a
/// restricted view reports.
#[test]
fn hidden_ranks_do_not_leak() {
    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = Layout::random(&mut rng);
        let original = layout.build();
        let swapped_value = ALL_PIECE_VALUES[rng.gen_range(0..ALL_PIECE_VALUES.len())];
        let swapped = layout.with_ranks(PlayerId::Blue, swapped_value).build();

        let red = ids_of(&original, PlayerId::Red);
        let a = RestrictedView::new(&original, red.iter().copied());
        let b = RestrictedView::new(&swapped, red.iter().copied());

        assert_eq!(a.snapshot(), b.snapshot(), "seed {}", seed);
        for id in ids_of(&original, PlayerId::Blue) {
            assert_eq!(a.piece_at(id), Err(stratego::BoardError::AccessDenied(id)));
            assert_eq!(a.piece_at(id), b.piece_at(id));
        }
        for from in squares(&original) {
            assert_eq!(
                a.legal_destinations(from).unwrap(),
                b.legal_destinations(from).unwrap(),
                "seed {}: {}",
                seed,
                from
            );
        }
    }
}
