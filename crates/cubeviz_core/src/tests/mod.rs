use crate::*;

mod compile;

const SCHEME: [&str; 6] = ["white", "green", "red", "yellow", "blue", "orange"];

fn solved(puzzle_size: u16) -> PuzzleState {
    PuzzleState::new(puzzle_size, SCHEME).unwrap()
}

fn after(puzzle_size: u16, notation: &str) -> PuzzleState {
    let mut state = solved(puzzle_size);
    state.apply_notation(notation).unwrap();
    state
}

fn face_colors(state: &PuzzleState, face: Face) -> Vec<&str> {
    state
        .face_stickers(face)
        .into_iter()
        .map(|sticker| sticker.color())
        .collect()
}
