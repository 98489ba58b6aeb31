use std::path::PathBuf;

use cubeviz_core::{Cycle, Face, Geometry, Move, PuzzleState, compile_move, orbit_inventory};
use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;

use crate::settings::Settings;

/// Notation parser and sticker simulator for NxNxN cubes
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Settings file to load on top of the built-in settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Parse notation and print each move.
    Parse {
        /// Number of layers along each axis.
        size: u16,
        /// Whitespace-separated moves (such as `R U2 3Fw'`).
        #[arg(required = true)]
        notation: Vec<String>,

        /// Also print the cycles that each move compiles to.
        #[arg(short, long)]
        cycles: bool,
    },
    /// Apply notation to a solved cube and print the stickers on each face.
    State {
        /// Number of layers along each axis.
        size: u16,
        /// Whitespace-separated moves (such as `R U2 3Fw'`).
        notation: Vec<String>,

        /// Color scheme to use.
        #[arg(short, long)]
        scheme: Option<String>,
    },
    /// Print the available color schemes.
    Schemes,
}

#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct MoveOutput {
    token: String,
    face: String,
    slice_begin: u16,
    slice_end: u16,
    layer_count: u16,
    turn_count: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    cycles: Option<Vec<CycleOutput>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct CycleOutput {
    orbit: String,
    indices: Vec<u16>,
}
impl From<&Cycle> for CycleOutput {
    fn from(cycle: &Cycle) -> Self {
        Self {
            orbit: cycle.kind.to_string(),
            indices: cycle.indices.to_vec(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct StateOutput {
    size: u16,
    solved: bool,
    /// Rows of sticker colors for each face.
    faces: IndexMap<String, Vec<Vec<String>>>,
}
impl From<&PuzzleState> for StateOutput {
    fn from(state: &PuzzleState) -> Self {
        let n = usize::from(state.puzzle_size()).max(1);
        let faces = Face::ALL
            .into_iter()
            .map(|face| {
                let rows: Vec<Vec<String>> = state
                    .face_stickers(face)
                    .chunks(n)
                    .map(|row| row.iter().map(|s| s.color().to_owned()).collect())
                    .collect();
                (face.to_string(), rows)
            })
            .collect();
        Self {
            size: state.puzzle_size(),
            solved: state.is_solved(),
            faces,
        }
    }
}

pub(crate) fn exec(
    subcommand: Subcommand,
    settings: &Settings,
    format: OutputFormat,
) -> Result<()> {
    match subcommand {
        Subcommand::Parse {
            size,
            notation,
            cycles,
        } => {
            let output = parse_moves(size, &notation.join(" "), cycles)?;
            write_output(&output, format)
        }

        Subcommand::State {
            size,
            notation,
            scheme,
        } => {
            let colors = settings.scheme(scheme.as_deref())?;
            let mut state = PuzzleState::new(size, colors.iter().map(String::as_str))?;
            state.apply_notation(&notation.join(" "))?;
            write_output(&StateOutput::from(&state), format)
        }

        Subcommand::Schemes => write_output(&settings.schemes, format),
    }
}

fn parse_moves(size: u16, notation: &str, with_cycles: bool) -> Result<Vec<MoveOutput>> {
    let geometry = Geometry::new(size);
    let inventory = orbit_inventory(size);

    notation
        .split_whitespace()
        .map(|token| -> Result<MoveOutput> {
            let mv: Move = cubeviz_notation::parse_move(token, size)?;
            let cycles = match with_cycles {
                true => {
                    let cycles = compile_move(&mv, &geometry, &inventory)?;
                    Some(cycles.iter().map(CycleOutput::from).collect())
                }
                false => None,
            };
            Ok(MoveOutput {
                token: token.to_owned(),
                face: mv.face.to_string(),
                slice_begin: mv.slice_begin,
                slice_end: mv.slice_end,
                layer_count: mv.layer_count(),
                turn_count: mv.turn_count,
                cycles,
            })
        })
        .collect()
}

fn write_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), value)
                .context("error serializing data and writing to stdout")?;
            println!();
        }
        OutputFormat::Yaml => {
            serde_norway::to_writer(std::io::stdout(), value)
                .context("error serializing data and writing to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_moves() {
        let output = parse_moves(4, "R 3R'", false).unwrap();
        assert_eq!(2, output.len());
        assert_eq!(("R".to_owned(), 1, 1, 1), {
            let m = &output[0];
            (m.face.clone(), m.slice_begin, m.slice_end, m.turn_count)
        });
        assert_eq!(("L".to_owned(), 2, 2, 1), {
            let m = &output[1];
            (m.face.clone(), m.slice_begin, m.slice_end, m.turn_count)
        });
        assert_eq!(1, output[1].layer_count);
        assert_eq!(None, output[0].cycles);

        let output = parse_moves(6, "2-3Rw", false).unwrap();
        assert_eq!(2, output[0].layer_count);

        let output = parse_moves(2, "U", true).unwrap();
        let cycles = output[0].cycles.as_ref().unwrap();
        assert_eq!(3, cycles.len());
        assert!(cycles.iter().all(|c| c.orbit == "corner" && c.indices.len() == 4));

        assert!(parse_moves(2, "U 2R", false).is_err());
    }

    #[test]
    fn test_state_output() {
        let mut state = PuzzleState::new(2, ["W", "G", "R", "Y", "B", "O"]).unwrap();
        state.apply_notation("R").unwrap();
        let output = StateOutput::from(&state);

        assert_eq!(2, output.size);
        assert!(!output.solved);
        let faces: Vec<&str> = output.faces.keys().map(String::as_str).collect();
        assert_eq!(vec!["U", "F", "R", "D", "B", "L"], faces);
        assert_eq!(
            vec![vec!["W", "G"], vec!["W", "G"]],
            output.faces["U"],
        );
        assert_eq!(
            vec![vec!["R", "R"], vec!["R", "R"]],
            output.faces["R"],
        );
    }
}
