use puzzle_solver::{
    ParseError, Puzzle, PuzzleId, PuzzleParser, PuzzlePlugin, RegisterablePuzzle, RegistryBuilder,
    Sample, SolveError,
};
use puzzle_solver_macros::AutoRegisterPuzzle;

#[derive(AutoRegisterPuzzle)]
#[puzzle(event = "testevent", year = 2023, day = 6, tags = ["derive-test", "easy"])]
struct SumPuzzle;

impl PuzzleParser for SumPuzzle {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl Puzzle for SumPuzzle {
    const PARTS: u8 = 2;
    const SAMPLES: &'static [Sample] = &[Sample::new(1, "1\n2\n3", "6")];

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.iter().sum::<i64>().to_string()),
            2 => Ok(shared.iter().product::<i64>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[test]
fn test_plugin_submitted_to_inventory() {
    let plugin = puzzle_solver::inventory::iter::<PuzzlePlugin>()
        .find(|p| p.event == "testevent" && p.year == 2023 && p.day == 6)
        .expect("derived plugin should be collected");

    assert_eq!(plugin.tags, &["derive-test", "easy"]);
    assert_eq!(plugin.puzzle.parts(), 2);
    assert_eq!(plugin.puzzle.samples().len(), 1);
}

#[test]
fn test_registry_builds_from_plugins() {
    let registry = RegistryBuilder::new()
        .register_plugins(|p| p.event == "testevent")
        .unwrap()
        .build();

    let id = PuzzleId::new("testevent", 2023, 6);
    assert!(registry.contains(id));

    let mut instance = registry.create(id, "2\n3\n4").unwrap();
    assert_eq!(instance.solve(1).unwrap().answer, "9");
    assert_eq!(instance.solve(2).unwrap().answer, "24");
}

#[test]
fn test_tag_filter_excludes_plugin() {
    let registry = RegistryBuilder::new()
        .register_plugins(|p| p.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();

    assert!(registry.is_empty());
}
