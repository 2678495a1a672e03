use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, DynSolver, Expectations, InputVariant, ParseError, PartSolver,
    SolveError, SolverPlugin, SolverRegistryBuilder, Verdict,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 24, tags = ["test", "lists"], expect = [18, "210"], example = ["6"])]
struct Registered;

impl AocParser for Registered {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for Registered {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for Registered {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 25)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

fn plugin(year: u16, day: u8) -> &'static SolverPlugin {
    aoc_solver::inventory::iter::<SolverPlugin>()
        .find(|p| p.year == year && p.day == day)
        .expect("plugin submitted")
}

#[test]
fn test_plugin_metadata() {
    let registered = plugin(2016, 24);
    assert_eq!(registered.tags, &["test", "lists"]);
    assert_eq!(registered.solver.parts(), 2);
    assert_eq!(
        registered.expected,
        Expectations {
            full: &["18", "210"],
            example: &["6"],
        }
    );

    let untagged = plugin(2016, 25);
    assert!(untagged.tags.is_empty());
    assert_eq!(untagged.expected, Expectations::NONE);
    assert_eq!(untagged.solver.parts(), 1);
}

#[test]
fn test_registered_solver_runs_and_verifies() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"test"))
        .expect("register plugins")
        .build();

    assert!(registry.storage().contains(2016, 24));
    assert!(!registry.storage().contains(2016, 25));

    let mut solver = registry.create_solver(2016, 24, "5\n6\n7").unwrap();
    let (part1, verdict1) = solver.check(1, InputVariant::Full).unwrap();
    assert_eq!(part1.answer, "18");
    assert_eq!(verdict1, Verdict::Verified);

    let (part2, verdict2) = solver.check(2, InputVariant::Full).unwrap();
    assert_eq!(part2.answer, "210");
    assert_eq!(verdict2, Verdict::Verified);

    let mut example = registry.create_solver(2016, 24, "1\n2\n3").unwrap();
    assert_eq!(example.check(1, InputVariant::Example).unwrap().1, Verdict::Verified);
    assert_eq!(example.check(2, InputVariant::Example).unwrap().1, Verdict::Unverified);
}

#[test]
fn test_register_all_includes_every_plugin() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let days: Vec<_> = registry
        .storage()
        .iter_info()
        .map(|info| (info.year, info.day, info.parts))
        .collect();
    assert_eq!(days, vec![(2016, 24, 2), (2016, 25, 1)]);
}
