use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct Readings {
    numbers: Vec<i32>,
    sum: Option<i32>,
    count: Option<usize>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Average;

impl AocParser for Average {
    type SharedData<'a> = Readings;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat(format!("expected integer, got {line:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Readings {
            numbers,
            sum: None,
            count: None,
        })
    }
}

impl PartSolver<1> for Average {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i32 = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        shared.count = Some(shared.numbers.len());
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Average {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.sum.unwrap_or_else(|| shared.numbers.iter().sum());
        let count = shared.count.unwrap_or(shared.numbers.len());
        if count == 0 {
            return Err(SolveError::NoSolution("no readings".to_string()));
        }
        Ok(format!("{:.2}", sum as f64 / count as f64))
    }
}

#[test]
fn test_parse_reports_bad_line() {
    let err = Average::parse("10\nten").unwrap_err();
    assert!(err.to_string().contains("\"ten\""));
}

#[test]
fn test_part1_stores_data() {
    let mut shared = Average::parse("10\n20\n30").unwrap();

    assert_eq!(Average::solve_part(&mut shared, 1).unwrap(), "60");
    assert_eq!(shared.sum, Some(60));
    assert_eq!(shared.count, Some(3));
}

#[test]
fn test_part2_uses_part1_data() {
    let mut shared = Average::parse("10\n20\n30").unwrap();
    Average::solve_part(&mut shared, 1).unwrap();

    // A stale cache wins over the numbers, proving part 2 read it
    shared.sum = Some(90);
    assert_eq!(Average::solve_part(&mut shared, 2).unwrap(), "30.00");
}

#[test]
fn test_part2_solves_independently() {
    let mut shared = Average::parse("10\n20\n30").unwrap();
    assert_eq!(Average::solve_part(&mut shared, 2).unwrap(), "20.00");
}
