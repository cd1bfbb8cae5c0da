use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_cases};
/// Fixture runner
///
/// Runs the JSON query string cases against `QueryParams`
use qsparams::QueryParams;

fn check(result: &mut FixtureResult, input: &str, field: &str, expected: &str, actual: &str) {
    if expected == actual {
        result.passed += 1;
    } else {
        result.failed += 1;
        result.failures.push(FixtureFailure {
            input: input.to_string(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
}

pub fn run_cases(cases: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();

    for case in cases {
        let TestCase::QueryTest {
            input,
            output,
            entries,
            sorted,
        } = case
        else {
            continue;
        };

        let params = QueryParams::parse(&input);
        check(&mut result, &input, "output", &output, &params.to_string());

        // Re-parsing the output must give back the same pairs
        let reparsed = QueryParams::parse(&params.to_string());
        check(
            &mut result,
            &input,
            "round trip",
            &format!("{:?}", params.iter().collect::<Vec<_>>()),
            &format!("{:?}", reparsed.iter().collect::<Vec<_>>()),
        );

        if let Some(entries) = &entries {
            let actual: Vec<(String, String)> = params
                .entries()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            check(
                &mut result,
                &input,
                "entries",
                &format!("{entries:?}"),
                &format!("{actual:?}"),
            );
        }

        if let Some(sorted) = &sorted {
            let mut params = params.clone();
            check(&mut result, &input, "sorted", sorted, &params.sort().to_string());
        }
    }

    result
}

#[test]
fn test_fixture_cases() {
    let result = run_cases(load_cases());
    for failure in &result.failures {
        eprintln!(
            "{:?} [{}]: expected {:?}, got {:?}",
            failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert!(result.failures.is_empty(), "{}", result.summary());
    assert!(result.passed > 0);
}
