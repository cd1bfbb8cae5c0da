/// Fixture loader
///
/// Loads query string cases from `query_cases.json`. Bare strings in the file
/// are comments.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A parse/serialize case
    QueryTest {
        input: String,
        output: String,
        #[serde(default)]
        entries: Option<Vec<(String, String)>>,
        #[serde(default)]
        sorted: Option<String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("query_cases.json")).expect("valid fixture JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let queries = cases
            .iter()
            .filter(|case| matches!(case, TestCase::QueryTest { .. }))
            .count();
        assert_eq!(queries, 13);
    }
}
