//! Defines the `Dialect` trait for database-specific SQL syntax.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;

    /// Full-match regular expression test of `column` against `pattern`.
    fn regex_match(&self, column: &str, pattern: &str) -> String;

    /// Distance-buffer test in meters between `column` and the geometry
    /// expression `geometry`.
    fn distance_within(&self, column: &str, geometry: &str, meters: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }

    fn regex_match(&self, column: &str, pattern: &str) -> String {
        format!("{column} ~ {pattern}")
    }

    fn distance_within(&self, column: &str, geometry: &str, meters: &str) -> String {
        format!("ST_DWithin({column}::geography, {geometry}::geography, {meters})")
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#"`{ident}`"#)
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn name(&self) -> String {
        "MySQL".into()
    }

    fn regex_match(&self, column: &str, pattern: &str) -> String {
        format!("{column} REGEXP {pattern}")
    }

    fn distance_within(&self, column: &str, geometry: &str, meters: &str) -> String {
        format!("ST_Distance_Sphere({column}, {geometry}) <= {meters}")
    }
}
