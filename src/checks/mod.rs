#[cfg(test)]
#[path = "./test.rs"]
mod test;
pub mod report;

use crate::config::Config;
use derive_more::{Display, From};
use postgres::{Client, NoTls};
use report::{
    judge_no_duplicates, judge_non_null, judge_probe_account, judge_record_count, CheckReport,
    ObservedAccount, PROBE_USERNAME,
};
use tracing::debug;

/// Failures that abort the whole suite: the configuration could not be
/// loaded, or the database could not be reached.
#[derive(Debug, Display, From)]
pub enum SetupError {
    #[display(fmt = "configuration error: {}", _0)]
    Config(config::ConfigError),
    #[display(fmt = "database error: {}", _0)]
    Db(postgres::Error),
}

/// Owns the one connection shared read-only by every check. The connection
/// is opened once by [`Checker::connect`] and closed when the checker drops,
/// whatever the individual check outcomes were.
pub struct Checker {
    client: Client,
}

impl Checker {
    pub fn connect(config: &Config) -> Result<Checker, postgres::Error> {
        let mut pg_config: postgres::Config = config.url.parse()?;
        pg_config.user(&config.username).password(&config.password);
        let client = pg_config.connect(NoTls)?;
        Ok(Checker { client })
    }

    /// Runs every check in a fixed order. A failed assertion only marks its
    /// own report; a query error aborts the run.
    pub fn run_all(&mut self) -> Result<Vec<CheckReport>, postgres::Error> {
        Ok(vec![
            self.record_count()?,
            self.no_duplicate_usernames()?,
            self.no_duplicate_emails()?,
            self.non_null_columns()?,
            self.probe_account()?,
        ])
    }

    pub fn record_count(&mut self) -> Result<CheckReport, postgres::Error> {
        let row = self.client.query_one("SELECT COUNT(*) FROM accounts", &[])?;
        Ok(judge_record_count(row.get(0)))
    }

    pub fn no_duplicate_usernames(&mut self) -> Result<CheckReport, postgres::Error> {
        let duplicated = self.duplicated_values("username")?;
        Ok(judge_no_duplicates(
            "no_duplicate_usernames",
            "username",
            &duplicated,
        ))
    }

    pub fn no_duplicate_emails(&mut self) -> Result<CheckReport, postgres::Error> {
        let duplicated = self.duplicated_values("email")?;
        Ok(judge_no_duplicates(
            "no_duplicate_emails",
            "email",
            &duplicated,
        ))
    }

    pub fn non_null_columns(&mut self) -> Result<CheckReport, postgres::Error> {
        let row = self.client.query_one(
            "SELECT COUNT(*) FROM accounts
             WHERE username IS NULL OR password IS NULL OR email IS NULL",
            &[],
        )?;
        Ok(judge_non_null(row.get(0)))
    }

    pub fn probe_account(&mut self) -> Result<CheckReport, postgres::Error> {
        let rows = self.client.query(
            "SELECT username, password, email FROM accounts WHERE username = $1",
            &[&PROBE_USERNAME],
        )?;
        let matches: Vec<ObservedAccount> = rows
            .iter()
            .map(|row| ObservedAccount {
                username: row.get("username"),
                password: row.get("password"),
                email: row.get("email"),
            })
            .collect();
        Ok(judge_probe_account(&matches))
    }

    //column is always one of our own identifiers, never outside input
    fn duplicated_values(&mut self, column: &str) -> Result<Vec<(String, i64)>, postgres::Error> {
        let sql = format!(
            "SELECT {col}, COUNT(*) FROM accounts GROUP BY {col} HAVING COUNT(*) > 1",
            col = column
        );
        let rows = self.client.query(&*sql, &[])?;
        Ok(rows.iter().map(|row| (row.get(0), row.get(1))).collect())
    }
}

impl Drop for Checker {
    fn drop(&mut self) {
        debug!("database connection closed");
    }
}
