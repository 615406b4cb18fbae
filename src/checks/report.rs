/// Expected shape of the fixture dataset loaded into `accounts`.
pub const EXPECTED_ACCOUNT_COUNT: i64 = 25;

/// One well-known fixture row, spot-checked field by field.
pub const PROBE_USERNAME: &str = "ShadowFang";
pub const PROBE_PASSWORD: &str = "DragonSlayer";
pub const PROBE_EMAIL: &str = "shadowfang@mail.com";

/// Outcome of a single check. A failed report never stops sibling checks.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckReport {
    fn pass(name: &'static str, detail: String) -> CheckReport {
        CheckReport {
            name,
            passed: true,
            detail,
        }
    }

    fn fail(name: &'static str, detail: String) -> CheckReport {
        CheckReport {
            name,
            passed: false,
            detail,
        }
    }
}

/// The probe row exactly as read back from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedAccount {
    pub username: String,
    pub password: String,
    pub email: String,
}

pub fn judge_record_count(observed: i64) -> CheckReport {
    if observed == EXPECTED_ACCOUNT_COUNT {
        CheckReport::pass(
            "record_count",
            format!("accounts holds exactly {} rows", observed),
        )
    } else {
        CheckReport::fail(
            "record_count",
            format!(
                "expected {} rows in accounts, found {}",
                EXPECTED_ACCOUNT_COUNT, observed
            ),
        )
    }
}

pub fn judge_no_duplicates(
    name: &'static str,
    column: &str,
    duplicated: &[(String, i64)],
) -> CheckReport {
    if duplicated.is_empty() {
        CheckReport::pass(name, format!("every {} is unique", column))
    } else {
        let listed = duplicated
            .iter()
            .map(|(value, count)| format!("{:?} ({} rows)", value, count))
            .collect::<Vec<String>>()
            .join(", ");
        CheckReport::fail(name, format!("duplicated {} values: {}", column, listed))
    }
}

pub fn judge_non_null(rows_with_nulls: i64) -> CheckReport {
    if rows_with_nulls == 0 {
        CheckReport::pass(
            "non_null_columns",
            "username, password and email are populated on every row".to_string(),
        )
    } else {
        CheckReport::fail(
            "non_null_columns",
            format!(
                "{} rows have a NULL username, password or email",
                rows_with_nulls
            ),
        )
    }
}

pub fn judge_probe_account(matches: &[ObservedAccount]) -> CheckReport {
    let name = "probe_account";
    match matches {
        [] => CheckReport::fail(name, format!("no account named {:?}", PROBE_USERNAME)),
        [observed] => {
            let mut wrong = Vec::new();
            if observed.username != PROBE_USERNAME {
                wrong.push(format!(
                    "username {:?} (expected {:?})",
                    observed.username, PROBE_USERNAME
                ));
            }
            if observed.password != PROBE_PASSWORD {
                wrong.push(format!(
                    "password {:?} (expected {:?})",
                    observed.password, PROBE_PASSWORD
                ));
            }
            if observed.email != PROBE_EMAIL {
                wrong.push(format!(
                    "email {:?} (expected {:?})",
                    observed.email, PROBE_EMAIL
                ));
            }
            if wrong.is_empty() {
                CheckReport::pass(
                    name,
                    format!("{:?} holds the expected password and email", PROBE_USERNAME),
                )
            } else {
                CheckReport::fail(
                    name,
                    format!("{:?} has wrong {}", PROBE_USERNAME, wrong.join(" and ")),
                )
            }
        }
        many => CheckReport::fail(
            name,
            format!(
                "expected exactly one {:?} row, found {}",
                PROBE_USERNAME,
                many.len()
            ),
        ),
    }
}
