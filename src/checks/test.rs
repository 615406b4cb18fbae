use super::report::*;
use super::*;

#[test]
fn record_count_matches_fixture() {
    let report = judge_record_count(25);
    assert!(report.passed, "{}", report.detail);
}

#[test]
fn record_count_rejects_other_sizes() {
    let report = judge_record_count(24);
    assert!(!report.passed);
    assert!(report.detail.contains("expected 25"));
    assert!(report.detail.contains("found 24"));
}

#[test]
fn empty_table_fails_count_but_not_sibling_checks() {
    //an empty table observes a count of 0, no duplicate groups and no null rows
    let count = judge_record_count(0);
    assert!(!count.passed);
    assert!(count.detail.contains("found 0"));

    assert!(judge_no_duplicates("no_duplicate_usernames", "username", &[]).passed);
    assert!(judge_no_duplicates("no_duplicate_emails", "email", &[]).passed);
    assert!(judge_non_null(0).passed);
}

#[test]
fn duplicate_groups_are_reported_with_counts() {
    let duplicated = vec![("ShadowFang".to_string(), 2), ("NightOwl".to_string(), 3)];
    let report = judge_no_duplicates("no_duplicate_usernames", "username", &duplicated);
    assert!(!report.passed);
    assert!(report.detail.contains("\"ShadowFang\" (2 rows)"));
    assert!(report.detail.contains("\"NightOwl\" (3 rows)"));
}

#[test]
fn null_rows_fail_the_non_null_check() {
    let report = judge_non_null(3);
    assert!(!report.passed);
    assert!(report.detail.contains("3 rows"));
}

fn shadow_fang(password: &str, email: &str) -> ObservedAccount {
    ObservedAccount {
        username: PROBE_USERNAME.to_string(),
        password: password.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn probe_account_requires_the_row_to_exist() {
    let report = judge_probe_account(&[]);
    assert!(!report.passed);
    assert!(report.detail.contains("ShadowFang"));
}

#[test]
fn probe_account_accepts_the_fixture_row() {
    let report = judge_probe_account(&[shadow_fang("DragonSlayer", "shadowfang@mail.com")]);
    assert!(report.passed, "{}", report.detail);
}

#[test]
fn probe_account_rejects_wrong_password_and_email() {
    let report = judge_probe_account(&[shadow_fang("hunter2", "other@mail.com")]);
    assert!(!report.passed);
    assert!(report.detail.contains("password"));
    assert!(report.detail.contains("email"));
}

#[test]
fn probe_account_rejects_more_than_one_row() {
    let rows = vec![
        shadow_fang("DragonSlayer", "shadowfang@mail.com"),
        shadow_fang("DragonSlayer", "shadowfang@mail.com"),
    ];
    let report = judge_probe_account(&rows);
    assert!(!report.passed);
    assert!(report.detail.contains("found 2"));
}

#[test]
fn judgement_is_idempotent() {
    //identical observations judged twice give identical reports
    assert_eq!(judge_record_count(25), judge_record_count(25));
    assert_eq!(judge_probe_account(&[]), judge_probe_account(&[]));
}

//the tests below need a live game_accounts database seeded with the 25 row
//fixture; set DB_URL, DB_USERNAME and DB_PASSWORD and run `cargo test -- --ignored`
fn connect() -> Checker {
    let config = crate::config::Config::from_env().unwrap();
    Checker::connect(&config).unwrap()
}

#[test]
#[ignore]
fn fixture_passes_every_check() {
    let mut checker = connect();
    let reports = checker.run_all().unwrap();
    assert_eq!(reports.len(), 5);
    for report in &reports {
        assert!(report.passed, "{}: {}", report.name, report.detail);
    }
}

#[test]
#[ignore]
fn rerunning_the_suite_is_idempotent() {
    let mut checker = connect();
    let first = checker.run_all().unwrap();
    let second = checker.run_all().unwrap();
    assert_eq!(first, second);
}
