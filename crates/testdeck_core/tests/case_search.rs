use testdeck_core::db::open_db_in_memory;
use testdeck_core::{
    CaseListQuery, CaseService, NewCase, NewSuite, SqliteCaseRepository, SqliteSuiteRepository,
    SuiteRepository,
};

fn query(text: &str) -> CaseListQuery {
    CaseListQuery {
        suite_id: None,
        text: Some(text.to_string()),
    }
}

#[test]
fn text_filter_matches_name_or_description_case_insensitively() {
    let conn = open_db_in_memory().unwrap();
    let suite = SqliteSuiteRepository::new(&conn)
        .insert_suite(&NewSuite::new("Auth"))
        .unwrap();
    let service = CaseService::new(SqliteCaseRepository::new(&conn));

    let by_name = service
        .add_case_to_suite(suite.id, &NewCase::new("Valid LOGIN"))
        .unwrap();
    let by_description = service
        .add_case_to_suite(
            suite.id,
            &NewCase {
                name: "lockout".to_string(),
                description: Some("five failed login attempts".to_string()),
                ..NewCase::default()
            },
        )
        .unwrap();
    let unrelated = service
        .add_case_to_suite(suite.id, &NewCase::new("password reset"))
        .unwrap();

    let hits = service.list_cases(&query("login")).unwrap();
    let ids: Vec<_> = hits.iter().map(|case| case.id).collect();
    assert_eq!(ids, vec![by_name.id, by_description.id]);
    assert!(!ids.contains(&unrelated.id));
}

#[test]
fn suite_filter_restricts_to_one_suite() {
    let conn = open_db_in_memory().unwrap();
    let suites = SqliteSuiteRepository::new(&conn);
    let first = suites.insert_suite(&NewSuite::new("First")).unwrap();
    let second = suites.insert_suite(&NewSuite::new("Second")).unwrap();
    let service = CaseService::new(SqliteCaseRepository::new(&conn));

    service.add_case_to_suite(first.id, &NewCase::new("one")).unwrap();
    let kept = service.add_case_to_suite(second.id, &NewCase::new("two")).unwrap();

    let hits = service
        .list_cases(&CaseListQuery {
            suite_id: Some(second.id),
            text: None,
        })
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, kept.id);
}

#[test]
fn suite_and_text_filters_combine() {
    let conn = open_db_in_memory().unwrap();
    let suites = SqliteSuiteRepository::new(&conn);
    let first = suites.insert_suite(&NewSuite::new("First")).unwrap();
    let second = suites.insert_suite(&NewSuite::new("Second")).unwrap();
    let service = CaseService::new(SqliteCaseRepository::new(&conn));

    service
        .add_case_to_suite(first.id, &NewCase::new("login from first"))
        .unwrap();
    let hit = service
        .add_case_to_suite(second.id, &NewCase::new("login from second"))
        .unwrap();
    service
        .add_case_to_suite(second.id, &NewCase::new("unrelated"))
        .unwrap();

    let hits = service
        .list_cases(&CaseListQuery {
            suite_id: Some(second.id),
            text: Some("login".to_string()),
        })
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, hit.id);
}

#[test]
fn like_metacharacters_match_literally() {
    let conn = open_db_in_memory().unwrap();
    let suite = SqliteSuiteRepository::new(&conn)
        .insert_suite(&NewSuite::new("Quota"))
        .unwrap();
    let service = CaseService::new(SqliteCaseRepository::new(&conn));

    let exact = service
        .add_case_to_suite(suite.id, &NewCase::new("fill disk to 100%"))
        .unwrap();
    service
        .add_case_to_suite(suite.id, &NewCase::new("fill disk to 1000 files"))
        .unwrap();

    let hits = service.list_cases(&query("100%")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, exact.id);

    let underscore = service
        .add_case_to_suite(suite.id, &NewCase::new("check quota_limit flag"))
        .unwrap();
    let hits = service.list_cases(&query("quota_limit")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, underscore.id);
}

#[test]
fn blank_text_filter_returns_everything_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    let suite = SqliteSuiteRepository::new(&conn)
        .insert_suite(&NewSuite::new("All"))
        .unwrap();
    let service = CaseService::new(SqliteCaseRepository::new(&conn));

    let first = service.add_case_to_suite(suite.id, &NewCase::new("b")).unwrap();
    let second = service.add_case_to_suite(suite.id, &NewCase::new("a")).unwrap();

    let hits = service.list_cases(&query("   ")).unwrap();
    let ids: Vec<_> = hits.iter().map(|case| case.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn null_descriptions_do_not_match() {
    let conn = open_db_in_memory().unwrap();
    let suite = SqliteSuiteRepository::new(&conn)
        .insert_suite(&NewSuite::new("Auth"))
        .unwrap();
    let service = CaseService::new(SqliteCaseRepository::new(&conn));

    service
        .add_case_to_suite(suite.id, &NewCase::new("no description here"))
        .unwrap();

    let hits = service.list_cases(&query("login")).unwrap();
    assert!(hits.is_empty());
}
