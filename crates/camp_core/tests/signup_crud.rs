use camp_core::db::open_db_in_memory;
use camp_core::{
    ActivityRepository, CamperRepository, NewActivity, NewCamper, NewSignup, RepoError,
    SignupRepository, SignupService, SqliteActivityRepository, SqliteCamperRepository,
    SqliteSignupRepository, ValidationError,
};
use rusqlite::Connection;

fn seed_pair(conn: &Connection) -> (i64, i64) {
    let camper = SqliteCamperRepository::try_new(conn)
        .unwrap()
        .create_camper(&NewCamper::new("Lizzie", 9))
        .unwrap();
    let activity = SqliteActivityRepository::try_new(conn)
        .unwrap()
        .create_activity(&NewActivity::new("Archery", 2))
        .unwrap();
    (camper.id, activity.id)
}

#[test]
fn valid_hours_are_stored_and_retrievable() {
    let conn = open_db_in_memory().unwrap();
    let (camper_id, activity_id) = seed_pair(&conn);
    let repo = SqliteSignupRepository::try_new(&conn).unwrap();

    for time in [0, 12, 23] {
        let created = repo
            .create_signup(&NewSignup::new(camper_id, activity_id, time))
            .unwrap();
        let loaded = repo.get_signup(created.id).unwrap().unwrap();
        assert_eq!(loaded.camper_id, camper_id);
        assert_eq!(loaded.activity_id, activity_id);
        assert_eq!(loaded.time, time);
    }
}

#[test]
fn out_of_range_hours_are_rejected_and_not_persisted() {
    let conn = open_db_in_memory().unwrap();
    let (camper_id, activity_id) = seed_pair(&conn);
    let repo = SqliteSignupRepository::try_new(&conn).unwrap();

    for time in [-1, 24, 99] {
        let err = repo
            .create_signup(&NewSignup::new(camper_id, activity_id, time))
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::SignupTimeOutOfRange)
        ));
    }
    assert!(repo.list_signups().unwrap().is_empty());
}

#[test]
fn duplicate_and_overlapping_signups_are_allowed() {
    let conn = open_db_in_memory().unwrap();
    let (camper_id, activity_id) = seed_pair(&conn);
    let repo = SqliteSignupRepository::try_new(&conn).unwrap();

    let first = repo
        .create_signup(&NewSignup::new(camper_id, activity_id, 10))
        .unwrap();
    let second = repo
        .create_signup(&NewSignup::new(camper_id, activity_id, 10))
        .unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(repo.list_signups().unwrap().len(), 2);
}

#[test]
fn dangling_references_fail_with_integrity_error() {
    let conn = open_db_in_memory().unwrap();
    let (camper_id, activity_id) = seed_pair(&conn);
    let repo = SqliteSignupRepository::try_new(&conn).unwrap();

    let err = repo
        .create_signup(&NewSignup::new(camper_id + 100, activity_id, 10))
        .unwrap_err();
    assert!(matches!(err, RepoError::Integrity(_)));

    let err = repo
        .create_signup(&NewSignup::new(camper_id, activity_id + 100, 10))
        .unwrap_err();
    assert!(matches!(err, RepoError::Integrity(_)));

    assert!(repo.list_signups().unwrap().is_empty());
}

#[test]
fn service_returns_signup_with_both_ends_embedded() {
    let conn = open_db_in_memory().unwrap();
    let (camper_id, activity_id) = seed_pair(&conn);
    let service = SignupService::new(SqliteSignupRepository::try_new(&conn).unwrap());

    let detail = service
        .create_signup(&NewSignup::new(camper_id, activity_id, 14))
        .unwrap();
    assert_eq!(detail.signup.time, 14);
    assert_eq!(detail.camper.id, camper_id);
    assert_eq!(detail.camper.name, "Lizzie");
    assert_eq!(detail.activity.id, activity_id);
    assert_eq!(detail.activity.name, "Archery");

    let reloaded = service.get_signup_detail(detail.signup.id).unwrap().unwrap();
    assert_eq!(reloaded, detail);
}
