use camp_core::db::open_db_in_memory;
use camp_core::{
    seed_sample_data, ActivityRepository, CamperRepository, SignupRepository,
    SqliteActivityRepository, SqliteCamperRepository, SqliteSignupRepository,
};

#[test]
fn seeding_replaces_existing_records() {
    let mut conn = open_db_in_memory().unwrap();

    let first = seed_sample_data(&mut conn).unwrap();
    let second = seed_sample_data(&mut conn).unwrap();
    assert_eq!(first, second);

    let campers = SqliteCamperRepository::try_new(&conn)
        .unwrap()
        .list_campers()
        .unwrap();
    let activities = SqliteActivityRepository::try_new(&conn)
        .unwrap()
        .list_activities()
        .unwrap();
    let signups = SqliteSignupRepository::try_new(&conn)
        .unwrap()
        .list_signups()
        .unwrap();

    assert_eq!(campers.len(), second.campers);
    assert_eq!(activities.len(), second.activities);
    assert_eq!(signups.len(), second.signups);
    assert_eq!(campers[0].id, 1);
    assert!(campers.iter().all(|camper| (8..=18).contains(&camper.age)));
    assert!(signups.iter().all(|signup| (0..=23).contains(&signup.time)));
}
