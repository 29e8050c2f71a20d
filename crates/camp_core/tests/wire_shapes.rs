use camp_core::db::open_db_in_memory;
use camp_core::{
    ActivityRepository, CamperRepository, NewActivity, NewCamper, NewSignup, SignupService,
    SqliteActivityRepository, SqliteCamperRepository, SqliteSignupRepository,
};
use serde_json::json;

#[test]
fn nested_views_never_embed_the_owner_again() {
    let conn = open_db_in_memory().unwrap();
    let camper = SqliteCamperRepository::try_new(&conn)
        .unwrap()
        .create_camper(&NewCamper::new("Caitlin", 8))
        .unwrap();
    let activity = SqliteActivityRepository::try_new(&conn)
        .unwrap()
        .create_activity(&NewActivity::new("Archery", 2))
        .unwrap();
    let signup = SignupService::new(SqliteSignupRepository::try_new(&conn).unwrap())
        .create_signup(&NewSignup::new(camper.id, activity.id, 9))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&signup).unwrap(),
        json!({
            "id": signup.signup.id,
            "time": 9,
            "camper_id": camper.id,
            "activity_id": activity.id,
            "camper": {"id": camper.id, "name": "Caitlin", "age": 8},
            "activity": {"id": activity.id, "name": "Archery", "difficulty": 2},
        })
    );

    let camper_detail = SqliteCamperRepository::try_new(&conn)
        .unwrap()
        .get_camper_detail(camper.id)
        .unwrap()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&camper_detail).unwrap(),
        json!({
            "id": camper.id,
            "name": "Caitlin",
            "age": 8,
            "signups": [{
                "id": signup.signup.id,
                "time": 9,
                "camper_id": camper.id,
                "activity_id": activity.id,
                "activity": {"id": activity.id, "name": "Archery", "difficulty": 2},
            }],
        })
    );

    let activity_detail = SqliteActivityRepository::try_new(&conn)
        .unwrap()
        .get_activity_detail(activity.id)
        .unwrap()
        .unwrap();
    let value = serde_json::to_value(&activity_detail).unwrap();
    assert_eq!(value["signups"][0]["camper"]["name"], "Caitlin");
    assert!(value["signups"][0].get("activity").is_none());
    assert!(value["signups"][0]["camper"].get("signups").is_none());
}
