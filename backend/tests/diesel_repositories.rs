//! Integration tests for the Diesel repositories against a migrated SQLite
//! file.

use chrono::{TimeZone, Utc};
use nudilog::domain::ports::{
    DiveEntryRepository, SightingRepository, SightingRepositoryError,
};
use nudilog::domain::{DiveEntryId, NewDiveEntry, NewSighting, PhotoFilename, SightingId};
use rstest::{fixture, rstest};

#[expect(dead_code, reason = "the HTTP and multipart helpers serve the endpoint suites")]
mod support;

use support::TestEnv;

#[fixture]
fn new_dive() -> NewDiveEntry {
    NewDiveEntry {
        dive_date: Utc
            .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
            .single()
            .expect("valid date"),
        location_name: "Blue Hole".to_owned(),
        lat: Some(17.3159),
        lon: Some(-87.5348),
        av_depth_m: Some(18.5),
        av_water_temp_c: None,
        habitat: Some("coral wall".to_owned()),
    }
}

fn new_sighting(dive_entry_id: i64, name: &str) -> NewSighting {
    NewSighting {
        dive_entry_id: DiveEntryId::new(dive_entry_id),
        filename: PhotoFilename::new(name).expect("valid filename"),
        file_path: format!("uploads/{name}"),
    }
}

#[rstest]
#[tokio::test]
async fn created_entry_round_trips_with_sightings(new_dive: NewDiveEntry) {
    let env = TestEnv::new().await;
    let dives = env.dive_entry_repository();
    let sightings = env.sighting_repository();

    let created = dives.create(&new_dive).await.expect("create dive");
    assert_eq!(created.id, DiveEntryId::new(1));
    assert_eq!(created.dive_date, new_dive.dive_date);
    assert!(created.sightings.is_empty());

    for name in ["a.jpg", "b.jpg"] {
        sightings
            .create(&new_sighting(1, name))
            .await
            .expect("create sighting");
    }

    let found = dives
        .find_by_id(created.id)
        .await
        .expect("query")
        .expect("entry exists");
    assert_eq!(found.location_name, "Blue Hole");
    assert_eq!(found.habitat.as_deref(), Some("coral wall"));
    assert_eq!(found.av_water_temp_c, None);
    let names: Vec<&str> = found.sightings.iter().map(|s| s.filename.as_str()).collect();
    assert_eq!(names, vec!["a.jpg", "b.jpg"]);
}

#[rstest]
#[tokio::test]
async fn list_all_groups_sightings_by_entry(new_dive: NewDiveEntry) {
    let env = TestEnv::new().await;
    let dives = env.dive_entry_repository();
    let sightings = env.sighting_repository();

    dives.create(&new_dive).await.expect("first dive");
    let mut second = new_dive.clone();
    second.location_name = "Lembeh Strait".to_owned();
    dives.create(&second).await.expect("second dive");
    sightings
        .create(&new_sighting(2, "frogfish.jpg"))
        .await
        .expect("sighting");

    let all = dives.list_all().await.expect("list");
    let ids: Vec<i64> = all.iter().map(|entry| entry.id.get()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(all[0].sightings.is_empty());
    assert_eq!(all[1].sightings.len(), 1);
    assert_eq!(all[1].sightings[0].dive_entry_id, DiveEntryId::new(2));
}

#[rstest]
#[tokio::test]
async fn exists_and_find_report_absence(new_dive: NewDiveEntry) {
    let env = TestEnv::new().await;
    let dives = env.dive_entry_repository();

    assert!(!dives.exists(DiveEntryId::new(1)).await.expect("exists"));
    dives.create(&new_dive).await.expect("create");
    assert!(dives.exists(DiveEntryId::new(1)).await.expect("exists"));
    assert!(
        dives
            .find_by_id(DiveEntryId::new(2))
            .await
            .expect("query")
            .is_none()
    );
}

#[rstest]
#[tokio::test]
async fn sighting_for_missing_entry_violates_foreign_key() {
    let env = TestEnv::new().await;
    let sightings = env.sighting_repository();

    let err = sightings
        .create(&new_sighting(42, "orphan.jpg"))
        .await
        .expect_err("foreign key enforced");

    assert!(matches!(err, SightingRepositoryError::Query { .. }));
    assert!(
        sightings
            .find_by_id(SightingId::new(1))
            .await
            .expect("query")
            .is_none()
    );
}

#[rstest]
#[tokio::test]
async fn list_for_dive_entry_only_returns_that_entry(new_dive: NewDiveEntry) {
    let env = TestEnv::new().await;
    let dives = env.dive_entry_repository();
    let sightings = env.sighting_repository();
    dives.create(&new_dive).await.expect("first dive");
    dives.create(&new_dive).await.expect("second dive");

    sightings.create(&new_sighting(1, "a.jpg")).await.expect("a");
    sightings.create(&new_sighting(2, "b.jpg")).await.expect("b");
    sightings.create(&new_sighting(1, "c.jpg")).await.expect("c");

    let listed = sightings
        .list_for_dive_entry(DiveEntryId::new(1))
        .await
        .expect("list");
    let ids: Vec<i64> = listed.iter().map(|s| s.id.get()).collect();
    assert_eq!(ids, vec![1, 3]);
}
