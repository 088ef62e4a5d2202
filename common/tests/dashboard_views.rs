use integrity_common::dashboard::{
    arrange, my_awards, office_awards, records_created_by, status_counts, SortKey, StatusFilter,
};
use integrity_common::fixtures;
use integrity_common::model::award::AwardStatus;

#[test]
fn my_awards_are_assigned_and_reportable() {
    let awards = fixtures::awards();
    let mine = my_awards(&awards, "John Smith");
    assert_eq!(mine.len(), 4);
    assert!(mine.iter().all(|a| a.assigned_to == "John Smith"));
    assert!(mine.iter().all(|a| a.needs_integrity_report));
}

#[test]
fn office_awards_drop_non_reportable_contracts() {
    let awards = fixtures::awards();
    let office = office_awards(&awards);
    assert_eq!(office.len(), 4);
    assert!(office.iter().all(|a| a.needs_integrity_report));
    assert!(!office.iter().any(|a| a.award_number == "GS-35F-0119Y"));
}

#[test]
fn active_filter_yields_exactly_the_active_awards() {
    // The seed set holds three active and two terminated awards.
    let awards = fixtures::awards();
    let counts = status_counts(&awards);
    assert_eq!((counts.all, counts.active, counts.terminated), (5, 3, 2));

    let shown = arrange(&awards, StatusFilter::Active, SortKey::DateLatest);
    assert_eq!(shown.len(), 3);
    assert!(shown.iter().all(|a| a.status == AwardStatus::Active));
    // Order is determined solely by the sort key: latest period start first.
    let starts: Vec<_> = shown.iter().map(|a| a.pop_start.as_str()).collect();
    assert_eq!(starts, vec!["2023-09-01", "2023-03-01", "2023-01-01"]);
}

#[test]
fn terminated_filter_yields_exactly_the_terminated_awards() {
    let awards = fixtures::awards();
    let shown = arrange(&awards, StatusFilter::Terminated, SortKey::DateOldest);
    assert_eq!(shown.len(), 2);
    assert!(shown.iter().all(|a| a.status == AwardStatus::Terminated));
    let starts: Vec<_> = shown.iter().map(|a| a.pop_start.as_str()).collect();
    assert_eq!(starts, vec!["2022-01-01", "2022-06-01"]);
}

#[test]
fn title_sorts_are_lexicographic_and_mirrored() {
    let mut awards = fixtures::awards();
    awards.truncate(3);
    awards[0].title = "Zeta".to_string();
    awards[1].title = "Alpha".to_string();
    awards[2].title = "Mid".to_string();

    let az = arrange(&awards, StatusFilter::All, SortKey::TitleAz);
    let az_titles: Vec<_> = az.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(az_titles, vec!["Alpha", "Mid", "Zeta"]);

    let za = arrange(&awards, StatusFilter::All, SortKey::TitleZa);
    let za_titles: Vec<_> = za.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(za_titles, vec!["Zeta", "Mid", "Alpha"]);
}

#[test]
fn sort_keys_round_trip_their_dropdown_tags() {
    for key in [SortKey::DateLatest, SortKey::DateOldest, SortKey::TitleAz, SortKey::TitleZa] {
        assert_eq!(SortKey::parse(key.as_str()), Some(key));
    }
    assert_eq!(SortKey::parse("value-desc"), None);
}

#[test]
fn records_table_shows_only_the_users_records() {
    let records = fixtures::records();
    let mine = records_created_by(&records, "John Smith");
    assert_eq!(mine.len(), records.len());
    assert!(records_created_by(&records, "Sarah Johnson").is_empty());
}
