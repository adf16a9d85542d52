//! End-to-end resolution scenarios through the repository-backed resolver.

use chrono::NaiveDate;

use club_rota::db::repositories::LocalRepository;
use club_rota::db::repository::ScheduleRepository;
use club_rota::models::{
    LocationId, LocationRef, MonthOccurrence, RecurringSchedule, ScheduleException, ScheduleId,
    Scope, TeamId, TeamRef, WeekParity,
};
use club_rota::services::{resolver, window_clock};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn schedule(id: i64, weekday: u8, name: &str) -> RecurringSchedule {
    RecurringSchedule {
        id: ScheduleId::new(id),
        weekday,
        week_parity: WeekParity::All,
        month_occurrence: MonthOccurrence::All,
        active: true,
        activation_start: None,
        activation_end: None,
        start_time: Some("19:00".to_string()),
        end_time: Some("22:00".to_string()),
        owner_team: None,
        location: None,
        name: name.to_string(),
        description: None,
    }
}

fn team_ref(id: i64) -> TeamRef {
    TeamRef {
        id: TeamId::new(id),
        name: format!("Team {}", id),
        slug: format!("team-{}", id),
    }
}

async fn seeded_repo(
    schedules: Vec<RecurringSchedule>,
    exceptions: Vec<ScheduleException>,
) -> LocalRepository {
    let repo = LocalRepository::new();
    for s in schedules {
        repo.store_schedule(s).await.unwrap();
    }
    for e in exceptions {
        repo.store_exception(e).await.unwrap();
    }
    repo
}

#[tokio::test]
async fn test_dense_window_length_invariant() {
    let repo = seeded_repo(vec![schedule(1, 5, "Friday night")], vec![]).await;
    let today = date(2026, 1, 6);

    for days in [0u32, 1, 7, 14] {
        let window = resolver::resolve_calendar_window(&repo, Scope::All, today, 0, days)
            .await
            .unwrap();
        assert_eq!(window.len(), days as usize);
    }
}

#[tokio::test]
async fn test_sparse_is_dense_restricted_to_confirmed() {
    let friday = date(2026, 1, 9);
    let repo = seeded_repo(
        vec![schedule(1, 5, "Friday night"), schedule(2, 2, "Tuesday")],
        vec![ScheduleException {
            schedule_id: ScheduleId::new(1),
            excluded_date: friday,
        }],
    )
    .await;
    let today = date(2026, 1, 6);

    let dense = resolver::resolve_calendar_window(&repo, Scope::All, today, 0, 14)
        .await
        .unwrap();
    let sparse = resolver::resolve_upcoming(&repo, Scope::All, today, 14)
        .await
        .unwrap();

    assert!(sparse.iter().all(|o| o.has_schedule() && !o.is_excluded));
    let dense_confirmed: Vec<_> = dense.iter().filter(|o| o.has_schedule()).cloned().collect();
    assert_eq!(sparse, dense_confirmed);
}

#[tokio::test]
async fn test_exclusion_visibility_across_both_modes() {
    // A Friday rule with one cancelled Friday: the dense view shows the
    // cancellation with display fields, the sparse view omits the date.
    let cancelled = date(2026, 1, 9);
    let repo = seeded_repo(
        vec![schedule(1, 5, "Friday night")],
        vec![ScheduleException {
            schedule_id: ScheduleId::new(1),
            excluded_date: cancelled,
        }],
    )
    .await;

    let dense = resolver::resolve_calendar_window(&repo, Scope::All, cancelled, 0, 1)
        .await
        .unwrap();
    let day = &dense[0];
    assert!(!day.has_schedule());
    assert!(day.is_excluded);
    let matched = day.matched.as_ref().unwrap();
    assert_eq!(matched.name, "Friday night");
    assert_eq!(matched.start_time.as_deref(), Some("19:00"));
    assert_eq!(matched.end_time.as_deref(), Some("22:00"));

    let sparse = resolver::resolve_upcoming(&repo, Scope::All, cancelled, 1)
        .await
        .unwrap();
    assert!(sparse.is_empty());
}

#[tokio::test]
async fn test_tie_break_is_deterministic() {
    let friday = date(2026, 1, 9);
    let repo = seeded_repo(
        vec![schedule(30, 5, "B night"), schedule(10, 5, "A night")],
        vec![],
    )
    .await;

    for _ in 0..5 {
        let window = resolver::resolve_calendar_window(&repo, Scope::All, friday, 0, 1)
            .await
            .unwrap();
        assert_eq!(window[0].matched.as_ref().unwrap().id, ScheduleId::new(10));
    }
}

#[tokio::test]
async fn test_week_offset_clamp_and_shift() {
    let today = date(2026, 1, 6); // Tuesday
    assert_eq!(
        window_clock::resolve_start(today, -3),
        window_clock::resolve_start(today, 0)
    );
    assert_eq!(window_clock::resolve_start(today, -3), today);

    // A Tuesday rule seen through a one-week-shifted window lands at day 0.
    let repo = seeded_repo(vec![schedule(1, 2, "Tuesday night")], vec![]).await;
    let window = resolver::resolve_calendar_window(&repo, Scope::All, today, 1, 7)
        .await
        .unwrap();
    assert_eq!(window[0].date, date(2026, 1, 13));
    assert!(window[0].has_schedule());

    // Negative offsets behave exactly like zero through the resolver too.
    let clamped = resolver::resolve_calendar_window(&repo, Scope::All, today, -5, 7)
        .await
        .unwrap();
    let zero = resolver::resolve_calendar_window(&repo, Scope::All, today, 0, 7)
        .await
        .unwrap();
    assert_eq!(clamped, zero);
}

#[tokio::test]
async fn test_personal_dashboard_scenario() {
    // Today is Tuesday; S1 runs tomorrow (Wednesday), S2 runs today but is
    // cancelled today.
    let today = date(2026, 1, 6);
    let s1 = schedule(1, 3, "Wednesday practice");
    let s2 = schedule(2, 2, "Tuesday open night");
    let repo = seeded_repo(
        vec![s1, s2],
        vec![ScheduleException {
            schedule_id: ScheduleId::new(2),
            excluded_date: today,
        }],
    )
    .await;

    let window = resolver::resolve_calendar_window(&repo, Scope::All, today, 0, 7)
        .await
        .unwrap();

    assert!(!window[0].has_schedule());
    assert!(window[0].is_excluded);
    assert_eq!(window[0].matched.as_ref().unwrap().name, "Tuesday open night");

    assert!(window[1].has_schedule());
    assert!(!window[1].is_excluded);
    assert_eq!(window[1].matched.as_ref().unwrap().name, "Wednesday practice");
}

#[tokio::test]
async fn test_public_team_page_scenario() {
    let today = date(2026, 1, 6); // Tuesday
    let mut wednesday = schedule(1, 3, "Wednesday practice");
    wednesday.owner_team = Some(team_ref(7));
    wednesday.activation_end = Some(date(2026, 1, 7));
    let mut tuesday = schedule(2, 2, "Tuesday night");
    tuesday.owner_team = Some(team_ref(7));
    tuesday.activation_end = Some(date(2026, 1, 6));

    let repo = seeded_repo(
        vec![wednesday, tuesday],
        vec![ScheduleException {
            schedule_id: ScheduleId::new(2),
            excluded_date: today,
        }],
    )
    .await;

    let upcoming = resolver::resolve_upcoming(&repo, Scope::Team(TeamId::new(7)), today, 14)
        .await
        .unwrap();

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].date, date(2026, 1, 7));
    assert_eq!(upcoming[0].matched.as_ref().unwrap().name, "Wednesday practice");
}

#[tokio::test]
async fn test_scopes_resolve_independently() {
    let friday = date(2026, 1, 9);
    let mut team_rule = schedule(1, 5, "Team Friday");
    team_rule.owner_team = Some(team_ref(7));
    let mut location_rule = schedule(2, 5, "Hall Friday");
    location_rule.location = Some(LocationRef {
        id: LocationId::new(3),
        name: "North Hall".to_string(),
    });
    let repo = seeded_repo(vec![team_rule, location_rule], vec![]).await;

    let team_window =
        resolver::resolve_calendar_window(&repo, Scope::Team(TeamId::new(7)), friday, 0, 1)
            .await
            .unwrap();
    assert_eq!(team_window[0].matched.as_ref().unwrap().name, "Team Friday");

    let location_window = resolver::resolve_calendar_window(
        &repo,
        Scope::Location(LocationId::new(3)),
        friday,
        0,
        1,
    )
    .await
    .unwrap();
    assert_eq!(
        location_window[0].matched.as_ref().unwrap().name,
        "Hall Friday"
    );

    // An unknown team id resolves to an all-empty window, not an error.
    let empty = resolver::resolve_calendar_window(&repo, Scope::Team(TeamId::new(99)), friday, 0, 7)
        .await
        .unwrap();
    assert_eq!(empty.len(), 7);
    assert!(empty.iter().all(|o| o.matched.is_none()));
}

#[tokio::test]
async fn test_biweekly_and_monthly_rules_through_resolver() {
    // Odd-week Tuesdays plus last-Friday-of-month in one scope.
    let mut biweekly = schedule(1, 2, "Biweekly Tuesday");
    biweekly.week_parity = WeekParity::Odd;
    let mut monthly = schedule(2, 5, "Last Friday social");
    monthly.month_occurrence = MonthOccurrence::Last;
    let repo = seeded_repo(vec![biweekly, monthly], vec![]).await;

    // January 2026: Tuesdays Jan 6 (week 2), Jan 13 (week 3), Jan 20 (week 4),
    // Jan 27 (week 5); last Friday is Jan 30.
    let upcoming = resolver::resolve_upcoming(&repo, Scope::All, date(2026, 1, 1), 31)
        .await
        .unwrap();
    let got: Vec<_> = upcoming
        .iter()
        .map(|o| (o.date, o.matched.as_ref().unwrap().name.clone()))
        .collect();

    assert_eq!(
        got,
        vec![
            (date(2026, 1, 13), "Biweekly Tuesday".to_string()),
            (date(2026, 1, 27), "Biweekly Tuesday".to_string()),
            (date(2026, 1, 30), "Last Friday social".to_string()),
        ]
    );
}
