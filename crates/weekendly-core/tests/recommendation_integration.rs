//! Integration tests for preference-derived recommendations.

use weekendly_core::{
    Catalog, Category, Day, NoWeather, PlannerConfig, PreferenceProfile, WeatherByDay,
    WeatherCode, WeekendPlanner,
};

fn planner() -> WeekendPlanner {
    WeekendPlanner::new(Catalog::builtin(), PlannerConfig::default())
}

#[test]
fn empty_schedule_scores_come_from_duration_and_weather_alone() {
    let planner = planner();
    let recs = planner.recommend(&NoWeather);

    assert_eq!(recs.len(), 5);
    // No histogram data and no weather: the only possible contribution
    // is the duration bonus against the 120-minute default, so no score
    // can exceed 2.
    assert!(recs.iter().all(|r| r.score <= 2));
}

#[test]
fn recommendations_skip_everything_already_scheduled() {
    let mut planner = planner();
    planner.apply_theme("creative_soul").unwrap();

    let recs = planner.recommend(&NoWeather);
    for rec in &recs {
        assert!(planner.plan().day_of(&rec.activity.id).is_none());
    }
}

#[test]
fn bucketed_activities_still_count_as_candidates() {
    let mut planner = planner();
    let yoga = planner.catalog().activity("sunrise-yoga").unwrap().clone();
    planner.add_to_bucket(yoga, None).unwrap();

    // Only *scheduled* activities are excluded; a bucketed one can still
    // be recommended for placement.
    let recs = planner.recommend(&NoWeather);
    assert_eq!(recs.len(), 5);
}

#[test]
fn profile_reflects_what_is_placed() {
    let mut planner = planner();
    planner.apply_theme("mindful_escape").unwrap();

    let profile = PreferenceProfile::from_plan(planner.plan());
    // mindful_escape: retreat 120 + spa 300 + picnic 180 + literary 180.
    assert_eq!(profile.avg_duration(), 195.0);
    assert_eq!(profile.category_count(Category::Indoor), 3);
    assert_eq!(profile.category_count(Category::Outdoor), 1);
    assert_eq!(profile.vibe_count("serene"), 1);
    assert_eq!(profile.vibe_count("nonexistent"), 0);
}

#[test]
fn a_rainy_forecast_tilts_the_ranking_indoors() {
    let planner = planner();
    let rain: WeatherByDay = [
        (Day::Saturday, WeatherCode(61)),
        (Day::Sunday, WeatherCode(80)),
    ]
    .into_iter()
    .collect();

    let recs = planner.recommend(&rain);
    assert!(recs
        .iter()
        .all(|r| r.activity.category == Category::Indoor));
}

#[test]
fn a_clear_forecast_tilts_the_ranking_outdoors() {
    let planner = planner();
    let sun: WeatherByDay = [
        (Day::Saturday, WeatherCode(0)),
        (Day::Sunday, WeatherCode(1)),
    ]
    .into_iter()
    .collect();

    let recs = planner.recommend(&sun);
    assert!(recs
        .iter()
        .all(|r| r.activity.category == Category::Outdoor));
}

#[test]
fn mixed_forecast_counts_each_day_separately() {
    let planner = planner();
    // One adverse day, one unknown: indoor activities get one boost,
    // outdoor ones none.
    let weather: WeatherByDay = [(Day::Saturday, WeatherCode(95))].into_iter().collect();

    let recs = planner.recommend(&weather);
    let top = &recs[0];
    assert_eq!(top.activity.category, Category::Indoor);
    // One adverse day at weight 3, plus at most 2 from duration.
    assert!(top.score <= 5);
    assert!(top.score >= 3);
}
