//! Tests for configuration module.

use super::*;
use config::{FileFormat, Map};

fn from_toml(toml: &str) -> PageResult<Settings> {
    Settings::from_sources(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
}

#[test_log::test]
fn defaults_apply_without_sources() {
    let settings = Settings::from_sources(Config::builder()).expect("defaults are valid");

    assert_eq!(settings.page.week_start, DayOfWeek::Monday);
    assert_eq!(settings.page.min_weeks, 1);
    assert_eq!(settings.page.time_zone, "UTC");
}

#[test_log::test]
fn toml_overrides_defaults() {
    let settings = from_toml(
        r#"
        [page]
        week_start = "sunday"
        min_weeks = 6
        time_zone = "Europe/Berlin"
        "#,
    )
    .expect("valid settings");

    assert_eq!(settings.page.week_start, DayOfWeek::Sunday);
    assert_eq!(settings.page.min_weeks, 6);
    assert_eq!(settings.page.time_zone().ok(), Some(chrono_tz::Europe::Berlin));
}

#[test]
fn week_start_accepts_iso_number() {
    let settings = from_toml("[page]\nweek_start = 6\n").expect("valid settings");

    assert_eq!(settings.page.week_start, DayOfWeek::Saturday);
}

#[test]
fn unknown_week_start_is_rejected() {
    let result = from_toml("[page]\nweek_start = \"someday\"\n");

    assert!(matches!(result, Err(PageError::ConfigError(_))));
}

#[test]
fn zero_min_weeks_is_rejected() {
    let result = from_toml("[page]\nmin_weeks = 0\n");

    assert!(matches!(
        result,
        Err(PageError::CoreError(CoreError::ConfigError(_)))
    ));
}

#[test]
fn unknown_time_zone_is_rejected() {
    let result = from_toml("[page]\ntime_zone = \"Mars/Olympus_Mons\"\n");

    assert!(matches!(result, Err(PageError::UnknownTimezone(zone)) if zone == "Mars/Olympus_Mons"));
}

#[test_log::test]
fn environment_overrides_file() {
    let mut env = Map::new();
    env.insert("DAYGRID_PAGE__WEEK_START".to_string(), "wednesday".to_string());
    env.insert("DAYGRID_PAGE__MIN_WEEKS".to_string(), "5".to_string());

    let builder = Config::builder()
        .add_source(File::from_str(
            "[page]\nweek_start = \"sunday\"\nmin_weeks = 6\n",
            FileFormat::Toml,
        ))
        .add_source(Settings::environment().source(Some(env)));
    let settings = Settings::from_sources(builder).expect("valid settings");

    assert_eq!(settings.page.week_start, DayOfWeek::Wednesday);
    assert_eq!(settings.page.min_weeks, 5);
}

#[test]
fn page_uses_configured_layout() {
    let settings = from_toml("[page]\nweek_start = \"sunday\"\nmin_weeks = 6\n")
        .expect("valid settings");
    let month = PlainYearMonth::new(2024, 2).expect("valid month");

    let page = settings.page.page(month);
    assert_eq!(page.month, month);
    assert_eq!(page.week_start, DayOfWeek::Sunday);
    assert_eq!(page.min_weeks, 6);
    assert_eq!(page.days().expect("page builds").count(), 42);
}

#[test]
fn current_page_uses_configured_zone() {
    let settings = Settings::from_sources(Config::builder()).expect("defaults are valid");

    let page = settings.page.current_page().expect("UTC is known");
    assert_eq!(page.month, PlainYearMonth::from_instant(Utc::now(), Tz::UTC));
}
