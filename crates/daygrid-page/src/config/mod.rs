use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use daygrid_core::error::CoreError;
use daygrid_date::{DayOfWeek, PlainYearMonth};
use serde::Deserialize;

use crate::error::{PageError, PageResult};
use crate::page::CalendarPage;

#[cfg(test)]
mod tests;

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "DAYGRID";

/// Base name of the optional configuration file (`daygrid.toml`, `.json`, `.yaml`).
pub const CONFIG_FILE: &str = "daygrid";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub week_start: DayOfWeek,
    pub min_weeks: usize,
    /// IANA name of the zone used to decide which month is "current".
    pub time_zone: String,
}

impl PageConfig {
    /// ## Summary
    /// Checks values that deserialize fine but cannot lay out a page.
    ///
    /// ## Errors
    /// Returns an error if `min_weeks` is zero or `time_zone` is unknown.
    pub fn validate(&self) -> PageResult<()> {
        if self.min_weeks == 0 {
            return Err(
                CoreError::ConfigError("page.min_weeks must be at least 1".to_string()).into(),
            );
        }
        self.time_zone()?;
        Ok(())
    }

    /// ## Errors
    /// Returns `PageError::UnknownTimezone` if `time_zone` is not an IANA name.
    pub fn time_zone(&self) -> PageResult<Tz> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_e| PageError::UnknownTimezone(self.time_zone.clone()))
    }

    /// The configured layout applied to `month`.
    #[must_use]
    pub fn page(&self, month: PlainYearMonth) -> CalendarPage {
        CalendarPage::new(month, self.week_start).with_min_weeks(self.min_weeks)
    }

    /// ## Summary
    /// The configured layout applied to the month it currently is in the
    /// configured time zone.
    ///
    /// ## Errors
    /// Returns `PageError::UnknownTimezone` if `time_zone` is not an IANA name.
    pub fn current_page(&self) -> PageResult<CalendarPage> {
        let month = PlainYearMonth::from_instant(Utc::now(), self.time_zone()?);
        Ok(self.page(month))
    }
}

impl Settings {
    /// ## Summary
    /// Environment source: `DAYGRID_PAGE__WEEK_START=sunday` sets
    /// `page.week_start`.
    #[must_use]
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// ## Summary
    /// Applies defaults to `builder`, deserializes and validates the result.
    ///
    /// ## Errors
    /// Returns an error if a source cannot be read, a value has the wrong
    /// shape, or validation fails.
    pub fn from_sources(builder: ConfigBuilder<DefaultState>) -> PageResult<Self> {
        let settings = builder
            .set_default("page.week_start", DayOfWeek::Monday.as_str())?
            .set_default("page.min_weeks", 1)?
            .set_default("page.time_zone", "UTC")?
            .build()?
            .try_deserialize::<Self>()?;

        settings.page.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Loads configuration from an optional `daygrid.toml` file and
    /// environment variables into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the
    /// configuration fails.
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Self::environment());

        let settings = Self::from_sources(builder)?;
        tracing::debug!(settings = ?settings, "Configuration loaded");
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and an
/// optional `daygrid.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
