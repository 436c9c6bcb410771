use std::{
    fmt::{self, Display},
    time::Duration,
};

use chrono::{DateTime, Utc};
use humantime::format_duration;
use serde::Serialize;

use crate::types::{FetchResult, Launch, Launchpad, Links};

pub const NO_DETAILS: &str = "No mission details available";
pub const NO_DATE: &str = "Date to be announced";

const DATE_FORMAT: &str = "%A, %B %-d, %Y at %I:%M %p UTC";
const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Launch and pad flattened for display; serializes with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub mission_name: String,
    pub launch_date: String,
    pub days_until_launch: Option<i64>,
    pub launch_site: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub details: String,
    pub links: Option<Links>,
}

pub fn format_launch_data(launch: &Launch, launchpad: &Launchpad) -> DisplayRecord {
    format_launch_data_at(launch, launchpad, Utc::now())
}

pub fn format_launch_data_at(
    launch: &Launch,
    launchpad: &Launchpad,
    now: DateTime<Utc>,
) -> DisplayRecord {
    DisplayRecord {
        mission_name: launch.name.clone(),
        launch_date: launch
            .date_utc
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| NO_DATE.to_owned()),
        days_until_launch: launch.date_utc.map(|date| days_until(date, now)),
        launch_site: launchpad.full_name.clone(),
        location: launchpad.location(),
        coordinates: Coordinates {
            lat: launchpad.latitude,
            lng: launchpad.longitude,
        },
        details: launch
            .details
            .clone()
            .filter(|details| !details.is_empty())
            .unwrap_or_else(|| NO_DETAILS.to_owned()),
        links: launch.links.clone(),
    }
}

impl FetchResult {
    pub fn format(&self) -> DisplayRecord {
        format_launch_data(&self.launch, &self.launchpad)
    }
}

/// Whole days until `date`, rounded up.
pub fn days_until(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (date - now).num_milliseconds();
    let days = millis.div_euclid(DAY_MILLIS);
    if millis.rem_euclid(DAY_MILLIS) > 0 {
        days + 1
    } else {
        days
    }
}

/// Time left until `date` to the minute, e.g. `2days 3h 15m`.
pub fn countdown(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match (date - now).to_std() {
        Ok(left) => format_duration(Duration::from_secs(left.as_secs() / 60 * 60)).to_string(),
        Err(_) => "launched".to_owned(),
    }
}

impl Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mission:  {}", self.mission_name)?;
        match self.days_until_launch {
            Some(1) => writeln!(f, "Date:     {} (in 1 day)", self.launch_date)?,
            Some(days) => writeln!(f, "Date:     {} (in {} days)", self.launch_date, days)?,
            None => writeln!(f, "Date:     {}", self.launch_date)?,
        }
        writeln!(f, "Site:     {}", self.launch_site)?;
        write!(f, "Location: {}", self.location)?;
        if let Coordinates {
            lat: Some(lat),
            lng: Some(lng),
        } = self.coordinates
        {
            write!(f, " ({:.4}, {:.4})", lat, lng)?;
        }
        write!(f, "\nDetails:  {}", self.details)?;
        if let Some(webcast) = self.links.as_ref().and_then(|l| l.webcast.as_deref()) {
            write!(f, "\nWebcast:  {}", webcast)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;

    fn launch(date_utc: DateTime<Utc>) -> Launch {
        Launch {
            id: "62dd70d5202306255024d139".to_owned(),
            name: "Crew-5".to_owned(),
            flight_number: Some(187),
            date_utc: Some(date_utc),
            date_unix: None,
            date_precision: Some("hour".to_owned()),
            launchpad: "5e9e4502f509094188566f88".to_owned(),
            rocket: None,
            details: None,
            links: None,
            upcoming: true,
        }
    }

    fn launchpad() -> Launchpad {
        Launchpad {
            id: "5e9e4502f509094188566f88".to_owned(),
            name: Some("KSC LC 39A".to_owned()),
            full_name: "Kennedy Space Center Historic Launch Complex 39A".to_owned(),
            locality: Some("Cape Canaveral".to_owned()),
            region: Some("Florida".to_owned()),
            timezone: Some("America/New_York".to_owned()),
            latitude: Some(28.6080585),
            longitude: Some(-80.6039558),
            status: Some("active".to_owned()),
            launch_attempts: 55,
            launch_successes: 54,
        }
    }

    #[test]
    fn days_round_up() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        // 0.1 day
        assert_eq!(days_until(now + TimeDelta::minutes(144), now), 1);
        assert_eq!(days_until(now + TimeDelta::minutes(30), now), 1);
        assert_eq!(days_until(now + TimeDelta::days(1), now), 1);
        assert_eq!(days_until(now + TimeDelta::hours(25), now), 2);
        assert_eq!(days_until(now, now), 0);
        assert_eq!(days_until(now - TimeDelta::hours(1), now), 0);
        assert_eq!(days_until(now - TimeDelta::hours(25), now), -1);
    }

    #[test]
    fn formats_record() {
        let date = Utc.with_ymd_and_hms(2022, 10, 5, 16, 0, 0).unwrap();
        let now = date - TimeDelta::hours(60);
        let record = format_launch_data_at(&launch(date), &launchpad(), now);

        assert_eq!(record.mission_name, "Crew-5");
        assert_eq!(record.launch_date, "Wednesday, October 5, 2022 at 04:00 PM UTC");
        assert_eq!(record.days_until_launch, Some(3));
        assert_eq!(
            record.launch_site,
            "Kennedy Space Center Historic Launch Complex 39A"
        );
        assert_eq!(record.location, "Cape Canaveral, Florida");
        assert_eq!(
            record.coordinates,
            Coordinates {
                lat: Some(28.6080585),
                lng: Some(-80.6039558),
            }
        );
    }

    #[test]
    fn missing_details_use_placeholder() {
        let now = Utc::now();
        let record = format_launch_data(&launch(now + TimeDelta::days(2)), &launchpad());
        assert_eq!(record.details, NO_DETAILS);
        assert_eq!(record.links, None);

        let mut with_details = launch(now + TimeDelta::days(2));
        with_details.details = Some("Fifth operational crew rotation".to_owned());
        let record = format_launch_data(&with_details, &launchpad());
        assert_eq!(record.details, "Fifth operational crew rotation");
    }

    #[test]
    fn empty_details_use_placeholder() {
        let mut launch = launch(Utc::now() + TimeDelta::days(2));
        launch.details = Some(String::new());
        let record = format_launch_data(&launch, &launchpad());
        assert_eq!(record.details, NO_DETAILS);
        assert!(record
            .to_string()
            .contains("Details:  No mission details available"));
    }

    #[test]
    fn undated_launch() {
        let mut launch = launch(Utc::now());
        launch.date_utc = None;
        let record = format_launch_data(&launch, &launchpad());
        assert_eq!(record.launch_date, NO_DATE);
        assert_eq!(record.days_until_launch, None);
        assert!(record
            .to_string()
            .contains("Date:     Date to be announced\n"));
    }

    #[test]
    fn links_pass_through() {
        let mut launch = launch(Utc::now() + TimeDelta::days(2));
        let mut links = Links {
            webcast: Some("https://youtu.be/5EwW8ZkArL4".to_owned()),
            youtube_id: Some("5EwW8ZkArL4".to_owned()),
            ..Default::default()
        };
        links.flickr.original.push("https://live.staticflickr.com/1.jpg".to_owned());
        launch.links = Some(links.clone());

        let record = format_launch_data(&launch, &launchpad());
        assert_eq!(record.links, Some(links));
    }

    #[test]
    fn serializes_camel_case() {
        let date = Utc.with_ymd_and_hms(2022, 10, 5, 16, 0, 0).unwrap();
        let record = format_launch_data_at(&launch(date), &launchpad(), date);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["missionName"], "Crew-5");
        assert_eq!(value["daysUntilLaunch"], 0);
        assert_eq!(value["coordinates"]["lng"], -80.6039558);
        assert_eq!(value["details"], NO_DETAILS);
        assert!(value["links"].is_null());
    }

    #[test]
    fn renders_text() {
        let date = Utc.with_ymd_and_hms(2022, 10, 5, 16, 0, 0).unwrap();
        let mut launch = launch(date);
        launch.links = Some(Links {
            webcast: Some("https://youtu.be/5EwW8ZkArL4".to_owned()),
            ..Default::default()
        });
        let record = format_launch_data_at(&launch, &launchpad(), date - TimeDelta::hours(2));
        assert_eq!(
            record.to_string(),
            "Mission:  Crew-5\n\
             Date:     Wednesday, October 5, 2022 at 04:00 PM UTC (in 1 day)\n\
             Site:     Kennedy Space Center Historic Launch Complex 39A\n\
             Location: Cape Canaveral, Florida (28.6081, -80.6040)\n\
             Details:  No mission details available\n\
             Webcast:  https://youtu.be/5EwW8ZkArL4"
        );
    }

    #[test]
    fn countdown_to_the_minute() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let date = now + TimeDelta::days(2) + TimeDelta::hours(3) + TimeDelta::seconds(930);
        assert_eq!(countdown(date, now), "2days 3h 15m");
        assert_eq!(countdown(now - TimeDelta::minutes(5), now), "launched");
    }
}
