use maud::{html, Markup};

use crate::{
    templates::layouts::{base, PageConfig},
    QueryDefaults,
};

pub fn home_page(api_base: &str, defaults: &QueryDefaults) -> Markup {
    let config = PageConfig {
        title: "Hawaii Weather Data",
        api_base,
    };

    base(&config, content(defaults))
}

fn content(defaults: &QueryDefaults) -> Markup {
    html! {
        div class="content" {
            p { "Available Routes for Hawaii Weather Data:" }
            ul {
                li {
                    "Daily Precipitation Totals for Last Year: "
                    a href="/api/v1.0/precipitation" { "/api/v1.0/precipitation" }
                }
                li {
                    "Active Weather Stations: "
                    a href="/api/v1.0/stations" { "/api/v1.0/stations" }
                }
                li {
                    "Daily Temperature Observations for Station " (defaults.tobs_station) " for Last Year: "
                    a href="/api/v1.0/tobs" { "/api/v1.0/tobs" }
                }
                li {
                    "Min, Average & Max Temperatures for Date Range: "
                    code { "/api/v1.0/trip/yyyy-mm-dd/yyyy-mm-dd" }
                }
            }
            p class="is-size-7" {
                "NOTE: If no end-date is provided, the trip api calculates stats through "
                (defaults.trip_end_date)
            }
        }
    }
}
