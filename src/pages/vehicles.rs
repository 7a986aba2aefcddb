//! Vehicle listing page.
//!
//! This is the view the root route points at. It is deliberately a thin
//! shell: a static table over the vehicle row model, with no fetching,
//! filtering, or selection wiring — those belong to the data-presentation
//! layer, not the bootstrap.

#[cfg(test)]
#[path = "vehicles_test.rs"]
mod vehicles_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ui::breakpoints::BreakpointTable;
use crate::util::dom;

/// One vehicle row. Field names mirror the scraped dataset, so rows
/// deserialize straight from its JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle designation, e.g. `"P-51D-5"`.
    pub name: String,
    /// Owning nation, e.g. `"USA"`.
    pub nation: String,
    /// Research rank, 1-based.
    pub rank: u8,
    /// Arcade battle rating.
    #[serde(rename = "AB")]
    pub ab: f32,
    /// Realistic battle rating.
    #[serde(rename = "RB")]
    pub rb: f32,
    /// Simulator battle rating.
    #[serde(rename = "SB")]
    pub sb: f32,
    /// Top speed in km/h, where the dataset has one.
    pub max_speed: Option<f32>,
}

/// Placeholder rows shown until a data layer replaces this shell.
#[must_use]
pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            name: "P-51D-5".to_owned(),
            nation: "USA".to_owned(),
            rank: 4,
            ab: 4.7,
            rb: 4.3,
            sb: 4.7,
            max_speed: Some(703.0),
        },
        Vehicle {
            name: "Spitfire Mk Vb".to_owned(),
            nation: "Britain".to_owned(),
            rank: 3,
            ab: 4.0,
            rb: 3.7,
            sb: 4.0,
            max_speed: Some(595.0),
        },
        Vehicle {
            name: "T-34-85".to_owned(),
            nation: "USSR".to_owned(),
            rank: 3,
            ab: 5.7,
            rb: 5.7,
            sb: 5.7,
            max_speed: None,
        },
    ]
}

fn format_speed(speed: Option<f32>) -> String {
    speed.map_or_else(|| "—".to_owned(), |kmh| format!("{kmh:.0} km/h"))
}

/// The vehicle list view registered as `"vehicle-list"` and routed at `/`.
#[component]
pub fn VehiclesPage() -> impl IntoView {
    let breakpoints = use_context::<BreakpointTable>().unwrap_or_default();
    let compact = dom::viewport_width().is_some_and(|w| breakpoints.is_mobile(w));

    view! {
        <section class="vehicles-page">
            <h1>"Vehicles"</h1>
            <table class="vehicle-table" class=("vehicle-table--compact", compact)>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Nation"</th>
                        <th>"Rank"</th>
                        <th>"AB"</th>
                        <th>"RB"</th>
                        <th>"SB"</th>
                        <th>"Top speed"</th>
                    </tr>
                </thead>
                <tbody>
                    {sample_vehicles()
                        .into_iter()
                        .map(|v| {
                            view! {
                                <tr>
                                    <td>{v.name.clone()}</td>
                                    <td>{v.nation.clone()}</td>
                                    <td>{v.rank}</td>
                                    <td>{format!("{:.1}", v.ab)}</td>
                                    <td>{format!("{:.1}", v.rb)}</td>
                                    <td>{format!("{:.1}", v.sb)}</td>
                                    <td>{format_speed(v.max_speed)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
