//! Map page listing charted waypoints.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::router::PageModule;

pub fn module() -> PageModule {
    Rc::new(|_params| view! { <MapPage/> }.into_any())
}

const WAYPOINTS: &[(f64, f64, &str)] = &[
    (59.3293, 18.0686, "Stockholm"),
    (52.52, 13.405, "Berlin"),
    (41.3874, 2.1686, "Barcelona"),
];

#[component]
pub fn MapPage() -> impl IntoView {
    view! {
        <div class="map-page">
            <h1>"Map"</h1>
            <ul class="map-page__waypoints">
                {WAYPOINTS
                    .iter()
                    .map(|&(lat, lon, name)| {
                        view! {
                            <li class="map-page__waypoint">
                                <span class="map-page__name">{name}</span>
                                <span class="map-page__coords">{format_coord(lat, lon)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// `59.3293° N, 18.0686° E` style display coordinates.
fn format_coord(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}° {ns}, {:.4}° {ew}", lat.abs(), lon.abs())
}
