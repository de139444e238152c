/// Render a distance for display
///
/// * under 1 km: whole meters, e.g. `"450m"`
/// * 1 km up to 10 km: one decimal, e.g. `"3.3km"`
/// * 10 km and beyond: whole kilometers, e.g. `"43km"`
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{:.0}m", (distance_km * 1000.0).round())
    } else if distance_km < 10.0 {
        // Round half-up first so the formatter never sees a tie
        format!("{:.1}km", (distance_km * 10.0).round() / 10.0)
    } else {
        format!("{:.0}km", distance_km.round())
    }
}
