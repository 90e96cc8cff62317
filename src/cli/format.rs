//! Output formatting for CLI display.

use crate::model::{Job, Trip};

/// One line per job: id, title, company, category, pay, distance, urgency.
pub(super) fn format_job(job: &Job) -> String {
    let now = if job.is_immediate { "  NOW" } else { "" };
    format!(
        "{:>3}  {} {:<24} {:<20} {:<9} {:>9}  {:>5}{now}",
        job.id,
        job.icon,
        job.title,
        job.company,
        job.category,
        job.pay_label(),
        job.distance_label(),
    )
}

pub(super) fn format_trip(trip: &Trip) -> String {
    let marker = if trip.is_active { '*' } else { ' ' };
    format!(
        "{marker} {}  {:<16} {} - {}  ({:.4}, {:.4})",
        trip.id, trip.destination, trip.start_date, trip.end_date, trip.center.lat, trip.center.lng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::{Catalog, seed_trips};

    #[test]
    fn job_line_has_key_fields() {
        let catalog = Catalog::generate(Some(5));
        let job = catalog.job("1").unwrap();
        let line = format_job(job);
        assert!(line.starts_with("  1  "));
        assert!(line.contains("Cyber-Barista"));
        assert!(line.contains("Orbital Logistics"));
        assert!(line.contains(&job.pay_label()));
        assert_eq!(line.ends_with("NOW"), job.is_immediate);
    }

    #[test]
    fn active_trip_is_starred() {
        let trips = seed_trips();
        assert!(format_trip(&trips[0]).starts_with("* t1  Irvine Sector"));
        assert!(format_trip(&trips[1]).starts_with("  t2  San Diego Grid"));
        assert!(format_trip(&trips[1]).contains("(32.7157, -117.1611)"));
    }
}
