//! Mock data for the grid: jobs, conversations, trips, and the mission log.
//!
//! Everything here is synthetic. The job catalog has a fixed shape (titles,
//! categories, and companies cycle through fixed lists) with random pay,
//! position, and availability. Conversations, trips, and the mission log are
//! fixed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Category, Conversation, Coordinates, Job, Message, PayFrequency, Presence, Trip};

/// Number of jobs in a generated catalog.
pub const JOB_COUNT: usize = 50;

/// Center of the Irvine grid. Job positions scatter around it.
pub const GRID_CENTER: Coordinates = Coordinates::new(33.6846, -117.8265);

/// Largest latitude/longitude offset from [`GRID_CENTER`], in degrees.
pub const MAX_OFFSET_DEGREES: f64 = 0.06;

const SHIFTS: [&str; 2] = ["08:00 - 16:00", "20:00 - 04:00"];

const COMPANIES: [&str; 10] = [
    "Neural Dynamics",
    "Orbital Logistics",
    "Cyber-Bite",
    "Neon Pulse",
    "UCI Bio-Labs",
    "Spectrum Tech",
    "Jamboree Retail",
    "Turtle Rock Security",
    "Hexa-Delivery",
    "Future-Fab",
];

struct Template {
    title: &'static str,
    category: Category,
    icon: &'static str,
    tags: [&'static str; 2],
}

const fn template(
    title: &'static str,
    category: Category,
    icon: &'static str,
    tags: [&'static str; 2],
) -> Template {
    Template {
        title,
        category,
        icon,
        tags,
    }
}

const TEMPLATES: [Template; 20] = [
    template("Drone Operator", Category::Technical, "🚁", ["Flying", "Remote"]),
    template("Cyber-Barista", Category::Service, "☕", ["High Energy", "Tips"]),
    template("Exo-Loader", Category::Physical, "🏋", ["Heavy Lifting", "Strength"]),
    template("AR Muralist", Category::Creative, "🎨", ["Design", "Public"]),
    template("Security Sentinel", Category::Service, "🛡", ["Vigilance", "Patrol"]),
    template("Data Scrubber", Category::Technical, "💻", ["Logic", "Concentration"]),
    template("Courier 01", Category::Physical, "🚚", ["Fast", "Transit"]),
    template("Hologram Editor", Category::Creative, "📽", ["Video", "Editing"]),
    template("Syntho-Chef", Category::Service, "🍔", ["Cooking", "Precision"]),
    template("Circuit Welder", Category::Technical, "🔧", ["Hard Work", "Detail"]),
    template("Night Gardener", Category::Physical, "🌳", ["Outdoor", "Botany"]),
    template("Audio Architect", Category::Creative, "🎵", ["Sound", "Music"]),
    template("Dog Walker (Cyber-Paws)", Category::Service, "🐕", ["Animals", "Outdoors"]),
    template("Solar Tech", Category::Technical, "⚡", ["Energy", "Safety"]),
    template("Bio-Sampler", Category::Technical, "🧪", ["Research", "Lab"]),
    template("Night Club Guard", Category::Service, "🕶", ["Security", "Vibe"]),
    template("Package Sorcerer", Category::Physical, "📦", ["Warehouse", "Speed"]),
    template("Street Musician (Holo)", Category::Creative, "🎸", ["Performance", "Crowd"]),
    template("Event Host", Category::Service, "🎤", ["Public Speaking", "Social"]),
    template("E-Waste Recycler", Category::Physical, "♻", ["Green", "Scraps"]),
];

/// The read-only data the client runs on.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub jobs: Vec<Job>,
    pub conversations: Vec<Conversation>,
}

impl Catalog {
    /// Generate a catalog. The same seed always yields the same jobs;
    /// without a seed the RNG is seeded from the OS.
    pub fn generate(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let jobs = generate_jobs(&mut rng);
        tracing::info!(jobs = jobs.len(), ?seed, "generated catalog");
        Self {
            jobs,
            conversations: conversations(),
        }
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }
}

/// Build [`JOB_COUNT`] jobs, drawing every random field from `rng`.
pub fn generate_jobs(rng: &mut impl Rng) -> Vec<Job> {
    (1..=JOB_COUNT).map(|i| generate_job(i, rng)).collect()
}

fn generate_job(i: usize, rng: &mut impl Rng) -> Job {
    let template = &TEMPLATES[i % TEMPLATES.len()];

    let lat_offset = rng.gen_range(-MAX_OFFSET_DEGREES..=MAX_OFFSET_DEGREES);
    let lng_offset = rng.gen_range(-MAX_OFFSET_DEGREES..=MAX_OFFSET_DEGREES);
    let pay = rng.gen_range(20..=59);
    let pay_frequency = if rng.gen_bool(0.2) {
        PayFrequency::Day
    } else {
        PayFrequency::Hour
    };
    let distance_km = rng.gen_range(0.0..5.0);
    let shift = SHIFTS[usize::from(rng.gen_bool(0.5))];
    let spots = rng.gen_range(1..=10);
    let is_immediate = rng.gen_bool(0.3);

    let mut tags: Vec<String> = template.tags.iter().map(|t| (*t).to_string()).collect();
    tags.push("Local".to_string());

    Job {
        id: i.to_string(),
        title: template.title.to_string(),
        company: COMPANIES[i % COMPANIES.len()].to_string(),
        category: template.category,
        pay,
        pay_frequency,
        description: format!(
            "A unique opportunity to contribute to the thriving {} sector of the Irvine Grid. \
             Requirements: Focus and reliability.",
            template.category
        ),
        tags,
        location: Coordinates::new(GRID_CENTER.lat + lat_offset, GRID_CENTER.lng + lng_offset),
        address: format!("Grid-Node {}, Irvine Sector", 1000 + i),
        distance_km,
        shift: shift.to_string(),
        spots,
        image_url: format!("https://picsum.photos/seed/{}/400/300", i + 100),
        is_immediate,
        contact_number: format!("+1-949-NEO-{i:02}"),
        icon: template.icon.to_string(),
    }
}

/// The trips the schedule starts with. `t1` is active.
pub fn seed_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "t1".into(),
            destination: "Irvine Sector".into(),
            start_date: "MAR 01".into(),
            end_date: "MAR 15".into(),
            center: GRID_CENTER,
            is_active: true,
        },
        Trip {
            id: "t2".into(),
            destination: "San Diego Grid".into(),
            start_date: "MAR 20".into(),
            end_date: "MAR 28".into(),
            center: Coordinates::new(32.7157, -117.1611),
            is_active: false,
        },
    ]
}

/// A booked or pending engagement on the schedule screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionEntry {
    pub title: &'static str,
    pub when: &'static str,
    pub confirmed: bool,
}

/// Static mission log shown under the trips.
pub const MISSION_LOG: [MissionEntry; 2] = [
    MissionEntry {
        title: "Cyber-Barista Shift",
        when: "Tomorrow, 07:00 @ Neural Cafe",
        confirmed: true,
    },
    MissionEntry {
        title: "Security Sentinel Interview",
        when: "Fri, 14:00 @ Turtle Rock",
        confirmed: false,
    },
];

fn message(id: &str, sender_id: &str, text: &str, timestamp: &str, is_me: bool) -> Message {
    Message {
        id: id.into(),
        sender_id: sender_id.into(),
        text: text.into(),
        timestamp: timestamp.into(),
        is_me,
    }
}

/// The three fixed conversations on the connect screen.
pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: "c1".into(),
            name: "Maya @ GreenGarden".into(),
            role: "Shop Owner".into(),
            avatar: "🌿".into(),
            status: Presence::Online,
            last_message: "I loved your previous work! Ready to help out today?".into(),
            messages: vec![
                message(
                    "m1",
                    "maya",
                    "Hi! I saw you were looking for outdoor work near Irvine.",
                    "11:45 AM",
                    false,
                ),
                message(
                    "m2",
                    "me",
                    "Hey Maya! Yes, I love working in gardens. I saw your post.",
                    "11:46 AM",
                    true,
                ),
                message(
                    "m3",
                    "maya",
                    "I loved your previous work! Ready to help out today? We have a big shipment arriving.",
                    "11:50 AM",
                    false,
                ),
            ],
        },
        Conversation {
            id: "c2".into(),
            name: "Leo (Creative Lead)".into(),
            role: "Studio Partner".into(),
            avatar: "🎨".into(),
            status: Presence::Online,
            last_message: "The AR layers look perfect. Meet at the site?".into(),
            messages: vec![
                message("m4", "leo", "Check the new mural coordinates.", "09:30 AM", false),
                message(
                    "m5",
                    "leo",
                    "The AR layers look perfect. Meet at the site?",
                    "09:35 AM",
                    false,
                ),
            ],
        },
        Conversation {
            id: "c3".into(),
            name: "Kae @ Neon Pulse".into(),
            role: "Event Designer".into(),
            avatar: "✨".into(),
            status: Presence::Offline,
            last_message: "Thanks for the quick assist yesterday! You rock.".into(),
            messages: vec![message(
                "m6",
                "kae",
                "Thanks for the quick assist yesterday! You rock.",
                "Yesterday",
                false,
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    fn seeded_jobs(seed: u64) -> Vec<Job> {
        generate_jobs(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn generates_fifty_unique_jobs() {
        let jobs = seeded_jobs(1);
        assert_eq!(jobs.len(), JOB_COUNT);
        let ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), JOB_COUNT);
        assert_eq!(jobs[0].id, "1");
        assert_eq!(jobs[49].id, "50");
    }

    #[test]
    fn fields_stay_in_bounds() {
        for seed in 0..20 {
            for job in seeded_jobs(seed) {
                assert!((20..=59).contains(&job.pay), "pay {}", job.pay);
                assert!((1..=10).contains(&job.spots), "spots {}", job.spots);
                assert!((0.0..5.0).contains(&job.distance_km));
                assert!((job.location.lat - GRID_CENTER.lat).abs() <= MAX_OFFSET_DEGREES + 1e-9);
                assert!((job.location.lng - GRID_CENTER.lng).abs() <= MAX_OFFSET_DEGREES + 1e-9);
                assert!(matches!(job.pay_frequency, PayFrequency::Hour | PayFrequency::Day));
                assert!(SHIFTS.contains(&job.shift.as_str()));
            }
        }
    }

    #[test]
    fn templates_and_companies_cycle_by_index() {
        let jobs = seeded_jobs(3);
        // Job 1 takes template 1 and company 1.
        assert_eq!(jobs[0].title, "Cyber-Barista");
        assert_eq!(jobs[0].company, "Orbital Logistics");
        assert_eq!(jobs[0].category, Category::Service);
        // Job 20 wraps back to template 0.
        assert_eq!(jobs[19].title, "Drone Operator");
        assert_eq!(jobs[19].company, "Neural Dynamics");
        assert_eq!(jobs[0].tags, vec!["High Energy", "Tips", "Local"]);
    }

    #[test]
    fn every_category_appears() {
        let jobs = seeded_jobs(5);
        for category in Category::ALL {
            assert!(jobs.iter().filter(|j| j.category == category).count() >= 5);
        }
    }

    #[test]
    fn derived_strings() {
        let jobs = seeded_jobs(9);
        let job = &jobs[6];
        assert_eq!(job.address, "Grid-Node 1007, Irvine Sector");
        assert_eq!(job.contact_number, "+1-949-NEO-07");
        assert_eq!(job.image_url, "https://picsum.photos/seed/107/400/300");
        assert!(job.description.contains("thriving creative sector"));
    }

    #[test]
    fn same_seed_same_catalog() {
        assert_eq!(seeded_jobs(42), seeded_jobs(42));
        assert_ne!(seeded_jobs(42), seeded_jobs(43));
    }

    #[test]
    fn seeded_trips_have_one_active() {
        let trips = seed_trips();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips.iter().filter(|t| t.is_active).count(), 1);
        assert!(trips[0].is_active);
    }

    #[test]
    fn conversations_are_fixed() {
        let convos = conversations();
        assert_eq!(convos.len(), 3);
        let ids: Vec<&str> = convos[0].messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
        assert!(convos[0].messages[1].is_me);
        assert_eq!(convos[2].status, Presence::Offline);
    }

    #[test]
    fn catalog_lookup() {
        let catalog = Catalog::generate(Some(11));
        assert_eq!(catalog.job("12").map(|j| j.id.as_str()), Some("12"));
        assert!(catalog.job("99").is_none());
    }
}
