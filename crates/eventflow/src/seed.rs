//! Built-in sample data: a handful of campus events and a default student.

use chrono::{DateTime, TimeZone, Utc};

use crate::event::{Event, EventStatus, EventType, Role, User};

pub const DEPARTMENTS: [&str; 12] = [
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Business Administration",
    "Psychology",
    "Biology",
    "Chemistry",
    "Physics",
    "Mathematics",
    "English Literature",
    "History",
    "Economics",
];

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "AI & Machine Learning Workshop".into(),
            description: "Learn the fundamentals of AI and ML with hands-on coding exercises and real-world applications.".into(),
            venue: "Computer Science Lab - Room 301".into(),
            date: "2025-01-25".into(),
            start_time: "14:00".into(),
            end_time: "17:00".into(),
            event_type: EventType::Workshop,
            department: "Computer Science".into(),
            organizer: "Tech Society".into(),
            registration_link: "https://forms.google.com/ai-workshop".into(),
            max_attendees: Some(50),
            current_attendees: 32,
            status: EventStatus::Upcoming,
            tags: tags(&["AI", "Machine Learning", "Programming", "Technology"]),
            image_url: None,
            created_at: at(2025, 1, 15, 10, 0),
            updated_at: at(2025, 1, 18, 15, 30),
        },
        Event {
            id: "2".into(),
            title: "Annual Cultural Fest 2025".into(),
            description: "Join us for three days of music, dance, drama, and cultural celebrations. Featuring performances by students and guest artists.".into(),
            venue: "Main Auditorium & Campus Grounds".into(),
            date: "2025-02-05".into(),
            start_time: "09:00".into(),
            end_time: "22:00".into(),
            event_type: EventType::Cultural,
            department: "Cultural Committee".into(),
            organizer: "Student Council".into(),
            registration_link: "https://forms.google.com/cultural-fest".into(),
            max_attendees: Some(2000),
            current_attendees: 1245,
            status: EventStatus::Upcoming,
            tags: tags(&["Music", "Dance", "Drama", "Culture", "Festival"]),
            image_url: None,
            created_at: at(2025, 1, 10, 8, 0),
            updated_at: at(2025, 1, 20, 12, 0),
        },
        Event {
            id: "3".into(),
            title: "Career Guidance Seminar".into(),
            description: "Industry experts will share insights on career opportunities, resume building, and interview preparation.".into(),
            venue: "Lecture Hall B".into(),
            date: "2025-01-28".into(),
            start_time: "11:00".into(),
            end_time: "13:00".into(),
            event_type: EventType::Seminar,
            department: "Placement Cell".into(),
            organizer: "Career Services".into(),
            registration_link: "https://forms.google.com/career-seminar".into(),
            max_attendees: Some(200),
            current_attendees: 87,
            status: EventStatus::Upcoming,
            tags: tags(&["Career", "Professional Development", "Industry Insights"]),
            image_url: None,
            created_at: at(2025, 1, 12, 14, 0),
            updated_at: at(2025, 1, 17, 9, 30),
        },
        Event {
            id: "4".into(),
            title: "Inter-College Basketball Tournament".into(),
            description: "Compete against teams from across the region in this exciting basketball tournament. Registration deadline: Jan 30th.".into(),
            venue: "Sports Complex - Basketball Court".into(),
            date: "2025-02-10".into(),
            start_time: "08:00".into(),
            end_time: "18:00".into(),
            event_type: EventType::Sports,
            department: "Sports Department".into(),
            organizer: "Athletic Association".into(),
            registration_link: "https://forms.google.com/basketball-tournament".into(),
            max_attendees: Some(300),
            current_attendees: 156,
            status: EventStatus::Upcoming,
            tags: tags(&["Basketball", "Sports", "Competition", "Tournament"]),
            image_url: None,
            created_at: at(2025, 1, 8, 16, 0),
            updated_at: at(2025, 1, 19, 11, 15),
        },
    ]
}

pub fn seed_user() -> User {
    User {
        id: "user1".into(),
        name: "Sarah Johnson".into(),
        email: "sarah.johnson@college.edu".into(),
        department: "Computer Science".into(),
        year: 3,
        interests: tags(&["Technology", "AI", "Programming", "Cultural Events"]),
        registered_events: tags(&["1", "2"]),
        role: Role::Student,
    }
}
