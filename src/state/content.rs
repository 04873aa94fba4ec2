//! Static copy of the clinic site

pub const BRAND: &str = "✚ MediCare Clinic";

pub const HERO_TITLE: &str = "Your Health, Our Priority";
pub const HERO_SUBTITLE: [&str; 2] = [
    "Comprehensive care from experienced doctors,",
    "available when you need it most.",
];

/// Call-to-action buttons in the hero, left to right
pub const HERO_BUTTONS: [&str; 2] = ["Book Appointment", "Emergency Care"];

pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "General Medicine",
        summary: "Routine check-ups, diagnosis and treatment for everyday conditions.",
    },
    Service {
        title: "Cardiology",
        summary: "Heart health screening, monitoring and long-term care plans.",
    },
    Service {
        title: "Pediatrics",
        summary: "Gentle, attentive care for infants, children and teenagers.",
    },
    Service {
        title: "Emergency Care",
        summary: "Round-the-clock urgent care with rapid triage.",
    },
];

pub struct Doctor {
    pub name: &'static str,
    pub specialty: &'static str,
    pub experience: &'static str,
}

pub const DOCTORS: [Doctor; 3] = [
    Doctor {
        name: "Dr. Sarah Johnson",
        specialty: "Cardiologist",
        experience: "15 years of experience",
    },
    Doctor {
        name: "Dr. Michael Chen",
        specialty: "Pediatrician",
        experience: "12 years of experience",
    },
    Doctor {
        name: "Dr. Emily Davis",
        specialty: "General Practitioner",
        experience: "10 years of experience",
    },
];

pub const ABOUT_TEXT: [&str; 4] = [
    "For over two decades MediCare Clinic has served the community with",
    "compassionate, evidence-based care. Our team combines modern",
    "diagnostics with a personal approach, so every patient leaves",
    "understood as well as treated.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: "20+",
        label: "Years",
    },
    Stat {
        value: "50+",
        label: "Doctors",
    },
    Stat {
        value: "10k",
        label: "Patients",
    },
    Stat {
        value: "24/7",
        label: "Support",
    },
];

pub const CONTACT_DETAILS: [&str; 3] = [
    "☎ (555) 123-4567",
    "✉ info@medicare-clinic.example",
    "⌂ 123 Health Street, Wellness City",
];

pub const FOOTER: &str = "© MediCare Clinic. All rights reserved.";
