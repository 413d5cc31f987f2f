// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical reference and demo datasets.
//!
//! Reference data (categories, target groups, settings, footer links) is
//! seeded idempotently by natural key. The demo software set is only ever
//! written by the catalog-resetting demo load, which links entries to the
//! reference categories and target groups by name.

use crate::types::{Category, CostTier, FooterLink, Setting, SoftwareEntry, TargetGroup};

/// The canonical category set.
#[must_use]
pub fn reference_categories() -> Vec<Category> {
    vec![
        Category::new(
            "Learning Management",
            Some("Lernmanagement"),
            Some("Course platforms and learning management systems"),
        ),
        Category::new(
            "Communication",
            Some("Kommunikation"),
            Some("Chat, video conferencing and messaging"),
        ),
        Category::new(
            "Collaboration",
            Some("Zusammenarbeit"),
            Some("Shared documents, whiteboards and project spaces"),
        ),
        Category::new(
            "Office & Productivity",
            Some("Büro & Produktivität"),
            Some("Word processing, spreadsheets and presentations"),
        ),
        Category::new(
            "Assessment",
            Some("Prüfung"),
            Some("Quizzes, surveys and examinations"),
        ),
        Category::new(
            "Content Creation",
            Some("Inhaltserstellung"),
            Some("Authoring tools for video, audio and interactive media"),
        ),
    ]
}

/// The canonical target group set.
#[must_use]
pub fn reference_target_groups() -> Vec<TargetGroup> {
    vec![
        TargetGroup::new(
            "Students",
            Some("Studierende"),
            Some("Enrolled students of all faculties"),
        ),
        TargetGroup::new(
            "Teachers",
            Some("Lehrende"),
            Some("Lecturers and teaching staff"),
        ),
        TargetGroup::new(
            "Researchers",
            Some("Forschende"),
            Some("Research staff and doctoral candidates"),
        ),
        TargetGroup::new(
            "Administration",
            Some("Verwaltung"),
            Some("Administrative and technical staff"),
        ),
    ]
}

/// The canonical settings set.
#[must_use]
pub fn reference_settings() -> Vec<Setting> {
    vec![
        Setting::new(
            "site_title",
            "Software Catalog",
            Some("Title shown in the page header"),
        ),
        Setting::new(
            "default_language",
            "en",
            Some("Language used when the visitor has no preference"),
        ),
        Setting::new(
            "contact_email",
            "support@example.org",
            Some("Address shown on the contact page"),
        ),
        Setting::new(
            "items_per_page",
            "24",
            Some("Number of catalog entries per page"),
        ),
    ]
}

/// The canonical footer link set.
#[must_use]
pub fn reference_footer_links() -> Vec<FooterLink> {
    vec![
        FooterLink::new("Imprint", "/imprint", 1, true),
        FooterLink::new("Privacy Policy", "/privacy", 2, true),
        FooterLink::new("Accessibility", "/accessibility", 3, true),
        FooterLink::new("Contact", "mailto:support@example.org", 4, true),
    ]
}

/// The demo software set loaded by the demo load operation.
#[must_use]
pub fn demo_software() -> Vec<SoftwareEntry> {
    vec![
        SoftwareEntry::new(
            "Moodle",
            "Open-source learning platform",
            CostTier::Free,
        )
        .with_description("Course management with assignments, forums, quizzes and gradebooks.")
        .with_url("https://moodle.org")
        .with_types(&["web"])
        .with_categories(&["Learning Management", "Assessment"])
        .with_target_groups(&["Students", "Teachers"]),
        SoftwareEntry::new(
            "BigBlueButton",
            "Web conferencing for online teaching",
            CostTier::Free,
        )
        .with_url("https://bigbluebutton.org")
        .with_types(&["web"])
        .with_categories(&["Communication"])
        .with_target_groups(&["Students", "Teachers"]),
        SoftwareEntry::new(
            "Nextcloud",
            "Self-hosted file sync and sharing",
            CostTier::Freemium,
        )
        .with_description("File storage, calendars and collaborative editing on university servers.")
        .with_url("https://nextcloud.com")
        .with_types(&["web", "desktop", "mobile"])
        .with_categories(&["Collaboration"])
        .with_target_groups(&["Students", "Teachers", "Researchers", "Administration"]),
        SoftwareEntry::new(
            "LibreOffice",
            "Free office suite",
            CostTier::Free,
        )
        .with_url("https://www.libreoffice.org")
        .with_types(&["desktop"])
        .with_categories(&["Office & Productivity"])
        .with_target_groups(&["Students", "Administration"]),
        SoftwareEntry::new(
            "Microsoft 365",
            "Office applications and cloud storage",
            CostTier::License,
        )
        .with_url("https://www.office.com")
        .with_types(&["web", "desktop", "mobile"])
        .with_categories(&["Office & Productivity", "Communication", "Collaboration"])
        .with_target_groups(&["Students", "Teachers", "Researchers", "Administration"]),
        SoftwareEntry::new(
            "H5P",
            "Interactive HTML5 content authoring",
            CostTier::Freemium,
        )
        .with_url("https://h5p.org")
        .with_types(&["web"])
        .with_categories(&["Content Creation", "Assessment"])
        .with_target_groups(&["Teachers"]),
        SoftwareEntry::new(
            "Camtasia",
            "Screen recording and video editing",
            CostTier::Paid,
        )
        .with_url("https://www.techsmith.com/camtasia")
        .with_types(&["desktop"])
        .with_categories(&["Content Creation"])
        .with_target_groups(&["Teachers", "Researchers"])
        .unavailable(),
    ]
}
