use crate::i18n::Localized;

pub struct Personal {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: Localized,
    pub logo: &'static str,
}

pub const PERSONAL: Personal = Personal {
    email: "nizar@ns-engineering.co.il",
    phone: "+972-50-123-4567",
    location: Localized {
        he: "צפון הארץ, ישראל",
        en: "Northern District, Israel",
    },
    logo: "/logo.png",
};

pub struct Service {
    /// Suffix of the `services.items.<key>` translation keys.
    pub key: &'static str,
    pub icon: &'static str,
}

impl Service {
    pub fn title_key(&self) -> String {
        format!("services.items.{}.title", self.key)
    }

    pub fn description_key(&self) -> String {
        format!("services.items.{}.description", self.key)
    }
}

pub const SERVICES: [Service; 4] = [
    Service { key: "quantities", icon: "🧮" },
    Service { key: "estimates", icon: "📄" },
    Service { key: "documentation", icon: "📋" },
    Service { key: "accounting", icon: "📈" },
];

/// Values of the project-type select; labels live under `contact.projectTypes.*`.
pub const PROJECT_TYPES: [&str; 5] = ["quantities", "estimates", "accounting", "infrastructure", "other"];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: Localized,
    pub description: Localized,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: Localized,
    pub year: &'static str,
}

impl Project {
    /// The first `limit` technologies and how many were left out.
    pub fn technology_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = limit.min(self.technologies.len());
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: Localized {
            en: "Residential Towers Tender",
            he: "מכרז מגדלי מגורים",
        },
        description: Localized {
            en: "Full quantity take-off and competitive estimate for two 18-storey residential towers, including structure, finishes and site works.",
            he: "חישוב כמויות מלא ואומדן תחרותי לשני מגדלי מגורים בני 18 קומות, כולל שלד, גמרים ועבודות פיתוח.",
        },
        image: "https://images.unsplash.com/photo-1545558014-8692077e9b5c?w=800&h=600&fit=crop",
        technologies: &["AutoCAD", "Excel", "Dekel", "PDF Markup", "BIM 360"],
        category: Localized { en: "Residential", he: "מגורים" },
        year: "2024",
    },
    Project {
        id: 2,
        title: Localized {
            en: "Interchange & Road Works",
            he: "מחלף ועבודות כביש",
        },
        description: Localized {
            en: "Earthworks, paving and drainage quantities for a 4 km road section with an interchange, tracked from tender to final account.",
            he: "כמויות עבודות עפר, סלילה וניקוז לקטע כביש באורך 4 ק״מ כולל מחלף, מהמכרז ועד החשבון הסופי.",
        },
        image: "https://images.unsplash.com/photo-1486744123896-7de4b19b4b1b?w=800&h=600&fit=crop",
        technologies: &["AutoCAD Civil 3D", "Excel", "Dekel"],
        category: Localized { en: "Infrastructure", he: "תשתיות" },
        year: "2023",
    },
    Project {
        id: 3,
        title: Localized {
            en: "Public School Extension",
            he: "הרחבת בית ספר ציבורי",
        },
        description: Localized {
            en: "Monthly accounts and deviation tracking for a two-wing school extension built under municipal supervision.",
            he: "התחשבנות חודשית ומעקב חריגים להרחבת בית ספר בשני אגפים בפיקוח עירוני.",
        },
        image: "https://images.unsplash.com/photo-1539650116574-75c0c6d0893b?w=800&h=600&fit=crop",
        technologies: &["Excel", "PDF Markup", "Site Measurements", "Dekel"],
        category: Localized { en: "Public Buildings", he: "מבני ציבור" },
        year: "2024",
    },
    Project {
        id: 4,
        title: Localized {
            en: "Water & Sewage Network",
            he: "רשת מים וביוב",
        },
        description: Localized {
            en: "Pipe, manhole and connection quantities for a neighbourhood water and sewage network, with alternative routing estimates.",
            he: "כמויות צנרת, שוחות וחיבורים לרשת מים וביוב שכונתית, כולל אומדני חלופות תוואי.",
        },
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&h=600&fit=crop",
        technologies: &["AutoCAD", "Excel", "GIS"],
        category: Localized { en: "Infrastructure", he: "תשתיות" },
        year: "2023",
    },
    Project {
        id: 5,
        title: Localized {
            en: "Logistics Warehouse",
            he: "מרכז לוגיסטי",
        },
        description: Localized {
            en: "Steel structure, precast and flooring estimate for a 20,000 m² logistics warehouse, prepared for a design-and-build bid.",
            he: "אומדן קונסטרוקציית פלדה, טרומי ורצפות למרכז לוגיסטי בשטח 20,000 מ״ר, להצעת תכנון-ביצוע.",
        },
        image: "https://images.unsplash.com/photo-1581094271901-8022df4466f9?w=800&h=600&fit=crop",
        technologies: &["Tekla Viewer", "Excel", "AutoCAD", "Dekel", "PDF Markup", "BIM 360"],
        category: Localized { en: "Industrial", he: "תעשייה" },
        year: "2024",
    },
    Project {
        id: 6,
        title: Localized {
            en: "Retaining Walls & Site Development",
            he: "קירות תומכים ופיתוח שטח",
        },
        description: Localized {
            en: "Take-off of retaining walls, landscaping and site development for a hillside residential neighbourhood.",
            he: "חישוב כמויות לקירות תומכים, גינון ופיתוח שטח לשכונת מגורים במדרון.",
        },
        image: "https://images.unsplash.com/photo-1439066615861-d1af74d74000?w=800&h=600&fit=crop",
        technologies: &["AutoCAD Civil 3D", "Excel"],
        category: Localized { en: "Site Development", he: "פיתוח" },
        year: "2023",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_reports_hidden_technologies() {
        let project = find_project(5).unwrap();
        let (shown, hidden) = project.technology_preview(3);
        assert_eq!(shown, &["Tekla Viewer", "Excel", "AutoCAD"]);
        assert_eq!(hidden, 3);

        let (shown, hidden) = find_project(6).unwrap().technology_preview(3);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn project_ids_are_unique() {
        for project in PROJECTS.iter() {
            assert_eq!(find_project(project.id), Some(project));
        }
    }
}
