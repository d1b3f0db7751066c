use web_sys::window;
use yew::prelude::*;

const STORAGE_KEY: &str = "language";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    He,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "he" => Some(Language::He),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::He)
    }

    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::He => Language::En,
            Language::En => Language::He,
        }
    }

    /// Label of the toggle button: names the language it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::He => "English",
            Language::En => "עברית",
        }
    }
}

/// A string available in every supported language.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Localized {
    pub he: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::He => self.he,
            Language::En => self.en,
        }
    }
}

/// Looks up a dotted translation key; unknown keys come back unchanged.
pub fn t(lang: Language, key: &str) -> &str {
    let table = match lang {
        Language::He => HEBREW,
        Language::En => ENGLISH,
    };
    lookup(table, key).unwrap_or(key)
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

const HEBREW: &[(&str, &str)] = &[
    ("navigation.home", "בית"),
    ("navigation.services", "שירותים"),
    ("navigation.projects", "פרויקטים"),
    ("navigation.contact", "צור קשר"),
    ("header.brand", "נ.ס. שירותי הנדסה"),
    ("header.tagline", "ניזאר סמרי - מהנדס אזרחי"),
    ("hero.greeting", "מהנדס אזרחי מוסמך"),
    ("hero.name", "ניזאר סמרי"),
    ("hero.title", "מהנדס אזרחי | חשב כמויות | בונה אומדנים"),
    ("hero.subtitle", "מומחה לבניית אומדנים וחישובי כמויות."),
    ("hero.description", "חישוב כמויות ובניית אומדנים לפרויקטים בענף הבנייה והתשתיות – משלב המכרז ועד שלב ההתחשבנות בשטח."),
    ("hero.cta", "צפה בפרויקטים"),
    ("hero.contact", "קבל הצעת מחיר"),
    ("services.title", "השירותים שלי"),
    ("services.subtitle", "שירותי חישוב כמויות ובניית אומדנים מקצועיים"),
    ("services.items.quantities.title", "חישוב כמויות מדויק"),
    ("services.items.quantities.description", "חישוב כמויות מפורט לפי תוכניות, מפרטים וכתבי כמויות. כל כמות מוצמדת לסקיצה – החישוב לכל פרקי הענף."),
    ("services.items.estimates.title", "בניית אומדנים תחרותיים"),
    ("services.items.estimates.description", "בניית אומדנים מדויקים למכרזים, כולל חלופות – נועד למקסם סיכויי זכייה ושמירה על רווחיות."),
    ("services.items.documentation.title", "הגשה מקצועית"),
    ("services.items.documentation.description", "הגשת סקיצות מסודרות וטבלאות חישוב. קובצי Excel, סקיצות בפורמט AutoCad ו- PDF ותיוג ברור לכל סעיף בפרויקט."),
    ("services.items.accounting.title", "ליווי קבלנים והתחשבנות חודשית"),
    ("services.items.accounting.description", "התחשבנות חודשית מסודרת מול הפיקוח והקבלן בשטח. איתור סעיפים חריגים לטובת הקבלן ובקרה תקציבית חכמה."),
    ("projects.title", "תחומי ההתמחות שלי בפרויקטים הנדסיים"),
    ("projects.subtitle", "שליטה בפרויקטים מגוונים בענף הבנייה והתשתיות"),
    ("projects.viewProject", "צפה בפרטים"),
    ("projects.technologies", "כלים וטכנולוגיות"),
    ("projects.more", "נוספים"),
    ("projects.close", "סגור"),
    ("contact.title", "בואו נתחיל לעבוד"),
    ("contact.subtitle", "מוזמנים ליצור קשר לקבלת הצעת מחיר והתייעצות מקצועית"),
    ("contact.form.name", "שם מלא"),
    ("contact.form.email", "כתובת אימייל"),
    ("contact.form.phone", "מספר טלפון"),
    ("contact.form.project", "סוג פרויקט"),
    ("contact.form.message", "פרטי הפרויקט"),
    ("contact.form.send", "שלח הודעה"),
    ("contact.form.sending", "שולח..."),
    ("contact.form.selectProject", "בחר סוג פרויקט"),
    ("contact.projectTypes.quantities", "חישוב כמויות"),
    ("contact.projectTypes.estimates", "בניית אומדן"),
    ("contact.projectTypes.accounting", "התחשבנות חודשית"),
    ("contact.projectTypes.infrastructure", "פרויקט תשתיות"),
    ("contact.projectTypes.other", "אחר"),
    ("contact.info.phone", "טלפון"),
    ("contact.info.email", "אימייל"),
    ("contact.info.location", "מיקום"),
    ("contact.info.response", "זמן תגובה"),
    ("contact.info.responseText", "מענה מהיר ושירות אישי"),
    ("contact.success.title", "ההודעה נשלחה בהצלחה!"),
    ("contact.success.text", "תודה שפנית. אחזור אליך תוך 24 שעות."),
    ("contact.success.again", "שלח הודעה נוספת"),
    ("contact.error.title", "שליחת ההודעה נכשלה"),
    ("contact.error.mailto", "שלח באימייל במקום"),
    ("contact.validation.name", "נא להזין שם"),
    ("contact.validation.email", "נא להזין כתובת אימייל תקינה"),
    ("contact.validation.phone", "מספר הטלפון אינו תקין"),
    ("contact.validation.message", "נא לתאר את הפרויקט"),
    ("footer.brand", "נ.ס. שירותי הנדסה"),
    ("footer.role", "מהנדס אזרחי מוסמך"),
    ("footer.rights", "כל הזכויות שמורות."),
    ("footer.motto", "הנדסה מדויקת לעתיד"),
    ("scrollTop", "חזרה למעלה"),
    ("notFound.title", "הדף לא נמצא"),
    ("notFound.back", "חזרה לדף הבית"),
];

const ENGLISH: &[(&str, &str)] = &[
    ("navigation.home", "Home"),
    ("navigation.services", "Services"),
    ("navigation.projects", "Projects"),
    ("navigation.contact", "Contact"),
    ("header.brand", "N.S. Engineering Services"),
    ("header.tagline", "Nizar Samri - Civil Engineer"),
    ("hero.greeting", "Licensed Civil Engineer"),
    ("hero.name", "Nizar Samri"),
    ("hero.title", "Civil Engineer | Quantity Surveyor | Cost Estimator"),
    ("hero.subtitle", "Specialist in cost estimates and quantity take-offs."),
    ("hero.description", "Quantity take-offs and cost estimates for construction and infrastructure projects, from tender through on-site final accounts."),
    ("hero.cta", "View projects"),
    ("hero.contact", "Get a quote"),
    ("services.title", "My Services"),
    ("services.subtitle", "Professional quantity surveying and cost estimating"),
    ("services.items.quantities.title", "Accurate Quantity Take-offs"),
    ("services.items.quantities.description", "Detailed take-offs from drawings, specifications and bills of quantities. Every quantity is tied to a sketch, across all trades."),
    ("services.items.estimates.title", "Competitive Estimates"),
    ("services.items.estimates.description", "Precise tender estimates including alternatives, built to maximise the chance of winning while protecting margins."),
    ("services.items.documentation.title", "Professional Deliverables"),
    ("services.items.documentation.description", "Organised sketches and calculation sheets: Excel workbooks, AutoCAD and PDF drawings, with every item clearly labelled."),
    ("services.items.accounting.title", "Contractor Support & Monthly Accounts"),
    ("services.items.accounting.description", "Orderly monthly accounts with supervision and the site contractor. Spotting deviating items in the contractor's favour and smart budget control."),
    ("projects.title", "My Areas of Project Expertise"),
    ("projects.subtitle", "Experience across construction and infrastructure projects"),
    ("projects.viewProject", "View details"),
    ("projects.technologies", "Tools & Technologies"),
    ("projects.more", "more"),
    ("projects.close", "Close"),
    ("contact.title", "Let's Work Together"),
    ("contact.subtitle", "Get in touch for a quote or a professional consultation"),
    ("contact.form.name", "Full name"),
    ("contact.form.email", "Email address"),
    ("contact.form.phone", "Phone number"),
    ("contact.form.project", "Project type"),
    ("contact.form.message", "Project details"),
    ("contact.form.send", "Send message"),
    ("contact.form.sending", "Sending..."),
    ("contact.form.selectProject", "Select project type"),
    ("contact.projectTypes.quantities", "Quantity take-off"),
    ("contact.projectTypes.estimates", "Cost estimate"),
    ("contact.projectTypes.accounting", "Monthly accounts"),
    ("contact.projectTypes.infrastructure", "Infrastructure project"),
    ("contact.projectTypes.other", "Other"),
    ("contact.info.phone", "Phone"),
    ("contact.info.email", "Email"),
    ("contact.info.location", "Location"),
    ("contact.info.response", "Response time"),
    ("contact.info.responseText", "Fast replies and personal service"),
    ("contact.success.title", "Message Sent Successfully!"),
    ("contact.success.text", "Thank you for reaching out. I'll get back to you within 24 hours."),
    ("contact.success.again", "Send Another Message"),
    ("contact.error.title", "The message could not be sent"),
    ("contact.error.mailto", "Send by email instead"),
    ("contact.validation.name", "Please enter your name"),
    ("contact.validation.email", "Please enter a valid email address"),
    ("contact.validation.phone", "The phone number looks invalid"),
    ("contact.validation.message", "Please describe your project"),
    ("footer.brand", "N.S. Engineering Services"),
    ("footer.role", "Licensed Civil Engineer"),
    ("footer.rights", "All rights reserved."),
    ("footer.motto", "Precise engineering for the future"),
    ("scrollTop", "Back to top"),
    ("notFound.title", "Page not found"),
    ("notFound.back", "Back to the home page"),
];

fn load_stored_language() -> Option<Language> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten()
        .and_then(|code| Language::from_code(&code))
}

fn store_language(lang: Language) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, lang.code());
        }
    }
}

fn apply_document_language(lang: Language) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("dir", lang.dir());
        let _ = root.set_attribute("lang", lang.code());
    }
}

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub lang: Language,
    pub toggle: Callback<()>,
}

impl LanguageContext {
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        t(self.lang, key)
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or(LanguageContext {
        lang: Language::default(),
        toggle: Callback::noop(),
    })
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let lang = use_state(|| load_stored_language().unwrap_or_default());

    use_effect_with_deps(
        move |lang| {
            apply_document_language(*lang);
            || ()
        },
        *lang,
    );

    let toggle = {
        let lang = lang.clone();
        Callback::from(move |_| {
            let next = lang.toggled();
            log::info!("Switching language to {}", next.code());
            store_language(next);
            lang.set(next);
        })
    };

    let context = LanguageContext { lang: *lang, toggle };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Language::En, "hero.missing"), "hero.missing");
        assert_eq!(t(Language::He, "navigation"), "navigation");
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        for (key, _) in HEBREW {
            assert!(lookup(ENGLISH, key).is_some(), "{key} missing in english");
        }
        for (key, _) in ENGLISH {
            assert!(lookup(HEBREW, key).is_some(), "{key} missing in hebrew");
        }
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        for table in [HEBREW, ENGLISH] {
            let mut keys: Vec<&str> = table.iter().map(|(key, _)| *key).collect();
            keys.sort_unstable();
            let total = keys.len();
            keys.dedup();
            assert_eq!(keys.len(), total);
        }
    }

    #[test]
    fn lookup_uses_the_active_language() {
        assert_eq!(t(Language::He, "navigation.home"), "בית");
        assert_ne!(t(Language::En, "navigation.home"), "בית");
    }

    #[test]
    fn hebrew_is_default_and_rtl() {
        let lang = Language::default();
        assert_eq!(lang, Language::He);
        assert_eq!(lang.dir(), "rtl");
        assert_eq!(lang.toggled().dir(), "ltr");
        assert_eq!(Language::from_code(lang.toggled().code()), Some(Language::En));
    }
}
