//! UI string lookup.
//!
//! Strings are addressed by `(language, namespace, key)`. Unknown keys fall
//! back to the key itself so a missing translation is visible but harmless.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    De,
}

type Table = &'static [(&'static str, &'static str, &'static str)];

const EN: Table = &[
    ("contact", "title", "Got a project in mind?"),
    ("contact", "subtitle", "Tell us about it and we will get back to you."),
    ("form", "name_label", "Name"),
    ("form", "name_placeholder", "Your name"),
    ("form", "company_label", "Company"),
    ("form", "company_placeholder", "Your company"),
    ("form", "contact_label", "Email"),
    ("form", "contact_placeholder", "Your email address*"),
    ("form", "contact_error", "Please enter a valid email address"),
    ("form", "about_label", "Project"),
    ("form", "about_placeholder", "What is your project about?"),
    ("form", "budget_label", "Budget"),
    ("form", "budget_placeholder", "Move the slider to set your budget"),
    ("form", "budget_min", "min"),
    ("form", "send_button", "Send"),
    ("form", "retry_button", "Sending failed, press Enter to retry"),
    ("form", "submit_failed", "Your message could not be sent"),
    ("form", "key_hints", "Tab next field  ←/→ budget  Ctrl+S send  Esc quit"),
    ("thankyou", "title", "Thank you!"),
    ("thankyou", "paragraph", "We received your message and will reply within two working days."),
    ("thankyou", "link", "/work"),
    ("thankyou", "link_text", "See our work"),
    ("thankyou", "key_hints", "Enter or q to quit"),
];

const DE: Table = &[
    ("contact", "title", "Sie haben ein Projekt?"),
    ("contact", "subtitle", "Erzählen Sie uns davon, wir melden uns bei Ihnen."),
    ("form", "name_label", "Name"),
    ("form", "name_placeholder", "Ihr Name"),
    ("form", "company_label", "Firma"),
    ("form", "company_placeholder", "Ihre Firma"),
    ("form", "contact_label", "E-Mail"),
    ("form", "contact_placeholder", "Ihre E-Mail-Adresse*"),
    ("form", "contact_error", "Bitte geben Sie eine gültige E-Mail-Adresse ein"),
    ("form", "about_label", "Projekt"),
    ("form", "about_placeholder", "Worum geht es in Ihrem Projekt?"),
    ("form", "budget_label", "Budget"),
    ("form", "budget_placeholder", "Schieberegler bewegen, um das Budget festzulegen"),
    ("form", "budget_min", "min"),
    ("form", "send_button", "Senden"),
    ("form", "retry_button", "Senden fehlgeschlagen, Enter zum Wiederholen"),
    ("form", "submit_failed", "Ihre Nachricht konnte nicht gesendet werden"),
    ("form", "key_hints", "Tab nächstes Feld  ←/→ Budget  Strg+S senden  Esc beenden"),
    ("thankyou", "title", "Vielen Dank!"),
    ("thankyou", "paragraph", "Wir haben Ihre Nachricht erhalten und antworten innerhalb von zwei Werktagen."),
    ("thankyou", "link", "/de/work"),
    ("thankyou", "link_text", "Unsere Arbeiten"),
    ("thankyou", "key_hints", "Enter oder q zum Beenden"),
];

fn table(lang: Lang) -> Table {
    match lang {
        Lang::En => EN,
        Lang::De => DE,
    }
}

/// Look up a UI string. Falls back to English, then to `key`.
pub fn translate<'a>(lang: Lang, namespace: &str, key: &'a str) -> &'a str {
    let find = |table: Table| -> Option<&'a str> {
        table
            .iter()
            .find(|(ns, k, _)| *ns == namespace && *k == key)
            .map(|(_, _, text)| *text)
    };
    find(table(lang)).or_else(|| find(EN)).unwrap_or(key)
}
