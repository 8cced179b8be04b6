//! Page rendering for the concierge client.
//!
//! Each page is composed from the shared shell: static marketing copy,
//! the tier and meal-plan cards fed by the fetched collections, and the
//! contact and booking forms driven by the application state.

use crate::application::{App, AppMode, Page, SubmissionStatus};
use crate::domain::{FieldKind, FormState, MembershipTier, NutriMealPlan, Urgency};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Banner shown in place after a successful contact submission.
pub const CONTACT_SUCCESS_TEXT: &str = "Thank you! We'll be in touch within 24 hours.";

/// The single generic failure banner; transport and server failures are
/// not distinguished.
pub const SUBMIT_ERROR_TEXT: &str = "Something went wrong. Please try again.";

const POPULAR_BADGE: &str = "★ Most Popular";

const SERVICE_OFFERINGS: &[(&str, &str, &[&str])] = &[
    (
        "Elite Shopping",
        "Personal shopping for fashion, gifts, and luxury items with impeccable taste.",
        &["Fashion consultation", "Gift sourcing", "Luxury item procurement", "Style coordination"],
    ),
    (
        "Errands & Drop-offs",
        "Package delivery, document handling, and all your daily errands.",
        &["Package delivery", "Document handling", "Appointment scheduling", "Property maintenance coordination"],
    ),
    (
        "Student Assistance",
        "Academic support, campus errands, and study-life balance solutions.",
        &["Campus errands", "Study material organization", "Meal planning", "Administrative support"],
    ),
    (
        "NutriMeal Program",
        "Daily delivery of nutritionist-designed, gourmet healthy meals.",
        &["Personalized meal plans", "Daily fresh delivery", "Nutritional tracking", "Dietary accommodation"],
    ),
];

pub fn render_page(f: &mut Frame, app: &App, area: Rect) {
    match app.page {
        Page::Home => render_home(f, app, area),
        Page::Services => render_services(f, app, area),
        Page::Membership => render_membership(f, app, area),
        Page::NutriMeal => render_nutrimeal(f, app, area),
        Page::Contact => render_contact(f, app, area),
        Page::Book => render_book(f, app, area),
    }
}

/// The textual content of one membership tier card, top to bottom.
///
/// Kept as plain strings so the card contract stays independent of
/// styling: an optional popularity badge, the tier name, the price, the
/// billing line, then one line per feature.
pub fn tier_card_lines(tier: &MembershipTier) -> Vec<String> {
    let mut lines = Vec::new();
    if tier.is_popular {
        lines.push(POPULAR_BADGE.to_string());
    }
    lines.push(tier.name.clone());
    lines.push(format!("${}", tier.price));
    lines.push(format!("{} per {}", tier.currency, tier.billing_cycle));
    for feature in &tier.features {
        lines.push(format!("✓ {}", feature));
    }
    lines
}

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        heading("Your Time is Luxury"),
        Line::from("Let Us Handle the Rest."),
        Line::from(""),
        Line::from("High-end, on-demand personal concierge service for busy professionals,"),
        Line::from("students, and discerning individuals who value their time above all else."),
        Line::from(""),
        heading("Premium Services"),
    ];
    for (title, description, _) in SERVICE_OFFERINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", title), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(*description),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Membership Tiers"));
    for tier in &app.tiers {
        let mut spans = vec![Span::raw(format!(
            "  {}: ${} {}/{}",
            tier.name, tier.price, tier.currency, tier.billing_cycle
        ))];
        if tier.is_popular {
            spans.push(Span::styled(
                format!("  {}", POPULAR_BADGE),
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(heading("What Our Clients Say"));
    lines.push(Line::from("  \"Nicholas Concierge has transformed my work-life balance.\" - Sarah, banker"));
    lines.push(Line::from("  \"Every minute counts; the student programme keeps me organized.\" - Marcus, student"));
    lines.push(Line::from("  \"The 24/7 support is invaluable for my unpredictable schedule.\" - Priya, physician"));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Ready to reclaim your time? Press 6 to book a concierge.",
        Style::default().fg(Color::Yellow),
    )));

    render_scrollable(f, app, area, "Home", lines);
}

fn render_services(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        heading("Our Services"),
        Line::from("Comprehensive services designed to elevate your lifestyle and maximize your time."),
        Line::from(""),
    ];
    for (title, description, features) in SERVICE_OFFERINGS {
        lines.push(Line::from(Span::styled(
            *title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(*description));
        for feature in *features {
            lines.push(Line::from(format!("  ✓ {}", feature)));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Press 6 to request any of these services."));

    render_scrollable(f, app, area, "Services", lines);
}

fn render_membership(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let intro = Paragraph::new(vec![
        heading("Membership Tiers"),
        Line::from("Choose the level of service that matches your lifestyle."),
    ]);
    f.render_widget(intro, chunks[0]);

    render_tier_cards(f, chunks[1], &app.tiers);

    let pay_as_you_go = Paragraph::new(vec![
        Line::from(Span::styled("Pay-As-You-Go", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("Not ready for a membership? Access our services on-demand:"),
        Line::from("base rate plus hourly charges, no commitment."),
    ])
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(pay_as_you_go, chunks[2]);
}

fn render_tier_cards(f: &mut Frame, area: Rect, tiers: &[MembershipTier]) {
    if tiers.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, tiers.len() as u32); tiers.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (tier, column) in tiers.iter().zip(columns.iter()) {
        let border_style = if tier.is_popular {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let body: Vec<Line> = tier_card_lines(tier)
            .into_iter()
            .map(|text| {
                if text == POPULAR_BADGE {
                    Line::from(Span::styled(text, Style::default().fg(Color::Yellow)))
                } else if text.starts_with('$') {
                    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
                } else {
                    Line::from(text)
                }
            })
            .collect();
        let card = Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        f.render_widget(card, *column);
    }
}

fn render_nutrimeal(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        heading("NutriMeal Program"),
        Line::from("Nutritionist-designed meals delivered daily."),
        Line::from(""),
    ];
    for plan in &app.meal_plans {
        lines.extend(meal_plan_lines(plan));
        lines.push(Line::from(""));
    }

    render_scrollable(f, app, area, "NutriMeal", lines);
}

fn meal_plan_lines(plan: &NutriMealPlan) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            plan.name.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(plan.description.as_str()),
        Line::from(Span::styled(
            format!("${} per day", plan.price_per_day),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Ingredients: {}", plan.ingredients.join(", "))),
    ];
    if !plan.nutritional_info.is_empty() {
        let mut entries: Vec<String> = plan
            .nutritional_info
            .iter()
            .map(|(key, value)| format!("{}: {}", key, display_json(value)))
            .collect();
        entries.sort();
        lines.push(Line::from(entries.join("  ")));
    }
    lines
}

fn display_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn render_contact(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        heading("Contact Us"),
        Line::from("Ready to experience concierge service? Send us a message."),
        Line::from(""),
    ];
    match app.contact_status {
        SubmissionStatus::Success => {
            lines.push(Line::from(Span::styled(
                CONTACT_SUCCESS_TEXT,
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(""));
        }
        SubmissionStatus::Error => {
            lines.push(Line::from(Span::styled(
                SUBMIT_ERROR_TEXT,
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }
        _ => {}
    }

    lines.extend(form_lines(app, &app.contact_form, app.contact_status, "Send Message", "Sending..."));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Get in Touch", Style::default().add_modifier(Modifier::BOLD))));
    lines.push(Line::from("  Phone: +1 (868) 123-4567"));
    lines.push(Line::from("  Email: concierge@nicholas.tt"));
    lines.push(Line::from("  Port of Spain, Trinidad"));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Business Hours", Style::default().add_modifier(Modifier::BOLD))));
    lines.push(Line::from("  Monday - Friday    6:00 AM - 11:00 PM"));
    lines.push(Line::from("  Saturday - Sunday  8:00 AM - 10:00 PM"));
    lines.push(Line::from("  Premium members: 24/7 emergency support"));

    render_scrollable(f, app, area, "Contact", lines);
}

fn render_book(f: &mut Frame, app: &App, area: Rect) {
    if app.booking_status == SubmissionStatus::Success {
        let confirmation = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "✓ Request Submitted!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Thank you for choosing Nicholas Concierge. Our team will contact"),
            Line::from("you within 2 hours to confirm your service details."),
            Line::from(""),
            Line::from("Returning to the home page..."),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Book a Concierge"));
        f.render_widget(confirmation, area);
        return;
    }

    let mut lines = vec![
        heading("Book a Concierge"),
        Line::from("Tell us what you need, and we'll take care of the rest."),
        Line::from(""),
    ];
    if app.booking_status == SubmissionStatus::Error {
        lines.push(Line::from(Span::styled(
            SUBMIT_ERROR_TEXT,
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.extend(form_lines(
        app,
        &app.booking_form,
        app.booking_status,
        "Submit Service Request",
        "Submitting Request...",
    ));
    lines.push(Line::from(""));
    lines.push(Line::from("Our team will contact you within 2 hours to confirm details and pricing."));

    render_scrollable(f, app, area, "Book", lines);
}

/// Renders a form's fields plus its submit action as focused-marker lines.
fn form_lines<'a>(
    app: &'a App,
    form: &'a FormState,
    status: SubmissionStatus,
    submit_label: &'a str,
    submitting_label: &'a str,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for (index, spec) in form.fields().iter().enumerate() {
        let focused = app.focused_field == index;
        let editing = focused && app.mode == AppMode::EditField;
        let marker = if focused { "▸ " } else { "  " };

        let display = if editing {
            let mut value = app.input.clone();
            let cursor = app.cursor_position.min(value.len());
            value.insert(cursor, '▏');
            value
        } else {
            let value = form.value(spec.name);
            if value.is_empty() {
                placeholder(spec.kind).to_string()
            } else if spec.name == "urgency" {
                Urgency::parse(value).label().to_string()
            } else {
                value.to_string()
            }
        };

        let required = if spec.required { "*" } else { "" };
        let label_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value_style = if editing {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}{}: ", spec.label, required), label_style),
            Span::styled(display, value_style),
        ]));
    }

    let submit_focused = app.focused_field == form.fields().len();
    let submit_marker = if submit_focused { "▸ " } else { "  " };
    let submit_text = if status == SubmissionStatus::Submitting {
        format!("{}[ {} ]", submit_marker, submitting_label)
    } else {
        format!("{}[ {} ]", submit_marker, submit_label)
    };
    let submit_style = if status == SubmissionStatus::Submitting {
        Style::default().fg(Color::DarkGray)
    } else if submit_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(submit_text, submit_style)));

    lines
}

fn placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Select(_) => "(press Enter to choose)",
        FieldKind::Date => "(YYYY-MM-DD)",
        FieldKind::Time => "(HH:MM)",
        _ => "",
    }
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn render_scrollable(f: &mut Frame, app: &App, area: Rect, title: &str, lines: Vec<Line>) {
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uwi_life() -> MembershipTier {
        MembershipTier {
            id: "student".to_string(),
            name: "UWI Life".to_string(),
            price: 199,
            currency: "TTD".to_string(),
            billing_cycle: "month".to_string(),
            features: vec!["A".to_string(), "B".to_string()],
            is_popular: false,
        }
    }

    #[test]
    fn test_tier_card_shows_name_price_and_features() {
        let lines = tier_card_lines(&uwi_life());

        assert_eq!(lines[0], "UWI Life");
        assert_eq!(lines[1], "$199");
        assert_eq!(lines[2], "TTD per month");
        let features: Vec<&String> = lines.iter().filter(|line| line.starts_with('✓')).collect();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0], "✓ A");
        assert_eq!(features[1], "✓ B");
        assert!(!lines.iter().any(|line| line.contains("Most Popular")));
    }

    #[test]
    fn test_popular_tier_carries_badge_first() {
        let mut tier = uwi_life();
        tier.is_popular = true;

        let lines = tier_card_lines(&tier);

        assert_eq!(lines[0], "★ Most Popular");
        assert_eq!(lines[1], "UWI Life");
    }

    #[test]
    fn test_tier_card_rendering_is_deterministic() {
        // Re-rendering the same collection yields the identical card text
        let first = tier_card_lines(&uwi_life());
        let second = tier_card_lines(&uwi_life());
        assert_eq!(first, second);
    }

    #[test]
    fn test_tier_card_tolerates_empty_feature_list() {
        let mut tier = uwi_life();
        tier.features.clear();

        let lines = tier_card_lines(&tier);
        assert_eq!(lines.len(), 3);
    }
}
