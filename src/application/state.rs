//! Application state management for the concierge terminal client.
//!
//! This module contains the main application state: the active page, the
//! form submission workflows, fetched backend collections, and the queue
//! of outbound network commands the event loop dispatches.

use crate::domain::{
    ContactRequest, FieldKind, FieldSpec, FormState, MembershipTier, NutriMealPlan,
    ServiceBookingRequest, Urgency, BOOKING_FIELDS, CONTACT_FIELDS,
};
use std::time::{Duration, Instant};

/// Delay between a successful booking and the redirect back to Home.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Rows of body scroll after which the header collapses to its compact form.
pub const SCROLL_HEADER_THRESHOLD: u16 = 3;

/// The pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Membership,
    NutriMeal,
    Contact,
    Book,
}

impl Page {
    /// Navigation order, matching the header left to right.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Services,
        Page::Membership,
        Page::NutriMeal,
        Page::Contact,
        Page::Book,
    ];

    /// Title shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Services",
            Page::Membership => "Membership",
            Page::NutriMeal => "NutriMeal",
            Page::Contact => "Contact",
            Page::Book => "Book",
        }
    }

    fn index(self) -> usize {
        Page::ALL.iter().position(|page| *page == self).unwrap_or(0)
    }

    /// The page after this one in navigation order, wrapping around.
    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    /// The page before this one in navigation order, wrapping around.
    pub fn previous(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Represents the current input mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal browsing - navigation, scrolling, and focus movement
    Browse,
    /// A form field is being edited through the input buffer
    EditField,
}

/// Lifecycle of one form submission.
///
/// `Idle` is initial. Entering `Submitting` disables edits and re-submission
/// until the network write resolves to `Success` or `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// A network command queued by the state machine for the event loop to
/// dispatch off-thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    FetchTiers { seq: u64 },
    FetchMealPlans { seq: u64 },
    SubmitContact { seq: u64, request: ContactRequest },
    SubmitBooking { seq: u64, request: ServiceBookingRequest },
}

/// Completion event delivered back to the event loop when a network call
/// resolves.
///
/// Each event carries the page-instance sequence number it was issued
/// under; events from a departed instance are discarded on arrival.
#[derive(Debug)]
pub enum NetEvent {
    TiersLoaded { seq: u64, result: Result<Vec<MembershipTier>, String> },
    MealPlansLoaded { seq: u64, result: Result<Vec<NutriMealPlan>, String> },
    ContactResolved { seq: u64, result: Result<(), String> },
    BookingResolved { seq: u64, result: Result<(), String> },
}

/// Main application state for the terminal client.
///
/// Holds everything needed to render the active page and manage the
/// contact and booking workflows. Each navigation starts a fresh page
/// instance: forms reset, collections are refetched, and responses still
/// in flight for the previous instance are discarded.
///
/// # Examples
///
/// ```
/// use concierge::application::{App, Page, SubmissionStatus};
///
/// let mut app = App::new();
/// assert_eq!(app.page, Page::Home);
/// assert_eq!(app.contact_status, SubmissionStatus::Idle);
/// ```
#[derive(Debug)]
pub struct App {
    /// The page currently shown inside the shell
    pub page: Page,
    /// Current input mode
    pub mode: AppMode,
    /// Membership tiers fetched for the current page instance
    pub tiers: Vec<MembershipTier>,
    /// NutriMeal plans fetched for the current page instance
    pub meal_plans: Vec<NutriMealPlan>,
    /// Field mapping for the contact form
    pub contact_form: FormState,
    /// Workflow status of the contact form
    pub contact_status: SubmissionStatus,
    /// Field mapping for the booking form
    pub booking_form: FormState,
    /// Workflow status of the booking form
    pub booking_status: SubmissionStatus,
    /// Focus index on form pages; the index one past the last field is the
    /// submit action
    pub focused_field: usize,
    /// Input buffer for the field being edited
    pub input: String,
    /// Cursor position within the input buffer
    pub cursor_position: usize,
    /// Vertical scroll offset of the page body
    pub scroll: u16,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// When set, navigate back to Home once this instant passes
    redirect_at: Option<Instant>,
    /// Sequence number of the current page instance
    seq: u64,
    /// Network commands waiting for the event loop to dispatch
    outbound: Vec<Outbound>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the initial state: Home page, idle forms, and the Home
    /// page's tier fetch already queued.
    pub fn new() -> Self {
        let mut app = Self {
            page: Page::Home,
            mode: AppMode::Browse,
            tiers: Vec::new(),
            meal_plans: Vec::new(),
            contact_form: FormState::new(CONTACT_FIELDS),
            contact_status: SubmissionStatus::Idle,
            booking_form: FormState::new(BOOKING_FIELDS),
            booking_status: SubmissionStatus::Idle,
            focused_field: 0,
            input: String::new(),
            cursor_position: 0,
            scroll: 0,
            status_message: None,
            redirect_at: None,
            seq: 0,
            outbound: Vec::new(),
        };
        app.queue_page_fetches();
        app
    }

    /// Switches to another page, starting a fresh instance of it.
    ///
    /// The departed instance is torn down: forms and statuses reset, fetched
    /// collections are dropped, and the sequence number advances so any
    /// response still in flight is discarded when it arrives.
    pub fn navigate_to(&mut self, page: Page) {
        if page == self.page {
            return;
        }

        self.page = page;
        self.mode = AppMode::Browse;
        self.tiers.clear();
        self.meal_plans.clear();
        self.contact_form.clear();
        self.contact_status = SubmissionStatus::Idle;
        self.booking_form.clear();
        self.booking_status = SubmissionStatus::Idle;
        self.focused_field = 0;
        self.input.clear();
        self.cursor_position = 0;
        self.scroll = 0;
        self.status_message = None;
        self.redirect_at = None;
        self.seq += 1;
        self.queue_page_fetches();
    }

    /// Queues the reads the current page issues on entry.
    fn queue_page_fetches(&mut self) {
        match self.page {
            Page::Home | Page::Membership => {
                self.outbound.push(Outbound::FetchTiers { seq: self.seq });
            }
            Page::NutriMeal => {
                self.outbound.push(Outbound::FetchMealPlans { seq: self.seq });
            }
            Page::Services | Page::Contact | Page::Book => {}
        }
    }

    /// Takes the queued network commands, leaving the queue empty.
    pub fn drain_outbound(&mut self) -> Vec<Outbound> {
        std::mem::take(&mut self.outbound)
    }

    /// The form shown on the current page, if any.
    pub fn current_form(&self) -> Option<&FormState> {
        match self.page {
            Page::Contact => Some(&self.contact_form),
            Page::Book => Some(&self.booking_form),
            _ => None,
        }
    }

    fn current_form_mut(&mut self) -> Option<&mut FormState> {
        match self.page {
            Page::Contact => Some(&mut self.contact_form),
            Page::Book => Some(&mut self.booking_form),
            _ => None,
        }
    }

    /// Workflow status of the current page's form, if any.
    pub fn current_status(&self) -> Option<SubmissionStatus> {
        match self.page {
            Page::Contact => Some(self.contact_status),
            Page::Book => Some(self.booking_status),
            _ => None,
        }
    }

    /// Whether the current page's form accepts edits and submission.
    ///
    /// A form refuses input while its submission is in flight, and the
    /// booking form stays locked during its success confirmation until the
    /// redirect fires.
    pub fn form_editable(&self) -> bool {
        match self.current_status() {
            Some(SubmissionStatus::Submitting) => false,
            Some(SubmissionStatus::Success) => self.page != Page::Book,
            Some(_) => true,
            None => false,
        }
    }

    /// The field declaration under focus, or None when the submit action
    /// is focused.
    pub fn focused_spec(&self) -> Option<&FieldSpec> {
        let form = self.current_form()?;
        form.fields().get(self.focused_field)
    }

    /// True when focus sits on the submit action below the fields.
    pub fn is_submit_focused(&self) -> bool {
        match self.current_form() {
            Some(form) => self.focused_field == form.fields().len(),
            None => false,
        }
    }

    /// Moves focus down one field, stopping at the submit action.
    pub fn focus_next(&mut self) {
        if let Some(form) = self.current_form() {
            if self.focused_field < form.fields().len() {
                self.focused_field += 1;
            }
        }
    }

    /// Moves focus up one field.
    pub fn focus_previous(&mut self) {
        if self.focused_field > 0 {
            self.focused_field -= 1;
        }
    }

    /// Switches to edit mode for the focused text field.
    ///
    /// Loads the field's current value into the input buffer with the
    /// cursor at the end. Select fields cycle instead of editing, and a
    /// non-editable form refuses entirely.
    pub fn start_field_edit(&mut self) {
        if !self.form_editable() {
            return;
        }
        let Some(spec) = self.focused_spec() else {
            return;
        };
        if matches!(spec.kind, FieldKind::Select(_)) {
            return;
        }

        let name = spec.name;
        let value = self
            .current_form()
            .map(|form| form.value(name).to_string())
            .unwrap_or_default();
        self.input = value;
        self.cursor_position = self.input.len();
        self.mode = AppMode::EditField;
        self.status_message = None;
    }

    /// Commits the input buffer into the focused field's mapping entry and
    /// returns to browse mode.
    pub fn finish_field_edit(&mut self) {
        if let Some(spec) = self.focused_spec() {
            let name = spec.name;
            let value = std::mem::take(&mut self.input);
            if let Some(form) = self.current_form_mut() {
                if let Err(err) = form.set_value(name, value) {
                    self.status_message = Some(err.to_string());
                }
            }
        }
        self.mode = AppMode::Browse;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Abandons the edit without touching the mapping.
    pub fn cancel_field_edit(&mut self) {
        self.mode = AppMode::Browse;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Advances the focused select field to its next option.
    pub fn cycle_focused_select(&mut self) {
        if !self.form_editable() {
            return;
        }
        let Some(spec) = self.focused_spec() else {
            return;
        };
        if !matches!(spec.kind, FieldKind::Select(_)) {
            return;
        }

        let name = spec.name;
        if let Some(form) = self.current_form_mut() {
            if let Err(err) = form.cycle_select(name) {
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Starts the current page's submission workflow.
    ///
    /// Refused while a submission is already in flight. When a required
    /// field is still empty the submission never starts; the missing labels
    /// are reported instead, mirroring declarative form validation.
    pub fn submit_current_form(&mut self) {
        match self.page {
            Page::Contact => self.submit_contact(),
            Page::Book => self.submit_booking(),
            _ => {}
        }
    }

    fn submit_contact(&mut self) {
        if self.contact_status == SubmissionStatus::Submitting {
            return;
        }
        let missing = self.contact_form.missing_required();
        if !missing.is_empty() {
            self.status_message = Some(format!("Required: {}", missing.join(", ")));
            return;
        }

        let request = self.contact_request();
        self.contact_status = SubmissionStatus::Submitting;
        self.status_message = None;
        self.outbound.push(Outbound::SubmitContact { seq: self.seq, request });
    }

    fn submit_booking(&mut self) {
        // Success locks the booking form until the redirect tears it down
        if matches!(
            self.booking_status,
            SubmissionStatus::Submitting | SubmissionStatus::Success
        ) {
            return;
        }
        let missing = self.booking_form.missing_required();
        if !missing.is_empty() {
            self.status_message = Some(format!("Required: {}", missing.join(", ")));
            return;
        }

        let request = self.booking_request();
        self.booking_status = SubmissionStatus::Submitting;
        self.status_message = None;
        self.outbound.push(Outbound::SubmitBooking { seq: self.seq, request });
    }

    /// Builds the contact payload from the form mapping.
    pub fn contact_request(&self) -> ContactRequest {
        let form = &self.contact_form;
        ContactRequest {
            name: form.value("name").to_string(),
            email: form.value("email").to_string(),
            phone: optional(form.value("phone")),
            service_type: form.value("service_type").to_string(),
            message: form.value("message").to_string(),
        }
    }

    /// Builds the booking payload from the form mapping.
    ///
    /// An empty urgency field resolves to `normal` here rather than in the
    /// mapping, which stays all-empty until edited.
    pub fn booking_request(&self) -> ServiceBookingRequest {
        let form = &self.booking_form;
        ServiceBookingRequest {
            client_name: form.value("client_name").to_string(),
            client_email: form.value("client_email").to_string(),
            client_phone: optional(form.value("client_phone")),
            service_category: form.value("service_category").to_string(),
            service_details: form.value("service_details").to_string(),
            preferred_date: form.value("preferred_date").to_string(),
            preferred_time: form.value("preferred_time").to_string(),
            urgency: Urgency::parse(form.value("urgency")),
        }
    }

    /// Applies a network completion event to the state.
    ///
    /// Events tagged with a sequence number other than the current page
    /// instance's are discarded: their target view no longer exists.
    /// Failures never escalate past this boundary; reads leave their
    /// collection empty and submissions move to the error status.
    pub fn apply_net_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::TiersLoaded { seq, result } => {
                if seq != self.seq {
                    tracing::debug!(seq, "discarding stale tier response");
                    return;
                }
                match result {
                    Ok(tiers) => self.tiers = tiers,
                    Err(err) => tracing::error!("failed to load membership tiers: {err}"),
                }
            }
            NetEvent::MealPlansLoaded { seq, result } => {
                if seq != self.seq {
                    tracing::debug!(seq, "discarding stale meal plan response");
                    return;
                }
                match result {
                    Ok(plans) => self.meal_plans = plans,
                    Err(err) => tracing::error!("failed to load meal plans: {err}"),
                }
            }
            NetEvent::ContactResolved { seq, result } => {
                if seq != self.seq || self.contact_status != SubmissionStatus::Submitting {
                    tracing::debug!(seq, "discarding contact response without a waiting form");
                    return;
                }
                match result {
                    Ok(()) => {
                        self.contact_status = SubmissionStatus::Success;
                        self.contact_form.clear();
                    }
                    Err(err) => {
                        tracing::error!("contact submission failed: {err}");
                        self.contact_status = SubmissionStatus::Error;
                    }
                }
            }
            NetEvent::BookingResolved { seq, result } => {
                if seq != self.seq || self.booking_status != SubmissionStatus::Submitting {
                    tracing::debug!(seq, "discarding booking response without a waiting form");
                    return;
                }
                match result {
                    Ok(()) => {
                        self.booking_status = SubmissionStatus::Success;
                        self.redirect_at = Some(Instant::now() + REDIRECT_DELAY);
                    }
                    Err(err) => {
                        tracing::error!("booking submission failed: {err}");
                        self.booking_status = SubmissionStatus::Error;
                    }
                }
            }
        }
    }

    /// Advances time-driven behavior.
    ///
    /// Fires the post-booking redirect once its deadline passes. The
    /// deadline is consumed before navigating, so repeated ticks cannot
    /// navigate twice.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.redirect_at {
            if now >= deadline {
                self.redirect_at = None;
                self.navigate_to(Page::Home);
            }
        }
    }

    /// Scrolls the page body, clamping at the top.
    pub fn scroll_by(&mut self, delta: i16) {
        if delta >= 0 {
            self.scroll = self.scroll.saturating_add(delta as u16);
        } else {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        }
    }

    /// Whether the header should render in its compact scrolled form.
    pub fn header_compact(&self) -> bool {
        self.scroll > SCROLL_HEADER_THRESHOLD
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
