//! Edit screen for a single category.
//!
//! The editor owns its form state and every background task it starts: the
//! fetch for the current id, the save request and the post-save redirect
//! timer. Dropping the editor (navigating away) aborts all of them.
//! Transitions return [`Effect`]s that the app shell applies, so the editor
//! never touches routing or banners directly.

use std::time::Duration;

use api_types::category::{CategoryDto, CategoryRequest};

use super::{
    banner::BannerKind,
    event::{AppEvent, EventSender, deliver},
    messages,
    route::Route,
    tasks::{TaskHandle, TaskScope, next_ticket},
};
use crate::client::{CategoryService, ClientError};

pub const LOAD_ERROR_TTL: Duration = Duration::from_secs(4);
pub const SUBMIT_ERROR_TTL: Duration = Duration::from_secs(3);
pub const SUCCESS_TTL: Duration = Duration::from_secs(3);
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Editing,
    Submitting,
    /// Saved; waiting for the redirect.
    Done,
    /// Load failed; the app is navigating away.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Nome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: Field,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub nome: String,
}

impl CategoryForm {
    pub fn apply(&mut self, change: FieldChange) {
        match change.field {
            Field::Nome => self.nome = change.value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Nome => &self.nome,
        }
    }
}

/// Work the app shell performs on behalf of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Banner {
        kind: BannerKind,
        message: String,
        ttl: Duration,
    },
    Navigate(Route),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    New,
    Existing(i64),
    Invalid(String),
}

fn parse_target(raw: Option<&str>) -> Target {
    match raw.map(str::trim) {
        None | Some("") => Target::New,
        Some(raw) => raw
            .parse()
            .map(Target::Existing)
            .unwrap_or_else(|_| Target::Invalid(raw.to_string())),
    }
}

fn load_failure(message: String) -> Vec<Effect> {
    vec![
        Effect::Banner {
            kind: BannerKind::Error,
            message,
            ttl: LOAD_ERROR_TTL,
        },
        Effect::Navigate(Route::Categories),
    ]
}

#[derive(Debug)]
pub struct CategoryEditor {
    categoria_id: Option<String>,
    target: Target,
    loaded: Option<CategoryDto>,
    form: CategoryForm,
    phase: Phase,
    load_ticket: Option<u64>,
    load_task: Option<TaskHandle>,
    save_ticket: Option<u64>,
    tasks: TaskScope,
}

impl CategoryEditor {
    /// Creates the editor and starts loading `categoria_id`, if any.
    pub fn mount<S: CategoryService>(
        categoria_id: Option<String>,
        service: &S,
        events: &EventSender,
    ) -> (Self, Vec<Effect>) {
        let mut editor = Self {
            categoria_id: None,
            target: Target::New,
            loaded: None,
            form: CategoryForm::default(),
            phase: Phase::Editing,
            load_ticket: None,
            load_task: None,
            save_ticket: None,
            tasks: TaskScope::default(),
        };
        let effects = editor.load(categoria_id, service, events);
        (editor, effects)
    }

    /// Points the editor at another category. Unchanged ids are ignored.
    pub fn set_categoria_id<S: CategoryService>(
        &mut self,
        categoria_id: Option<String>,
        service: &S,
        events: &EventSender,
    ) -> Vec<Effect> {
        if categoria_id == self.categoria_id {
            return Vec::new();
        }
        self.load(categoria_id, service, events)
    }

    fn load<S: CategoryService>(
        &mut self,
        categoria_id: Option<String>,
        service: &S,
        events: &EventSender,
    ) -> Vec<Effect> {
        self.target = parse_target(categoria_id.as_deref());
        self.categoria_id = categoria_id;
        // Dropping the handle aborts a fetch still running for the old id.
        self.load_task = None;
        self.load_ticket = None;
        // A save still in flight belongs to the old id; its result is ignored.
        self.save_ticket = None;

        match &self.target {
            Target::New => {
                self.phase = Phase::Editing;
                Vec::new()
            }
            Target::Invalid(raw) => {
                tracing::warn!(categoria_id = %raw, "category id is not a number");
                self.phase = Phase::Failed;
                load_failure(messages::LOAD_FALLBACK.to_string())
            }
            Target::Existing(id) => {
                let id = *id;
                let ticket = next_ticket();
                let service = service.clone();
                let events = events.clone();
                tracing::debug!(id, ticket, "loading category");

                self.phase = Phase::Loading;
                self.load_ticket = Some(ticket);
                self.load_task = Some(TaskHandle::spawn(async move {
                    let result = service.find_by_id(id).await;
                    deliver(&events, AppEvent::CategoryLoaded { ticket, result });
                }));
                Vec::new()
            }
        }
    }

    pub fn on_loaded(
        &mut self,
        ticket: u64,
        result: Result<CategoryDto, ClientError>,
    ) -> Vec<Effect> {
        if self.load_ticket != Some(ticket) {
            tracing::debug!(ticket, "discarding superseded category load");
            return Vec::new();
        }
        self.load_ticket = None;
        self.load_task = None;

        match result {
            Ok(category) => {
                self.form.nome = category.nome.clone();
                self.loaded = Some(category);
                self.phase = Phase::Editing;
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("failed to load category: {err}");
                self.phase = Phase::Failed;
                load_failure(messages::load_error(&err))
            }
        }
    }

    pub fn change(&mut self, change: FieldChange) {
        self.form.apply(change);
    }

    pub fn push_char(&mut self, ch: char) {
        let mut value = self.form.nome.clone();
        value.push(ch);
        self.change(FieldChange {
            field: Field::Nome,
            value,
        });
    }

    pub fn pop_char(&mut self) {
        let mut value = self.form.nome.clone();
        value.pop();
        self.change(FieldChange {
            field: Field::Nome,
            value,
        });
    }

    /// Sends the form to the service. Returns `false` when nothing was sent.
    pub fn submit<S: CategoryService>(&mut self, service: &S, events: &EventSender) -> bool {
        if self.phase != Phase::Editing {
            tracing::debug!(phase = ?self.phase, "submit ignored");
            return false;
        }
        let id = match &self.target {
            Target::Existing(id) => Some(*id),
            Target::New => None,
            Target::Invalid(_) => return false,
        };

        let request = CategoryRequest::new(id, self.form.nome.clone());
        let ticket = next_ticket();
        let service = service.clone();
        let events = events.clone();
        tracing::debug!(?id, ticket, "saving category");

        self.phase = Phase::Submitting;
        self.save_ticket = Some(ticket);
        self.tasks.spawn(async move {
            let result = service.update(request).await;
            deliver(&events, AppEvent::CategorySaved { ticket, result });
        });
        true
    }

    pub fn on_saved(
        &mut self,
        ticket: u64,
        result: Result<(), ClientError>,
        events: &EventSender,
    ) -> Vec<Effect> {
        if self.save_ticket != Some(ticket) {
            return Vec::new();
        }

        match result {
            Ok(()) => {
                self.phase = Phase::Done;
                self.tasks
                    .schedule(REDIRECT_DELAY, events, AppEvent::RedirectDue { ticket });
                vec![Effect::Banner {
                    kind: BannerKind::Success,
                    message: messages::UPDATE_SUCCESS.to_string(),
                    ttl: SUCCESS_TTL,
                }]
            }
            Err(err) => {
                tracing::warn!("failed to save category: {err}");
                self.save_ticket = None;
                self.phase = Phase::Editing;
                vec![Effect::Banner {
                    kind: BannerKind::Error,
                    message: messages::submit_error(&err),
                    ttl: SUBMIT_ERROR_TTL,
                }]
            }
        }
    }

    pub fn on_redirect_due(&mut self, ticket: u64) -> Vec<Effect> {
        if self.phase == Phase::Done && self.save_ticket == Some(ticket) {
            return vec![Effect::Navigate(Route::Categories)];
        }
        Vec::new()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &CategoryForm {
        &self.form
    }

    pub fn loaded(&self) -> Option<&CategoryDto> {
        self.loaded.as_ref()
    }

    pub fn is_new(&self) -> bool {
        self.target == Target::New
    }
}
