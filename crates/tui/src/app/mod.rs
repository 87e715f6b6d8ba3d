pub mod banner;
pub mod editor;
pub mod event;
pub mod messages;
pub mod route;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use crossterm::event::{self as term, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::{
    client::CategoryService,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

use self::{
    banner::Banners,
    editor::{CategoryEditor, Effect},
    event::{AppEvent, EventSender},
    route::Route,
    tasks::TaskScope,
};

#[derive(Debug)]
pub struct AppState {
    pub route: Route,
    /// Mounted while `route` is an edit route.
    pub editor: Option<CategoryEditor>,
    pub banners: Banners,
    pub base_url: String,
}

pub struct App<S: CategoryService> {
    service: S,
    events: EventSender,
    inbox: UnboundedReceiver<AppEvent>,
    pub state: AppState,
    // Banner timers; they outlive screens so messages survive navigation.
    timers: TaskScope,
    should_quit: bool,
}

impl<S: CategoryService> App<S> {
    /// Builds the app and enters `route`. Must run inside a tokio runtime.
    pub fn new(service: S, base_url: impl Into<String>, route: Route) -> Self {
        let (events, inbox) = mpsc::unbounded_channel();
        let mut app = Self {
            service,
            events,
            inbox,
            state: AppState {
                route: Route::Categories,
                editor: None,
                banners: Banners::default(),
                base_url: base_url.into(),
            },
            timers: TaskScope::default(),
            should_quit: false,
        };
        app.navigate(route);
        app
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(100);

        while !self.should_quit() {
            self.drain_events();

            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if term::poll(tick_rate)? {
                if let Event::Key(key) = term::read()? {
                    self.handle_key(key);
                }
            }
        }

        Ok(())
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.inbox.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.handle_action(map_key(key));
    }

    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => {
                if self.state.editor.is_some() {
                    self.navigate(Route::Categories);
                }
            }
            AppAction::Submit => {
                if let Some(editor) = self.state.editor.as_mut() {
                    editor.submit(&self.service, &self.events);
                }
            }
            AppAction::Backspace => {
                if let Some(editor) = self.state.editor.as_mut() {
                    editor.pop_char();
                }
            }
            AppAction::Input(ch) => match self.state.editor.as_mut() {
                Some(editor) => editor.push_char(ch),
                None if ch == 'q' || ch == 'Q' => self.should_quit = true,
                None => {}
            },
            AppAction::None => {}
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        let effects = match event {
            AppEvent::CategoryLoaded { ticket, result } => match self.state.editor.as_mut() {
                Some(editor) => editor.on_loaded(ticket, result),
                None => Vec::new(),
            },
            AppEvent::CategorySaved { ticket, result } => match self.state.editor.as_mut() {
                Some(editor) => editor.on_saved(ticket, result, &self.events),
                None => Vec::new(),
            },
            AppEvent::RedirectDue { ticket } => match self.state.editor.as_mut() {
                Some(editor) => editor.on_redirect_due(ticket),
                None => Vec::new(),
            },
            AppEvent::ClearBanner { kind, seq } => {
                self.state.banners.clear(kind, seq);
                Vec::new()
            }
        };
        self.apply(effects);
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::info!(path = %route.path(), "navigate");

        let effects = match &route {
            Route::Categories => {
                self.state.editor = None;
                Vec::new()
            }
            Route::EditCategory { categoria_id } => match &mut self.state.editor {
                Some(editor) => {
                    editor.set_categoria_id(categoria_id.clone(), &self.service, &self.events)
                }
                None => {
                    let (editor, effects) =
                        CategoryEditor::mount(categoria_id.clone(), &self.service, &self.events);
                    self.state.editor = Some(editor);
                    effects
                }
            },
        };
        self.state.route = route;
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Banner { kind, message, ttl } => {
                    let seq = self.state.banners.show(kind, message);
                    self.timers
                        .schedule(ttl, &self.events, AppEvent::ClearBanner { kind, seq });
                }
                Effect::Navigate(route) => self.navigate(route),
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use api_types::{
        category::{CategoryRequest, CategoryUpdate},
        error::ErrorBody,
    };

    use super::{
        banner::BannerKind,
        editor::{LOAD_ERROR_TTL, Phase, SUBMIT_ERROR_TTL, SUCCESS_TTL},
        messages,
        testing::{FakeService, Reply},
        *,
    };

    async fn pump(app: &mut App<FakeService>) {
        let event = app.inbox.recv().await.unwrap();
        app.handle_event(event);
    }

    fn type_text(app: &mut App<FakeService>, text: &str) {
        for ch in text.chars() {
            app.handle_action(AppAction::Input(ch));
        }
    }

    fn error_banner(app: &App<FakeService>) -> Option<&str> {
        app.state
            .banners
            .get(BannerKind::Error)
            .map(|banner| banner.message.as_str())
    }

    #[tokio::test(start_paused = true)]
    async fn load_failure_lands_on_listing_with_banner() {
        let service = FakeService::with_find(Reply::Fail(Some(ErrorBody {
            error: Some("Categoria não encontrada".to_string()),
            errors: None,
        })));
        let mut app = App::new(service, "http://test", Route::edit("5"));

        pump(&mut app).await;
        assert_eq!(app.state.route, Route::Categories);
        assert!(app.state.editor.is_none());
        assert_eq!(error_banner(&app), Some("Categoria não encontrada"));

        tokio::time::sleep(LOAD_ERROR_TTL).await;
        pump(&mut app).await;
        assert_eq!(error_banner(&app), None);
    }

    #[tokio::test]
    async fn invalid_id_redirects_immediately() {
        let service = FakeService::with_category("Books");
        let app = App::new(service.clone(), "http://test", Route::edit("abc"));

        assert_eq!(app.state.route, Route::Categories);
        assert_eq!(error_banner(&app), Some(messages::LOAD_FALLBACK));
        assert!(service.finds().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn save_returns_to_listing() {
        let service = FakeService::with_category("Livros");
        let mut app = App::new(service.clone(), "http://test", Route::edit("5"));
        pump(&mut app).await;

        for _ in 0.."Livros".len() {
            app.handle_action(AppAction::Backspace);
        }
        type_text(&mut app, "Books");
        app.handle_action(AppAction::Submit);
        pump(&mut app).await;

        assert_eq!(
            app.state
                .banners
                .get(BannerKind::Success)
                .map(|banner| banner.message.as_str()),
            Some(messages::UPDATE_SUCCESS)
        );
        assert_eq!(
            app.state.editor.as_ref().map(|editor| editor.phase()),
            Some(Phase::Done)
        );

        for _ in 0..2 {
            pump(&mut app).await;
        }
        assert_eq!(app.state.route, Route::Categories);
        assert_eq!(
            service.updates(),
            vec![CategoryRequest::Update(CategoryUpdate {
                id: 5,
                nome: "Books".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn submit_failure_keeps_editor_open() {
        let service = FakeService::with_category("Livros").failing_updates(Some(ErrorBody {
            error: Some("Nome duplicado".to_string()),
            errors: None,
        }));
        let mut app = App::new(service, "http://test", Route::edit("5"));
        pump(&mut app).await;

        app.handle_action(AppAction::Submit);
        pump(&mut app).await;

        assert_eq!(app.state.route, Route::edit("5"));
        assert_eq!(error_banner(&app), Some("Nome duplicado"));
        assert_eq!(
            app.state.editor.as_ref().map(|editor| editor.form().nome.as_str()),
            Some("Livros")
        );
    }

    fn success_banner(app: &App<FakeService>) -> Option<&str> {
        app.state
            .banners
            .get(BannerKind::Success)
            .map(|banner| banner.message.as_str())
    }

    #[tokio::test(start_paused = true)]
    async fn submit_failure_banner_clears_after_ttl() {
        let service = FakeService::with_category("Livros").failing_updates(None);
        let mut app = App::new(service, "http://test", Route::edit("5"));
        pump(&mut app).await;

        app.handle_action(AppAction::Submit);
        pump(&mut app).await;
        assert_eq!(error_banner(&app), Some(messages::SUBMIT_FALLBACK));

        tokio::time::sleep(SUBMIT_ERROR_TTL - Duration::from_millis(100)).await;
        app.drain_events();
        assert_eq!(error_banner(&app), Some(messages::SUBMIT_FALLBACK));

        tokio::time::sleep(Duration::from_millis(200)).await;
        app.drain_events();
        assert_eq!(error_banner(&app), None);
        assert_eq!(app.state.route, Route::edit("5"));
    }

    #[tokio::test(start_paused = true)]
    async fn success_banner_clears_after_ttl() {
        let service = FakeService::with_category("Livros");
        let mut app = App::new(service, "http://test", Route::edit("5"));
        pump(&mut app).await;

        app.handle_action(AppAction::Submit);
        pump(&mut app).await;
        assert_eq!(success_banner(&app), Some(messages::UPDATE_SUCCESS));

        tokio::time::sleep(SUCCESS_TTL - Duration::from_millis(100)).await;
        app.drain_events();
        assert_eq!(success_banner(&app), Some(messages::UPDATE_SUCCESS));

        tokio::time::sleep(Duration::from_millis(200)).await;
        app.drain_events();
        assert_eq!(success_banner(&app), None);
        assert_eq!(app.state.route, Route::Categories);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_load() {
        let service = FakeService::with_category("Books").delayed(Duration::from_secs(1));
        let mut app = App::new(service, "http://test", Route::edit("5"));

        app.handle_action(AppAction::Cancel);
        assert_eq!(app.state.route, Route::Categories);
        assert!(app.state.editor.is_none());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(app.inbox.try_recv().is_err());
    }

    #[tokio::test]
    async fn q_is_text_in_editor_and_quit_on_listing() {
        let service = FakeService::with_category("Books");
        let mut app = App::new(
            service.clone(),
            "http://test",
            Route::EditCategory { categoria_id: None },
        );
        type_text(&mut app, "q");
        assert!(!app.should_quit());
        assert_eq!(
            app.state.editor.as_ref().map(|editor| editor.form().nome.as_str()),
            Some("q")
        );

        let mut listing = App::new(service, "http://test", Route::Categories);
        listing.handle_action(AppAction::Input('q'));
        assert!(listing.should_quit());
    }

    #[tokio::test]
    async fn switching_category_reloads() {
        let service = FakeService::with_category("Books");
        let mut app = App::new(service.clone(), "http://test", Route::edit("5"));
        pump(&mut app).await;

        app.navigate(Route::edit("6"));
        pump(&mut app).await;

        assert_eq!(service.finds(), vec![5, 6]);
        assert_eq!(
            app.state
                .editor
                .as_ref()
                .and_then(|editor| editor.loaded())
                .and_then(|category| category.id),
            Some(6)
        );
    }
}
