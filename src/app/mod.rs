//! 应用层：路由 + 两个表格页

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::kernel::services::ports::KeyValueStore;

pub mod data;
pub mod page;
mod render;
pub mod route;
pub mod theme;

pub use page::{PageEvent, TablePage};
pub use route::Route;
pub use theme::UiTheme;

const DASHBOARD_ITEMS: [Route; 2] = [Route::Table, Route::ProTable];

pub struct App<S: KeyValueStore> {
    route: Route,
    dashboard_selected: usize,
    table: TablePage<S>,
    pro_table: TablePage<S>,
    theme: UiTheme,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// `storage` is called once per page.
    pub fn new(route: Route, theme: UiTheme, mut storage: impl FnMut() -> S) -> Self {
        let table = TablePage::new(
            "Plain table",
            data::TABLE_STORAGE_KEY,
            data::table_columns(),
            data::people(),
            storage(),
        );
        let pro_table = TablePage::new(
            "ProTable",
            data::PRO_TABLE_STORAGE_KEY,
            data::pro_table_columns(),
            data::people(),
            storage(),
        );

        Self {
            route,
            dashboard_selected: 0,
            table,
            pro_table,
            theme,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::debug!(from = self.route.path(), to = route.path(), "navigate");
            self.route = route;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn dashboard_selected(&self) -> usize {
        self.dashboard_selected
    }

    pub fn page(&self, route: Route) -> Option<&TablePage<S>> {
        match route {
            Route::Table => Some(&self.table),
            Route::ProTable => Some(&self.pro_table),
            Route::Dashboard => None,
        }
    }

    pub fn page_mut(&mut self, route: Route) -> Option<&mut TablePage<S>> {
        match route {
            Route::Table => Some(&mut self.table),
            Route::ProTable => Some(&mut self.pro_table),
            Route::Dashboard => None,
        }
    }

    /// Returns whether a redraw is needed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        let route = self.route;
        let Some(page) = self.page_mut(route) else {
            return self.handle_dashboard_key(key);
        };

        match page.handle_key(key) {
            PageEvent::Ignored => false,
            PageEvent::Changed => true,
            PageEvent::Back => {
                self.navigate(Route::Dashboard);
                true
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> bool {
        let prev = self.dashboard_selected;
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
                self.dashboard_selected = self.dashboard_selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                self.dashboard_selected = (self.dashboard_selected + 1).min(DASHBOARD_ITEMS.len() - 1);
            }
            KeyCode::Enter => {
                self.navigate(DASHBOARD_ITEMS[self.dashboard_selected]);
                return true;
            }
            KeyCode::Char('1') => {
                self.navigate(Route::Table);
                return true;
            }
            KeyCode::Char('2') => {
                self.navigate(Route::ProTable);
                return true;
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                return true;
            }
            _ => {}
        }
        prev != self.dashboard_selected
    }

    pub fn render(&self, frame: &mut Frame) {
        render::render_app(self, frame);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/app.rs"]
mod tests;
