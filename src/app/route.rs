#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Table,
    ProTable,
}

impl Route {
    /// Unknown paths redirect to the dashboard.
    pub fn parse(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            "/table" | "table" => Route::Table,
            "/pro-table" | "pro-table" => Route::ProTable,
            _ => Route::Dashboard,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Table => "/table",
            Route::ProTable => "/pro-table",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Table => "Plain table",
            Route::ProTable => "ProTable",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/route.rs"]
mod tests;
