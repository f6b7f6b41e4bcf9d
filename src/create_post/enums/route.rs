#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}

impl Route {
    pub fn value(&self) -> String {
        match *self {
            Route::Home => "/".to_string(),
        }
    }
}
