use std::fmt;

/// A presentation view the front end renders for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Movies,
    Customers,
    Topics,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Inicio",
            View::Movies => "Películas",
            View::Customers => "Clientes",
            View::Topics => "Temas",
        }
    }

    /// Name of the service the view consumes, if any.
    pub fn service(&self) -> Option<&'static str> {
        match self {
            View::Home => None,
            View::Movies => Some("MovieService"),
            View::Customers => Some("CustomerService"),
            View::Topics => Some("TopicService"),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: [Route; 4] = [
    Route {
        path: "/",
        view: View::Home,
    },
    Route {
        path: "/movies",
        view: View::Movies,
    },
    Route {
        path: "/customers",
        view: View::Customers,
    },
    Route {
        path: "/topics",
        view: View::Topics,
    },
];

pub fn routes() -> &'static [Route] {
    &ROUTES
}

/// Exact-match lookup. A single trailing slash is ignored.
pub fn resolve(path: &str) -> Option<View> {
    let path = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    };

    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.view)
}
