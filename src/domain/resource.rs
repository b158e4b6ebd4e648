use crate::domain::model::{
    Customer, EntityId, LoanMovie, Movie, NewCustomer, NewLoanMovie, NewMovie, NewTopic, Topic,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A backend-managed entity type addressable by `/{PATH}` and `/{PATH}/{id}`.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The entity without its backend-assigned id, as sent on create.
    type Draft: Serialize + Send + Sync;

    const PATH: &'static str;
    /// Spanish noun used in user-facing messages.
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    fn id(&self) -> EntityId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Action {
    pub fn method(&self) -> reqwest::Method {
        match self {
            Action::Create => reqwest::Method::POST,
            Action::List | Action::Get => reqwest::Method::GET,
            Action::Update => reqwest::Method::PUT,
            Action::Delete => reqwest::Method::DELETE,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Action::Create => "crear",
            Action::List | Action::Get => "obtener",
            Action::Update => "actualizar",
            Action::Delete => "eliminar",
        }
    }

    /// The localized message shown when this action fails on `R`.
    pub fn failure_message<R: Resource>(&self) -> String {
        match self {
            Action::List => format!("Error al {} {}", self.verb(), R::PLURAL),
            Action::Get => format!("Error al {} {} por ID", self.verb(), R::SINGULAR),
            _ => format!("Error al {} {}", self.verb(), R::SINGULAR),
        }
    }
}

impl Resource for Movie {
    type Draft = NewMovie;
    const PATH: &'static str = "movies";
    const SINGULAR: &'static str = "película";
    const PLURAL: &'static str = "películas";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Resource for Customer {
    type Draft = NewCustomer;
    const PATH: &'static str = "customers";
    const SINGULAR: &'static str = "cliente";
    const PLURAL: &'static str = "clientes";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Resource for Topic {
    type Draft = NewTopic;
    const PATH: &'static str = "topics";
    const SINGULAR: &'static str = "tema";
    const PLURAL: &'static str = "temas";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Resource for LoanMovie {
    type Draft = NewLoanMovie;
    const PATH: &'static str = "loans";
    const SINGULAR: &'static str = "préstamo";
    const PLURAL: &'static str = "préstamos";

    fn id(&self) -> EntityId {
        self.id
    }
}
