use crate::app::RentalServices;
use crate::config::cli::{Command, ResourceCommand};
use crate::core::{
    Customer, CustomerService, EntityId, LoanMovie, LoanService, Movie, MovieService,
    NewCustomer, NewLoanMovie, NewMovie, NewTopic, Result, Topic, TopicService,
};
use crate::domain::resource::Resource;
use crate::router::{self, Route, View};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Json(serde_json::Value),
    NotFound { resource: &'static str, id: EntityId },
    Deleted { resource: &'static str, id: EntityId },
    Routes(Vec<Route>),
    Resolved { path: String, view: Option<View> },
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            CommandOutput::NotFound { resource, id } => {
                write!(f, "No se encontró {} con ID {}", resource, id)
            }
            CommandOutput::Deleted { resource, id } => {
                write!(f, "Se eliminó {} con ID {}", resource, id)
            }
            CommandOutput::Routes(routes) => {
                let lines: Vec<String> = routes
                    .iter()
                    .map(|route| format!("{:<12}{}", route.path, route.view))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            CommandOutput::Resolved { path, view } => match view {
                Some(view) => write!(f, "{} -> {}", path, view),
                None => write!(f, "{} -> (sin vista)", path),
            },
        }
    }
}

pub async fn execute(services: &RentalServices, command: Command) -> Result<CommandOutput> {
    match command {
        Command::Movies(command) => run_movies(&services.movies, command).await,
        Command::Customers(command) => run_customers(&services.customers, command).await,
        Command::Topics(command) => run_topics(&services.topics, command).await,
        Command::Loans(command) => run_loans(&services.loans, command).await,
        Command::Routes { path } => Ok(run_routes(path)),
    }
}

fn run_routes(path: Option<String>) -> CommandOutput {
    match path {
        Some(path) => {
            let view = router::resolve(&path);
            CommandOutput::Resolved { path, view }
        }
        None => CommandOutput::Routes(router::routes().to_vec()),
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

fn render<T: Serialize>(value: &T) -> Result<CommandOutput> {
    Ok(CommandOutput::Json(serde_json::to_value(value)?))
}

fn found<R: Resource>(id: EntityId, entity: Option<R>) -> Result<CommandOutput> {
    match entity {
        Some(entity) => render(&entity),
        None => Ok(CommandOutput::NotFound {
            resource: R::SINGULAR,
            id,
        }),
    }
}

fn deleted<R: Resource>(id: EntityId) -> CommandOutput {
    CommandOutput::Deleted {
        resource: R::SINGULAR,
        id,
    }
}

pub async fn run_movies<S: MovieService + ?Sized>(
    service: &S,
    command: ResourceCommand,
) -> Result<CommandOutput> {
    match command {
        ResourceCommand::List => render(&service.get_all_movies().await?),
        ResourceCommand::Get { id } => found(id, service.get_movie_by_id(id).await?),
        ResourceCommand::Create { json } => {
            let draft: NewMovie = parse(&json)?;
            render(&service.create_movie(&draft).await?)
        }
        ResourceCommand::Update { id, json } => {
            let draft: NewMovie = parse(&json)?;
            render(&service.update_movie(&draft.with_id(id)).await?)
        }
        ResourceCommand::Delete { id } => {
            service.delete_movie(id).await?;
            Ok(deleted::<Movie>(id))
        }
    }
}

pub async fn run_customers<S: CustomerService + ?Sized>(
    service: &S,
    command: ResourceCommand,
) -> Result<CommandOutput> {
    match command {
        ResourceCommand::List => render(&service.get_all_customers().await?),
        ResourceCommand::Get { id } => found(id, service.get_customer_by_id(id).await?),
        ResourceCommand::Create { json } => {
            let draft: NewCustomer = parse(&json)?;
            render(&service.create_customer(&draft).await?)
        }
        ResourceCommand::Update { id, json } => {
            let draft: NewCustomer = parse(&json)?;
            render(&service.update_customer(&draft.with_id(id)).await?)
        }
        ResourceCommand::Delete { id } => {
            service.delete_customer(id).await?;
            Ok(deleted::<Customer>(id))
        }
    }
}

pub async fn run_topics<S: TopicService + ?Sized>(
    service: &S,
    command: ResourceCommand,
) -> Result<CommandOutput> {
    match command {
        ResourceCommand::List => render(&service.get_all_topics().await?),
        ResourceCommand::Get { id } => found(id, service.get_topic_by_id(id).await?),
        ResourceCommand::Create { json } => {
            let draft: NewTopic = parse(&json)?;
            render(&service.create_topic(&draft).await?)
        }
        ResourceCommand::Update { id, json } => {
            let draft: NewTopic = parse(&json)?;
            render(&service.update_topic(&draft.with_id(id)).await?)
        }
        ResourceCommand::Delete { id } => {
            service.delete_topic(id).await?;
            Ok(deleted::<Topic>(id))
        }
    }
}

pub async fn run_loans<S: LoanService + ?Sized>(
    service: &S,
    command: ResourceCommand,
) -> Result<CommandOutput> {
    match command {
        ResourceCommand::List => render(&service.get_all_loans().await?),
        ResourceCommand::Get { id } => found(id, service.get_loan_by_id(id).await?),
        ResourceCommand::Create { json } => {
            let draft: NewLoanMovie = parse(&json)?;
            render(&service.create_loan(&draft).await?)
        }
        ResourceCommand::Update { id, json } => {
            let draft: NewLoanMovie = parse(&json)?;
            render(&service.update_loan(&draft.with_id(id)).await?)
        }
        ResourceCommand::Delete { id } => {
            service.delete_loan(id).await?;
            Ok(deleted::<LoanMovie>(id))
        }
    }
}
