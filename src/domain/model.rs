use crate::domain::wire;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EntityId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(deserialize_with = "wire::number")]
    pub id: EntityId,
    pub title: String,
    /// Zero when the row only names its topic.
    #[serde(default, deserialize_with = "wire::number")]
    pub topic_id: EntityId,
    /// The joined topic name; some rows send it as `topic`.
    #[serde(
        default,
        alias = "topic",
        deserialize_with = "wire::text",
        skip_serializing_if = "String::is_empty"
    )]
    pub topic_name: String,
    #[serde(deserialize_with = "wire::number")]
    pub year: i32,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "wire::flag")]
    pub available: bool,
}

/// A movie that has not been assigned an id by the backend yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    /// Zero when the row only names its topic.
    #[serde(default, deserialize_with = "wire::number")]
    pub topic_id: EntityId,
    /// The joined topic name; some rows send it as `topic`.
    #[serde(
        default,
        alias = "topic",
        deserialize_with = "wire::text",
        skip_serializing_if = "String::is_empty"
    )]
    pub topic_name: String,
    #[serde(deserialize_with = "wire::number")]
    pub year: i32,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "wire::flag")]
    pub available: bool,
}

impl NewMovie {
    pub fn with_id(self, id: EntityId) -> Movie {
        Movie {
            id,
            title: self.title,
            topic_id: self.topic_id,
            topic_name: self.topic_name,
            year: self.year,
            summary: self.summary,
            available: self.available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "wire::number")]
    pub id: EntityId,
    #[serde(alias = "firstName")]
    pub name: String,
    #[serde(alias = "lastName")]
    pub lastname: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "wire::flag")]
    pub state: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(alias = "firstName")]
    pub name: String,
    #[serde(alias = "lastName")]
    pub lastname: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "wire::flag")]
    pub state: bool,
}

impl NewCustomer {
    pub fn with_id(self, id: EntityId) -> Customer {
        Customer {
            id,
            name: self.name,
            lastname: self.lastname,
            phone: self.phone,
            email: self.email,
            state: self.state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(deserialize_with = "wire::number")]
    pub id: EntityId,
    #[serde(alias = "name")]
    pub name_topic: String,
    #[serde(default, deserialize_with = "wire::flag")]
    pub state: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTopic {
    #[serde(alias = "name")]
    pub name_topic: String,
    #[serde(default, deserialize_with = "wire::flag")]
    pub state: bool,
}

impl NewTopic {
    pub fn with_id(self, id: EntityId) -> Topic {
        Topic {
            id,
            name_topic: self.name_topic,
            state: self.state,
        }
    }
}

/// A loan row as the backend reports it: the movie, customer and topic names
/// are joined in server-side and are not checked against their ids here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanMovie {
    #[serde(deserialize_with = "wire::number")]
    pub id: EntityId,
    #[serde(deserialize_with = "wire::date")]
    pub date_loan: NaiveDate,
    #[serde(default, deserialize_with = "wire::optional_date")]
    pub date_return: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::number")]
    pub movie_id: EntityId,
    #[serde(default)]
    pub movie_name: String,
    #[serde(deserialize_with = "wire::number")]
    pub client_id: EntityId,
    #[serde(default)]
    pub client_name: String,
    #[serde(deserialize_with = "wire::number")]
    pub topic_id: EntityId,
    #[serde(default)]
    pub topic_name: String,
    #[serde(default, deserialize_with = "wire::flag")]
    pub state: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLoanMovie {
    #[serde(deserialize_with = "wire::date")]
    pub date_loan: NaiveDate,
    #[serde(default, deserialize_with = "wire::optional_date")]
    pub date_return: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::number")]
    pub movie_id: EntityId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub movie_name: String,
    #[serde(deserialize_with = "wire::number")]
    pub client_id: EntityId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_name: String,
    #[serde(deserialize_with = "wire::number")]
    pub topic_id: EntityId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub topic_name: String,
    #[serde(default, deserialize_with = "wire::flag")]
    pub state: bool,
}

impl NewLoanMovie {
    pub fn with_id(self, id: EntityId) -> LoanMovie {
        LoanMovie {
            id,
            date_loan: self.date_loan,
            date_return: self.date_return,
            movie_id: self.movie_id,
            movie_name: self.movie_name,
            client_id: self.client_id,
            client_name: self.client_name,
            topic_id: self.topic_id,
            topic_name: self.topic_name,
            state: self.state,
        }
    }
}
