use crate::adapters::http::BackendClient;
use crate::domain::model::{EntityId, NewTopic, Topic};
use crate::domain::ports::TopicRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpTopicRepository {
    backend: BackendClient,
}

impl HttpTopicRepository {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl TopicRepository for HttpTopicRepository {
    async fn create_topic(&self, topic: &NewTopic) -> Result<Topic> {
        self.backend.create::<Topic>(topic).await
    }

    async fn delete_topic(&self, id: EntityId) -> Result<()> {
        self.backend.delete::<Topic>(id).await
    }

    async fn get_all_topics(&self) -> Result<Vec<Topic>> {
        self.backend.list::<Topic>().await
    }

    async fn get_topic_by_id(&self, id: EntityId) -> Result<Option<Topic>> {
        self.backend.fetch::<Topic>(id).await
    }

    async fn update_topic(&self, topic: &Topic) -> Result<Topic> {
        self.backend.update(topic).await
    }
}
